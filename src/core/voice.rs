use crate::core::{Dictation, View};

pub const VOICE_UNSUPPORTED_TEXT: &str = "Voice input not supported";

pub struct VoiceInput<D: Dictation> {
    dictation: D,
}

impl<D: Dictation> VoiceInput<D> {
    pub fn new(dictation: D) -> Self {
        Self { dictation }
    }

    /// Listens once. Returns the transcript written into the symptoms field.
    pub async fn start<V: View + ?Sized>(&mut self, view: &mut V) -> Option<String> {
        if !self.dictation.is_supported() {
            view.alert(VOICE_UNSUPPORTED_TEXT);
            return None;
        }

        tracing::debug!("🎤 Listening for symptoms");
        match self.dictation.recognize().await {
            Ok(Some(transcript)) => {
                view.set_symptoms(&transcript);
                Some(transcript)
            }
            Ok(None) => {
                tracing::debug!("Dictation ended without a result");
                None
            }
            Err(e) => {
                tracing::error!("❌ Dictation failed: {}", e);
                None
            }
        }
    }
}

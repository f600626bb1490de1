use crate::core::form_controller::{FormController, SubmitOutcome};
use crate::core::hospital::HospitalLocator;
use crate::core::pointer::PointerGlow;
use crate::core::report::{ReportDownload, REPORT_LOCKED_TEXT};
use crate::core::theme::{TextSizeToggle, ThemeToggle};
use crate::core::voice::VoiceInput;
use crate::core::{AnalysisService, Dictation, Geolocation, PreferenceStore, Storage, View};
use crate::domain::model::{PointerEvent, TextSize, Theme};

/// All handlers bound to one view. Construction does nothing visible;
/// [`CareBridgeApp::load`] is the page-load step.
pub struct CareBridgeApp<S, St, P, D, G>
where
    S: AnalysisService + Clone,
    St: Storage,
    P: PreferenceStore,
    D: Dictation,
    G: Geolocation,
{
    form: FormController<S>,
    report: ReportDownload<S, St>,
    theme: ThemeToggle<P>,
    text_size: TextSizeToggle,
    voice: VoiceInput<D>,
    hospital: HospitalLocator<G>,
    glow: PointerGlow,
    report_ready: bool,
}

impl<S, St, P, D, G> CareBridgeApp<S, St, P, D, G>
where
    S: AnalysisService + Clone,
    St: Storage,
    P: PreferenceStore,
    D: Dictation,
    G: Geolocation,
{
    pub fn new(service: S, storage: St, preferences: P, dictation: D, geolocation: G) -> Self {
        Self {
            form: FormController::new(service.clone()),
            report: ReportDownload::new(service, storage),
            theme: ThemeToggle::new(preferences),
            text_size: TextSizeToggle::new(),
            voice: VoiceInput::new(dictation),
            hospital: HospitalLocator::new(geolocation),
            glow: PointerGlow::new(true),
            report_ready: false,
        }
    }

    pub fn with_report_filename(mut self, filename: impl Into<String>) -> Self {
        self.report = self.report.with_filename(filename);
        self
    }

    pub fn with_glow(mut self, enabled: bool) -> Self {
        self.glow = PointerGlow::new(enabled);
        self
    }

    /// 頁面載入：還原主題，報告按鈕在第一次分析成功前保持停用
    pub fn load<V: View + ?Sized>(&mut self, view: &mut V) {
        let theme = self.theme.restore(view);
        view.set_report_enabled(false);
        tracing::debug!("CareBridge loaded with {} theme", theme);
    }

    pub async fn submit<V: View + ?Sized>(&mut self, view: &mut V) -> SubmitOutcome {
        let outcome = self.form.submit(view).await;
        if matches!(outcome, SubmitOutcome::Rendered(_)) {
            self.report_ready = true;
        }
        outcome
    }

    /// 報告按鈕停用時（尚未有成功的分析）不送出任何請求
    pub async fn download_report<V: View + ?Sized>(&mut self, view: &mut V) -> Option<String> {
        if !self.report_ready {
            tracing::debug!("Report requested before any successful analysis");
            view.alert(REPORT_LOCKED_TEXT);
            return None;
        }
        self.report.generate(view).await
    }

    pub fn toggle_theme<V: View + ?Sized>(&mut self, view: &mut V) -> Theme {
        self.theme.toggle(view)
    }

    pub fn toggle_text_size<V: View + ?Sized>(&mut self, view: &mut V) -> TextSize {
        self.text_size.toggle(view)
    }

    pub async fn start_voice<V: View + ?Sized>(&mut self, view: &mut V) -> Option<String> {
        self.voice.start(view).await
    }

    pub async fn find_hospital<V: View + ?Sized>(&self, view: &mut V) -> Option<String> {
        self.hospital.locate(view).await
    }

    pub fn on_pointer<V: View + ?Sized>(&self, view: &mut V, event: &PointerEvent) {
        self.glow.on_pointer(view, event);
    }

    pub fn theme(&self) -> Theme {
        self.theme.current()
    }

    pub fn preferences(&self) -> &P {
        self.theme.store()
    }

    pub fn text_size(&self) -> TextSize {
        self.text_size.current()
    }
}

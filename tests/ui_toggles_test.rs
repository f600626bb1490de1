mod common;

use carebridge::core::hospital::HospitalLocator;
use carebridge::core::pointer::PointerGlow;
use carebridge::core::theme::{TextSizeToggle, ThemeToggle, THEME_KEY};
use carebridge::core::voice::{VoiceInput, VOICE_UNSUPPORTED_TEXT};
use carebridge::core::PreferenceStore;
use carebridge::domain::model::{Coordinates, Point, PointerEvent, TextSize, Theme};
use carebridge::{FixedLocation, JsonFilePreferences, MemoryPreferences, NoDictation};
use common::{DeniedLocation, RecordingView, ScriptedDictation};
use tempfile::TempDir;

#[test]
fn test_theme_toggle_twice_restores_state() {
    let mut theme = ThemeToggle::new(MemoryPreferences::new());
    let mut view = RecordingView::default();

    let original = theme.restore(&mut view);
    assert_eq!(original, Theme::Dark);

    assert_eq!(theme.toggle(&mut view), Theme::Light);
    assert_eq!(
        theme.store().get_item(THEME_KEY).unwrap().as_deref(),
        Some("light")
    );

    assert_eq!(theme.toggle(&mut view), Theme::Dark);
    assert_eq!(view.theme, Some(original));
    assert_eq!(
        theme.store().get_item(THEME_KEY).unwrap().as_deref(),
        Some("dark")
    );
}

#[test]
fn test_restore_applies_stored_light_theme() {
    let mut theme = ThemeToggle::new(MemoryPreferences::with_item(THEME_KEY, "light"));
    let mut view = RecordingView::default();

    assert_eq!(theme.restore(&mut view), Theme::Light);
    assert_eq!(view.theme, Some(Theme::Light));
}

#[test]
fn test_theme_survives_restart_with_file_store() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("carebridge-preferences.json");

    {
        let mut theme = ThemeToggle::new(JsonFilePreferences::new(&path));
        let mut view = RecordingView::default();
        theme.restore(&mut view);
        theme.toggle(&mut view);
    }

    let mut theme = ThemeToggle::new(JsonFilePreferences::new(&path));
    let mut view = RecordingView::default();
    assert_eq!(theme.restore(&mut view), Theme::Light);
}

#[test]
fn test_corrupt_preference_file_falls_back_to_dark() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("prefs.json");
    std::fs::write(&path, "{ not json").unwrap();

    let mut theme = ThemeToggle::new(JsonFilePreferences::new(&path));
    let mut view = RecordingView::default();
    assert_eq!(theme.restore(&mut view), Theme::Dark);
}

#[test]
fn test_text_size_toggle() {
    let mut text = TextSizeToggle::new();
    let mut view = RecordingView::default();

    assert_eq!(text.toggle(&mut view), TextSize::Large);
    assert_eq!(view.text_size, Some(TextSize::Large));
    assert_eq!(text.toggle(&mut view), TextSize::Normal);
    assert_eq!(text.current(), TextSize::Normal);
}

#[tokio::test]
async fn test_voice_unsupported_alerts() {
    let mut voice = VoiceInput::new(NoDictation);
    let mut view = RecordingView::with_input("typed", "40");

    assert_eq!(voice.start(&mut view).await, None);
    assert_eq!(view.alerts, vec![VOICE_UNSUPPORTED_TEXT]);
    assert_eq!(view.symptoms, "typed");
}

#[tokio::test]
async fn test_voice_transcript_overwrites_symptoms() {
    let mut voice = VoiceInput::new(ScriptedDictation::saying("shortness of breath"));
    let mut view = RecordingView::with_input("typed", "40");

    let transcript = voice.start(&mut view).await;

    assert_eq!(transcript.as_deref(), Some("shortness of breath"));
    assert_eq!(view.symptoms, "shortness of breath");
    assert!(view.alerts.is_empty());
}

#[tokio::test]
async fn test_voice_without_result_keeps_field() {
    let mut voice = VoiceInput::new(ScriptedDictation::silent());
    let mut view = RecordingView::with_input("typed", "40");

    assert_eq!(voice.start(&mut view).await, None);
    assert_eq!(view.symptoms, "typed");
}

#[test]
fn test_pointer_glow_follows_mouse_and_first_touch() {
    let glow = PointerGlow::new(true);
    let mut view = RecordingView::default();

    glow.on_pointer(&mut view, &PointerEvent::Mouse { x: 12.0, y: 40.5 });
    assert_eq!(view.glow, Some((12.0, 40.5)));

    glow.on_pointer(
        &mut view,
        &PointerEvent::Touch {
            touches: vec![Point { x: 3.0, y: 4.0 }, Point { x: 99.0, y: 99.0 }],
        },
    );
    assert_eq!(view.glow, Some((3.0, 4.0)));

    glow.on_pointer(&mut view, &PointerEvent::Touch { touches: vec![] });
    assert_eq!(view.glow, Some((3.0, 4.0)));
}

#[test]
fn test_disabled_pointer_glow_is_noop() {
    let glow = PointerGlow::new(false);
    let mut view = RecordingView::default();

    glow.on_pointer(&mut view, &PointerEvent::Mouse { x: 1.0, y: 1.0 });
    assert_eq!(view.glow, None);
}

#[tokio::test]
async fn test_hospital_locator_opens_nearby_search() {
    let locator = HospitalLocator::new(FixedLocation::new(Some(Coordinates {
        latitude: 19.076,
        longitude: 72.8777,
    })));
    let mut view = RecordingView::default();

    let url = locator.locate(&mut view).await;

    let expected = "https://www.google.com/maps/search/?api=1&query=hospital+near+19.076,72.8777";
    assert_eq!(url.as_deref(), Some(expected));
    assert_eq!(view.opened, vec![expected]);
}

#[tokio::test]
async fn test_hospital_locator_without_position() {
    let mut view = RecordingView::default();

    let unavailable = HospitalLocator::new(FixedLocation::default());
    assert_eq!(unavailable.locate(&mut view).await, None);

    let denied = HospitalLocator::new(DeniedLocation);
    assert_eq!(denied.locate(&mut view).await, None);

    assert!(view.opened.is_empty());
}

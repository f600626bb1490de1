#![allow(dead_code)]

use async_trait::async_trait;
use carebridge::core::{Dictation, Geolocation, Storage, View};
use carebridge::domain::model::{Coordinates, TextSize, Theme};
use carebridge::{CareBridgeError, Result};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// View double that remembers every update in order.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub symptoms: String,
    pub age: String,
    pub alerts: Vec<String>,
    pub risk_text: Option<String>,
    pub risk_class: Option<String>,
    pub explanation: Option<String>,
    pub risk_bar: Option<u8>,
    pub hospital_link: Option<String>,
    pub analyze_enabled: bool,
    pub report_enabled: bool,
    pub report_label: Option<String>,
    pub theme: Option<Theme>,
    pub text_size: Option<TextSize>,
    pub glow: Option<(f64, f64)>,
    pub opened: Vec<String>,
    pub history: Vec<String>,
}

impl RecordingView {
    pub fn with_input(symptoms: &str, age: &str) -> Self {
        Self {
            symptoms: symptoms.to_string(),
            age: age.to_string(),
            analyze_enabled: true,
            report_enabled: true,
            ..Self::default()
        }
    }

    pub fn saw(&self, event: &str) -> bool {
        self.history.iter().any(|e| e == event)
    }
}

impl View for RecordingView {
    fn symptoms(&self) -> String {
        self.symptoms.clone()
    }

    fn age(&self) -> String {
        self.age.clone()
    }

    fn set_symptoms(&mut self, text: &str) {
        self.symptoms = text.to_string();
        self.history.push(format!("symptoms={}", text));
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
        self.history.push(format!("alert={}", message));
    }

    fn set_risk_text(&mut self, text: &str) {
        self.risk_text = Some(text.to_string());
        self.history.push(format!("risk_text={}", text));
    }

    fn set_risk_class(&mut self, class: &str) {
        self.risk_class = Some(class.to_string());
        self.history.push(format!("risk_class={}", class));
    }

    fn set_explanation(&mut self, text: &str) {
        self.explanation = Some(text.to_string());
        self.history.push(format!("explanation={}", text));
    }

    fn set_risk_bar(&mut self, width_percent: u8) {
        self.risk_bar = Some(width_percent);
        self.history.push(format!("risk_bar={}", width_percent));
    }

    fn show_hospital_link(&mut self, url: &str) {
        self.hospital_link = Some(url.to_string());
        self.history.push(format!("hospital_link={}", url));
    }

    fn set_analyze_enabled(&mut self, enabled: bool) {
        self.analyze_enabled = enabled;
        self.history.push(format!("analyze_enabled={}", enabled));
    }

    fn set_report_enabled(&mut self, enabled: bool) {
        self.report_enabled = enabled;
        self.history.push(format!("report_enabled={}", enabled));
    }

    fn set_report_label(&mut self, label: &str) {
        self.report_label = Some(label.to_string());
        self.history.push(format!("report_label={}", label));
    }

    fn apply_theme(&mut self, theme: Theme) {
        self.theme = Some(theme);
        self.history.push(format!("theme={}", theme));
    }

    fn apply_text_size(&mut self, size: TextSize) {
        self.text_size = Some(size);
        self.history.push(format!("text_size={:?}", size));
    }

    fn move_glow(&mut self, x: f64, y: f64) {
        self.glow = Some((x, y));
    }

    fn open_url(&mut self, url: &str) {
        self.opened.push(url.to_string());
    }
}

/// In-memory storage for downloaded reports
#[derive(Debug, Clone, Default)]
pub struct MockStorage {
    files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    fail_writes: bool,
}

impl MockStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn get_file(&self, path: &str) -> Option<Vec<u8>> {
        self.files.lock().unwrap().get(path).cloned()
    }
}

impl Storage for MockStorage {
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<String> {
        if self.fail_writes {
            return Err(CareBridgeError::IoError(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only",
            )));
        }
        self.files
            .lock()
            .unwrap()
            .insert(path.to_string(), data.to_vec());
        Ok(format!("memory://{}", path))
    }
}

/// Dictation double returning a scripted transcript
#[derive(Debug, Clone)]
pub struct ScriptedDictation {
    pub transcript: Option<String>,
}

impl ScriptedDictation {
    pub fn saying(text: &str) -> Self {
        Self {
            transcript: Some(text.to_string()),
        }
    }

    pub fn silent() -> Self {
        Self { transcript: None }
    }
}

#[async_trait]
impl Dictation for ScriptedDictation {
    fn is_supported(&self) -> bool {
        true
    }

    async fn recognize(&self) -> Result<Option<String>> {
        Ok(self.transcript.clone())
    }
}

/// Geolocation that is present but always fails
#[derive(Debug, Clone, Copy, Default)]
pub struct DeniedLocation;

#[async_trait]
impl Geolocation for DeniedLocation {
    fn is_available(&self) -> bool {
        true
    }

    async fn current_position(&self) -> Result<Coordinates> {
        Err(CareBridgeError::CapabilityError {
            message: "User denied Geolocation".to_string(),
        })
    }
}

pub fn analysis_body(risk: &str, hospital_map: Option<&str>) -> serde_json::Value {
    let mut body = serde_json::json!({
        "risk": risk,
        "confidence": 82,
        "explanation": "Fever detected | Cough symptoms present. \
            Consider consulting a doctor if symptoms persist",
        "sustainability": 40
    });
    if let Some(url) = hospital_map {
        body["hospital_map"] = serde_json::Value::String(url.to_string());
    }
    body
}

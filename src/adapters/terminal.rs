use crate::core::View;
use crate::domain::model::{TextSize, Theme};
use std::io::Write;

const BAR_CELLS: usize = 20;

/// Line-oriented rendering of the form and its result panel.
pub struct TerminalView<W: Write> {
    out: W,
    symptoms: String,
    age: String,
    risk_class: String,
    analyze_enabled: bool,
    report_enabled: bool,
    report_label: String,
    hospital_link: Option<String>,
    theme: Theme,
    text_size: TextSize,
}

impl TerminalView<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            symptoms: String::new(),
            age: String::new(),
            risk_class: String::new(),
            analyze_enabled: true,
            report_enabled: true,
            report_label: crate::core::report::REPORT_IDLE_LABEL.to_string(),
            hospital_link: None,
            theme: Theme::default(),
            text_size: TextSize::default(),
        }
    }

    pub fn with_input(mut self, symptoms: &str, age: &str) -> Self {
        self.symptoms = symptoms.to_string();
        self.age = age.to_string();
        self
    }

    /// 使用者直接輸入，不經過畫面回顯
    pub fn enter_symptoms(&mut self, symptoms: &str) {
        self.symptoms = symptoms.to_string();
    }

    pub fn enter_age(&mut self, age: &str) {
        self.age = age.to_string();
    }

    pub fn hospital_link(&self) -> Option<&str> {
        self.hospital_link.as_deref()
    }

    pub fn is_report_enabled(&self) -> bool {
        self.report_enabled
    }

    pub fn is_analyze_enabled(&self) -> bool {
        self.analyze_enabled
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) {
        // 終端寫入失敗沒有其他地方可以回報
        if let Err(e) = writeln!(self.out, "{}", text) {
            tracing::warn!("Could not write to terminal: {}", e);
        }
    }

    fn risk_marker(&self) -> &'static str {
        match self.risk_class.as_str() {
            "risk-low" => "🟢",
            "risk-medium" => "🟡",
            "risk-high" => "🔴",
            _ => "•",
        }
    }
}

pub fn render_bar(width_percent: u8) -> String {
    let filled = (usize::from(width_percent.min(100)) * BAR_CELLS) / 100;
    format!(
        "[{}{}] {}%",
        "#".repeat(filled),
        "-".repeat(BAR_CELLS - filled),
        width_percent
    )
}

impl<W: Write> View for TerminalView<W> {
    fn symptoms(&self) -> String {
        self.symptoms.clone()
    }

    fn age(&self) -> String {
        self.age.clone()
    }

    fn set_symptoms(&mut self, text: &str) {
        self.symptoms = text.to_string();
        self.line(&format!("🎤 Symptoms: {}", text));
    }

    fn alert(&mut self, message: &str) {
        self.line(&format!("⚠️  {}", message));
    }

    fn set_risk_text(&mut self, text: &str) {
        self.line(&format!("🩺 {}", text));
    }

    fn set_risk_class(&mut self, class: &str) {
        self.risk_class = class.to_string();
    }

    fn set_explanation(&mut self, text: &str) {
        let text = match self.text_size {
            TextSize::Normal => text.to_string(),
            TextSize::Large => text.to_uppercase(),
        };
        self.line(&format!("📝 {}", text));
    }

    fn set_risk_bar(&mut self, width_percent: u8) {
        let bar = render_bar(width_percent);
        let marker = self.risk_marker();
        self.line(&format!("{} {}", marker, bar));
    }

    fn show_hospital_link(&mut self, url: &str) {
        self.hospital_link = Some(url.to_string());
        self.line(&format!("🏥 Nearby care: {}", url));
    }

    fn set_analyze_enabled(&mut self, enabled: bool) {
        self.analyze_enabled = enabled;
    }

    fn set_report_enabled(&mut self, enabled: bool) {
        self.report_enabled = enabled;
    }

    fn set_report_label(&mut self, label: &str) {
        if self.report_label != label {
            self.report_label = label.to_string();
            self.line(label);
        }
    }

    fn apply_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.line(&format!("🎨 Theme: {}", theme));
    }

    fn apply_text_size(&mut self, size: TextSize) {
        self.text_size = size;
        let label = match size {
            TextSize::Normal => "normal",
            TextSize::Large => "large",
        };
        self.line(&format!("🔠 Text size: {}", label));
    }

    fn move_glow(&mut self, x: f64, y: f64) {
        tracing::trace!("Glow at {},{}", x, y);
    }

    fn open_url(&mut self, url: &str) {
        self.line(&format!("🌍 Open: {}", url));
    }
}

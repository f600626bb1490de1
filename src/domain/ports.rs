use crate::domain::model::{AnalysisResponse, Coordinates, HealthQuery, TextSize, Theme};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 檔案儲存位置（報告下載用）
pub trait Storage: Send + Sync {
    /// Writes `data` and returns the location it ended up at.
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// Single-string key/value preferences, the equivalent of browser local storage.
pub trait PreferenceStore: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

/// 遠端分析服務
#[async_trait]
pub trait AnalysisService: Send + Sync {
    async fn analyze(&self, query: &HealthQuery) -> Result<AnalysisResponse>;
    async fn generate_report(&self, query: &HealthQuery) -> Result<Vec<u8>>;
}

/// Platform speech-to-text.
#[async_trait]
pub trait Dictation: Send + Sync {
    fn is_supported(&self) -> bool;

    /// Listens once and returns the first recognized transcript, if any.
    async fn recognize(&self) -> Result<Option<String>>;
}

#[async_trait]
pub trait Geolocation: Send + Sync {
    fn is_available(&self) -> bool;
    async fn current_position(&self) -> Result<Coordinates>;
}

/// Everything the components are allowed to do to the screen.
pub trait View {
    fn symptoms(&self) -> String;
    fn age(&self) -> String;
    fn set_symptoms(&mut self, text: &str);

    /// 阻斷式提示
    fn alert(&mut self, message: &str);

    fn set_risk_text(&mut self, text: &str);
    fn set_risk_class(&mut self, class: &str);
    fn set_explanation(&mut self, text: &str);
    fn set_risk_bar(&mut self, width_percent: u8);
    fn show_hospital_link(&mut self, url: &str);

    fn set_analyze_enabled(&mut self, enabled: bool);
    fn set_report_enabled(&mut self, enabled: bool);
    fn set_report_label(&mut self, label: &str);

    fn apply_theme(&mut self, theme: Theme);
    fn apply_text_size(&mut self, size: TextSize);
    fn move_glow(&mut self, x: f64, y: f64);
    fn open_url(&mut self, url: &str);
}

use crate::core::form_controller::collect_query;
use crate::core::{AnalysisService, Storage, View};
use crate::domain::model::HealthQuery;
use crate::utils::error::Result;

pub const REPORT_FILENAME: &str = "CareBridge_Report.pdf";
pub const REPORT_BUSY_LABEL: &str = "Generating Report... 📄";
pub const REPORT_IDLE_LABEL: &str = "📄 Download Health Report";
pub const REPORT_FAILED_TEXT: &str = "Report generation failed";
pub const REPORT_LOCKED_TEXT: &str = "Analyze your symptoms before downloading the report";

pub struct ReportDownload<S: AnalysisService, St: Storage> {
    service: S,
    storage: St,
    filename: String,
}

impl<S: AnalysisService, St: Storage> ReportDownload<S, St> {
    pub fn new(service: S, storage: St) -> Self {
        Self {
            service,
            storage,
            filename: REPORT_FILENAME.to_string(),
        }
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    /// 產生並儲存報告，成功時回傳存檔位置
    pub async fn generate<V: View + ?Sized>(&mut self, view: &mut V) -> Option<String> {
        let query = collect_query(view)?;

        view.set_report_enabled(false);
        view.set_report_label(REPORT_BUSY_LABEL);

        let saved = match self.fetch_and_save(&query).await {
            Ok(location) => {
                tracing::info!("📁 Report saved to: {}", location);
                Some(location)
            }
            Err(e) => {
                view.alert(REPORT_FAILED_TEXT);
                tracing::error!("❌ Report generation failed: {}", e);
                tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
                None
            }
        };

        view.set_report_enabled(true);
        view.set_report_label(REPORT_IDLE_LABEL);
        saved
    }

    async fn fetch_and_save(&self, query: &HealthQuery) -> Result<String> {
        let pdf = self.service.generate_report(query).await?;
        tracing::debug!("Received {} report bytes", pdf.len());
        self.storage.write_file(&self.filename, &pdf).await
    }
}

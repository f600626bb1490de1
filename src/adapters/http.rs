use crate::core::{AnalysisResponse, AnalysisService, HealthQuery, Result};
use crate::utils::error::CareBridgeError;
use async_trait::async_trait;
use reqwest::Client;

pub const DEFAULT_ANALYZE_PATH: &str = "/analyze";
pub const DEFAULT_REPORT_PATH: &str = "/generate-report";

/// How much of an unreadable error body ends up in the error message.
const ERROR_BODY_PREVIEW: usize = 200;

#[derive(Debug, Clone)]
pub struct HttpAnalysisService {
    client: Client,
    base_url: String,
    analyze_path: String,
    report_path: String,
}

impl HttpAnalysisService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            analyze_path: DEFAULT_ANALYZE_PATH.to_string(),
            report_path: DEFAULT_REPORT_PATH.to_string(),
        }
    }

    pub fn with_paths(
        mut self,
        analyze_path: impl Into<String>,
        report_path: impl Into<String>,
    ) -> Self {
        self.analyze_path = analyze_path.into();
        self.report_path = report_path.into();
        self
    }

    pub fn analyze_url(&self) -> String {
        join_url(&self.base_url, &self.analyze_path)
    }

    pub fn report_url(&self) -> String {
        join_url(&self.base_url, &self.report_path)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn preview(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    text.chars().take(ERROR_BODY_PREVIEW).collect()
}

#[async_trait]
impl AnalysisService for HttpAnalysisService {
    async fn analyze(&self, query: &HealthQuery) -> Result<AnalysisResponse> {
        let url = self.analyze_url();
        tracing::debug!("Making API request to: {}", url);

        let response = self.client.post(&url).json(query).send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        let body = response.bytes().await?;

        // 服務在輸入錯誤時仍回傳同樣格式的 JSON（risk = "Error"），照樣顯示
        match serde_json::from_slice::<AnalysisResponse>(&body) {
            Ok(parsed) => {
                if !status.is_success() {
                    tracing::warn!("Service answered {} with an analysis body", status);
                }
                Ok(parsed)
            }
            Err(e) if status.is_success() => Err(CareBridgeError::SerializationError(e)),
            Err(_) => Err(CareBridgeError::ServiceStatusError {
                status: status.as_u16(),
                message: preview(&body),
            }),
        }
    }

    async fn generate_report(&self, query: &HealthQuery) -> Result<Vec<u8>> {
        let url = self.report_url();
        tracing::debug!("Making API request to: {}", url);

        let response = self.client.post(&url).json(query).send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        let body = response.bytes().await?;
        if !status.is_success() {
            return Err(CareBridgeError::ServiceStatusError {
                status: status.as_u16(),
                message: preview(&body),
            });
        }

        Ok(body.to_vec())
    }
}

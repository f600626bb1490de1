use crate::core::{AnalysisService, HealthQuery, View};
use crate::domain::model::AnalysisResponse;
use crate::utils::error::Result;
use crate::utils::validation::validate_required_input;

pub const ANALYZING_TEXT: &str = "Analyzing symptoms...🧐";
pub const PROCESSING_TEXT: &str = "Processing health risk analysis...⏳";
pub const ANALYSIS_ERROR_TEXT: &str = "Error analyzing symptoms";

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// 欄位不完整，沒有送出請求
    Rejected,
    Rendered(AnalysisResponse),
    Failed,
}

/// Reads and checks both form fields. The first problem is alerted on the
/// view and `None` is returned; otherwise the query comes back with both
/// fields trimmed, and those trimmed values are what gets sent to the service.
pub fn collect_query<V: View + ?Sized>(view: &mut V) -> Option<HealthQuery> {
    let symptoms = view.symptoms();
    let age = view.age();

    if let Err(e) = check_fields(&symptoms, &age) {
        tracing::debug!("Form rejected: {}", e);
        view.alert(&e.user_friendly_message());
        return None;
    }

    Some(HealthQuery::new(symptoms.trim(), age.trim()))
}

fn check_fields(symptoms: &str, age: &str) -> Result<()> {
    validate_required_input("symptoms", symptoms, "Please enter symptoms")?;
    validate_required_input("age", age, "Please enter age")?;
    Ok(())
}

pub struct FormController<S: AnalysisService> {
    service: S,
}

impl<S: AnalysisService> FormController<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub async fn submit<V: View + ?Sized>(&mut self, view: &mut V) -> SubmitOutcome {
        let Some(query) = collect_query(view) else {
            return SubmitOutcome::Rejected;
        };

        view.set_risk_text(ANALYZING_TEXT);
        view.set_explanation(PROCESSING_TEXT);
        view.set_analyze_enabled(false);

        tracing::info!("🩺 Submitting analysis request");
        let outcome = match self.service.analyze(&query).await {
            Ok(response) => {
                render(view, &response);
                SubmitOutcome::Rendered(response)
            }
            Err(e) => {
                view.set_explanation(ANALYSIS_ERROR_TEXT);
                tracing::error!(
                    "❌ Analysis failed: {} (Category: {:?})",
                    e,
                    e.category()
                );
                SubmitOutcome::Failed
            }
        };

        view.set_analyze_enabled(true);
        outcome
    }
}

fn render<V: View + ?Sized>(view: &mut V, response: &AnalysisResponse) {
    let tier = response.tier();
    tracing::info!(
        "✅ Risk {} ({:?}), confidence {}",
        response.risk,
        tier,
        response.confidence
    );

    view.set_risk_text(&response.summary_line());
    view.set_explanation(&response.explanation);
    view.set_report_enabled(true);
    view.set_risk_class(tier.style_class());
    view.set_risk_bar(tier.bar_width());

    if let Some(url) = response.hospital_link() {
        view.show_hospital_link(url);
    }
}

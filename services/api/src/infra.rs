use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use partner_risk::assessment::{AnswerSet, AnswerSetImporter, AssessmentError, JsonAnswers};
use partner_risk::error::AppError;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

/// Read a flat JSON answer object, as posted to `/api/v1/assessments`.
pub(crate) fn load_json_answers(path: &Path) -> Result<AnswerSet, AppError> {
    let contents = std::fs::read(path)?;
    let payload: JsonAnswers =
        serde_json::from_slice(&contents).map_err(AssessmentError::MalformedPayload)?;
    let answers = AnswerSet::from_json(payload).map_err(AssessmentError::from)?;
    Ok(answers)
}

pub(crate) fn load_csv_answers(path: &Path) -> Result<AnswerSet, AppError> {
    Ok(AnswerSetImporter::from_path(path)?)
}

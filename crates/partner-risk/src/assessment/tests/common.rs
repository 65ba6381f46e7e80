use std::collections::BTreeMap;
use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::assessment::answers::{AnswerSet, AnswerValue, RawAnswers};
use crate::assessment::category::RiskCategory;
use crate::assessment::engine::AssessmentEngine;
use crate::assessment::router::assessment_router;
use crate::assessment::rules::CategoryScore;

pub(super) fn engine() -> AssessmentEngine {
    AssessmentEngine::new()
}

/// Build an answer set from `(wire name, code)` pairs.
pub(super) fn answers(pairs: &[(&str, &str)]) -> AnswerSet {
    let raw: RawAnswers = pairs
        .iter()
        .map(|(key, code)| (key.to_string(), Some(AnswerValue::Single(code.to_string()))))
        .collect();
    AnswerSet::from_raw(raw).expect("valid answers")
}

pub(super) fn with_documents(pairs: &[(&str, &str)], documents: usize) -> AnswerSet {
    let mut raw: RawAnswers = pairs
        .iter()
        .map(|(key, code)| (key.to_string(), Some(AnswerValue::Single(code.to_string()))))
        .collect();
    raw.insert(
        "documentation".to_string(),
        Some(AnswerValue::Multiple(
            (0..documents).map(|index| format!("document-{index}")).collect(),
        )),
    );
    AnswerSet::from_raw(raw).expect("valid answers")
}

/// Every question at its most severe documented answer, with no documentation ticked.
pub(super) fn worst_case_answers() -> AnswerSet {
    with_documents(
        &[
            ("taxCompliance", "non-compliant"),
            ("investigations", "criminal"),
            ("sanctions", "sanctions"),
            ("criminalHistory", "money-laundering"),
            ("pepStatus", "direct"),
            ("creditCardDebt", "high"),
            ("employmentStability", "0-1"),
            ("incomeConsistency", "very-variable"),
            ("bankruptcy", "multiple"),
            ("taxDebt", "liens"),
            ("lifestyleConsistency", "significantly-above"),
            ("cashBusiness", "primarily-cash"),
            ("offshore", "complex"),
            ("cryptocurrency", "unclear-source"),
            ("giftsReceived", "unknown-source"),
            ("questionableAssociates", "criminal"),
            ("informationSharing", "secretive"),
            ("inconsistentStories", "major"),
            ("inheritance", "disputed"),
            ("financialControl", "complete"),
            ("pressureDecisions", "extreme"),
            ("frequentMoves", "suspicious"),
        ],
        0,
    )
}

pub(super) fn uniform_scores(score: CategoryScore) -> BTreeMap<RiskCategory, CategoryScore> {
    RiskCategory::ALL
        .into_iter()
        .map(|category| (category, score))
        .collect()
}

pub(super) fn router() -> axum::Router {
    assessment_router(Arc::new(engine()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

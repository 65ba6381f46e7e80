use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::answers::{AnswerSet, AnswerSetError, JsonAnswers, RawAnswers};
use super::category::{catalog, CategoryDescriptor, RiskCategory};
use super::recommendation::{select_recommendation, RecommendationView};
use super::rules::{score_category_detailed, CategoryScore, Deduction};
use super::scoring::{classify, compute_overall, OverallScore, RiskTier};

/// Stateless pipeline from an answer set to a scored, classified recommendation.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssessmentEngine;

impl AssessmentEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn assess(&self, answers: &AnswerSet) -> AssessmentResult {
        if !answers.ignored_keys().is_empty() {
            debug!(ignored = ?answers.ignored_keys(), "ignoring unknown questions");
        }
        let unrecognized = answers.unrecognized_codes();
        if !unrecognized.is_empty() {
            debug!(?unrecognized, "answer codes outside the questionnaire vocabulary");
        }

        let evaluations: Vec<_> = RiskCategory::ALL
            .into_iter()
            .map(|category| score_category_detailed(category, answers))
            .collect();

        let category_scores: BTreeMap<RiskCategory, CategoryScore> = evaluations
            .iter()
            .map(|evaluation| (evaluation.category, evaluation.score))
            .collect();

        let overall_score = compute_overall(&category_scores);
        let tier = classify(overall_score);
        let recommendation = select_recommendation(tier, &category_scores, answers);

        let breakdown = evaluations
            .into_iter()
            .map(|evaluation| CategoryBreakdown {
                category: evaluation.category,
                name: evaluation.category.name().to_string(),
                weight_percent: evaluation.category.weight_percent(),
                score: evaluation.score,
                deductions: evaluation.deductions,
            })
            .collect();

        debug!(
            answered = answers.len(),
            overall_score,
            ?tier,
            "assessment scored"
        );

        AssessmentResult {
            overall_score,
            tier,
            tier_label: tier.label().to_string(),
            category_scores,
            breakdown,
            recommendation,
        }
    }

    /// Validate a raw payload and score it.
    pub fn assess_raw(&self, raw: RawAnswers) -> Result<AssessmentResult, AssessmentError> {
        let answers = AnswerSet::from_raw(raw)?;
        Ok(self.assess(&answers))
    }

    /// Validate a JSON answer object and score it. Fields outside the questionnaire are ignored
    /// whatever value they hold.
    pub fn assess_json(&self, payload: JsonAnswers) -> Result<AssessmentResult, AssessmentError> {
        let answers = AnswerSet::from_json(payload)?;
        Ok(self.assess(&answers))
    }

    pub fn categories(&self) -> Vec<CategoryDescriptor> {
        catalog()
    }
}

/// Per-category slice of an assessment for chart layers and audits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub category: RiskCategory,
    pub name: String,
    pub weight_percent: u8,
    pub score: CategoryScore,
    pub deductions: Vec<Deduction>,
}

/// Complete engine output; plain data only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub overall_score: OverallScore,
    pub tier: RiskTier,
    pub tier_label: String,
    pub category_scores: BTreeMap<RiskCategory, CategoryScore>,
    pub breakdown: Vec<CategoryBreakdown>,
    pub recommendation: RecommendationView,
}

impl AssessmentResult {
    pub fn category_score(&self, category: RiskCategory) -> Option<CategoryScore> {
        self.category_scores.get(&category).copied()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    #[error("invalid answer set: {0}")]
    InvalidAnswers(#[from] AnswerSetError),
    #[error("answer payload must be a flat object of answer codes: {0}")]
    MalformedPayload(#[source] serde_json::Error),
}

//! Questionnaire scoring: answer validation, per-category deduction rules, weighted aggregation,
//! tier classification, and tier-specific guidance.
//!
//! Data only flows forward: [`AnswerSet`] → [`rules`] → [`scoring`] → [`recommendation`]. The
//! [`AssessmentEngine`] runs that chain for one submission and keeps no state between calls.

pub mod answers;
pub mod category;
pub mod engine;
pub mod import;
pub mod recommendation;
pub mod router;
pub mod rules;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use answers::{
    AnswerSet, AnswerSetError, AnswerShape, AnswerValue, JsonAnswers, QuestionKey, RawAnswers,
};
pub use category::{catalog, CategoryDescriptor, RiskCategory};
pub use engine::{AssessmentEngine, AssessmentError, AssessmentResult, CategoryBreakdown};
pub use import::{AnswerImportError, AnswerSetImporter};
pub use recommendation::{select_recommendation, RecommendationSection, RecommendationView};
pub use router::assessment_router;
pub use rules::{score_category, score_category_detailed, CategoryScore, Deduction};
pub use scoring::{classify, compute_overall, OverallScore, RiskTier};

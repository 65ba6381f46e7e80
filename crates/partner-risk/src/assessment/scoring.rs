use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::category::RiskCategory;
use super::rules::CategoryScore;

/// Weighted, rounded aggregate of the category scores.
pub type OverallScore = u8;

/// Lowest overall score still classified as low risk.
pub const LOW_RISK_FLOOR: OverallScore = 80;
/// Lowest overall score still classified as medium risk.
pub const MEDIUM_RISK_FLOOR: OverallScore = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub const fn label(self) -> &'static str {
        match self {
            RiskTier::Low => "Low Risk - Proceed",
            RiskTier::Medium => "Medium Risk - Proceed with Safeguards",
            RiskTier::High => "High Risk - Do Not Proceed",
        }
    }

    /// Score band shown next to the tier in charts.
    pub const fn band(self) -> &'static str {
        match self {
            RiskTier::Low => "Low Risk (80-100)",
            RiskTier::Medium => "Medium Risk (50-79)",
            RiskTier::High => "High Risk (0-49)",
        }
    }
}

/// Sum of `weight × score` over all categories, rounded half-up once at the end.
///
/// Categories absent from `scores` contribute 0. The sum is kept in integer hundredths so the
/// rounding is exact.
pub fn compute_overall(scores: &BTreeMap<RiskCategory, CategoryScore>) -> OverallScore {
    let hundredths: u32 = RiskCategory::ALL
        .iter()
        .map(|category| {
            let score = scores.get(category).copied().unwrap_or(0);
            u32::from(category.weight_percent()) * u32::from(score)
        })
        .sum();

    let rounded = (hundredths + 50) / 100;
    rounded.min(100) as OverallScore
}

pub fn classify(score: OverallScore) -> RiskTier {
    match score {
        s if s >= LOW_RISK_FLOOR => RiskTier::Low,
        s if s >= MEDIUM_RISK_FLOOR => RiskTier::Medium,
        _ => RiskTier::High,
    }
}

use std::collections::BTreeMap;

use super::common::*;
use crate::assessment::category::RiskCategory;
use crate::assessment::scoring::{classify, compute_overall, RiskTier};

#[test]
fn perfect_scores_aggregate_to_one_hundred() {
    assert_eq!(compute_overall(&uniform_scores(100)), 100);
}

#[test]
fn missing_categories_count_as_zero() {
    assert_eq!(compute_overall(&BTreeMap::new()), 0);

    let mut scores = uniform_scores(100);
    scores.remove(&RiskCategory::LegalCompliance);
    assert_eq!(compute_overall(&scores), 75);
}

#[test]
fn rounds_half_up_on_the_final_sum() {
    let mut scores = uniform_scores(100);

    // 2 × 0.25 + 75 = 75.5
    scores.insert(RiskCategory::LegalCompliance, 2);
    assert_eq!(compute_overall(&scores), 76);

    // 1 × 0.25 + 75 = 75.25
    scores.insert(RiskCategory::LegalCompliance, 1);
    assert_eq!(compute_overall(&scores), 75);
}

#[test]
fn rounding_is_not_applied_per_category() {
    // Rounding each contribution separately would give 2 + 1.
    let mut scores = uniform_scores(0);
    scores.insert(RiskCategory::PersonalSafety, 50);
    scores.insert(RiskCategory::FutureExposure, 25);
    // 50 × 0.03 + 25 × 0.02 = 1.5 + 0.5 = 2.0
    assert_eq!(compute_overall(&scores), 2);
}

#[test]
fn legal_only_scenario_stays_low_risk() {
    let mut scores = uniform_scores(100);
    scores.insert(RiskCategory::LegalCompliance, 25);

    let overall = compute_overall(&scores);

    assert_eq!(overall, 81);
    assert_eq!(classify(overall), RiskTier::Low);
}

#[test]
fn tier_boundaries() {
    assert_eq!(classify(100), RiskTier::Low);
    assert_eq!(classify(80), RiskTier::Low);
    assert_eq!(classify(79), RiskTier::Medium);
    assert_eq!(classify(50), RiskTier::Medium);
    assert_eq!(classify(49), RiskTier::High);
    assert_eq!(classify(0), RiskTier::High);
}

#[test]
fn tier_labels_match_bands() {
    assert_eq!(RiskTier::Low.label(), "Low Risk - Proceed");
    assert_eq!(RiskTier::Medium.band(), "Medium Risk (50-79)");
    assert_eq!(RiskTier::High.label(), "High Risk - Do Not Proceed");
}

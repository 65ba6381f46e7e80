use super::common::*;
use crate::assessment::answers::{AnswerSet, AnswerValue, QuestionKey, RawAnswers};
use crate::assessment::category::RiskCategory;
use crate::assessment::engine::{AssessmentError, AssessmentResult};
use crate::assessment::recommendation::{SECTION_AREAS_OF_CONCERN, SECTION_CRITICAL_RED_FLAGS};
use crate::assessment::scoring::RiskTier;

#[test]
fn empty_answer_set_is_low_risk_with_static_text() {
    let result = engine().assess(&AnswerSet::empty());

    assert!(result.category_scores.values().all(|score| *score == 100));
    assert_eq!(result.category_scores.len(), 8);
    assert_eq!(result.overall_score, 100);
    assert_eq!(result.tier, RiskTier::Low);
    assert_eq!(result.tier_label, "Low Risk - Proceed");
    assert!(result.recommendation.section(SECTION_AREAS_OF_CONCERN).is_none());
    assert!(result.recommendation.section(SECTION_CRITICAL_RED_FLAGS).is_none());
    assert!(result.breakdown.iter().all(|entry| entry.deductions.is_empty()));
}

#[test]
fn worst_case_answers_are_high_risk_with_every_flag() {
    let result = engine().assess(&worst_case_answers());

    assert_eq!(result.overall_score, 7);
    assert_eq!(result.tier, RiskTier::High);
    let flags = result
        .recommendation
        .section(SECTION_CRITICAL_RED_FLAGS)
        .expect("flags section");
    assert_eq!(flags.items.len(), 5);
}

#[test]
fn legal_issues_alone_stay_just_above_the_low_risk_floor() {
    let result = engine().assess(&answers(&[
        ("taxCompliance", "non-compliant"),
        ("investigations", "criminal"),
    ]));

    assert_eq!(result.category_score(RiskCategory::LegalCompliance), Some(25));
    for category in RiskCategory::ALL
        .into_iter()
        .filter(|category| *category != RiskCategory::LegalCompliance)
    {
        assert_eq!(result.category_score(category), Some(100));
    }
    assert_eq!(result.overall_score, 81);
    assert_eq!(result.tier, RiskTier::Low);
}

#[test]
fn moderate_profile_lists_weak_categories() {
    let result = engine().assess(&with_documents(
        &[
            ("taxCompliance", "significant-issues"),
            ("investigations", "regulatory"),
            ("creditCardDebt", "high"),
            ("bankruptcy", "recent"),
            ("cashBusiness", "significant"),
            ("offshore", "undisclosed"),
        ],
        1,
    ));

    // 12.5 + 9 + 7 + 35 = 63.5
    assert_eq!(result.category_score(RiskCategory::LegalCompliance), Some(50));
    assert_eq!(result.category_score(RiskCategory::FinancialStability), Some(45));
    assert_eq!(result.category_score(RiskCategory::SourceOfFunds), Some(35));
    assert_eq!(result.overall_score, 64);
    assert_eq!(result.tier, RiskTier::Medium);

    let concerns = result
        .recommendation
        .section(SECTION_AREAS_OF_CONCERN)
        .expect("concerns section");
    assert_eq!(concerns.items.len(), 3);
}

#[test]
fn breakdown_follows_category_weights_and_records_deductions() {
    let result = engine().assess(&answers(&[("sanctions", "significant-media")]));

    let ids: Vec<RiskCategory> = result.breakdown.iter().map(|entry| entry.category).collect();
    assert_eq!(ids, RiskCategory::ALL.to_vec());

    let reputational = &result.breakdown[3];
    assert_eq!(reputational.name, "Reputational Risk");
    assert_eq!(reputational.weight_percent, 15);
    assert_eq!(reputational.score, 70);
    assert_eq!(reputational.deductions[0].key, QuestionKey::Sanctions);
    assert_eq!(reputational.deductions[0].answer, "significant-media");
    assert_eq!(reputational.deductions[0].points, 30);
}

#[test]
fn repeated_assessments_are_byte_identical() {
    let answers = worst_case_answers();
    let engine = engine();

    let first = serde_json::to_vec(&engine.assess(&answers)).expect("serializes");
    let second = serde_json::to_vec(&engine.assess(&answers)).expect("serializes");

    assert_eq!(first, second);
}

#[test]
fn partial_answer_sets_score_without_error() {
    let mut raw = RawAnswers::new();
    raw.insert(
        "informationSharing".to_string(),
        Some(AnswerValue::Single("reluctant".to_string())),
    );
    raw.insert("inconsistentStories".to_string(), None);
    raw.insert(
        "wizardStep".to_string(),
        Some(AnswerValue::Single("4".to_string())),
    );

    let result = engine().assess_raw(raw).expect("partial set scores");

    assert_eq!(result.category_score(RiskCategory::Transparency), Some(70));
    assert_eq!(result.overall_score, 97);
}

#[test]
fn form_metadata_fields_do_not_block_scoring() {
    let payload = serde_json::json!({
        "taxCompliance": "minor-issues",
        "agreedToTerms": true,
        "wizardStep": 4,
        "progress": [1, 2, 3],
    });
    let payload = payload.as_object().cloned().expect("object payload");

    let result = engine().assess_json(payload).expect("metadata ignored");

    assert_eq!(result.category_score(RiskCategory::LegalCompliance), Some(90));
    assert_eq!(result.overall_score, 98);
}

#[test]
fn numeric_answer_to_known_question_is_rejected() {
    let payload = serde_json::json!({ "bankruptcy": 2, "wizardStep": 4 });
    let payload = payload.as_object().cloned().expect("object payload");

    let err = engine().assess_json(payload).expect_err("number rejected");
    assert!(matches!(err, AssessmentError::InvalidAnswers(_)));
    assert!(err.to_string().contains("bankruptcy"));
}

#[test]
fn malformed_shapes_are_rejected() {
    let mut raw = RawAnswers::new();
    raw.insert(
        "financialControl".to_string(),
        Some(AnswerValue::Multiple(vec!["complete".to_string()])),
    );

    let err = engine().assess_raw(raw).expect_err("shape violation");
    assert!(matches!(err, AssessmentError::InvalidAnswers(_)));
    assert!(err.to_string().contains("financialControl"));
}

#[test]
fn results_round_trip_as_plain_data() {
    let result = engine().assess(&answers(&[("frequentMoves", "frequent")]));
    let encoded = serde_json::to_value(&result).expect("serializes");

    assert_eq!(encoded["tier"], "low");
    assert_eq!(encoded["category_scores"]["future_exposure"], 75);

    let decoded: AssessmentResult = serde_json::from_value(encoded).expect("deserializes");
    assert_eq!(result, decoded);
}

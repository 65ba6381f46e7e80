use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::answers::{AnswerSet, QuestionKey};
use super::category::RiskCategory;
use super::rules::CategoryScore;
use super::scoring::RiskTier;

pub const SECTION_MINIMAL_SAFEGUARDS: &str = "Minimal Safeguards Suggested";
pub const SECTION_POSITIVE_INDICATORS: &str = "Positive Indicators";
pub const SECTION_RECOMMENDED_SAFEGUARDS: &str = "Recommended Safeguards";
pub const SECTION_AREAS_OF_CONCERN: &str = "Areas of Concern";
pub const SECTION_CRITICAL_RED_FLAGS: &str = "Critical Red Flags";
pub const SECTION_RECOMMENDED_ACTIONS: &str = "Recommended Actions";

/// Category scores strictly below this surface as an area of concern.
pub const CONCERN_THRESHOLD: CategoryScore = 70;

const LOW_SUMMARY: &str = "The assessment indicates low financial risk. Your partner demonstrates good financial transparency and stability with minimal red flags detected.";
const MEDIUM_SUMMARY: &str = "The assessment indicates moderate financial risk. While there are no critical red flags, several areas require attention and protective measures.";
const HIGH_SUMMARY: &str = "WARNING: The assessment indicates high financial risk with significant concerns identified. Proceeding with this relationship could expose you to serious legal, financial, and personal risks.";

const MINIMAL_SAFEGUARDS: [&str; 4] = [
    "Consider basic financial disclosure agreements",
    "Maintain awareness of significant financial changes",
    "Regular financial check-ins and open communication",
    "Basic asset protection planning for the future",
];

const POSITIVE_INDICATORS: [&str; 4] = [
    "Strong financial transparency and documentation",
    "Consistent income and lifestyle alignment",
    "Good legal and tax compliance record",
    "Open communication about financial matters",
];

const RECOMMENDED_SAFEGUARDS: [&str; 6] = [
    "Comprehensive prenuptial agreement with financial disclosure requirements",
    "Separate bank accounts and asset structures",
    "Regular financial audits and monitoring arrangements",
    "Professional verification of income sources and documentation",
    "Time-bound disclosure milestones for major financial decisions",
    "Credit monitoring and identity protection services",
];

const RECOMMENDED_ACTIONS: [&str; 6] = [
    "Do not proceed with financial commitments or marriage",
    "Seek immediate consultation with legal and financial professionals",
    "Consider professional background investigation services",
    "Maintain complete financial independence and separation",
    "Document all interactions and financial discussions",
    "Consider personal safety planning if control behaviors are present",
];

const CONCERN_CHECKS: [(RiskCategory, &str); 4] = [
    (
        RiskCategory::LegalCompliance,
        "Legal or tax compliance issues requiring verification",
    ),
    (
        RiskCategory::FinancialStability,
        "Financial instability or significant debt concerns",
    ),
    (
        RiskCategory::SourceOfFunds,
        "Unclear or inadequately documented wealth sources",
    ),
    (
        RiskCategory::Transparency,
        "Limited financial transparency or inconsistent information",
    ),
];

pub const FLAG_CRIMINAL_HISTORY: &str = "Criminal history related to financial crimes";
pub const FLAG_FINANCIAL_CONTROL: &str = "Signs of financial control or abuse";
pub const FLAG_SECRECY: &str = "Extreme financial secrecy and resistance to disclosure";
pub const FLAG_LIFESTYLE: &str = "Lifestyle significantly exceeds documented income";
pub const FLAG_SANCTIONS: &str = "Sanctions exposure or significant adverse media coverage";

/// Titled list of advisory lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationSection {
    pub title: String,
    pub items: Vec<String>,
}

impl RecommendationSection {
    fn new<I, S>(title: &str, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.to_string(),
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}

/// Structured guidance for a tier; rendering is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationView {
    pub summary: String,
    pub sections: Vec<RecommendationSection>,
}

impl RecommendationView {
    pub fn section(&self, title: &str) -> Option<&RecommendationSection> {
        self.sections.iter().find(|section| section.title == title)
    }
}

pub fn select_recommendation(
    tier: RiskTier,
    category_scores: &BTreeMap<RiskCategory, CategoryScore>,
    answers: &AnswerSet,
) -> RecommendationView {
    match tier {
        RiskTier::Low => RecommendationView {
            summary: LOW_SUMMARY.to_string(),
            sections: vec![
                RecommendationSection::new(SECTION_MINIMAL_SAFEGUARDS, MINIMAL_SAFEGUARDS),
                RecommendationSection::new(SECTION_POSITIVE_INDICATORS, POSITIVE_INDICATORS),
            ],
        },
        RiskTier::Medium => RecommendationView {
            summary: MEDIUM_SUMMARY.to_string(),
            sections: vec![
                RecommendationSection::new(SECTION_RECOMMENDED_SAFEGUARDS, RECOMMENDED_SAFEGUARDS),
                RecommendationSection::new(SECTION_AREAS_OF_CONCERN, concerns(category_scores)),
            ],
        },
        RiskTier::High => RecommendationView {
            summary: HIGH_SUMMARY.to_string(),
            sections: vec![
                RecommendationSection::new(SECTION_CRITICAL_RED_FLAGS, critical_flags(answers)),
                RecommendationSection::new(SECTION_RECOMMENDED_ACTIONS, RECOMMENDED_ACTIONS),
            ],
        },
    }
}

// Only scored categories can raise a concern.
fn concerns(category_scores: &BTreeMap<RiskCategory, CategoryScore>) -> Vec<&'static str> {
    CONCERN_CHECKS
        .iter()
        .filter(|(category, _)| {
            category_scores
                .get(category)
                .is_some_and(|score| *score < CONCERN_THRESHOLD)
        })
        .map(|(_, concern)| *concern)
        .collect()
}

fn critical_flags(answers: &AnswerSet) -> Vec<&'static str> {
    let mut flags = Vec::new();

    if answers
        .single(QuestionKey::CriminalHistory)
        .is_some_and(|code| code != "none")
    {
        flags.push(FLAG_CRIMINAL_HISTORY);
    }
    if matches!(
        answers.single(QuestionKey::FinancialControl),
        Some("complete" | "significant")
    ) {
        flags.push(FLAG_FINANCIAL_CONTROL);
    }
    if answers.single(QuestionKey::InformationSharing) == Some("secretive") {
        flags.push(FLAG_SECRECY);
    }
    if answers.single(QuestionKey::LifestyleConsistency) == Some("significantly-above") {
        flags.push(FLAG_LIFESTYLE);
    }
    if answers.single(QuestionKey::Sanctions) == Some("sanctions") {
        flags.push(FLAG_SANCTIONS);
    }

    flags
}

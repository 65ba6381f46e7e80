//! Deduction tables for each risk category.
//!
//! Every category starts at [`BASELINE_SCORE`] and loses points for each rule that matches. Rules
//! inside a category are independent and additive. A choice rule deducts at most once: the answer
//! code is looked up in its table, and codes missing from the table deduct nothing.

use serde::{Deserialize, Serialize};

use super::answers::{AnswerSet, QuestionKey};
use super::category::RiskCategory;

/// Score of a single category, always within `0..=100`.
pub type CategoryScore = u8;

pub const BASELINE_SCORE: CategoryScore = 100;

enum Rule {
    /// Single-select lookup; entries are ordered most severe first.
    Choice {
        key: QuestionKey,
        table: &'static [(&'static str, u8)],
    },
    /// Multi-select count; `(upper_bound_exclusive, deduction)` bands checked in order.
    SelectionCount {
        key: QuestionKey,
        bands: &'static [(usize, u8)],
    },
}

impl Rule {
    fn key(&self) -> QuestionKey {
        match self {
            Rule::Choice { key, .. } | Rule::SelectionCount { key, .. } => *key,
        }
    }

    fn apply(&self, answers: &AnswerSet) -> Option<Deduction> {
        match self {
            Rule::Choice { key, table } => {
                let code = answers.single(*key)?;
                table
                    .iter()
                    .find(|(candidate, _)| *candidate == code)
                    .map(|(_, points)| Deduction {
                        key: *key,
                        answer: code.to_string(),
                        points: *points,
                    })
            }
            Rule::SelectionCount { key, bands } => {
                let selected = answers.list(*key)?.len();
                bands
                    .iter()
                    .find(|(bound, _)| selected < *bound)
                    .map(|(_, points)| Deduction {
                        key: *key,
                        answer: format!("{selected} selected"),
                        points: *points,
                    })
            }
        }
    }
}

const LEGAL_COMPLIANCE: &[Rule] = &[
    Rule::Choice {
        key: QuestionKey::TaxCompliance,
        table: &[
            ("non-compliant", 40),
            ("significant-issues", 25),
            ("minor-issues", 10),
        ],
    },
    Rule::Choice {
        key: QuestionKey::Investigations,
        table: &[("criminal", 35), ("regulatory", 25), ("civil", 15)],
    },
    Rule::Choice {
        key: QuestionKey::Sanctions,
        table: &[("sanctions", 40), ("significant-media", 20), ("minor-media", 10)],
    },
    Rule::Choice {
        key: QuestionKey::CriminalHistory,
        table: &[("money-laundering", 50), ("significant", 30), ("minor", 15)],
    },
    Rule::Choice {
        key: QuestionKey::PepStatus,
        table: &[("direct", 25), ("associate", 15), ("family", 10)],
    },
];

const FINANCIAL_STABILITY: &[Rule] = &[
    Rule::Choice {
        key: QuestionKey::CreditCardDebt,
        table: &[("high", 25), ("moderate", 15), ("low", 5)],
    },
    Rule::Choice {
        key: QuestionKey::EmploymentStability,
        table: &[("0-1", 20), ("1-3", 10), ("3-5", 5)],
    },
    Rule::Choice {
        key: QuestionKey::IncomeConsistency,
        table: &[("very-variable", 25), ("variable", 15), ("stable", 5)],
    },
    Rule::Choice {
        key: QuestionKey::Bankruptcy,
        table: &[("multiple", 40), ("recent", 30), ("discharged", 15)],
    },
    Rule::Choice {
        key: QuestionKey::TaxDebt,
        table: &[("liens", 35), ("significant", 25), ("minor", 10)],
    },
];

const SOURCE_OF_FUNDS: &[Rule] = &[
    Rule::Choice {
        key: QuestionKey::LifestyleConsistency,
        table: &[("significantly-above", 40), ("slightly-above", 20)],
    },
    Rule::Choice {
        key: QuestionKey::CashBusiness,
        table: &[("primarily-cash", 35), ("significant", 25), ("minor", 10)],
    },
    Rule::Choice {
        key: QuestionKey::Offshore,
        table: &[("complex", 30), ("undisclosed", 25), ("disclosed", 10)],
    },
    Rule::Choice {
        key: QuestionKey::Cryptocurrency,
        table: &[("unclear-source", 25), ("significant", 15), ("minor", 5)],
    },
    Rule::Choice {
        key: QuestionKey::GiftsReceived,
        table: &[("unknown-source", 30), ("business", 15)],
    },
    Rule::SelectionCount {
        key: QuestionKey::Documentation,
        bands: &[(1, 25), (3, 15), (5, 5)],
    },
];

// `sanctions` is weighed again here with heavier media penalties than the legal table.
const REPUTATIONAL: &[Rule] = &[
    Rule::Choice {
        key: QuestionKey::Sanctions,
        table: &[("sanctions", 40), ("significant-media", 30), ("minor-media", 15)],
    },
    Rule::Choice {
        key: QuestionKey::QuestionableAssociates,
        table: &[("criminal", 35), ("significant", 25), ("minor", 15)],
    },
];

const TRANSPARENCY: &[Rule] = &[
    Rule::Choice {
        key: QuestionKey::InformationSharing,
        table: &[("secretive", 50), ("reluctant", 30), ("somewhat-open", 15)],
    },
    Rule::Choice {
        key: QuestionKey::InconsistentStories,
        table: &[("major", 40), ("significant", 25), ("minor", 10)],
    },
];

// `pepStatus` also counts toward legal compliance, with smaller deductions there.
const FAMILY_EXTERNAL: &[Rule] = &[
    Rule::Choice {
        key: QuestionKey::PepStatus,
        table: &[("direct", 40), ("associate", 25), ("family", 15)],
    },
    Rule::Choice {
        key: QuestionKey::Inheritance,
        table: &[("disputed", 30)],
    },
];

const PERSONAL_SAFETY: &[Rule] = &[
    Rule::Choice {
        key: QuestionKey::FinancialControl,
        table: &[("complete", 60), ("significant", 40), ("minor", 20)],
    },
    Rule::Choice {
        key: QuestionKey::PressureDecisions,
        table: &[("extreme", 50), ("significant", 30), ("mild", 15)],
    },
];

const FUTURE_EXPOSURE: &[Rule] = &[Rule::Choice {
    key: QuestionKey::FrequentMoves,
    table: &[("suspicious", 40), ("frequent", 25), ("occasional", 10)],
}];

fn rules_for(category: RiskCategory) -> &'static [Rule] {
    match category {
        RiskCategory::LegalCompliance => LEGAL_COMPLIANCE,
        RiskCategory::FinancialStability => FINANCIAL_STABILITY,
        RiskCategory::SourceOfFunds => SOURCE_OF_FUNDS,
        RiskCategory::Reputational => REPUTATIONAL,
        RiskCategory::Transparency => TRANSPARENCY,
        RiskCategory::FamilyExternal => FAMILY_EXTERNAL,
        RiskCategory::PersonalSafety => PERSONAL_SAFETY,
        RiskCategory::FutureExposure => FUTURE_EXPOSURE,
    }
}

/// Questions read by a category's rules, in evaluation order.
pub fn inputs_for(category: RiskCategory) -> Vec<QuestionKey> {
    rules_for(category).iter().map(Rule::key).collect()
}

/// Single deduction applied to a category, kept for audit output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deduction {
    pub key: QuestionKey,
    pub answer: String,
    pub points: u8,
}

/// Category score together with the deductions that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryEvaluation {
    pub category: RiskCategory,
    pub score: CategoryScore,
    pub deductions: Vec<Deduction>,
}

pub fn score_category_detailed(category: RiskCategory, answers: &AnswerSet) -> CategoryEvaluation {
    let deductions: Vec<Deduction> = rules_for(category)
        .iter()
        .filter_map(|rule| rule.apply(answers))
        .collect();

    let total: u16 = deductions.iter().map(|deduction| u16::from(deduction.points)).sum();
    let score = u16::from(BASELINE_SCORE).saturating_sub(total) as CategoryScore;

    CategoryEvaluation {
        category,
        score,
        deductions,
    }
}

pub fn score_category(category: RiskCategory, answers: &AnswerSet) -> CategoryScore {
    score_category_detailed(category, answers).score
}

/// Every `(question, code, deduction)` triple a category can apply. Selection-count bands are not
/// listed.
#[cfg(test)]
pub(crate) fn choice_entries(category: RiskCategory) -> Vec<(QuestionKey, &'static str, u8)> {
    rules_for(category)
        .iter()
        .flat_map(|rule| match rule {
            Rule::Choice { key, table } => table
                .iter()
                .map(|(code, points)| (*key, *code, *points))
                .collect::<Vec<_>>(),
            Rule::SelectionCount { .. } => Vec::new(),
        })
        .collect()
}

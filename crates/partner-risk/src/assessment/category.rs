use serde::{Deserialize, Serialize};

/// The eight weighted dimensions an assessment is broken into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    LegalCompliance,
    FinancialStability,
    SourceOfFunds,
    Reputational,
    Transparency,
    FamilyExternal,
    PersonalSafety,
    FutureExposure,
}

impl RiskCategory {
    pub const ALL: [RiskCategory; 8] = [
        RiskCategory::LegalCompliance,
        RiskCategory::FinancialStability,
        RiskCategory::SourceOfFunds,
        RiskCategory::Reputational,
        RiskCategory::Transparency,
        RiskCategory::FamilyExternal,
        RiskCategory::PersonalSafety,
        RiskCategory::FutureExposure,
    ];

    pub const fn id(self) -> &'static str {
        match self {
            RiskCategory::LegalCompliance => "legal_compliance",
            RiskCategory::FinancialStability => "financial_stability",
            RiskCategory::SourceOfFunds => "source_of_funds",
            RiskCategory::Reputational => "reputational",
            RiskCategory::Transparency => "transparency",
            RiskCategory::FamilyExternal => "family_external",
            RiskCategory::PersonalSafety => "personal_safety",
            RiskCategory::FutureExposure => "future_exposure",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            RiskCategory::LegalCompliance => "Legal/Compliance Risk",
            RiskCategory::FinancialStability => "Financial Stability Risk",
            RiskCategory::SourceOfFunds => "Source of Funds Risk",
            RiskCategory::Reputational => "Reputational Risk",
            RiskCategory::Transparency => "Transparency Risk",
            RiskCategory::FamilyExternal => "Family/External Risk",
            RiskCategory::PersonalSafety => "Personal Safety Risk",
            RiskCategory::FutureExposure => "Future Exposure Risk",
        }
    }

    /// Weight in whole percentage points; the eight values sum to exactly 100.
    pub const fn weight_percent(self) -> u8 {
        match self {
            RiskCategory::LegalCompliance => 25,
            RiskCategory::FinancialStability => 20,
            RiskCategory::SourceOfFunds => 20,
            RiskCategory::Reputational => 15,
            RiskCategory::Transparency => 10,
            RiskCategory::FamilyExternal => 5,
            RiskCategory::PersonalSafety => 3,
            RiskCategory::FutureExposure => 2,
        }
    }

    pub fn weight(self) -> f64 {
        f64::from(self.weight_percent()) / 100.0
    }

    pub fn descriptor(self) -> CategoryDescriptor {
        CategoryDescriptor {
            id: self,
            name: self.name(),
            weight: self.weight(),
            weight_percent: self.weight_percent(),
        }
    }
}

/// Static catalog entry handed to chart and form layers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryDescriptor {
    pub id: RiskCategory,
    pub name: &'static str,
    pub weight: f64,
    pub weight_percent: u8,
}

pub fn catalog() -> Vec<CategoryDescriptor> {
    RiskCategory::ALL
        .into_iter()
        .map(RiskCategory::descriptor)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        let percent: u32 = RiskCategory::ALL
            .iter()
            .map(|category| u32::from(category.weight_percent()))
            .sum();
        assert_eq!(percent, 100);

        let fraction: f64 = RiskCategory::ALL.iter().map(|category| category.weight()).sum();
        assert!((fraction - 1.0).abs() < 1e-9);
    }

    #[test]
    fn serde_ids_match_identifiers() {
        for category in RiskCategory::ALL {
            let encoded = serde_json::to_value(category).expect("category serializes");
            assert_eq!(encoded, serde_json::json!(category.id()));
        }
    }

    #[test]
    fn catalog_lists_categories_by_descending_weight() {
        let weights: Vec<u8> = catalog().iter().map(|entry| entry.weight_percent).collect();
        assert_eq!(weights, vec![25, 20, 20, 15, 10, 5, 3, 2]);
    }
}

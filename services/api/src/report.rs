use crate::infra::{load_csv_answers, load_json_answers};
use chrono::{Local, NaiveDate};
use clap::Args;
use partner_risk::assessment::{
    AnswerSet, AnswerSetError, AssessmentEngine, AssessmentError, AssessmentResult, QuestionKey,
    RiskTier,
};
use partner_risk::error::AppError;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Flat JSON object of answers (question name to code or list of codes)
    #[arg(long, conflicts_with = "csv", required_unless_present = "csv")]
    pub(crate) answers: Option<PathBuf>,
    /// CSV export with `Question,Answer` columns
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
    /// Date printed on the report (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
    /// Emit the raw JSON result instead of the text report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Date printed on the reports (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
    /// Include the per-question deductions for each category
    #[arg(long)]
    pub(crate) show_deductions: bool,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        answers,
        csv,
        as_of,
        json,
    } = args;

    // clap guarantees exactly one of `--answers` and `--csv`.
    let answers = match answers {
        Some(path) => load_json_answers(&path)?,
        None => load_csv_answers(&csv.unwrap_or_default())?,
    };

    let result = AssessmentEngine::new().assess(&answers);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        let as_of = as_of.unwrap_or_else(|| Local::now().date_naive());
        render_assessment(&result, as_of, true);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        as_of,
        show_deductions,
    } = args;
    let as_of = as_of.unwrap_or_else(|| Local::now().date_naive());
    let engine = AssessmentEngine::new();

    println!("Partner risk assessment demo");
    for (label, answers) in demo_scenarios().map_err(AssessmentError::from)? {
        println!("\n=== {label} ===");
        let result = engine.assess(&answers);
        render_assessment(&result, as_of, show_deductions);
    }

    Ok(())
}

fn demo_scenarios() -> Result<Vec<(&'static str, AnswerSet)>, AnswerSetError> {
    let transparent = AnswerSet::empty()
        .with_single(QuestionKey::TaxCompliance, "compliant")
        .and_then(|set| set.with_single(QuestionKey::CreditCardDebt, "low"))
        .and_then(|set| set.with_single(QuestionKey::EmploymentStability, "5+"))
        .and_then(|set| set.with_single(QuestionKey::InformationSharing, "open"))
        .and_then(|set| {
            set.with_list(
                QuestionKey::Documentation,
                [
                    "tax-returns",
                    "bank-statements",
                    "pay-stubs",
                    "investment-statements",
                    "property-records",
                ],
            )
        })?;

    let guarded = AnswerSet::empty()
        .with_single(QuestionKey::TaxCompliance, "significant-issues")
        .and_then(|set| set.with_single(QuestionKey::Investigations, "civil"))
        .and_then(|set| set.with_single(QuestionKey::CreditCardDebt, "high"))
        .and_then(|set| set.with_single(QuestionKey::Bankruptcy, "discharged"))
        .and_then(|set| set.with_single(QuestionKey::Offshore, "disclosed"))
        .and_then(|set| set.with_single(QuestionKey::InformationSharing, "reluctant"))
        .and_then(|set| set.with_list(QuestionKey::Documentation, ["tax-returns", "pay-stubs"]))?;

    let alarming = AnswerSet::empty()
        .with_single(QuestionKey::CriminalHistory, "money-laundering")
        .and_then(|set| set.with_single(QuestionKey::Sanctions, "sanctions"))
        .and_then(|set| set.with_single(QuestionKey::TaxDebt, "liens"))
        .and_then(|set| set.with_single(QuestionKey::Bankruptcy, "recent"))
        .and_then(|set| set.with_single(QuestionKey::LifestyleConsistency, "significantly-above"))
        .and_then(|set| set.with_single(QuestionKey::GiftsReceived, "unknown-source"))
        .and_then(|set| set.with_single(QuestionKey::InformationSharing, "secretive"))
        .and_then(|set| set.with_single(QuestionKey::FinancialControl, "complete"))
        .and_then(|set| set.with_list(QuestionKey::Documentation, Vec::<String>::new()))?;

    Ok(vec![
        ("Transparent partner", transparent),
        ("Partner needing safeguards", guarded),
        ("Partner with critical red flags", alarming),
    ])
}

fn render_assessment(result: &AssessmentResult, as_of: NaiveDate, show_deductions: bool) {
    println!("Assessment date: {as_of}");
    println!(
        "Overall score: {}/100 ({})",
        result.overall_score, result.tier_label
    );
    println!("Band: {}", result.tier.band());

    println!("\nCategory scores");
    for entry in &result.breakdown {
        println!(
            "- {} ({}% weight): {}",
            entry.name, entry.weight_percent, entry.score
        );
        if show_deductions {
            for deduction in &entry.deductions {
                println!(
                    "    -{} for {} = {}",
                    deduction.points, deduction.key, deduction.answer
                );
            }
        }
    }

    println!("\n{}", result.recommendation.summary);
    for section in &result.recommendation.sections {
        if section.items.is_empty() {
            println!("\n{}: none", section.title);
            continue;
        }
        println!("\n{}", section.title);
        for item in &section.items {
            println!("- {item}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct AssessCommand {
        #[command(flatten)]
        args: AssessArgs,
    }

    #[test]
    fn assess_requires_exactly_one_answer_source() {
        assert!(AssessCommand::try_parse_from(["assess"]).is_err());
        assert!(AssessCommand::try_parse_from([
            "assess",
            "--answers",
            "answers.json",
            "--csv",
            "answers.csv",
        ])
        .is_err());

        let parsed =
            AssessCommand::try_parse_from(["assess", "--csv", "answers.csv"]).expect("csv only");
        assert!(parsed.args.answers.is_none());
        assert_eq!(parsed.args.csv, Some(PathBuf::from("answers.csv")));
    }

    #[test]
    fn demo_scenarios_cover_every_tier() {
        let engine = AssessmentEngine::new();
        let tiers: Vec<RiskTier> = demo_scenarios()
            .expect("scenarios build")
            .iter()
            .map(|(_, answers)| engine.assess(answers).tier)
            .collect();

        assert_eq!(tiers, vec![RiskTier::Low, RiskTier::Medium, RiskTier::High]);
    }
}

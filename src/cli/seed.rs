use super::ui;
use crate::core::catalog::FundStore;
use crate::seed::{self, SeedKind, SeedOutcome, SeedReport};
use anyhow::Result;

fn print_outcome(outcome: &SeedOutcome) {
    match outcome {
        SeedOutcome::Added { name } => {
            println!("{} {}", ui::style_text("Added:", ui::StyleType::Success), name);
        }
        SeedOutcome::Failed { name, error } => {
            eprintln!(
                "{} {}",
                ui::style_text(&format!("Failed to add {name}:"), ui::StyleType::Error),
                error
            );
        }
    }
}

/// Runs the given loaders in order, printing each record's outcome.
pub async fn run(
    kinds: &[SeedKind],
    store: &(dyn FundStore + Send + Sync),
) -> Result<Vec<SeedReport>> {
    let mut reports = Vec::new();

    for (i, kind) in kinds.iter().enumerate() {
        println!(
            "{}",
            ui::style_text(&format!("Seeding {}...", kind.title()), ui::StyleType::Title)
        );

        let report = seed::run(*kind, store, &print_outcome).await?;

        println!(
            "\n{} Processed {} {}.",
            ui::style_text("Seeding complete!", ui::StyleType::Heading),
            report.processed,
            kind.label()
        );
        if !report.failures.is_empty() {
            println!(
                "{}",
                ui::style_text(
                    &format!("{} of them could not be added.", report.failures.len()),
                    ui::StyleType::Error
                )
            );
        }

        if i < kinds.len() - 1 {
            ui::print_separator();
        }
        reports.push(report);
    }

    Ok(reports)
}

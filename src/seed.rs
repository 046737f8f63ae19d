//! Seed loaders for the fund catalog
//!
//! Each loader owns a fixed, hand-authored list of records of one type and
//! inserts them one at a time. A record that fails to insert is reported and
//! skipped; the remaining records are still attempted.

use crate::core::catalog::FundStore;
use crate::core::fund::{FundRecord, FundType};
use anyhow::{Context, Result, bail};
use std::fmt::Display;
use tracing::{error, info};

const GREEN_FUNDS: &str = include_str!("../data/seed/green_funds.yaml");
const GREEN_BONDS: &str = include_str!("../data/seed/green_bonds.yaml");
const INVITS: &str = include_str!("../data/seed/invits.yaml");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedKind {
    Funds,
    Bonds,
    Invits,
}

impl SeedKind {
    pub const ALL: [SeedKind; 3] = [SeedKind::Funds, SeedKind::Bonds, SeedKind::Invits];

    pub fn fund_type(&self) -> FundType {
        match self {
            SeedKind::Funds => FundType::GreenFund,
            SeedKind::Bonds => FundType::GreenBond,
            SeedKind::Invits => FundType::Invit,
        }
    }

    /// Plural noun used in progress and summary lines.
    pub fn label(&self) -> &'static str {
        match self {
            SeedKind::Funds => "funds",
            SeedKind::Bonds => "bonds",
            SeedKind::Invits => "InvITs",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SeedKind::Funds => "green mutual funds",
            SeedKind::Bonds => "green bonds",
            SeedKind::Invits => "InvITs",
        }
    }

    fn source(&self) -> &'static str {
        match self {
            SeedKind::Funds => GREEN_FUNDS,
            SeedKind::Bonds => GREEN_BONDS,
            SeedKind::Invits => INVITS,
        }
    }

    /// Parses the embedded seed list for this kind.
    pub fn records(&self) -> Result<Vec<FundRecord>> {
        parse_records(self.source(), self.fund_type())
            .with_context(|| format!("Failed to load seed data for {}", self.label()))
    }
}

impl Display for SeedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SeedKind::Funds => "funds",
                SeedKind::Bonds => "bonds",
                SeedKind::Invits => "invits",
            }
        )
    }
}

/// Parses a YAML list of records and checks each one is of `expected` type.
pub fn parse_records(source: &str, expected: FundType) -> Result<Vec<FundRecord>> {
    let records: Vec<FundRecord> = serde_yaml::from_str(source)?;
    if let Some(stray) = records.iter().find(|r| r.fund_type != expected) {
        bail!(
            "Seed list for {} contains {} of type {}",
            expected,
            stray.name,
            stray.fund_type
        );
    }
    Ok(records)
}

/// Result of inserting one record.
#[derive(Debug, Clone, PartialEq)]
pub enum SeedOutcome {
    Added { name: String },
    Failed { name: String, error: String },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeedReport {
    pub processed: usize,
    pub inserted: usize,
    pub failures: Vec<(String, String)>,
}

impl SeedReport {
    fn record(&mut self, outcome: &SeedOutcome) {
        self.processed += 1;
        match outcome {
            SeedOutcome::Added { .. } => self.inserted += 1,
            SeedOutcome::Failed { name, error } => {
                self.failures.push((name.clone(), error.clone()));
            }
        }
    }
}

/// Inserts `records` one by one, awaiting each insert before the next.
///
/// Per-record failures (validation or storage) are logged, passed to
/// `on_outcome` and counted; they never stop the loop.
pub async fn insert_all(
    records: &[FundRecord],
    store: &(dyn FundStore + Send + Sync),
    on_outcome: &(dyn Fn(&SeedOutcome) + Sync),
) -> SeedReport {
    let mut report = SeedReport::default();

    for record in records {
        let result = match record.validate() {
            Ok(()) => store.insert(record).await,
            Err(e) => Err(e),
        };

        let outcome = match result {
            Ok(()) => {
                info!(name = %record.name, "Added fund");
                SeedOutcome::Added {
                    name: record.name.clone(),
                }
            }
            Err(e) => {
                error!(name = %record.name, error = %e, "Failed to add fund");
                SeedOutcome::Failed {
                    name: record.name.clone(),
                    error: format!("{e:#}"),
                }
            }
        };

        on_outcome(&outcome);
        report.record(&outcome);
    }

    report
}

/// Runs one loader: loads its seed list, then inserts every record.
pub async fn run(
    kind: SeedKind,
    store: &(dyn FundStore + Send + Sync),
    on_outcome: &(dyn Fn(&SeedOutcome) + Sync),
) -> Result<SeedReport> {
    info!("Seeding {}...", kind.title());
    let records = kind.records()?;
    let report = insert_all(&records, store, on_outcome).await;
    info!(
        processed = report.processed,
        inserted = report.inserted,
        failed = report.failures.len(),
        "Seeding {} complete",
        kind.label()
    );
    Ok(report)
}

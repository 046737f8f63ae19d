//! Fund catalog records

use anyhow::{Result, anyhow, bail};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Asset class of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FundType {
    GreenFund,
    GreenBond,
    Invit,
}

impl FundType {
    /// All types in display order.
    pub const ALL: [FundType; 3] = [FundType::GreenFund, FundType::GreenBond, FundType::Invit];

    pub fn id(&self) -> &'static str {
        match self {
            FundType::GreenFund => "GREEN_FUND",
            FundType::GreenBond => "GREEN_BOND",
            FundType::Invit => "INVIT",
        }
    }

    /// Whether records of this type carry a fixed return instead of growth rates.
    pub fn has_fixed_return(&self) -> bool {
        matches!(self, FundType::GreenBond)
    }
}

impl Display for FundType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for FundType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "GREEN_FUND" => Ok(FundType::GreenFund),
            "GREEN_BOND" => Ok(FundType::GreenBond),
            "INVIT" => Ok(FundType::Invit),
            _ => Err(anyhow!("Invalid fund type: {}", s)),
        }
    }
}

/// A catalog entry as stored in the `funds` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub fund_type: FundType,
    pub nav: Decimal,
    pub min_investment: Decimal,
    #[serde(default, rename = "cagr1y", skip_serializing_if = "Option::is_none")]
    pub cagr_1y: Option<Decimal>,
    #[serde(default, rename = "cagr3y", skip_serializing_if = "Option::is_none")]
    pub cagr_3y: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_return: Option<Decimal>,
    pub expense_ratio: Decimal,
    pub launch_date: NaiveDate,
    pub description: String,
}

/// The return figures that apply to a record's type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Returns {
    Growth { cagr_1y: Decimal, cagr_3y: Decimal },
    Fixed { rate: Decimal },
}

impl FundRecord {
    pub fn returns(&self) -> Result<Returns> {
        if self.fund_type.has_fixed_return() {
            let rate = self
                .fixed_return
                .ok_or_else(|| anyhow!("{} is missing a fixed return", self.name))?;
            Ok(Returns::Fixed { rate })
        } else {
            match (self.cagr_1y, self.cagr_3y) {
                (Some(cagr_1y), Some(cagr_3y)) => Ok(Returns::Growth { cagr_1y, cagr_3y }),
                _ => Err(anyhow!("{} is missing 1Y/3Y CAGR", self.name)),
            }
        }
    }

    /// Checks that the record carries exactly the figures its type calls for.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            bail!("Fund name must not be empty");
        }

        for (label, value) in [
            ("nav", self.nav),
            ("minInvestment", self.min_investment),
            ("expenseRatio", self.expense_ratio),
        ] {
            if value.is_sign_negative() {
                bail!("{}: {} must not be negative ({})", self.name, label, value);
            }
        }

        self.returns()?;

        if self.fund_type.has_fixed_return() {
            if self.cagr_1y.is_some() || self.cagr_3y.is_some() {
                bail!("{}: {} must not carry CAGR figures", self.name, self.fund_type);
            }
        } else if self.fixed_return.is_some() {
            bail!("{}: {} must not carry a fixed return", self.name, self.fund_type);
        }

        Ok(())
    }
}

//! Display configuration for the closed set of catalog categories

use crate::core::fund::FundType;
use anyhow::{Result, anyhow, bail};
use std::fmt::Display;

const DISCOVER_PATH: &str = "/discover";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Leaf,
    Building,
    Building2,
    TrendingUp,
    Cloud,
    Wind,
    TreePine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Green,
    Emerald,
    Blue,
    Teal,
    Amber,
    Purple,
    Sky,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryConfig {
    pub fund_type: FundType,
    /// Short label used by the category grid.
    pub label: &'static str,
    /// Longer title used by the explore carousel.
    pub title: &'static str,
    pub description: &'static str,
    pub grid_icon: Icon,
    pub carousel_icon: Icon,
    pub grid_accent: Accent,
    pub carousel_accent: Accent,
}

impl CategoryConfig {
    pub fn link(&self) -> DiscoverLink {
        DiscoverLink(self.fund_type)
    }
}

pub fn category(fund_type: FundType) -> CategoryConfig {
    match fund_type {
        FundType::GreenFund => CategoryConfig {
            fund_type,
            label: "Green Funds",
            title: "Green Mutual Funds",
            description: "ESG & renewable energy funds",
            grid_icon: Icon::TrendingUp,
            carousel_icon: Icon::Leaf,
            grid_accent: Accent::Emerald,
            carousel_accent: Accent::Green,
        },
        FundType::GreenBond => CategoryConfig {
            fund_type,
            label: "Green Bonds",
            title: "Green Bonds",
            description: "Fixed return green bonds",
            grid_icon: Icon::Building,
            carousel_icon: Icon::Building,
            grid_accent: Accent::Blue,
            carousel_accent: Accent::Blue,
        },
        FundType::Invit => CategoryConfig {
            fund_type,
            label: "InvITs",
            title: "Green InvITs",
            description: "Infrastructure trusts",
            grid_icon: Icon::Building2,
            carousel_icon: Icon::TrendingUp,
            grid_accent: Accent::Amber,
            carousel_accent: Accent::Purple,
        },
    }
}

/// Categories in display order.
pub fn categories() -> Vec<CategoryConfig> {
    FundType::ALL.into_iter().map(category).collect()
}

/// A link to the catalog filtered by one fund type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscoverLink(pub FundType);

impl DiscoverLink {
    pub fn fund_type(&self) -> FundType {
        self.0
    }

    pub fn parse(link: &str) -> Result<Self> {
        let (path, query) = link
            .split_once('?')
            .ok_or_else(|| anyhow!("Discover link has no query: {}", link))?;
        if path != DISCOVER_PATH {
            bail!("Not a discover link: {}", link);
        }

        let value = query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find_map(|(key, value)| (key == "type").then_some(value))
            .ok_or_else(|| anyhow!("Discover link has no type parameter: {}", link))?;

        Ok(DiscoverLink(value.parse()?))
    }
}

impl Display for DiscoverLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}?type={}", DISCOVER_PATH, self.0)
    }
}

//! Sustainability impact figures and their display formatting

use crate::core::category::{Accent, Icon};
use rust_decimal::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpactMetrics {
    /// Kilograms of CO2 avoided.
    pub co2_avoided: f64,
    /// kWh of clean energy generated.
    pub clean_energy_generated: f64,
    pub trees_equivalent: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricRow {
    pub id: &'static str,
    pub icon: Icon,
    pub accent: Accent,
    pub value: String,
    pub label: &'static str,
}

impl ImpactMetrics {
    pub fn rows(&self) -> Vec<MetricRow> {
        vec![
            MetricRow {
                id: "co2",
                icon: Icon::Cloud,
                accent: Accent::Sky,
                value: to_fixed(self.co2_avoided, 1),
                label: "kg CO₂ avoided",
            },
            MetricRow {
                id: "energy",
                icon: Icon::Wind,
                accent: Accent::Emerald,
                value: to_fixed(self.clean_energy_generated, 0),
                label: "kWh clean energy",
            },
            MetricRow {
                id: "trees",
                icon: Icon::TreePine,
                accent: Accent::Teal,
                value: self.trees_equivalent.to_string(),
                label: "trees equivalent",
            },
        ]
    }
}

/// Formats `value` with exactly `digits` decimal places.
///
/// Rounds the exact binary value half away from zero, so `12.345` (stored as
/// 12.3449...) gives `12.3` while an exact tie such as `0.25` gives `0.3`.
pub fn to_fixed(value: f64, digits: u32) -> String {
    match Decimal::from_f64_retain(value) {
        Some(exact) => {
            let mut rounded =
                exact.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(digits);
            rounded.to_string()
        }
        None => format!("{:.*}", digits as usize, value),
    }
}

use serde::{Deserialize, Serialize};

use crate::tip::tier::TipTier;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TipOutcome {
    /// `None` when the entered cost could not be read.
    pub cost_of_service: Option<f64>,
    pub tier: TipTier,
    pub round_up: bool,
    pub tip: f64,
}

pub fn parse_cost_of_service(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|cost| cost.is_finite() && *cost >= 0.0)
}

pub fn calculate_tip(cost_of_service: f64, tier: TipTier, round_up: bool) -> f64 {
    let tip = tier.percentage() * cost_of_service;
    if round_up { tip.ceil() } else { tip }
}

pub fn tip_from_input(text: &str, tier: TipTier, round_up: bool) -> TipOutcome {
    let cost_of_service = parse_cost_of_service(text);
    let tip = cost_of_service
        .map(|cost| calculate_tip(cost, tier, round_up))
        .unwrap_or(0.0);

    TipOutcome {
        cost_of_service,
        tier,
        round_up,
        tip,
    }
}

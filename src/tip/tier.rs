use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::tip::error::{TipError, invalid_tier};

/// Service quality choice; exactly one tier applies per calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TipTier {
    Amazing,
    Good,
    #[default]
    Ok,
}

impl TipTier {
    pub const ALL: [TipTier; 3] = [TipTier::Amazing, TipTier::Good, TipTier::Ok];

    pub fn percentage(self) -> f64 {
        match self {
            TipTier::Amazing => 0.20,
            TipTier::Good => 0.18,
            TipTier::Ok => 0.15,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TipTier::Amazing => "amazing",
            TipTier::Good => "good",
            TipTier::Ok => "ok",
        }
    }
}

impl fmt::Display for TipTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TipTier {
    type Err = TipError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        TipTier::ALL
            .into_iter()
            .find(|tier| tier.as_str() == normalized)
            .ok_or_else(|| {
                invalid_tier(format!(
                    "unknown tip tier '{value}', expected one of: amazing, good, ok"
                ))
            })
    }
}

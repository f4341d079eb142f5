use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TipErrorKind {
    InvalidTier,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipError {
    pub kind: TipErrorKind,
    pub message: String,
}

impl TipError {
    pub fn new(kind: TipErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for TipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for TipError {}

pub fn invalid_tier(message: impl Into<String>) -> TipError {
    TipError::new(TipErrorKind::InvalidTier, message)
}

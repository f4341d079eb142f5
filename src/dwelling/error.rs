use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DwellingErrorKind {
    InvalidArgument,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DwellingError {
    pub kind: DwellingErrorKind,
    pub message: String,
}

impl DwellingError {
    pub fn new(kind: DwellingErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for DwellingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for DwellingError {}

pub fn invalid_argument(message: impl Into<String>) -> DwellingError {
    DwellingError::new(DwellingErrorKind::InvalidArgument, message)
}

pub(crate) fn ensure_positive_dimension(name: &str, value: f64) -> Result<f64, DwellingError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(invalid_argument(format!(
            "{name} must be a finite value greater than zero, got {value}"
        )));
    }
    Ok(value)
}

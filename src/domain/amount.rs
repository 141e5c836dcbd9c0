use super::RecordError;
use std::{cmp::Ordering, fmt};

/// A monetary amount as found in the export, normalized to a finite `f64`.
///
/// The export writes amounts with a comma as the decimal separator
/// (`928,14`), so every comma is replaced with a dot before parsing.
#[derive(Debug, Clone, Copy)]
pub struct Amount(f64);

impl Amount {
    pub fn parse(field: &'static str, s: &str) -> Result<Amount, RecordError> {
        match s.trim().replace(',', ".").parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Self(value)),
            _ => Err(RecordError::MalformedAmount {
                field,
                value: s.to_string(),
            }),
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0.0
    }
}

impl From<Amount> for f64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

// Always keeps a fractional part: `100.0`, `928.14`.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl PartialEq for Amount {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Amount {}

impl PartialOrd for Amount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Amount {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialEq<f64> for Amount {
    fn eq(&self, other: &f64) -> bool {
        self.0 == *other
    }
}

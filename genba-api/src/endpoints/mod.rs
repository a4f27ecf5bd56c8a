pub mod account_titles;
pub mod embeddings;

use serde::{Deserialize, Serialize};

/// Cosine distance reported by the account-title index.
///
/// The index contract is `0.0..=1.0`, where `0.0` means the same direction.
#[derive(Default, Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Distance(f64);

impl Distance {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn inner(&self) -> f64 {
        self.0
    }

    pub fn is_in_contract(&self) -> bool {
        (0.0..=1.0).contains(&self.0)
    }

    /// `round((1 - distance) * 100)`, halves rounding toward positive infinity.
    ///
    /// Not clamped: a distance outside the contract yields a value outside
    /// `0..=100` so that callers can see the violation.
    pub fn similarity_percent(&self) -> i64 {
        ((1.0 - self.0) * 100.0 + 0.5).floor() as i64
    }
}

impl From<f64> for Distance {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<Distance> for f64 {
    fn from(value: Distance) -> Self {
        value.0
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}

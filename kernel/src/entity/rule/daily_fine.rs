use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Currency units charged per overdue day.
#[derive(Debug, Clone, Copy, PartialEq, Fromln, AsRefln, Serialize, Deserialize)]
pub struct DailyFine(f64);

impl DailyFine {
    pub fn new(rate: impl Into<f64>) -> Self {
        Self(rate.into())
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }
}

use serde::{Deserialize, Serialize};
use time::Duration;
use vodca::{AsRefln, Fromln};

/// Loan duration in days.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Fromln, AsRefln, Serialize, Deserialize)]
pub struct BorrowPeriod(i32);

impl BorrowPeriod {
    pub fn new(days: impl Into<i32>) -> Self {
        Self(days.into())
    }

    pub fn is_valid(&self) -> bool {
        self.0 > 0
    }

    pub fn duration(&self) -> Duration {
        Duration::days(i64::from(self.0))
    }
}

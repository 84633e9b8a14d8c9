use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

use crate::entity::{DueAt, ReturnedAt};

#[derive(Debug, Clone, Copy, PartialEq, Default, Fromln, AsRefln, Serialize, Deserialize)]
pub struct FineAmount(f64);

impl FineAmount {
    pub fn new(amount: impl Into<f64>) -> Self {
        Self(amount.into())
    }
}

/// Whole days between the due date and the return date, truncated toward zero.
/// Early and on-time returns are never overdue.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Fromln, AsRefln, Serialize, Deserialize,
)]
pub struct OverdueDays(i64);

impl OverdueDays {
    pub fn new(days: impl Into<i64>) -> Self {
        Self(days.into().max(0))
    }

    pub fn between(due_at: &DueAt, returned_at: &ReturnedAt) -> Self {
        let late = *returned_at.as_ref() - *due_at.as_ref();
        Self::new(late.whole_days())
    }

    pub fn is_overdue(&self) -> bool {
        self.0 > 0
    }
}

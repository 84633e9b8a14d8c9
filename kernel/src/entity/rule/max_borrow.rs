use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Cap on the number of open loans a single reader may hold.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Fromln, AsRefln, Serialize, Deserialize)]
pub struct MaxBorrow(i32);

impl MaxBorrow {
    pub fn new(limit: impl Into<i32>) -> Self {
        Self(limit.into())
    }

    pub fn is_valid(&self) -> bool {
        self.0 > 0
    }
}

use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(
    Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Fromln, AsRefln, Serialize, Deserialize,
)]
pub struct ReaderId(i64);

impl ReaderId {
    pub fn new(id: impl Into<i64>) -> Self {
        Self(id.into())
    }
}

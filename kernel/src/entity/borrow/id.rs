use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(
    Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize, Fromln, AsRefln,
)]
pub struct RecordId(i64);

impl RecordId {
    pub fn new(id: impl Into<i64>) -> Self {
        Self(id.into())
    }
}

use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Catalog item reference. The catalog itself lives outside of the ledger.
#[derive(
    Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize, Fromln, AsRefln,
)]
pub struct BookId(i64);

impl BookId {
    pub fn new(id: impl Into<i64>) -> Self {
        Self(id.into())
    }
}

use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct ReaderContact(String);

impl ReaderContact {
    pub fn new(contact: impl Into<String>) -> Self {
        Self(contact.into())
    }
}

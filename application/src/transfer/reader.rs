use std::fmt::Display;

use kernel::prelude::entity::{DestructReader, Reader};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderDto {
    pub id: i64,
    pub name: String,
    pub contact: String,
}

impl From<Reader> for ReaderDto {
    fn from(value: Reader) -> Self {
        let DestructReader { id, name, contact } = value.into_destruct();
        Self {
            id: id.into(),
            name: name.into(),
            contact: contact.into(),
        }
    }
}

impl Display for ReaderDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Reader ID: {} | Name: {} | Contact: {}",
            self.id, self.name, self.contact
        )
    }
}

pub struct CreateReaderDto {
    pub name: String,
    pub contact: String,
}

pub struct GetReaderDto {
    pub id: i64,
}

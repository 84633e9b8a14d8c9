mod contact;
mod id;
mod name;

pub use self::{contact::*, id::*, name::*};
use destructure::Destructure;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, Destructure, References)]
pub struct Reader {
    id: ReaderId,
    name: ReaderName,
    contact: ReaderContact,
}

impl Reader {
    pub fn new(id: ReaderId, name: ReaderName, contact: ReaderContact) -> Self {
        Self { id, name, contact }
    }
}

use error_stack::Report;

use kernel::interface::query::ReaderQuery;
use kernel::interface::update::ReaderModifier;
use kernel::prelude::entity::{Reader, ReaderId};
use kernel::KernelError;

use crate::database::memory::MemoryTransaction;

pub struct MemoryReaderRepository;

#[async_trait::async_trait]
impl ReaderQuery for MemoryReaderRepository {
    type Transaction = MemoryTransaction;

    async fn find_by_id(
        &self,
        con: &mut MemoryTransaction,
        id: &ReaderId,
    ) -> error_stack::Result<Option<Reader>, KernelError> {
        Ok(con.store().readers.get(id).cloned())
    }
}

#[async_trait::async_trait]
impl ReaderModifier for MemoryReaderRepository {
    type Transaction = MemoryTransaction;

    async fn issue_id(
        &self,
        con: &mut MemoryTransaction,
    ) -> error_stack::Result<ReaderId, KernelError> {
        Ok(con.issue_reader_id())
    }

    async fn create(
        &self,
        con: &mut MemoryTransaction,
        reader: &Reader,
    ) -> error_stack::Result<(), KernelError> {
        if con.store().readers.contains_key(reader.id()) {
            return Err(Report::new(KernelError::Internal)
                .attach_printable(format!("reader {} already exists", reader.id().as_ref())));
        }
        con.put_reader(reader.clone());
        Ok(())
    }
}

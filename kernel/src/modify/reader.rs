use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Reader, ReaderId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait ReaderModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn issue_id(
        &self,
        con: &mut Self::Transaction,
    ) -> error_stack::Result<ReaderId, KernelError>;
    async fn create(
        &self,
        con: &mut Self::Transaction,
        reader: &Reader,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnReaderModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type ReaderModifier: ReaderModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn reader_modifier(&self) -> &Self::ReaderModifier;
}

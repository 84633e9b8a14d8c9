use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{BorrowRecord, RecordId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait BorrowRecordModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    /// Allocates the next record id from the ledger's own sequence.
    async fn issue_id(
        &self,
        con: &mut Self::Transaction,
    ) -> error_stack::Result<RecordId, KernelError>;
    async fn create(
        &self,
        con: &mut Self::Transaction,
        record: &BorrowRecord,
    ) -> error_stack::Result<(), KernelError>;
    async fn update(
        &self,
        con: &mut Self::Transaction,
        record: &BorrowRecord,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnBorrowRecordModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type BorrowRecordModifier: BorrowRecordModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn borrow_record_modifier(&self) -> &Self::BorrowRecordModifier;
}

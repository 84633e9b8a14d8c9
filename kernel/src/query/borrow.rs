use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{BorrowRecord, ReaderId, RecordId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait BorrowRecordQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn find_by_id(
        &self,
        con: &mut Self::Transaction,
        id: &RecordId,
    ) -> error_stack::Result<Option<BorrowRecord>, KernelError>;

    /// Open and closed records of the reader, oldest first.
    async fn find_by_reader_id(
        &self,
        con: &mut Self::Transaction,
        reader_id: &ReaderId,
    ) -> error_stack::Result<Vec<BorrowRecord>, KernelError>;

    async fn count_open_by_reader_id(
        &self,
        con: &mut Self::Transaction,
        reader_id: &ReaderId,
    ) -> error_stack::Result<usize, KernelError>;
}

pub trait DependOnBorrowRecordQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type BorrowRecordQuery: BorrowRecordQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn borrow_record_query(&self) -> &Self::BorrowRecordQuery;
}

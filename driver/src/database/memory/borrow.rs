use error_stack::Report;

use kernel::interface::query::BorrowRecordQuery;
use kernel::interface::update::BorrowRecordModifier;
use kernel::prelude::entity::{BorrowRecord, ReaderId, RecordId};
use kernel::KernelError;

use crate::database::memory::MemoryTransaction;

pub struct MemoryBorrowRecordRepository;

#[async_trait::async_trait]
impl BorrowRecordQuery for MemoryBorrowRecordRepository {
    type Transaction = MemoryTransaction;

    async fn find_by_id(
        &self,
        con: &mut MemoryTransaction,
        id: &RecordId,
    ) -> error_stack::Result<Option<BorrowRecord>, KernelError> {
        Ok(con.store().records.get(id).cloned())
    }

    async fn find_by_reader_id(
        &self,
        con: &mut MemoryTransaction,
        reader_id: &ReaderId,
    ) -> error_stack::Result<Vec<BorrowRecord>, KernelError> {
        Ok(con
            .store()
            .records
            .values()
            .filter(|record| record.reader_id() == reader_id)
            .cloned()
            .collect())
    }

    async fn count_open_by_reader_id(
        &self,
        con: &mut MemoryTransaction,
        reader_id: &ReaderId,
    ) -> error_stack::Result<usize, KernelError> {
        Ok(con
            .store()
            .records
            .values()
            .filter(|record| record.reader_id() == reader_id && !record.is_returned())
            .count())
    }
}

#[async_trait::async_trait]
impl BorrowRecordModifier for MemoryBorrowRecordRepository {
    type Transaction = MemoryTransaction;

    async fn issue_id(
        &self,
        con: &mut MemoryTransaction,
    ) -> error_stack::Result<RecordId, KernelError> {
        Ok(con.issue_record_id())
    }

    async fn create(
        &self,
        con: &mut MemoryTransaction,
        record: &BorrowRecord,
    ) -> error_stack::Result<(), KernelError> {
        if con.store().records.contains_key(record.id()) {
            return Err(Report::new(KernelError::Internal)
                .attach_printable(format!("record {} already exists", record.id().as_ref())));
        }
        con.put_record(record.clone());
        Ok(())
    }

    async fn update(
        &self,
        con: &mut MemoryTransaction,
        record: &BorrowRecord,
    ) -> error_stack::Result<(), KernelError> {
        if !con.store().records.contains_key(record.id()) {
            return Err(Report::new(KernelError::RecordNotFound)
                .attach_printable(format!("record {} does not exist", record.id().as_ref())));
        }
        con.put_record(record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use time::macros::datetime;

    use kernel::interface::database::{DatabaseConnection, Transaction};
    use kernel::interface::query::{BorrowRecordQuery, DependOnBorrowRecordQuery};
    use kernel::interface::update::{BorrowRecordModifier, DependOnBorrowRecordModifier};
    use kernel::prelude::entity::{
        BookId, BorrowRecord, BorrowRule, BorrowedAt, ReaderId, ReturnedAt,
    };
    use kernel::KernelError;

    use crate::database::MemoryDatabase;

    #[tokio::test]
    async fn tracks_open_records_per_reader() -> error_stack::Result<(), KernelError> {
        let rule = BorrowRule::default();
        let db = MemoryDatabase::new(rule.clone());
        let alice = ReaderId::new(1000);
        let bob = ReaderId::new(1001);
        let borrowed_at = BorrowedAt::new(datetime!(2024-04-01 10:00 UTC));

        let mut con = db.transact().await?;
        let mut records = Vec::new();
        for (reader, book) in [(alice, 1), (alice, 2), (bob, 3)] {
            let id = db.borrow_record_modifier().issue_id(&mut con).await?;
            let record = BorrowRecord::open(id, reader, BookId::new(book), borrowed_at, &rule)?;
            db.borrow_record_modifier().create(&mut con, &record).await?;
            records.push(record);
        }

        let mut returned = records[0].clone();
        returned.close(ReturnedAt::new(datetime!(2024-04-02 10:00 UTC)), &rule)?;
        db.borrow_record_modifier().update(&mut con, &returned).await?;

        let query = db.borrow_record_query();
        assert_eq!(query.count_open_by_reader_id(&mut con, &alice).await?, 1);
        assert_eq!(query.count_open_by_reader_id(&mut con, &bob).await?, 1);

        let history = query.find_by_reader_id(&mut con, &alice).await?;
        let ids = history.iter().map(|record| *record.id()).collect::<Vec<_>>();
        assert_eq!(ids, vec![*records[0].id(), *records[1].id()]);
        assert_eq!(
            query.find_by_id(&mut con, returned.id()).await?,
            Some(returned)
        );
        Ok(())
    }

    #[tokio::test]
    async fn updating_unknown_record_fails() -> error_stack::Result<(), KernelError> {
        let rule = BorrowRule::default();
        let db = MemoryDatabase::new(rule.clone());
        let mut con = db.transact().await?;
        let id = db.borrow_record_modifier().issue_id(&mut con).await?;
        let record = BorrowRecord::open(
            id,
            ReaderId::new(1000),
            BookId::new(1),
            BorrowedAt::new(datetime!(2024-04-01 10:00 UTC)),
            &rule,
        )?;

        let error = db
            .borrow_record_modifier()
            .update(&mut con, &record)
            .await
            .expect_err("record was never created");
        assert!(matches!(
            error.current_context(),
            KernelError::RecordNotFound
        ));
        Ok(())
    }

    #[tokio::test]
    async fn rolled_back_update_restores_the_record() -> error_stack::Result<(), KernelError> {
        let rule = BorrowRule::default();
        let db = MemoryDatabase::new(rule.clone());

        let mut con = db.transact().await?;
        let id = db.borrow_record_modifier().issue_id(&mut con).await?;
        let record = BorrowRecord::open(
            id,
            ReaderId::new(1000),
            BookId::new(1),
            BorrowedAt::new(datetime!(2024-04-01 10:00 UTC)),
            &rule,
        )?;
        db.borrow_record_modifier().create(&mut con, &record).await?;
        con.commit().await?;

        let mut con = db.transact().await?;
        let mut closed = record.clone();
        closed.close(ReturnedAt::new(datetime!(2024-05-06 10:00 UTC)), &rule)?;
        db.borrow_record_modifier().update(&mut con, &closed).await?;
        con.roll_back().await?;

        let mut con = db.transact().await?;
        let query = db.borrow_record_query();
        assert_eq!(query.find_by_id(&mut con, &id).await?, Some(record));
        assert_eq!(
            query
                .count_open_by_reader_id(&mut con, &ReaderId::new(1000))
                .await?,
            1
        );
        Ok(())
    }
}

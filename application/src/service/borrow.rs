use error_stack::Report;
use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{
    BorrowRecordQuery, BorrowRuleQuery, DependOnBorrowRecordQuery, DependOnBorrowRuleQuery,
};
use kernel::interface::update::{BorrowRecordModifier, DependOnBorrowRecordModifier};
use kernel::prelude::entity::{BookId, BorrowRecord, BorrowedAt, ReaderId, RecordId, ReturnedAt};
use kernel::KernelError;

use crate::transfer::{
    BorrowBookDto, BorrowRecordDto, CurrentBorrowsDto, GetBorrowRecordsDto, ReturnBookDto,
    ReturnedDto,
};

#[async_trait::async_trait]
pub trait BorrowService:
    'static
    + Sync
    + Send
    + DependOnBorrowRecordQuery
    + DependOnBorrowRecordModifier
    + DependOnBorrowRuleQuery
{
    async fn borrow_book(
        &self,
        dto: BorrowBookDto,
    ) -> error_stack::Result<BorrowRecordDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let rule = self.borrow_rule_query().current().await?;

        let reader_id = ReaderId::new(dto.reader_id);
        let open = self
            .borrow_record_query()
            .count_open_by_reader_id(&mut connection, &reader_id)
            .await?;
        if let Err(report) = rule.check_limit(open) {
            tracing::warn!(reader_id = dto.reader_id, open, "borrow rejected");
            return Err(report);
        }

        let id = self.borrow_record_modifier().issue_id(&mut connection).await?;
        let record = BorrowRecord::open(
            id,
            reader_id,
            BookId::new(dto.book_id),
            BorrowedAt::new(dto.borrowed_at),
            &rule,
        )?;
        self.borrow_record_modifier()
            .create(&mut connection, &record)
            .await?;
        connection.commit().await?;

        tracing::info!(
            record_id = *id.as_ref(),
            reader_id = dto.reader_id,
            book_id = dto.book_id,
            "book borrowed"
        );
        Ok(BorrowRecordDto::from(record))
    }
}

impl<T> BorrowService for T where
    T: DependOnBorrowRecordQuery + DependOnBorrowRecordModifier + DependOnBorrowRuleQuery
{
}

#[async_trait::async_trait]
pub trait ReturnService:
    'static
    + Sync
    + Send
    + DependOnBorrowRecordQuery
    + DependOnBorrowRecordModifier
    + DependOnBorrowRuleQuery
{
    async fn return_book(&self, dto: ReturnBookDto) -> error_stack::Result<ReturnedDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let rule = self.borrow_rule_query().current().await?;

        let id = RecordId::new(dto.record_id);
        let mut record = self
            .borrow_record_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::RecordNotFound)
                    .attach_printable(format!("record {} does not exist", dto.record_id))
            })?;

        let fine = record.close(ReturnedAt::new(dto.returned_at), &rule)?;
        self.borrow_record_modifier()
            .update(&mut connection, &record)
            .await?;
        connection.commit().await?;

        let overdue = record.overdue_days();
        if overdue.is_overdue() {
            tracing::info!(
                record_id = dto.record_id,
                overdue_days = *overdue.as_ref(),
                fine = *fine.as_ref(),
                "book returned late"
            );
        } else {
            tracing::info!(record_id = dto.record_id, "book returned");
        }

        Ok(ReturnedDto {
            record_id: dto.record_id,
            overdue_days: overdue.into(),
            fine: fine.into(),
        })
    }
}

impl<T> ReturnService for T where
    T: DependOnBorrowRecordQuery + DependOnBorrowRecordModifier + DependOnBorrowRuleQuery
{
}

#[async_trait::async_trait]
pub trait GetBorrowService: 'static + Sync + Send + DependOnBorrowRecordQuery {
    async fn records_for_reader(
        &self,
        dto: GetBorrowRecordsDto,
    ) -> error_stack::Result<Vec<BorrowRecordDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let reader_id = ReaderId::new(dto.reader_id);
        let records = self
            .borrow_record_query()
            .find_by_reader_id(&mut connection, &reader_id)
            .await?;

        Ok(records.into_iter().map(BorrowRecordDto::from).collect())
    }

    async fn open_loan_count(
        &self,
        dto: GetBorrowRecordsDto,
    ) -> error_stack::Result<usize, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let reader_id = ReaderId::new(dto.reader_id);
        self.borrow_record_query()
            .count_open_by_reader_id(&mut connection, &reader_id)
            .await
    }

    async fn current_borrows(
        &self,
        dto: GetBorrowRecordsDto,
    ) -> error_stack::Result<CurrentBorrowsDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let reader_id = ReaderId::new(dto.reader_id);
        let open_count = self
            .borrow_record_query()
            .count_open_by_reader_id(&mut connection, &reader_id)
            .await?;
        let records = self
            .borrow_record_query()
            .find_by_reader_id(&mut connection, &reader_id)
            .await?
            .into_iter()
            .filter(|record| !record.is_returned())
            .map(BorrowRecordDto::from)
            .collect();

        Ok(CurrentBorrowsDto {
            open_count,
            records,
        })
    }
}

impl<T> GetBorrowService for T where T: DependOnBorrowRecordQuery {}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use driver::database::MemoryDatabase;
    use kernel::prelude::entity::{BorrowPeriod, BorrowRule, DailyFine, MaxBorrow};
    use kernel::KernelError;
    use time::macros::datetime;
    use time::{Duration, OffsetDateTime};

    use crate::service::{BorrowService, GetBorrowService, ReturnService};
    use crate::transfer::{BorrowBookDto, GetBorrowRecordsDto, ReturnBookDto};

    const DAY0: OffsetDateTime = datetime!(2024-04-01 09:00 UTC);

    fn day(n: i64) -> OffsetDateTime {
        DAY0 + Duration::days(n)
    }

    fn database(max_borrow: i32) -> error_stack::Result<MemoryDatabase, KernelError> {
        let rule = BorrowRule::new(
            MaxBorrow::new(max_borrow),
            BorrowPeriod::new(30),
            DailyFine::new(0.5),
        )?;
        Ok(MemoryDatabase::new(rule))
    }

    fn borrow(reader_id: i64, book_id: i64, borrowed_at: OffsetDateTime) -> BorrowBookDto {
        BorrowBookDto {
            reader_id,
            book_id,
            borrowed_at,
        }
    }

    fn give_back(record_id: i64, returned_at: OffsetDateTime) -> ReturnBookDto {
        ReturnBookDto {
            record_id,
            returned_at,
        }
    }

    #[tokio::test]
    async fn due_date_is_thirty_days_out() -> error_stack::Result<(), KernelError> {
        let db = database(5)?;
        let record = db.borrow_book(borrow(1, 1, day(0))).await?;
        assert_eq!(record.record_id, 1);
        assert_eq!(record.due_at, day(30));
        assert_eq!(record.returned_at, None);
        assert_eq!(record.fine, 0.0);
        Ok(())
    }

    #[tokio::test]
    async fn record_ids_increase_monotonically() -> error_stack::Result<(), KernelError> {
        let db = database(5)?;
        let first = db.borrow_book(borrow(1, 1, day(0))).await?;
        let second = db.borrow_book(borrow(2, 1, day(0))).await?;
        let third = db.borrow_book(borrow(1, 2, day(1))).await?;
        assert_eq!(
            [first.record_id, second.record_id, third.record_id],
            [1, 2, 3]
        );
        Ok(())
    }

    #[tokio::test]
    async fn late_return_is_fined() -> error_stack::Result<(), KernelError> {
        let db = database(5)?;
        let record = db.borrow_book(borrow(1, 1, day(0))).await?;
        let returned = db.return_book(give_back(record.record_id, day(35))).await?;
        assert_eq!(returned.overdue_days, 5);
        assert_eq!(returned.fine, 2.5);
        Ok(())
    }

    #[tokio::test]
    async fn timely_return_is_free() -> error_stack::Result<(), KernelError> {
        let db = database(5)?;
        let on_due = db.borrow_book(borrow(1, 1, day(0))).await?;
        let early = db.borrow_book(borrow(1, 2, day(0))).await?;

        let returned = db.return_book(give_back(on_due.record_id, day(30))).await?;
        assert_eq!(returned.overdue_days, 0);
        assert_eq!(returned.fine, 0.0);

        let returned = db.return_book(give_back(early.record_id, day(12))).await?;
        assert_eq!(returned.fine, 0.0);
        Ok(())
    }

    #[tokio::test]
    async fn limit_is_enforced_until_a_return() -> error_stack::Result<(), KernelError> {
        let db = database(2)?;
        let reader = || GetBorrowRecordsDto { reader_id: 7 };

        let book_a = db.borrow_book(borrow(7, 100, day(0))).await?;
        db.borrow_book(borrow(7, 200, day(0))).await?;
        assert_eq!(db.open_loan_count(reader()).await?, 2);

        let error = db
            .borrow_book(borrow(7, 300, day(1)))
            .await
            .expect_err("third loan exceeds the limit");
        assert!(matches!(
            error.current_context(),
            KernelError::BorrowLimitExceeded
        ));
        assert_eq!(db.records_for_reader(reader()).await?.len(), 2);

        // other readers are unaffected
        db.borrow_book(borrow(8, 300, day(1))).await?;

        db.return_book(give_back(book_a.record_id, day(2))).await?;
        db.borrow_book(borrow(7, 300, day(2))).await?;
        assert_eq!(db.open_loan_count(reader()).await?, 2);
        Ok(())
    }

    #[tokio::test]
    async fn second_return_is_rejected() -> error_stack::Result<(), KernelError> {
        let db = database(5)?;
        let record = db.borrow_book(borrow(1, 1, day(0))).await?;
        db.return_book(give_back(record.record_id, day(35))).await?;

        let error = db
            .return_book(give_back(record.record_id, day(60)))
            .await
            .expect_err("record is already closed");
        assert!(matches!(
            error.current_context(),
            KernelError::AlreadyReturned
        ));

        let records = db
            .records_for_reader(GetBorrowRecordsDto { reader_id: 1 })
            .await?;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].returned_at, Some(day(35)));
        assert_eq!(records[0].fine, 2.5);
        Ok(())
    }

    #[tokio::test]
    async fn unknown_record_cannot_be_returned() -> error_stack::Result<(), KernelError> {
        let db = database(5)?;
        let error = db
            .return_book(give_back(42, day(1)))
            .await
            .expect_err("nothing was borrowed");
        assert!(matches!(
            error.current_context(),
            KernelError::RecordNotFound
        ));
        Ok(())
    }

    #[tokio::test]
    async fn history_keeps_closed_records() -> error_stack::Result<(), KernelError> {
        let db = database(5)?;
        let record = db.borrow_book(borrow(1, 1, day(0))).await?;
        db.return_book(give_back(record.record_id, day(33))).await?;

        let records = db
            .records_for_reader(GetBorrowRecordsDto { reader_id: 1 })
            .await?;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].record_id, record.record_id);
        assert_eq!(records[0].returned_at, Some(day(33)));
        assert_eq!(records[0].fine, 1.5);

        let current = db
            .current_borrows(GetBorrowRecordsDto { reader_id: 1 })
            .await?;
        assert_eq!(current.open_count, 0);
        assert!(current.records.is_empty());
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_borrows_respect_the_limit() -> error_stack::Result<(), KernelError> {
        let db = Arc::new(database(3)?);

        let handles = (0..16)
            .map(|book_id| {
                let db = Arc::clone(&db);
                tokio::spawn(async move { db.borrow_book(borrow(1, book_id, day(0))).await })
            })
            .collect::<Vec<_>>();

        let mut accepted = 0;
        for handle in handles {
            if let Ok(Ok(_)) = handle.await {
                accepted += 1;
            }
        }

        assert_eq!(accepted, 3);
        assert_eq!(
            db.open_loan_count(GetBorrowRecordsDto { reader_id: 1 })
                .await?,
            3
        );
        Ok(())
    }
}

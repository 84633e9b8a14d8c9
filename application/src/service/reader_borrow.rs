use error_stack::Report;
use kernel::KernelError;
use time::OffsetDateTime;

use crate::service::{BorrowService, GetBorrowService, GetReaderService, ReturnService};
use crate::transfer::{
    BorrowBookDto, BorrowRecordDto, BorrowReportDto, GetBorrowRecordsDto, GetReaderDto, ReaderDto,
    RequestBorrowDto, RequestReturnDto, ReturnBookDto, ReturnedDto,
};

/// Reader-facing entry point: validates the reader against the directory and
/// stamps every action with the current time.
#[async_trait::async_trait]
pub trait ReaderBorrowService:
    'static + Sync + Send + BorrowService + ReturnService + GetBorrowService + GetReaderService
{
    async fn request_borrow(
        &self,
        dto: RequestBorrowDto,
    ) -> error_stack::Result<BorrowRecordDto, KernelError> {
        self.registered_reader(dto.reader_id).await?;
        self.borrow_book(BorrowBookDto {
            reader_id: dto.reader_id,
            book_id: dto.book_id,
            borrowed_at: OffsetDateTime::now_utc(),
        })
        .await
    }

    async fn request_return(
        &self,
        dto: RequestReturnDto,
    ) -> error_stack::Result<ReturnedDto, KernelError> {
        self.return_book(ReturnBookDto {
            record_id: dto.record_id,
            returned_at: OffsetDateTime::now_utc(),
        })
        .await
    }

    async fn borrow_report(
        &self,
        dto: GetBorrowRecordsDto,
    ) -> error_stack::Result<BorrowReportDto, KernelError> {
        let reader = self.registered_reader(dto.reader_id).await?;
        let history = self.records_for_reader(dto).await?;
        Ok(BorrowReportDto::new(reader, history))
    }

    async fn registered_reader(&self, reader_id: i64) -> error_stack::Result<ReaderDto, KernelError> {
        self.get_reader(GetReaderDto { id: reader_id })
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::ReaderNotFound)
                    .attach_printable(format!("reader {reader_id} is not registered"))
            })
    }
}

impl<T> ReaderBorrowService for T where
    T: BorrowService + ReturnService + GetBorrowService + GetReaderService
{
}

#[cfg(test)]
mod test {
    use driver::database::MemoryDatabase;
    use kernel::prelude::entity::BorrowRule;
    use kernel::KernelError;
    use time::{Duration, OffsetDateTime};

    use crate::service::{CreateReaderService, GetBorrowService, ReaderBorrowService};
    use crate::transfer::{
        CreateReaderDto, GetBorrowRecordsDto, RequestBorrowDto, RequestReturnDto,
    };

    async fn with_reader() -> error_stack::Result<(MemoryDatabase, i64), KernelError> {
        let db = MemoryDatabase::new(BorrowRule::default());
        let reader = db
            .create_reader(CreateReaderDto {
                name: "Wang Wu".to_string(),
                contact: "wangwu@lib.com".to_string(),
            })
            .await?;
        Ok((db, reader.id))
    }

    #[tokio::test]
    async fn unknown_reader_cannot_borrow() -> error_stack::Result<(), KernelError> {
        let (db, reader_id) = with_reader().await?;
        let error = db
            .request_borrow(RequestBorrowDto {
                reader_id: reader_id + 1,
                book_id: 5001,
            })
            .await
            .expect_err("reader is not registered");
        assert!(matches!(
            error.current_context(),
            KernelError::ReaderNotFound
        ));
        assert_eq!(
            db.open_loan_count(GetBorrowRecordsDto {
                reader_id: reader_id + 1
            })
            .await?,
            0
        );
        Ok(())
    }

    #[tokio::test]
    async fn borrow_and_return_use_current_time() -> error_stack::Result<(), KernelError> {
        let (db, reader_id) = with_reader().await?;
        let before = OffsetDateTime::now_utc();

        let record = db
            .request_borrow(RequestBorrowDto {
                reader_id,
                book_id: 5001,
            })
            .await?;
        assert!(record.borrowed_at >= before);
        assert_eq!(record.due_at, record.borrowed_at + Duration::days(30));

        let returned = db
            .request_return(RequestReturnDto {
                record_id: record.record_id,
            })
            .await?;
        assert_eq!(returned.overdue_days, 0);
        assert_eq!(returned.fine, 0.0);
        Ok(())
    }

    #[tokio::test]
    async fn report_lists_current_loans_and_history() -> error_stack::Result<(), KernelError> {
        let (db, reader_id) = with_reader().await?;
        let first = db
            .request_borrow(RequestBorrowDto {
                reader_id,
                book_id: 5001,
            })
            .await?;
        db.request_borrow(RequestBorrowDto {
            reader_id,
            book_id: 5002,
        })
        .await?;
        db.request_return(RequestReturnDto {
            record_id: first.record_id,
        })
        .await?;

        let report = db.borrow_report(GetBorrowRecordsDto { reader_id }).await?;
        assert_eq!(report.reader.name, "Wang Wu");
        assert_eq!(report.history.len(), 2);
        assert_eq!(report.current.len(), 1);
        assert_eq!(report.current[0].book_id, 5002);

        let text = report.to_string();
        assert!(text.contains("Book ID: 5001 | Status: returned"));
        assert!(text.contains("Book ID: 5002 | Status: not returned"));
        Ok(())
    }

    #[tokio::test]
    async fn report_requires_a_registered_reader() {
        let db = MemoryDatabase::new(BorrowRule::default());
        let error = db
            .borrow_report(GetBorrowRecordsDto { reader_id: 1000 })
            .await
            .expect_err("no readers registered");
        assert!(matches!(
            error.current_context(),
            KernelError::ReaderNotFound
        ));
    }
}

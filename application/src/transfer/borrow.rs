use kernel::prelude::entity::{BorrowRecord, DestructBorrowRecord};
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq)]
pub struct BorrowRecordDto {
    pub record_id: i64,
    pub reader_id: i64,
    pub book_id: i64,
    pub borrowed_at: OffsetDateTime,
    pub due_at: OffsetDateTime,
    pub returned_at: Option<OffsetDateTime>,
    pub fine: f64,
}

impl BorrowRecordDto {
    pub fn is_returned(&self) -> bool {
        self.returned_at.is_some()
    }
}

impl From<BorrowRecord> for BorrowRecordDto {
    fn from(value: BorrowRecord) -> Self {
        let DestructBorrowRecord {
            id,
            reader_id,
            book_id,
            borrowed_at,
            due_at,
            returned_at,
            fine,
        } = value.into_destruct();
        Self {
            record_id: id.into(),
            reader_id: reader_id.into(),
            book_id: book_id.into(),
            borrowed_at: borrowed_at.into(),
            due_at: due_at.into(),
            returned_at: returned_at.map(Into::into),
            fine: fine.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnedDto {
    pub record_id: i64,
    pub overdue_days: i64,
    pub fine: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentBorrowsDto {
    pub open_count: usize,
    pub records: Vec<BorrowRecordDto>,
}

pub struct BorrowBookDto {
    pub reader_id: i64,
    pub book_id: i64,
    pub borrowed_at: OffsetDateTime,
}

pub struct ReturnBookDto {
    pub record_id: i64,
    pub returned_at: OffsetDateTime,
}

pub struct RequestBorrowDto {
    pub reader_id: i64,
    pub book_id: i64,
}

pub struct RequestReturnDto {
    pub record_id: i64,
}

pub struct GetBorrowRecordsDto {
    pub reader_id: i64,
}

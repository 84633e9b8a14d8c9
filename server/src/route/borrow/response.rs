use crate::controller::Exhaust;
use application::transfer::{BorrowRecordDto, ReturnedDto};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use time::OffsetDateTime;

#[derive(Debug, Serialize)]
pub struct BorrowRecordResponse {
    record_id: i64,
    reader_id: i64,
    book_id: i64,
    #[serde(with = "time::serde::rfc3339")]
    borrowed_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    due_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    returned_at: Option<OffsetDateTime>,
    fine: f64,
}

impl From<BorrowRecordDto> for BorrowRecordResponse {
    fn from(value: BorrowRecordDto) -> Self {
        Self {
            record_id: value.record_id,
            reader_id: value.reader_id,
            book_id: value.book_id,
            borrowed_at: value.borrowed_at,
            due_at: value.due_at,
            returned_at: value.returned_at,
            fine: value.fine,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReturnedResponse {
    record_id: i64,
    overdue_days: i64,
    fine: f64,
}

pub struct Presenter;

impl Exhaust<BorrowRecordDto> for Presenter {
    type To = (StatusCode, Json<BorrowRecordResponse>);
    fn emit(&self, input: BorrowRecordDto) -> Self::To {
        (StatusCode::CREATED, Json(BorrowRecordResponse::from(input)))
    }
}

impl Exhaust<ReturnedDto> for Presenter {
    type To = Json<ReturnedResponse>;
    fn emit(&self, input: ReturnedDto) -> Self::To {
        Json(ReturnedResponse {
            record_id: input.record_id,
            overdue_days: input.overdue_days,
            fine: input.fine,
        })
    }
}

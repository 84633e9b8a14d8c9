use crate::controller::Exhaust;
use crate::route::borrow::BorrowRecordResponse;
use application::transfer::{BorrowRecordDto, BorrowReportDto, CurrentBorrowsDto, ReaderDto};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ReaderResponse {
    id: i64,
    name: String,
    contact: String,
}

impl From<ReaderDto> for ReaderResponse {
    fn from(value: ReaderDto) -> Self {
        Self {
            id: value.id,
            name: value.name,
            contact: value.contact,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CurrentBorrowsResponse {
    open_count: usize,
    records: Vec<BorrowRecordResponse>,
}

pub struct Presenter;

impl Exhaust<ReaderDto> for Presenter {
    type To = (StatusCode, Json<ReaderResponse>);
    fn emit(&self, input: ReaderDto) -> Self::To {
        (StatusCode::CREATED, Json(ReaderResponse::from(input)))
    }
}

impl Exhaust<Option<ReaderDto>> for Presenter {
    type To = Response;
    fn emit(&self, input: Option<ReaderDto>) -> Self::To {
        match input {
            Some(reader) => Json(ReaderResponse::from(reader)).into_response(),
            None => (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "message": "Reader does not exist" })),
            )
                .into_response(),
        }
    }
}

impl Exhaust<Vec<BorrowRecordDto>> for Presenter {
    type To = Json<Vec<BorrowRecordResponse>>;
    fn emit(&self, input: Vec<BorrowRecordDto>) -> Self::To {
        Json(input.into_iter().map(BorrowRecordResponse::from).collect())
    }
}

impl Exhaust<CurrentBorrowsDto> for Presenter {
    type To = Json<CurrentBorrowsResponse>;
    fn emit(&self, input: CurrentBorrowsDto) -> Self::To {
        Json(CurrentBorrowsResponse {
            open_count: input.open_count,
            records: input
                .records
                .into_iter()
                .map(BorrowRecordResponse::from)
                .collect(),
        })
    }
}

impl Exhaust<BorrowReportDto> for Presenter {
    type To = String;
    fn emit(&self, input: BorrowReportDto) -> Self::To {
        input.to_string()
    }
}

use crate::controller::Intake;
use application::transfer::{RequestBorrowDto, RequestReturnDto};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct BorrowRequest {
    reader_id: i64,
    book_id: i64,
}

#[derive(Debug)]
pub struct ReturnRequest {
    record_id: i64,
}

impl ReturnRequest {
    pub fn new(record_id: i64) -> Self {
        Self { record_id }
    }
}

pub struct Transformer;

impl Intake<BorrowRequest> for Transformer {
    type To = RequestBorrowDto;
    fn emit(&self, BorrowRequest { reader_id, book_id }: BorrowRequest) -> Self::To {
        RequestBorrowDto { reader_id, book_id }
    }
}

impl Intake<ReturnRequest> for Transformer {
    type To = RequestReturnDto;
    fn emit(&self, input: ReturnRequest) -> Self::To {
        RequestReturnDto {
            record_id: input.record_id,
        }
    }
}

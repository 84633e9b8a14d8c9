use crate::controller::Intake;
use application::transfer::{CreateReaderDto, GetBorrowRecordsDto, GetReaderDto};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateReaderRequest {
    name: String,
    #[serde(default)]
    contact: String,
}

#[derive(Debug)]
pub struct GetReaderRequest {
    id: i64,
}

impl GetReaderRequest {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct GetBorrowsRequest {
    reader_id: i64,
}

impl GetBorrowsRequest {
    pub fn new(reader_id: i64) -> Self {
        Self { reader_id }
    }
}

pub struct Transformer;

impl Intake<CreateReaderRequest> for Transformer {
    type To = CreateReaderDto;
    fn emit(&self, CreateReaderRequest { name, contact }: CreateReaderRequest) -> Self::To {
        CreateReaderDto { name, contact }
    }
}

impl Intake<GetReaderRequest> for Transformer {
    type To = GetReaderDto;
    fn emit(&self, input: GetReaderRequest) -> Self::To {
        GetReaderDto { id: input.id }
    }
}

impl Intake<GetBorrowsRequest> for Transformer {
    type To = GetBorrowRecordsDto;
    fn emit(&self, input: GetBorrowsRequest) -> Self::To {
        GetBorrowRecordsDto {
            reader_id: input.reader_id,
        }
    }
}

mod request;
mod response;

pub(crate) use self::response::BorrowRecordResponse;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::route::borrow::request::{BorrowRequest, ReturnRequest, Transformer};
use crate::route::borrow::response::Presenter;
use application::service::ReaderBorrowService;
use axum::extract::{Path, State};
use axum::routing::post;
use axum::{Json, Router};

pub trait BorrowRouter {
    fn route_borrow(self) -> Self;
}

impl BorrowRouter for Router<AppModule> {
    fn route_borrow(self) -> Self {
        self.route(
            "/borrows",
            post(
                |State(handler): State<AppModule>, Json(req): Json<BorrowRequest>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(req)
                        .handle(|dto| handler.database().request_borrow(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/borrows/:id/return",
            post(
                |State(handler): State<AppModule>, Path(id): Path<i64>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(ReturnRequest::new(id))
                        .handle(|dto| handler.database().request_return(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}

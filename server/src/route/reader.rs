mod request;
mod response;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::route::reader::request::{
    CreateReaderRequest, GetBorrowsRequest, GetReaderRequest, Transformer,
};
use crate::route::reader::response::Presenter;
use application::service::{
    CreateReaderService, GetBorrowService, GetReaderService, ReaderBorrowService,
};
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};

pub trait ReaderRouter {
    fn route_reader(self) -> Self;
}

impl ReaderRouter for Router<AppModule> {
    fn route_reader(self) -> Self {
        self.route(
            "/readers",
            post(
                |State(handler): State<AppModule>, Json(req): Json<CreateReaderRequest>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(req)
                        .handle(|dto| handler.database().create_reader(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/readers/:id",
            get(
                |State(handler): State<AppModule>, Path(id): Path<i64>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(GetReaderRequest::new(id))
                        .handle(|dto| handler.database().get_reader(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/readers/:id/borrows",
            get(
                |State(handler): State<AppModule>, Path(id): Path<i64>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(GetBorrowsRequest::new(id))
                        .handle(|dto| handler.database().records_for_reader(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/readers/:id/borrows/current",
            get(
                |State(handler): State<AppModule>, Path(id): Path<i64>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(GetBorrowsRequest::new(id))
                        .handle(|dto| handler.database().current_borrows(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/readers/:id/report",
            get(
                |State(handler): State<AppModule>, Path(id): Path<i64>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(GetBorrowsRequest::new(id))
                        .handle(|dto| handler.database().borrow_report(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}

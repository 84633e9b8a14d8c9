mod request;
mod response;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::route::rule::request::{Transformer, UpdateRuleRequest};
use crate::route::rule::response::Presenter;
use application::service::{GetRuleService, UpdateRuleService};
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

pub trait RuleRouter {
    fn route_rule(self) -> Self;
}

impl RuleRouter for Router<AppModule> {
    fn route_rule(self) -> Self {
        self.route(
            "/rules",
            get(|State(handler): State<AppModule>| async move {
                Controller::new((), Presenter)
                    .bypass(|| handler.database().current_rule())
                    .await
                    .map_err(ErrorStatus::from)
            })
            .put(
                |State(handler): State<AppModule>, Json(req): Json<UpdateRuleRequest>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(req)
                        .handle(|dto| handler.database().update_rule(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}

use crate::controller::Exhaust;
use application::transfer::BorrowRuleDto;
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RuleResponse {
    max_borrow: i32,
    borrow_period_days: i32,
    daily_fine: f64,
    description: String,
}

pub struct Presenter;

impl Exhaust<BorrowRuleDto> for Presenter {
    type To = Json<RuleResponse>;
    fn emit(&self, input: BorrowRuleDto) -> Self::To {
        Json(RuleResponse {
            max_borrow: input.max_borrow,
            borrow_period_days: input.borrow_period_days,
            daily_fine: input.daily_fine,
            description: input.description,
        })
    }
}

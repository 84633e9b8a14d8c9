use crate::controller::Intake;
use application::transfer::UpdateRuleDto;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateRuleRequest {
    max_borrow: i32,
    borrow_period_days: i32,
    daily_fine: f64,
}

pub struct Transformer;

impl Intake<UpdateRuleRequest> for Transformer {
    type To = UpdateRuleDto;
    fn emit(&self, input: UpdateRuleRequest) -> Self::To {
        UpdateRuleDto {
            max_borrow: input.max_borrow,
            borrow_period_days: input.borrow_period_days,
            daily_fine: input.daily_fine,
        }
    }
}

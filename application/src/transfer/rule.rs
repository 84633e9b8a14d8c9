use kernel::prelude::entity::BorrowRule;

#[derive(Debug, Clone, PartialEq)]
pub struct BorrowRuleDto {
    pub max_borrow: i32,
    pub borrow_period_days: i32,
    pub daily_fine: f64,
    pub description: String,
}

impl From<BorrowRule> for BorrowRuleDto {
    fn from(value: BorrowRule) -> Self {
        Self {
            max_borrow: *value.max_borrow().as_ref(),
            borrow_period_days: *value.borrow_period().as_ref(),
            daily_fine: *value.daily_fine().as_ref(),
            description: value.describe(),
        }
    }
}

pub struct UpdateRuleDto {
    pub max_borrow: i32,
    pub borrow_period_days: i32,
    pub daily_fine: f64,
}

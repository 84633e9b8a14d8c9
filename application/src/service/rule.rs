use kernel::interface::query::{BorrowRuleQuery, DependOnBorrowRuleQuery};
use kernel::interface::update::{BorrowRuleModifier, DependOnBorrowRuleModifier};
use kernel::prelude::entity::{BorrowPeriod, DailyFine, MaxBorrow};
use kernel::KernelError;

use crate::transfer::{BorrowRuleDto, UpdateRuleDto};

#[async_trait::async_trait]
pub trait GetRuleService: 'static + Sync + Send + DependOnBorrowRuleQuery {
    async fn current_rule(&self) -> error_stack::Result<BorrowRuleDto, KernelError> {
        let rule = self.borrow_rule_query().current().await?;
        Ok(BorrowRuleDto::from(rule))
    }
}

impl<T> GetRuleService for T where T: DependOnBorrowRuleQuery {}

#[async_trait::async_trait]
pub trait UpdateRuleService:
    'static + Sync + Send + DependOnBorrowRuleQuery + DependOnBorrowRuleModifier
{
    async fn update_rule(&self, dto: UpdateRuleDto) -> error_stack::Result<BorrowRuleDto, KernelError> {
        let mut rule = self.borrow_rule_query().current().await?;
        if let Err(report) = rule.update(
            MaxBorrow::new(dto.max_borrow),
            BorrowPeriod::new(dto.borrow_period_days),
            DailyFine::new(dto.daily_fine),
        ) {
            tracing::warn!(
                max_borrow = dto.max_borrow,
                borrow_period_days = dto.borrow_period_days,
                daily_fine = dto.daily_fine,
                "rule update rejected"
            );
            return Err(report);
        }
        self.borrow_rule_modifier().replace(&rule).await?;

        Ok(BorrowRuleDto::from(rule))
    }
}

impl<T> UpdateRuleService for T where T: DependOnBorrowRuleQuery + DependOnBorrowRuleModifier {}

use tokio::sync::RwLock;

use kernel::interface::query::BorrowRuleQuery;
use kernel::interface::update::BorrowRuleModifier;
use kernel::prelude::entity::BorrowRule;
use kernel::KernelError;

/// Holds the active borrow rule. Reads vastly outnumber writes.
pub struct MemoryBorrowRuleRepository {
    rule: RwLock<BorrowRule>,
}

impl MemoryBorrowRuleRepository {
    pub fn new(rule: BorrowRule) -> Self {
        Self {
            rule: RwLock::new(rule),
        }
    }
}

#[async_trait::async_trait]
impl BorrowRuleQuery for MemoryBorrowRuleRepository {
    async fn current(&self) -> error_stack::Result<BorrowRule, KernelError> {
        Ok(self.rule.read().await.clone())
    }
}

#[async_trait::async_trait]
impl BorrowRuleModifier for MemoryBorrowRuleRepository {
    async fn replace(&self, rule: &BorrowRule) -> error_stack::Result<(), KernelError> {
        let mut current = self.rule.write().await;
        *current = rule.clone();
        tracing::info!(
            max_borrow = *rule.max_borrow().as_ref(),
            borrow_period = *rule.borrow_period().as_ref(),
            daily_fine = *rule.daily_fine().as_ref(),
            "borrow rule replaced"
        );
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::query::BorrowRuleQuery;
    use kernel::interface::update::BorrowRuleModifier;
    use kernel::prelude::entity::{BorrowPeriod, BorrowRule, DailyFine, MaxBorrow};
    use kernel::KernelError;

    use crate::database::MemoryBorrowRuleRepository;

    #[tokio::test]
    async fn replaced_rule_is_served() -> error_stack::Result<(), KernelError> {
        let repository = MemoryBorrowRuleRepository::new(BorrowRule::default());
        assert_eq!(repository.current().await?, BorrowRule::default());

        let rule = BorrowRule::new(MaxBorrow::new(2), BorrowPeriod::new(7), DailyFine::new(1.0))?;
        repository.replace(&rule).await?;
        assert_eq!(repository.current().await?, rule);
        Ok(())
    }
}

use crate::entity::BorrowRule;
use crate::KernelError;

#[async_trait::async_trait]
pub trait BorrowRuleModifier: 'static + Sync + Send {
    async fn replace(&self, rule: &BorrowRule) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnBorrowRuleModifier: 'static + Sync + Send {
    type BorrowRuleModifier: BorrowRuleModifier;
    fn borrow_rule_modifier(&self) -> &Self::BorrowRuleModifier;
}

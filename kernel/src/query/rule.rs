use crate::entity::BorrowRule;
use crate::KernelError;

#[async_trait::async_trait]
pub trait BorrowRuleQuery: 'static + Sync + Send {
    async fn current(&self) -> error_stack::Result<BorrowRule, KernelError>;
}

pub trait DependOnBorrowRuleQuery: 'static + Sync + Send {
    type BorrowRuleQuery: BorrowRuleQuery;
    fn borrow_rule_query(&self) -> &Self::BorrowRuleQuery;
}

mod borrow_period;
mod daily_fine;
mod max_borrow;

pub use self::{borrow_period::*, daily_fine::*, max_borrow::*};
use crate::entity::{BorrowedAt, DueAt, FineAmount, OverdueDays};
use crate::KernelError;
use error_stack::Report;
use vodca::References;

/// Borrowing policy shared by every ledger operation.
///
/// A `BorrowRule` can only be obtained through [`BorrowRule::new`] or [`Default`],
/// so every value in circulation satisfies [`BorrowRule::validate`].
#[derive(Debug, Clone, PartialEq, References)]
pub struct BorrowRule {
    max_borrow: MaxBorrow,
    borrow_period: BorrowPeriod,
    daily_fine: DailyFine,
}

impl BorrowRule {
    pub fn new(
        max_borrow: MaxBorrow,
        borrow_period: BorrowPeriod,
        daily_fine: DailyFine,
    ) -> error_stack::Result<Self, KernelError> {
        let rule = Self {
            max_borrow,
            borrow_period,
            daily_fine,
        };
        rule.ensure_valid()?;
        Ok(rule)
    }

    pub fn validate(&self) -> bool {
        self.max_borrow.is_valid() && self.borrow_period.is_valid() && self.daily_fine.is_valid()
    }

    /// Replaces all three parameters at once, or none of them.
    pub fn update(
        &mut self,
        max_borrow: MaxBorrow,
        borrow_period: BorrowPeriod,
        daily_fine: DailyFine,
    ) -> error_stack::Result<(), KernelError> {
        *self = Self::new(max_borrow, borrow_period, daily_fine)?;
        Ok(())
    }

    pub fn describe(&self) -> String {
        format!(
            "Current borrow rules:\n\
             - Max borrow count: {} books\n\
             - Borrow period: {} days\n\
             - Overdue fine: {:.2} per day",
            self.max_borrow.as_ref(),
            self.borrow_period.as_ref(),
            self.daily_fine.as_ref(),
        )
    }

    pub fn due_at(&self, borrowed_at: &BorrowedAt) -> error_stack::Result<DueAt, KernelError> {
        borrowed_at
            .as_ref()
            .checked_add(self.borrow_period.duration())
            .map(DueAt::new)
            .ok_or_else(|| {
                Report::new(KernelError::InvalidArgument)
                    .attach_printable("due date is out of the supported date range")
            })
    }

    /// Rejects a new loan when the reader already holds `open` unreturned books.
    pub fn check_limit(&self, open: usize) -> error_stack::Result<(), KernelError> {
        let max = usize::try_from(*self.max_borrow.as_ref()).unwrap_or_default();
        if open >= max {
            return Err(Report::new(KernelError::BorrowLimitExceeded)
                .attach_printable(format!("{open} open loans, limit is {max}")));
        }
        Ok(())
    }

    pub fn fine_for(&self, overdue: &OverdueDays) -> FineAmount {
        if !overdue.is_overdue() {
            return FineAmount::default();
        }
        let days = *overdue.as_ref() as f64;
        FineAmount::new(days * *self.daily_fine.as_ref())
    }

    fn ensure_valid(&self) -> error_stack::Result<(), KernelError> {
        let mut report: Option<Report<KernelError>> = None;
        let mut reject = |reason: String| {
            let current = report
                .take()
                .unwrap_or_else(|| Report::new(KernelError::InvalidRuleParameters));
            report = Some(current.attach_printable(reason));
        };
        if !self.max_borrow.is_valid() {
            reject(format!(
                "max borrow must be positive, got {}",
                self.max_borrow.as_ref()
            ));
        }
        if !self.borrow_period.is_valid() {
            reject(format!(
                "borrow period must be positive, got {}",
                self.borrow_period.as_ref()
            ));
        }
        if !self.daily_fine.is_valid() {
            reject(format!(
                "daily fine must be a non-negative number, got {}",
                self.daily_fine.as_ref()
            ));
        }
        match report {
            Some(report) => Err(report),
            None => Ok(()),
        }
    }
}

impl Default for BorrowRule {
    fn default() -> Self {
        Self {
            max_borrow: MaxBorrow::new(5),
            borrow_period: BorrowPeriod::new(30),
            daily_fine: DailyFine::new(0.5),
        }
    }
}

mod borrowed_at;
mod due_at;
mod fine;
mod id;
mod returned_at;

pub use self::{borrowed_at::*, due_at::*, fine::*, id::*, returned_at::*};
use crate::entity::{BookId, BorrowRule, ReaderId};
use crate::KernelError;
use destructure::Destructure;
use error_stack::Report;
use vodca::References;

/// A single loan of a book to a reader.
///
/// A record starts open and is closed exactly once by [`BorrowRecord::close`].
/// Closed records are kept as history.
#[derive(Debug, Clone, PartialEq, References, Destructure)]
pub struct BorrowRecord {
    id: RecordId,
    reader_id: ReaderId,
    book_id: BookId,
    borrowed_at: BorrowedAt,
    due_at: DueAt,
    returned_at: Option<ReturnedAt>,
    fine: FineAmount,
}

impl BorrowRecord {
    /// Opens a new loan whose due date is derived from `rule`.
    pub fn open(
        id: RecordId,
        reader_id: ReaderId,
        book_id: BookId,
        borrowed_at: BorrowedAt,
        rule: &BorrowRule,
    ) -> error_stack::Result<Self, KernelError> {
        let due_at = rule.due_at(&borrowed_at)?;
        Ok(Self {
            id,
            reader_id,
            book_id,
            borrowed_at,
            due_at,
            returned_at: None,
            fine: FineAmount::default(),
        })
    }

    pub fn is_returned(&self) -> bool {
        self.returned_at.is_some()
    }

    pub fn overdue_days(&self) -> OverdueDays {
        self.returned_at
            .as_ref()
            .map(|returned_at| OverdueDays::between(&self.due_at, returned_at))
            .unwrap_or_default()
    }

    /// Marks the book as returned and settles the overdue fine.
    ///
    /// A rejected call leaves the record untouched.
    pub fn close(
        &mut self,
        returned_at: ReturnedAt,
        rule: &BorrowRule,
    ) -> error_stack::Result<FineAmount, KernelError> {
        if self.is_returned() {
            return Err(Report::new(KernelError::AlreadyReturned)
                .attach_printable(format!("record {} is already closed", self.id.as_ref())));
        }
        if returned_at.as_ref() < self.borrowed_at.as_ref() {
            return Err(Report::new(KernelError::InvalidArgument).attach_printable(format!(
                "record {} cannot be returned before it was borrowed",
                self.id.as_ref()
            )));
        }

        let overdue = OverdueDays::between(&self.due_at, &returned_at);
        let fine = rule.fine_for(&overdue);
        self.returned_at = Some(returned_at);
        self.fine = fine;
        Ok(fine)
    }
}

use std::fmt::Display;

use error_stack::Context;

#[derive(Debug)]
pub enum KernelError {
    BorrowLimitExceeded,
    RecordNotFound,
    AlreadyReturned,
    InvalidRuleParameters,
    ReaderNotFound,
    InvalidArgument,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::BorrowLimitExceeded => {
                write!(f, "Reader has reached the maximum number of borrowed books")
            }
            KernelError::RecordNotFound => write!(f, "Borrow record does not exist"),
            KernelError::AlreadyReturned => write!(f, "Book has already been returned"),
            KernelError::InvalidRuleParameters => write!(f, "Invalid borrow rule parameters"),
            KernelError::ReaderNotFound => write!(f, "Reader does not exist"),
            KernelError::InvalidArgument => write!(f, "Invalid argument"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}

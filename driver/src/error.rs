use error_stack::Report;

use kernel::KernelError;

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error(transparent)]
    Env(dotenvy::Error),
    #[error("{key} has an invalid value: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

impl From<dotenvy::Error> for DriverError {
    fn from(value: dotenvy::Error) -> Self {
        Self::Env(value)
    }
}

pub trait ConvertError {
    type Ok;
    fn convert_error(self) -> error_stack::Result<Self::Ok, KernelError>;
}

impl<T> ConvertError for Result<T, DriverError> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| Report::new(error).change_context(KernelError::Internal))
    }
}

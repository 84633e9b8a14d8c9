use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use error_stack::Report;
use kernel::KernelError;
use serde::Serialize;
use std::process::{ExitCode, Termination};

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

#[derive(Debug)]
pub struct ErrorStatus(Report<KernelError>);

impl From<Report<KernelError>> for ErrorStatus {
    fn from(e: Report<KernelError>) -> Self {
        ErrorStatus(e)
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> axum::response::Response {
        let context = self.0.current_context();
        let status = match context {
            KernelError::BorrowLimitExceeded | KernelError::AlreadyReturned => StatusCode::CONFLICT,
            KernelError::RecordNotFound | KernelError::ReaderNotFound => StatusCode::NOT_FOUND,
            KernelError::InvalidRuleParameters | KernelError::InvalidArgument => {
                StatusCode::BAD_REQUEST
            }
            KernelError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!("{:?}", self.0);
        } else {
            tracing::debug!("{:?}", self.0);
        }
        let body = ErrorBody {
            message: context.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod test {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use error_stack::Report;
    use kernel::KernelError;

    use crate::error::ErrorStatus;

    fn status_of(error: KernelError) -> StatusCode {
        ErrorStatus::from(Report::new(error)).into_response().status()
    }

    #[test]
    fn maps_each_kind_to_a_status() {
        assert_eq!(status_of(KernelError::BorrowLimitExceeded), StatusCode::CONFLICT);
        assert_eq!(status_of(KernelError::AlreadyReturned), StatusCode::CONFLICT);
        assert_eq!(status_of(KernelError::RecordNotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_of(KernelError::ReaderNotFound), StatusCode::NOT_FOUND);
        assert_eq!(
            status_of(KernelError::InvalidRuleParameters),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status_of(KernelError::InvalidArgument), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_of(KernelError::Internal),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}

use thiserror::Error;
use tonic::Status;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Cannot move from '{from}' to '{to}'")]
    InvalidTransition { from: String, to: String },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Authentication required")]
    Unauthenticated,

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<AppError> for Status {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Database(e) => Status::internal(format!("Database error: {}", e)),
            AppError::NotFound(msg) => Status::not_found(msg),
            AppError::InvalidInput(msg) => Status::invalid_argument(msg),
            e @ AppError::InvalidTransition { .. } => Status::failed_precondition(e.to_string()),
            AppError::Conflict(msg) => Status::aborted(msg),
            AppError::Unauthenticated => Status::unauthenticated("Authentication required"),
            AppError::PermissionDenied(msg) => Status::permission_denied(msg),
            AppError::Internal(msg) => Status::internal(msg),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use tonic::Code;

    #[test]
    fn test_status_codes() {
        let status: Status = AppError::InvalidTransition {
            from: "Delivered".into(),
            to: "Requested".into(),
        }
        .into();
        assert_eq!(status.code(), Code::FailedPrecondition);
        assert_eq!(status.message(), "Cannot move from 'Delivered' to 'Requested'");

        let status: Status = AppError::Conflict("stale".into()).into();
        assert_eq!(status.code(), Code::Aborted);

        let status: Status = AppError::NotFound("Pickup not found".into()).into();
        assert_eq!(status.code(), Code::NotFound);
    }
}

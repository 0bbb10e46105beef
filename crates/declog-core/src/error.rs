use crate::decision::Status;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("decision cannot be {action} in status {status}")]
    InvalidTransition { action: &'static str, status: Status },

    #[error("invalid evaluation result: {0}")]
    InvalidResult(String),

    #[error("invalid status: {0}")]
    InvalidStatus(String),
}

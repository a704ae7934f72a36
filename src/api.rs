use crate::controller::alerts::ALERT_GENERIC_ERROR;
use crate::error::AppError;
use crate::model::{AlertPayload, Course, TeeTimeSlot};
use async_trait::async_trait;

/// Failure surface of the tee-sheet backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never completed (connection, timeout, DNS).
    Transport(String),
    /// The response body was not what the backend promises.
    Decode(String),
    /// The backend answered with a non-success status. `detail` carries the
    /// server-provided message when one was returned.
    Rejected { detail: Option<String> },
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<ApiError> for AppError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Transport(msg) => Self::Network(msg),
            ApiError::Decode(msg) => Self::Parse(msg),
            ApiError::Rejected { detail } => {
                Self::Submission(detail.unwrap_or_else(|| ALERT_GENERIC_ERROR.to_string()))
            }
        }
    }
}

/// Everything the screen needs from the outside world: the course list, the
/// tee sheet for a course and date, and alert registration.
#[async_trait]
pub trait TeeSheetApi: Send + Sync {
    async fn fetch_courses(&self) -> Result<Vec<Course>, ApiError>;
    async fn fetch_tee_times(
        &self,
        course: &Course,
        date: &str,
    ) -> Result<Vec<TeeTimeSlot>, ApiError>;
    async fn create_alert(&self, payload: &AlertPayload) -> Result<(), ApiError>;
}

use crate::api::TeeSheetApi;
use crate::error::AppError;
use crate::model::{AlertCriteria, build_alert_payload};

pub const ALERT_CONFIRMATION: &str = "✓ Alert created! You'll get a text when times open up.";
pub const ALERT_GENERIC_ERROR: &str = "Error creating alert";

/// Validate, normalize, and submit one alert subscription.
///
/// Validation failures never reach the network. A rejected submission
/// carries the server's detail message when one was sent, otherwise the
/// generic error text. Nothing is recorded locally on success; the backend
/// owns the subscription lifecycle.
///
/// # Errors
///
/// Returns `AppError::Validation` for a bad phone entry, `AppError::Network`
/// when the request never completed, and `AppError::Submission` when the
/// backend turned the registration down.
pub async fn build_and_submit(
    api: &dyn TeeSheetApi,
    criteria: &AlertCriteria<'_>,
) -> Result<&'static str, AppError> {
    let payload = build_alert_payload(criteria)?;
    api.create_alert(&payload).await?;
    Ok(ALERT_CONFIRMATION)
}

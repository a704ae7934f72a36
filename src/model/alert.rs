use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::model::Course;

pub const PHONE_VALIDATION_MSG: &str = "Please enter a valid 10-digit phone number";

/// One selectable alert-window boundary, hourly from 6:00 AM to 5:00 PM.
#[derive(Clone, Copy, Debug)]
pub struct TimeOption {
    pub label: &'static str,
    pub minutes: u16,
}

pub const ALERT_TIME_OPTIONS: [TimeOption; 12] = [
    TimeOption { label: "6:00 AM", minutes: 360 },
    TimeOption { label: "7:00 AM", minutes: 420 },
    TimeOption { label: "8:00 AM", minutes: 480 },
    TimeOption { label: "9:00 AM", minutes: 540 },
    TimeOption { label: "10:00 AM", minutes: 600 },
    TimeOption { label: "11:00 AM", minutes: 660 },
    TimeOption { label: "12:00 PM", minutes: 720 },
    TimeOption { label: "1:00 PM", minutes: 780 },
    TimeOption { label: "2:00 PM", minutes: 840 },
    TimeOption { label: "3:00 PM", minutes: 900 },
    TimeOption { label: "4:00 PM", minutes: 960 },
    TimeOption { label: "5:00 PM", minutes: 1020 },
];

pub const MIN_SPOTS_MIN: u8 = 1;
pub const MIN_SPOTS_MAX: u8 = 4;

/// What the user asked to be alerted about. Built per submission and
/// discarded once the request is sent; the backend owns the subscription
/// from then on.
#[derive(Debug)]
pub struct AlertCriteria<'a> {
    pub phone: &'a str,
    pub course: &'a Course,
    pub date: &'a str,
    pub time_start: u16,
    pub time_end: u16,
    pub min_spots: u8,
}

/// JSON body of `POST /api/alerts`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AlertPayload {
    pub phone: String,
    pub club_id: i32,
    pub course_name: String,
    pub date: String,
    pub time_start: u16,
    pub time_end: u16,
    pub min_spots: u8,
}

/// Normalize a raw phone entry to `+<digits>`.
///
/// Everything but ASCII digits is stripped. Ten digits get a `+1` country
/// prefix; eleven digits are taken to already carry one, keeping a leading
/// `+` when the user typed it. Anything else is invalid.
///
/// # Errors
///
/// Returns `AppError::Validation` with a user-facing message when the digit
/// count is neither 10 nor 11.
pub fn normalize_phone(raw: &str) -> Result<String, AppError> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    match digits.len() {
        10 => Ok(format!("+1{digits}")),
        11 if raw.trim_start().starts_with('+') => Ok(format!("+{digits}")),
        11 => Ok(format!("+1{digits}")),
        _ => Err(AppError::Validation(PHONE_VALIDATION_MSG.to_string())),
    }
}

/// Turn criteria into the backend payload. Phone validation happens here,
/// before any network traffic. The time window is forwarded exactly as
/// selected; start/end ordering is left to the caller.
///
/// # Errors
///
/// Returns `AppError::Validation` when the phone entry is rejected.
pub fn build_alert_payload(criteria: &AlertCriteria<'_>) -> Result<AlertPayload, AppError> {
    let phone = normalize_phone(criteria.phone)?;
    Ok(AlertPayload {
        phone,
        club_id: criteria.course.club_id_or_default(),
        course_name: criteria.course.name.clone(),
        date: criteria.date.to_string(),
        time_start: criteria.time_start,
        time_end: criteria.time_end,
        min_spots: criteria.min_spots,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_digits_get_country_code() {
        assert_eq!(normalize_phone("3035551234").unwrap(), "+13035551234");
    }

    #[test]
    fn formatted_entry_is_stripped() {
        assert_eq!(normalize_phone("303-555-1234").unwrap(), "+13035551234");
        assert_eq!(normalize_phone("(303) 555-1234").unwrap(), "+13035551234");
    }

    #[test]
    fn eleven_digits_with_plus_unchanged() {
        assert_eq!(normalize_phone("+13035551234").unwrap(), "+13035551234");
    }

    #[test]
    fn eleven_digits_without_plus_get_one() {
        assert_eq!(normalize_phone("13035551234").unwrap(), "+113035551234");
    }

    #[test]
    fn short_entry_rejected() {
        let err = normalize_phone("12345").unwrap_err();
        assert_eq!(err, AppError::Validation(PHONE_VALIDATION_MSG.to_string()));
    }

    #[test]
    fn empty_entry_rejected() {
        assert!(normalize_phone("").is_err());
        assert!(normalize_phone("golf").is_err());
    }
}

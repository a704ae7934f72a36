use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashMap;
use std::hash::BuildHasher;

use crate::model::{Course, CourseCatalog, MIN_SPOTS_MAX, MIN_SPOTS_MIN};
use crate::mvu::browse::BrowseModel;

/// Build the screen model from query input. Unknown course selectors fall
/// back to the catalog default; missing or malformed dates fall back to
/// today in local time.
#[must_use]
pub fn decode_browse_request<S: BuildHasher>(
    query: &HashMap<String, String, S>,
    catalog: &CourseCatalog,
) -> BrowseModel {
    let course = resolve_course(query.get("course").map(String::as_str), catalog);
    let date = query
        .get("date")
        .and_then(|s| valid_date(s))
        .unwrap_or_else(BrowseModel::today_local);
    let mut model = BrowseModel::new(catalog, course, date);
    if query.get("alert_form").map(String::as_str) == Some("1") {
        model.alert_form_open = true;
    }
    // Entered alert fields ride along on every panel request so they
    // survive closing and reopening the form.
    if let Some(phone) = query.get("phone") {
        model.alert_phone = phone.clone();
    }
    if let Some(time_start) = query.get("time_start").and_then(|s| s.trim().parse().ok()) {
        model.alert_time_start = time_start;
    }
    if let Some(time_end) = query.get("time_end").and_then(|s| s.trim().parse().ok()) {
        model.alert_time_end = time_end;
    }
    if let Some(min_spots) = query
        .get("min_spots")
        .and_then(|s| s.trim().parse::<u8>().ok())
    {
        model.alert_min_spots = min_spots.clamp(MIN_SPOTS_MIN, MIN_SPOTS_MAX);
    }
    model
}

/// Body of the alert-form POST.
#[derive(Deserialize, Debug, Clone)]
pub struct AlertForm {
    pub course: Option<String>,
    pub date: Option<String>,
    #[serde(default)]
    pub phone: String,
    pub time_start: u16,
    pub time_end: u16,
    #[serde(default = "default_min_spots")]
    pub min_spots: u8,
}

fn default_min_spots() -> u8 {
    MIN_SPOTS_MIN
}

/// Model for one alert submission: the browse screen with the form open and
/// the entered fields applied.
#[must_use]
pub fn decode_alert_request(form: &AlertForm, catalog: &CourseCatalog) -> BrowseModel {
    let course = resolve_course(form.course.as_deref(), catalog);
    let date = form
        .date
        .as_deref()
        .and_then(valid_date)
        .unwrap_or_else(BrowseModel::today_local);
    let mut model = BrowseModel::new(catalog, course, date);
    model.alert_form_open = true;
    model.alert_phone = form.phone.clone();
    model.alert_time_start = form.time_start;
    model.alert_time_end = form.time_end;
    model.alert_min_spots = form.min_spots.clamp(MIN_SPOTS_MIN, MIN_SPOTS_MAX);
    model
}

fn resolve_course(selector: Option<&str>, catalog: &CourseCatalog) -> Option<Course> {
    selector
        .and_then(|s| catalog.by_selector(s))
        .or_else(|| catalog.default_course())
        .cloned()
}

fn valid_date(s: &str) -> Option<String> {
    let trimmed = s.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .map(|_| trimmed.to_string())
}

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use rusty_teetimes::api::{ApiError, TeeSheetApi};
use rusty_teetimes::model::{AlertPayload, Course, TeeTimeSlot};

/// In-memory tee-sheet backend. Tee-time responses are keyed by
/// `(course name, date)`; unknown keys answer with an empty sheet. Alert
/// registrations are recorded for inspection.
pub struct FakeTeeSheetApi {
    courses: Result<Vec<Course>, ApiError>,
    tee_times: HashMap<(String, String), Result<Vec<TeeTimeSlot>, ApiError>>,
    alert_response: Result<(), ApiError>,
    alert_calls: Mutex<Vec<AlertPayload>>,
}

impl FakeTeeSheetApi {
    pub fn new() -> Self {
        Self {
            courses: Ok(Vec::new()),
            tee_times: HashMap::new(),
            alert_response: Ok(()),
            alert_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_courses(mut self, courses: Vec<Course>) -> Self {
        self.courses = Ok(courses);
        self
    }

    pub fn with_courses_error(mut self, err: ApiError) -> Self {
        self.courses = Err(err);
        self
    }

    pub fn with_tee_times(mut self, course: &str, date: &str, slots: Vec<TeeTimeSlot>) -> Self {
        self.tee_times
            .insert((course.to_string(), date.to_string()), Ok(slots));
        self
    }

    pub fn with_tee_times_error(mut self, course: &str, date: &str, err: ApiError) -> Self {
        self.tee_times
            .insert((course.to_string(), date.to_string()), Err(err));
        self
    }

    pub fn with_alert_response(mut self, response: Result<(), ApiError>) -> Self {
        self.alert_response = response;
        self
    }

    pub fn recorded_alerts(&self) -> Vec<AlertPayload> {
        self.alert_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TeeSheetApi for FakeTeeSheetApi {
    async fn fetch_courses(&self) -> Result<Vec<Course>, ApiError> {
        self.courses.clone()
    }

    async fn fetch_tee_times(
        &self,
        course: &Course,
        date: &str,
    ) -> Result<Vec<TeeTimeSlot>, ApiError> {
        self.tee_times
            .get(&(course.name.clone(), date.to_string()))
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn create_alert(&self, payload: &AlertPayload) -> Result<(), ApiError> {
        self.alert_calls.lock().unwrap().push(payload.clone());
        self.alert_response.clone()
    }
}

pub fn slot(time_display: &str, course_name: &str, spots_available: u32) -> TeeTimeSlot {
    TeeTimeSlot {
        time_display: time_display.to_string(),
        course_name: course_name.to_string(),
        spots_available,
        price: None,
    }
}

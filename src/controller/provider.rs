use async_trait::async_trait;
use reqwest::Client;

use crate::api::{ApiError, TeeSheetApi};
use crate::model::{AlertPayload, Course, CourseKey, CourseRecord, TeeTimeSlot};

pub const COURSES_PATH: &str = "/api/courses";
pub const ALERTS_PATH: &str = "/api/alerts";

/// Backend path for a tee-sheet query. Identified courses use the numeric
/// club/course composite; name-only courses use the encoded course name.
#[must_use]
pub fn tee_times_path(course: &Course, date: &str) -> String {
    match course.key {
        CourseKey::Identified { club_id, course_id } => {
            format!("/api/tee-times/{club_id}/{course_id}/{date}")
        }
        CourseKey::NameOnly => {
            format!("/api/tee-times/{}/{date}", urlencoding::encode(&course.name))
        }
    }
}

/// reqwest-backed implementation of [`TeeSheetApi`] against one base URL.
pub struct HttpTeeSheetApi {
    base_url: String,
    client: Client,
}

impl HttpTeeSheetApi {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }
}

#[derive(serde::Deserialize)]
struct AlertRejection {
    detail: Option<String>,
}

#[async_trait]
impl TeeSheetApi for HttpTeeSheetApi {
    async fn fetch_courses(&self) -> Result<Vec<Course>, ApiError> {
        let url = format!("{}{COURSES_PATH}", self.base_url);
        let records: Vec<CourseRecord> =
            self.client.get(&url).send().await?.json().await?;
        Ok(records.into_iter().map(Course::from).collect())
    }

    async fn fetch_tee_times(
        &self,
        course: &Course,
        date: &str,
    ) -> Result<Vec<TeeTimeSlot>, ApiError> {
        let url = format!("{}{}", self.base_url, tee_times_path(course, date));
        let slots = self.client.get(&url).send().await?.json().await?;
        Ok(slots)
    }

    async fn create_alert(&self, payload: &AlertPayload) -> Result<(), ApiError> {
        let url = format!("{}{ALERTS_PATH}", self.base_url);
        let resp = self.client.post(&url).json(payload).send().await?;
        if resp.status().is_success() {
            return Ok(());
        }
        let detail = resp
            .json::<AlertRejection>()
            .await
            .ok()
            .and_then(|r| r.detail);
        Err(ApiError::Rejected { detail })
    }
}

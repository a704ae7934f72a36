use serde::{Deserialize, Serialize};

use crate::api::TeeSheetApi;

/// Reservation system a course's bookings are fulfilled through.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    Membersports,
    Chronogolf,
}

/// How a course is identified against the tee-sheet backend. Some records
/// carry the numeric club/course pair, some only a display name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CourseKey {
    Identified { club_id: i32, course_id: i32 },
    NameOnly,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Course {
    pub name: String,
    pub key: CourseKey,
    pub provider: Provider,
}

impl Course {
    #[must_use]
    pub fn identified(club_id: i32, course_id: i32, name: &str) -> Self {
        Self {
            name: name.to_string(),
            key: CourseKey::Identified { club_id, course_id },
            provider: Provider::Membersports,
        }
    }

    #[must_use]
    pub fn name_only(name: &str, provider: Provider) -> Self {
        Self {
            name: name.to_string(),
            key: CourseKey::NameOnly,
            provider,
        }
    }

    /// Numeric club id, or 0 for name-only records.
    #[must_use]
    pub fn club_id_or_default(&self) -> i32 {
        match self.key {
            CourseKey::Identified { club_id, .. } => club_id,
            CourseKey::NameOnly => 0,
        }
    }
}

/// Wire shape of a record from `GET /api/courses`. The id fields are optional
/// on the wire; both must be present for the course to count as identified.
#[derive(Deserialize, Clone, Debug)]
pub struct CourseRecord {
    pub name: String,
    pub club_id: Option<i32>,
    pub course_id: Option<i32>,
    #[serde(default)]
    pub provider: Provider,
}

impl From<CourseRecord> for Course {
    fn from(record: CourseRecord) -> Self {
        let key = match (record.club_id, record.course_id) {
            (Some(club_id), Some(course_id)) => CourseKey::Identified { club_id, course_id },
            _ => CourseKey::NameOnly,
        };
        Self {
            name: record.name,
            key,
            provider: record.provider,
        }
    }
}

pub const DEFAULT_COURSE_NAME: &str = "Kennedy";

/// Ordered set of bookable courses. Loaded once, never mutated afterward.
#[derive(Clone, Debug, Default)]
pub struct CourseCatalog {
    courses: Vec<Course>,
}

impl CourseCatalog {
    #[must_use]
    pub fn new(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    /// The compiled-in Denver municipal course list.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(vec![
            Course::identified(3660, 4711, "City Park"),
            Course::identified(3691, 4756, "Evergreen"),
            Course::identified(3713, 4770, "Harvard Gulch"),
            Course::identified(3629, 20573, "Kennedy"),
            Course::identified(3755, 4827, "Overland Park"),
            Course::identified(3831, 4928, "Wellshire"),
            Course::identified(3833, 4932, "Willis Case"),
        ])
    }

    /// One-time fetch from the backend. A failed fetch leaves the catalog
    /// empty; callers retry by asking again.
    pub async fn from_api(api: &dyn TeeSheetApi) -> Self {
        match api.fetch_courses().await {
            Ok(courses) => Self::new(courses),
            Err(e) => {
                tracing::warn!(error = ?e, "course catalog fetch failed");
                Self::default()
            }
        }
    }

    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Kennedy when present, otherwise the first course in catalog order.
    #[must_use]
    pub fn default_course(&self) -> Option<&Course> {
        self.by_name(DEFAULT_COURSE_NAME).or_else(|| self.courses.first())
    }

    #[must_use]
    pub fn by_club_id(&self, club_id: i32) -> Option<&Course> {
        self.courses
            .iter()
            .find(|c| matches!(c.key, CourseKey::Identified { club_id: id, .. } if id == club_id))
    }

    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.name == name)
    }

    /// Resolve a user-supplied selector: a numeric club id, else a name.
    #[must_use]
    pub fn by_selector(&self, selector: &str) -> Option<&Course> {
        match selector.trim().parse::<i32>() {
            Ok(club_id) => self.by_club_id(club_id),
            Err(_) => self.by_name(selector.trim()),
        }
    }
}

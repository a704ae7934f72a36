use crate::model::{Course, CourseKey};

/// Display-only label: the trailing two words of the backend's course name
/// ("Kennedy Golf Course" shows as "Golf Course"). The underlying record is
/// untouched.
#[must_use]
pub fn course_type_label(course_name: &str) -> String {
    let parts: Vec<&str> = course_name.split_whitespace().collect();
    if parts.len() >= 2 {
        parts[parts.len() - 2..].join(" ")
    } else {
        course_name.to_string()
    }
}

/// Form value that round-trips through `CourseCatalog::by_selector`.
#[must_use]
pub fn course_selector(course: &Course) -> String {
    match course.key {
        CourseKey::Identified { club_id, .. } => club_id.to_string(),
        CourseKey::NameOnly => course.name.clone(),
    }
}

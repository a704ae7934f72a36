use crate::model::{Course, CourseKey, Provider};

const MEMBERSPORTS_BOOKING_BASE: &str = "https://app.membersports.com/tee-times";
// Required by the booking site's URL scheme; the values are not ours to interpret.
const MEMBERSPORTS_BOOKING_SUFFIX: &str = "1/0/0";
const CHRONOGOLF_CLUB_URL: &str = "https://www.chronogolf.com/club/denver-golf-club";

/// Outbound booking link for a course and date. Pure string construction;
/// the link opens the external reservation site in a new browsing context.
///
/// Chronogolf links land on the club page for the chosen date and let the
/// site's own flow pick course and time. Membersports links embed the
/// club/course pair directly.
#[must_use]
pub fn resolve_booking_url(course: &Course, date: &str) -> String {
    match course.provider {
        Provider::Chronogolf => format!("{CHRONOGOLF_CLUB_URL}?date={date}"),
        Provider::Membersports => {
            let (club_id, course_id) = match course.key {
                CourseKey::Identified { club_id, course_id } => (club_id, course_id),
                CourseKey::NameOnly => (0, 0),
            };
            format!("{MEMBERSPORTS_BOOKING_BASE}/{club_id}/{course_id}/{MEMBERSPORTS_BOOKING_SUFFIX}")
        }
    }
}

use rusty_teetimes::booking::resolve_booking_url;
use rusty_teetimes::model::{Course, Provider};

#[test]
fn chronogolf_links_carry_only_the_date() {
    let course = Course::name_only("Murphy Creek", Provider::Chronogolf);

    let url = resolve_booking_url(&course, "2024-06-01");

    assert!(url.starts_with("https://www.chronogolf.com/"));
    assert!(url.contains("date=2024-06-01"));
    // The club page handles course and time selection itself.
    assert!(!url.contains("Murphy"));
    assert!(!url.contains("time"));
}

#[test]
fn membersports_links_embed_club_then_course() {
    let course = Course::identified(3629, 20573, "Kennedy");

    let url = resolve_booking_url(&course, "2024-06-01");

    assert!(url.starts_with("https://app.membersports.com/"));
    let club_pos = url.find("3629").expect("club id present");
    let course_pos = url.find("20573").expect("course id present");
    assert!(club_pos < course_pos, "club id comes before course id");
}

#[test]
fn membersports_without_identity_still_resolves() {
    let course = Course::name_only("Guest Course", Provider::Membersports);

    let url = resolve_booking_url(&course, "2024-06-01");

    assert!(url.contains("/0/0/"));
}

#[test]
fn resolution_is_stable_for_the_same_input() {
    let course = Course::identified(3660, 4711, "City Park");

    assert_eq!(
        resolve_booking_url(&course, "2024-07-04"),
        resolve_booking_url(&course, "2024-07-04")
    );
}

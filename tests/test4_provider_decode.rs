use rusty_teetimes::controller::provider::tee_times_path;
use rusty_teetimes::model::{Course, CourseKey, CourseRecord, Provider, TeeTimeSlot};

#[test]
fn slots_decode_from_the_full_backend_record() {
    let json = r#"[{
        "course_id": 3629,
        "course_name": "Kennedy Golf Course",
        "date": "2024-06-01",
        "time_minutes": 420,
        "time_display": "7:00 AM",
        "spots_available": 2,
        "price": 30,
        "holes": 18,
        "scraped_at": "2024-05-31T12:00:00"
    }]"#;

    let slots: Vec<TeeTimeSlot> = serde_json::from_str(json).unwrap();

    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].time_display, "7:00 AM");
    assert_eq!(slots[0].course_name, "Kennedy Golf Course");
    assert_eq!(slots[0].spots_available, 2);
    assert_eq!(slots[0].price, Some(30.0));
}

#[test]
fn slots_decode_without_a_price() {
    let json = r#"[{
        "time_display": "8:30 AM",
        "course_name": "Wellshire Golf Course",
        "spots_available": 4
    }]"#;

    let slots: Vec<TeeTimeSlot> = serde_json::from_str(json).unwrap();

    assert_eq!(slots[0].price, None);
}

#[test]
fn course_records_resolve_their_identity_variant() {
    let json = r#"[
        {"club_id": 3629, "course_id": 20573, "name": "Kennedy"},
        {"name": "Murphy Creek", "provider": "chronogolf"},
        {"club_id": 3660, "name": "City Park"}
    ]"#;

    let records: Vec<CourseRecord> = serde_json::from_str(json).unwrap();
    let courses: Vec<Course> = records.into_iter().map(Course::from).collect();

    assert_eq!(
        courses[0].key,
        CourseKey::Identified {
            club_id: 3629,
            course_id: 20573
        }
    );
    assert_eq!(courses[0].provider, Provider::Membersports);

    assert_eq!(courses[1].key, CourseKey::NameOnly);
    assert_eq!(courses[1].provider, Provider::Chronogolf);

    // A lone club_id is not enough to count as identified.
    assert_eq!(courses[2].key, CourseKey::NameOnly);
}

#[test]
fn identified_courses_query_by_the_numeric_composite() {
    let course = Course::identified(3629, 20573, "Kennedy");

    assert_eq!(
        tee_times_path(&course, "2024-06-01"),
        "/api/tee-times/3629/20573/2024-06-01"
    );
}

#[test]
fn name_only_courses_query_by_encoded_name() {
    let course = Course::name_only("Murphy Creek", Provider::Chronogolf);

    assert_eq!(
        tee_times_path(&course, "2024-06-01"),
        "/api/tee-times/Murphy%20Creek/2024-06-01"
    );
}

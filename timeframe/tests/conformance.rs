//! End-to-end conformance: raw string in, answer string out, over pinned
//! 2019 calendar dates (Nov 3 was a Sunday).

use jiff::civil::datetime;
use timeframe::Schedule;

fn answer(spec: &str, now: jiff::civil::DateTime) -> String {
    Schedule::parse(spec)
        .unwrap()
        .evaluate(now)
        .unwrap()
        .to_string()
}

#[test]
fn within_a_full_day_window_answers_now() {
    assert_eq!(
        answer("Sun@00:00-23:59", datetime(2019, 11, 3, 14, 22, 0, 0)),
        "Now"
    );
}

#[test]
fn tomorrow_only_answers_tomorrow_at_start() {
    assert_eq!(
        answer("Mon@10:00-20:20", datetime(2019, 11, 3, 14, 22, 0, 0)),
        "2019-11-04 10:00"
    );
}

#[test]
fn saturday_evening_rolls_to_sunday_morning() {
    assert_eq!(
        answer("Sun@09:00-18:00", datetime(2019, 11, 2, 17, 17, 0, 0)),
        "2019-11-03 09:00"
    );
}

#[test]
fn early_tuesday_waits_for_the_same_morning() {
    assert_eq!(
        answer(
            "Sun-Thu@09:00-18:00&Fri@10:00-15:00",
            datetime(2019, 11, 5, 7, 7, 0, 0)
        ),
        "2019-11-05 09:00"
    );
}

#[test]
fn late_sunday_with_sunday_only_window_waits_a_week() {
    assert_eq!(
        answer("Sun@09:00-18:00", datetime(2019, 11, 3, 23, 45, 0, 0)),
        "2019-11-10 09:00"
    );
}

#[test]
fn gap_between_monday_frames_picks_the_evening_frame() {
    assert_eq!(
        answer(
            "Sun-Mon@09:00-15:00&Mon@18:00-19:30&Tue-Thu@09:00-19:30",
            datetime(2019, 11, 4, 17, 17, 0, 0)
        ),
        "2019-11-04 18:00"
    );
}

#[test]
fn late_thursday_crosses_into_next_month() {
    assert_eq!(
        answer(
            "Sun-Mon@09:00-15:00&Mon@18:00-19:30&Tue-Thu@09:00-19:30",
            datetime(2019, 10, 31, 23, 45, 0, 0)
        ),
        "2019-11-03 09:00"
    );
}

#[test]
fn boundary_minutes_are_inclusive_end_to_end() {
    assert_eq!(
        answer("Sun@09:00-18:00", datetime(2019, 11, 3, 9, 0, 0, 0)),
        "Now"
    );
    assert_eq!(
        answer("Sun@09:00-18:00", datetime(2019, 11, 3, 18, 0, 0, 0)),
        "Now"
    );
    assert_eq!(
        answer("Sun@09:00-18:00", datetime(2019, 11, 3, 8, 59, 0, 0)),
        "2019-11-03 09:00"
    );
}

#[test]
fn year_boundary_is_just_another_week() {
    // 2019-12-31 was a Tuesday; the window is on Wednesday Jan 1.
    assert_eq!(
        answer("Wed@08:00-12:00", datetime(2019, 12, 31, 20, 0, 0, 0)),
        "2020-01-01 08:00"
    );
}

#[test]
fn invalid_strings_never_reach_evaluation() {
    for spec in ["", "sun@09:00-18:00", "Sun@9:00-18:00", "Sun@09:00-24:00"] {
        let err = Schedule::parse(spec).unwrap_err();
        assert!(err.is_invalid_spec(), "{spec:?}");
    }
}

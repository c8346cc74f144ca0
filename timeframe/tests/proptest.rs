use proptest::prelude::*;
use timeframe::{grammar, Schedule, Weekday};

proptest! {
    #[test]
    fn any_grammatical_single_segment_parses(
        day in 0u8..7,
        h1 in 0u8..24, m1 in 0u8..60,
        h2 in 0u8..24, m2 in 0u8..60,
    ) {
        let token = Weekday::from_index(day).unwrap().token();
        let spec = format!("{token}@{h1:02}:{m1:02}-{h2:02}:{m2:02}");
        prop_assert!(grammar::validate(&spec).is_ok());

        let schedule = Schedule::parse(&spec).unwrap();
        prop_assert_eq!(schedule.days().count(), 1);
        prop_assert!(schedule.has_day(Weekday::from_index(day).unwrap()));
    }

    #[test]
    fn day_range_covers_the_expected_number_of_days(a in 0u8..7, b in 0u8..7) {
        let spec = format!(
            "{}-{}@09:00-17:00",
            Weekday::from_index(a).unwrap().token(),
            Weekday::from_index(b).unwrap().token(),
        );
        let schedule = Schedule::parse(&spec).unwrap();
        let expected = usize::from((b + 7 - a) % 7 + 1);
        prop_assert_eq!(schedule.days().count(), expected);
    }

    #[test]
    fn arbitrary_input_never_panics(input in "\\PC*") {
        let _ = Schedule::parse(&input);
    }

    #[test]
    fn display_of_a_parsed_schedule_reparses_identically(
        a in 0u8..7, b in 0u8..7,
        h1 in 0u8..24, m1 in 0u8..60,
        h2 in 0u8..24, m2 in 0u8..60,
    ) {
        let spec = format!(
            "{}-{}@{h1:02}:{m1:02}-{h2:02}:{m2:02}",
            Weekday::from_index(a).unwrap().token(),
            Weekday::from_index(b).unwrap().token(),
        );
        let schedule = Schedule::parse(&spec).unwrap();
        let reparsed = Schedule::parse(&schedule.to_string()).unwrap();
        prop_assert_eq!(schedule, reparsed);
    }
}

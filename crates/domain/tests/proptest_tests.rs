//! Property-based tests for filtering and aggregation
//!
//! These tests use proptest to verify invariants across many random inputs.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use domain::{
    AtmosphericReading, DateWindow, Timezone, WaterReading, aggregate, filter_readings,
};
use proptest::prelude::*;

fn base() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 12, 31, 12, 0, 0).unwrap()
}

/// Readings spread over 2024 with millisecond offsets
fn water_readings() -> impl Strategy<Value = Vec<WaterReading>> {
    prop::collection::vec(
        (0i64..366 * 24 * 3600 * 1000, 0u32..500, 0u32..500),
        0..40,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .map(|(ms, consumed, recovered)| {
                WaterReading::new(
                    base() + Duration::milliseconds(ms),
                    f64::from(consumed),
                    f64::from(recovered),
                )
            })
            .collect()
    })
}

fn temperatures() -> impl Strategy<Value = Vec<AtmosphericReading>> {
    prop::collection::vec(-400i32..450, 0..40).prop_map(|temps| {
        temps
            .into_iter()
            .map(|t| AtmosphericReading::new(base(), f64::from(t) / 10.0))
            .collect()
    })
}

fn day_in_2024() -> impl Strategy<Value = NaiveDate> {
    (0u64..366).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Days::new(offset)
    })
}

fn timezone() -> impl Strategy<Value = Timezone> {
    prop_oneof![
        Just(Timezone::utc()),
        Just(Timezone::antananarivo()),
        Just("Europe/Paris".parse::<Timezone>().unwrap()),
    ]
}

mod filter_tests {
    use super::*;

    proptest! {
        #[test]
        fn inactive_window_returns_input(
            readings in water_readings(),
            start in prop::option::of(day_in_2024()),
            end in prop::option::of(day_in_2024()),
            tz in timezone(),
        ) {
            let window = DateWindow { start, end, active: false };
            let out = filter_readings(&readings, &window, now(), tz);
            prop_assert_eq!(out.as_ref(), readings.as_slice());
        }

        #[test]
        fn single_day_window_keeps_exactly_that_day(
            readings in water_readings(),
            day in day_in_2024(),
            tz in timezone(),
        ) {
            let out = filter_readings(&readings, &DateWindow::between(day, day), now(), tz);
            let expected: Vec<WaterReading> = readings
                .iter()
                .filter(|r| tz.local_date(r.timestamp) == day)
                .cloned()
                .collect();
            prop_assert_eq!(out.into_owned(), expected);
        }

        #[test]
        fn filtered_is_an_ordered_subsequence(
            readings in water_readings(),
            start in day_in_2024(),
            end in day_in_2024(),
        ) {
            let out = filter_readings(&readings, &DateWindow::between(start, end), now(), Timezone::utc());
            let mut source = readings.iter();
            for kept in out.iter() {
                prop_assert!(source.any(|r| r == kept));
            }
            if start > end {
                prop_assert!(out.is_empty());
            }
        }
    }
}

mod aggregate_tests {
    use super::*;

    proptest! {
        #[test]
        fn aggregate_is_order_independent(
            water in water_readings(),
            atmospheric in temperatures(),
        ) {
            let forward = aggregate(&water, &atmospheric);

            let mut water_rev = water.clone();
            water_rev.reverse();
            let mut atmospheric_rev = atmospheric.clone();
            atmospheric_rev.reverse();
            let backward = aggregate(&water_rev, &atmospheric_rev);

            prop_assert!((forward.total_consumption - backward.total_consumption).abs() < 1e-6);
            prop_assert!((forward.total_rain_recovered - backward.total_rain_recovered).abs() < 1e-6);
            prop_assert!((forward.avg_temperature - backward.avg_temperature).abs() < 1e-6);
            prop_assert!((forward.min_temperature - backward.min_temperature).abs() < f64::EPSILON);
            prop_assert!((forward.max_temperature - backward.max_temperature).abs() < f64::EPSILON);
        }

        #[test]
        fn mean_lies_between_extremes(atmospheric in temperatures()) {
            let stats = aggregate(&[], &atmospheric);
            prop_assert!(stats.min_temperature <= stats.avg_temperature + 1e-9);
            prop_assert!(stats.avg_temperature <= stats.max_temperature + 1e-9);
        }
    }
}

#[test]
fn may_window_end_to_end() {
    let may = DateWindow::between(
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 5, 31).unwrap(),
    );
    let water = vec![
        WaterReading::new("2024-05-03T09:00:00Z".parse().unwrap(), 10.0, 0.0),
        WaterReading::new("2024-06-02T09:00:00Z".parse().unwrap(), 40.0, 0.0),
        WaterReading::new("2024-05-28T18:30:00Z".parse().unwrap(), 15.0, 0.0),
    ];

    let filtered = filter_readings(&water, &may, now(), Timezone::utc());
    assert_eq!(filtered.len(), 2);

    let stats = aggregate(&filtered, &[]);
    assert!((stats.total_consumption - 25.0).abs() < f64::EPSILON);
}

//! Offline forecast generator
//!
//! Synthesizes a plausible week when the remote source cannot be used.
//! Labels follow the real calendar; the numbers are drawn from fixed
//! ranges typical of the highlands climate.

use std::fmt;

use chrono::{DateTime, Days, Utc};
use domain::{
    FORECAST_DAYS, ForecastDay, Humidity, Locale, RainProbability, Timezone, WeatherCondition,
};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Inclusive range for the daily maximum, in Celsius
const TEMP_MAX_RANGE: (i32, i32) = (26, 29);
/// Inclusive range for the daily minimum, in Celsius
const TEMP_MIN_RANGE: (i32, i32) = (19, 22);
/// Inclusive humidity range, in percent
const HUMIDITY_RANGE: (u8, u8) = (60, 74);
/// Inclusive rain probability range, in percent
const RAIN_PROBABILITY_RANGE: (u8, u8) = (0, 79);

/// Generator for the offline 7-day forecast
pub struct FallbackForecastGenerator {
    rng: Mutex<StdRng>,
    locale: Locale,
    timezone: Timezone,
}

impl fmt::Debug for FallbackForecastGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FallbackForecastGenerator")
            .field("locale", &self.locale)
            .field("timezone", &self.timezone)
            .finish_non_exhaustive()
    }
}

impl FallbackForecastGenerator {
    /// Generator seeded from OS entropy
    #[must_use]
    pub fn new(locale: Locale, timezone: Timezone) -> Self {
        Self::with_rng(StdRng::from_os_rng(), locale, timezone)
    }

    /// Generator with a fixed seed, producing a reproducible sequence
    #[must_use]
    pub fn from_seed(seed: u64, locale: Locale, timezone: Timezone) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), locale, timezone)
    }

    fn with_rng(rng: StdRng, locale: Locale, timezone: Timezone) -> Self {
        Self {
            rng: Mutex::new(rng),
            locale,
            timezone,
        }
    }

    /// Locale used for day and condition labels
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Produce the forecast for the local day of `now` and the six after it
    pub fn generate(&self, now: DateTime<Utc>) -> Vec<ForecastDay> {
        let today = self.timezone.local_date(now);
        let mut rng = self.rng.lock();

        (0..FORECAST_DAYS as u64)
            .filter_map(|offset| today.checked_add_days(Days::new(offset)))
            .map(|date| {
                let temp_max = rng.random_range(TEMP_MAX_RANGE.0..=TEMP_MAX_RANGE.1);
                let temp_min = rng.random_range(TEMP_MIN_RANGE.0..=TEMP_MIN_RANGE.1);
                let humidity = rng.random_range(HUMIDITY_RANGE.0..=HUMIDITY_RANGE.1);
                let rain = rng.random_range(RAIN_PROBABILITY_RANGE.0..=RAIN_PROBABILITY_RANGE.1);

                ForecastDay::new(
                    date,
                    self.locale,
                    WeatherCondition::Variable,
                    f64::from(temp_max),
                    f64::from(temp_min),
                    Humidity::clamped(humidity),
                    RainProbability::clamped(rain),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate, TimeZone};
    use domain::ForecastIcon;

    fn generator(seed: u64) -> FallbackForecastGenerator {
        FallbackForecastGenerator::from_seed(seed, Locale::French, Timezone::antananarivo())
    }

    fn noon(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn always_seven_days() {
        let days = generator(1).generate(noon(2024, 6, 5));
        assert_eq!(days.len(), FORECAST_DAYS);
    }

    #[test]
    fn labels_follow_the_calendar() {
        // 2024-06-05 is a Wednesday
        let days = generator(2).generate(noon(2024, 6, 5));
        let names: Vec<&str> = days.iter().map(|d| d.day.as_str()).collect();
        assert_eq!(
            names,
            ["Mercredi", "Jeudi", "Vendredi", "Samedi", "Dimanche", "Lundi", "Mardi"]
        );
        assert_eq!(days[0].date, "5 Juin");
        assert_eq!(days[6].date, "11 Juin");
    }

    #[test]
    fn crosses_month_boundary() {
        let days = generator(3).generate(noon(2024, 1, 29));
        let dates: Vec<&str> = days.iter().map(|d| d.date.as_str()).collect();
        assert_eq!(
            dates,
            ["29 Jan", "30 Jan", "31 Jan", "1 Fév", "2 Fév", "3 Fév", "4 Fév"]
        );
    }

    #[test]
    fn starts_on_the_local_day() {
        // 22:30 UTC is already the next day in Antananarivo (UTC+3)
        let late = Utc.with_ymd_and_hms(2024, 6, 4, 22, 30, 0).unwrap();
        let days = generator(4).generate(late);
        assert_eq!(days[0].date, "5 Juin");

        let utc = FallbackForecastGenerator::from_seed(4, Locale::French, Timezone::utc());
        assert_eq!(utc.generate(late)[0].date, "4 Juin");
    }

    #[test]
    fn values_stay_within_ranges() {
        let r#gen = generator(5);
        for week in 0..50 {
            let now = noon(2024, 1, 1) + chrono::TimeDelta::weeks(week);
            for day in r#gen.generate(now) {
                assert!((26.0..=29.0).contains(&day.temp_max), "{day:?}");
                assert!((19.0..=22.0).contains(&day.temp_min), "{day:?}");
                assert!((60..=74).contains(&day.humidity.value()), "{day:?}");
                assert!(day.rain_probability.value() <= 79, "{day:?}");
                assert_eq!(day.temp_max.fract(), 0.0);
                assert_eq!(day.temp_min.fract(), 0.0);
            }
        }
    }

    #[test]
    fn condition_is_constant() {
        for day in generator(6).generate(noon(2024, 6, 5)) {
            assert_eq!(day.condition, "Variable");
            assert_eq!(day.icon, ForecastIcon::Cloudy);
        }
    }

    #[test]
    fn same_seed_same_output() {
        let now = noon(2024, 6, 5);
        assert_eq!(generator(42).generate(now), generator(42).generate(now));
    }

    #[test]
    fn successive_calls_advance_the_rng() {
        let r#gen = generator(7);
        let now = noon(2024, 6, 5);
        let first = r#gen.generate(now);
        let second = r#gen.generate(now);
        // Labels are identical, values come from later draws
        assert_eq!(
            first.iter().map(|d| &d.date).collect::<Vec<_>>(),
            second.iter().map(|d| &d.date).collect::<Vec<_>>()
        );
        assert_ne!(first, second);
    }

    #[test]
    fn english_labels() {
        let r#gen = FallbackForecastGenerator::from_seed(8, Locale::English, Timezone::utc());
        let days = r#gen.generate(noon(2024, 6, 5));
        assert_eq!(days[0].day, "Wednesday");
        assert_eq!(days[0].condition, "Variable");
    }

    #[test]
    fn weekday_matches_date() {
        let now = noon(2024, 2, 26);
        let days = generator(9).generate(now);
        let first = NaiveDate::from_ymd_opt(2024, 2, 26).unwrap();
        for (offset, day) in days.iter().enumerate() {
            let date = first + Days::new(offset as u64);
            assert_eq!(day.day, Locale::French.weekday_name(date.weekday()));
        }
    }
}

//! Forecast day entity

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::value_objects::{ForecastIcon, Humidity, Locale, RainProbability, WeatherCondition};

/// Number of days in a week forecast
pub const FORECAST_DAYS: usize = 7;

/// One day of a forecast, in the shape the dashboard consumes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDay {
    /// Localized weekday name
    pub day: String,
    /// Short calendar label, e.g. "5 Juin"
    pub date: String,
    /// Maximum temperature in Celsius
    pub temp_max: f64,
    /// Minimum temperature in Celsius
    pub temp_min: f64,
    /// Relative humidity
    pub humidity: Humidity,
    /// Probability of precipitation
    pub rain_probability: RainProbability,
    /// Localized condition label
    pub condition: String,
    /// Icon category
    pub icon: ForecastIcon,
}

impl ForecastDay {
    /// Build a forecast day with labels derived from `date` in `locale`
    #[must_use]
    pub fn new(
        date: NaiveDate,
        locale: Locale,
        condition: WeatherCondition,
        temp_max: f64,
        temp_min: f64,
        humidity: Humidity,
        rain_probability: RainProbability,
    ) -> Self {
        Self {
            day: locale.weekday_name(date.weekday()).to_string(),
            date: locale.short_date(date),
            temp_max,
            temp_min,
            humidity,
            rain_probability,
            condition: locale.condition_label(condition).to_string(),
            icon: condition.icon(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ForecastDay {
        ForecastDay::new(
            NaiveDate::from_ymd_opt(2024, 6, 5).unwrap(),
            Locale::French,
            WeatherCondition::Rain,
            24.0,
            17.0,
            Humidity::PLACEHOLDER,
            RainProbability::clamped(70),
        )
    }

    #[test]
    fn labels_come_from_the_date() {
        let day = sample();
        assert_eq!(day.day, "Mercredi");
        assert_eq!(day.date, "5 Juin");
        assert_eq!(day.condition, "Pluie");
        assert_eq!(day.icon, ForecastIcon::Rain);
    }

    #[test]
    fn wire_shape_is_camel_case() {
        let json = serde_json::to_value(sample()).expect("serialize");
        assert_eq!(json["tempMax"], serde_json::json!(24.0));
        assert_eq!(json["tempMin"], serde_json::json!(17.0));
        assert_eq!(json["rainProbability"], serde_json::json!(70));
        assert_eq!(json["humidity"], serde_json::json!(65));
        assert_eq!(json["icon"], serde_json::json!("rain"));
    }

    #[test]
    fn parses_remote_payload_entry() {
        let json = r#"{
            "day": "Lundi", "date": "3 Juin", "tempMax": 27, "tempMin": 19,
            "humidity": 65, "rainProbability": 55, "condition": "Averses", "icon": "rain"
        }"#;
        let day: ForecastDay = serde_json::from_str(json).expect("deserialize");
        assert_eq!(day.rain_probability.value(), 55);
        assert!((day.temp_max - 27.0).abs() < f64::EPSILON);
    }
}

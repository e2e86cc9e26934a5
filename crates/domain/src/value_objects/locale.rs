//! Display locale for forecast labels and alert messages

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::WeatherCondition;
use crate::errors::DomainError;

const FR_WEEKDAYS: [&str; 7] = [
    "Lundi", "Mardi", "Mercredi", "Jeudi", "Vendredi", "Samedi", "Dimanche",
];
const EN_WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const FR_MONTHS: [&str; 12] = [
    "Jan", "Fév", "Mar", "Avr", "Mai", "Juin", "Juil", "Aoû", "Sep", "Oct", "Nov", "Déc",
];
const EN_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Language used for weekday names, month abbreviations and messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// French, the dashboard's language
    #[default]
    #[serde(rename = "fr")]
    French,
    /// English
    #[serde(rename = "en")]
    English,
}

impl Locale {
    /// Full weekday name, e.g. "Lundi" / "Monday"
    #[must_use]
    pub fn weekday_name(self, weekday: Weekday) -> &'static str {
        let idx = weekday.num_days_from_monday() as usize;
        match self {
            Self::French => FR_WEEKDAYS[idx],
            Self::English => EN_WEEKDAYS[idx],
        }
    }

    /// Abbreviated month name for a 1-based month number
    #[must_use]
    pub fn month_abbrev(self, month: u32) -> &'static str {
        let idx = (month.clamp(1, 12) - 1) as usize;
        match self {
            Self::French => FR_MONTHS[idx],
            Self::English => EN_MONTHS[idx],
        }
    }

    /// Short calendar label: `"<day-of-month> <month-abbrev>"`, e.g. "5 Juin"
    #[must_use]
    pub fn short_date(self, date: NaiveDate) -> String {
        format!("{} {}", date.day(), self.month_abbrev(date.month()))
    }

    /// Human-readable label for a weather condition
    #[must_use]
    pub const fn condition_label(self, condition: WeatherCondition) -> &'static str {
        match self {
            Self::French => match condition {
                WeatherCondition::Sunny => "Ensoleillé",
                WeatherCondition::PartlyCloudy => "Partiellement nuageux",
                WeatherCondition::Fog => "Brouillard",
                WeatherCondition::Drizzle => "Bruine",
                WeatherCondition::Rain => "Pluie",
                WeatherCondition::Snow => "Neige",
                WeatherCondition::Showers => "Averses",
                WeatherCondition::HeavyRain => "Pluies intenses",
                WeatherCondition::Storm => "Orage",
                WeatherCondition::Variable => "Variable",
            },
            Self::English => match condition {
                WeatherCondition::Sunny => "Sunny",
                WeatherCondition::PartlyCloudy => "Partly cloudy",
                WeatherCondition::Fog => "Fog",
                WeatherCondition::Drizzle => "Drizzle",
                WeatherCondition::Rain => "Rain",
                WeatherCondition::Snow => "Snow",
                WeatherCondition::Showers => "Showers",
                WeatherCondition::HeavyRain => "Heavy rain",
                WeatherCondition::Storm => "Storm",
                WeatherCondition::Variable => "Variable",
            },
        }
    }

    /// Single alert sentence naming every rainy day, comma-joined in order
    #[must_use]
    pub fn rain_alert(self, days: &[&str]) -> String {
        let joined = days.join(", ");
        match self {
            Self::French => format!("Pluie probable les {joined}"),
            Self::English => format!("Rain likely on {joined}"),
        }
    }

    /// ISO 639-1 code
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::French => "fr",
            Self::English => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fr" | "fr-fr" | "french" => Ok(Self::French),
            "en" | "en-us" | "en-gb" | "english" => Ok(Self::English),
            _ => Err(DomainError::InvalidLocale(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_names() {
        assert_eq!(Locale::French.weekday_name(Weekday::Sun), "Dimanche");
        assert_eq!(Locale::French.weekday_name(Weekday::Mon), "Lundi");
        assert_eq!(Locale::English.weekday_name(Weekday::Sat), "Saturday");
    }

    #[test]
    fn short_date_uses_month_abbrev() {
        let d = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
        assert_eq!(Locale::French.short_date(d), "5 Juin");
        assert_eq!(Locale::English.short_date(d), "5 Jun");

        let d = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(Locale::French.short_date(d), "31 Déc");
    }

    #[test]
    fn rain_alert_sentence() {
        assert_eq!(
            Locale::French.rain_alert(&["Lundi", "Jeudi"]),
            "Pluie probable les Lundi, Jeudi"
        );
        assert_eq!(
            Locale::English.rain_alert(&["Monday"]),
            "Rain likely on Monday"
        );
    }

    #[test]
    fn parse_and_serde_codes() {
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::English);
        assert_eq!("fr".parse::<Locale>().unwrap(), Locale::French);
        assert!("de".parse::<Locale>().is_err());

        let json = serde_json::to_string(&Locale::English).unwrap();
        assert_eq!(json, "\"en\"");
    }

    #[test]
    fn variable_label_is_the_same_in_both_languages() {
        assert_eq!(
            Locale::French.condition_label(WeatherCondition::Variable),
            Locale::English.condition_label(WeatherCondition::Variable)
        );
    }
}

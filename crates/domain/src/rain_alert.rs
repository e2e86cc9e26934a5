//! Rain alerts derived from a forecast

use crate::entities::ForecastDay;
use crate::value_objects::Locale;

/// Probability from which a day counts as "rain soon"
pub const RAIN_SOON_THRESHOLD: u8 = 50;

/// Probability from which a day is named in the rain alert
pub const RAIN_ALERT_THRESHOLD: u8 = 60;

/// Default look-ahead for [`has_rain_soon`]
pub const DEFAULT_HORIZON_DAYS: usize = 2;

/// True if any of the first `horizon_days` days reaches 50% rain probability
#[must_use]
pub fn has_rain_soon(forecast: &[ForecastDay], horizon_days: usize) -> bool {
    forecast
        .iter()
        .take(horizon_days)
        .any(|day| day.rain_probability.at_least(RAIN_SOON_THRESHOLD))
}

/// At most one alert naming every day at or above 60%, in forecast order
#[must_use]
pub fn rain_alerts(forecast: &[ForecastDay], locale: Locale) -> Vec<String> {
    let rainy: Vec<&str> = forecast
        .iter()
        .filter(|day| day.rain_probability.at_least(RAIN_ALERT_THRESHOLD))
        .map(|day| day.day.as_str())
        .collect();

    if rainy.is_empty() {
        Vec::new()
    } else {
        vec![locale.rain_alert(&rainy)]
    }
}

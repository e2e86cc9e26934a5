//! Statistical aggregation over filtered readings
//!
//! Totals and temperature extremes are computed in a single pass. No
//! rounding happens here; presentation code formats the numbers.

use serde::{Deserialize, Serialize};

use crate::entities::{AtmosphericReading, WaterReading};

/// Summary figures for a set of readings
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    /// Sum of consumed litres
    pub total_consumption: f64,
    /// Sum of recovered rain litres
    pub total_rain_recovered: f64,
    /// Mean temperature, 0 when there are no atmospheric readings
    pub avg_temperature: f64,
    /// Lowest temperature, 0 when there are no atmospheric readings
    pub min_temperature: f64,
    /// Highest temperature, 0 when there are no atmospheric readings
    pub max_temperature: f64,
}

/// Statistics together with how many readings fed them
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsReport {
    /// The aggregated figures
    pub statistics: Statistics,
    /// Water readings inside the window
    pub water_readings: usize,
    /// Atmospheric readings inside the window
    pub atmospheric_readings: usize,
}

/// Reduce readings to totals and temperature statistics
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn aggregate(water: &[WaterReading], atmospheric: &[AtmosphericReading]) -> Statistics {
    let (total_consumption, total_rain_recovered) =
        water.iter().fold((0.0, 0.0), |(consumed, recovered), r| {
            (
                consumed + r.water_consumed_liters,
                recovered + r.rain_recovered_liters,
            )
        });

    let mut temperatures = atmospheric.iter().map(|a| a.temperature);
    let Some(first) = temperatures.next() else {
        return Statistics {
            total_consumption,
            total_rain_recovered,
            ..Statistics::default()
        };
    };

    let (sum, min, max) = temperatures.fold((first, first, first), |(sum, lo, hi), t| {
        (sum + t, lo.min(t), hi.max(t))
    });

    Statistics {
        total_consumption,
        total_rain_recovered,
        avg_temperature: sum / atmospheric.len() as f64,
        min_temperature: min,
        max_temperature: max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn ts() -> DateTime<Utc> {
        "2024-05-10T10:00:00Z".parse().unwrap()
    }

    #[test]
    fn empty_inputs_give_all_zero() {
        assert_eq!(aggregate(&[], &[]), Statistics::default());
    }

    #[test]
    fn sums_water_readings() {
        let water = vec![
            WaterReading::new(ts(), 10.0, 2.5),
            WaterReading::new(ts(), 15.0, 0.0),
            WaterReading::new(ts(), 0.0, 7.5),
        ];
        let stats = aggregate(&water, &[]);
        assert!((stats.total_consumption - 25.0).abs() < f64::EPSILON);
        assert!((stats.total_rain_recovered - 10.0).abs() < f64::EPSILON);
        assert!(stats.avg_temperature.abs() < f64::EPSILON);
    }

    #[test]
    fn temperature_mean_min_max() {
        let atmospheric = vec![
            AtmosphericReading::new(ts(), 18.0),
            AtmosphericReading::new(ts(), 24.0),
            AtmosphericReading::new(ts(), 21.0),
        ];
        let stats = aggregate(&[], &atmospheric);
        assert!((stats.avg_temperature - 21.0).abs() < f64::EPSILON);
        assert!((stats.min_temperature - 18.0).abs() < f64::EPSILON);
        assert!((stats.max_temperature - 24.0).abs() < f64::EPSILON);
    }

    #[test]
    fn single_reading_is_its_own_extremes() {
        let stats = aggregate(&[], &[AtmosphericReading::new(ts(), -3.5)]);
        assert!((stats.avg_temperature + 3.5).abs() < f64::EPSILON);
        assert!((stats.min_temperature + 3.5).abs() < f64::EPSILON);
        assert!((stats.max_temperature + 3.5).abs() < f64::EPSILON);
    }

    #[test]
    fn no_rounding_at_this_layer() {
        let atmospheric = vec![
            AtmosphericReading::new(ts(), 20.0),
            AtmosphericReading::new(ts(), 20.0),
            AtmosphericReading::new(ts(), 21.0),
        ];
        let stats = aggregate(&[], &atmospheric);
        assert!((stats.avg_temperature - 61.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(Statistics::default()).unwrap();
        assert!(json.get("totalConsumption").is_some());
        assert!(json.get("avgTemperature").is_some());
    }
}

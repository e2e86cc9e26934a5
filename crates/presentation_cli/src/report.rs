//! Plain-text rendering of command results

use application::{CachedForecast, ForecastOrigin};
use domain::{DateWindow, ForecastDay, StatisticsReport};

/// Human label for the filtering window
pub fn window_label(window: &DateWindow) -> String {
    if window.is_unbounded() {
        return "all readings".to_string();
    }
    match (window.start, window.end) {
        (Some(start), Some(end)) => format!("{start} to {end}"),
        (Some(start), None) => format!("from {start}"),
        (None, Some(end)) => format!("until {end}"),
        (None, None) => "all readings".to_string(),
    }
}

/// Totals to the litre, temperatures to a tenth of a degree
pub fn statistics(report: &StatisticsReport, window: &DateWindow) -> String {
    let s = &report.statistics;
    format!(
        "Period: {}\n\
         Readings: {} water, {} atmospheric\n\
         Total consumption: {:.0} L\n\
         Rain recovered: {:.0} L\n\
         Temperature: avg {:.1}°C, min {:.1}°C, max {:.1}°C",
        window_label(window),
        report.water_readings,
        report.atmospheric_readings,
        s.total_consumption,
        s.total_rain_recovered,
        s.avg_temperature,
        s.min_temperature,
        s.max_temperature,
    )
}

fn day_line(day: &ForecastDay) -> String {
    format!(
        "{:<10} {:<8} {:>3.0}° / {:>3.0}°  rain {:>3}%  humidity {:>3}%  {}",
        day.day,
        day.date,
        day.temp_max,
        day.temp_min,
        day.rain_probability.value(),
        day.humidity.value(),
        day.condition,
    )
}

/// Week table preceded by where it came from
pub fn forecast(entry: &CachedForecast) -> String {
    let header = match entry.origin {
        ForecastOrigin::Remote => format!(
            "Forecast fetched {}",
            entry.fetched_at.format("%Y-%m-%d %H:%M UTC")
        ),
        ForecastOrigin::Fallback => "Offline estimate (forecast source unavailable)".to_string(),
    };

    let mut lines = vec![header];
    lines.extend(entry.days.iter().map(day_line));
    lines.join("\n")
}

pub fn alerts(rain_soon: bool, horizon_days: usize, alerts: &[String]) -> String {
    let mut lines = vec![if rain_soon {
        format!("Rain likely within {horizon_days} day(s)")
    } else {
        format!("No rain expected within {horizon_days} day(s)")
    }];
    lines.extend(alerts.iter().cloned());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use domain::{Humidity, Locale, RainProbability, Statistics, WeatherCondition};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn window_labels() {
        assert_eq!(window_label(&DateWindow::inactive()), "all readings");
        assert_eq!(
            window_label(&DateWindow::between(date(2024, 6, 1), date(2024, 6, 30))),
            "2024-06-01 to 2024-06-30"
        );
        assert_eq!(
            window_label(&DateWindow::new(Some(date(2024, 6, 1)), None)),
            "from 2024-06-01"
        );
        assert_eq!(
            window_label(&DateWindow::new(None, Some(date(2024, 6, 30)))),
            "until 2024-06-30"
        );
        assert_eq!(window_label(&DateWindow::new(None, None)), "all readings");
    }

    #[test]
    fn statistics_rounding() {
        let report = StatisticsReport {
            statistics: Statistics {
                total_consumption: 1234.6,
                total_rain_recovered: 80.4,
                avg_temperature: 22.25,
                min_temperature: 18.0,
                max_temperature: 27.44,
            },
            water_readings: 3,
            atmospheric_readings: 4,
        };
        let text = statistics(&report, &DateWindow::inactive());

        assert!(text.contains("Readings: 3 water, 4 atmospheric"));
        assert!(text.contains("Total consumption: 1235 L"));
        assert!(text.contains("Rain recovered: 80 L"));
        assert!(text.contains("min 18.0°C"));
        assert!(text.contains("max 27.4°C"));
    }

    #[test]
    fn fallback_forecast_is_labelled() {
        let day = ForecastDay::new(
            date(2024, 6, 5),
            Locale::French,
            WeatherCondition::Variable,
            27.0,
            20.0,
            Humidity::PLACEHOLDER,
            RainProbability::default(),
        );
        let entry = CachedForecast {
            days: vec![day],
            origin: ForecastOrigin::Fallback,
            fetched_at: "2024-06-05T09:00:00Z".parse().unwrap(),
        };
        let text = forecast(&entry);

        assert!(text.starts_with("Offline estimate"));
        assert!(text.contains("Mercredi"));
        assert!(text.contains("5 Juin"));
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn remote_forecast_shows_fetch_time() {
        let entry = CachedForecast {
            days: Vec::new(),
            origin: ForecastOrigin::Remote,
            fetched_at: "2024-06-05T09:30:00Z".parse().unwrap(),
        };
        assert_eq!(forecast(&entry), "Forecast fetched 2024-06-05 09:30 UTC");
    }

    #[test]
    fn alert_lines() {
        let text = alerts(true, 2, &["Pluie probable les Jeudi, Samedi".to_string()]);
        assert_eq!(
            text,
            "Rain likely within 2 day(s)\nPluie probable les Jeudi, Samedi"
        );
        assert_eq!(alerts(false, 3, &[]), "No rain expected within 3 day(s)");
    }
}

//! Value Objects - Immutable, identity-less domain primitives

mod geo_location;
mod humidity;
mod locale;
mod rain_probability;
mod timezone;
mod weather_condition;

pub use geo_location::{GeoLocation, InvalidCoordinates};
pub use humidity::{Humidity, InvalidHumidity};
pub use locale::Locale;
pub use rain_probability::{InvalidRainProbability, RainProbability};
pub use timezone::Timezone;
pub use weather_condition::{ForecastIcon, WeatherCondition};

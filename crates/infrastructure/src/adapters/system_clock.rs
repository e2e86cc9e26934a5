//! Wall clock adapter - Implements ClockPort with `Utc::now`

use application::ports::ClockPort;
use chrono::{DateTime, Utc};

/// The real clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

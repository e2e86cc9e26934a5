//! Date-window filtering of timestamped readings
//!
//! A window is inclusive on both ends at day granularity: `start` opens at
//! 00:00:00.000 local time and `end` closes at 23:59:59.999 local time.

use std::borrow::Cow;

use chrono::{DateTime, Datelike, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::Timestamped;
use crate::value_objects::Timezone;

/// Operator-chosen date range plus an on/off switch
///
/// An empty `start` is open back to the epoch, an empty `end` is open
/// through the end of the current day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateWindow {
    /// First calendar day included
    pub start: Option<NaiveDate>,
    /// Last calendar day included
    pub end: Option<NaiveDate>,
    /// Whether the window restricts anything at all
    pub active: bool,
}

impl DateWindow {
    /// Create an active window with optional bounds
    #[must_use]
    pub const fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self {
            start,
            end,
            active: true,
        }
    }

    /// Active window covering `start..=end`
    #[must_use]
    pub const fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self::new(Some(start), Some(end))
    }

    /// Window that lets everything through
    #[must_use]
    pub const fn inactive() -> Self {
        Self {
            start: None,
            end: None,
            active: false,
        }
    }

    /// Active window from the first to the last day of the month containing `today`
    #[must_use]
    pub fn current_month(today: NaiveDate) -> Self {
        let first = today.with_day(1).unwrap_or(today);
        let last = first
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(today);
        Self::between(first, last)
    }

    /// Clear both bounds and switch the window off
    pub fn reset(&mut self) {
        *self = Self::inactive();
    }

    /// Switch the window on, keeping whatever bounds are set
    pub fn apply(&mut self) {
        self.active = true;
    }

    /// Whether filtering with this window is a no-op
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        !self.active || (self.start.is_none() && self.end.is_none())
    }

    /// Effective inclusive instant bounds, or `None` when the window is unbounded
    #[must_use]
    pub fn bounds(
        &self,
        now: DateTime<Utc>,
        timezone: Timezone,
    ) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        if self.is_unbounded() {
            return None;
        }
        let lo = self
            .start
            .map_or(DateTime::<Utc>::UNIX_EPOCH, |d| timezone.start_of_day(d));
        let hi = timezone.end_of_day(self.end.unwrap_or_else(|| timezone.local_date(now)));
        Some((lo, hi))
    }
}

/// Keep the readings whose timestamp lies inside `window`.
///
/// Relative order is preserved. An unbounded window borrows the input
/// untouched; a window whose start falls after its end yields nothing.
pub fn filter_readings<'a, R>(
    readings: &'a [R],
    window: &DateWindow,
    now: DateTime<Utc>,
    timezone: Timezone,
) -> Cow<'a, [R]>
where
    R: Timestamped + Clone,
{
    let Some((lo, hi)) = window.bounds(now, timezone) else {
        return Cow::Borrowed(readings);
    };

    Cow::Owned(
        readings
            .iter()
            .filter(|r| {
                let ts = r.timestamp();
                lo <= ts && ts <= hi
            })
            .cloned()
            .collect(),
    )
}

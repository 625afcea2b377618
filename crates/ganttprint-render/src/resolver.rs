//! Date range resolution
//!
//! Turns the raw `[min start, max finish]` of a schedule into the padded,
//! week-aligned range used for all layout math, and picks the scale level
//! from the padded span.

use chrono::{Datelike, Days, Duration, NaiveTime};
use ganttprint_core::{DateRange, Instant, RangeError, ScaleLevel, Schedule};
use tracing::debug;

/// Padding is widened by one more week when a bound lands closer than this
/// to the data.
const BOUNDARY_CLOSENESS_DAYS: i64 = 2;

/// Longest padded span still drawn day by day
const DAILY_MAX_DAYS: i64 = 30;

/// Longest padded span still drawn week by week
const WEEKLY_MAX_DAYS: i64 = 365;

/// Resolves the padded date range and scale level of a schedule
#[derive(Clone, Copy, Debug, Default)]
pub struct DateRangeResolver;

impl DateRangeResolver {
    pub fn new() -> Self {
        Self
    }

    /// Resolve the padded range and scale level for `schedule`
    ///
    /// Fails with [`RangeError::EmptySchedule`] when there is nothing to
    /// scan and with [`RangeError::InvalidRange`] when the earliest start
    /// lies after the latest finish.
    pub fn resolve(&self, schedule: &Schedule) -> Result<(DateRange, ScaleLevel), RangeError> {
        let (raw_first, raw_last) = raw_bounds(schedule)?;
        let range = pad_to_weeks(raw_first, raw_last)?;
        let level = select_scale_level(range.duration());

        debug!(
            raw_first = %raw_first,
            raw_last = %raw_last,
            first = %range.first(),
            last = %range.last(),
            %level,
            "resolved date range"
        );

        Ok((range, level))
    }
}

/// Earliest start and latest finish over all items
pub fn raw_bounds(schedule: &Schedule) -> Result<(Instant, Instant), RangeError> {
    let mut items = schedule.iter();
    let head = items.next().ok_or(RangeError::EmptySchedule)?;

    let (first, last) = items.fold((head.start(), head.finish()), |(first, last), item| {
        (first.min(item.start()), last.max(item.finish()))
    });

    if first > last {
        return Err(RangeError::InvalidRange { first, last });
    }
    Ok((first, last))
}

/// Monday 00:00 UTC of the ISO week containing `instant`
pub fn start_of_week(instant: Instant) -> Result<Instant, RangeError> {
    let date = instant.date_naive();
    let since_monday = Days::new(u64::from(date.weekday().num_days_from_monday()));
    date.checked_sub_days(since_monday)
        .map(|monday| monday.and_time(NaiveTime::MIN).and_utc())
        .ok_or(RangeError::OutOfRange { instant })
}

/// Snap raw bounds outward to whole weeks, then widen by a week on any side
/// where the snapped bound sits within two days of the data.
///
/// Fails with [`RangeError::OutOfRange`] when a padded bound falls outside
/// the representable calendar.
pub fn pad_to_weeks(raw_first: Instant, raw_last: Instant) -> Result<DateRange, RangeError> {
    let week = Duration::weeks(1);
    let closeness = Duration::days(BOUNDARY_CLOSENESS_DAYS);

    let mut first = start_of_week(raw_first)?;
    let mut last = start_of_week(raw_last)?
        .checked_add_signed(week - Duration::milliseconds(1))
        .ok_or(RangeError::OutOfRange { instant: raw_last })?;

    if raw_first - first < closeness {
        first = first
            .checked_sub_signed(week)
            .ok_or(RangeError::OutOfRange { instant: raw_first })?;
    }
    if last - raw_last < closeness {
        last = last
            .checked_add_signed(week)
            .ok_or(RangeError::OutOfRange { instant: raw_last })?;
    }

    DateRange::new(first, last)
}

/// Scale level for a padded span; both thresholds are inclusive below
pub fn select_scale_level(span: Duration) -> ScaleLevel {
    if span > Duration::days(WEEKLY_MAX_DAYS) {
        ScaleLevel::Monthly
    } else if span > Duration::days(DAILY_MAX_DAYS) {
        ScaleLevel::Weekly
    } else {
        ScaleLevel::Daily
    }
}

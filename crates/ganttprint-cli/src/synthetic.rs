//! Synthetic schedule generator for the `demo` command
//!
//! Builds schedules programmatically, without reading a file, so large
//! reports can be produced and inspected quickly.

use chrono::Duration;
use ganttprint_core::{Instant, Schedule, ScheduleItem};

const WORK_ORDER: &str = "12345678";
const DESCRIPTION: &str = "work order description has 40 characters";
const ITEM_DAYS: i64 = 4;

/// Generate `count` four-day items, each starting one day after the previous
///
/// With a few hundred items the range passes a year and the report switches
/// to the monthly scale.
pub fn generate_staggered(count: usize, start: Instant) -> Schedule {
    (0..count)
        .map(|i| {
            let begin = start + Duration::days(i as i64);
            ScheduleItem::new(
                WORK_ORDER,
                format!("{:03}", i + 1),
                DESCRIPTION,
                begin,
                begin + Duration::days(ITEM_DAYS),
            )
        })
        .collect()
}

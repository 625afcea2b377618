//! # ganttprint-core
//!
//! Core domain model and traits for the ganttprint report engine.
//!
//! This crate provides:
//! - Domain types: `ScheduleItem`, `Schedule`, `DateRange`, `ScaleLevel`, `PageSize`
//! - Drawing surface abstraction: `Canvas`, `PageEvents` and their value types
//! - Core traits: `Renderer`
//! - Error types
//!
//! ## Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use ganttprint_core::{Schedule, ScheduleItem};
//!
//! let start = Utc.with_ymd_and_hms(2025, 1, 6, 8, 0, 0).unwrap();
//! let finish = Utc.with_ymd_and_hms(2025, 1, 10, 17, 0, 0).unwrap();
//!
//! let mut schedule = Schedule::new();
//! schedule.push(ScheduleItem::new("12345678", "001", "Replace pump seals", start, finish));
//! assert_eq!(schedule.len(), 1);
//! ```

pub mod canvas;

pub use canvas::{Canvas, Color, Font, PageEvents, Paint, Rect, TextAlign};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ============================================================================
// Type Aliases
// ============================================================================

/// An absolute, UTC-normalized point in time
pub type Instant = DateTime<Utc>;

// ============================================================================
// Schedule
// ============================================================================

/// A single scheduled work item, one row of the report
///
/// The item does not require `start <= finish`; reversed items are rendered
/// as-is by the bar renderer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleItem {
    work_order: String,
    task_id: String,
    description: String,
    start: Instant,
    finish: Instant,
}

impl ScheduleItem {
    pub fn new(
        work_order: impl Into<String>,
        task_id: impl Into<String>,
        description: impl Into<String>,
        start: Instant,
        finish: Instant,
    ) -> Self {
        Self {
            work_order: work_order.into(),
            task_id: task_id.into(),
            description: description.into(),
            start,
            finish,
        }
    }

    pub fn work_order(&self) -> &str {
        &self.work_order
    }

    pub fn task_id(&self) -> &str {
        &self.task_id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn start(&self) -> Instant {
        self.start
    }

    pub fn finish(&self) -> Instant {
        self.finish
    }
}

/// An ordered collection of schedule items
///
/// Insertion order is row order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    items: Vec<ScheduleItem>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: ScheduleItem) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScheduleItem> {
        self.items.iter()
    }

    pub fn items(&self) -> &[ScheduleItem] {
        &self.items
    }
}

impl FromIterator<ScheduleItem> for Schedule {
    fn from_iter<I: IntoIterator<Item = ScheduleItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl Extend<ScheduleItem> for Schedule {
    fn extend<I: IntoIterator<Item = ScheduleItem>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a ScheduleItem;
    type IntoIter = std::slice::Iter<'a, ScheduleItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// ============================================================================
// Timeline
// ============================================================================

/// The padded bounds every coordinate calculation of a render pass uses
///
/// Always satisfies `first <= last`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateRange {
    first: Instant,
    last: Instant,
}

impl DateRange {
    pub fn new(first: Instant, last: Instant) -> Result<Self, RangeError> {
        if first > last {
            return Err(RangeError::InvalidRange { first, last });
        }
        Ok(Self { first, last })
    }

    pub fn first(&self) -> Instant {
        self.first
    }

    pub fn last(&self) -> Instant {
        self.last
    }

    pub fn duration(&self) -> chrono::Duration {
        self.last - self.first
    }

    pub fn contains(&self, instant: Instant) -> bool {
        self.first <= instant && instant <= self.last
    }
}

/// Time-axis resolution of a chart
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleLevel {
    Daily,
    Weekly,
    Monthly,
}

impl fmt::Display for ScaleLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaleLevel::Daily => write!(f, "daily"),
            ScaleLevel::Weekly => write!(f, "weekly"),
            ScaleLevel::Monthly => write!(f, "monthly"),
        }
    }
}

// ============================================================================
// Paper
// ============================================================================

/// Landscape paper sizes, measured in points
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PageSize {
    #[default]
    #[serde(alias = "a2")]
    A2,
    #[serde(alias = "a3")]
    A3,
    #[serde(alias = "a4")]
    A4,
}

impl PageSize {
    pub fn width(&self) -> f64 {
        match self {
            PageSize::A2 => 1684.0,
            PageSize::A3 => 1191.0,
            PageSize::A4 => 842.0,
        }
    }

    pub fn height(&self) -> f64 {
        match self {
            PageSize::A2 => 1191.0,
            PageSize::A3 => 842.0,
            PageSize::A4 => 595.0,
        }
    }

    /// The full page as a rectangle anchored at the origin
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width(), self.height())
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageSize::A2 => write!(f, "A2"),
            PageSize::A3 => write!(f, "A3"),
            PageSize::A4 => write!(f, "A4"),
        }
    }
}

impl FromStr for PageSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A2" => Ok(PageSize::A2),
            "A3" => Ok(PageSize::A3),
            "A4" => Ok(PageSize::A4),
            other => Err(format!("unknown page size '{}' (expected A2, A3 or A4)", other)),
        }
    }
}

// ============================================================================
// Traits
// ============================================================================

/// Output renderer for schedules
pub trait Renderer {
    type Output;

    /// Render a schedule to the output format
    fn render(&self, schedule: &Schedule) -> Result<Self::Output, RenderError>;
}

// ============================================================================
// Errors
// ============================================================================

/// Date range resolution errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("Schedule contains no items")]
    EmptySchedule,

    #[error("Invalid date range: first {first} is after last {last}")]
    InvalidRange { first: Instant, last: Instant },

    /// Week padding around `instant` would leave the representable calendar
    #[error("Date range cannot be padded around {instant}: outside the supported calendar")]
    OutOfRange { instant: Instant },
}

/// Rendering errors
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Range(#[from] RangeError),
}

// ============================================================================
// Tests
// ============================================================================

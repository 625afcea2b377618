//! Per-render layout state
//!
//! A [`RenderContext`] is built once per render pass and shared read-only by
//! every cell, so all rows agree on the same range and scaling.

use crate::mapper::CoordinateMapper;
use ganttprint_core::{DateRange, PageSize, ScaleLevel};

/// Widths of the Work Order, Task, Description, Start and Finish columns
pub const DATA_COLUMN_WIDTHS: [f64; 5] = [60.0, 30.0, 250.0, 100.0, 100.0];

/// Inset of the page border from the paper edge
pub const BORDER_PADDING: f64 = 5.0;

/// Page margin; content starts just inside the border
pub const PAGE_MARGIN: f64 = BORDER_PADDING + 1.0;

/// Fixed height of every table row
pub const ROW_HEIGHT: f64 = 19.0;

/// Column widths and timeline scaling for one page size and range
#[derive(Clone, Debug, PartialEq)]
pub struct Geometry {
    pub data_column_widths: [f64; 5],
    pub timeline_width: f64,
    mapper: CoordinateMapper,
}

impl Geometry {
    pub fn new(page_size: PageSize, range: &DateRange) -> Self {
        let data_width: f64 = DATA_COLUMN_WIDTHS.iter().sum();
        let timeline_width = page_size.width() - data_width - BORDER_PADDING * 2.0 - 2.0;
        Self {
            data_column_widths: DATA_COLUMN_WIDTHS,
            timeline_width,
            mapper: CoordinateMapper::new(range, timeline_width),
        }
    }

    /// Timeline scale, as computed by the mapper
    pub fn pixels_per_millisecond(&self) -> f64 {
        self.mapper.scaling_factor()
    }

    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    pub fn data_width(&self) -> f64 {
        self.data_column_widths.iter().sum()
    }

    /// All six table columns, the timeline last
    pub fn column_widths(&self) -> Vec<f64> {
        let mut widths = self.data_column_widths.to_vec();
        widths.push(self.timeline_width);
        widths
    }

    pub fn table_width(&self) -> f64 {
        self.data_width() + self.timeline_width
    }
}

/// Range, scale level and geometry shared by every cell of one render pass
#[derive(Clone, Debug)]
pub struct RenderContext {
    range: DateRange,
    scale_level: ScaleLevel,
    geometry: Geometry,
}

impl RenderContext {
    pub fn new(range: DateRange, scale_level: ScaleLevel, page_size: PageSize) -> Self {
        let geometry = Geometry::new(page_size, &range);
        Self {
            range,
            scale_level,
            geometry,
        }
    }

    pub fn range(&self) -> &DateRange {
        &self.range
    }

    pub fn scale_level(&self) -> ScaleLevel {
        self.scale_level
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn mapper(&self) -> &CoordinateMapper {
        self.geometry.mapper()
    }
}

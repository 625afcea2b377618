//! # ganttprint-render
//!
//! Timeline layout and SVG rendering for ganttprint schedules.
//!
//! This crate provides:
//! - Date range resolution with week padding and scale-level selection
//! - Mapping of instants to horizontal positions in the timeline column
//! - Gridline, weekend shading and header label painting
//! - Duration bars with drop shadows
//! - A paginated report layout with a repeated header row
//!
//! ## Example
//!
//! ```rust,ignore
//! use ganttprint_core::{PageSize, Renderer, Schedule};
//! use ganttprint_render::GanttLayoutEngine;
//!
//! let engine = GanttLayoutEngine::new().page_size(PageSize::A3);
//! let svg = engine.render(&schedule)?;
//! std::fs::write("schedule.svg", svg)?;
//! ```

pub mod bar;
pub mod context;
pub mod document;
pub mod layout;
pub mod mapper;
pub mod options;
pub mod resolver;
pub mod scale;

#[cfg(test)]
mod recording;

pub use bar::BarRenderer;
pub use context::{Geometry, RenderContext};
pub use document::{SvgCanvas, SvgDocument};
pub use layout::{GanttLayoutEngine, PageBorder, TablePlan};
pub use mapper::CoordinateMapper;
pub use options::ReportOptions;
pub use resolver::DateRangeResolver;
pub use scale::{Gridline, ScaleRenderer};

use ganttprint_core::{PageSize, RenderError, Renderer, Schedule};

/// Render `schedule` on `page_size` paper with default options
pub fn render_report(schedule: &Schedule, page_size: PageSize) -> Result<Vec<u8>, RenderError> {
    GanttLayoutEngine::new().page_size(page_size).render(schedule)
}

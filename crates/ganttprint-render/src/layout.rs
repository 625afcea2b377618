//! Gantt report layout
//!
//! Lays a schedule out as a table: five fixed-width metadata columns and one
//! elastic timeline column. The header row and every data row paint their
//! timeline cell through the same [`RenderContext`], which is resolved once
//! per render.

use crate::bar::BarRenderer;
use crate::context::{RenderContext, BORDER_PADDING, PAGE_MARGIN, ROW_HEIGHT};
use crate::document::SvgDocument;
use crate::options::ReportOptions;
use crate::resolver::DateRangeResolver;
use crate::scale::ScaleRenderer;
use chrono::Utc;
use ganttprint_core::{
    Canvas, Color, Font, Instant, PageEvents, PageSize, Paint, Rect, RenderError, Renderer,
    Schedule, ScheduleItem, TextAlign,
};
use tracing::debug;

pub const DATA_FONT: Font = Font::new("Helvetica", 9.0);
pub const HEADER_FONT: Font = Font::new("Helvetica", 8.0).bold();

/// Placeholder printed instead of a table when there is nothing to chart
pub const NO_DATA: &str = "   *** no data ***";

pub const HEADER_LABELS: [&str; 5] = ["Work Order", "Task", "Description", "Start", "Finish"];

const DATE_FORMAT: &str = "%Y/%m/%d %H:%M";
const CELL_PADDING_LEFT: f64 = 5.0;
const CELL_PADDING_BOTTOM: f64 = 3.0;
const CELL_BORDER_WIDTH: f64 = 0.5;
const CELL_BORDER_COLOR: Color = Color::GRAY;
const PARAGRAPH_LEADING: f64 = BORDER_PADDING * 3.0;

/// Border drawn around every page, just outside the margins
#[derive(Clone, Copy, Debug)]
pub struct PageBorder {
    padding: f64,
}

impl PageBorder {
    pub fn new(padding: f64) -> Self {
        Self { padding }
    }
}

impl PageEvents for PageBorder {
    fn on_start_page(&self, canvas: &mut dyn Canvas, page: Rect) {
        canvas.save_state();
        canvas.set_line_width(0.5);
        canvas.set_stroke_color(Color::BLACK);
        canvas.rectangle(page.inset(self.padding), Paint::Stroke);
        canvas.restore_state();
    }
}

/// Column plan of the report table
#[derive(Clone, Debug, PartialEq)]
pub struct TablePlan {
    widths: Vec<f64>,
}

impl TablePlan {
    pub fn new(widths: Vec<f64>) -> Self {
        Self { widths }
    }

    /// Split a row band into one cell per column, left to right
    pub fn cells(&self, row: Rect) -> Vec<Rect> {
        let mut x = row.left();
        self.widths
            .iter()
            .map(|width| {
                let cell = Rect::new(x, row.top(), *width, row.height);
                x += width;
                cell
            })
            .collect()
    }

    pub fn total_width(&self) -> f64 {
        self.widths.iter().sum()
    }
}

/// Renders a schedule into a paginated Gantt report
#[derive(Clone, Debug, Default)]
pub struct GanttLayoutEngine {
    options: ReportOptions,
}

impl GanttLayoutEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ReportOptions) -> Self {
        Self { options }
    }

    pub fn page_size(mut self, page_size: PageSize) -> Self {
        self.options.page_size = page_size;
        self
    }

    /// Append a summary page after the table
    pub fn summary_page(mut self, enabled: bool) -> Self {
        self.options.summary_page = enabled;
        self
    }

    /// Pin the timestamp printed on the summary page
    pub fn generated_at(mut self, instant: Instant) -> Self {
        self.options.generated_at = Some(instant);
        self
    }

    pub fn options(&self) -> &ReportOptions {
        &self.options
    }

    /// Lay the schedule out into a document that is ready to be closed
    pub fn layout(&self, schedule: &Schedule) -> Result<SvgDocument, RenderError> {
        debug!(page_size = %self.options.page_size, "creating document for gantt print");
        let mut document = SvgDocument::new(self.options.page_size, PAGE_MARGIN)
            .title(self.options.title.as_str())
            .author(self.options.author.as_str())
            .with_page_events(PageBorder::new(BORDER_PADDING));
        document.open();

        if schedule.is_empty() {
            document.add_paragraph(NO_DATA, &DATA_FONT, PARAGRAPH_LEADING);
            return Ok(document);
        }

        let (range, scale_level) = DateRangeResolver::new().resolve(schedule)?;
        let ctx = RenderContext::new(range, scale_level, self.options.page_size);
        self.print_schedule(&mut document, &ctx, schedule);

        if self.options.summary_page {
            self.print_summary(&mut document, &ctx, schedule.len());
        }

        Ok(document)
    }

    fn print_schedule(&self, document: &mut SvgDocument, ctx: &RenderContext, schedule: &Schedule) {
        debug!(items = schedule.len(), "printing schedule");

        let table = TablePlan::new(ctx.geometry().column_widths());
        let scale = ScaleRenderer::new(ctx);
        let bar = BarRenderer::new(ctx.mapper());

        self.print_header_row(document, &table, &scale);
        for item in schedule {
            if document.remaining_height() < ROW_HEIGHT {
                document.new_page();
                self.print_header_row(document, &table, &scale);
            }
            self.print_item_row(document, &table, &scale, &bar, item);
        }

        debug!(pages = document.page_count(), "printed schedule");
    }

    fn print_header_row(&self, document: &mut SvgDocument, table: &TablePlan, scale: &ScaleRenderer) {
        let cells = table.cells(document.allocate(ROW_HEIGHT));
        let Some((timeline, data_cells)) = cells.split_last() else {
            return;
        };

        let canvas = document.canvas();
        for (cell, label) in data_cells.iter().zip(HEADER_LABELS) {
            paint_text_cell(canvas, *cell, label, &HEADER_FONT);
        }
        scale.paint_scale(canvas, *timeline, true);
        paint_cell_border(canvas, *timeline);
    }

    fn print_item_row(
        &self,
        document: &mut SvgDocument,
        table: &TablePlan,
        scale: &ScaleRenderer,
        bar: &BarRenderer,
        item: &ScheduleItem,
    ) {
        let cells = table.cells(document.allocate(ROW_HEIGHT));
        let Some((timeline, data_cells)) = cells.split_last() else {
            return;
        };

        let start = format_instant(item.start());
        let finish = format_instant(item.finish());
        let values = [
            item.work_order(),
            item.task_id(),
            item.description(),
            start.as_str(),
            finish.as_str(),
        ];

        let canvas = document.canvas();
        for (cell, value) in data_cells.iter().zip(values) {
            paint_text_cell(canvas, *cell, value, &DATA_FONT);
        }
        scale.paint_scale(canvas, *timeline, false);
        bar.paint_bar(canvas, *timeline, item);
        paint_cell_border(canvas, *timeline);
    }

    fn print_summary(&self, document: &mut SvgDocument, ctx: &RenderContext, item_count: usize) {
        document.new_page();

        let generated_at = self.options.generated_at.unwrap_or_else(Utc::now);
        document.add_paragraph(
            &format!("{} - Summary", self.options.title),
            &HEADER_FONT,
            PARAGRAPH_LEADING,
        );
        for line in [
            format!("Items: {}", item_count),
            format!("First: {}", format_instant(ctx.range().first())),
            format!("Last: {}", format_instant(ctx.range().last())),
            format!("Scale: {}", ctx.scale_level()),
            format!("Page size: {}", self.options.page_size),
            format!("Generated: {}", format_instant(generated_at)),
        ] {
            document.add_paragraph(&line, &DATA_FONT, PARAGRAPH_LEADING);
        }
    }
}

impl Renderer for GanttLayoutEngine {
    type Output = Vec<u8>;

    fn render(&self, schedule: &Schedule) -> Result<Vec<u8>, RenderError> {
        let bytes = self.layout(schedule)?.close()?;
        debug!(bytes = bytes.len(), "created document for gantt print");
        Ok(bytes)
    }
}

fn paint_text_cell(canvas: &mut dyn Canvas, cell: Rect, content: &str, font: &Font) {
    paint_cell_border(canvas, cell);

    let available = (cell.width - CELL_PADDING_LEFT).max(0.0);
    let max_chars = (available / font.glyph_width()).floor() as usize;

    canvas.save_state();
    canvas.set_fill_color(Color::BLACK);
    canvas.text(
        &truncate(content, max_chars),
        cell.left() + CELL_PADDING_LEFT,
        cell.bottom() - CELL_PADDING_BOTTOM - font.size * 0.25,
        TextAlign::Left,
        font,
    );
    canvas.restore_state();
}

fn paint_cell_border(canvas: &mut dyn Canvas, cell: Rect) {
    canvas.save_state();
    canvas.set_line_width(CELL_BORDER_WIDTH);
    canvas.set_stroke_color(CELL_BORDER_COLOR);
    canvas.rectangle(cell, Paint::Stroke);
    canvas.restore_state();
}

/// Date cell text, in UTC
pub fn format_instant(instant: Instant) -> String {
    instant.format(DATE_FORMAT).to_string()
}

/// Truncate a string to a maximum number of characters with ellipsis
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

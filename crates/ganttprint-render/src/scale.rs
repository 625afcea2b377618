//! Time-axis grid painting
//!
//! Every timeline cell, header and data rows alike, gets the same gridlines
//! and weekend shading so the grid runs continuously down the page. Only the
//! header row carries axis labels.

use crate::context::RenderContext;
use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use ganttprint_core::{Canvas, Color, Font, Instant, Paint, Rect, ScaleLevel, TextAlign};

/// Font of the axis labels in the header row
pub const LABEL_FONT: Font = Font::new("Helvetica", 6.0);

const WEEKEND_FILL: Color = Color::LIGHT_GRAY;
const GRID_COLOR: Color = Color::BLACK;
const LABEL_INSET: f64 = 2.0;
const LABEL_BASELINE_OFFSET: f64 = 5.0;
/// Shaded span of a weekend day: one day less a second
const WEEKEND_SPAN_MS: f64 = 86_399_000.0;

/// The single gridline style drawn at a scale level
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gridline {
    Day,
    Week,
    Month,
}

impl Gridline {
    pub fn for_level(level: ScaleLevel) -> Self {
        match level {
            ScaleLevel::Daily => Gridline::Day,
            ScaleLevel::Weekly => Gridline::Week,
            ScaleLevel::Monthly => Gridline::Month,
        }
    }

    /// Whether a line is drawn at the start of `date`
    pub fn marks(self, date: NaiveDate) -> bool {
        match self {
            Gridline::Day => true,
            Gridline::Week => date.weekday() == Weekday::Mon,
            Gridline::Month => date.day() == 1,
        }
    }

    pub fn line_width(self) -> f64 {
        match self {
            Gridline::Day => 0.2,
            Gridline::Week | Gridline::Month => 0.5,
        }
    }

    /// `chrono` format of the header label next to each line
    pub fn label_format(self) -> &'static str {
        match self {
            Gridline::Day => "%a %-d %b",
            Gridline::Week => "%-d %b",
            Gridline::Month => "%b",
        }
    }
}

/// Paints gridlines, weekend shading and header labels into timeline cells
#[derive(Clone, Copy, Debug)]
pub struct ScaleRenderer<'a> {
    ctx: &'a RenderContext,
    gridline: Gridline,
    shade_weekends: bool,
}

impl<'a> ScaleRenderer<'a> {
    pub fn new(ctx: &'a RenderContext) -> Self {
        let level = ctx.scale_level();
        Self {
            ctx,
            gridline: Gridline::for_level(level),
            shade_weekends: level != ScaleLevel::Monthly,
        }
    }

    pub fn gridline(&self) -> Gridline {
        self.gridline
    }

    /// Paint the grid for one timeline cell
    ///
    /// Walks every calendar day of the range. Weekends are shaded unless the
    /// scale is monthly; labels are drawn only when `is_header_row` is set,
    /// and a label that would run into the previous one is skipped.
    pub fn paint_scale(&self, canvas: &mut dyn Canvas, cell: Rect, is_header_row: bool) {
        let range = self.ctx.range();
        let last_day = range.last().date_naive();
        let mut label_clear_from = f64::NEG_INFINITY;

        canvas.save_state();
        for day in range.first().date_naive().iter_days() {
            if day > last_day {
                break;
            }

            let x = self.ctx.mapper().to_x(start_of_day(day));

            if self.shade_weekends && is_weekend(day) {
                self.paint_weekend(canvas, cell, x);
            }

            if self.gridline.marks(day) {
                self.paint_vertical_line(canvas, cell, x);
                if is_header_row {
                    let label_x = cell.left() + x + LABEL_INSET;
                    if label_x >= label_clear_from {
                        let label = day.format(self.gridline.label_format()).to_string();
                        self.paint_label(canvas, cell, &label, label_x);
                        label_clear_from = label_x + LABEL_FONT.text_width(&label) + LABEL_INSET;
                    }
                }
            }
        }
        canvas.restore_state();
    }

    fn paint_weekend(&self, canvas: &mut dyn Canvas, cell: Rect, x: f64) {
        let width = self.ctx.mapper().scaling_factor() * WEEKEND_SPAN_MS;

        canvas.set_fill_color(WEEKEND_FILL);
        canvas.rectangle(
            Rect::new(cell.left() + x, cell.top(), width, cell.height),
            Paint::Fill,
        );
    }

    fn paint_vertical_line(&self, canvas: &mut dyn Canvas, cell: Rect, x: f64) {
        let x = cell.left() + x;
        canvas.set_line_width(self.gridline.line_width());
        canvas.set_stroke_color(GRID_COLOR);
        canvas.move_to(x, cell.bottom());
        canvas.line_to(x, cell.top());
        canvas.stroke();
    }

    fn paint_label(&self, canvas: &mut dyn Canvas, cell: Rect, label: &str, x: f64) {
        canvas.set_fill_color(GRID_COLOR);
        canvas.text(
            label,
            x,
            cell.bottom() - LABEL_BASELINE_OFFSET,
            TextAlign::Left,
            &LABEL_FONT,
        );
    }
}

fn start_of_day(day: NaiveDate) -> Instant {
    day.and_time(NaiveTime::MIN).and_utc()
}

fn is_weekend(day: NaiveDate) -> bool {
    matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::RecordingCanvas;
    use crate::recording::DrawOp;
    use chrono::{Duration, TimeZone, Utc};
    use ganttprint_core::{DateRange, PageSize};
    use pretty_assertions::assert_eq;

    const CELL: Rect = Rect::new(546.0, 25.0, 639.0, 19.0);

    fn context(first: (i32, u32, u32), weeks: i64, level: ScaleLevel) -> RenderContext {
        context_on(PageSize::A3, first, weeks, level)
    }

    fn context_on(
        page_size: PageSize,
        first: (i32, u32, u32),
        weeks: i64,
        level: ScaleLevel,
    ) -> RenderContext {
        let first = Utc
            .with_ymd_and_hms(first.0, first.1, first.2, 0, 0, 0)
            .unwrap();
        let last = first + Duration::weeks(weeks) - Duration::milliseconds(1);
        let range = DateRange::new(first, last).unwrap();
        RenderContext::new(range, level, page_size)
    }

    fn paint(ctx: &RenderContext, header: bool) -> RecordingCanvas {
        let mut canvas = RecordingCanvas::new();
        ScaleRenderer::new(ctx).paint_scale(&mut canvas, CELL, header);
        canvas
    }

    #[test]
    fn gridline_styles_follow_scale_level() {
        assert_eq!(Gridline::for_level(ScaleLevel::Daily), Gridline::Day);
        assert_eq!(Gridline::for_level(ScaleLevel::Weekly), Gridline::Week);
        assert_eq!(Gridline::for_level(ScaleLevel::Monthly), Gridline::Month);
    }

    #[test]
    fn daily_scale_draws_one_line_per_day() {
        // Two weeks starting Monday 2025-01-06
        let ctx = context((2025, 1, 6), 2, ScaleLevel::Daily);
        let canvas = paint(&ctx, false);

        let lines = canvas.lines();
        assert_eq!(lines.len(), 14);
        assert!(lines.iter().all(|l| l.4 == 0.2));
        // First line sits on the left edge of the cell and spans its height
        assert_eq!(lines[0], (CELL.left(), CELL.bottom(), CELL.left(), CELL.top(), 0.2));
    }

    #[test]
    fn weekly_scale_draws_lines_on_mondays_only() {
        let ctx = context((2025, 1, 6), 8, ScaleLevel::Weekly);
        let canvas = paint(&ctx, false);

        let lines = canvas.lines();
        assert_eq!(lines.len(), 8);
        assert!(lines.iter().all(|l| l.4 == 0.5));
    }

    #[test]
    fn monthly_scale_draws_lines_on_first_of_month() {
        // 2024-12-30 .. 2026-01-04: first days of Jan 2025 through Jan 2026
        let ctx = context((2024, 12, 30), 53, ScaleLevel::Monthly);
        let canvas = paint(&ctx, false);
        assert_eq!(canvas.lines().len(), 13);
    }

    #[test]
    fn weekends_shaded_at_daily_and_weekly() {
        for level in [ScaleLevel::Daily, ScaleLevel::Weekly] {
            let ctx = context((2025, 1, 6), 3, level);
            let canvas = paint(&ctx, false);
            let shaded = canvas.rectangles_filled_with(Color::LIGHT_GRAY);

            // Three weekends, Saturday and Sunday each
            assert_eq!(shaded.len(), 6, "{:?}", level);

            let mapper = ctx.mapper();
            let saturday = Utc.with_ymd_and_hms(2025, 1, 11, 0, 0, 0).unwrap();
            let sunday = Utc.with_ymd_and_hms(2025, 1, 12, 0, 0, 0).unwrap();
            assert_eq!(shaded[0].x, CELL.left() + mapper.to_x(saturday));
            assert_eq!(shaded[1].x, CELL.left() + mapper.to_x(sunday));
            assert_eq!(shaded[0].height, CELL.height);
        }
    }

    #[test]
    fn weekends_not_shaded_at_monthly() {
        let ctx = context((2024, 12, 30), 53, ScaleLevel::Monthly);
        let canvas = paint(&ctx, false);
        assert!(canvas.rectangles_filled_with(Color::LIGHT_GRAY).is_empty());
    }

    #[test]
    fn data_rows_have_no_labels() {
        let ctx = context((2025, 1, 6), 2, ScaleLevel::Daily);
        assert!(paint(&ctx, false).texts().is_empty());
    }

    #[test]
    fn header_labels_use_level_format() {
        let daily = paint(&context((2025, 1, 6), 2, ScaleLevel::Daily), true);
        assert_eq!(daily.texts().len(), 14);
        assert_eq!(daily.texts()[0], "Mon 6 Jan");

        let weekly = paint(&context((2025, 1, 6), 8, ScaleLevel::Weekly), true);
        assert_eq!(weekly.texts()[..3].to_vec(), vec!["6 Jan", "13 Jan", "20 Jan"]);

        let monthly = paint(&context((2024, 12, 30), 53, ScaleLevel::Monthly), true);
        assert_eq!(monthly.texts()[..3].to_vec(), vec!["Jan", "Feb", "Mar"]);
    }

    #[test]
    fn crowded_daily_labels_are_thinned_without_overlap() {
        // Four weeks on A4: about 10pt per day, narrower than a day label
        let ctx = context_on(PageSize::A4, (2025, 1, 6), 4, ScaleLevel::Daily);
        let canvas = paint(&ctx, true);

        let labels: Vec<(String, f64)> = canvas
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { content, x, .. } => Some((content.clone(), *x)),
                _ => None,
            })
            .collect();

        assert!(!labels.is_empty());
        assert!(labels.len() < 28);
        assert_eq!(labels[0].0, "Mon 6 Jan");
        for pair in labels.windows(2) {
            let (previous, previous_x) = &pair[0];
            let (_, x) = &pair[1];
            assert!(
                *x >= previous_x + LABEL_FONT.text_width(previous),
                "{:?} overlaps the next label",
                previous
            );
        }

        // Gridlines are not thinned with the labels
        assert_eq!(canvas.lines().len(), 28);
    }

    #[test]
    fn weekend_shade_spans_one_day() {
        let ctx = context((2025, 1, 6), 2, ScaleLevel::Daily);
        let shaded = paint(&ctx, false).rectangles_filled_with(Color::LIGHT_GRAY);

        let day = ctx.mapper().scaling_factor() * Duration::days(1).num_milliseconds() as f64;
        assert!(shaded[0].width < day);
        assert!(shaded[0].width > day * 0.99);
    }

    #[test]
    fn header_and_data_rows_share_gridlines() {
        let ctx = context((2025, 1, 6), 8, ScaleLevel::Weekly);
        let header = paint(&ctx, true);
        let data = paint(&ctx, false);

        assert_eq!(header.lines(), data.lines());
        assert_eq!(
            header.rectangles_filled_with(Color::LIGHT_GRAY),
            data.rectangles_filled_with(Color::LIGHT_GRAY)
        );
    }

    #[test]
    fn painting_restores_canvas_state() {
        let ctx = context((2025, 1, 6), 2, ScaleLevel::Daily);
        assert!(paint(&ctx, true).is_balanced());
    }
}

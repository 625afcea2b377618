//! Duration bars

use crate::mapper::CoordinateMapper;
use ganttprint_core::{Canvas, Color, Paint, Rect, ScheduleItem};

const BAR_STROKE: Color = Color::BLUE;
const BAR_FILL: Color = Color::from_hex(0xaaaaff);
const SHADOW_COLOR: Color = Color::GRAY;
const SHADOW_OFFSET: (f64, f64) = (2.0, 1.0);
const LINE_WIDTH: f64 = 0.5;
const CORNER_RADIUS: f64 = 1.0;

/// Paints one item's bar, with a drop shadow, inside a timeline cell
#[derive(Clone, Copy, Debug)]
pub struct BarRenderer<'a> {
    mapper: &'a CoordinateMapper,
}

impl<'a> BarRenderer<'a> {
    pub fn new(mapper: &'a CoordinateMapper) -> Self {
        Self { mapper }
    }

    /// Bar geometry for `item`: the middle third of the cell, horizontally
    /// from start to finish. A finish before the start yields a negative width.
    pub fn bar_rect(&self, cell: Rect, item: &ScheduleItem) -> Rect {
        let start = self.mapper.to_x(item.start());
        let finish = self.mapper.to_x(item.finish());
        Rect::new(
            cell.left() + start,
            cell.top() + cell.height / 3.0,
            finish - start,
            cell.height / 3.0,
        )
    }

    pub fn paint_bar(&self, canvas: &mut dyn Canvas, cell: Rect, item: &ScheduleItem) {
        let bar = self.bar_rect(cell, item);

        canvas.save_state();
        canvas.set_line_width(LINE_WIDTH);

        // shadow
        canvas.set_stroke_color(SHADOW_COLOR);
        canvas.set_fill_color(SHADOW_COLOR);
        canvas.round_rectangle(
            bar.translate(SHADOW_OFFSET.0, SHADOW_OFFSET.1),
            CORNER_RADIUS,
            Paint::FillStroke,
        );

        // bar
        canvas.set_stroke_color(BAR_STROKE);
        canvas.set_fill_color(BAR_FILL);
        canvas.round_rectangle(bar, CORNER_RADIUS, Paint::FillStroke);

        canvas.restore_state();
    }
}

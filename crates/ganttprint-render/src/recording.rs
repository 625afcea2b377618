//! A canvas that records primitives instead of drawing them, for tests

use ganttprint_core::{Canvas, Color, Font, Paint, Rect, TextAlign};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Rectangle {
        rect: Rect,
        paint: Paint,
        fill: Color,
        stroke: Color,
    },
    RoundRectangle {
        rect: Rect,
        radius: f64,
        fill: Color,
        stroke: Color,
    },
    Line {
        from: (f64, f64),
        to: (f64, f64),
        width: f64,
    },
    Text {
        content: String,
        x: f64,
        y: f64,
        size: f64,
    },
}

#[derive(Clone, Copy, Debug)]
struct State {
    stroke: Color,
    fill: Color,
    line_width: f64,
}

#[derive(Debug)]
pub struct RecordingCanvas {
    pub ops: Vec<DrawOp>,
    state: State,
    saved: Vec<State>,
    cursor: (f64, f64),
    segments: Vec<((f64, f64), (f64, f64))>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            state: State {
                stroke: Color::BLACK,
                fill: Color::BLACK,
                line_width: 1.0,
            },
            saved: Vec::new(),
            cursor: (0.0, 0.0),
            segments: Vec::new(),
        }
    }

    pub fn rectangles_filled_with(&self, color: Color) -> Vec<Rect> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Rectangle { rect, fill, paint: Paint::Fill, .. } if *fill == color => {
                    Some(*rect)
                }
                _ => None,
            })
            .collect()
    }

    pub fn lines(&self) -> Vec<(f64, f64, f64, f64, f64)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Line { from, to, width } => Some((from.0, from.1, to.0, to.1, *width)),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<String> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { content, .. } => Some(content.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn is_balanced(&self) -> bool {
        self.saved.is_empty()
    }
}

impl Canvas for RecordingCanvas {
    fn save_state(&mut self) {
        self.saved.push(self.state);
    }

    fn restore_state(&mut self) {
        if let Some(state) = self.saved.pop() {
            self.state = state;
        }
    }

    fn set_line_width(&mut self, width: f64) {
        self.state.line_width = width;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.state.stroke = color;
    }

    fn set_fill_color(&mut self, color: Color) {
        self.state.fill = color;
    }

    fn rectangle(&mut self, rect: Rect, paint: Paint) {
        self.ops.push(DrawOp::Rectangle {
            rect,
            paint,
            fill: self.state.fill,
            stroke: self.state.stroke,
        });
    }

    fn round_rectangle(&mut self, rect: Rect, radius: f64, _paint: Paint) {
        self.ops.push(DrawOp::RoundRectangle {
            rect,
            radius,
            fill: self.state.fill,
            stroke: self.state.stroke,
        });
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.cursor = (x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.segments.push((self.cursor, (x, y)));
        self.cursor = (x, y);
    }

    fn stroke(&mut self) {
        let width = self.state.line_width;
        for (from, to) in self.segments.drain(..) {
            self.ops.push(DrawOp::Line { from, to, width });
        }
    }

    fn text(&mut self, content: &str, x: f64, y: f64, _align: TextAlign, font: &Font) {
        self.ops.push(DrawOp::Text {
            content: content.to_string(),
            x,
            y,
            size: font.size,
        });
    }
}

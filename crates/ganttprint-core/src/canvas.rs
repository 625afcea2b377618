//! Drawing surface abstraction
//!
//! Renderers paint through [`Canvas`], a small set of stateful primitives
//! (colours, line width, rectangles, paths, text). Coordinates are in points
//! with the origin at the top-left corner of the page and `y` growing down.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An RGB colour
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::from_rgb(0, 0, 0);
    pub const WHITE: Color = Color::from_rgb(255, 255, 255);
    pub const GRAY: Color = Color::from_rgb(128, 128, 128);
    pub const LIGHT_GRAY: Color = Color::from_rgb(192, 192, 192);
    pub const BLUE: Color = Color::from_rgb(0, 0, 255);

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a colour from a packed `0xRRGGBB` value
    pub const fn from_hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
        }
    }

    /// CSS hex notation, e.g. `#aaaaff`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// An axis-aligned rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Shrink by `amount` on every side
    pub fn inset(&self, amount: f64) -> Self {
        Self::new(
            self.x + amount,
            self.y + amount,
            self.width - amount * 2.0,
            self.height - amount * 2.0,
        )
    }

    /// Same area with non-negative width and height
    pub fn normalized(&self) -> Self {
        let (x, width) = if self.width < 0.0 {
            (self.x + self.width, -self.width)
        } else {
            (self.x, self.width)
        };
        let (y, height) = if self.height < 0.0 {
            (self.y + self.height, -self.height)
        } else {
            (self.y, self.height)
        };
        Self::new(x, y, width, height)
    }
}

/// How a closed shape is painted
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Paint {
    Fill,
    Stroke,
    FillStroke,
}

/// Horizontal anchoring of a text run at its `x` position
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Rough Helvetica advance width as a fraction of the font size
const AVERAGE_GLYPH_WIDTH: f64 = 0.5;

/// Font selection for a text run
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Font {
    pub family: &'static str,
    pub size: f64,
    pub bold: bool,
}

impl Font {
    pub const fn new(family: &'static str, size: f64) -> Self {
        Self {
            family,
            size,
            bold: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Average advance of one glyph
    pub fn glyph_width(&self) -> f64 {
        self.size * AVERAGE_GLYPH_WIDTH
    }

    /// Approximate rendered width of `text`
    pub fn text_width(&self, text: &str) -> f64 {
        text.chars().count() as f64 * self.glyph_width()
    }
}

/// Stateful drawing primitives offered by a page
///
/// Colour and line width persist until changed; `save_state` and
/// `restore_state` bracket temporary changes. Paths are built with
/// `move_to`/`line_to` and painted by `stroke`.
pub trait Canvas {
    fn save_state(&mut self);

    fn restore_state(&mut self);

    fn set_line_width(&mut self, width: f64);

    fn set_stroke_color(&mut self, color: Color);

    fn set_fill_color(&mut self, color: Color);

    fn rectangle(&mut self, rect: Rect, paint: Paint);

    fn round_rectangle(&mut self, rect: Rect, radius: f64, paint: Paint);

    fn move_to(&mut self, x: f64, y: f64);

    fn line_to(&mut self, x: f64, y: f64);

    fn stroke(&mut self);

    /// Draw a single line of text with its baseline at `y`, in the fill colour
    fn text(&mut self, content: &str, x: f64, y: f64, align: TextAlign, font: &Font);
}

/// Page lifecycle hook, invoked by a document each time it opens a page
pub trait PageEvents {
    fn on_start_page(&self, canvas: &mut dyn Canvas, page: Rect);
}

//! Paginated SVG document
//!
//! The page container the layout engine draws into. Pages are stacked
//! vertically in a single SVG file, each one a `<g class="page">` group.
//! The document keeps a vertical cursor for flowing rows and paragraphs and
//! runs the registered [`PageEvents`] every time a page is opened.

use ganttprint_core::{
    Canvas, Color, Font, PageEvents, PageSize, Paint, Rect, RenderError, TextAlign,
};
use svg::node::element::{Element, Group, Path, Rectangle, Text};
use svg::{Document, Node};
use tracing::trace;

#[derive(Clone, Copy, Debug)]
struct GraphicsState {
    stroke: Color,
    fill: Color,
    line_width: f64,
}

impl Default for GraphicsState {
    fn default() -> Self {
        Self {
            stroke: Color::BLACK,
            fill: Color::BLACK,
            line_width: 1.0,
        }
    }
}

/// One page of an [`SvgDocument`]
#[derive(Debug)]
pub struct SvgCanvas {
    group: Group,
    state: GraphicsState,
    saved: Vec<GraphicsState>,
    path: String,
}

impl Default for SvgCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgCanvas {
    pub fn new() -> Self {
        Self {
            group: Group::new(),
            state: GraphicsState::default(),
            saved: Vec::new(),
            path: String::new(),
        }
    }

    fn push<T>(&mut self, node: T)
    where
        T: Into<Box<dyn Node>>,
    {
        let group = std::mem::replace(&mut self.group, Group::new());
        self.group = group.add(node);
    }

    fn styled_rectangle(&self, rect: Rect, paint: Paint) -> Rectangle {
        let rect = rect.normalized();
        let element = Rectangle::new()
            .set("x", rect.x)
            .set("y", rect.y)
            .set("width", rect.width)
            .set("height", rect.height);

        match paint {
            Paint::Fill => element
                .set("fill", self.state.fill.to_hex())
                .set("stroke", "none"),
            Paint::Stroke => element
                .set("fill", "none")
                .set("stroke", self.state.stroke.to_hex())
                .set("stroke-width", self.state.line_width),
            Paint::FillStroke => element
                .set("fill", self.state.fill.to_hex())
                .set("stroke", self.state.stroke.to_hex())
                .set("stroke-width", self.state.line_width),
        }
    }

    pub fn into_group(self) -> Group {
        self.group
    }
}

impl Canvas for SvgCanvas {
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
        let element = self.styled_rectangle(rect, paint);
        self.push(element);
    }

    fn round_rectangle(&mut self, rect: Rect, radius: f64, paint: Paint) {
        let element = self
            .styled_rectangle(rect, paint)
            .set("rx", radius)
            .set("ry", radius);
        self.push(element);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.path.push_str(&format!("M{},{} ", x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.path.push_str(&format!("L{},{} ", x, y));
    }

    fn stroke(&mut self) {
        if self.path.is_empty() {
            return;
        }
        let data = std::mem::take(&mut self.path);
        let element = Path::new()
            .set("d", data.trim_end())
            .set("fill", "none")
            .set("stroke", self.state.stroke.to_hex())
            .set("stroke-width", self.state.line_width);
        self.push(element);
    }

    fn text(&mut self, content: &str, x: f64, y: f64, align: TextAlign, font: &Font) {
        let anchor = match align {
            TextAlign::Left => "start",
            TextAlign::Center => "middle",
            TextAlign::Right => "end",
        };
        let element = Text::new(content)
            .set("x", x)
            .set("y", y)
            .set("font-family", font.family)
            .set("font-size", font.size)
            .set("font-weight", if font.bold { "bold" } else { "normal" })
            .set("fill", self.state.fill.to_hex())
            .set("text-anchor", anchor)
            .set("xml:space", "preserve");
        self.push(element);
    }
}

/// A fixed-size, paginated drawing document serialized as SVG
pub struct SvgDocument {
    page_size: PageSize,
    margin: f64,
    title: String,
    author: String,
    pages: Vec<SvgCanvas>,
    current: Option<SvgCanvas>,
    cursor: f64,
    page_events: Vec<Box<dyn PageEvents>>,
}

impl SvgDocument {
    pub fn new(page_size: PageSize, margin: f64) -> Self {
        Self {
            page_size,
            margin,
            title: String::new(),
            author: String::new(),
            pages: Vec::new(),
            current: None,
            cursor: margin,
            page_events: Vec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Register a hook run at the start of every page
    pub fn with_page_events(mut self, events: impl PageEvents + 'static) -> Self {
        self.page_events.push(Box::new(events));
        self
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Open the first page
    pub fn open(&mut self) {
        self.canvas();
    }

    /// Canvas of the current page, opening one if none is open yet
    pub fn canvas(&mut self) -> &mut SvgCanvas {
        let page_size = self.page_size;
        let events = &self.page_events;
        self.current
            .get_or_insert_with(|| start_page(page_size, events))
    }

    /// Close the current page and open a fresh one
    pub fn new_page(&mut self) {
        if let Some(page) = self.current.take() {
            self.pages.push(page);
        }
        self.current = Some(start_page(self.page_size, &self.page_events));
        self.cursor = self.margin;
        trace!(page = self.page_count(), "started page");
    }

    /// Pages opened so far, including the current one
    pub fn page_count(&self) -> usize {
        self.pages.len() + usize::from(self.current.is_some())
    }

    /// The page area inside the margins
    pub fn content_area(&self) -> Rect {
        self.page_size.bounds().inset(self.margin)
    }

    /// Vertical space left below the cursor on the current page
    pub fn remaining_height(&self) -> f64 {
        self.content_area().bottom() - self.cursor
    }

    /// Claim a full-width band of `height` at the cursor and advance past it
    pub fn allocate(&mut self, height: f64) -> Rect {
        self.canvas();
        let content = self.content_area();
        let band = Rect::new(content.left(), self.cursor, content.width, height);
        self.cursor += height;
        band
    }

    /// Add a line of text, `leading` below the previous content
    pub fn add_paragraph(&mut self, text: &str, font: &Font, leading: f64) {
        if self.current.is_some() && self.remaining_height() < leading {
            self.new_page();
        }
        let band = self.allocate(leading);
        let canvas = self.canvas();
        canvas.save_state();
        canvas.set_fill_color(Color::BLACK);
        canvas.text(text, band.left(), band.bottom(), TextAlign::Left, font);
        canvas.restore_state();
    }

    /// Finish the document and serialize every page
    pub fn close(mut self) -> Result<Vec<u8>, RenderError> {
        self.open();
        let mut pages = self.pages;
        pages.extend(self.current);

        let width = self.page_size.width();
        let page_height = self.page_size.height();
        let height = page_height * pages.len() as f64;

        let mut document = Document::new()
            .set("width", width)
            .set("height", height)
            .set("viewBox", (0, 0, width, height))
            .set("xmlns", "http://www.w3.org/2000/svg");

        if !self.title.is_empty() {
            let mut title = Element::new("title");
            title.append(svg::node::Text::new(self.title.as_str()));
            document = document.add(title);
        }
        if !self.author.is_empty() {
            let mut desc = Element::new("desc");
            desc.append(svg::node::Text::new(format!("Author: {}", self.author)));
            document = document.add(desc);
        }

        for (index, page) in pages.into_iter().enumerate() {
            let offset = page_height * index as f64;
            let group = page
                .into_group()
                .set("class", "page")
                .set("transform", format!("translate(0,{})", offset));
            document = document.add(group);
        }

        let mut output = Vec::new();
        svg::write(&mut output, &document)?;
        Ok(output)
    }
}

fn start_page(page_size: PageSize, events: &[Box<dyn PageEvents>]) -> SvgCanvas {
    let mut canvas = SvgCanvas::new();
    for hook in events {
        hook.on_start_page(&mut canvas, page_size.bounds());
    }
    canvas
}

//! Land pattern document.
//!
//! A [`Pattern`] accumulates pads (keyed by name, insertion ordered) and
//! drawing primitives for one footprint. Drawing goes through a [`Pen`],
//! a short-lived builder that carries the current layer and line width:
//!
//! ```
//! use ipc_landgen::config::Settings;
//! use ipc_landgen::pattern::{Layer, Pattern};
//!
//! let settings = Settings::default();
//! let mut pattern = Pattern::new("EXAMPLE", &settings);
//! pattern
//!     .layer(Layer::TopAssembly)
//!     .rectangle(-0.5, -0.25, 0.5, 0.25)
//!     .line(-0.5, 0.0, 0.5, 0.0);
//! assert_eq!(pattern.shapes().len(), 2);
//! ```
//!
//! Nothing about the layer or width survives the pen, so each drawing group
//! states its own.

pub mod geometry;
mod primitives;

pub use geometry::{Point, Rect};
pub use primitives::{Layer, Pad, PadShape, Shape, ShapeKind, Text, TextKind};

use indexmap::IndexMap;

use crate::config::Settings;
use geometry::clip_segment;

/// Silkscreen pieces shorter than this are dropped after clipping.
pub const MIN_SILK_LENGTH: f64 = 0.1;

/// A land pattern under construction.
#[derive(Debug, Clone)]
pub struct Pattern<'a> {
    name: String,
    description: Option<String>,
    tags: Option<String>,
    settings: &'a Settings,
    pads: IndexMap<String, Pad>,
    shapes: Vec<Shape>,
    texts: Vec<Text>,
    solder_mask_margin: Option<f64>,
}

impl<'a> Pattern<'a> {
    /// Creates an empty pattern.
    #[must_use]
    pub fn new(name: impl Into<String>, settings: &'a Settings) -> Self {
        Self {
            name: name.into(),
            description: None,
            tags: None,
            settings,
            pads: IndexMap::new(),
            shapes: Vec::new(),
            texts: Vec::new(),
            solder_mask_margin: None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    #[must_use]
    pub fn tags(&self) -> Option<&str> {
        self.tags.as_deref()
    }

    pub fn set_tags(&mut self, tags: impl Into<String>) {
        self.tags = Some(tags.into());
    }

    #[must_use]
    pub const fn settings(&self) -> &'a Settings {
        self.settings
    }

    /// Decimal places for serialized coordinates.
    #[must_use]
    pub const fn decimals(&self) -> u32 {
        self.settings.decimals
    }

    /// Pattern-level solder mask expansion, if any.
    #[must_use]
    pub const fn solder_mask_margin(&self) -> Option<f64> {
        self.solder_mask_margin
    }

    pub fn set_solder_mask_margin(&mut self, margin: f64) {
        self.solder_mask_margin = Some(margin);
    }

    /// Adds a pad. A pad already registered under `name` is replaced in
    /// place, keeping its position in the iteration order.
    pub fn pad(&mut self, name: impl ToString, pad: Pad) -> &mut Self {
        self.pads.insert(name.to_string(), pad);
        self
    }

    /// Iterates pads in insertion order.
    pub fn pads(&self) -> impl Iterator<Item = (&str, &Pad)> {
        self.pads.iter().map(|(name, pad)| (name.as_str(), pad))
    }

    #[must_use]
    pub fn pad_count(&self) -> usize {
        self.pads.len()
    }

    #[must_use]
    pub fn get_pad(&self, name: &str) -> Option<&Pad> {
        self.pads.get(name)
    }

    /// The first pad placed (pin 1 for every builder).
    #[must_use]
    pub fn first_pad(&self) -> Option<&Pad> {
        self.pads.values().next()
    }

    /// Bounding box of all pads, or `None` for an empty pattern.
    #[must_use]
    pub fn pad_extents(&self) -> Option<Rect> {
        self.pads
            .values()
            .map(Pad::rect)
            .reduce(|acc, r| acc.union(&r))
    }

    /// Pad outlines grown by `margin`, for clipping artwork away from copper.
    #[must_use]
    pub fn keepout(&self, margin: f64) -> Vec<Rect> {
        self.pads.values().map(|p| p.rect().expand(margin)).collect()
    }

    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    #[must_use]
    pub fn texts(&self) -> &[Text] {
        &self.texts
    }

    /// Opens a pen on `layer` with the layer's configured line width.
    pub fn layer(&mut self, layer: Layer) -> Pen<'_, 'a> {
        let widths = &self.settings.line_width;
        let line_width = match layer {
            Layer::TopSilkscreen | Layer::BottomSilkscreen => widths.silkscreen,
            Layer::TopAssembly | Layer::BottomAssembly => widths.assembly,
            Layer::TopCourtyard | Layer::BottomCourtyard => widths.courtyard,
            _ => widths.default,
        };
        Pen {
            pattern: self,
            layer,
            line_width,
            path: None,
        }
    }
}

/// Scoped drawing cursor holding a layer and a line width.
#[derive(Debug)]
pub struct Pen<'p, 'a> {
    pattern: &'p mut Pattern<'a>,
    layer: Layer,
    line_width: f64,
    /// Index of the open path in the pattern's shapes.
    path: Option<usize>,
}

impl Pen<'_, '_> {
    /// Sets the line width for the following primitives.
    #[must_use]
    pub fn line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self.path = None;
        self
    }

    fn push(&mut self, kind: ShapeKind) -> &mut Self {
        self.path = None;
        self.pattern.shapes.push(Shape {
            layer: self.layer,
            line_width: self.line_width,
            kind,
        });
        self
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> &mut Self {
        self.push(ShapeKind::Line {
            start: Point::new(x1, y1),
            end: Point::new(x2, y2),
        })
    }

    pub fn rectangle(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> &mut Self {
        let r = Rect::from_corners(x1, y1, x2, y2);
        self.push(ShapeKind::Rectangle {
            min: Point::new(r.min_x, r.min_y),
            max: Point::new(r.max_x, r.max_y),
            filled: false,
        })
    }

    pub fn filled_rectangle(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> &mut Self {
        let r = Rect::from_corners(x1, y1, x2, y2);
        self.push(ShapeKind::Rectangle {
            min: Point::new(r.min_x, r.min_y),
            max: Point::new(r.max_x, r.max_y),
            filled: true,
        })
    }

    pub fn circle(&mut self, x: f64, y: f64, radius: f64) -> &mut Self {
        self.push(ShapeKind::Circle {
            center: Point::new(x, y),
            radius,
        })
    }

    /// Starts a new open path at `(x, y)`.
    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.push(ShapeKind::Path {
            points: vec![Point::new(x, y)],
        });
        self.path = Some(self.pattern.shapes.len() - 1);
        self
    }

    /// Extends the open path; starts one if none is open.
    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        let open = self.path.and_then(|i| self.pattern.shapes.get_mut(i));
        match open {
            Some(Shape {
                kind: ShapeKind::Path { points },
                ..
            }) => {
                points.push(Point::new(x, y));
                self
            }
            _ => self.move_to(x, y),
        }
    }

    /// Draws a line with every part inside `keepout` removed.
    pub fn clipped_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, keepout: &[Rect]) -> &mut Self {
        for (a, b) in clip_segment(Point::new(x1, y1), Point::new(x2, y2), keepout, MIN_SILK_LENGTH) {
            self.line(a.x, a.y, b.x, b.y);
        }
        self
    }

    /// Draws a rectangle outline as four clipped lines.
    pub fn clipped_rectangle(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, keepout: &[Rect]) -> &mut Self {
        self.clipped_polyline(&[(x1, y1), (x2, y1), (x2, y2), (x1, y2), (x1, y1)], keepout)
    }

    /// Draws a polyline segment by segment with `keepout` removed.
    pub fn clipped_polyline(&mut self, points: &[(f64, f64)], keepout: &[Rect]) -> &mut Self {
        for pair in points.windows(2) {
            let ((x1, y1), (x2, y2)) = (pair[0], pair[1]);
            self.clipped_line(x1, y1, x2, y2, keepout);
        }
        self
    }

    /// Places a text attribute at `(x, y)`.
    pub fn text(&mut self, kind: TextKind, x: f64, y: f64) -> &mut Self {
        let fonts = &self.pattern.settings.font_size;
        let font_size = match kind {
            TextKind::Reference => fonts.ref_des,
            TextKind::Value => fonts.value,
            TextKind::User(_) => fonts.default,
        };
        self.path = None;
        self.pattern.texts.push(Text {
            kind,
            position: Point::new(x, y),
            layer: self.layer,
            font_size,
            line_width: self.line_width,
        });
        self
    }
}

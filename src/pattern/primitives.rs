//! Pads, drawing shapes and text attributes.

use std::fmt;

use super::geometry::{Point, Rect};

/// Board layers a pattern draws on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    TopCopper,
    TopMask,
    TopPaste,
    TopSilkscreen,
    TopAssembly,
    TopCourtyard,
    BottomCopper,
    BottomMask,
    BottomPaste,
    BottomSilkscreen,
    BottomAssembly,
    BottomCourtyard,
}

impl Layer {
    /// Layers of a top-side SMD pad.
    pub const SMD: [Self; 3] = [Self::TopCopper, Self::TopPaste, Self::TopMask];

    /// Returns the KiCad layer name.
    #[must_use]
    pub const fn kicad_name(&self) -> &'static str {
        match self {
            Self::TopCopper => "F.Cu",
            Self::TopMask => "F.Mask",
            Self::TopPaste => "F.Paste",
            Self::TopSilkscreen => "F.SilkS",
            Self::TopAssembly => "F.Fab",
            Self::TopCourtyard => "F.CrtYd",
            Self::BottomCopper => "B.Cu",
            Self::BottomMask => "B.Mask",
            Self::BottomPaste => "B.Paste",
            Self::BottomSilkscreen => "B.SilkS",
            Self::BottomAssembly => "B.Fab",
            Self::BottomCourtyard => "B.CrtYd",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kicad_name())
    }
}

/// Pad outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PadShape {
    Rectangle,
    /// Rounded rectangle; `ratio` is corner radius over the smaller side.
    RoundedRectangle { ratio: f64 },
    Circle,
}

/// A surface mount pad.
#[derive(Debug, Clone, PartialEq)]
pub struct Pad {
    pub shape: PadShape,
    /// Centre X (mm).
    pub x: f64,
    /// Centre Y (mm).
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub layers: Vec<Layer>,
}

impl Pad {
    /// Creates a rectangular SMD pad.
    #[must_use]
    pub fn rectangle(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            shape: PadShape::Rectangle,
            x,
            y,
            width,
            height,
            layers: Layer::SMD.to_vec(),
        }
    }

    /// Creates a circular SMD pad.
    #[must_use]
    pub fn circle(x: f64, y: f64, diameter: f64) -> Self {
        Self {
            shape: PadShape::Circle,
            ..Self::rectangle(x, y, diameter, diameter)
        }
    }

    /// Copper outline.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::centred_at(self.x, self.y, self.width, self.height)
    }
}

/// Geometry of a drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    Line { start: Point, end: Point },
    Rectangle { min: Point, max: Point, filled: bool },
    Circle { center: Point, radius: f64 },
    /// Open polyline.
    Path { points: Vec<Point> },
}

/// A drawing primitive on one layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub layer: Layer,
    pub line_width: f64,
    pub kind: ShapeKind,
}

/// What a text attribute displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextKind {
    /// Reference designator.
    Reference,
    /// Component value.
    Value,
    /// Free text; `%R` repeats the reference designator.
    User(String),
}

/// A text attribute placed on a layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub kind: TextKind,
    pub position: Point,
    pub layer: Layer,
    pub font_size: f64,
    pub line_width: f64,
}

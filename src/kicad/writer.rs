//! Text encoder for KiCad `.kicad_mod` footprints.
//!
//! # Layout
//!
//! ```text
//! (module NAME (layer F.Cu) (tedit 0)
//!   (descr "...")                 // optional
//!   (tags "...")                  // optional
//!   (attr smd)
//!   (solder_mask_margin M)        // optional
//!   (fp_text ...)                 // texts, in placement order
//!   (pad ...)                     // pads, in insertion order
//!   (fp_line ...) (fp_circle ...) (fp_poly ...)
//! )
//! ```
//!
//! Numbers are rounded half away from zero to the pattern's decimals, with
//! trailing zeros dropped, so the same pattern always encodes to the same
//! bytes.

use std::fmt;

use crate::pattern::{Pad, PadShape, Pattern, Point, Shape, ShapeKind, Text, TextKind};

/// Formats a coordinate with at most `decimals` fraction digits.
#[must_use]
pub fn fmt_num(value: f64, decimals: u32) -> String {
    let scale = 10f64.powi(i32::try_from(decimals).unwrap_or(3));
    let rounded = (value * scale).round() / scale;
    let mut text = format!("{rounded:.prec$}", prec = decimals as usize);
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    if text == "-0" {
        text = "0".to_string();
    }
    text
}

/// Quotes a string when KiCad would otherwise mis-tokenise it.
#[must_use]
pub fn escape(value: &str) -> String {
    let plain = !value.is_empty()
        && value
            .chars()
            .all(|c| !c.is_whitespace() && !matches!(c, '(' | ')' | '"' | '\\'));
    if plain {
        value.to_string()
    } else {
        quote(value)
    }
}

fn quote(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}

struct Encoder {
    out: String,
    decimals: u32,
}

impl Encoder {
    /// Appends one formatted line.
    fn emit(&mut self, line: fmt::Arguments<'_>) {
        self.out.push_str(&fmt::format(line));
        self.out.push('\n');
    }

    fn num(&self, value: f64) -> String {
        fmt_num(value, self.decimals)
    }

    fn xy(&self, p: Point) -> String {
        format!("{} {}", self.num(p.x), self.num(p.y))
    }

    fn text(&mut self, name: &str, text: &Text) {
        let (kind, content) = match &text.kind {
            TextKind::Reference => ("reference", "REF**".to_string()),
            TextKind::Value => ("value", escape(name)),
            TextKind::User(s) => ("user", escape(s)),
        };
        let at = self.xy(text.position);
        let size = self.num(text.font_size);
        let thickness = self.num(text.line_width);
        self.emit(format_args!(
            "  (fp_text {kind} {content} (at {at}) (layer {layer})\n    (effects (font (size {size} {size}) (thickness {thickness})))\n  )",
            layer = text.layer,
        ));
    }

    fn pad(&mut self, name: &str, pad: &Pad) {
        let shape = match pad.shape {
            PadShape::Rectangle => "rect",
            PadShape::RoundedRectangle { .. } => "roundrect",
            PadShape::Circle => "circle",
        };
        let at = self.xy(Point::new(pad.x, pad.y));
        let size = format!("{} {}", self.num(pad.width), self.num(pad.height));
        let layers: Vec<&str> = pad.layers.iter().map(|l| l.kicad_name()).collect();
        let ratio = match pad.shape {
            PadShape::RoundedRectangle { ratio } => format!(" (roundrect_rratio {})", self.num(ratio)),
            _ => String::new(),
        };
        self.emit(format_args!(
            "  (pad {name} smd {shape} (at {at}) (size {size}) (layers {layers}){ratio})",
            name = escape(name),
            layers = layers.join(" "),
        ));
    }

    fn line(&mut self, start: Point, end: Point, shape: &Shape) {
        let (start, end) = (self.xy(start), self.xy(end));
        let width = self.num(shape.line_width);
        self.emit(format_args!(
            "  (fp_line (start {start}) (end {end}) (layer {}) (width {width}))",
            shape.layer
        ));
    }

    fn shape(&mut self, shape: &Shape) {
        match &shape.kind {
            ShapeKind::Line { start, end } => self.line(*start, *end, shape),
            ShapeKind::Rectangle { min, max, filled: false } => {
                let corners = [
                    *min,
                    Point::new(max.x, min.y),
                    *max,
                    Point::new(min.x, max.y),
                    *min,
                ];
                for pair in corners.windows(2) {
                    self.line(pair[0], pair[1], shape);
                }
            }
            ShapeKind::Rectangle { min, max, filled: true } => {
                let pts = [*min, Point::new(max.x, min.y), *max, Point::new(min.x, max.y)]
                    .iter()
                    .map(|p| format!("(xy {})", self.xy(*p)))
                    .collect::<Vec<_>>()
                    .join(" ");
                let width = self.num(shape.line_width);
                self.emit(format_args!("  (fp_poly (pts {pts}) (layer {}) (width {width}))", shape.layer));
            }
            ShapeKind::Circle { center, radius } => {
                let (at, end) = (self.xy(*center), self.xy(Point::new(center.x + radius, center.y)));
                let width = self.num(shape.line_width);
                self.emit(format_args!(
                    "  (fp_circle (center {at}) (end {end}) (layer {}) (width {width}))",
                    shape.layer
                ));
            }
            ShapeKind::Path { points } => {
                for pair in points.windows(2) {
                    self.line(pair[0], pair[1], shape);
                }
            }
        }
    }
}

/// Encodes a finished pattern as `.kicad_mod` text.
#[must_use]
pub fn encode_footprint(pattern: &Pattern<'_>) -> String {
    let mut enc = Encoder {
        out: String::new(),
        decimals: pattern.decimals(),
    };
    let name = pattern.name();

    enc.emit(format_args!("(module {} (layer F.Cu) (tedit 0)", escape(name)));
    if let Some(descr) = pattern.description() {
        enc.emit(format_args!("  (descr {})", quote(descr)));
    }
    if let Some(tags) = pattern.tags() {
        enc.emit(format_args!("  (tags {})", quote(tags)));
    }
    enc.out.push_str("  (attr smd)\n");
    if let Some(margin) = pattern.solder_mask_margin() {
        let margin = enc.num(margin);
        enc.emit(format_args!("  (solder_mask_margin {margin})"));
    }

    for text in pattern.texts() {
        enc.text(name, text);
    }
    for (pad_name, pad) in pattern.pads() {
        enc.pad(pad_name, pad);
    }
    for shape in pattern.shapes() {
        enc.shape(shape);
    }

    enc.out.push_str(")\n");
    enc.out
}

//! Courtyard boundaries.
//!
//! The courtyard encloses body and copper plus the courtyard excess. Every
//! coordinate is rounded away from the origin so rounding never eats into
//! the excess.

use tracing::debug;

use super::Body;
use crate::pattern::geometry::round_outward;
use crate::pattern::{Layer, Pattern};

/// Largest `(|x|, |y|)` reached by any pad edge.
fn pad_reach(pattern: &Pattern<'_>) -> (f64, f64) {
    pattern.pad_extents().map_or((0.0, 0.0), |r| {
        (
            r.min_x.abs().max(r.max_x.abs()),
            r.min_y.abs().max(r.max_y.abs()),
        )
    })
}

/// Rectangle around body and pads.
pub fn boundary(pattern: &mut Pattern<'_>, body: Body, excess: f64) {
    let decimals = pattern.decimals();
    let (pad_x, pad_y) = pad_reach(pattern);
    let x = round_outward(body.half_x.max(pad_x) + excess, decimals);
    let y = round_outward(body.half_y.max(pad_y) + excess, decimals);
    debug!(pattern = pattern.name(), x, y, "courtyard");
    pattern
        .layer(Layer::TopCourtyard)
        .rectangle(-x, -y, x, y);
}

/// Stepped outline for packages whose pads stick out sideways past a body
/// that is taller than the pad rows. Anything else gets a plain
/// [`boundary`].
pub fn boundary_flex(pattern: &mut Pattern<'_>, body: Body, excess: f64) {
    let (pad_x, pad_y) = pad_reach(pattern);
    if body.is_empty() || pad_x <= body.half_x || pad_y >= body.half_y {
        boundary(pattern, body, excess);
        return;
    }

    let decimals = pattern.decimals();
    let bx = round_outward(body.half_x + excess, decimals);
    let by = round_outward(body.half_y + excess, decimals);
    let px = round_outward(pad_x + excess, decimals);
    let py = round_outward(pad_y + excess, decimals);
    debug!(pattern = pattern.name(), bx, by, px, py, "flex courtyard");

    pattern
        .layer(Layer::TopCourtyard)
        .move_to(-bx, -by)
        .line_to(bx, -by)
        .line_to(bx, -py)
        .line_to(px, -py)
        .line_to(px, py)
        .line_to(bx, py)
        .line_to(bx, by)
        .line_to(-bx, by)
        .line_to(-bx, py)
        .line_to(-px, py)
        .line_to(-px, -py)
        .line_to(-bx, -py)
        .line_to(-bx, -by);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::pattern::{Pad, ShapeKind};

    #[test]
    fn boundary_covers_pads_and_body() {
        let settings = Settings::default();
        let mut pattern = Pattern::new("T", &settings);
        pattern
            .pad(1, Pad::rectangle(-0.5, 0.0, 0.6, 0.6))
            .pad(2, Pad::rectangle(0.5, 0.0, 0.6, 0.6));
        let body = Body {
            half_x: 0.5,
            half_y: 0.4,
        };
        boundary(&mut pattern, body, 0.25);

        match pattern.shapes()[0].kind {
            ShapeKind::Rectangle { min, max, .. } => {
                assert!((max.x - 1.05).abs() < 1e-9);
                assert!((max.y - 0.65).abs() < 1e-9);
                assert!((min.x + 1.05).abs() < 1e-9);
            }
            ref other => panic!("expected rectangle, got {other:?}"),
        }
    }

    #[test]
    fn flex_steps_around_short_pad_rows() {
        let settings = Settings::default();
        let mut pattern = Pattern::new("T", &settings);
        pattern
            .pad(1, Pad::rectangle(-1.2, -0.95, 0.6, 0.5))
            .pad(2, Pad::rectangle(-1.2, 0.95, 0.6, 0.5))
            .pad(3, Pad::rectangle(1.2, 0.0, 0.6, 0.5));
        let body = Body {
            half_x: 0.65,
            half_y: 1.45,
        };
        boundary_flex(&mut pattern, body, 0.25);

        match &pattern.shapes()[0].kind {
            ShapeKind::Path { points } => assert_eq!(points.len(), 13),
            other => panic!("expected path, got {other:?}"),
        }
    }

    #[test]
    fn flex_falls_back_to_rectangle() {
        let settings = Settings::default();
        let mut pattern = Pattern::new("T", &settings);
        pattern.pad(1, Pad::rectangle(0.0, 0.0, 0.5, 0.5));
        let body = Body {
            half_x: 1.0,
            half_y: 1.0,
        };
        boundary_flex(&mut pattern, body, 0.25);
        assert!(matches!(pattern.shapes()[0].kind, ShapeKind::Rectangle { .. }));
    }
}

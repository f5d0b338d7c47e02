//! Silkscreen outlines, reference text and pin 1 marks.
//!
//! Outlines sit half a line width outside the body and are clipped so no
//! stroke comes closer to copper than half the line width plus
//! `clearance.padToSilk`.

use tracing::trace;

use super::Body;
use crate::config::PolarityMark;
use crate::housing::{Housing, HousingFlags};
use crate::pattern::{Layer, Pad, Pattern, Rect, TextKind};

/// Distance from the outermost feature to the reference text centre.
pub const REFERENCE_MARGIN: f64 = 1.25;
/// Offset of silkscreen lines from the body edge.
const SILK_FAB_OFFSET: f64 = 0.1;
/// Pin 1 dot stroke width; the dot radius is the pattern resolution.
const DOT_WIDTH: f64 = 0.5;
const DOT_RADIUS: f64 = DOT_WIDTH / 2.0;
/// Quad corner arms never get shorter than this.
pub const MIN_CORNER_ARM: f64 = 0.2;
/// Quad corner arms never exceed this share of the body side.
pub const MAX_CORNER_SHARE: f64 = 0.3;
const DEFAULT_CORNER_SHARE: f64 = 0.15;
/// Pads within this band of the outermost pad position form one edge group.
const EDGE_BAND: f64 = 0.1;

/// Y position of the reference text: above the body or the farthest pad.
#[must_use]
pub fn reference_y(pattern: &Pattern<'_>, body: Body) -> f64 {
    let pad_extent = pattern
        .pads()
        .map(|(_, p)| p.y.abs() + p.height / 2.0)
        .fold(0.0, f64::max);
    if body.is_empty() && pad_extent <= 0.0 {
        return -1.5;
    }
    -(body.half_y.max(pad_extent) + REFERENCE_MARGIN)
}

/// Places the reference designator.
pub fn preamble(pattern: &mut Pattern<'_>, body: Body) {
    let y = reference_y(pattern, body);
    pattern
        .layer(Layer::TopSilkscreen)
        .text(TextKind::Reference, 0.0, y);
}

fn keepout(pattern: &Pattern<'_>) -> Vec<Rect> {
    let settings = pattern.settings();
    pattern.keepout(settings.line_width.silkscreen / 2.0 + settings.clearance.pad_to_silk)
}

/// Pin 1 dot centred at `(x, y)`, unless marks are disabled.
pub fn polarity_dot(pattern: &mut Pattern<'_>, x: f64, y: f64) {
    let settings = pattern.settings();
    if settings.polarity_mark == PolarityMark::None {
        return;
    }
    pattern
        .layer(Layer::TopSilkscreen)
        .line_width(DOT_WIDTH)
        .circle(x, y, settings.resolution());
}

/// Two-terminal parts.
///
/// Chips get two lines along the body, trimmed to the gap between the pads.
/// Electrolytic capacitors get an outline chamfered on the pin 1 side, other
/// parts a plain outline.
pub fn two_pin(pattern: &mut Pattern<'_>, housing: &Housing) {
    let body = Body::two_pin(housing);
    preamble(pattern, body);
    let Some(first) = pattern.first_pad().cloned() else {
        return;
    };

    let settings = pattern.settings();
    let lw = settings.line_width.silkscreen;
    let keepout = keepout(pattern);
    let x = body.half_x + lw / 2.0;
    let y = body.half_y + lw / 2.0;

    if !housing.has(HousingFlags::NOSILK) && !body.is_empty() {
        let mut pen = pattern.layer(Layer::TopSilkscreen);
        if housing.has(HousingFlags::CHIP) {
            let y = body.half_y + SILK_FAB_OFFSET;
            pen.clipped_line(-x, -y, x, -y, &keepout)
                .clipped_line(-x, y, x, y, &keepout);
        } else if housing.has(HousingFlags::CAE) {
            let c = x.min(y) / 4.0;
            pen.clipped_polyline(
                &[
                    (-x + c, -y),
                    (x, -y),
                    (x, y),
                    (-x + c, y),
                    (-x, y - c),
                    (-x, -y + c),
                    (-x + c, -y),
                ],
                &keepout,
            );
        } else {
            pen.clipped_rectangle(-x, -y, x, y, &keepout);
        }
    }

    if housing.has(HousingFlags::POLARIZED) {
        let dot_x =
            first.x - first.width / 2.0 - settings.clearance.silk_to_pad - DOT_RADIUS;
        polarity_dot(pattern, dot_x, 0.0);
    }
}

/// Dual-row packages.
///
/// SON, SOT-23 and SOP outlines are reduced to the top and bottom edges;
/// the rest get a full outline. The pin 1 dot goes above pad 1 for SOT-23
/// and SOP, left of the body for SON, and left of pad 1 otherwise.
pub fn dual(pattern: &mut Pattern<'_>, housing: &Housing) {
    let body = Body::upright(housing);
    preamble(pattern, body);
    let Some(first) = pattern.first_pad().cloned() else {
        return;
    };

    let settings = pattern.settings();
    let lw = settings.line_width.silkscreen;
    let silk_to_pad = settings.clearance.silk_to_pad;
    let keepout = keepout(pattern);
    let x = body.half_x + lw / 2.0;
    let y = body.half_y + lw / 2.0;
    let edges_only = housing.has(HousingFlags::SON)
        || housing.has(HousingFlags::SOT23)
        || housing.has(HousingFlags::SOP);

    if !housing.has(HousingFlags::NOSILK) && !body.is_empty() {
        let mut pen = pattern.layer(Layer::TopSilkscreen);
        if edges_only {
            pen.clipped_line(-body.half_x, -y, body.half_x, -y, &keepout)
                .clipped_line(-body.half_x, y, body.half_x, y, &keepout);
        } else {
            pen.clipped_rectangle(-x, -y, x, y, &keepout);
        }
    }

    if housing.has(HousingFlags::POLARIZED) {
        let above = first.y - first.height / 2.0 - DOT_RADIUS - silk_to_pad;
        let (dot_x, dot_y) = if housing.has(HousingFlags::SOT23) || housing.has(HousingFlags::SOP) {
            (first.x, above)
        } else if housing.has(HousingFlags::SON) {
            (-body.half_x - DOT_RADIUS - silk_to_pad, above)
        } else {
            (first.x - first.width / 2.0 - silk_to_pad - DOT_RADIUS, first.y)
        };
        polarity_dot(pattern, dot_x, dot_y);
    }
}

/// Corner arm lengths `(x, y)` for quad packages.
///
/// Each arm is as long as possible while keeping `clearance.silkToPad` to
/// the outermost pads of the neighbouring edges, limited to 30% of the body
/// side and never shorter than [`MIN_CORNER_ARM`].
#[must_use]
pub fn corner_arms(pattern: &Pattern<'_>, housing: &Housing) -> (f64, f64) {
    let settings = pattern.settings();
    let lw = settings.line_width.silkscreen;
    let clearance = settings.clearance.silk_to_pad;
    let body_width = housing.body_width_nom();
    let body_length = housing.body_length_nom();
    let body_x = body_width / 2.0 + SILK_FAB_OFFSET;
    let body_y = body_length / 2.0 + SILK_FAB_OFFSET;

    let pads: Vec<&Pad> = pattern.pads().map(|(_, p)| p).collect();
    let (mut min_x, mut max_x) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut min_y, mut max_y) = (f64::INFINITY, f64::NEG_INFINITY);
    for pad in &pads {
        min_x = min_x.min(pad.x);
        max_x = max_x.max(pad.x);
        min_y = min_y.min(pad.y);
        max_y = max_y.max(pad.y);
    }

    let mut limit_x = f64::INFINITY;
    let mut limit_y = f64::INFINITY;
    for pad in &pads {
        let top_or_bottom = (pad.y - max_y).abs() < EDGE_BAND || (pad.y - min_y).abs() < EDGE_BAND;
        let left_or_right = (pad.x - min_x).abs() < EDGE_BAND || (pad.x - max_x).abs() < EDGE_BAND;

        if top_or_bottom {
            let outer = pad.x.abs() + pad.width / 2.0;
            let length = body_x - lw - clearance - outer;
            trace!(x = pad.x, y = pad.y, outer, length, "horizontal arm constraint");
            if length > 0.0 {
                limit_x = limit_x.min(length);
            }
        } else if left_or_right {
            let outer = pad.y.abs() + pad.height / 2.0;
            let length = body_y - lw - clearance - outer;
            trace!(x = pad.x, y = pad.y, outer, length, "vertical arm constraint");
            if length > 0.0 {
                limit_y = limit_y.min(length);
            }
        }
    }

    let arm = |limit: f64, side: f64| {
        let length = if limit.is_finite() {
            limit
        } else {
            side * DEFAULT_CORNER_SHARE
        };
        length.min(side * MAX_CORNER_SHARE).max(MIN_CORNER_ARM)
    };
    let arms = (arm(limit_x, body_width), arm(limit_y, body_length));
    trace!(arm_x = arms.0, arm_y = arms.1, "quad corner arms");
    arms
}

/// Quad packages: L-shaped marks at the four body corners.
pub fn quad(pattern: &mut Pattern<'_>, housing: &Housing) {
    let body = Body::upright(housing);
    let (arm_x, arm_y) = corner_arms(pattern, housing);
    preamble(pattern, body);
    let Some(first) = pattern.first_pad().cloned() else {
        return;
    };

    let silk_to_pad = pattern.settings().clearance.silk_to_pad;
    let x = body.half_x + SILK_FAB_OFFSET;
    let y = body.half_y + SILK_FAB_OFFSET;

    if !housing.has(HousingFlags::NOSILK) {
        let mut pen = pattern.layer(Layer::TopSilkscreen);
        for (sx, sy) in [(-1.0, 1.0), (1.0, 1.0), (1.0, -1.0), (-1.0, -1.0)] {
            let (cx, cy) = (sx * x, sy * y);
            pen.line(cx, cy, cx - sx * arm_x, cy)
                .line(cx, cy, cx, cy - sy * arm_y);
        }
    }

    if housing.has(HousingFlags::POLARIZED) {
        let dot_x = first.x - 0.75;
        let dot_y = first.y - first.height / 2.0 - DOT_RADIUS - silk_to_pad;
        polarity_dot(pattern, dot_x, dot_y);
    }
}

/// Grid arrays: corner marks with the A1 corner chamfered.
pub fn grid_array(pattern: &mut Pattern<'_>, housing: &Housing) {
    let body = Body::upright(housing);
    preamble(pattern, body);
    if housing.has(HousingFlags::NOSILK) || body.is_empty() {
        return;
    }

    let lw = pattern.settings().line_width.silkscreen;
    let keepout = keepout(pattern);
    let h_pitch = if housing.horizontal_pitch > 0.0 {
        housing.horizontal_pitch
    } else {
        housing.pitch
    };
    let v_pitch = if housing.vertical_pitch > 0.0 {
        housing.vertical_pitch
    } else {
        housing.pitch
    };

    let x = body.half_x + lw / 2.0;
    let y = body.half_y + lw / 2.0;
    let dx = x - h_pitch * (f64::from(housing.column_count) / 2.0 - 0.5);
    let dy = y - v_pitch * (f64::from(housing.row_count) / 2.0 - 0.5);
    let d = dx.min(dy).max(0.0);
    let len = (2.0 * h_pitch).min(2.0 * v_pitch).min(x).min(y);

    pattern
        .layer(Layer::TopSilkscreen)
        .clipped_polyline(&[(-x, -y + len), (-x, -y + d), (-x + d, -y), (-x + len, -y)], &keepout)
        .clipped_polyline(&[(x, -y + len), (x, -y), (x - len, -y)], &keepout)
        .clipped_polyline(&[(x, y - len), (x, y), (x - len, y)], &keepout)
        .clipped_polyline(&[(-x, y - len), (-x, y), (-x + len, y)], &keepout);
}

//! Copper pad placement.
//!
//! Every placement goes through [`place`], which brackets the pads: sizes
//! are checked on the way in and the pattern-level mask margin is set on
//! the way out.

use tracing::{debug, warn};

use crate::config::Settings;
use crate::housing::Housing;
use crate::ipc7351::calculator::{BallParams, PadParams, QuadParams};
use crate::pattern::{Pad, PadShape, Pattern};

/// Row letters for grid array balls; I, O, Q, S, X and Z are never used.
const ROW_LETTERS: &[u8] = b"ABCDEFGHJKLMNPRTUVWY";

/// One vertical column of pads.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub count: u32,
    pub pitch: f64,
    pub width: f64,
    pub height: f64,
}

/// Creates an SMD pad, rounded when the settings ask for smooth corners.
#[must_use]
pub fn smd(settings: &Settings, x: f64, y: f64, width: f64, height: f64) -> Pad {
    let mut pad = Pad::rectangle(x, y, width, height);
    if settings.smooth_pad_corners {
        pad.shape = PadShape::RoundedRectangle {
            ratio: corner_ratio(settings, width, height),
        };
    }
    pad
}

/// Corner radius ratio capped by the maximum corner radius.
#[must_use]
pub fn corner_ratio(settings: &Settings, width: f64, height: f64) -> f64 {
    let smaller = width.min(height);
    let ratio = settings.ratio.corner_to_width;
    if smaller > 0.0 {
        ratio.min(settings.maximum.corner_radius / smaller)
    } else {
        ratio
    }
}

/// Places pads in order, replacing any pad with the same name.
pub fn place<I, S>(pattern: &mut Pattern<'_>, pads: I)
where
    I: IntoIterator<Item = (S, Pad)>,
    S: ToString,
{
    let floor = pattern.settings().resolution();
    for (name, mut pad) in pads {
        if pad.width <= 0.0 || pad.height <= 0.0 {
            warn!(
                pad = name.to_string(),
                width = pad.width,
                height = pad.height,
                "non-positive pad size raised to resolution"
            );
            pad.width = pad.width.max(floor);
            pad.height = pad.height.max(floor);
        }
        pattern.pad(name, pad);
    }
    mask(pattern);
    debug!(pattern = pattern.name(), pads = pattern.pad_count(), "copper placed");
}

/// Sets the pattern-level solder mask margin from the pad-to-mask clearance.
pub fn mask(pattern: &mut Pattern<'_>) {
    let margin = pattern.settings().clearance.pad_to_mask;
    if margin.abs() > f64::EPSILON {
        pattern.set_solder_mask_margin(margin);
    }
}

/// Two pads on the X axis, pin 1 on the left.
pub fn two_pin(pattern: &mut Pattern<'_>, params: &PadParams) {
    let settings = pattern.settings();
    let x = params.distance / 2.0;
    let pads = [
        (1, smd(settings, -x, 0.0, params.width, params.height)),
        (2, smd(settings, x, 0.0, params.width, params.height)),
    ];
    place(pattern, pads);
}

/// Two mirrored columns of `lead_count / 2` pads, numbered counter-clockwise
/// from the top left.
pub fn dual(pattern: &mut Pattern<'_>, params: &PadParams, lead_count: u32, pitch: f64) {
    let per_side = lead_count / 2;
    let column = Column {
        count: per_side,
        pitch,
        width: params.width,
        height: params.height,
    };
    split_dual(pattern, params.distance, column, column);
}

/// Two columns with independent counts and pitches: the left one numbered
/// downward from 1, the right one upward after it.
pub fn split_dual(pattern: &mut Pattern<'_>, distance: f64, left: Column, right: Column) {
    let settings = pattern.settings();
    let x = distance / 2.0;

    let mut pads = Vec::with_capacity((left.count + right.count) as usize);
    let top = -left.pitch * (f64::from(left.count) / 2.0 - 0.5);
    for i in 0..left.count {
        let y = f64::from(i).mul_add(left.pitch, top);
        pads.push((i + 1, smd(settings, -x, y, left.width, left.height)));
    }
    let bottom = right.pitch * (f64::from(right.count) / 2.0 - 0.5);
    for i in 0..right.count {
        let y = f64::from(i).mul_add(-right.pitch, bottom);
        pads.push((left.count + i + 1, smd(settings, x, y, right.width, right.height)));
    }

    place(pattern, pads);
}

/// Pads on all four sides, numbered counter-clockwise from the top of the
/// left row.
pub fn quad(pattern: &mut Pattern<'_>, params: &QuadParams, housing: &Housing) {
    let settings = pattern.settings();
    let (rows, columns) = quad_counts(housing);
    let pitch = housing.pitch;
    let QuadParams { row, column, .. } = *params;

    let offset = |count: u32| pitch * (f64::from(count) / 2.0 - 0.5);
    let mut pads = Vec::with_capacity(2 * (rows + columns) as usize);
    let mut number = 0;
    let mut next = || {
        number += 1;
        number
    };

    for i in 0..rows {
        let y = f64::from(i).mul_add(pitch, -offset(rows));
        pads.push((next(), smd(settings, -row.distance / 2.0, y, row.width, row.height)));
    }
    for i in 0..columns {
        let x = f64::from(i).mul_add(pitch, -offset(columns));
        pads.push((next(), smd(settings, x, column.distance / 2.0, column.height, column.width)));
    }
    for i in 0..rows {
        let y = f64::from(i).mul_add(-pitch, offset(rows));
        pads.push((next(), smd(settings, row.distance / 2.0, y, row.width, row.height)));
    }
    for i in 0..columns {
        let x = f64::from(i).mul_add(-pitch, offset(columns));
        pads.push((next(), smd(settings, x, -column.distance / 2.0, column.height, column.width)));
    }

    place(pattern, pads);
}

/// Pads per left/right row and per top/bottom column of a quad package.
#[must_use]
pub fn quad_counts(housing: &Housing) -> (u32, u32) {
    match (housing.row_count, housing.column_count) {
        (0, 0) => (housing.lead_count / 4, housing.lead_count / 4),
        (0, columns) => (housing.lead_count.saturating_sub(2 * columns) / 2, columns),
        (rows, 0) => (rows, housing.lead_count.saturating_sub(2 * rows) / 2),
        counts => counts,
    }
}

/// Ball grid lands named by row letter and column number.
pub fn grid_array(pattern: &mut Pattern<'_>, params: &BallParams, housing: &Housing) {
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
    let rows = housing.row_count;
    let columns = housing.column_count;
    let x0 = -h_pitch * (f64::from(columns) - 1.0) / 2.0;
    let y0 = -v_pitch * (f64::from(rows) - 1.0) / 2.0;

    let mut pads = Vec::new();
    for r in 0..rows {
        for c in 0..columns {
            let name = format!("{}{}", row_name(r), c + 1);
            if housing
                .balls_missing
                .iter()
                .any(|m| m.eq_ignore_ascii_case(&name))
            {
                continue;
            }
            let x = f64::from(c).mul_add(h_pitch, x0);
            let y = f64::from(r).mul_add(v_pitch, y0);
            pads.push((name, Pad::circle(x, y, params.diameter)));
        }
    }

    place(pattern, pads);
}

/// Row designator: `A`..`Y`, then `AA`, `AB`, ...
#[must_use]
pub fn row_name(index: u32) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let n = ROW_LETTERS.len() as u32;
    let letter = |i: u32| char::from(ROW_LETTERS[(i % n) as usize]);
    if index < n {
        letter(index).to_string()
    } else {
        format!("{}{}", letter(index / n - 1), letter(index))
    }
}

/// Exposed thermal tab under the body, numbered after the leads.
pub fn tab(pattern: &mut Pattern<'_>, housing: &Housing) {
    let (Some(width), Some(length)) = (housing.tab_width, housing.tab_length) else {
        return;
    };
    let (width, length) = (width.pick(), length.pick());
    if width <= 0.0 || length <= 0.0 {
        return;
    }
    let name = pattern.pad_count() + 1;
    let pad = smd(pattern.settings(), 0.0, 0.0, width, length);
    place(pattern, [(name, pad)]);
}

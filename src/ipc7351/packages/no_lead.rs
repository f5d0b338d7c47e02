//! No-lead packages: SON and the small DFN family.

use tracing::debug;

use crate::error::{GenerateError, GenerateResult};
use crate::housing::Housing;
use crate::ipc7351::{calculator, naming};
use crate::layers::{assembly, copper, courtyard, silkscreen, Body};
use crate::pattern::Pattern;

/// Builds a small outline no-lead pattern with an optional thermal tab.
///
/// # Errors
///
/// Returns [`GenerateError::InvalidLeadCount`] for an odd or zero lead
/// count.
pub fn build_son(pattern: &mut Pattern<'_>, housing: &Housing) -> GenerateResult<()> {
    if housing.lead_count == 0 || housing.lead_count % 2 != 0 {
        return Err(GenerateError::invalid_lead_count(
            "SON",
            housing.lead_count,
            "an even number",
        ));
    }
    let settings = pattern.settings();
    if pattern.name().is_empty() {
        pattern.set_name(naming::son_name(housing, settings.density_level));
    }

    let params = calculator::son(settings, housing);
    debug!(width = params.width, height = params.height, distance = params.distance, "SON lands");

    copper::dual(pattern, &params, housing.lead_count, housing.pitch);
    copper::tab(pattern, housing);
    silkscreen::dual(pattern, housing);
    assembly::upright(pattern, housing);
    courtyard::boundary(pattern, Body::upright(housing), params.excess);
    Ok(())
}

/// Builds a 2, 3 or 4 pad DFN pattern.
///
/// `pitch` separates pads vertically, `pitch1` separates the two pad
/// columns (the SON pad distance when absent). The 3-pad variant replaces
/// the right column with one large pad sized by `largePadLength` across
/// and `largePadWidth` up.
///
/// # Errors
///
/// Returns [`GenerateError::InvalidLeadCount`] for any other lead count.
pub fn build_dfn(pattern: &mut Pattern<'_>, housing: &Housing) -> GenerateResult<()> {
    let count = housing.lead_count;
    if !matches!(count, 2..=4) {
        return Err(GenerateError::invalid_lead_count("DFN", count, "2, 3 or 4"));
    }
    let settings = pattern.settings();
    if pattern.name().is_empty() {
        pattern.set_name(naming::dfn_name(housing, settings.density_level));
    }

    let son_housing = if housing.pitch1 > 0.0 {
        Housing {
            pitch: housing.pitch1,
            ..housing.clone()
        }
    } else {
        housing.clone()
    };
    let params = calculator::son(settings, &son_housing);

    let e = housing.pitch;
    let span = if housing.pitch1 > 0.0 {
        housing.pitch1
    } else {
        params.distance
    };
    let (w, h) = (params.width, params.height);
    let smd = |x: f64, y: f64| copper::smd(settings, x, y, w, h);

    let mut pads = Vec::with_capacity(4);
    if count == 4 {
        let x = span / 2.0;
        pads.push((1, smd(-x, e / 2.0)));
        pads.push((2, smd(-x, -e / 2.0)));
        pads.push((3, smd(x, e / 2.0)));
        pads.push((4, smd(x, -e / 2.0)));
    } else {
        let x_large = span / 2.0;
        let x_small = x_large - span;
        pads.push((1, smd(x_small, -e / 2.0)));
        pads.push((2, smd(x_small, e / 2.0)));
        if count == 3 {
            let length = housing.large_pad_length.map_or(0.0, |d| d.pick());
            let width = housing.large_pad_width.map_or(0.0, |d| d.pick());
            if length > 0.0 && width > 0.0 {
                pads.push((3, copper::smd(settings, x_large, 0.0, length, width)));
            }
        }
    }
    debug!(pads = pads.len(), span, pitch = e, "DFN lands");

    copper::place(pattern, pads);
    silkscreen::dual(pattern, housing);
    assembly::upright(pattern, housing);
    courtyard::boundary(pattern, Body::upright(housing), params.excess);
    Ok(())
}

//! Small outline transistor packages: SOT-23 and flat-lead SOTFL.
//!
//! Odd lead counts leave a gap on one side, so the two columns get their
//! own count and pitch:
//!
//! | Leads | Left (pins from 1) | Right        |
//! |-------|--------------------|--------------|
//! | 3     | 2 at 2 × pitch     | 1            |
//! | 5     | 3 at pitch         | 2 at 2 × pitch |
//! | 6     | 3 at pitch         | 3 at pitch   |

use tracing::debug;

use crate::error::{GenerateError, GenerateResult};
use crate::housing::{Housing, HousingFlags};
use crate::ipc7351::calculator::{self, DualVariant};
use crate::ipc7351::naming;
use crate::layers::copper::{self, Column};
use crate::layers::{assembly, courtyard, mask, silkscreen, Body};
use crate::pattern::Pattern;

use super::dual;

/// Pads per column and column pitch for a 3, 5 or 6 lead package.
///
/// # Errors
///
/// Returns [`GenerateError::InvalidLeadCount`] for any other count.
pub fn split(family: &'static str, lead_count: u32, pitch: f64) -> GenerateResult<((u32, f64), (u32, f64))> {
    match lead_count {
        3 => Ok(((2, 2.0 * pitch), (1, pitch))),
        5 => Ok(((3, pitch), (2, 2.0 * pitch))),
        6 => Ok(((3, pitch), (3, pitch))),
        count => Err(GenerateError::invalid_lead_count(family, count, "3, 5 or 6")),
    }
}

/// Builds a SOT-23 pattern.
///
/// Even lead counts other than 6 are laid out as a small outline package.
///
/// # Errors
///
/// Returns [`GenerateError::InvalidLeadCount`] for 1, 7 or other odd
/// counts.
pub fn build_sot23(pattern: &mut Pattern<'_>, housing: &Housing) -> GenerateResult<()> {
    let settings = pattern.settings();
    let density = settings.density_level;

    if pattern.name().is_empty() {
        pattern.set_name(naming::sot23_name(housing, density));
        pattern.set_description(naming::sot23_description(housing, density));
        pattern.set_tags("sot23");
    }

    if housing.lead_count % 2 == 0 && housing.lead_count != 6 {
        debug!(leads = housing.lead_count, "SOT-23 laid out as SOP");
        return dual::build(pattern, &housing.with_flags(HousingFlags::SOP), "SOP");
    }

    let ((left_count, left_pitch), (right_count, right_pitch)) =
        split("SOT23", housing.lead_count, housing.pitch)?;
    let params = calculator::sot(settings, housing)?;
    debug!(
        width1 = params.width1,
        height1 = params.height1,
        width2 = params.width2,
        height2 = params.height2,
        distance = params.distance,
        "SOT lands"
    );

    let left = Column {
        count: left_count,
        pitch: left_pitch,
        width: params.width1,
        height: params.height1,
    };
    let right = Column {
        count: right_count,
        pitch: right_pitch,
        width: params.width2,
        height: params.height2,
    };
    copper::split_dual(pattern, params.distance, left, right);
    silkscreen::dual(pattern, housing);
    assembly::upright(pattern, housing);
    courtyard::boundary_flex(pattern, Body::upright(housing), params.excess);
    mask::dual(pattern);
    Ok(())
}

/// Builds a flat-lead SOT pattern.
///
/// # Errors
///
/// Returns [`GenerateError::InvalidLeadCount`] unless the housing has
/// 3, 5 or 6 leads.
pub fn build_sotfl(pattern: &mut Pattern<'_>, housing: &Housing) -> GenerateResult<()> {
    let settings = pattern.settings();
    let ((left_count, left_pitch), (right_count, right_pitch)) =
        split("SOTFL", housing.lead_count, housing.pitch)?;

    if pattern.name().is_empty() {
        pattern.set_name(naming::sotfl_name(housing, settings.density_level));
    }

    let params = calculator::dual(settings, housing, DualVariant::FlatLead);
    let column = |count, pitch| Column {
        count,
        pitch,
        width: params.width,
        height: params.height,
    };
    copper::split_dual(
        pattern,
        params.distance,
        column(left_count, left_pitch),
        column(right_count, right_pitch),
    );
    silkscreen::dual(pattern, housing);
    assembly::upright(pattern, housing);
    courtyard::boundary(pattern, Body::upright(housing), params.excess);
    mask::dual(pattern);
    Ok(())
}

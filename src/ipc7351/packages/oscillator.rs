//! Crystal oscillators.
//!
//! Corner-concave bodies get four corner pads; side-concave and side-flat
//! bodies are laid out as chip arrays with the matching fillet table.

use tracing::debug;

use crate::error::{GenerateError, GenerateResult};
use crate::housing::{Housing, HousingFlags};
use crate::ipc7351::calculator::{self, PadParams};
use crate::ipc7351::naming;
use crate::layers::{assembly, copper, courtyard, silkscreen, Body};
use crate::pattern::Pattern;

use super::dual;

/// Builds an oscillator pattern.
///
/// # Errors
///
/// Returns [`GenerateError::UnsupportedFamily`] for the DFN variant, and
/// lead count errors from the chip array layout.
pub fn build(pattern: &mut Pattern<'_>, housing: &Housing) -> GenerateResult<()> {
    let settings = pattern.settings();
    let density = settings.density_level;

    if housing.has(HousingFlags::CORNER_CONCAVE) {
        if pattern.name().is_empty() {
            pattern.set_name(naming::corner_concave_oscillator_name(housing, density));
        }
        let params = calculator::corner_concave(settings, housing);
        debug!(
            width = params.width,
            height = params.height,
            distance1 = params.distance1,
            distance2 = params.distance2,
            "corner concave lands"
        );
        let pads = PadParams {
            width: params.width,
            height: params.height,
            distance: params.distance1,
            courtyard: params.courtyard,
            excess: params.excess,
        };
        copper::dual(pattern, &pads, 4, params.distance2);
        silkscreen::dual(pattern, housing);
        assembly::upright(pattern, housing);
        courtyard::boundary(pattern, Body::upright(housing), params.excess);
        return Ok(());
    }

    if housing.has(HousingFlags::DFN) {
        return Err(GenerateError::unsupported_family("oscillator dfn"));
    }

    if pattern.name().is_empty() {
        pattern.set_name(naming::oscillator_name(housing, density));
    }
    dual::build_chip_array(pattern, housing)
}

//! Quad packages: QFN and QFP.

use tracing::debug;

use crate::error::{GenerateError, GenerateResult};
use crate::housing::Housing;
use crate::ipc7351::{calculator, naming};
use crate::layers::{assembly, copper, courtyard, silkscreen, Body};
use crate::pattern::Pattern;

/// Builds a quad pattern with an optional thermal tab and L-shaped
/// silkscreen corners.
///
/// # Errors
///
/// Returns [`GenerateError::InvalidLeadCount`] when the row and column
/// counts cannot account for the lead count.
pub fn build(pattern: &mut Pattern<'_>, housing: &Housing) -> GenerateResult<()> {
    let (rows, columns) = copper::quad_counts(housing);
    if rows == 0 || columns == 0 || 2 * (rows + columns) != housing.lead_count {
        return Err(GenerateError::invalid_lead_count(
            "quad",
            housing.lead_count,
            "twice the sum of row and column counts",
        ));
    }

    let settings = pattern.settings();
    if pattern.name().is_empty() {
        pattern.set_name(naming::quad_name(housing, settings.density_level));
    }

    let params = calculator::quad(settings, housing);
    debug!(rows, columns, row = ?params.row, column = ?params.column, "quad lands");

    copper::quad(pattern, &params, housing);
    copper::tab(pattern, housing);
    silkscreen::quad(pattern, housing);
    assembly::upright(pattern, housing);
    courtyard::boundary(pattern, Body::upright(housing), params.excess);
    Ok(())
}

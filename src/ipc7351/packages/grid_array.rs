//! Ball grid arrays.

use tracing::debug;

use crate::error::{GenerateError, GenerateResult};
use crate::housing::Housing;
use crate::ipc7351::{calculator, naming};
use crate::layers::{assembly, copper, courtyard, silkscreen, Body};
use crate::pattern::Pattern;

/// Builds a grid array pattern. Balls listed in `ballsMissing` are left
/// out; the name counts the balls actually placed.
///
/// # Errors
///
/// Returns [`GenerateError::InvalidLeadCount`] when the grid has no rows
/// or no columns.
pub fn build(pattern: &mut Pattern<'_>, housing: &Housing) -> GenerateResult<()> {
    if housing.row_count == 0 || housing.column_count == 0 {
        return Err(GenerateError::invalid_lead_count(
            "BGA",
            housing.row_count * housing.column_count,
            "at least one row and one column",
        ));
    }

    let settings = pattern.settings();
    let params = calculator::grid_array(settings, housing);
    debug!(diameter = params.diameter, "ball lands");

    copper::grid_array(pattern, &params, housing);
    if pattern.name().is_empty() {
        let name = naming::bga_name(housing, pattern.pad_count(), settings.density_level);
        pattern.set_name(name);
    }
    silkscreen::grid_array(pattern, housing);
    assembly::upright(pattern, housing);
    courtyard::boundary(pattern, Body::upright(housing), params.excess);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::housing::{Dimension, HousingFlags};
    use crate::pattern::PadShape;

    #[test]
    fn depopulated_grid() {
        let settings = Settings::default();
        let mut pattern = Pattern::new("", &settings);
        let housing = Housing {
            row_count: 4,
            column_count: 4,
            pitch: 0.8,
            body_width: Some(Dimension::exact(4.0)),
            body_length: Some(Dimension::exact(4.0)),
            height: Some(Dimension::new(0.9, 1.0, 1.1)),
            ball_diameter: Some(Dimension::exact(0.4)),
            balls_missing: vec!["b2".to_string(), "C3".to_string()],
            flags: HousingFlags::POLARIZED,
            ..Housing::default()
        };
        build(&mut pattern, &housing).unwrap();

        assert_eq!(pattern.pad_count(), 14);
        assert_eq!(pattern.name(), "BGA14C80P4X4_400X400X110N");
        let a1 = pattern.get_pad("A1").unwrap();
        assert_eq!(a1.shape, PadShape::Circle);
        assert!((a1.width - 0.32).abs() < 1e-9);
    }

    #[test]
    fn empty_grid_is_rejected() {
        let settings = Settings::default();
        let mut pattern = Pattern::new("", &settings);
        assert!(build(&mut pattern, &Housing::default()).is_err());
    }
}

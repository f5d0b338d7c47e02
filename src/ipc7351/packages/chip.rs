//! Two-terminal packages: chips, MELFs, molded bodies and aluminium
//! electrolytic capacitors.
//!
//! Pads sit on the X axis at `±distance / 2`, pin 1 on the left.

use tracing::debug;

use crate::error::GenerateResult;
use crate::housing::{Housing, HousingFlags};
use crate::ipc7351::{calculator, naming};
use crate::layers::{assembly, copper, courtyard, silkscreen, Body};
use crate::pattern::Pattern;

/// Builds a two-terminal pattern.
///
/// # Errors
///
/// This builder does not fail; missing dimensions resolve to zero.
pub fn build(pattern: &mut Pattern<'_>, housing: &Housing) -> GenerateResult<()> {
    let settings = pattern.settings();
    let density = settings.density_level;

    if pattern.name().is_empty() {
        let name = if housing.has(HousingFlags::CAE) {
            naming::cae_name(housing, density)
        } else if housing.has(HousingFlags::MOLDED) {
            naming::molded_name(housing, density)
        } else if housing.body_diameter.is_some() {
            naming::melf_name(housing, density)
        } else {
            naming::chip_name(housing, density)
        };
        pattern.set_name(name);
    }

    let params = calculator::two_pin(settings, housing);
    debug!(
        width = params.width,
        height = params.height,
        distance = params.distance,
        "two-pin lands"
    );

    copper::two_pin(pattern, &params);
    silkscreen::two_pin(pattern, housing);
    assembly::two_pin(pattern, housing);
    courtyard::boundary(pattern, Body::two_pin(housing), params.excess);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::housing::Dimension;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn chip_pads_are_mirrored_on_x_axis() {
        let settings = Settings::default();
        let mut pattern = Pattern::new("", &settings);
        let housing = Housing {
            body_length: Some(Dimension::new(0.95, 1.0, 1.05)),
            body_width: Some(Dimension::new(0.45, 0.5, 0.55)),
            height: Some(Dimension::new(0.3, 0.32, 0.35)),
            lead_length: Some(Dimension::new(0.15, 0.25, 0.35)),
            flags: HousingFlags::CHIP,
            ..Housing::default()
        };
        build(&mut pattern, &housing).unwrap();

        assert_eq!(pattern.name(), "RESC1005X35N");
        assert_eq!(pattern.pad_count(), 2);
        let p1 = pattern.get_pad("1").unwrap();
        let p2 = pattern.get_pad("2").unwrap();
        assert!(approx_eq(p1.x, -p2.x));
        assert!(p1.x < 0.0);
        assert!(approx_eq(p1.y, 0.0) && approx_eq(p2.y, 0.0));
    }

    #[test]
    fn explicit_name_is_kept() {
        let settings = Settings::default();
        let mut pattern = Pattern::new("MY_PART", &settings);
        let housing = Housing {
            body_length: Some(Dimension::exact(2.0)),
            body_width: Some(Dimension::exact(1.25)),
            lead_length: Some(Dimension::exact(0.4)),
            flags: HousingFlags::CHIP,
            ..Housing::default()
        };
        build(&mut pattern, &housing).unwrap();
        assert_eq!(pattern.name(), "MY_PART");
    }
}

//! Dual-row packages: SOIC, SOP, SOJ and chip arrays.
//!
//! `leadCount / 2` pads per side, pin 1 top left, numbered
//! counter-clockwise. An optional thermal tab is numbered after the leads.

use tracing::debug;

use crate::error::{GenerateError, GenerateResult};
use crate::housing::{Housing, HousingFlags};
use crate::ipc7351::calculator::{self, ChipArrayKind, DualVariant, PadParams};
use crate::ipc7351::naming;
use crate::layers::{assembly, copper, courtyard, mask, silkscreen, Body};
use crate::pattern::Pattern;

fn check_even(family: &'static str, housing: &Housing) -> GenerateResult<()> {
    if housing.lead_count == 0 || housing.lead_count % 2 != 0 {
        return Err(GenerateError::invalid_lead_count(
            family,
            housing.lead_count,
            "an even number",
        ));
    }
    Ok(())
}

/// Builds a gull-wing or J-lead dual pattern; `family` is the default name
/// prefix.
///
/// # Errors
///
/// Returns [`GenerateError::InvalidLeadCount`] for an odd or zero lead
/// count.
pub fn build(pattern: &mut Pattern<'_>, housing: &Housing, family: &'static str) -> GenerateResult<()> {
    check_even(family, housing)?;
    let settings = pattern.settings();

    if pattern.name().is_empty() {
        pattern.set_name(naming::dual_name(family, housing, settings.density_level));
    }

    let variant = if housing.has(HousingFlags::SOJ) {
        DualVariant::JLead
    } else if housing.has(HousingFlags::FLATLEAD) {
        DualVariant::FlatLead
    } else {
        DualVariant::Gullwing
    };
    let params = calculator::dual(settings, housing, variant);
    place(pattern, housing, &params);
    Ok(())
}

/// Builds a chip array pattern. Terminations default to convex.
///
/// # Errors
///
/// Returns [`GenerateError::InvalidLeadCount`] for an odd or zero lead
/// count.
pub fn build_chip_array(pattern: &mut Pattern<'_>, housing: &Housing) -> GenerateResult<()> {
    check_even("chip array", housing)?;
    let settings = pattern.settings();
    let kind = ChipArrayKind::from_flags(housing.flags);

    if pattern.name().is_empty() {
        pattern.set_name(naming::chip_array_name(housing, kind, settings.density_level));
    }

    let params = calculator::dual(settings, housing, DualVariant::ChipArray(kind));
    place(pattern, housing, &params);
    Ok(())
}

fn place(pattern: &mut Pattern<'_>, housing: &Housing, params: &PadParams) {
    debug!(
        width = params.width,
        height = params.height,
        distance = params.distance,
        "dual lands"
    );
    copper::dual(pattern, params, housing.lead_count, housing.pitch);
    copper::tab(pattern, housing);
    silkscreen::dual(pattern, housing);
    assembly::upright(pattern, housing);
    courtyard::boundary(pattern, Body::upright(housing), params.excess);
    mask::dual(pattern);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::housing::Dimension;

    fn soic8() -> Housing {
        Housing {
            body_width: Some(Dimension::new(3.8, 3.9, 4.0)),
            body_length: Some(Dimension::new(4.8, 4.9, 5.0)),
            height: Some(Dimension::new(1.35, 1.55, 1.75)),
            lead_span: Some(Dimension::new(5.8, 6.0, 6.2)),
            lead_length: Some(Dimension::new(0.4, 0.835, 1.27)),
            lead_width: Some(Dimension::new(0.31, 0.41, 0.51)),
            lead_count: 8,
            pitch: 1.27,
            flags: HousingFlags::POLARIZED,
            ..Housing::default()
        }
    }

    #[test]
    fn soic8_layout() {
        let settings = Settings::default();
        let mut pattern = Pattern::new("", &settings);
        build(&mut pattern, &soic8(), "SOIC").unwrap();

        assert_eq!(pattern.name(), "SOIC127P600X175-8N");
        assert_eq!(pattern.pad_count(), 8);
        let p1 = pattern.get_pad("1").unwrap();
        let p4 = pattern.get_pad("4").unwrap();
        let p5 = pattern.get_pad("5").unwrap();
        assert!(p1.x < 0.0 && p1.y < 0.0);
        assert!((p4.y - 3.0 * 1.27 - p1.y).abs() < 1e-9);
        assert!((p5.x + p4.x).abs() < 1e-9 && (p5.y - p4.y).abs() < 1e-9);
    }

    #[test]
    fn odd_lead_count_is_rejected() {
        let settings = Settings::default();
        let mut pattern = Pattern::new("", &settings);
        let housing = Housing {
            lead_count: 7,
            ..soic8()
        };
        let err = build(&mut pattern, &housing, "SOIC").unwrap_err();
        assert!(matches!(err, GenerateError::InvalidLeadCount { count: 7, .. }));
        assert_eq!(pattern.pad_count(), 0);
    }

    #[test]
    fn tab_is_numbered_after_leads() {
        let settings = Settings::default();
        let mut pattern = Pattern::new("", &settings);
        let housing = Housing {
            tab_width: Some(Dimension::exact(2.3)),
            tab_length: Some(Dimension::exact(3.0)),
            ..soic8()
        };
        build(&mut pattern, &housing, "SOIC").unwrap();
        let tab = pattern.get_pad("9").unwrap();
        assert!(tab.x.abs() < 1e-9 && tab.y.abs() < 1e-9);
    }
}

//! Request pipeline: element in, footprint file out.
//!
//! ```text
//! Element ──normalize──▶ Housing ──PackageFamily::build──▶ Pattern ──kicad──▶ file
//! ```
//!
//! A request owns its settings, housing and pattern; nothing is shared
//! between requests and nothing is written until the pattern is complete.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::{Element, Settings};
use crate::error::GenerateResult;
use crate::housing::Housing;
use crate::ipc7351::PackageFamily;
use crate::kicad;
use crate::pattern::Pattern;

/// Normalizes the element's housing for `family`, applying the family's
/// implied flags.
///
/// # Errors
///
/// Returns [`crate::error::GenerateError::InvalidDimension`] for a
/// dimension with `min > nom` or `nom > max`.
pub fn housing_for(family: PackageFamily, element: &Element) -> GenerateResult<Housing> {
    Housing::normalize(&element.housing, family.implied_flags())
}

/// Builds the pattern for `element` with already resolved `settings`.
///
/// # Errors
///
/// Returns an error for invalid dimensions or a housing that does not fit
/// the family.
pub fn build_pattern<'a>(
    family: PackageFamily,
    element: &Element,
    settings: &'a Settings,
) -> GenerateResult<Pattern<'a>> {
    let housing = housing_for(family, element)?;
    debug!(%family, flags = ?housing.flags, "building pattern");

    let mut pattern = Pattern::new(element.name.clone().unwrap_or_default(), settings);
    family.build(&mut pattern, &housing)?;

    debug!(
        name = pattern.name(),
        pads = pattern.pad_count(),
        shapes = pattern.shapes().len(),
        "pattern built"
    );
    Ok(pattern)
}

/// Builds the pattern and writes `<out_dir>/<name>.kicad_mod`.
///
/// `base` is used unless the element carries its own `library.pattern`
/// settings.
///
/// # Errors
///
/// Returns an error if the settings are invalid, the pattern cannot be
/// built, or the file cannot be written.
pub fn generate_footprint(
    family: PackageFamily,
    element: &Element,
    base: &Settings,
    out_dir: &Path,
) -> GenerateResult<PathBuf> {
    let settings = element.settings(base)?;
    let pattern = build_pattern(family, element, &settings)?;
    let path = kicad::write_footprint(&pattern, out_dir)?;
    info!(path = %path.display(), "footprint generated");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenerateError;

    fn element(json: &str) -> Element {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn implied_flags_reach_the_housing() {
        let element = element(r#"{ "housing": { "leadCount": 3 } }"#);
        let housing = housing_for(PackageFamily::Sot23, &element).unwrap();
        assert!(housing.has(PackageFamily::Sot23.implied_flags()));
    }

    #[test]
    fn explicit_name_wins() {
        let element = element(
            r#"{
                "name": "R_0603",
                "housing": {
                    "bodyLength": { "min": 1.5, "max": 1.7 },
                    "bodyWidth": { "min": 0.7, "max": 0.9 },
                    "height": { "max": 0.55 },
                    "leadLength": { "min": 0.2, "max": 0.4 }
                }
            }"#,
        );
        let settings = Settings::default();
        let pattern = build_pattern(PackageFamily::Chip, &element, &settings).unwrap();
        assert_eq!(pattern.name(), "R_0603");
    }

    #[test]
    fn disordered_dimension_fails_before_building() {
        let element = element(r#"{ "housing": { "bodyLength": { "min": 2.0, "max": 1.0 } } }"#);
        let settings = Settings::default();
        let err = build_pattern(PackageFamily::Chip, &element, &settings).unwrap_err();
        assert!(matches!(err, GenerateError::InvalidDimension { .. }));
    }
}

//! Generation settings.
//!
//! These structures map directly to the `library.pattern` block of an element
//! description and to the `pattern` block of the tool settings file. Every
//! field has a default, so a partial block only overrides what it names.

use serde::Deserialize;

use crate::error::ConfigError;
use crate::ipc7351::density::DensityLevel;

/// Settings resolved once per generation request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Style name. Only `default` is defined.
    pub style: String,

    /// IPC-7351 density level.
    #[serde(deserialize_with = "deserialize_density")]
    pub density_level: DensityLevel,

    /// Decimal places used for every serialized coordinate.
    pub decimals: u32,

    /// Pin 1 marker style.
    pub polarity_mark: PolarityMark,

    /// Prefer manufacturer recommended land patterns when given.
    pub prefer_manufacturer: bool,

    /// Emit rounded-rectangle pads instead of plain rectangles.
    pub smooth_pad_corners: bool,

    pub tolerance: ToleranceSettings,
    pub clearance: ClearanceSettings,
    pub ratio: RatioSettings,
    pub minimum: MinimumSettings,
    pub maximum: MaximumSettings,
    pub line_width: LineWidthSettings,
    pub font_size: FontSizeSettings,
    pub ball: BallSettings,
    pub roundoff: RoundoffSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            style: "default".to_string(),
            density_level: DensityLevel::Nominal,
            decimals: 3,
            polarity_mark: PolarityMark::Dot,
            prefer_manufacturer: true,
            smooth_pad_corners: false,
            tolerance: ToleranceSettings::default(),
            clearance: ClearanceSettings::default(),
            ratio: RatioSettings::default(),
            minimum: MinimumSettings::default(),
            maximum: MaximumSettings::default(),
            line_width: LineWidthSettings::default(),
            font_size: FontSizeSettings::default(),
            ball: BallSettings::default(),
            roundoff: RoundoffSettings::default(),
        }
    }
}

impl Settings {
    /// Validates the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if any validation checks fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.decimals > 6 {
            return Err(ConfigError::ValidationError {
                message: format!("decimals must be between 0 and 6, got {}", self.decimals),
            });
        }

        let widths = [
            ("lineWidth.default", self.line_width.default),
            ("lineWidth.silkscreen", self.line_width.silkscreen),
            ("lineWidth.assembly", self.line_width.assembly),
            ("lineWidth.courtyard", self.line_width.courtyard),
        ];
        for (name, value) in widths {
            if value <= 0.0 {
                return Err(ConfigError::ValidationError {
                    message: format!("{name} must be positive, got {value}"),
                });
            }
        }

        let clearances = [
            ("clearance.padToSilk", self.clearance.pad_to_silk),
            ("clearance.silkToPad", self.clearance.silk_to_pad),
            ("clearance.padToPad", self.clearance.pad_to_pad),
            ("clearance.padToMask", self.clearance.pad_to_mask),
            ("clearance.leadToHole", self.clearance.lead_to_hole),
        ];
        for (name, value) in clearances {
            if value < 0.0 {
                return Err(ConfigError::ValidationError {
                    message: format!("{name} must not be negative, got {value}"),
                });
            }
        }

        if self.roundoff.size <= 0.0 || self.roundoff.place <= 0.0 {
            return Err(ConfigError::ValidationError {
                message: "roundoff steps must be positive".to_string(),
            });
        }

        Ok(())
    }

    /// Smallest representable length at the configured precision.
    #[must_use]
    pub fn resolution(&self) -> f64 {
        10f64.powi(-i32::try_from(self.decimals).unwrap_or(3))
    }
}

fn deserialize_density<'de, D>(deserializer: D) -> Result<DensityLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    DensityLevel::from_str_loose(&s).ok_or_else(|| {
        serde::de::Error::custom(format!(
            "invalid density level '{s}', expected one of: L, N, M"
        ))
    })
}

/// Pin 1 marker style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolarityMark {
    /// Filled dot next to pin 1.
    #[default]
    Dot,
    /// No marker.
    None,
}

/// Manufacturing tolerances in mm.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ToleranceSettings {
    pub default: f64,
    /// Board fabrication tolerance (F).
    pub fabrication: f64,
    /// Part placement tolerance (P).
    pub placement: f64,
}

impl Default for ToleranceSettings {
    fn default() -> Self {
        Self {
            default: 0.1,
            fabrication: 0.1,
            placement: 0.1,
        }
    }
}

/// Clearances in mm.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClearanceSettings {
    pub pad_to_silk: f64,
    pub silk_to_pad: f64,
    pub pad_to_pad: f64,
    pub pad_to_mask: f64,
    pub lead_to_hole: f64,
    /// Courtyard excess override; the density table applies when absent.
    pub courtyard: Option<f64>,
}

impl Default for ClearanceSettings {
    fn default() -> Self {
        Self {
            pad_to_silk: 0.2,
            silk_to_pad: 0.2,
            pad_to_pad: 0.2,
            pad_to_mask: 0.0,
            lead_to_hole: 0.1,
            courtyard: None,
        }
    }
}

/// Dimensionless ratios.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RatioSettings {
    pub pad_to_hole: f64,
    /// Corner radius as a fraction of the smaller pad side.
    pub corner_to_width: f64,
}

impl Default for RatioSettings {
    fn default() -> Self {
        Self {
            pad_to_hole: 1.5,
            corner_to_width: 0.25,
        }
    }
}

/// Lower limits in mm.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MinimumSettings {
    pub ring_width: f64,
    pub hole_diameter: f64,
    /// Thinnest solder mask web that can be manufactured.
    pub mask_width: f64,
    pub space_for_iron: f64,
}

impl Default for MinimumSettings {
    fn default() -> Self {
        Self {
            ring_width: 0.2,
            hole_diameter: 0.2,
            mask_width: 0.2,
            space_for_iron: 0.0,
        }
    }
}

/// Upper limits in mm.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MaximumSettings {
    pub corner_radius: f64,
}

impl Default for MaximumSettings {
    fn default() -> Self {
        Self { corner_radius: 0.2 }
    }
}

/// Line widths per layer in mm.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LineWidthSettings {
    pub default: f64,
    pub silkscreen: f64,
    pub assembly: f64,
    pub courtyard: f64,
}

impl Default for LineWidthSettings {
    fn default() -> Self {
        Self {
            default: 0.2,
            silkscreen: 0.12,
            assembly: 0.1,
            courtyard: 0.05,
        }
    }
}

/// Font sizes in mm.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FontSizeSettings {
    pub default: f64,
    pub ref_des: f64,
    pub value: f64,
}

impl Default for FontSizeSettings {
    fn default() -> Self {
        Self {
            default: 1.0,
            ref_des: 1.2,
            value: 1.0,
        }
    }
}

/// BGA ball options.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BallSettings {
    /// Balls collapse during reflow (lands are reduced instead of enlarged).
    pub collapsible: bool,
}

impl Default for BallSettings {
    fn default() -> Self {
        Self { collapsible: true }
    }
}

/// Rounding steps applied to calculated pad sizes and positions, in mm.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RoundoffSettings {
    pub size: f64,
    pub place: f64,
}

impl Default for RoundoffSettings {
    fn default() -> Self {
        Self {
            size: 0.01,
            place: 0.01,
        }
    }
}

//! Component housing descriptions.
//!
//! Housings arrive as [`RawHousing`] straight from the input JSON: every
//! dimension optional, partially specified, flags as loose booleans. A
//! [`Housing`] is the normalized form the calculator consumes: each present
//! dimension resolved to a full [`Dimension`], derived fields backfilled and
//! family flags merged in. Both stages are pure; nothing mutates a housing
//! after it has been built.

mod dimension;

pub use dimension::{rss, Dimension};

use bitflags::bitflags;
use serde::Deserialize;
use tracing::warn;

use crate::error::{GenerateError, GenerateResult};

bitflags! {
    /// Feature flags describing a housing variant.
    ///
    /// Some are set by the input description, others are implied by the
    /// package family (see [`crate::ipc7351::packages::PackageFamily::implied_flags`]).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct HousingFlags: u32 {
        /// Pin 1 must be marked.
        const POLARIZED = 1 << 0;
        /// Rectangular chip component (resistor, capacitor).
        const CHIP = 1 << 1;
        /// Aluminium electrolytic capacitor.
        const CAE = 1 << 2;
        /// Flat leads (SOTFL, SOD-123F).
        const FLATLEAD = 1 << 3;
        /// J-leads (SOJ).
        const SOJ = 1 << 4;
        /// SOT-23 outline conventions.
        const SOT23 = 1 << 5;
        /// Small outline package conventions.
        const SOP = 1 << 6;
        /// Small outline no-lead.
        const SON = 1 << 7;
        /// Quad flat no-lead.
        const QFN = 1 << 8;
        /// Quad flat package.
        const QFP = 1 << 9;
        /// Side-concave chip array terminations.
        const CONCAVE = 1 << 10;
        /// Side-flat chip array terminations.
        const FLAT = 1 << 11;
        /// Convex chip array terminations.
        const CONVEX = 1 << 12;
        /// Terminations at the body corners.
        const CORNER_CONCAVE = 1 << 13;
        /// DFN variant of a family.
        const DFN = 1 << 14;
        /// Suppress the silkscreen outline.
        const NOSILK = 1 << 15;
        /// Molded body with inward L-leads (SOD, SMA).
        const MOLDED = 1 << 16;
    }
}

/// A dimension as written in the input: a bare number or any subset of
/// `{min, nom, max, tol}`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DimensionInput {
    /// A single exact value.
    Value(f64),
    /// A partially specified range.
    Range {
        /// Minimum value.
        #[serde(default)]
        min: Option<f64>,
        /// Nominal value.
        #[serde(default)]
        nom: Option<f64>,
        /// Maximum value.
        #[serde(default)]
        max: Option<f64>,
        /// Total tolerance band.
        #[serde(default)]
        tol: Option<f64>,
    },
}

impl DimensionInput {
    /// Resolves the input to a full dimension.
    ///
    /// A missing nominal is the midpoint of the bounds when both exist,
    /// otherwise the first of `max`, `min`, `0` that is present. Missing
    /// bounds come from the nominal and `tol` when given, otherwise equal
    /// the nominal. The representative value follows [`Self::pick`].
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidDimension`] if the resolved values
    /// violate `min <= nom <= max`.
    pub fn resolve(&self, field: &str) -> GenerateResult<Dimension> {
        let dim = match *self {
            Self::Value(v) => Dimension::exact(v),
            Self::Range { min, nom, max, tol } => {
                let nom = match (nom, min, max, tol) {
                    (Some(n), ..) => n,
                    (None, Some(lo), Some(hi), _) => (lo + hi) / 2.0,
                    (None, Some(lo), None, Some(t)) => lo + t / 2.0,
                    (None, None, Some(hi), Some(t)) => hi - t / 2.0,
                    (None, lo, hi, _) => hi.or(lo).unwrap_or(0.0),
                };
                let half = tol.map_or(0.0, |t| t / 2.0);
                Dimension::new(min.unwrap_or(nom - half), nom, max.unwrap_or(nom + half))
                    .with_pick(self.pick())
            }
        };

        if dim.is_ordered() {
            Ok(dim)
        } else {
            Err(GenerateError::invalid_dimension(
                field,
                format!("expected min <= nom <= max, got {} / {} / {}", dim.min, dim.nom, dim.max),
            ))
        }
    }

    /// Picks a single representative value: nominal, then max, then min, then 0.
    #[must_use]
    pub fn pick(&self) -> f64 {
        match *self {
            Self::Value(v) => v,
            Self::Range { min, nom, max, .. } => nom.or(max).or(min).unwrap_or(0.0),
        }
    }
}

/// Housing exactly as described by the input JSON.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawHousing {
    pub body_width: Option<DimensionInput>,
    pub body_length: Option<DimensionInput>,
    pub body_diameter: Option<DimensionInput>,
    pub height: Option<DimensionInput>,
    pub lead_span: Option<DimensionInput>,
    pub lead_length: Option<DimensionInput>,
    pub lead_width: Option<DimensionInput>,
    pub lead_width1: Option<DimensionInput>,
    pub lead_width2: Option<DimensionInput>,
    pub lead_space: Option<DimensionInput>,
    pub row_span: Option<DimensionInput>,
    pub column_span: Option<DimensionInput>,
    pub ball_diameter: Option<DimensionInput>,
    pub tab_width: Option<DimensionInput>,
    pub tab_length: Option<DimensionInput>,
    pub large_pad_width: Option<DimensionInput>,
    pub large_pad_length: Option<DimensionInput>,
    pub pull_back: Option<DimensionInput>,

    pub lead_count: Option<u32>,
    pub row_count: Option<u32>,
    pub column_count: Option<u32>,
    pub pitch: Option<f64>,
    pub pitch1: Option<f64>,
    pub pitch2: Option<f64>,
    pub horizontal_pitch: Option<f64>,
    pub vertical_pitch: Option<f64>,
    pub balls_missing: Vec<String>,

    /// Courtyard clearance override in mm.
    pub courtyard: Option<f64>,
    /// Naming prefix override (e.g. `ICSOFL` / `TRXSOFL`).
    pub component_type: Option<String>,

    pub polarized: bool,
    pub chip: bool,
    pub flatlead: bool,
    pub concave: bool,
    pub flat: bool,
    pub convex: bool,
    pub nosilk: bool,
    pub dfn: bool,
    #[serde(rename = "corner-concave")]
    pub corner_concave: bool,
    #[serde(rename = "side-concave")]
    pub side_concave: bool,
    #[serde(rename = "side-flat")]
    pub side_flat: bool,
}

impl RawHousing {
    /// Collects the boolean flags of the input.
    #[must_use]
    pub fn flags(&self) -> HousingFlags {
        let mut flags = HousingFlags::empty();
        flags.set(HousingFlags::POLARIZED, self.polarized);
        flags.set(HousingFlags::CHIP, self.chip);
        flags.set(HousingFlags::FLATLEAD, self.flatlead);
        flags.set(HousingFlags::CONCAVE, self.concave || self.side_concave);
        flags.set(HousingFlags::FLAT, self.flat || self.side_flat);
        flags.set(HousingFlags::CONVEX, self.convex);
        flags.set(HousingFlags::NOSILK, self.nosilk);
        flags.set(HousingFlags::DFN, self.dfn);
        flags.set(HousingFlags::CORNER_CONCAVE, self.corner_concave);
        flags
    }
}

/// Normalized housing consumed by the calculator and layer generators.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Housing {
    pub body_width: Option<Dimension>,
    pub body_length: Option<Dimension>,
    pub body_diameter: Option<Dimension>,
    pub height: Option<Dimension>,
    pub lead_span: Option<Dimension>,
    pub lead_length: Option<Dimension>,
    pub lead_width: Option<Dimension>,
    pub lead_width1: Option<Dimension>,
    pub lead_width2: Option<Dimension>,
    pub lead_space: Option<Dimension>,
    pub row_span: Option<Dimension>,
    pub column_span: Option<Dimension>,
    pub ball_diameter: Option<Dimension>,
    pub tab_width: Option<Dimension>,
    pub tab_length: Option<Dimension>,
    pub large_pad_width: Option<Dimension>,
    pub large_pad_length: Option<Dimension>,
    pub pull_back: Option<Dimension>,

    /// Number of leads; 0 when the input did not say.
    pub lead_count: u32,
    pub row_count: u32,
    pub column_count: u32,
    /// Lead pitch in mm; 0 when absent.
    pub pitch: f64,
    pub pitch1: f64,
    pub pitch2: f64,
    pub horizontal_pitch: f64,
    pub vertical_pitch: f64,
    pub balls_missing: Vec<String>,

    pub courtyard: Option<f64>,
    pub component_type: Option<String>,
    pub flags: HousingFlags,
}

fn resolve(field: &str, input: Option<&DimensionInput>) -> GenerateResult<Option<Dimension>> {
    input.map(|d| d.resolve(field)).transpose()
}

impl Housing {
    /// Normalizes a raw housing and merges in the family's implied flags.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidDimension`] for any dimension whose
    /// values are out of order.
    pub fn normalize(raw: &RawHousing, implied: HousingFlags) -> GenerateResult<Self> {
        let housing = Self {
            body_width: resolve("bodyWidth", raw.body_width.as_ref())?,
            body_length: resolve("bodyLength", raw.body_length.as_ref())?,
            body_diameter: resolve("bodyDiameter", raw.body_diameter.as_ref())?,
            height: resolve("height", raw.height.as_ref())?,
            lead_span: resolve("leadSpan", raw.lead_span.as_ref())?,
            lead_length: resolve("leadLength", raw.lead_length.as_ref())?,
            lead_width: resolve("leadWidth", raw.lead_width.as_ref())?,
            lead_width1: resolve("leadWidth1", raw.lead_width1.as_ref())?,
            lead_width2: resolve("leadWidth2", raw.lead_width2.as_ref())?,
            lead_space: resolve("leadSpace", raw.lead_space.as_ref())?,
            row_span: resolve("rowSpan", raw.row_span.as_ref())?,
            column_span: resolve("columnSpan", raw.column_span.as_ref())?,
            ball_diameter: resolve("ballDiameter", raw.ball_diameter.as_ref())?,
            tab_width: resolve("tabWidth", raw.tab_width.as_ref())?,
            tab_length: resolve("tabLength", raw.tab_length.as_ref())?,
            large_pad_width: resolve("largePadWidth", raw.large_pad_width.as_ref())?,
            large_pad_length: resolve("largePadLength", raw.large_pad_length.as_ref())?,
            pull_back: resolve("pullBack", raw.pull_back.as_ref())?,
            lead_count: raw.lead_count.unwrap_or(0),
            row_count: raw.row_count.unwrap_or(0),
            column_count: raw.column_count.unwrap_or(0),
            pitch: raw.pitch.unwrap_or(0.0),
            pitch1: raw.pitch1.unwrap_or(0.0),
            pitch2: raw.pitch2.unwrap_or(0.0),
            horizontal_pitch: raw.horizontal_pitch.unwrap_or(0.0),
            vertical_pitch: raw.vertical_pitch.unwrap_or(0.0),
            balls_missing: raw.balls_missing.clone(),
            courtyard: raw.courtyard,
            component_type: raw.component_type.clone(),
            flags: raw.flags() | implied,
        };

        Ok(housing.backfill())
    }

    /// Derives missing fields from the ones present.
    ///
    /// - lead span from lead length and lead space, with the length and
    ///   space tolerances combined root-sum-square
    /// - lead length from lead span and lead space
    /// - per-side lead widths from the common lead width
    ///
    /// Only absent fields are written, so the result does not depend on the
    /// order of derivations and a second call changes nothing.
    #[must_use]
    pub fn backfill(mut self) -> Self {
        match (self.lead_span, self.lead_length, self.lead_space) {
            (None, Some(length), Some(space)) => {
                let nom = 2.0f64.mul_add(length.nom, space.nom);
                let tol = rss(&[length.tolerance(), space.tolerance()]);
                self.lead_span = Some(Dimension::with_tolerance(nom, tol));
            }
            (Some(span), None, Some(space)) => {
                self.lead_length = Some(span.difference(&space).scale(0.5));
            }
            _ => {}
        }
        if self.lead_width1.is_none() {
            self.lead_width1 = self.lead_width;
        }
        if self.lead_width2.is_none() {
            self.lead_width2 = self.lead_width;
        }
        self
    }

    /// Returns `true` if all of `flags` are set.
    #[must_use]
    pub const fn has(&self, flags: HousingFlags) -> bool {
        self.flags.contains(flags)
    }

    /// Returns a copy of this housing with extra flags set.
    #[must_use]
    pub fn with_flags(&self, flags: HousingFlags) -> Self {
        let mut housing = self.clone();
        housing.flags |= flags;
        housing
    }

    /// Returns a required dimension, or an exact zero with a warning when absent.
    #[must_use]
    pub fn require(field: &str, value: Option<Dimension>) -> Dimension {
        value.unwrap_or_else(|| {
            warn!(field, "missing dimension resolved to 0");
            Dimension::default()
        })
    }

    /// Nominal body width (X extent for dual packages), 0 when absent.
    #[must_use]
    pub fn body_width_nom(&self) -> f64 {
        self.body_width.map_or(0.0, |d| d.nom)
    }

    /// Nominal body length (Y extent for dual packages), 0 when absent.
    #[must_use]
    pub fn body_length_nom(&self) -> f64 {
        self.body_length.map_or(0.0, |d| d.nom)
    }

    /// Maximum component height, 0 when absent.
    #[must_use]
    pub fn height_max(&self) -> f64 {
        self.height.map_or(0.0, |d| d.max)
    }
}

//! IPC-7351B pad geometry calculator.
//!
//! Every function here is pure: it reads a normalized [`Housing`] and the
//! request [`Settings`] and returns a parameter record. Pad placement is left
//! to the package builders.
//!
//! # Land Pattern Calculation
//!
//! For a lead span `L`, lead length `T` and lead width `W`:
//!
//! - `S_min = L_min - 2 T_max`, `S_max = L_max - 2 T_min`
//! - `S_tol(rms) = sqrt(L_tol² + 2 T_tol²)`
//! - `S_max(rms) = S_max - (S_tol - S_tol(rms)) / 2`
//! - `Z_max = L_min + 2 Jt + rss(L_tol, F, P)` (outer land span)
//! - `G_min = S_max(rms) - 2 Jh - rss(S_tol(rms), F, P)` (inner gap)
//! - `X_max = W_min + 2 Js + rss(W_tol, F, P)` (land width)
//!
//! where `F` is the fabrication and `P` the placement tolerance. The pad
//! length along the lead is `(Z - G) / 2`, its centre sits at `(Z + G) / 4`.

use tracing::{trace, warn};

use crate::config::Settings;
use crate::error::{GenerateError, GenerateResult};
use crate::housing::{rss, Dimension, Housing, HousingFlags};
use crate::ipc7351::density::{CourtyardExcess, SolderFilletGoals};
use crate::pattern::geometry::{round_to, round_up_to};

/// Pitch at or below which gull-wing leads use the fine pitch fillet table.
const FINE_PITCH: f64 = 0.625;

/// Pad geometry for a symmetric row pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PadParams {
    /// Pad size along the lead (mm).
    pub width: f64,
    /// Pad size across the lead (mm).
    pub height: f64,
    /// Centre-to-centre distance between opposite pads (mm).
    pub distance: f64,
    /// Half extent of the pad envelope plus the courtyard excess (mm).
    pub courtyard: f64,
    /// Courtyard excess applied around body and pads (mm).
    pub excess: f64,
}

/// Pad geometry for SOT-style packages with different lead widths per side.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SotParams {
    pub width1: f64,
    pub height1: f64,
    pub width2: f64,
    pub height2: f64,
    pub distance: f64,
    pub courtyard: f64,
    pub excess: f64,
}

/// Pad geometry for packages with terminations at the body corners.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CornerConcaveParams {
    pub width: f64,
    pub height: f64,
    /// Pad centre distance along X.
    pub distance1: f64,
    /// Pad centre distance along Y.
    pub distance2: f64,
    pub courtyard: f64,
    pub excess: f64,
}

/// Pad geometry for quad packages, one record per axis.
///
/// Both records are oriented along their leads: `row` pads sit left and
/// right of the body, `column` pads above and below it, with `width`
/// measured toward the body centre.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct QuadParams {
    pub row: PadParams,
    pub column: PadParams,
    pub courtyard: f64,
    pub excess: f64,
}

/// Land geometry for ball grid arrays.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BallParams {
    /// Land diameter (mm).
    pub diameter: f64,
    pub courtyard: f64,
    pub excess: f64,
}

/// Fillet table selector for dual-row packages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DualVariant {
    /// Gull-wing leads (SOIC, SOP).
    Gullwing,
    /// Flat leads (SOTFL).
    FlatLead,
    /// J-leads (SOJ).
    JLead,
    /// Chip array terminations, measured across the body width.
    ChipArray(ChipArrayKind),
}

/// Chip array termination style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipArrayKind {
    Concave,
    Convex,
    Flat,
}

impl ChipArrayKind {
    /// Picks the termination style from housing flags. An explicit `convex`
    /// wins over the side flags; without any, terminations are convex.
    #[must_use]
    pub const fn from_flags(flags: HousingFlags) -> Self {
        if flags.contains(HousingFlags::CONVEX) {
            Self::Convex
        } else if flags.contains(HousingFlags::CONCAVE) {
            Self::Concave
        } else if flags.contains(HousingFlags::FLAT) {
            Self::Flat
        } else {
            Self::Convex
        }
    }

    const fn goals(self, settings: &Settings) -> SolderFilletGoals {
        let density = settings.density_level;
        match self {
            Self::Concave => SolderFilletGoals::for_concave(density),
            Self::Convex => SolderFilletGoals::for_convex(density),
            Self::Flat => SolderFilletGoals::for_flat(density),
        }
    }
}

/// Lead geometry fed into the IPC formulas.
#[derive(Debug, Clone, Copy)]
struct LeadInput {
    span: Dimension,
    length: Dimension,
    width: Dimension,
}

/// Raw IPC result before pad-to-pad adjustments.
#[derive(Debug, Clone, Copy)]
struct Lands {
    width: f64,
    height: f64,
    distance: f64,
}

fn ipc_lands(settings: &Settings, input: LeadInput, goals: SolderFilletGoals) -> Lands {
    let f = settings.tolerance.fabrication;
    let p = settings.tolerance.placement;
    let LeadInput {
        span: l,
        length: t,
        width: w,
    } = input;

    let s_min = 2.0f64.mul_add(-t.max, l.min);
    let s_max = 2.0f64.mul_add(-t.min, l.max);
    let s_tol = s_max - s_min;
    let s_tol_rms = 2.0f64
        .mul_add(t.tolerance().powi(2), l.tolerance().powi(2))
        .sqrt();
    let s_max_rms = s_max - (s_tol - s_tol_rms) / 2.0;

    let z_max = 2.0f64.mul_add(goals.toe, l.min) + rss(&[l.tolerance(), f, p]);
    let g_min = 2.0f64.mul_add(-goals.heel, s_max_rms) - rss(&[s_tol_rms, f, p]);
    let x_max = 2.0f64.mul_add(goals.side, w.min) + rss(&[w.tolerance(), f, p]);

    trace!(z_max, g_min, x_max, s_min, s_max, s_max_rms, "ipc land values");

    let roundoff = &settings.roundoff;
    Lands {
        width: round_up_to((z_max - g_min) / 2.0, roundoff.size),
        height: round_up_to(x_max, roundoff.size),
        distance: round_to((z_max + g_min) / 2.0, roundoff.place),
    }
}

impl Lands {
    /// Keeps the gap between opposite pads at `pad_to_pad` or more by
    /// pulling the inner edges outward.
    fn keep_gap(mut self, pad_to_pad: f64) -> Self {
        if self.distance - self.width < pad_to_pad {
            let outer = self.distance / 2.0 + self.width / 2.0;
            self.width = outer - pad_to_pad / 2.0;
            self.distance = outer + pad_to_pad / 2.0;
            trace!(width = self.width, distance = self.distance, "pad gap widened");
        }
        self
    }

    /// Limits the pad height so neighbours along a row keep `pad_to_pad`.
    fn clamp_to_pitch(mut self, pitch: f64, pad_to_pad: f64) -> Self {
        let limit = pitch - pad_to_pad;
        if pitch > 0.0 && self.height > limit && limit > 0.0 {
            warn!(height = self.height, limit, "pad height clamped to pitch");
            self.height = limit;
        }
        self
    }

    fn into_params(self, excess: f64) -> PadParams {
        let envelope = (self.distance / 2.0 + self.width / 2.0).max(self.height / 2.0);
        PadParams {
            width: self.width,
            height: self.height,
            distance: self.distance,
            courtyard: envelope + excess,
            excess,
        }
    }
}

/// Courtyard excess: housing override, then settings override, then the
/// density table.
#[must_use]
pub fn courtyard_excess(settings: &Settings, housing: &Housing) -> f64 {
    housing
        .courtyard
        .or(settings.clearance.courtyard)
        .unwrap_or_else(|| CourtyardExcess::for_density(settings.density_level).excess)
}

/// Two-terminal parts: chips, MELFs, molded bodies and electrolytic capacitors.
///
/// Chips are measured over the body length with the terminal as lead;
/// molded bodies and CAE use the lead span.
#[must_use]
pub fn two_pin(settings: &Settings, housing: &Housing) -> PadParams {
    let density = settings.density_level;
    let length = Housing::require("leadLength", housing.lead_length);

    let (input, goals) = if housing.has(HousingFlags::CAE) {
        let input = LeadInput {
            span: Housing::require("leadSpan", housing.lead_span),
            length,
            width: Housing::require("leadWidth", housing.lead_width),
        };
        (input, SolderFilletGoals::for_cae(density))
    } else if housing.has(HousingFlags::MOLDED) {
        let input = LeadInput {
            span: Housing::require("leadSpan", housing.lead_span.or(housing.body_length)),
            length,
            width: Housing::require("leadWidth", housing.lead_width),
        };
        (input, SolderFilletGoals::for_molded_body(density))
    } else if let Some(diameter) = housing.body_diameter {
        let input = LeadInput {
            span: Housing::require("bodyLength", housing.body_length),
            length,
            width: diameter,
        };
        (input, SolderFilletGoals::for_melf(density))
    } else {
        let body_length = Housing::require("bodyLength", housing.body_length);
        let goals = if body_length.nom < 1.6 {
            SolderFilletGoals::for_small_chip(density)
        } else {
            SolderFilletGoals::for_chip(density)
        };
        let input = LeadInput {
            span: body_length,
            length,
            width: Housing::require("bodyWidth", housing.lead_width.or(housing.body_width)),
        };
        (input, goals)
    };

    ipc_lands(settings, input, goals)
        .keep_gap(settings.clearance.pad_to_pad)
        .into_params(courtyard_excess(settings, housing))
}

/// Dual-row packages (SOIC, SOP, SOJ, SOTFL, chip arrays).
#[must_use]
pub fn dual(settings: &Settings, housing: &Housing, variant: DualVariant) -> PadParams {
    let density = settings.density_level;
    let pitch = housing.pitch;

    let goals = match variant {
        DualVariant::Gullwing if pitch > 0.0 && pitch <= FINE_PITCH => {
            SolderFilletGoals::for_fine_pitch_gull_wing(density)
        }
        DualVariant::Gullwing => SolderFilletGoals::for_gull_wing(density),
        DualVariant::FlatLead => SolderFilletGoals::for_flat_lead(density),
        DualVariant::JLead => SolderFilletGoals::for_j_lead(density),
        DualVariant::ChipArray(kind) => kind.goals(settings),
    };

    let span = match variant {
        DualVariant::ChipArray(_) => Housing::require("bodyWidth", housing.body_width),
        _ => Housing::require("leadSpan", housing.lead_span),
    };
    let input = LeadInput {
        span,
        length: Housing::require("leadLength", housing.lead_length),
        width: Housing::require("leadWidth", housing.lead_width),
    };

    let pad_to_pad = settings.clearance.pad_to_pad;
    ipc_lands(settings, input, goals)
        .keep_gap(pad_to_pad)
        .clamp_to_pitch(pitch, pad_to_pad)
        .into_params(courtyard_excess(settings, housing))
}

/// Small outline no-lead packages.
///
/// The terminals end at the body edge less any pull-back, so the span is
/// the body width.
#[must_use]
pub fn son(settings: &Settings, housing: &Housing) -> PadParams {
    let body_width = Housing::require("bodyWidth", housing.body_width);
    let span = housing
        .pull_back
        .map_or(body_width, |pb| body_width.difference(&pb.scale(2.0)));

    let input = LeadInput {
        span,
        length: Housing::require("leadLength", housing.lead_length),
        width: Housing::require("leadWidth", housing.lead_width),
    };

    let pad_to_pad = settings.clearance.pad_to_pad;
    ipc_lands(settings, input, SolderFilletGoals::for_no_lead(settings.density_level))
        .keep_gap(pad_to_pad)
        .clamp_to_pitch(housing.pitch, pad_to_pad)
        .into_params(courtyard_excess(settings, housing))
}

/// SOT-23 style packages with independent lead widths per side.
///
/// # Errors
///
/// Returns [`GenerateError::InvalidLeadCount`] unless the housing has
/// 3, 5 or 6 leads.
pub fn sot(settings: &Settings, housing: &Housing) -> GenerateResult<SotParams> {
    if !matches!(housing.lead_count, 3 | 5 | 6) {
        return Err(GenerateError::invalid_lead_count(
            "SOT",
            housing.lead_count,
            "3, 5 or 6",
        ));
    }

    let density = settings.density_level;
    let goals = if housing.has(HousingFlags::FLATLEAD) {
        SolderFilletGoals::for_flat_lead(density)
    } else if housing.pitch <= FINE_PITCH {
        SolderFilletGoals::for_fine_pitch_gull_wing(density)
    } else {
        SolderFilletGoals::for_gull_wing(density)
    };

    let span = Housing::require("leadSpan", housing.lead_span);
    let length = Housing::require("leadLength", housing.lead_length);
    let pad_to_pad = settings.clearance.pad_to_pad;

    let side = |width: Option<Dimension>| {
        let input = LeadInput {
            span,
            length,
            width: Housing::require("leadWidth", width),
        };
        ipc_lands(settings, input, goals)
            .keep_gap(pad_to_pad)
            .clamp_to_pitch(housing.pitch, pad_to_pad)
    };
    let first = side(housing.lead_width1);
    let second = side(housing.lead_width2);

    let excess = courtyard_excess(settings, housing);
    let envelope = (first.distance / 2.0 + first.width.max(second.width) / 2.0)
        .max(first.height.max(second.height) / 2.0);

    Ok(SotParams {
        width1: first.width,
        height1: first.height,
        width2: second.width,
        height2: second.height,
        distance: first.distance,
        courtyard: envelope + excess,
        excess,
    })
}

/// Terminations wrapped around the body corners, solved once per axis.
#[must_use]
pub fn corner_concave(settings: &Settings, housing: &Housing) -> CornerConcaveParams {
    let goals = SolderFilletGoals::for_corner_concave(settings.density_level);
    let lead_length = Housing::require("leadLength", housing.lead_length);
    let lead_width = Housing::require("leadWidth", housing.lead_width);
    let pad_to_pad = settings.clearance.pad_to_pad;

    let x = ipc_lands(
        settings,
        LeadInput {
            span: Housing::require("bodyWidth", housing.body_width),
            length: lead_length,
            width: lead_width,
        },
        goals,
    )
    .keep_gap(pad_to_pad);

    let y = ipc_lands(
        settings,
        LeadInput {
            span: Housing::require("bodyLength", housing.body_length),
            length: lead_width,
            width: lead_length,
        },
        goals,
    )
    .keep_gap(pad_to_pad);

    let excess = courtyard_excess(settings, housing);
    let envelope =
        (x.distance / 2.0 + x.width / 2.0).max(y.distance / 2.0 + y.width / 2.0);

    CornerConcaveParams {
        width: x.width,
        height: y.width,
        distance1: x.distance,
        distance2: y.distance,
        courtyard: envelope + excess,
        excess,
    }
}

/// Quad packages (QFN, QFP), solved per axis.
///
/// Row pads use `rowSpan`, column pads `columnSpan`; both fall back to
/// `leadSpan`, and no-lead packages fall back to the body size.
#[must_use]
pub fn quad(settings: &Settings, housing: &Housing) -> QuadParams {
    let density = settings.density_level;
    let no_lead = housing.has(HousingFlags::QFN);
    let goals = if no_lead {
        SolderFilletGoals::for_no_lead(density)
    } else if housing.pitch <= FINE_PITCH {
        SolderFilletGoals::for_fine_pitch_gull_wing(density)
    } else {
        SolderFilletGoals::for_gull_wing(density)
    };

    let pulled = |body: Option<Dimension>| {
        body.map(|b| housing.pull_back.map_or(b, |pb| b.difference(&pb.scale(2.0))))
    };
    let (row_fallback, column_fallback) = if no_lead {
        (pulled(housing.body_width), pulled(housing.body_length))
    } else {
        (housing.lead_span, housing.lead_span)
    };

    let length = Housing::require("leadLength", housing.lead_length);
    let width = Housing::require("leadWidth", housing.lead_width);
    let pad_to_pad = settings.clearance.pad_to_pad;
    let excess = courtyard_excess(settings, housing);

    let axis = |field: &str, span: Option<Dimension>| {
        let input = LeadInput {
            span: Housing::require(field, span),
            length,
            width,
        };
        ipc_lands(settings, input, goals)
            .keep_gap(pad_to_pad)
            .clamp_to_pitch(housing.pitch, pad_to_pad)
            .into_params(excess)
    };

    let row = axis("rowSpan", housing.row_span.or(row_fallback));
    let column = axis("columnSpan", housing.column_span.or(column_fallback));

    QuadParams {
        row,
        column,
        courtyard: row.courtyard.max(column.courtyard),
        excess,
    }
}

/// Ball grid array lands.
///
/// Collapsible balls get a land smaller than the ball, non-collapsible
/// balls a slightly larger one.
#[must_use]
pub fn grid_array(settings: &Settings, housing: &Housing) -> BallParams {
    let ball = Housing::require("ballDiameter", housing.ball_diameter).nom;

    let factor = if settings.ball.collapsible {
        let reduction = if ball >= 0.55 {
            0.25
        } else if ball >= 0.4 {
            0.20
        } else {
            0.15
        };
        1.0 - reduction
    } else {
        1.05
    };
    let diameter = round_to(ball * factor, settings.roundoff.size);

    let excess = housing
        .courtyard
        .or(settings.clearance.courtyard)
        .unwrap_or_else(|| CourtyardExcess::for_grid_array(settings.density_level).excess);
    let half_body = (housing.body_width_nom().max(housing.body_length_nom()) / 2.0)
        .max(diameter / 2.0);

    trace!(ball, diameter, "ball land");

    BallParams {
        diameter,
        courtyard: half_body + excess,
        excess,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ipc7351::density::DensityLevel;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn chip_1005() -> Housing {
        Housing {
            body_length: Some(Dimension::new(0.95, 1.0, 1.05)),
            body_width: Some(Dimension::new(0.45, 0.5, 0.55)),
            lead_length: Some(Dimension::new(0.15, 0.25, 0.35)),
            flags: HousingFlags::CHIP,
            ..Housing::default()
        }
    }

    fn soic8() -> Housing {
        Housing {
            body_width: Some(Dimension::new(3.8, 3.9, 4.0)),
            body_length: Some(Dimension::new(4.8, 4.9, 5.0)),
            lead_span: Some(Dimension::new(5.8, 6.0, 6.2)),
            lead_length: Some(Dimension::new(0.4, 0.835, 1.27)),
            lead_width: Some(Dimension::new(0.31, 0.41, 0.51)),
            lead_count: 8,
            pitch: 1.27,
            ..Housing::default()
        }
    }

    fn sot23(lead_count: u32) -> Housing {
        Housing {
            body_width: Some(Dimension::new(1.2, 1.3, 1.4)),
            body_length: Some(Dimension::new(2.8, 2.9, 3.04)),
            lead_span: Some(Dimension::new(2.1, 2.4, 2.64)),
            lead_length: Some(Dimension::new(0.3, 0.45, 0.6)),
            lead_width: Some(Dimension::new(0.3, 0.4, 0.5)),
            lead_count,
            pitch: 0.95,
            flags: HousingFlags::SOT23,
            ..Housing::default()
        }
        .backfill()
    }

    fn check_envelope(p: &PadParams) {
        assert!(p.width >= 0.0 && p.height >= 0.0 && p.courtyard >= 0.0);
        assert!(p.courtyard >= p.width.max(p.height) / 2.0);
    }

    #[test]
    fn chip_pads_are_positive_and_enclosed() {
        let params = two_pin(&Settings::default(), &chip_1005());
        assert!(params.width > 0.0);
        assert!(params.height > 0.0);
        assert!(params.distance > params.width);
        check_envelope(&params);
        assert!(approx_eq(params.excess, 0.25));
    }

    #[test]
    fn chip_pads_grow_with_density() {
        let housing = chip_1005();
        let at = |density| {
            let settings = Settings {
                density_level: density,
                ..Settings::default()
            };
            two_pin(&settings, &housing)
        };
        let most = at(DensityLevel::Most);
        let least = at(DensityLevel::Least);
        assert!(most.width > least.width);
        assert!(most.courtyard > least.courtyard);
    }

    #[test]
    fn pad_gap_respects_pad_to_pad() {
        let params = two_pin(&Settings::default(), &chip_1005());
        assert!(params.distance - params.width >= 0.2 - 1e-9);
    }

    #[test]
    fn dual_height_fits_pitch() {
        let settings = Settings::default();
        let params = dual(&settings, &soic8(), DualVariant::Gullwing);
        assert!(params.height <= 1.27 - settings.clearance.pad_to_pad + 1e-9);
        check_envelope(&params);
    }

    #[test]
    fn flat_lead_pads_are_shorter() {
        let settings = Settings::default();
        let gull = dual(&settings, &soic8(), DualVariant::Gullwing);
        let flat = dual(&settings, &soic8(), DualVariant::FlatLead);
        assert!(flat.width < gull.width);
    }

    #[test]
    fn sot_rejects_even_lead_counts() {
        let err = sot(&Settings::default(), &sot23(4)).unwrap_err();
        assert!(matches!(err, GenerateError::InvalidLeadCount { count: 4, .. }));
    }

    #[test]
    fn sot_sides_share_distance() {
        let mut housing = sot23(3);
        housing.lead_width2 = Some(Dimension::new(0.5, 0.6, 0.7));
        let params = sot(&Settings::default(), &housing).unwrap();
        assert!(params.height2 > params.height1);
        assert!(params.courtyard >= params.width1.max(params.height2) / 2.0);
    }

    #[test]
    fn son_height_clamped_to_pitch() {
        let housing = Housing {
            body_width: Some(Dimension::new(2.9, 3.0, 3.1)),
            lead_length: Some(Dimension::new(0.3, 0.4, 0.5)),
            lead_width: Some(Dimension::new(0.4, 0.45, 0.5)),
            pitch: 0.5,
            ..Housing::default()
        };
        let params = son(&Settings::default(), &housing);
        assert!(params.height <= 0.3 + 1e-9);
        check_envelope(&params);
    }

    #[test]
    fn corner_concave_has_two_distances() {
        let housing = Housing {
            body_width: Some(Dimension::new(3.1, 3.2, 3.3)),
            body_length: Some(Dimension::new(2.4, 2.5, 2.6)),
            lead_length: Some(Dimension::new(0.6, 0.7, 0.8)),
            lead_width: Some(Dimension::new(0.9, 1.0, 1.1)),
            ..Housing::default()
        };
        let params = corner_concave(&Settings::default(), &housing);
        assert!(params.distance1 > params.distance2);
        assert!(params.courtyard >= params.width.max(params.height) / 2.0);
    }

    #[test]
    fn quad_axes_follow_spans() {
        let housing = Housing {
            body_width: Some(Dimension::exact(7.0)),
            body_length: Some(Dimension::exact(7.0)),
            row_span: Some(Dimension::new(8.8, 9.0, 9.2)),
            column_span: Some(Dimension::new(10.8, 11.0, 11.2)),
            lead_length: Some(Dimension::new(0.45, 0.6, 0.75)),
            lead_width: Some(Dimension::new(0.17, 0.22, 0.27)),
            pitch: 0.5,
            flags: HousingFlags::QFP,
            ..Housing::default()
        };
        let params = quad(&Settings::default(), &housing);
        assert!(params.column.distance > params.row.distance);
        assert!(approx_eq(params.courtyard, params.column.courtyard));
    }

    #[test]
    fn ball_land_reduction() {
        let housing = Housing {
            ball_diameter: Some(Dimension::exact(0.5)),
            ..Housing::default()
        };
        let collapsible = grid_array(&Settings::default(), &housing);
        assert!(approx_eq(collapsible.diameter, 0.4));

        let mut settings = Settings::default();
        settings.ball.collapsible = false;
        let rigid = grid_array(&settings, &housing);
        assert!(rigid.diameter > 0.5);
    }

    #[test]
    fn chip_array_termination_follows_flags() {
        assert_eq!(ChipArrayKind::from_flags(HousingFlags::empty()), ChipArrayKind::Convex);
        assert_eq!(ChipArrayKind::from_flags(HousingFlags::CONCAVE), ChipArrayKind::Concave);
        assert_eq!(ChipArrayKind::from_flags(HousingFlags::FLAT), ChipArrayKind::Flat);
        assert_eq!(
            ChipArrayKind::from_flags(HousingFlags::CONVEX | HousingFlags::CONCAVE),
            ChipArrayKind::Convex
        );
    }

    #[test]
    fn housing_courtyard_overrides_density() {
        let mut housing = chip_1005();
        housing.courtyard = Some(0.5);
        let params = two_pin(&Settings::default(), &housing);
        assert!(approx_eq(params.excess, 0.5));
    }
}

//! IPC-7351 naming convention generator.
//!
//! Generates standardised footprint names from a normalized housing.
//!
//! # Name Format
//!
//! The general format is: `{TYPE}{PITCH}P{SPAN}X{HEIGHT}-{PINS}{DENSITY}`,
//! with dimensions in 0.01mm units unless noted otherwise.
//!
//! Examples:
//! - `RESC1005X35N` - 0402 chip resistor, nominal density
//! - `SOIC127P600X175-8N` - SOIC-8, 1.27mm pitch, 6.00mm lead span
//! - `SOT23-3P095_240X110L045N` - SOT-23, 3 leads
//! - `QFN50P400X400X90-24N` - QFN-24, 4mm body

use crate::housing::{Dimension, Housing, HousingFlags};
use crate::ipc7351::calculator::ChipArrayKind;
use crate::ipc7351::density::DensityLevel;

fn nom(value: Option<Dimension>) -> f64 {
    value.map_or(0.0, |d| d.nom)
}

fn pick(value: Option<Dimension>) -> f64 {
    value.map_or(0.0, |d| d.pick())
}

fn prefix<'h>(housing: &'h Housing, default: &'h str) -> &'h str {
    housing.component_type.as_deref().unwrap_or(default)
}

/// Thermal tab suffix: `T{width}X{length}`, empty without a tab.
fn tab_suffix(housing: &Housing) -> String {
    match (housing.tab_width, housing.tab_length) {
        (Some(w), Some(l)) if w.pick() > 0.0 && l.pick() > 0.0 => {
            format!("T{}X{}", mm_to_hundredths(w.pick()), mm_to_hundredths(l.pick()))
        }
        _ => String::new(),
    }
}

/// Two-terminal chip, e.g. `RESC1608X55N`.
///
/// Body length and width are in 0.1mm units, height in 0.01mm units.
/// `componentType` replaces the `RESC` prefix (`CAPC`, `INDC`, ...).
///
/// # Examples
///
/// ```
/// use ipc_landgen::housing::{Dimension, Housing};
/// use ipc_landgen::ipc7351::naming::chip_name;
/// use ipc_landgen::ipc7351::DensityLevel;
///
/// let housing = Housing {
///     body_length: Some(Dimension::exact(1.6)),
///     body_width: Some(Dimension::exact(0.8)),
///     height: Some(Dimension::exact(0.55)),
///     ..Housing::default()
/// };
/// assert_eq!(chip_name(&housing, DensityLevel::Nominal), "RESC1608X55N");
/// ```
#[must_use]
pub fn chip_name(housing: &Housing, density: DensityLevel) -> String {
    let length_units = mm_to_tenths(housing.body_length_nom());
    let width_units = mm_to_tenths(housing.body_width_nom());
    let height_units = mm_to_hundredths(housing.height_max());

    format!(
        "{prefix}{length_units:02}{width_units:02}X{height_units}{density}",
        prefix = prefix(housing, "RESC"),
        density = density.suffix()
    )
}

/// MELF body, e.g. `RESMELF3515N` (length and diameter in 0.1mm units).
#[must_use]
pub fn melf_name(housing: &Housing, density: DensityLevel) -> String {
    let length_units = mm_to_tenths(housing.body_length_nom());
    let diameter_units = mm_to_tenths(nom(housing.body_diameter));

    format!(
        "{prefix}{length_units:02}{diameter_units:02}{density}",
        prefix = prefix(housing, "RESMELF"),
        density = density.suffix()
    )
}

/// Molded body, e.g. `DIOM5226X230N`.
#[must_use]
pub fn molded_name(housing: &Housing, density: DensityLevel) -> String {
    let length_units = mm_to_tenths(housing.body_length_nom());
    let width_units = mm_to_tenths(housing.body_width_nom());
    let height_units = mm_to_hundredths(housing.height_max());

    format!(
        "{prefix}{length_units:02}{width_units:02}X{height_units}{density}",
        prefix = prefix(housing, "DIOM"),
        density = density.suffix()
    )
}

/// Aluminium electrolytic capacitor, e.g. `CAPAE660X610175X080N`.
#[must_use]
pub fn cae_name(housing: &Housing, density: DensityLevel) -> String {
    let width_units = mm_to_hundredths(housing.body_width_nom());
    let height_units = mm_to_hundredths(housing.height_max());
    let lead_length = mm_to_hundredths(pick(housing.lead_length));
    let lead_width = mm_to_hundredths(pick(housing.lead_width));

    format!(
        "CAPAE{width_units:03}X{height_units:03}{lead_length:03}X{lead_width:03}{density}",
        density = density.suffix()
    )
}

/// Gull-wing and J-lead dual rows, e.g. `SOIC127P600X175-8N`.
#[must_use]
pub fn dual_name(default_prefix: &str, housing: &Housing, density: DensityLevel) -> String {
    let pitch_units = mm_to_hundredths(housing.pitch);
    let span_units = mm_to_hundredths(nom(housing.lead_span));
    let height_units = mm_to_hundredths(housing.height_max());

    format!(
        "{prefix}{pitch_units}P{span_units}X{height_units}-{pins}{density}",
        prefix = prefix(housing, default_prefix),
        pins = housing.lead_count,
        density = density.suffix()
    )
}

/// Chip array, e.g. `RESCAV50P320X160X60-8N`.
#[must_use]
pub fn chip_array_name(housing: &Housing, kind: ChipArrayKind, density: DensityLevel) -> String {
    let default = match kind {
        ChipArrayKind::Convex => "RESCAV",
        ChipArrayKind::Concave => "RESCAXS",
        ChipArrayKind::Flat => "RESCAXE",
    };
    body_name(prefix(housing, default), housing, density)
}

/// `{prefix}{PITCH}P{LENGTH}X{WIDTH}X{HEIGHT}-{PINS}{DENSITY}`.
fn body_name(prefix: &str, housing: &Housing, density: DensityLevel) -> String {
    let pitch_units = mm_to_hundredths(housing.pitch);
    let length_units = mm_to_hundredths(housing.body_length_nom());
    let width_units = mm_to_hundredths(housing.body_width_nom());
    let height_units = mm_to_hundredths(housing.height_max());

    format!(
        "{prefix}{pitch_units}P{length_units}X{width_units}X{height_units}-{pins}{density}",
        pins = housing.lead_count,
        density = density.suffix()
    )
}

/// SOT-23, e.g. `SOT23-3P095_240X110L045N`.
#[must_use]
pub fn sot23_name(housing: &Housing, density: DensityLevel) -> String {
    let pitch_units = mm_to_hundredths(housing.pitch);
    let span_units = mm_to_hundredths(nom(housing.lead_span));
    let height_units = mm_to_hundredths(housing.height_max());
    let lead_units = mm_to_hundredths(nom(housing.lead_length));

    format!(
        "SOT23-{pins}P{pitch_units:03}_{span_units:03}X{height_units:03}L{lead_units:03}{density}",
        pins = housing.lead_count,
        density = density.suffix()
    )
}

/// Human readable SOT-23 description.
#[must_use]
pub fn sot23_description(housing: &Housing, density: DensityLevel) -> String {
    format!(
        "Small Outline Transistor (SOT-23), {pins} Pin ({pitch:.2}mm pitch), \
         Body {length:.2}mm x {width:.2}mm x {height:.2}mm, \
         Lead {lead_length:.2}mm x {lead_width:.2}mm, {density} Density",
        pins = housing.lead_count,
        pitch = housing.pitch,
        length = housing.body_length_nom(),
        width = housing.body_width_nom(),
        height = housing.height_max(),
        lead_length = nom(housing.lead_length),
        lead_width = nom(housing.lead_width),
        density = density.long_name(),
    )
}

/// Flat-lead small outline, e.g. `ICSOFL6P50_160X120X060030X025N`.
#[must_use]
pub fn sotfl_name(housing: &Housing, density: DensityLevel) -> String {
    lead_body_name(prefix(housing, "ICSOFL"), housing, density)
}

/// `{prefix}{PINS}P{PITCH}_{LENGTH}X{WIDTH}X{HEIGHT}{LEADLEN}X{LEADW}{DENSITY}`.
fn lead_body_name(prefix: &str, housing: &Housing, density: DensityLevel) -> String {
    let pitch_units = mm_to_hundredths(housing.pitch);
    let length_units = mm_to_hundredths(housing.body_length_nom());
    let width_units = mm_to_hundredths(housing.body_width_nom());
    let height_units = mm_to_hundredths(housing.height_max());
    let lead_length = mm_to_hundredths(pick(housing.lead_length));
    let lead_width = mm_to_hundredths(pick(housing.lead_width));

    format!(
        "{prefix}{pins}P{pitch_units}_{length_units:03}X{width_units:03}X{height_units:03}\
         {lead_length:03}X{lead_width:03}{density}",
        pins = housing.lead_count,
        density = density.suffix()
    )
}

/// Small outline no-lead, e.g. `SON50P300X300X80-8T170X250N`.
#[must_use]
pub fn son_name(housing: &Housing, density: DensityLevel) -> String {
    let mut name = body_name(prefix(housing, "SON"), housing, density);
    let tab = tab_suffix(housing);
    if !tab.is_empty() {
        name.insert_str(name.len() - 1, &tab);
    }
    name
}

/// Dual flat no-lead, e.g. `DFN65P300X300X90-4N`. Pulled-back leads get a
/// `P` prefix.
#[must_use]
pub fn dfn_name(housing: &Housing, density: DensityLevel) -> String {
    let pitch_units = mm_to_hundredths(housing.pitch);
    let length_units = mm_to_hundredths(housing.body_length_nom());
    let width_units = mm_to_hundredths(housing.body_width_nom());
    let height_units = mm_to_hundredths(housing.height_max());
    let pull_back = if housing.pull_back.is_some_and(|d| d.nom > 0.0) {
        "P"
    } else {
        ""
    };

    format!(
        "{pull_back}DFN{pitch_units}P{length_units}X{width_units}X{height_units}-{pins}{density}",
        pins = housing.lead_count,
        density = density.suffix()
    )
}

/// Quad packages, e.g. `QFN50P400X400X90-24N` or `QFP50P900X900X120-64N`.
///
/// QFN names use the body, QFP names the lead span in both directions.
/// A thermal tab adds `T{width}X{length}` before the density suffix.
#[must_use]
pub fn quad_name(housing: &Housing, density: DensityLevel) -> String {
    let qfn = housing.has(HousingFlags::QFN);
    let (default, x, y) = if qfn {
        ("QFN", housing.body_width_nom(), housing.body_length_nom())
    } else {
        let span = |d: Option<Dimension>, body: f64| d.map_or(body, |d| d.nom);
        (
            "QFP",
            span(housing.row_span.or(housing.lead_span), housing.body_width_nom()),
            span(housing.column_span.or(housing.lead_span), housing.body_length_nom()),
        )
    };
    let pitch_units = mm_to_hundredths(housing.pitch);
    let x_units = mm_to_hundredths(x);
    let y_units = mm_to_hundredths(y);
    let height_units = mm_to_hundredths(housing.height_max());

    format!(
        "{prefix}{pitch_units}P{x_units}X{y_units}X{height_units}-{pins}{tab}{density}",
        prefix = prefix(housing, default),
        pins = housing.lead_count,
        tab = tab_suffix(housing),
        density = density.suffix()
    )
}

/// Ball grid array, e.g. `BGA100C80P10X10_900X900X140N`.
#[must_use]
pub fn bga_name(housing: &Housing, ball_count: usize, density: DensityLevel) -> String {
    let pitch_units = mm_to_hundredths(housing.pitch.max(housing.horizontal_pitch));
    let length_units = mm_to_hundredths(housing.body_length_nom());
    let width_units = mm_to_hundredths(housing.body_width_nom());
    let height_units = mm_to_hundredths(housing.height_max());

    format!(
        "{prefix}{ball_count}C{pitch_units}P{columns}X{rows}_{length_units}X{width_units}X{height_units}{density}",
        prefix = prefix(housing, "BGA"),
        columns = housing.column_count,
        rows = housing.row_count,
        density = density.suffix()
    )
}

/// Corner-concave oscillator, e.g. `OSOCC320X250X100N`.
#[must_use]
pub fn corner_concave_oscillator_name(housing: &Housing, density: DensityLevel) -> String {
    let length_units = mm_to_hundredths(housing.body_length_nom());
    let width_units = mm_to_hundredths(housing.body_width_nom());
    let height_units = mm_to_hundredths(housing.height_max());

    format!(
        "OSOCC{length_units}X{width_units}X{height_units}{density}",
        density = density.suffix()
    )
}

/// Side-concave (`OSCSC`), side-flat (`OSCSF`) or plain (`OSC`) oscillator.
#[must_use]
pub fn oscillator_name(housing: &Housing, density: DensityLevel) -> String {
    let prefix = if housing.has(HousingFlags::CONCAVE) {
        "OSCSC"
    } else if housing.has(HousingFlags::FLAT) {
        "OSCSF"
    } else {
        "OSC"
    };
    lead_body_name(prefix, housing, density)
}

/// Converts millimetres to IPC naming units (0.01mm = 1 unit).
///
/// Values are rounded to nearest integer.
fn mm_to_hundredths(mm: f64) -> u32 {
    // All PCB component dimensions are positive and small, so cast is safe
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let units = (mm * 100.0).round() as u32;
    units
}

/// Converts millimetres to IPC naming units (0.1mm = 1 unit).
///
/// Used for body length/width dimensions in chip component names.
fn mm_to_tenths(mm: f64) -> u32 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let units = (mm * 10.0).round() as u32;
    units
}

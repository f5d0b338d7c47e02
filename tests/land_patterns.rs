//! Land pattern geometry tests.
//!
//! These tests build patterns through the public pipeline from element
//! JSON, the same way the command line tool does, and check pad placement,
//! courtyard extents and silkscreen clearance.

use ipc_landgen::config::{Element, Settings};
use ipc_landgen::error::GenerateError;
use ipc_landgen::generate::housing_for;
use ipc_landgen::layers::silkscreen::{corner_arms, MAX_CORNER_SHARE, MIN_CORNER_ARM};
use ipc_landgen::pattern::geometry::round_outward;
use ipc_landgen::pattern::{Layer, Pattern, Point, ShapeKind};
use ipc_landgen::{build_pattern, PackageFamily};

/// Tolerance for floating point comparisons.
const TOLERANCE: f64 = 1e-6;

/// Courtyard excess at nominal density.
const NOMINAL_EXCESS: f64 = 0.25;

fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() < tolerance
}

fn element(json: &str) -> Element {
    serde_json::from_str(json).expect("element JSON should parse")
}

fn chip_0402() -> Element {
    element(
        r#"{
            "housing": {
                "bodyLength": { "min": 0.95, "max": 1.05 },
                "bodyWidth": { "min": 0.45, "max": 0.55 },
                "height": { "max": 0.4 },
                "leadLength": { "min": 0.2, "max": 0.3 }
            }
        }"#,
    )
}

fn soic8() -> Element {
    element(
        r#"{
            "housing": {
                "leadCount": 8,
                "pitch": 1.27,
                "bodyLength": { "min": 4.8, "max": 5.0 },
                "bodyWidth": { "min": 3.8, "max": 4.0 },
                "height": { "max": 1.75 },
                "leadSpan": { "min": 5.8, "max": 6.2 },
                "leadLength": { "min": 0.4, "max": 1.27 },
                "leadWidth": { "min": 0.31, "max": 0.51 }
            }
        }"#,
    )
}

fn sot23(lead_count: u32) -> Element {
    element(&format!(
        r#"{{
            "housing": {{
                "leadCount": {lead_count},
                "pitch": 0.95,
                "bodyLength": {{ "min": 2.8, "max": 3.0 }},
                "bodyWidth": {{ "min": 1.2, "max": 1.4 }},
                "height": {{ "max": 1.12 }},
                "leadSpan": {{ "min": 2.1, "max": 2.64 }},
                "leadLength": {{ "min": 0.3, "max": 0.6 }},
                "leadWidth": {{ "min": 0.3, "max": 0.5 }}
            }}
        }}"#
    ))
}

fn qfn24() -> Element {
    element(
        r#"{
            "housing": {
                "leadCount": 24,
                "pitch": 0.5,
                "bodyLength": { "min": 3.9, "max": 4.1 },
                "bodyWidth": { "min": 3.9, "max": 4.1 },
                "height": { "max": 0.9 },
                "leadLength": { "min": 0.3, "max": 0.5 },
                "leadWidth": { "min": 0.18, "max": 0.3 },
                "tabWidth": 2.7,
                "tabLength": 2.7
            }
        }"#,
    )
}

fn bga() -> Element {
    element(
        r#"{
            "housing": {
                "pitch": 0.8,
                "rowCount": 6,
                "columnCount": 6,
                "bodyLength": { "min": 5.9, "max": 6.1 },
                "bodyWidth": { "min": 5.9, "max": 6.1 },
                "height": { "max": 1.2 },
                "ballDiameter": { "min": 0.35, "max": 0.45 },
                "ballsMissing": ["C3", "C4", "D3", "D4"]
            }
        }"#,
    )
}

/// Half extents of the courtyard rectangle.
fn courtyard_extent(pattern: &Pattern<'_>) -> (f64, f64) {
    pattern
        .shapes()
        .iter()
        .filter(|s| s.layer == Layer::TopCourtyard)
        .find_map(|s| match s.kind {
            ShapeKind::Rectangle { min, max, .. } => Some((max.x.max(-min.x), max.y.max(-min.y))),
            _ => None,
        })
        .expect("pattern should have a courtyard rectangle")
}

/// Silkscreen strokes as segments.
fn silk_segments(pattern: &Pattern<'_>) -> Vec<(Point, Point, f64)> {
    let mut segments = Vec::new();
    for shape in pattern.shapes().iter().filter(|s| s.layer == Layer::TopSilkscreen) {
        let lw = shape.line_width;
        match &shape.kind {
            ShapeKind::Line { start, end } => segments.push((*start, *end, lw)),
            ShapeKind::Rectangle { min, max, .. } => {
                let corners = [
                    Point::new(min.x, min.y),
                    Point::new(max.x, min.y),
                    Point::new(max.x, max.y),
                    Point::new(min.x, max.y),
                ];
                for i in 0..4 {
                    segments.push((corners[i], corners[(i + 1) % 4], lw));
                }
            }
            ShapeKind::Path { points } => {
                for pair in points.windows(2) {
                    segments.push((pair[0], pair[1], lw));
                }
            }
            ShapeKind::Circle { .. } => {}
        }
    }
    segments
}

/// Smallest distance between any silkscreen stroke centre line and any pad.
fn min_silk_gap(pattern: &Pattern<'_>) -> Option<(f64, f64)> {
    const STEPS: u32 = 400;
    let pads: Vec<_> = pattern.pads().map(|(_, p)| p.rect()).collect();
    let mut result: Option<(f64, f64)> = None;

    for (a, b, lw) in silk_segments(pattern) {
        for step in 0..=STEPS {
            let t = f64::from(step) / f64::from(STEPS);
            let x = a.x + (b.x - a.x) * t;
            let y = a.y + (b.y - a.y) * t;
            for rect in &pads {
                let dx = (rect.min_x - x).max(0.0).max(x - rect.max_x);
                let dy = (rect.min_y - y).max(0.0).max(y - rect.max_y);
                let gap = dx.hypot(dy);
                if result.map_or(true, |(g, _)| gap < g) {
                    result = Some((gap, lw));
                }
            }
        }
    }
    result
}

// =============================================================================
// Two-pin parts
// =============================================================================

#[test]
fn chip_pads_are_symmetric_about_origin() {
    let settings = Settings::default();
    let pattern = build_pattern(PackageFamily::Chip, &chip_0402(), &settings).unwrap();

    assert_eq!(pattern.pad_count(), 2);
    let p1 = pattern.get_pad("1").unwrap();
    let p2 = pattern.get_pad("2").unwrap();
    assert!(p1.x < 0.0, "pad 1 should be on the left, got x = {}", p1.x);
    assert!(approx_eq(p1.x, -p2.x, TOLERANCE));
    assert!(approx_eq(p1.y, 0.0, TOLERANCE));
    assert!(approx_eq(p2.y, 0.0, TOLERANCE));
    assert!(approx_eq(p1.width, p2.width, TOLERANCE));
    assert!(approx_eq(p1.height, p2.height, TOLERANCE));
}

#[test]
fn chip_is_named_from_body() {
    let settings = Settings::default();
    let pattern = build_pattern(PackageFamily::Chip, &chip_0402(), &settings).unwrap();
    assert_eq!(pattern.name(), "RESC1005X40N");
}

#[test]
fn chip_courtyard_encloses_body_and_pads() {
    let settings = Settings::default();
    let pattern = build_pattern(PackageFamily::Chip, &chip_0402(), &settings).unwrap();

    let pads = pattern.pad_extents().unwrap();
    let reach_x = pads.max_x.max(-pads.min_x);
    let reach_y = pads.max_y.max(-pads.min_y);
    let expected_x = round_outward(reach_x.max(0.5) + NOMINAL_EXCESS, settings.decimals);
    let expected_y = round_outward(reach_y.max(0.25) + NOMINAL_EXCESS, settings.decimals);

    let (x, y) = courtyard_extent(&pattern);
    assert!(approx_eq(x, expected_x, TOLERANCE), "courtyard x {x} != {expected_x}");
    assert!(approx_eq(y, expected_y, TOLERANCE), "courtyard y {y} != {expected_y}");
}

#[test]
fn courtyard_setting_overrides_density_table() {
    let mut settings = Settings::default();
    settings.clearance.courtyard = Some(0.5);
    let pattern = build_pattern(PackageFamily::Chip, &chip_0402(), &settings).unwrap();

    let pads = pattern.pad_extents().unwrap();
    let reach_x = pads.max_x.max(-pads.min_x);
    let (x, _) = courtyard_extent(&pattern);
    assert!(approx_eq(x, round_outward(reach_x.max(0.5) + 0.5, settings.decimals), TOLERANCE));
}

#[test]
fn cae_lead_length_is_backfilled() {
    let cae = element(
        r#"{
            "housing": {
                "bodyLength": { "min": 6.4, "max": 6.8 },
                "bodyWidth": { "min": 6.4, "max": 6.8 },
                "height": { "max": 5.8 },
                "leadSpan": { "min": 6.9, "max": 7.5 },
                "leadSpace": { "min": 1.8, "max": 2.4 },
                "leadWidth": { "min": 0.5, "max": 0.8 }
            }
        }"#,
    );
    let housing = housing_for(PackageFamily::Cae, &cae).unwrap();
    let span = housing.lead_span.unwrap();
    let space = housing.lead_space.unwrap();
    let length = housing.lead_length.expect("lead length should be backfilled");
    assert!(approx_eq(2.0 * length.nom + space.nom, span.nom, TOLERANCE));

    let settings = Settings::default();
    let pattern = build_pattern(PackageFamily::Cae, &cae, &settings).unwrap();
    assert_eq!(pattern.pad_count(), 2);
    assert!(pattern.name().starts_with("CAPAE"));
}

#[test]
fn cae_lead_span_tolerance_is_root_sum_square() {
    let cae = element(
        r#"{
            "housing": {
                "bodyLength": { "min": 6.4, "max": 6.8 },
                "bodyWidth": { "min": 6.4, "max": 6.8 },
                "height": { "max": 5.8 },
                "leadLength": { "min": 0.4, "nom": 0.5, "max": 0.6 },
                "leadSpace": { "min": 1.8, "nom": 2.0, "max": 2.2 },
                "leadWidth": { "min": 0.5, "max": 0.8 }
            }
        }"#,
    );
    let housing = housing_for(PackageFamily::Cae, &cae).unwrap();
    let length = housing.lead_length.unwrap();
    let space = housing.lead_space.unwrap();
    let span = housing.lead_span.expect("lead span should be backfilled");

    let expected = length.tolerance().hypot(space.tolerance());
    assert!(approx_eq(span.nom, 3.0, TOLERANCE));
    assert!(approx_eq(span.tolerance(), expected, TOLERANCE));
    assert!(approx_eq(span.tolerance(), 0.2f64.hypot(0.4), TOLERANCE));
    assert!(span.tolerance() < length.tolerance() * 2.0 + space.tolerance());
    assert!(approx_eq(span.max - span.nom, span.nom - span.min, TOLERANCE));
}

#[test]
fn cae_name_uses_largest_lead_when_nominal_is_missing() {
    let cae = element(
        r#"{
            "housing": {
                "bodyLength": { "min": 6.4, "max": 6.8 },
                "bodyWidth": { "min": 6.4, "max": 6.8 },
                "height": { "max": 5.8 },
                "leadLength": { "min": 0.4, "max": 0.6 },
                "leadSpace": { "min": 1.8, "max": 2.2 },
                "leadWidth": { "min": 0.5, "max": 0.8 }
            }
        }"#,
    );
    let settings = Settings::default();
    let pattern = build_pattern(PackageFamily::Cae, &cae, &settings).unwrap();
    assert_eq!(pattern.name(), "CAPAE660X580060X080N");

    // Geometry still works from the midpoint.
    let housing = housing_for(PackageFamily::Cae, &cae).unwrap();
    let length = housing.lead_length.unwrap();
    assert!(approx_eq(length.nom, 0.5, TOLERANCE));
    assert!(approx_eq(length.pick(), 0.6, TOLERANCE));
}

// =============================================================================
// Small outline transistors and no-lead parts
// =============================================================================

#[test]
fn sot23_3_has_two_left_one_right() {
    let settings = Settings::default();
    let pattern = build_pattern(PackageFamily::Sot23, &sot23(3), &settings).unwrap();

    assert_eq!(pattern.pad_count(), 3);
    let p1 = pattern.get_pad("1").unwrap();
    let p2 = pattern.get_pad("2").unwrap();
    let p3 = pattern.get_pad("3").unwrap();

    assert!(p1.x < 0.0 && p2.x < 0.0 && p3.x > 0.0);
    assert!(approx_eq(p1.x, -p3.x, TOLERANCE));
    assert!(approx_eq(p1.y, -0.95, TOLERANCE));
    assert!(approx_eq(p2.y, 0.95, TOLERANCE));
    assert!(approx_eq(p3.y, 0.0, TOLERANCE));
}

#[test]
fn sot23_rejects_seven_leads() {
    let settings = Settings::default();
    let err = build_pattern(PackageFamily::Sot23, &sot23(7), &settings).unwrap_err();
    match err {
        GenerateError::InvalidLeadCount { count, .. } => assert_eq!(count, 7),
        other => panic!("expected InvalidLeadCount, got {other:?}"),
    }
}

#[test]
fn sot23_even_count_falls_back_to_small_outline() {
    let settings = Settings::default();
    let pattern = build_pattern(PackageFamily::Sot23, &sot23(8), &settings).unwrap();
    assert_eq!(pattern.pad_count(), 8);
    let left = pattern.pads().filter(|(_, p)| p.x < 0.0).count();
    assert_eq!(left, 4);
}

#[test]
fn dfn4_is_mirrored() {
    let dfn = element(
        r#"{
            "housing": {
                "leadCount": 4,
                "pitch": 0.65,
                "pitch1": 1.2,
                "bodyLength": { "min": 1.9, "max": 2.1 },
                "bodyWidth": { "min": 1.9, "max": 2.1 },
                "height": { "max": 0.8 },
                "leadLength": { "min": 0.25, "max": 0.35 },
                "leadWidth": { "min": 0.25, "max": 0.35 }
            }
        }"#,
    );
    let settings = Settings::default();
    let pattern = build_pattern(PackageFamily::Dfn, &dfn, &settings).unwrap();

    assert_eq!(pattern.pad_count(), 4);
    let p1 = pattern.get_pad("1").unwrap();
    let p2 = pattern.get_pad("2").unwrap();
    let p3 = pattern.get_pad("3").unwrap();
    let p4 = pattern.get_pad("4").unwrap();

    assert!(approx_eq(p1.x, -0.6, TOLERANCE));
    assert!(approx_eq(p1.y, 0.325, TOLERANCE));
    assert!(approx_eq(p2.x, p1.x, TOLERANCE) && approx_eq(p2.y, -p1.y, TOLERANCE));
    assert!(approx_eq(p3.x, -p1.x, TOLERANCE) && approx_eq(p3.y, p1.y, TOLERANCE));
    assert!(approx_eq(p4.x, -p1.x, TOLERANCE) && approx_eq(p4.y, -p1.y, TOLERANCE));
}

// =============================================================================
// Silkscreen
// =============================================================================

#[test]
fn silkscreen_keeps_clear_of_copper() {
    let settings = Settings::default();
    let clearance = settings.clearance.pad_to_silk;

    let cases = [
        (PackageFamily::Chip, chip_0402()),
        (PackageFamily::Soic, soic8()),
        (PackageFamily::Sot23, sot23(3)),
        (PackageFamily::Sot23, sot23(5)),
        (PackageFamily::Qfn, qfn24()),
        (PackageFamily::Bga, bga()),
    ];

    for (family, element) in &cases {
        let pattern = build_pattern(*family, element, &settings).unwrap();
        let Some((gap, lw)) = min_silk_gap(&pattern) else {
            continue;
        };
        let required = lw / 2.0 + clearance;
        assert!(
            gap + 1e-3 >= required,
            "{family}: silkscreen {gap:.4} from copper, needs {required:.4}"
        );
    }
}

#[test]
fn quad_corner_arms_stay_in_bounds() {
    let settings = Settings::default();
    let element = qfn24();
    let pattern = build_pattern(PackageFamily::Qfn, &element, &settings).unwrap();
    let housing = housing_for(PackageFamily::Qfn, &element).unwrap();

    let (arm_x, arm_y) = corner_arms(&pattern, &housing);
    let width = housing.body_width_nom();
    let length = housing.body_length_nom();
    assert!(arm_x >= MIN_CORNER_ARM && arm_x <= width * MAX_CORNER_SHARE + TOLERANCE);
    assert!(arm_y >= MIN_CORNER_ARM && arm_y <= length * MAX_CORNER_SHARE + TOLERANCE);

    let silk_lines = pattern
        .shapes()
        .iter()
        .filter(|s| s.layer == Layer::TopSilkscreen && matches!(s.kind, ShapeKind::Line { .. }))
        .count();
    assert_eq!(silk_lines, 8);
}

#[test]
fn bga_skips_missing_balls() {
    let settings = Settings::default();
    let pattern = build_pattern(PackageFamily::Bga, &bga(), &settings).unwrap();

    assert_eq!(pattern.pad_count(), 32);
    assert!(pattern.get_pad("A1").is_some());
    assert!(pattern.get_pad("C3").is_none());
    assert!(pattern.name().starts_with("BGA32C80P6X6_"));
}

// =============================================================================
// Family dispatch
// =============================================================================

#[test]
fn unknown_kind_is_unsupported() {
    let err = "teapot".parse::<PackageFamily>().unwrap_err();
    assert!(matches!(err, GenerateError::UnsupportedFamily { ref kind } if kind == "teapot"));
    assert_eq!(err.to_string(), "Unsupported kind: teapot");
}

#[test]
fn kinds_parse_case_insensitively() {
    assert_eq!("SOT23".parse::<PackageFamily>().unwrap(), PackageFamily::Sot23);
    assert_eq!("chip-array".parse::<PackageFamily>().unwrap(), PackageFamily::ChipArray);
    for family in PackageFamily::ALL {
        assert_eq!(family.key().parse::<PackageFamily>().unwrap(), family);
    }
}

//! IPC-7351B density levels and solder fillet goals (J-values).
//!
//! The IPC-7351B standard defines three density levels for land patterns:
//!
//! - **Most (M)**: Maximum solder fillet, largest pads for best reliability
//! - **Nominal (N)**: Standard density, recommended for most applications
//! - **Least (L)**: Minimum solder fillet, smallest pads for high-density boards

use std::fmt;

/// Density level per IPC-7351B.
///
/// Controls the solder fillet goals (J-values) which determine pad dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DensityLevel {
    /// Most (M) - Maximum land protrusion for best solder fillet.
    /// Use for high-reliability applications.
    Most,

    /// Nominal (N) - Standard density, recommended for most applications.
    #[default]
    Nominal,

    /// Least (L) - Minimum land protrusion for high-density boards.
    /// Use when space is critical.
    Least,
}

impl DensityLevel {
    /// Parses a density level from a string.
    ///
    /// Accepts: "M", "Most", "N", "Nominal", "L", "Least" (case-insensitive).
    #[must_use]
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "M" | "MOST" => Some(Self::Most),
            "N" | "NOMINAL" => Some(Self::Nominal),
            "L" | "LEAST" => Some(Self::Least),
            _ => None,
        }
    }

    /// Returns the suffix character for IPC names.
    #[must_use]
    pub const fn suffix(&self) -> char {
        match self {
            Self::Most => 'M',
            Self::Nominal => 'N',
            Self::Least => 'L',
        }
    }

    /// Returns the long name used in descriptions.
    #[must_use]
    pub const fn long_name(&self) -> &'static str {
        match self {
            Self::Most => "Most",
            Self::Nominal => "Nominal",
            Self::Least => "Least",
        }
    }
}

impl fmt::Display for DensityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.suffix())
    }
}

/// Solder fillet goals (J-values).
///
/// These values determine how much the pad extends beyond the component
/// lead to achieve proper solder fillet formation.
///
/// All values in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolderFilletGoals {
    /// Toe fillet goal (Jt) - extension beyond the outer edge of the lead.
    pub toe: f64,

    /// Heel fillet goal (Jh) - extension beyond the inner edge of the lead.
    pub heel: f64,

    /// Side fillet goal (Js) - extension beyond the side of the lead.
    pub side: f64,
}

impl SolderFilletGoals {
    /// Creates new solder fillet goals.
    #[must_use]
    pub const fn new(toe: f64, heel: f64, side: f64) -> Self {
        Self { toe, heel, side }
    }

    /// Rectangular or square-end chip components (resistors, capacitors).
    #[must_use]
    pub const fn for_chip(density: DensityLevel) -> Self {
        match density {
            DensityLevel::Most => Self::new(0.55, 0.00, 0.05),
            DensityLevel::Nominal => Self::new(0.35, 0.00, 0.00),
            DensityLevel::Least => Self::new(0.15, 0.00, -0.05),
        }
    }

    /// Chip components smaller than 1608 (0603) use reduced goals.
    #[must_use]
    pub const fn for_small_chip(density: DensityLevel) -> Self {
        match density {
            DensityLevel::Most => Self::new(0.20, 0.00, 0.05),
            DensityLevel::Nominal => Self::new(0.10, 0.00, 0.00),
            DensityLevel::Least => Self::new(0.00, 0.00, -0.05),
        }
    }

    /// MELF (cylindrical) components.
    #[must_use]
    pub const fn for_melf(density: DensityLevel) -> Self {
        match density {
            DensityLevel::Most => Self::new(0.60, 0.20, 0.10),
            DensityLevel::Nominal => Self::new(0.40, 0.10, 0.05),
            DensityLevel::Least => Self::new(0.20, 0.02, 0.01),
        }
    }

    /// Gull-wing leads (SOIC, SOP, QFP) with pitch above 0.625 mm.
    #[must_use]
    pub const fn for_gull_wing(density: DensityLevel) -> Self {
        match density {
            DensityLevel::Most => Self::new(0.55, 0.45, 0.05),
            DensityLevel::Nominal => Self::new(0.35, 0.35, 0.03),
            DensityLevel::Least => Self::new(0.15, 0.25, 0.01),
        }
    }

    /// Gull-wing leads with pitch of 0.625 mm or less.
    #[must_use]
    pub const fn for_fine_pitch_gull_wing(density: DensityLevel) -> Self {
        match density {
            DensityLevel::Most => Self::new(0.55, 0.45, 0.01),
            DensityLevel::Nominal => Self::new(0.35, 0.35, -0.02),
            DensityLevel::Least => Self::new(0.15, 0.25, -0.04),
        }
    }

    /// J-lead components (PLCC, SOJ).
    #[must_use]
    pub const fn for_j_lead(density: DensityLevel) -> Self {
        match density {
            DensityLevel::Most => Self::new(0.55, 0.10, 0.05),
            DensityLevel::Nominal => Self::new(0.35, 0.00, 0.03),
            DensityLevel::Least => Self::new(0.15, -0.10, 0.01),
        }
    }

    /// Flat leads (SOTFL, SOD-123F).
    #[must_use]
    pub const fn for_flat_lead(density: DensityLevel) -> Self {
        match density {
            DensityLevel::Most => Self::new(0.30, 0.00, 0.05),
            DensityLevel::Nominal => Self::new(0.20, 0.00, 0.00),
            DensityLevel::Least => Self::new(0.10, 0.00, -0.02),
        }
    }

    /// No-lead components (QFN, DFN, SON).
    #[must_use]
    pub const fn for_no_lead(density: DensityLevel) -> Self {
        match density {
            DensityLevel::Most => Self::new(0.40, 0.00, -0.04),
            DensityLevel::Nominal => Self::new(0.30, 0.00, -0.04),
            DensityLevel::Least => Self::new(0.20, 0.00, -0.04),
        }
    }

    /// Molded bodies with inward-formed L-leads (SOD, SMA/SMB/SMC, tantalum).
    #[must_use]
    pub const fn for_molded_body(density: DensityLevel) -> Self {
        match density {
            DensityLevel::Most => Self::new(0.25, 0.80, 0.01),
            DensityLevel::Nominal => Self::new(0.15, 0.50, -0.05),
            DensityLevel::Least => Self::new(0.07, 0.20, -0.10),
        }
    }

    /// Aluminium electrolytic capacitors.
    #[must_use]
    pub const fn for_cae(density: DensityLevel) -> Self {
        match density {
            DensityLevel::Most => Self::new(0.70, 0.00, 0.50),
            DensityLevel::Nominal => Self::new(0.50, -0.10, 0.30),
            DensityLevel::Least => Self::new(0.30, -0.20, 0.10),
        }
    }

    /// Side-concave chip array terminations.
    #[must_use]
    pub const fn for_concave(density: DensityLevel) -> Self {
        match density {
            DensityLevel::Most => Self::new(0.55, -0.05, -0.05),
            DensityLevel::Nominal => Self::new(0.45, -0.07, -0.07),
            DensityLevel::Least => Self::new(0.35, -0.20, -0.10),
        }
    }

    /// Convex chip array terminations.
    #[must_use]
    pub const fn for_convex(density: DensityLevel) -> Self {
        match density {
            DensityLevel::Most => Self::new(0.55, -0.05, 0.01),
            DensityLevel::Nominal => Self::new(0.45, -0.07, -0.03),
            DensityLevel::Least => Self::new(0.35, -0.20, -0.05),
        }
    }

    /// Side-flat chip array terminations.
    #[must_use]
    pub const fn for_flat(density: DensityLevel) -> Self {
        match density {
            DensityLevel::Most => Self::new(0.55, -0.05, -0.05),
            DensityLevel::Nominal => Self::new(0.45, -0.07, -0.07),
            DensityLevel::Least => Self::new(0.35, -0.20, -0.10),
        }
    }

    /// Terminations wrapped around the body corners (corner-concave oscillators).
    #[must_use]
    pub const fn for_corner_concave(density: DensityLevel) -> Self {
        match density {
            DensityLevel::Most => Self::new(0.25, 0.15, 0.15),
            DensityLevel::Nominal => Self::new(0.15, 0.05, 0.05),
            DensityLevel::Least => Self::new(0.05, 0.00, 0.00),
        }
    }
}

/// Courtyard excess per IPC-7351B.
///
/// The courtyard defines the minimum area required around a component
/// for pick-and-place equipment clearance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CourtyardExcess {
    /// Courtyard excess in millimetres.
    pub excess: f64,
}

impl CourtyardExcess {
    /// Returns the courtyard excess for the given density level.
    #[must_use]
    pub const fn for_density(density: DensityLevel) -> Self {
        let excess = match density {
            DensityLevel::Most => 0.50,
            DensityLevel::Nominal => 0.25,
            DensityLevel::Least => 0.10,
        };
        Self { excess }
    }

    /// Ball grid arrays keep more room for rework.
    #[must_use]
    pub const fn for_grid_array(density: DensityLevel) -> Self {
        let excess = match density {
            DensityLevel::Most => 2.00,
            DensityLevel::Nominal => 1.00,
            DensityLevel::Least => 0.50,
        };
        Self { excess }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn density_from_string() {
        assert_eq!(DensityLevel::from_str_loose("M"), Some(DensityLevel::Most));
        assert_eq!(DensityLevel::from_str_loose("most"), Some(DensityLevel::Most));
        assert_eq!(DensityLevel::from_str_loose("N"), Some(DensityLevel::Nominal));
        assert_eq!(DensityLevel::from_str_loose("nominal"), Some(DensityLevel::Nominal));
        assert_eq!(DensityLevel::from_str_loose("L"), Some(DensityLevel::Least));
        assert_eq!(DensityLevel::from_str_loose("least"), Some(DensityLevel::Least));
        assert_eq!(DensityLevel::from_str_loose("X"), None);
    }

    #[test]
    fn density_suffix() {
        assert_eq!(DensityLevel::Most.suffix(), 'M');
        assert_eq!(DensityLevel::Nominal.to_string(), "N");
        assert_eq!(DensityLevel::Least.long_name(), "Least");
    }

    #[test]
    fn chip_j_values() {
        let goals = SolderFilletGoals::for_chip(DensityLevel::Nominal);
        assert!((goals.toe - 0.35).abs() < f64::EPSILON);
        assert!((goals.heel - 0.00).abs() < f64::EPSILON);
        assert!((goals.side - 0.00).abs() < f64::EPSILON);
    }

    #[test]
    fn toe_grows_with_density() {
        for table in [
            SolderFilletGoals::for_gull_wing,
            SolderFilletGoals::for_flat_lead,
            SolderFilletGoals::for_no_lead,
            SolderFilletGoals::for_cae,
        ] {
            assert!(table(DensityLevel::Most).toe > table(DensityLevel::Nominal).toe);
            assert!(table(DensityLevel::Nominal).toe > table(DensityLevel::Least).toe);
        }
    }

    #[test]
    fn courtyard_excess() {
        assert!((CourtyardExcess::for_density(DensityLevel::Most).excess - 0.50).abs() < f64::EPSILON);
        assert!((CourtyardExcess::for_density(DensityLevel::Nominal).excess - 0.25).abs() < f64::EPSILON);
        assert!((CourtyardExcess::for_density(DensityLevel::Least).excess - 0.10).abs() < f64::EPSILON);
    }
}

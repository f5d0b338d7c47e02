//! IPC-7351B package family builders.
//!
//! Each package family has its own module holding a `build` call sequence:
//! calculator, copper, silkscreen, assembly, courtyard and, where the
//! family needs it, mask. [`PackageFamily`] is the closed set of families
//! and dispatches to them.

pub mod chip;
pub mod dual;
pub mod grid_array;
pub mod no_lead;
pub mod oscillator;
pub mod quad;
pub mod sot;

use std::fmt;
use std::str::FromStr;

use crate::error::{GenerateError, GenerateResult};
use crate::housing::{Housing, HousingFlags};
use crate::pattern::Pattern;

/// A supported package family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageFamily {
    /// Chip resistors, capacitors, inductors and MELFs.
    Chip,
    /// Aluminium electrolytic capacitors.
    Cae,
    /// Molded bodies with inward leads (SOD, SMA).
    Molded,
    /// Chip arrays with concave, convex or flat terminations.
    ChipArray,
    /// Small outline IC, gull-wing.
    Soic,
    /// Small outline package, gull-wing.
    Sop,
    /// Small outline J-lead.
    Soj,
    /// Small outline transistor.
    Sot23,
    /// Small outline flat lead.
    Sotfl,
    /// Small outline no-lead.
    Son,
    /// Dual flat no-lead, 2 to 4 pads.
    Dfn,
    /// Quad flat no-lead.
    Qfn,
    /// Quad flat package.
    Qfp,
    /// Ball grid array.
    Bga,
    /// Crystal oscillators.
    Oscillator,
}

impl PackageFamily {
    /// Every family, in dispatch order.
    pub const ALL: [Self; 15] = [
        Self::Chip,
        Self::Cae,
        Self::Molded,
        Self::ChipArray,
        Self::Soic,
        Self::Sop,
        Self::Soj,
        Self::Sot23,
        Self::Sotfl,
        Self::Son,
        Self::Dfn,
        Self::Qfn,
        Self::Qfp,
        Self::Bga,
        Self::Oscillator,
    ];

    /// The kind string used on the command line.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Chip => "chip",
            Self::Cae => "cae",
            Self::Molded => "molded",
            Self::ChipArray => "chip_array",
            Self::Soic => "soic",
            Self::Sop => "sop",
            Self::Soj => "soj",
            Self::Sot23 => "sot23",
            Self::Sotfl => "sotfl",
            Self::Son => "son",
            Self::Dfn => "dfn",
            Self::Qfn => "qfn",
            Self::Qfp => "qfp",
            Self::Bga => "bga",
            Self::Oscillator => "oscillator",
        }
    }

    /// Flags every housing of this family carries.
    #[must_use]
    pub const fn implied_flags(&self) -> HousingFlags {
        match self {
            Self::Chip => HousingFlags::CHIP,
            Self::Cae => HousingFlags::CAE.union(HousingFlags::POLARIZED),
            Self::Molded => HousingFlags::MOLDED,
            Self::ChipArray => HousingFlags::empty(),
            Self::Soic | Self::Bga | Self::Oscillator => HousingFlags::POLARIZED,
            Self::Sop => HousingFlags::SOP.union(HousingFlags::POLARIZED),
            Self::Soj => HousingFlags::SOJ.union(HousingFlags::POLARIZED),
            Self::Sot23 => HousingFlags::SOT23.union(HousingFlags::POLARIZED),
            Self::Sotfl => HousingFlags::FLATLEAD.union(HousingFlags::POLARIZED),
            Self::Son => HousingFlags::SON.union(HousingFlags::POLARIZED),
            Self::Dfn => HousingFlags::DFN.union(HousingFlags::POLARIZED),
            Self::Qfn => HousingFlags::QFN.union(HousingFlags::POLARIZED),
            Self::Qfp => HousingFlags::QFP.union(HousingFlags::POLARIZED),
        }
    }

    /// Runs the family's call sequence on `pattern`.
    ///
    /// A builder only computes a name when the pattern has none yet.
    ///
    /// # Errors
    ///
    /// Returns an error when the housing does not fit the family, for
    /// example an unsupported lead count.
    pub fn build(self, pattern: &mut Pattern<'_>, housing: &Housing) -> GenerateResult<()> {
        match self {
            Self::Chip | Self::Cae | Self::Molded => chip::build(pattern, housing),
            Self::ChipArray => dual::build_chip_array(pattern, housing),
            Self::Soic => dual::build(pattern, housing, "SOIC"),
            Self::Sop => dual::build(pattern, housing, "SOP"),
            Self::Soj => dual::build(pattern, housing, "SOJ"),
            Self::Sot23 => sot::build_sot23(pattern, housing),
            Self::Sotfl => sot::build_sotfl(pattern, housing),
            Self::Son => no_lead::build_son(pattern, housing),
            Self::Dfn => no_lead::build_dfn(pattern, housing),
            Self::Qfn | Self::Qfp => quad::build(pattern, housing),
            Self::Bga => grid_array::build(pattern, housing),
            Self::Oscillator => oscillator::build(pattern, housing),
        }
    }
}

impl fmt::Display for PackageFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PackageFamily {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|family| family.key().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| GenerateError::unsupported_family(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("SOT23".parse::<PackageFamily>().unwrap(), PackageFamily::Sot23);
        assert_eq!("Qfn".parse::<PackageFamily>().unwrap(), PackageFamily::Qfn);
        assert_eq!("chip-array".parse::<PackageFamily>().unwrap(), PackageFamily::ChipArray);
    }

    #[test]
    fn unknown_kind_is_named_in_error() {
        let err = "tsop".parse::<PackageFamily>().unwrap_err();
        assert!(matches!(err, GenerateError::UnsupportedFamily { ref kind } if kind == "tsop"));
    }

    #[test]
    fn keys_round_trip() {
        for family in PackageFamily::ALL {
            assert_eq!(family.to_string().parse::<PackageFamily>().unwrap(), family);
        }
    }

    #[test]
    fn implied_flags() {
        assert!(PackageFamily::Cae.implied_flags().contains(HousingFlags::POLARIZED));
        assert!(PackageFamily::Sotfl.implied_flags().contains(HousingFlags::FLATLEAD));
        assert_eq!(PackageFamily::Chip.implied_flags(), HousingFlags::CHIP);
    }
}

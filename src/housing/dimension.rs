//! Toleranced dimensions.
//!
//! Every measured housing quantity is a `{min, nom, max}` triple. The
//! tolerance band is always derived (`max - min`), never stored.
//!
//! Besides the nominal used by the land calculations, a dimension keeps the
//! value a reader would pick from the input: the stated nominal, else the
//! maximum, else the minimum. Names and fixed pad sizes use that one.

/// A measured quantity with its tolerance band, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dimension {
    /// Least material value.
    pub min: f64,
    /// Nominal value.
    pub nom: f64,
    /// Most material value.
    pub max: f64,
    pick: f64,
}

impl Dimension {
    /// Creates a dimension from its three values.
    #[must_use]
    pub const fn new(min: f64, nom: f64, max: f64) -> Self {
        Self { min, nom, max, pick: nom }
    }

    /// Replaces the representative value.
    #[must_use]
    pub const fn with_pick(self, pick: f64) -> Self {
        Self { pick, ..self }
    }

    /// Representative value: the stated nominal, else the maximum, else the
    /// minimum, else 0. Equals `nom` for computed dimensions.
    #[must_use]
    pub const fn pick(&self) -> f64 {
        self.pick
    }

    /// Creates a dimension with no tolerance.
    #[must_use]
    pub const fn exact(value: f64) -> Self {
        Self::new(value, value, value)
    }

    /// Creates a dimension centred on `nom` with a total tolerance band of `tol`.
    #[must_use]
    pub fn with_tolerance(nom: f64, tol: f64) -> Self {
        Self::new(nom - tol / 2.0, nom, nom + tol / 2.0)
    }

    /// Returns the tolerance band (`max - min`).
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.max - self.min
    }

    /// Returns `true` if `min <= nom <= max`.
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.min <= self.nom && self.nom <= self.max
    }

    /// Worst-case difference: the smallest result pairs our minimum with
    /// the other's maximum.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        Self::new(self.min - other.max, self.nom - other.nom, self.max - other.min)
    }

    /// Multiplies every value by a non-negative factor.
    #[must_use]
    pub fn scale(&self, factor: f64) -> Self {
        Self::new(self.min * factor, self.nom * factor, self.max * factor)
    }
}

/// Root-sum-square of a set of tolerances.
#[must_use]
pub fn rss(values: &[f64]) -> f64 {
    values.iter().map(|v| v * v).sum::<f64>().sqrt()
}

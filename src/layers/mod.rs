//! Layer generators.
//!
//! Builders place copper first, then call the generators in a fixed order:
//! silkscreen, assembly, courtyard and, where the family needs it, mask.
//! Generators only append primitives; pad geometry is never touched after
//! [`copper`] has placed it.

pub mod assembly;
pub mod copper;
pub mod courtyard;
pub mod mask;
pub mod silkscreen;

use crate::housing::Housing;

/// Body half extents in pattern coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Body {
    pub half_x: f64,
    pub half_y: f64,
}

impl Body {
    /// Two-terminal parts lie along X: body length across, width up.
    #[must_use]
    pub fn two_pin(housing: &Housing) -> Self {
        let across = housing
            .body_width
            .or(housing.body_diameter)
            .map_or(0.0, |d| d.nom);
        Self {
            half_x: housing.body_length_nom() / 2.0,
            half_y: across / 2.0,
        }
    }

    /// Every other family: body width across, length up.
    #[must_use]
    pub fn upright(housing: &Housing) -> Self {
        Self {
            half_x: housing.body_width_nom() / 2.0,
            half_y: housing.body_length_nom() / 2.0,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.half_x <= 0.0 || self.half_y <= 0.0
    }
}

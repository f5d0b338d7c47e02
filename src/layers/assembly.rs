//! Assembly (fabrication) layer: body outline, reference and value text.

use super::silkscreen::reference_y;
use super::Body;
use crate::housing::{Housing, HousingFlags};
use crate::pattern::{Layer, Pattern, TextKind};

/// Largest pin 1 chamfer on the body outline.
const MAX_CHAMFER: f64 = 1.0;

/// Body outline with texts. Polarized and SOT-23 bodies get the pin 1
/// corner chamfered.
pub fn outline(pattern: &mut Pattern<'_>, housing: &Housing, body: Body) {
    let reference_y = reference_y(pattern, body);
    let chamfered = housing.has(HousingFlags::POLARIZED) || housing.has(HousingFlags::SOT23);

    let mut pen = pattern.layer(Layer::TopAssembly);
    if !body.is_empty() {
        let (x, y) = (body.half_x, body.half_y);
        if chamfered {
            let c = (x.min(y) / 2.0).min(MAX_CHAMFER);
            pen.move_to(-x + c, -y)
                .line_to(x, -y)
                .line_to(x, y)
                .line_to(-x, y)
                .line_to(-x, -y + c)
                .line_to(-x + c, -y);
        } else {
            pen.rectangle(-x, -y, x, y);
        }
    }
    pen.text(TextKind::User("%R".to_string()), 0.0, reference_y)
        .text(TextKind::Value, 0.0, -reference_y);
}

/// Two-terminal parts, body along X.
pub fn two_pin(pattern: &mut Pattern<'_>, housing: &Housing) {
    outline(pattern, housing, Body::two_pin(housing));
}

/// Every other family.
pub fn upright(pattern: &mut Pattern<'_>, housing: &Housing) {
    outline(pattern, housing, Body::upright(housing));
}

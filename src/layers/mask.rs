//! Solder mask openings beyond the per-pad margin.

use tracing::debug;

use crate::pattern::{Layer, Pad, Pattern, Rect};

/// Gangs each pad column into one mask opening when the mask web between
/// neighbouring pads would be thinner than `minimum.maskWidth`.
pub fn dual(pattern: &mut Pattern<'_>) {
    let settings = pattern.settings();
    let margin = settings.clearance.pad_to_mask;
    let minimum = settings.minimum.mask_width;

    let mut columns: Vec<Vec<&Pad>> = Vec::new();
    for (_, pad) in pattern.pads() {
        match columns.iter_mut().find(|c| (c[0].x - pad.x).abs() < 1e-6) {
            Some(column) => column.push(pad),
            None => columns.push(vec![pad]),
        }
    }

    let openings: Vec<Rect> = columns
        .into_iter()
        .filter(|column| column.len() > 1)
        .filter_map(|mut column| {
            column.sort_by(|a, b| a.y.total_cmp(&b.y));
            let web = column
                .windows(2)
                .map(|w| (w[1].y - w[0].y) - (w[0].height + w[1].height) / 2.0 - 2.0 * margin)
                .fold(f64::INFINITY, f64::min);
            (web < minimum).then(|| {
                column
                    .iter()
                    .map(|p| p.rect())
                    .reduce(|acc, r| acc.union(&r))
                    .unwrap_or_default()
                    .expand(margin)
            })
        })
        .collect();

    if openings.is_empty() {
        return;
    }
    debug!(pattern = pattern.name(), columns = openings.len(), "ganged mask openings");
    let mut pen = pattern.layer(Layer::TopMask).line_width(0.0);
    for r in openings {
        pen.filled_rectangle(r.min_x, r.min_y, r.max_x, r.max_y);
    }
}

//! Alignment and distribution math for multi-object selections.

use crate::document::DesignDocument;
use crate::objects::ObjectId;
use kurbo::{Rect, Vec2};

/// Edge or axis to align against, relative to the selection bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    CenterX,
    Right,
    Top,
    CenterY,
    Bottom,
}

/// Axis along which to spread objects with equal gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distribution {
    Horizontal,
    Vertical,
}

/// Align objects against the combined bounds of the selection.
///
/// Returns the number of objects moved. A single object aligns against
/// itself, which is a no-op, so callers usually gate on selection size.
pub fn align_objects(
    document: &mut DesignDocument,
    ids: &[ObjectId],
    alignment: Alignment,
) -> usize {
    let Some(selection_bounds) = combined_bounds(document, ids) else {
        return 0;
    };

    let mut moved = 0;
    for &id in ids {
        let Some(object) = document.get(id) else {
            continue;
        };
        let bounds = object.bounds();
        let delta = match alignment {
            Alignment::Left => Vec2::new(selection_bounds.x0 - bounds.x0, 0.0),
            Alignment::CenterX => {
                Vec2::new(selection_bounds.center().x - bounds.center().x, 0.0)
            }
            Alignment::Right => Vec2::new(selection_bounds.x1 - bounds.x1, 0.0),
            Alignment::Top => Vec2::new(0.0, selection_bounds.y0 - bounds.y0),
            Alignment::CenterY => {
                Vec2::new(0.0, selection_bounds.center().y - bounds.center().y)
            }
            Alignment::Bottom => Vec2::new(0.0, selection_bounds.y1 - bounds.y1),
        };
        if delta.hypot2() > 0.0 {
            if let Some(object) = document.get_mut(id) {
                object.translate(delta);
                moved += 1;
            }
        }
    }
    moved
}

/// Spread N >= 3 objects so the gaps between neighbours are equal.
///
/// The outermost objects stay put; the ones between are repositioned.
/// Returns the number of objects moved.
pub fn distribute_objects(
    document: &mut DesignDocument,
    ids: &[ObjectId],
    axis: Distribution,
) -> usize {
    let mut items: Vec<(ObjectId, Rect)> = ids
        .iter()
        .filter_map(|&id| document.get(id).map(|o| (id, o.bounds())))
        .collect();
    if items.len() < 3 {
        return 0;
    }

    match axis {
        Distribution::Horizontal => {
            items.sort_by(|a, b| a.1.x0.total_cmp(&b.1.x0));
            let total_span = items.last().map(|(_, r)| r.x1).unwrap_or(0.0)
                - items.first().map(|(_, r)| r.x0).unwrap_or(0.0);
            let occupied: f64 = items.iter().map(|(_, r)| r.width()).sum();
            let gap = (total_span - occupied) / (items.len() - 1) as f64;

            let mut next_x = items[0].1.x1 + gap;
            let mut moved = 0;
            for (id, bounds) in items.iter().skip(1).take(items.len() - 2) {
                let delta = next_x - bounds.x0;
                if delta.abs() > f64::EPSILON {
                    if let Some(object) = document.get_mut(*id) {
                        object.translate(Vec2::new(delta, 0.0));
                        moved += 1;
                    }
                }
                next_x += bounds.width() + gap;
            }
            moved
        }
        Distribution::Vertical => {
            items.sort_by(|a, b| a.1.y0.total_cmp(&b.1.y0));
            let total_span = items.last().map(|(_, r)| r.y1).unwrap_or(0.0)
                - items.first().map(|(_, r)| r.y0).unwrap_or(0.0);
            let occupied: f64 = items.iter().map(|(_, r)| r.height()).sum();
            let gap = (total_span - occupied) / (items.len() - 1) as f64;

            let mut next_y = items[0].1.y1 + gap;
            let mut moved = 0;
            for (id, bounds) in items.iter().skip(1).take(items.len() - 2) {
                let delta = next_y - bounds.y0;
                if delta.abs() > f64::EPSILON {
                    if let Some(object) = document.get_mut(*id) {
                        object.translate(Vec2::new(0.0, delta));
                        moved += 1;
                    }
                }
                next_y += bounds.height() + gap;
            }
            moved
        }
    }
}

fn combined_bounds(document: &DesignDocument, ids: &[ObjectId]) -> Option<Rect> {
    ids.iter()
        .filter_map(|&id| document.get(id).map(|o| o.bounds()))
        .reduce(|a, b| a.union(b))
}

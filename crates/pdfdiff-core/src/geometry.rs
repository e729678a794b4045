//! Bounding box helpers used by the difference merger.

use crate::types::BoundingBox;

/// Margin, in page points, by which boxes are expanded before the proximity
/// test. Two difference regions closer than this are treated as one visual
/// group.
pub const MERGE_MARGIN: f64 = 50.0;

/// True unless the two boxes, each expanded outward by `margin` on every
/// side, are disjoint on either axis.
pub fn boxes_intersect(a: &BoundingBox, b: &BoundingBox, margin: f64) -> bool {
    let (ax0, ay0, ax1, ay1) = (a.x0 - margin, a.y0 - margin, a.x1 + margin, a.y1 + margin);
    let (bx0, by0, bx1, by1) = (b.x0 - margin, b.y0 - margin, b.x1 + margin, b.y1 + margin);
    !(ax1 < bx0 || bx1 < ax0 || ay1 < by0 || by1 < ay0)
}

/// Axis-aligned bounding union of two boxes.
pub fn merge_boxes(a: &BoundingBox, b: &BoundingBox) -> BoundingBox {
    BoundingBox::new(
        a.x0.min(b.x0),
        a.y0.min(b.y0),
        a.x1.max(b.x1),
        a.y1.max(b.y1),
    )
}

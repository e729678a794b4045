//! Fixed-point consolidation of raw differences into visual groups.
//!
//! Text extraction often splits one visually contiguous change into several
//! adjacent blocks (wrapped lines, hyphenation). Raw differences are grouped
//! by `(page_index, kind)` and any two whose margin-expanded anchor boxes
//! intersect are fused, repeating full passes until a pass fuses nothing.

use std::collections::HashMap;

use crate::geometry::{boxes_intersect, merge_boxes, MERGE_MARGIN};
use crate::types::{BoundingBox, Difference, DiffKind};

/// Consolidate raw differences. Fusion never crosses a page or kind boundary;
/// output order is unspecified.
pub fn merge_differences(differences: Vec<Difference>) -> Vec<Difference> {
    if differences.is_empty() {
        return Vec::new();
    }

    let mut groups: HashMap<(usize, DiffKind), Vec<Difference>> = HashMap::new();
    for diff in differences {
        groups
            .entry((diff.page_index, diff.kind))
            .or_default()
            .push(diff);
    }

    let mut merged = Vec::new();
    for (_, mut group) in groups {
        loop {
            let mut fused_in_pass = false;
            let mut i = 0;
            while i < group.len() {
                let mut j = i + 1;
                while j < group.len() {
                    if anchors_intersect(&group[i], &group[j]) {
                        let other = group.remove(j);
                        let fused = fuse(&group[i], &other);
                        group[i] = fused;
                        fused_in_pass = true;
                        // The fused element may now reach earlier-scanned
                        // neighbors, so restart the inner scan.
                        j = i + 1;
                    } else {
                        j += 1;
                    }
                }
                i += 1;
            }
            if !fused_in_pass {
                break;
            }
        }
        merged.extend(group);
    }

    merged
}

fn anchors_intersect(a: &Difference, b: &Difference) -> bool {
    match (a.anchor_box(), b.anchor_box()) {
        (Some(box_a), Some(box_b)) => boxes_intersect(&box_a, &box_b, MERGE_MARGIN),
        _ => false,
    }
}

/// Fuse two same-group differences into one: boxes union per side, texts
/// joined with a single space and trimmed, absolute y minimized per side.
fn fuse(a: &Difference, b: &Difference) -> Difference {
    Difference {
        page_index: a.page_index,
        kind: a.kind,
        bbox_a: union_side(a.bbox_a, b.bbox_a),
        bbox_b: union_side(a.bbox_b, b.bbox_b),
        text_a: Some(join_side(a.text_a.as_deref(), b.text_a.as_deref())),
        text_b: Some(join_side(a.text_b.as_deref(), b.text_b.as_deref())),
        absolute_y_a: min_side(a.absolute_y_a, b.absolute_y_a),
        absolute_y_b: min_side(a.absolute_y_b, b.absolute_y_b),
    }
}

fn union_side(a: Option<BoundingBox>, b: Option<BoundingBox>) -> Option<BoundingBox> {
    match (a, b) {
        (Some(x), Some(y)) => Some(merge_boxes(&x, &y)),
        (Some(x), None) => Some(x),
        (None, y) => y,
    }
}

// Absent sides join as empty strings, so a fused record always carries
// Some(text) per side even when the group's kind never populates that side.
fn join_side(a: Option<&str>, b: Option<&str>) -> String {
    format!("{} {}", a.unwrap_or(""), b.unwrap_or(""))
        .trim()
        .to_string()
}

fn min_side(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (x, None) => x,
        (None, y) => y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BoundingBox;
    use pretty_assertions::assert_eq;

    fn bbox(x0: f64, y0: f64, x1: f64, y1: f64) -> BoundingBox {
        BoundingBox::new(x0, y0, x1, y1)
    }

    #[test]
    fn test_adjacent_deletions_fuse() {
        let raw = vec![
            Difference::deletion(0, bbox(0.0, 0.0, 50.0, 10.0), "first", 0.0),
            Difference::deletion(0, bbox(40.0, 0.0, 90.0, 10.0), "second", 0.0),
        ];
        let merged = merge_differences(raw);

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].kind, DiffKind::Deletion);
        assert_eq!(merged[0].bbox_a, Some(bbox(0.0, 0.0, 90.0, 10.0)));
        assert_eq!(merged[0].text_a.as_deref(), Some("first second"));
        // The B side never existed in a deletion group; after fusion it is an
        // empty string, not absent.
        assert_eq!(merged[0].text_b.as_deref(), Some(""));
        assert!(merged[0].bbox_b.is_none());
    }

    #[test]
    fn test_distant_differences_stay_separate() {
        let raw = vec![
            Difference::deletion(0, bbox(0.0, 0.0, 50.0, 10.0), "top", 0.0),
            Difference::deletion(0, bbox(0.0, 500.0, 50.0, 510.0), "bottom", 500.0),
        ];
        assert_eq!(merge_differences(raw).len(), 2);
    }

    #[test]
    fn test_kinds_never_fuse() {
        let raw = vec![
            Difference::deletion(0, bbox(0.0, 0.0, 50.0, 10.0), "gone", 0.0),
            Difference::addition(0, bbox(0.0, 0.0, 50.0, 10.0), "new", 0.0),
        ];
        let merged = merge_differences(raw);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_pages_never_fuse() {
        let raw = vec![
            Difference::deletion(0, bbox(0.0, 0.0, 50.0, 10.0), "a", 0.0),
            Difference::deletion(1, bbox(0.0, 0.0, 50.0, 10.0), "b", 800.0),
        ];
        assert_eq!(merge_differences(raw).len(), 2);
    }

    #[test]
    fn test_chain_fuses_transitively() {
        // Left and right are too far apart to fuse directly (190pt gap) and
        // only connect through the middle box; the rescan after each fusion
        // must pick up the bridge.
        let raw = vec![
            Difference::deletion(0, bbox(0.0, 0.0, 10.0, 10.0), "left", 0.0),
            Difference::deletion(0, bbox(200.0, 0.0, 210.0, 10.0), "right", 0.0),
            Difference::deletion(0, bbox(100.0, 0.0, 110.0, 10.0), "middle", 0.0),
        ];
        let merged = merge_differences(raw);

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].bbox_a, Some(bbox(0.0, 0.0, 210.0, 10.0)));
        assert_eq!(merged[0].text_a.as_deref(), Some("left middle right"));
    }

    #[test]
    fn test_modification_fuses_both_sides_independently() {
        let first = Difference::modification(
            0,
            bbox(0.0, 0.0, 50.0, 10.0),
            bbox(0.0, 5.0, 60.0, 15.0),
            "a1",
            "b1",
            0.0,
            5.0,
        );
        let second = Difference::modification(
            0,
            bbox(40.0, 0.0, 90.0, 10.0),
            bbox(50.0, 5.0, 100.0, 15.0),
            "a2",
            "b2",
            0.0,
            5.0,
        );
        let merged = merge_differences(vec![first, second]);

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].bbox_a, Some(bbox(0.0, 0.0, 90.0, 10.0)));
        assert_eq!(merged[0].bbox_b, Some(bbox(0.0, 5.0, 100.0, 15.0)));
        assert_eq!(merged[0].text_a.as_deref(), Some("a1 a2"));
        assert_eq!(merged[0].text_b.as_deref(), Some("b1 b2"));
    }

    #[test]
    fn test_absolute_y_takes_minimum() {
        let raw = vec![
            Difference::deletion(1, bbox(0.0, 40.0, 50.0, 50.0), "lower", 840.0),
            Difference::deletion(1, bbox(0.0, 10.0, 50.0, 20.0), "upper", 810.0),
        ];
        let merged = merge_differences(raw);

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].absolute_y_a, Some(810.0));
    }

    #[test]
    fn test_merge_is_idempotent() {
        let raw = vec![
            Difference::deletion(0, bbox(0.0, 0.0, 50.0, 10.0), "one", 0.0),
            Difference::deletion(0, bbox(40.0, 0.0, 90.0, 10.0), "two", 0.0),
            Difference::addition(0, bbox(0.0, 400.0, 50.0, 410.0), "three", 400.0),
        ];
        let once = merge_differences(raw);
        let mut twice = merge_differences(once.clone());

        assert_eq!(once.len(), twice.len());
        for diff in &once {
            let pos = twice.iter().position(|d| d == diff);
            assert!(pos.is_some(), "difference lost on re-merge: {diff:?}");
            twice.remove(pos.unwrap());
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(merge_differences(Vec::new()).is_empty());
    }
}

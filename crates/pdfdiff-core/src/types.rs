//! Data model for document comparison
//!
//! Input types (`Document`, `Page`, `TextBlock`) describe one fully-extracted
//! document version; output types (`Difference`, `ComparisonReport`) carry the
//! comparison result. All wire names match the consumer's JSON contract.

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in page-local coordinates, y increasing downward.
///
/// Serialized as a 4-element array `[x0, y0, x1, y1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct BoundingBox {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl BoundingBox {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn is_finite(&self) -> bool {
        self.x0.is_finite() && self.y0.is_finite() && self.x1.is_finite() && self.y1.is_finite()
    }
}

impl From<[f64; 4]> for BoundingBox {
    fn from(v: [f64; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

impl From<BoundingBox> for [f64; 4] {
    fn from(b: BoundingBox) -> Self {
        [b.x0, b.y0, b.x1, b.y1]
    }
}

/// One positioned text block, as produced by the external text extractor.
/// Text is raw and not guaranteed trimmed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    pub bbox: BoundingBox,
    pub text: String,
}

impl TextBlock {
    pub fn new(bbox: BoundingBox, text: impl Into<String>) -> Self {
        Self {
            bbox,
            text: text.into(),
        }
    }
}

/// One extracted page: its height in page points plus its text blocks in
/// extraction order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub height: f64,
    pub blocks: Vec<TextBlock>,
}

/// A fully-extracted document version.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub pages: Vec<Page>,
}

impl Document {
    /// Sum of all page heights, used by viewers to scale scroll positions.
    pub fn total_height(&self) -> f64 {
        self.pages.iter().map(|p| p.height).sum()
    }
}

/// Kind of a visual difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffKind {
    Addition,
    Deletion,
    Modification,
}

impl std::fmt::Display for DiffKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiffKind::Addition => write!(f, "addition"),
            DiffKind::Deletion => write!(f, "deletion"),
            DiffKind::Modification => write!(f, "modification"),
        }
    }
}

/// One visual difference, anchored to a page and to whole-document vertical
/// coordinates on each side.
///
/// A `deletion` populates only the `_a` side, an `addition` only `_b`, a
/// `modification` both; at least one bbox is always present. `absolute_y_*` is
/// the page-local y0 plus the accumulated height of all prior pages of that
/// version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Difference {
    pub page_index: usize,
    #[serde(rename = "type")]
    pub kind: DiffKind,
    pub bbox_a: Option<BoundingBox>,
    pub bbox_b: Option<BoundingBox>,
    pub text_a: Option<String>,
    pub text_b: Option<String>,
    pub absolute_y_a: Option<f64>,
    pub absolute_y_b: Option<f64>,
}

impl Difference {
    pub fn addition(
        page_index: usize,
        bbox_b: BoundingBox,
        text_b: impl Into<String>,
        absolute_y_b: f64,
    ) -> Self {
        Self {
            page_index,
            kind: DiffKind::Addition,
            bbox_a: None,
            bbox_b: Some(bbox_b),
            text_a: None,
            text_b: Some(text_b.into()),
            absolute_y_a: None,
            absolute_y_b: Some(absolute_y_b),
        }
    }

    pub fn deletion(
        page_index: usize,
        bbox_a: BoundingBox,
        text_a: impl Into<String>,
        absolute_y_a: f64,
    ) -> Self {
        Self {
            page_index,
            kind: DiffKind::Deletion,
            bbox_a: Some(bbox_a),
            bbox_b: None,
            text_a: Some(text_a.into()),
            text_b: None,
            absolute_y_a: Some(absolute_y_a),
            absolute_y_b: None,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn modification(
        page_index: usize,
        bbox_a: BoundingBox,
        bbox_b: BoundingBox,
        text_a: impl Into<String>,
        text_b: impl Into<String>,
        absolute_y_a: f64,
        absolute_y_b: f64,
    ) -> Self {
        Self {
            page_index,
            kind: DiffKind::Modification,
            bbox_a: Some(bbox_a),
            bbox_b: Some(bbox_b),
            text_a: Some(text_a.into()),
            text_b: Some(text_b.into()),
            absolute_y_a: Some(absolute_y_a),
            absolute_y_b: Some(absolute_y_b),
        }
    }

    /// The box the merger uses to decide proximity: side A if present,
    /// otherwise side B.
    pub fn anchor_box(&self) -> Option<BoundingBox> {
        self.bbox_a.or(self.bbox_b)
    }
}

/// Per-version document metadata.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DocumentInfo {
    pub total_height: f64,
}

/// Metadata for both versions, keyed `"a"`/`"b"` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DocumentInfoPair {
    pub a: DocumentInfo,
    pub b: DocumentInfo,
}

/// Full result of one comparison. Ordering of `differences` is unspecified
/// beyond grouping by page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub document_info: DocumentInfoPair,
    pub differences: Vec<Difference>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bbox_serializes_as_array() {
        let b = BoundingBox::new(1.0, 2.0, 3.0, 4.0);
        let json = serde_json::to_string(&b).unwrap();
        assert_eq!(json, "[1.0,2.0,3.0,4.0]");

        let back: BoundingBox = serde_json::from_str("[1.0,2.0,3.0,4.0]").unwrap();
        assert_eq!(back, b);
    }

    #[test]
    fn test_kind_serializes_lowercase_under_type_key() {
        let diff = Difference::deletion(2, BoundingBox::new(0.0, 0.0, 10.0, 10.0), "gone", 5.0);
        let value = serde_json::to_value(&diff).unwrap();
        assert_eq!(value["type"], "deletion");
        assert_eq!(value["page_index"], 2);
        assert_eq!(value["bbox_b"], serde_json::Value::Null);
        assert_eq!(value["text_a"], "gone");
    }

    #[test]
    fn test_constructors_populate_one_side() {
        let bbox = BoundingBox::new(0.0, 0.0, 10.0, 10.0);

        let add = Difference::addition(0, bbox, "new", 0.0);
        assert!(add.bbox_a.is_none());
        assert!(add.bbox_b.is_some());

        let del = Difference::deletion(0, bbox, "old", 0.0);
        assert!(del.bbox_a.is_some());
        assert!(del.bbox_b.is_none());

        assert_eq!(del.anchor_box(), Some(bbox));
        assert_eq!(add.anchor_box(), Some(bbox));
    }

    #[test]
    fn test_total_height_sums_pages() {
        let doc = Document {
            pages: vec![
                Page {
                    height: 800.0,
                    blocks: vec![],
                },
                Page {
                    height: 600.0,
                    blocks: vec![],
                },
            ],
        };
        assert_eq!(doc.total_height(), 1400.0);
        assert_eq!(Document::default().total_height(), 0.0);
    }
}

//! Visual comparison of two paginated document versions.
//!
//! Input is the extracted representation of each version: per-page heights
//! plus positioned text blocks. The engine matches blocks between versions
//! with a combined text-similarity / positional heuristic, classifies them
//! into additions, deletions and modifications, and consolidates adjacent
//! same-type regions into visual groups. The computation is pure, synchronous
//! and request-local.

pub mod classify;
pub mod error;
pub mod geometry;
pub mod matching;
pub mod merge;
pub mod offsets;
pub mod types;

pub use error::DiffError;
pub use merge::merge_differences;
pub use types::{
    BoundingBox, ComparisonReport, DiffKind, Difference, Document, DocumentInfo, DocumentInfoPair,
    Page, TextBlock,
};

use classify::classify_page;
use offsets::{page_offsets, total_height};

/// Compare two document versions and produce the consolidated difference
/// report.
///
/// Pages are walked up to the longer version's page count; a page missing on
/// one side contributes an empty block list, so that page yields only
/// additions or only deletions. Fails without partial results when either
/// document carries non-finite geometry.
pub fn compare(doc_a: &Document, doc_b: &Document) -> Result<ComparisonReport, DiffError> {
    validate(doc_a, "a")?;
    validate(doc_b, "b")?;

    let heights_a: Vec<f64> = doc_a.pages.iter().map(|p| p.height).collect();
    let heights_b: Vec<f64> = doc_b.pages.iter().map(|p| p.height).collect();
    let offsets_a = page_offsets(&heights_a);
    let offsets_b = page_offsets(&heights_b);
    let total_a = total_height(&heights_a);
    let total_b = total_height(&heights_b);

    let num_pages = doc_a.pages.len().max(doc_b.pages.len());
    let mut raw = Vec::new();
    for i in 0..num_pages {
        let blocks_a = doc_a.pages.get(i).map_or(&[][..], |p| p.blocks.as_slice());
        let blocks_b = doc_b.pages.get(i).map_or(&[][..], |p| p.blocks.as_slice());
        let offset_a = offsets_a.get(i).copied().unwrap_or(total_a);
        let offset_b = offsets_b.get(i).copied().unwrap_or(total_b);
        raw.extend(classify_page(i, blocks_a, blocks_b, offset_a, offset_b));
    }

    Ok(ComparisonReport {
        document_info: DocumentInfoPair {
            a: DocumentInfo {
                total_height: total_a,
            },
            b: DocumentInfo {
                total_height: total_b,
            },
        },
        differences: merge_differences(raw),
    })
}

// Non-finite coordinates would silently poison offsets and match scores, so
// they fail the whole comparison up front. Degenerate-but-finite geometry
// (zero or negative extents) is allowed; the matcher guards its divisions.
fn validate(doc: &Document, side: &'static str) -> Result<(), DiffError> {
    for (page_index, page) in doc.pages.iter().enumerate() {
        if !page.height.is_finite() {
            return Err(DiffError::InvalidGeometry {
                side,
                page: page_index,
                detail: format!("non-finite page height {}", page.height),
            });
        }
        for block in &page.blocks {
            if !block.bbox.is_finite() {
                return Err(DiffError::InvalidGeometry {
                    side,
                    page: page_index,
                    detail: format!("non-finite block bbox {:?}", block.bbox),
                });
            }
        }
    }
    Ok(())
}

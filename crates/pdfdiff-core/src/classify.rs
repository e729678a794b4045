//! Per-page classification of matched and unmatched blocks into raw
//! difference records.

use crate::matching::{find_best_match, similarity, EQUALITY_THRESHOLD};
use crate::types::{Difference, TextBlock};

/// Classify one page's blocks into raw differences.
///
/// A's blocks are scanned in extraction order; each winning B candidate is
/// consumed immediately, so matching is first-come greedy rather than globally
/// optimal. Whitespace-only blocks never produce a record on their own, and a
/// matched pair at or above the equality threshold produces nothing.
pub fn classify_page(
    page_index: usize,
    blocks_a: &[TextBlock],
    blocks_b: &[TextBlock],
    offset_a: f64,
    offset_b: f64,
) -> Vec<Difference> {
    let mut taken = vec![false; blocks_b.len()];
    let mut differences = Vec::new();

    for block_a in blocks_a {
        let text_a = block_a.text.trim();

        match find_best_match(block_a, blocks_b, &taken) {
            Some(idx) => {
                taken[idx] = true;
                let block_b = &blocks_b[idx];
                let text_b = block_b.text.trim();

                if similarity(text_a, text_b) < EQUALITY_THRESHOLD
                    && (!text_a.is_empty() || !text_b.is_empty())
                {
                    differences.push(Difference::modification(
                        page_index,
                        block_a.bbox,
                        block_b.bbox,
                        text_a,
                        text_b,
                        offset_a + block_a.bbox.y0,
                        offset_b + block_b.bbox.y0,
                    ));
                }
            }
            None => {
                if !text_a.is_empty() {
                    differences.push(Difference::deletion(
                        page_index,
                        block_a.bbox,
                        text_a,
                        offset_a + block_a.bbox.y0,
                    ));
                }
            }
        }
    }

    for (idx, block_b) in blocks_b.iter().enumerate() {
        if taken[idx] {
            continue;
        }
        let text_b = block_b.text.trim();
        if !text_b.is_empty() {
            differences.push(Difference::addition(
                page_index,
                block_b.bbox,
                text_b,
                offset_b + block_b.bbox.y0,
            ));
        }
    }

    differences
}

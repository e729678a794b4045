//! Greedy block matching between the two document versions.
//!
//! A block from version A is paired with the best not-yet-consumed block from
//! version B on the same page, using a combined text-similarity / positional
//! score. Matching is local and greedy: winners are removed from the pool
//! immediately, in A's iteration order.

use crate::types::TextBlock;

/// Minimum normalized text similarity for two blocks to be pairable.
pub const TEXT_SIMILARITY_THRESHOLD: f64 = 0.7;
/// Maximum vertical offset, in page points, between pairable blocks.
pub const Y_THRESHOLD: f64 = 10.0;
/// Minimum fraction of either block's width the horizontal overlap must cover.
pub const OVERLAP_THRESHOLD: f64 = 0.5;
/// Similarity at or above which two texts are considered equal (no
/// modification emitted).
pub const EQUALITY_THRESHOLD: f64 = 0.999;

/// Normalized Levenshtein similarity in [0, 1]; 1.0 for two empty strings.
pub fn similarity(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(a, b)
}

/// Find the best match for `block` among `candidates`, skipping indices
/// already flagged in `taken`. Returns the winning candidate index, or `None`
/// when no candidate clears all three eligibility gates.
///
/// Score is `ratio - y_diff / 100`; a strictly higher score is required to
/// displace the running best, so ties keep the first-encountered candidate in
/// extraction order.
pub fn find_best_match(
    block: &TextBlock,
    candidates: &[TextBlock],
    taken: &[bool],
) -> Option<usize> {
    let text = block.text.trim();
    let mut best = None;
    let mut best_score = -1.0_f64;

    for (idx, candidate) in candidates.iter().enumerate() {
        if taken[idx] {
            continue;
        }

        let ratio = similarity(text, candidate.text.trim());
        let y_diff = (block.bbox.y0 - candidate.bbox.y0).abs();
        let overlap_x =
            (block.bbox.x1.min(candidate.bbox.x1) - block.bbox.x0.max(candidate.bbox.x0)).max(0.0);

        if ratio < TEXT_SIMILARITY_THRESHOLD || y_diff > Y_THRESHOLD {
            continue;
        }
        if !overlap_covers(overlap_x, block.bbox.width())
            && !overlap_covers(overlap_x, candidate.bbox.width())
        {
            continue;
        }

        // Penalize vertical distance so the positionally closest of several
        // similar candidates wins.
        let score = ratio - y_diff / 100.0;
        if score > best_score {
            best_score = score;
            best = Some(idx);
        }
    }

    best
}

/// Overlap gate for one side. Zero/negative widths never divide and never
/// qualify on their own.
fn overlap_covers(overlap: f64, width: f64) -> bool {
    width > 0.0 && overlap / width > OVERLAP_THRESHOLD
}

//! Per-page vertical offsets within the whole-document coordinate space.
//!
//! The two versions may paginate differently, so offsets are computed
//! independently per version and differences carry a separate absolute y for
//! each side.

/// Exclusive prefix sums of page heights: the offset of page `i` is the sum
/// of all prior page heights, 0 for page 0.
pub fn page_offsets(heights: &[f64]) -> Vec<f64> {
    let mut offsets = Vec::with_capacity(heights.len());
    let mut acc = 0.0;
    for h in heights {
        offsets.push(acc);
        acc += h;
    }
    offsets
}

/// Total document height.
pub fn total_height(heights: &[f64]) -> f64 {
    heights.iter().sum()
}

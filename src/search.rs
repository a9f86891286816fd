//! Bracketing-interval search over a sorted grid.

use num_traits::Float;

/// Find the index of the grid interval bracketing an observation point.
///
/// Returns `idx` such that `xs[idx] <= x < xs[idx + 1]` where possible,
/// clamped to `[0, xs.len() - 2]`: observation points below the grid map to
/// the first interval and points at or beyond the last grid point map to the
/// last interval, so extrapolation proceeds through the nearest bracket's
/// formula.
///
/// Bisection search, worst case log2(number of grid elements) iterations.
///
/// Assumes `xs` is monotonically increasing with at least 2 entries;
/// checking this is expensive, and is left to the user.
#[inline]
pub fn bracket_index<T: Float>(xs: &[T], x: T) -> usize {
    ((xs.partition_point(|v| *v <= x) as isize - 1).max(0) as usize).min(xs.len() - 2)
}

//! Variable-order Lagrange polynomial interpolation over a window of
//! consecutive table points, and the boundary arithmetic that keeps that
//! window inside the table.

use num_traits::Float;

/// Starting index of the `order + 1` point window used for a polynomial fit
/// around the bracket at `idx`.
///
/// The bracketing search returns the left index of a 2-point interval; a
/// wider window is first shifted left by `(order - 1) / 2` to center it on
/// the bracket, then clamped so it never runs past the last grid point:
///
/// * order 2: no centering; the window moves back one slot only when `idx`
///   is the last interval of the grid.
/// * order 3: the window is centered on the bracket, then pulled in at the
///   right edge.
///
/// Requires `1 <= order <= n - 1`. The returned start always satisfies
/// `start + order <= n - 1`, so the window `start..=start + order` is in
/// bounds.
#[inline]
pub fn stencil_start(n: usize, order: usize, idx: usize) -> usize {
    idx.saturating_sub((order - 1) / 2).min(n - 1 - order)
}

/// Evaluate the Lagrange interpolation polynomial through the `order + 1`
/// consecutive table points starting at `start`.
///
/// The basis weight for window position `i` is
/// `prod over j != i of (x - xs[start + j]) / (xs[start + i] - xs[start + j])`,
/// which carries the polynomial exactly through every window point. If the
/// tabulated values sample a polynomial of degree at most `order`, the
/// result is exact to rounding for any `x`, inside the window or not.
///
/// The weights are folded into the accumulator one point at a time, so
/// evaluation is alloc-free regardless of order.
///
/// The window must lie entirely inside the table
/// (`start + order < xs.len()`); no bounds adjustment is performed here.
/// Use [`stencil_start`] to produce a valid `start` from a bracket index.
#[inline]
pub fn lagrangian<T: Float>(xs: &[T], ys: &[T], start: usize, x: T, order: usize) -> T {
    let mut acc = T::zero();
    for i in 0..=order {
        let mut num = T::one();
        let mut den = T::one();
        for j in 0..=order {
            if j != i {
                num = num * (x - xs[start + j]);
                den = den * (xs[start + i] - xs[start + j]);
            }
        }
        acc = acc + ys[start + i] * (num / den);
    }
    acc
}

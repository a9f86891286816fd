//! Tabulated-function evaluation with a selectable interpolation law.
//!
//! ```rust
//! use interp1d::{InterpolationLaw, Tabular1D};
//!
//! // Tabulated y = x^2
//! let xs = [1.0_f64, 2.0, 3.0, 4.0];
//! let ys = [1.0_f64, 4.0, 9.0, 16.0];
//!
//! let interpolator = Tabular1D::new(&xs, &ys, InterpolationLaw::Cubic).unwrap();
//! let y = interpolator.eval_one(2.5).unwrap();
//! assert!((y - 6.25).abs() < 1e-12);
//! ```

use num_traits::Float;

use crate::lagrange::{lagrangian, stencil_start};
use crate::law::{InterpError, InterpolationLaw};
use crate::pointwise::{lin_lin, lin_log, log_lin, log_log};
use crate::search::bracket_index;

/// A one-dimensional tabulated function paired with the law used to
/// evaluate it between (and beyond) its grid points.
///
/// Borrows the table for the duration of the struct; the caller owns the
/// storage and guarantees that `xs` is strictly increasing. Construction
/// performs only cheap structural checks, and evaluation performs none, so
/// the struct can be rebuilt per call or shared read-only across threads at
/// no cost.
#[derive(Clone, Copy)]
pub struct Tabular1D<'a, T: Float> {
    xs: &'a [T],
    ys: &'a [T],
    law: InterpolationLaw,
}

impl<'a, T: Float> Tabular1D<'a, T> {
    /// Build an interpolator over borrowed table data.
    ///
    /// Only the first pair of grid entries is probed for monotonicity;
    /// checking the whole grid is expensive, and is left to the user.
    ///
    /// # Errors
    /// * If `xs` and `ys` lengths do not match
    /// * If the table is shorter than the law's stencil (2 points for the
    ///   pointwise laws, 3 for quadratic, 4 for cubic)
    /// * If the first two grid entries are not increasing
    pub fn new(xs: &'a [T], ys: &'a [T], law: InterpolationLaw) -> Result<Self, InterpError> {
        if xs.len() != ys.len() {
            return Err(InterpError::LengthMismatch);
        }
        if xs.len() < law.min_points() {
            return Err(InterpError::NotEnoughPoints);
        }
        let monotonic_maybe = xs[1] > xs[0];
        if !monotonic_maybe {
            return Err(InterpError::NotMonotonic);
        }

        Ok(Self { xs, ys, law })
    }

    /// Evaluate the interpolant at an observation point.
    ///
    /// Observation points outside the grid extrapolate through the nearest
    /// bracket (pointwise laws) or the nearest polynomial window. Domain
    /// violations under a log law are not checked and propagate as NaN or
    /// infinity.
    ///
    /// # Errors
    /// * If the law is not implemented by this evaluator (histogram)
    #[inline]
    pub fn eval_one(&self, x: T) -> Result<T, InterpError> {
        let (xs, ys) = (self.xs, self.ys);
        let i = bracket_index(xs, x);
        match self.law {
            InterpolationLaw::LinLin => Ok(lin_lin(xs[i], xs[i + 1], ys[i], ys[i + 1], x)),
            InterpolationLaw::LinLog => Ok(lin_log(xs[i], xs[i + 1], ys[i], ys[i + 1], x)),
            InterpolationLaw::LogLin => Ok(log_lin(xs[i], xs[i + 1], ys[i], ys[i + 1], x)),
            InterpolationLaw::LogLog => Ok(log_log(xs[i], xs[i + 1], ys[i], ys[i + 1], x)),
            InterpolationLaw::Quadratic => {
                Ok(lagrangian(xs, ys, stencil_start(xs.len(), 2, i), x, 2))
            }
            InterpolationLaw::Cubic => {
                Ok(lagrangian(xs, ys, stencil_start(xs.len(), 3, i), x, 3))
            }
            InterpolationLaw::Histogram => Err(InterpError::UnsupportedLaw),
        }
    }

    /// Evaluate the interpolant at a set of observation points.
    ///
    /// # Errors
    /// * If `locs` and `out` lengths do not match
    /// * If the law is not implemented by this evaluator
    #[inline]
    pub fn eval(&self, locs: &[T], out: &mut [T]) -> Result<(), InterpError> {
        if locs.len() != out.len() {
            return Err(InterpError::LengthMismatch);
        }

        for i in 0..locs.len() {
            out[i] = self.eval_one(locs[i])?;
        }

        Ok(())
    }

    /// Evaluate the interpolant at a set of observation points, allocating
    /// for the output values for convenience.
    #[cfg(feature = "std")]
    #[inline]
    pub fn eval_alloc(&self, locs: &[T]) -> Result<Vec<T>, InterpError> {
        let mut out = vec![T::zero(); locs.len()];
        self.eval(locs, &mut out)?;
        Ok(out)
    }
}

/// Interpolate a tabulated function at `x` under the given law.
///
/// `LinLin` is the conventional choice for tabulated data whose law is not
/// otherwise specified.
///
/// This is a convenience function; it rebuilds the interpolator struct on
/// every call, but the overhead of doing so is minimal even when evaluating
/// one observation point at a time.
///
/// # Errors
/// * If the table fails the structural checks in [`Tabular1D::new`]
/// * If the law is not implemented by this evaluator
#[inline]
pub fn interpolate<T: Float>(
    xs: &[T],
    ys: &[T],
    x: T,
    law: InterpolationLaw,
) -> Result<T, InterpError> {
    Tabular1D::new(xs, ys, law)?.eval_one(x)
}

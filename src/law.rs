//! Interpolation law selection and the error taxonomy shared across the
//! crate.

use core::fmt;

/// Interpolation laws for tabulated data.
///
/// The names follow the `<y-axis>_<x-axis>` convention used by evaluated
/// data libraries: [`LinLog`](Self::LinLog) is y linear in ln(x),
/// [`LogLin`](Self::LogLin) is ln(y) linear in x, and so on. `Quadratic`
/// and `Cubic` select a Lagrange polynomial fit, which widens the evaluation
/// window from the 2-point bracket to a 3- or 4-point stencil.
///
/// `Histogram` is a valid law identifier in tabulated data formats, but this
/// crate interpolates between points rather than holding them, so
/// dispatching it returns [`InterpError::UnsupportedLaw`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InterpolationLaw {
    /// Constant on each interval; carried for data compatibility,
    /// not evaluated by this crate
    Histogram,
    /// y linear in x
    LinLin,
    /// y linear in ln(x)
    LinLog,
    /// ln(y) linear in x
    LogLin,
    /// ln(y) linear in ln(x)
    LogLog,
    /// Lagrange polynomial through a 3-point stencil
    Quadratic,
    /// Lagrange polynomial through a 4-point stencil
    Cubic,
}

impl InterpolationLaw {
    /// Map an ENDF-6 interpolation code to a law.
    ///
    /// Codes 1 through 5 are defined (histogram, lin-lin, lin-log, log-lin,
    /// log-log). The polynomial laws have no ENDF code and are constructed
    /// directly.
    ///
    /// # Errors
    /// * If the code is outside the defined set
    pub fn from_endf(code: u8) -> Result<Self, InterpError> {
        match code {
            1 => Ok(Self::Histogram),
            2 => Ok(Self::LinLin),
            3 => Ok(Self::LinLog),
            4 => Ok(Self::LogLin),
            5 => Ok(Self::LogLog),
            _ => Err(InterpError::UnsupportedLaw),
        }
    }

    /// ENDF-6 code for this law, if one exists.
    pub fn endf_code(self) -> Option<u8> {
        match self {
            Self::Histogram => Some(1),
            Self::LinLin => Some(2),
            Self::LinLog => Some(3),
            Self::LogLin => Some(4),
            Self::LogLog => Some(5),
            Self::Quadratic | Self::Cubic => None,
        }
    }

    /// Polynomial order of the fit on each evaluation window.
    pub fn order(self) -> usize {
        match self {
            Self::Histogram => 0,
            Self::Quadratic => 2,
            Self::Cubic => 3,
            _ => 1,
        }
    }

    /// Minimum table length required to evaluate this law.
    pub fn min_points(self) -> usize {
        match self {
            Self::Quadratic => 3,
            Self::Cubic => 4,
            _ => 2,
        }
    }
}

/// Construction and evaluation errors.
///
/// Numeric-domain violations (non-positive operands under a log law, a
/// degenerate bracket) are deliberately not represented here; they propagate
/// through the arithmetic as NaN or infinity instead of costing a check on
/// every evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InterpError {
    /// Law identifier outside the set this evaluator implements
    UnsupportedLaw,
    /// Input slice lengths disagree
    LengthMismatch,
    /// Table has fewer points than the law's stencil
    NotEnoughPoints,
    /// Grid is not monotonically increasing
    NotMonotonic,
}

impl fmt::Display for InterpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::UnsupportedLaw => "Unsupported interpolation law",
            Self::LengthMismatch => "Length mismatch",
            Self::NotEnoughPoints => "Not enough grid points for this law",
            Self::NotMonotonic => "Grid must be monotonically increasing",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InterpError {}

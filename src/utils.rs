//! Convenience methods for constructing grids in a way that echoes,
//! but does not exactly match, methods common in scripting languages.
use num_traits::Float;

/// Generates evenly spaced values from start to stop,
/// including the endpoint.
pub fn linspace<T>(start: T, stop: T, n: usize) -> Vec<T>
where
    T: Float,
{
    let dx: T = (stop - start) / T::from(n - 1).unwrap();
    (0..n).map(|i| start + T::from(i).unwrap() * dx).collect()
}

/// Generates logarithmically spaced values from start to stop,
/// including the endpoint. Both endpoints must be positive.
pub fn logspace<T>(start: T, stop: T, n: usize) -> Vec<T>
where
    T: Float,
{
    let dlnx: T = (stop.ln() - start.ln()) / T::from(n - 1).unwrap();
    (0..n)
        .map(|i| (start.ln() + T::from(i).unwrap() * dlnx).exp())
        .collect()
}

use rand::distr::StandardUniform;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

/// Fixed random seed to support repeatable testing
const SEED: [u8; 32] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 15, 14, 13, 12, 11, 10, 9, 8, 7, 6,
    5, 4, 3, 2, 1,
];

/// Get a random number generator with a const seed for repeatable testing
pub fn rng_fixed_seed() -> StdRng {
    StdRng::from_seed(SEED)
}

/// Generate `n` random numbers using provided generator
pub fn randn<T>(rng: &mut StdRng, n: usize) -> Vec<T>
where
    StandardUniform: rand::distr::Distribution<T>,
{
    std::iter::repeat_with(|| rng.random::<T>()).take(n).collect()
}

/// Generate a strictly increasing but unevenly spaced grid of `n` points
/// spanning roughly (start, stop), by jittering an even grid by less than
/// half a step on each side.
pub fn rand_grid(rng: &mut StdRng, start: f64, stop: f64, n: usize) -> Vec<f64> {
    let mut x = crate::utils::linspace(start, stop, n);
    let dx = (stop - start) / (n as f64 - 1.0);
    let jitter = randn::<f64>(rng, n);
    (0..n).for_each(|i| x[i] += (jitter[i] - 0.5) * 0.4 * dx);
    (0..n - 1).for_each(|i| assert!(x[i + 1] > x[i]));
    x
}

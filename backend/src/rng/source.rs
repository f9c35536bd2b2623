//! Injected random source used by the simulation model

/// A source of uniform reals in [0.0, 1.0)
///
/// The simulation model consumes exactly one value per trial. Tests can
/// substitute a scripted source to pin outcomes.
///
/// # Example
/// ```
/// use binomial_simulator_core_rs::{RandomSource, RngManager};
///
/// let mut rng = RngManager::new(7);
/// let u = rng.next_f64();
/// assert!((0.0..1.0).contains(&u));
/// ```
pub trait RandomSource {
    /// Draw one uniform value in [0.0, 1.0)
    fn next_f64(&mut self) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

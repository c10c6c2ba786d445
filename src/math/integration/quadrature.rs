use crate::math::integration::gausskronrod::QuadratureEstimate;

/// A fixed rule integrating a function over a closed bounded interval `[a, b]`.
pub trait Quadrature {
    fn integrate<F>(&self, f: F, a: f64, b: f64) -> f64
        where F: Fn(f64) -> f64;

    /// Integrates and also returns the rule's error indicator.
    fn integrate_with_error<F>(&self, f: F, a: f64, b: f64) -> QuadratureEstimate
        where F: Fn(f64) -> f64;

    /// Number of integrand evaluations per call.
    fn evaluations(&self) -> usize;
}

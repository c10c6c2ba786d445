use log::{
    debug,
    trace,
    warn
};
use serde::Deserialize;

use crate::math::integration::gausskronrod::{
    GaussKronrod15,
    QuadratureEstimate
};
use crate::math::integration::quadrature::Quadrature;
use crate::math::integration::quadratureerror::QuadratureError;

// ─────────────────────────────────────────────────────────────────────────────
// Semi-infinite integration on [a, +∞)
// ─────────────────────────────────────────────────────────────────────────────
//
// Substitution x = a + (1 - t)/t, dx = -dt/t²:
//
//   ∫_a^∞ f(x) dx = ∫_0^1 f(a + (1 - t)/t) / t² dt
//
// t → 1 maps to x = a, t → 0⁺ maps to x → +∞. The transformed integrand is
// singular at t = 0, so [0, 1] is cut into equal pieces and the fixed rule is
// applied on each. Rule nodes are strictly interior, so t = 0 is never sampled.

pub const DEFAULT_LOWER_BOUND: f64 = 0.0;
pub const DEFAULT_SUBDIVISIONS: usize = 5;

fn default_lower_bound() -> f64 {
    DEFAULT_LOWER_BOUND
}

fn default_subdivisions() -> usize {
    DEFAULT_SUBDIVISIONS
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct SemiInfiniteSettings {
    #[serde(default = "default_lower_bound")]
    lower_bound: f64,
    #[serde(default = "default_subdivisions")]
    subdivisions: usize
}

impl SemiInfiniteSettings {
    pub fn new(lower_bound: f64, subdivisions: usize) -> SemiInfiniteSettings {
        SemiInfiniteSettings { lower_bound, subdivisions }
    }

    pub fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    pub fn subdivisions(&self) -> usize {
        self.subdivisions
    }

    pub fn with_lower_bound(mut self, lower_bound: f64) -> SemiInfiniteSettings {
        self.lower_bound = lower_bound;
        self
    }

    pub fn with_subdivisions(mut self, subdivisions: usize) -> SemiInfiniteSettings {
        self.subdivisions = subdivisions;
        self
    }

    pub fn validate(&self) -> Result<(), QuadratureError> {
        QuadratureError::check_lower_bound(self.lower_bound)?;
        QuadratureError::check_subdivisions(self.subdivisions)
    }
}

impl Default for SemiInfiniteSettings {
    fn default() -> SemiInfiniteSettings {
        SemiInfiniteSettings::new(DEFAULT_LOWER_BOUND, DEFAULT_SUBDIVISIONS)
    }
}

pub struct SemiInfiniteIntegrator<Q: Quadrature = GaussKronrod15> {
    rule: Q,
    settings: SemiInfiniteSettings
}

impl SemiInfiniteIntegrator<GaussKronrod15> {
    pub fn new(settings: SemiInfiniteSettings) -> SemiInfiniteIntegrator<GaussKronrod15> {
        SemiInfiniteIntegrator::with_rule(GaussKronrod15::new(), settings)
    }
}

impl<Q: Quadrature> SemiInfiniteIntegrator<Q> {
    pub fn with_rule(rule: Q, settings: SemiInfiniteSettings) -> SemiInfiniteIntegrator<Q> {
        SemiInfiniteIntegrator { rule, settings }
    }

    pub fn rule(&self) -> &Q {
        &self.rule
    }

    pub fn settings(&self) -> &SemiInfiniteSettings {
        &self.settings
    }

    /// Integrand evaluations spent by one call.
    pub fn evaluations(&self) -> usize {
        self.settings.subdivisions * self.rule.evaluations()
    }

    pub fn integrate<F>(&self, f: F) -> f64
        where F: Fn(f64) -> f64 {
        let transformed = transform(&f, self.settings.lower_bound);
        let value: f64 = self
            .pieces()
            .map(|(t0, t1)| {
                let piece = self.rule.integrate(&transformed, t0, t1);
                trace!("semi-infinite piece [{}, {}]: {}", t0, t1, piece);
                piece
            })
            .sum();
        debug!(
            "semi-infinite integral from {}: {} ({} evaluations)",
            self.settings.lower_bound,
            value,
            self.evaluations()
        );
        value
    }

    /// Sums both the per-piece estimates and the per-piece error indicators.
    pub fn integrate_with_error<F>(&self, f: F) -> QuadratureEstimate
        where F: Fn(f64) -> f64 {
        let transformed = transform(&f, self.settings.lower_bound);
        let (value, error) = self
            .pieces()
            .map(|(t0, t1)| {
                let piece = self.rule.integrate_with_error(&transformed, t0, t1);
                trace!(
                    "semi-infinite piece [{}, {}]: {} (error {})",
                    t0,
                    t1,
                    piece.value(),
                    piece.error()
                );
                piece
            })
            .fold((0.0, 0.0), |(value, error), piece| {
                (value + piece.value(), error + piece.error())
            });
        debug!(
            "semi-infinite integral from {}: {} (error {}, {} evaluations)",
            self.settings.lower_bound,
            value,
            error,
            self.evaluations()
        );
        QuadratureEstimate::new(value, error)
    }

    pub fn try_integrate<F>(&self, f: F) -> Result<QuadratureEstimate, QuadratureError>
        where F: Fn(f64) -> f64 {
        self.settings.validate().inspect_err(|error| warn!("{}", error))?;
        Ok(self.integrate_with_error(f))
    }

    /// Equal pieces of [0, 1], left to right.
    fn pieces(&self) -> impl Iterator<Item = (f64, f64)> {
        let subdivisions = self.settings.subdivisions;
        let step_size = 1.0 / subdivisions as f64;
        (0..subdivisions).map(move |i| (i as f64 * step_size, (i + 1) as f64 * step_size))
    }
}

/// `t ↦ f(a + (1 - t)/t) / t²`
fn transform<F>(f: &F, lower_bound: f64) -> impl Fn(f64) -> f64
    where F: Fn(f64) -> f64 {
    move |t| f(lower_bound + (1.0 - t) / t) / (t * t)
}

/// Integrates `f` over `[settings.lower_bound(), +∞)`.
///
/// Settings are not validated: zero subdivisions gives `0.0`.
pub fn integrate_semi_inf<F>(f: F, settings: &SemiInfiniteSettings) -> f64
    where F: Fn(f64) -> f64 {
    SemiInfiniteIntegrator::new(*settings).integrate(f)
}

pub fn integrate_semi_inf_with_error<F>(f: F, settings: &SemiInfiniteSettings) -> QuadratureEstimate
    where F: Fn(f64) -> f64 {
    SemiInfiniteIntegrator::new(*settings).integrate_with_error(f)
}

pub fn try_integrate_semi_inf<F>(
    f: F,
    settings: &SemiInfiniteSettings
) -> Result<QuadratureEstimate, QuadratureError>
    where F: Fn(f64) -> f64 {
    SemiInfiniteIntegrator::new(*settings).try_integrate(f)
}

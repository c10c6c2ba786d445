use log::warn;
use nalgebra::SVector;

use crate::math::integration::quadrature::Quadrature;
use crate::math::integration::quadratureerror::QuadratureError;

// ─────────────────────────────────────────────────────────────────────────────
// G7K15 rule table
// ─────────────────────────────────────────────────────────────────────────────
//
// 15 nodes on [-1, 1]: the midpoint plus 7 symmetric pairs ±x_i.
// The 7-point Gauss rule reuses the midpoint and the pairs at
// GAUSS_PAIR_INDICES, with its own weights.

/// Positive Kronrod abscissae, outermost first.
pub const KRONROD_ABSCISSAE: [f64; 7] = [
    0.991455371120813,
    0.949107912342759,
    0.864864423359769,
    0.741531185599394,
    0.586087235467691,
    0.405845151377397,
    0.207784955007898,
];

pub const KRONROD_PAIR_WEIGHTS: [f64; 7] = [
    0.022935322010529,
    0.063092092629979,
    0.104790010322250,
    0.140653259715525,
    0.169004726639267,
    0.190350578064785,
    0.204432940075298,
];

pub const KRONROD_CENTER_WEIGHT: f64 = 0.209482141084728;

pub const GAUSS_PAIR_INDICES: [usize; 3] = [1, 3, 5];

pub const GAUSS_PAIR_WEIGHTS: [f64; 3] = [
    0.129484966168870,
    0.279705391489277,
    0.381830050505119,
];

pub const GAUSS_CENTER_WEIGHT: f64 = 0.417959183673469;

const KRONROD_EVALUATIONS: usize = 2 * KRONROD_ABSCISSAE.len() + 1;

type PairVector = SVector<f64, 7>;
type GaussPairVector = SVector<f64, 3>;

// ─────────────────────────────────────────────────────────────────────────────
// QuadratureEstimate
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadratureEstimate {
    value: f64,
    error: f64
}

impl QuadratureEstimate {
    pub fn new(value: f64, error: f64) -> QuadratureEstimate {
        QuadratureEstimate { value, error }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Heuristic error indicator, not a bound on the true error.
    pub fn error(&self) -> f64 {
        self.error
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// GaussKronrod15
// ─────────────────────────────────────────────────────────────────────────────

/// Integrand values at the 15 nodes mapped onto `[a, b]`.
struct Samples {
    /// f(m - x_i h) + f(m + x_i h) for each positive abscissa x_i
    pairs: PairVector,
    center: f64,
    half_length: f64
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GaussKronrod15;

impl GaussKronrod15 {
    pub fn new() -> GaussKronrod15 {
        GaussKronrod15
    }

    fn sample<F>(f: &F, a: f64, b: f64) -> Samples
        where F: Fn(f64) -> f64 {
        let half_length = (b - a) / 2.0;
        let midpoint = (a + b) / 2.0;
        let pairs = PairVector::from_fn(|i, _| {
            let offset = KRONROD_ABSCISSAE[i] * half_length;
            f(midpoint - offset) + f(midpoint + offset)
        });
        Samples {
            pairs,
            center: f(midpoint),
            half_length
        }
    }

    fn kronrod_sum(samples: &Samples) -> f64 {
        let weighted = samples.pairs.dot(&PairVector::from(KRONROD_PAIR_WEIGHTS))
            + samples.center * KRONROD_CENTER_WEIGHT;
        weighted * samples.half_length
    }

    fn gauss_sum(samples: &Samples) -> f64 {
        let pairs = GaussPairVector::from_fn(|i, _| samples.pairs[GAUSS_PAIR_INDICES[i]]);
        let weighted = pairs.dot(&GaussPairVector::from(GAUSS_PAIR_WEIGHTS))
            + samples.center * GAUSS_CENTER_WEIGHT;
        weighted * samples.half_length
    }

    /// `(200 |gauss - kronrod|)^1.5`
    pub fn error_indicator(gauss: f64, kronrod: f64) -> f64 {
        (200.0 * (gauss - kronrod).abs()).powf(1.5)
    }
}

impl Quadrature for GaussKronrod15 {
    fn integrate<F>(&self, f: F, a: f64, b: f64) -> f64
        where F: Fn(f64) -> f64 {
        Self::kronrod_sum(&Self::sample(&f, a, b))
    }

    fn integrate_with_error<F>(&self, f: F, a: f64, b: f64) -> QuadratureEstimate
        where F: Fn(f64) -> f64 {
        let samples = Self::sample(&f, a, b);
        let kronrod = Self::kronrod_sum(&samples);
        let gauss = Self::gauss_sum(&samples);
        QuadratureEstimate::new(kronrod, Self::error_indicator(gauss, kronrod))
    }

    fn evaluations(&self) -> usize {
        KRONROD_EVALUATIONS
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Entry points
// ─────────────────────────────────────────────────────────────────────────────

/// Integrates `f` over `[a, b]` with the 15-point Kronrod rule.
///
/// Bounds are not validated: `b <= a` gives a meaningless result.
pub fn integrate_interval<F>(f: F, a: f64, b: f64) -> f64
    where F: Fn(f64) -> f64 {
    GaussKronrod15.integrate(f, a, b)
}

/// Same as [`integrate_interval`], plus the Gauss/Kronrod error indicator.
///
/// The embedded Gauss rule reuses the Kronrod samples, so this still costs
/// 15 evaluations of `f`.
pub fn integrate_interval_with_error<F>(f: F, a: f64, b: f64) -> QuadratureEstimate
    where F: Fn(f64) -> f64 {
    GaussKronrod15.integrate_with_error(f, a, b)
}

pub fn try_integrate_interval<F>(f: F, a: f64, b: f64) -> Result<QuadratureEstimate, QuadratureError>
    where F: Fn(f64) -> f64 {
    QuadratureError::check_interval(a, b).inspect_err(|error| warn!("{}", error))?;
    Ok(integrate_interval_with_error(f, a, b))
}

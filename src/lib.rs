pub mod configuration;

pub mod math {
    pub mod integration {
        pub mod quadratureerror;
        pub mod quadrature;
        pub mod gausskronrod;
        pub mod semiinfinite;
    }
}

pub use math::integration::gausskronrod::{
    integrate_interval,
    integrate_interval_with_error,
    try_integrate_interval,
    GaussKronrod15,
    QuadratureEstimate
};
pub use math::integration::quadrature::Quadrature;
pub use math::integration::quadratureerror::QuadratureError;
pub use math::integration::semiinfinite::{
    integrate_semi_inf,
    integrate_semi_inf_with_error,
    try_integrate_semi_inf,
    SemiInfiniteIntegrator,
    SemiInfiniteSettings
};

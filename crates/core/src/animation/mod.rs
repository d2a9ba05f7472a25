//! Drive values over time.
//!
//! A [`Spring`] moves a scalar toward a target using damped harmonic motion,
//! and an [`Interpolation`] maps that scalar onto a style property.
mod interpolation;
mod spring;

pub use interpolation::{Extrapolate, Interpolation};
pub use spring::Spring;

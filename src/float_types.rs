//! Scalar selection and the numeric constants used across the crate.

// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

/// Tolerance below which lengths and determinants are treated as zero.
#[cfg(feature = "f32")]
pub const EPSILON: Real = 1e-4;
/// Tolerance below which lengths and determinants are treated as zero.
#[cfg(feature = "f64")]
pub const EPSILON: Real = 1e-8;

/// Archimedes' constant (π)
#[cfg(feature = "f32")]
pub const PI: Real = core::f32::consts::PI;
/// Archimedes' constant (π)
#[cfg(feature = "f64")]
pub const PI: Real = core::f64::consts::PI;

/// The full circle constant (τ)
#[cfg(feature = "f32")]
pub const TAU: Real = core::f32::consts::TAU;
/// The full circle constant (τ)
#[cfg(feature = "f64")]
pub const TAU: Real = core::f64::consts::TAU;

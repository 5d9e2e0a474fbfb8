//! Test support library
//! Provides helper functions shared between the integration tests.

use prismoid::float_types::Real;

/// Approximate float comparison with an explicit tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

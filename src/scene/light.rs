//! Light sources.

use crate::float_types::Real;
use nalgebra::Vector3;

/// A light in the scene. Colors are RGB in `[0, 1]`, scaled by `intensity`.
#[derive(Debug, Clone, PartialEq)]
pub enum Light {
    /// Uniform illumination from every direction.
    Ambient { color: [Real; 3], intensity: Real },
    /// Parallel rays traveling along `direction` (normalized at use).
    Directional {
        direction: Vector3<Real>,
        color: [Real; 3],
        intensity: Real,
    },
}

impl Light {
    /// White ambient light.
    pub const fn ambient(intensity: Real) -> Self {
        Light::Ambient {
            color: [1.0, 1.0, 1.0],
            intensity,
        }
    }

    /// White directional light traveling along `direction`.
    pub const fn directional(direction: Vector3<Real>, intensity: Real) -> Self {
        Light::Directional {
            direction,
            color: [1.0, 1.0, 1.0],
            intensity,
        }
    }
}

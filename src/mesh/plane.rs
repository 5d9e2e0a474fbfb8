//! Planes in Hessian normal form, used to orient mesh faces.

use crate::float_types::{EPSILON, Real};
use nalgebra::{Point3, Vector3};

/// A plane in 3D space: unit `normal` and offset `w` so that `n · p = w`
/// for every point `p` on the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub normal: Vector3<Real>,
    pub w: Real,
}

impl Plane {
    /// Create a plane from a (not necessarily unit) normal and offset.
    ///
    /// A near-zero normal is replaced by +Z instead of normalizing into NaN;
    /// degenerate faces are a tolerated input, not an error.
    pub fn from_normal(normal: Vector3<Real>, w: Real) -> Self {
        let normal = normal.try_normalize(EPSILON).unwrap_or_else(Vector3::z);
        Plane { normal, w }
    }

    /// Plane through three points. The normal follows the right-hand rule:
    /// `(b - a) × (c - a)`, so counter-clockwise points seen from outside
    /// yield an outward normal.
    pub fn from_points(a: &Point3<Real>, b: &Point3<Real>, c: &Point3<Real>) -> Self {
        let normal = (b - a).cross(&(c - a));
        let plane = Self::from_normal(normal, 0.0);
        Plane {
            w: plane.normal.dot(&a.coords),
            ..plane
        }
    }

    /// Reverse the plane orientation.
    pub fn flip(&mut self) {
        self.normal = -self.normal;
        self.w = -self.w;
    }

    /// Signed distance from `point` to the plane, positive on the normal side.
    #[inline]
    pub fn signed_distance(&self, point: &Point3<Real>) -> Real {
        self.normal.dot(&point.coords) - self.w
    }
}

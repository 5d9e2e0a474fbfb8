//! Struct and functions for working with `Vertex`s from which faces are composed.

use crate::float_types::Real;
use nalgebra::{Point3, Vector3};

/// A vertex of a face, holding position and normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub pos: Point3<Real>,
    pub normal: Vector3<Real>,
}

impl Vertex {
    /// Create a new [`Vertex`].
    ///
    /// * `pos`    – the position in model space
    /// * `normal` – (optionally non-unit) normal; it is stored verbatim,
    ///   so orient it the way the consumer (e.g. shading) expects.
    pub const fn new(pos: Point3<Real>, normal: Vector3<Real>) -> Self {
        Vertex { pos, normal }
    }

    /// Flip the vertex normal.
    pub fn flip(&mut self) {
        self.normal = -self.normal;
    }

    /// Linear interpolation between `self` (`t = 0`) and `other` (`t = 1`).
    ///
    /// Normals are linearly interpolated as well.
    pub fn interpolate(&self, other: &Vertex, t: Real) -> Vertex {
        let new_pos = self.pos + (other.pos - self.pos) * t;
        let new_normal = self.normal + (other.normal - self.normal) * t;
        Vertex::new(new_pos, new_normal)
    }

    /// Midpoint of two vertices with the averaged, renormalized normal.
    /// Falls back to the raw average if the normals cancel out.
    pub fn midpoint(&self, other: &Vertex) -> Vertex {
        let pos = nalgebra::center(&self.pos, &other.pos);
        let summed = self.normal + other.normal;
        let normal = summed.try_normalize(crate::float_types::EPSILON).unwrap_or(summed);
        Vertex::new(pos, normal)
    }
}

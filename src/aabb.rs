//! Axis-aligned bounding boxes.

use crate::float_types::Real;
use nalgebra::{Point3, Vector3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub mins: Point3<Real>,
    pub maxs: Point3<Real>,
}

impl Aabb {
    #[inline]
    pub const fn new(mins: Point3<Real>, maxs: Point3<Real>) -> Self {
        Self { mins, maxs }
    }

    /// Smallest box enclosing `points`. An empty iterator yields a degenerate
    /// box at the origin.
    pub fn from_points<'a, I: IntoIterator<Item = &'a Point3<Real>>>(points: I) -> Self {
        let mut iter = points.into_iter();
        let Some(first) = iter.next() else {
            return Self::new(Point3::origin(), Point3::origin());
        };
        let mut mins = *first;
        let mut maxs = *first;
        for p in iter {
            mins.x = mins.x.min(p.x);
            mins.y = mins.y.min(p.y);
            mins.z = mins.z.min(p.z);
            maxs.x = maxs.x.max(p.x);
            maxs.y = maxs.y.max(p.y);
            maxs.z = maxs.z.max(p.z);
        }
        Self::new(mins, maxs)
    }

    #[inline]
    pub fn center(&self) -> Point3<Real> {
        nalgebra::center(&self.mins, &self.maxs)
    }

    /// Edge lengths along each axis.
    #[inline]
    pub fn size(&self) -> Vector3<Real> {
        self.maxs - self.mins
    }
}

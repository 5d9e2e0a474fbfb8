//! Orthographic camera.

use crate::float_types::{EPSILON, Real};
use nalgebra::{Point3, Vector3};

/// An orthographic camera: a box-shaped view volume attached to a position
/// and an orthonormal basis. Every ray it casts is parallel to the view
/// direction; `left`/`right`/`bottom`/`top` span the image plane and
/// `near`/`far` bound hit distances along the ray.
#[derive(Debug, Clone, PartialEq)]
pub struct OrthographicCamera {
    pub left: Real,
    pub right: Real,
    pub bottom: Real,
    pub top: Real,
    pub near: Real,
    pub far: Real,

    pub position: Point3<Real>,
    /// Screen-x axis of the image plane.
    pub u_axis: Vector3<Real>,
    /// Screen-y axis of the image plane.
    pub v_axis: Vector3<Real>,
    /// View direction (unit).
    pub dir: Vector3<Real>,
}

impl OrthographicCamera {
    /// Camera at the origin looking down −Z with +Y up.
    pub fn new(left: Real, right: Real, bottom: Real, top: Real, near: Real, far: Real) -> Self {
        OrthographicCamera {
            left,
            right,
            bottom,
            top,
            near,
            far,
            position: Point3::origin(),
            u_axis: Vector3::x(),
            v_axis: Vector3::y(),
            dir: -Vector3::z(),
        }
    }

    /// View volume matching a viewport's aspect ratio: `view_height` world
    /// units tall, `view_height × width / height` wide, centered on the axis.
    pub fn from_viewport(width: Real, height: Real, view_height: Real, near: Real, far: Real) -> Self {
        let aspect = width / height;
        let half_h = view_height / 2.0;
        let half_w = half_h * aspect;
        Self::new(-half_w, half_w, -half_h, half_h, near, far)
    }

    /// Reorient the camera to sit at `eye` looking at `target`.
    ///
    /// `up` only hints the roll; it is re-orthogonalized against the view
    /// direction, with a fallback axis when the two are (near) parallel.
    pub fn look_at(&mut self, eye: Point3<Real>, target: Point3<Real>, up: Vector3<Real>) {
        self.position = eye;
        self.dir = (target - eye).try_normalize(EPSILON).unwrap_or_else(|| -Vector3::z());
        self.u_axis = self
            .dir
            .cross(&up)
            .try_normalize(EPSILON)
            .unwrap_or_else(|| {
                let fallback = if self.dir.x.abs() < 0.9 {
                    Vector3::x()
                } else {
                    Vector3::y()
                };
                self.dir.cross(&fallback).normalize()
            });
        self.v_axis = self.u_axis.cross(&self.dir);
    }

    /// Parallel ray through normalized image coordinates `u`, `v` ∈ [0, 1]
    /// (u rightward, v upward). Returns the origin on the near plane and the
    /// shared view direction.
    pub fn ray(&self, u: Real, v: Real) -> (Point3<Real>, Vector3<Real>) {
        let x = self.left + u * (self.right - self.left);
        let y = self.bottom + v * (self.top - self.bottom);
        let origin = self.position + self.u_axis * x + self.v_axis * y + self.dir * self.near;
        (origin, self.dir)
    }

    /// Maximum hit distance measured from a ray origin on the near plane.
    #[inline]
    pub fn range(&self) -> Real {
        self.far - self.near
    }
}

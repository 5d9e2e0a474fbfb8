//! One-shot CPU renderer: orthographic ray casting with Lambert shading.
//!
//! Deliberately synchronous and single-threaded; a render is a single pure
//! pass from scene to image buffer.

use crate::float_types::{EPSILON, Real};
use crate::scene::Scene;
use crate::scene::camera::OrthographicCamera;
use crate::scene::light::Light;
use crate::scene::material::Material;
use image::{Rgba, RgbaImage};
use nalgebra::{Point3, Vector3};

/// A ray-triangle hit: parametric distance and the (unit) face normal.
#[derive(Debug, Clone, Copy)]
struct Hit {
    t: Real,
    normal: Vector3<Real>,
}

/// Renders a [`Scene`] through an [`OrthographicCamera`] into an RGBA canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Renderer {
    pub width: u32,
    pub height: u32,
    /// Color of pixels no ray hits, RGB in `[0, 1]`.
    pub background: [Real; 3],
}

impl Renderer {
    pub const fn new(width: u32, height: u32) -> Self {
        Renderer {
            width,
            height,
            background: [0.1, 0.1, 0.12],
        }
    }

    /// Cast one ray per pixel and shade the nearest hit. Pixel row 0 is the
    /// top of the image; rays are generated with v growing upward, so the
    /// vertical coordinate is flipped here.
    pub fn render<S: Clone>(&self, scene: &Scene<S>, camera: &OrthographicCamera) -> RgbaImage {
        // Flatten each object into world-space triangles once.
        let triangles: Vec<(usize, [Point3<Real>; 3])> = scene
            .objects
            .iter()
            .enumerate()
            .flat_map(|(obj_idx, obj)| {
                obj.mesh.triangles().map(move |tri| {
                    (
                        obj_idx,
                        [
                            obj.mesh.vertices[tri[0]].pos,
                            obj.mesh.vertices[tri[1]].pos,
                            obj.mesh.vertices[tri[2]].pos,
                        ],
                    )
                })
            })
            .collect();

        RgbaImage::from_fn(self.width, self.height, |px, py| {
            let u = (px as Real + 0.5) / self.width as Real;
            let v = 1.0 - (py as Real + 0.5) / self.height as Real;
            let (origin, dir) = camera.ray(u, v);

            let mut nearest: Option<(usize, Hit)> = None;
            for &(obj_idx, corners) in &triangles {
                if let Some(hit) = intersect_triangle(&origin, &dir, &corners) {
                    if hit.t <= camera.range()
                        && nearest.is_none_or(|(_, best)| hit.t < best.t)
                    {
                        nearest = Some((obj_idx, hit));
                    }
                }
            }

            let color = match nearest {
                Some((obj_idx, hit)) => shade(
                    &scene.objects[obj_idx].material,
                    &hit,
                    &dir,
                    &scene.lights,
                ),
                None => self.background,
            };
            Rgba([
                to_channel(color[0]),
                to_channel(color[1]),
                to_channel(color[2]),
                255,
            ])
        })
    }
}

/// Möller–Trumbore ray-triangle intersection.
///
/// Returns `None` for rays parallel to the triangle plane, misses, and hits
/// behind the origin. Zero-area triangles never intersect (their edge cross
/// product vanishes, so the determinant test rejects them).
fn intersect_triangle(
    origin: &Point3<Real>,
    dir: &Vector3<Real>,
    corners: &[Point3<Real>; 3],
) -> Option<Hit> {
    let edge1 = corners[1] - corners[0];
    let edge2 = corners[2] - corners[0];

    let h = dir.cross(&edge2);
    let det = edge1.dot(&h);
    if det.abs() < EPSILON {
        return None;
    }

    let inv_det = 1.0 / det;
    let s = origin - corners[0];
    let u = inv_det * s.dot(&h);
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(&edge1);
    let v = inv_det * dir.dot(&q);
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = inv_det * edge2.dot(&q);
    if t < EPSILON {
        return None;
    }

    Some(Hit {
        t,
        normal: edge1.cross(&edge2).normalize(),
    })
}

/// Lambert shading, double-sided: the face normal is flipped toward the
/// viewer so either winding convention of a host mesh shades sensibly.
fn shade(material: &Material, hit: &Hit, view_dir: &Vector3<Real>, lights: &[Light]) -> [Real; 3] {
    let normal = if hit.normal.dot(view_dir) > 0.0 {
        -hit.normal
    } else {
        hit.normal
    };

    let mut out = [0.0; 3];
    for light in lights {
        match light {
            Light::Ambient { color, intensity } => {
                for (o, (&d, &c)) in out.iter_mut().zip(material.diffuse.iter().zip(color)) {
                    *o += d * c * intensity;
                }
            },
            Light::Directional {
                direction,
                color,
                intensity,
            } => {
                let to_light = -direction.normalize();
                let lambert = normal.dot(&to_light).max(0.0);
                for (o, (&d, &c)) in out.iter_mut().zip(material.diffuse.iter().zip(color)) {
                    *o += d * c * intensity * lambert;
                }
            },
        }
    }
    out
}

#[inline]
fn to_channel(value: Real) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

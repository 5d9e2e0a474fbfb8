//! Rectangular-frustum polyhedron meshes, built on a small indexed polygon-mesh
//! core, with a one-shot orthographic preview renderer.
//!
//! The centerpiece is [`shapes::frustum::FrustumParams`] together with
//! [`mesh::PolyMesh::frustum`]: a truncated rectangular pyramid described by 8
//! shared vertices and 12 triangles, realized through the generic
//! [`mesh::PolyMesh::polyhedron`] base which can optionally subdivide
//! (`detail`) and uniformly scale (`radius`) the result.
//!
//! The [`optics`] module complements the geometry with thin-lens camera
//! calculations (fields of view, ground sample distance, hyperfocal distance,
//! depth of field) for sizing a physical camera against a scene.
//!
//! # Features
//! - **f64** (default): use `f64` as [`float_types::Real`]
//! - **f32**: use `f32` as [`float_types::Real`], conflicts with **f64**
//! - **preview** (default): the [`render`] module and the `prismoid` binary,
//!   pulling in the `image` crate for canvas output

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod aabb;
pub mod errors;
pub mod float_types;
pub mod mesh;
pub mod optics;
pub mod scene;
pub mod shapes;

#[cfg(feature = "preview")]
pub mod render;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use mesh::{PolyMesh, vertex::Vertex};
pub use shapes::frustum::FrustumParams;
pub use shapes::polyhedron::PolyhedronOpts;

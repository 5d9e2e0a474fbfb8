//! The generic polyhedron base: raw points + face index lists → [`PolyMesh`].

use crate::errors::ValidationError;
use crate::float_types::Real;
use crate::mesh::plane::Plane;
use crate::mesh::vertex::Vertex;
use crate::mesh::{Face, PolyMesh};
use nalgebra::{Point3, Vector3};
use std::num::NonZeroU32;

/// Options applied by [`PolyMesh::polyhedron`] after the raw solid is built.
///
/// Both defaults are exact identities: `radius = 1` leaves positions
/// untouched and `detail = 0` performs no subdivision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolyhedronOpts {
    /// Uniform scale factor applied about the origin.
    pub radius: Real,
    /// Rounds of midpoint subdivision (each multiplies the triangle count by 4).
    pub detail: u32,
}

impl Default for PolyhedronOpts {
    fn default() -> Self {
        PolyhedronOpts {
            radius: 1.0,
            detail: 0,
        }
    }
}

impl<S: Clone> PolyMesh<S> {
    /// Create a polyhedron from raw vertex data and face indices.
    ///
    /// # Parameters
    /// - `points`: a slice of `[x, y, z]` coordinates.
    /// - `faces`: each element lists indices into `points` describing one
    ///   face, counter-clockwise seen from outside. Faces with fewer than 3
    ///   indices are skipped.
    /// - `opts`: post-processing, see [`PolyhedronOpts`].
    ///
    /// Coordinates are taken as given: degenerate (zero-area, coincident)
    /// geometry is realized, not rejected. The only failure is a face index
    /// outside `points`.
    ///
    /// # Example
    /// ```
    /// # use prismoid::{PolyMesh, PolyhedronOpts};
    /// let pts = &[
    ///     [0.0, 0.0, 0.0],
    ///     [1.0, 0.0, 0.0],
    ///     [1.0, 1.0, 0.0],
    ///     [0.0, 1.0, 0.0],
    ///     [0.5, 0.5, 1.0], // apex
    /// ];
    /// // Bottom square plus the four pyramid sides.
    /// let fcs: &[&[usize]] = &[
    ///     &[3, 2, 1, 0],
    ///     &[0, 1, 4],
    ///     &[1, 2, 4],
    ///     &[2, 3, 4],
    ///     &[3, 0, 4],
    /// ];
    /// let pyramid: PolyMesh<()> =
    ///     PolyMesh::polyhedron(pts, fcs, &PolyhedronOpts::default(), None).unwrap();
    /// assert!(pyramid.is_manifold());
    /// ```
    pub fn polyhedron(
        points: &[[Real; 3]],
        faces: &[&[usize]],
        opts: &PolyhedronOpts,
        metadata: Option<S>,
    ) -> Result<PolyMesh<S>, ValidationError> {
        // Normals are recomputed once the final shape is known.
        let vertices: Vec<Vertex> = points
            .iter()
            .map(|&[x, y, z]| Vertex::new(Point3::new(x, y, z), Vector3::zeros()))
            .collect();

        let mut mesh_faces = Vec::with_capacity(faces.len());
        for (face_idx, face) in faces.iter().enumerate() {
            if face.len() < 3 {
                continue;
            }
            for &index in face.iter() {
                if index >= points.len() {
                    return Err(ValidationError::IndexOutOfRange {
                        face: face_idx,
                        index,
                        len: points.len(),
                    });
                }
            }
            let plane = Plane::from_points(
                &vertices[face[0]].pos,
                &vertices[face[1]].pos,
                &vertices[face[2]].pos,
            );
            mesh_faces.push(Face::new(face.to_vec(), plane));
        }

        let mut mesh = PolyMesh::new(vertices, mesh_faces, metadata);

        if let Some(levels) = NonZeroU32::new(opts.detail) {
            mesh = mesh.subdivide_triangles(levels);
        }
        if opts.radius != 1.0 {
            mesh.scale_uniform(opts.radius);
        }

        mesh.compute_vertex_normals();
        Ok(mesh)
    }
}

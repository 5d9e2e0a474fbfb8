//! `PolyMesh`: an indexed polygon mesh with a shared vertex array.
//!
//! Faces store indices into the vertex array rather than their own vertex
//! copies, so a closed solid like the frustum keeps exactly one `Vertex` per
//! corner and topology questions (edge sharing, orientation) reduce to index
//! arithmetic.

pub mod manifold;
pub mod plane;
pub mod vertex;

use crate::aabb::Aabb;
use crate::float_types::{EPSILON, Real};
use hashbrown::HashMap;
use nalgebra::Vector3;
use plane::Plane;
use std::num::NonZeroU32;
use std::sync::OnceLock;
use vertex::Vertex;

/// A face of a [`PolyMesh`], defined by at least 3 indices into the shared
/// vertex array plus the plane it lies on.
#[derive(Debug, Clone)]
pub struct Face {
    /// Indices into the vertex array, counter-clockwise seen from outside.
    pub indices: Vec<usize>,
    /// The plane this face lies on.
    pub plane: Plane,
}

impl Face {
    /// Create a face from its vertex indices and plane.
    ///
    /// # Panics
    ///
    /// Panics if fewer than 3 indices are given. Faces that may legitimately
    /// be too short are filtered before construction (the polyhedron base
    /// skips them), so reaching this is a caller bug, not a data condition.
    pub fn new(indices: Vec<usize>, plane: Plane) -> Self {
        assert!(indices.len() >= 3, "degenerate face");
        Face { indices, plane }
    }

    /// Reverses winding order and flips the plane normal.
    pub fn flip(&mut self) {
        self.indices.reverse();
        self.plane.flip();
    }

    /// Fan triangulation of this face: `(i0, i1, i2), (i0, i2, i3), …`
    pub fn triangles(&self) -> impl Iterator<Item = [usize; 3]> + '_ {
        let anchor = self.indices[0];
        self.indices
            .windows(2)
            .skip(1)
            .map(move |pair| [anchor, pair[0], pair[1]])
    }
}

/// An indexed polygon mesh.
/// - `S` is a generic metadata type, stored as `Option<S>`.
#[derive(Debug, Clone)]
pub struct PolyMesh<S: Clone> {
    /// Shared vertex array.
    pub vertices: Vec<Vertex>,
    /// Faces indexing into `vertices`.
    pub faces: Vec<Face>,
    /// Lazily computed axis-aligned bounding box.
    pub bounding_box: OnceLock<Aabb>,
    /// Generic metadata associated with the mesh.
    pub metadata: Option<S>,
}

impl<S: Clone> PolyMesh<S> {
    /// Create a mesh from prebuilt vertices and faces.
    pub fn new(vertices: Vec<Vertex>, faces: Vec<Face>, metadata: Option<S>) -> Self {
        PolyMesh {
            vertices,
            faces,
            bounding_box: OnceLock::new(),
            metadata,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles after fan triangulation of every face.
    pub fn triangle_count(&self) -> usize {
        self.faces
            .iter()
            .map(|face| face.indices.len().saturating_sub(2))
            .sum()
    }

    /// Iterate over all triangles of the fan-triangulated mesh.
    pub fn triangles(&self) -> impl Iterator<Item = [usize; 3]> + '_ {
        self.faces.iter().flat_map(Face::triangles)
    }

    /// Return a mesh whose faces are all triangles, splitting larger faces
    /// into fans. Triangle planes are recomputed from their own vertices.
    pub fn triangulate(&self) -> PolyMesh<S> {
        let faces = self
            .triangles()
            .map(|[a, b, c]| {
                let plane = Plane::from_points(
                    &self.vertices[a].pos,
                    &self.vertices[b].pos,
                    &self.vertices[c].pos,
                );
                Face::new(vec![a, b, c], plane)
            })
            .collect();
        PolyMesh::new(self.vertices.clone(), faces, self.metadata.clone())
    }

    /// Midpoint-subdivide every face `levels` times, returning a triangular
    /// mesh with 4^levels as many triangles. Edge midpoints are shared
    /// between neighboring triangles, so a closed mesh stays closed.
    pub fn subdivide_triangles(&self, levels: NonZeroU32) -> PolyMesh<S> {
        let mut current = self.triangulate();
        for _ in 0..levels.get() {
            current = current.subdivide_once();
        }
        current
    }

    /// One round of midpoint subdivision on an already-triangulated mesh.
    fn subdivide_once(&self) -> PolyMesh<S> {
        let mut vertices = self.vertices.clone();
        let mut faces = Vec::with_capacity(self.faces.len() * 4);
        // (min_vertex, max_vertex) -> midpoint vertex index
        let mut midpoints: HashMap<(usize, usize), usize> = HashMap::new();

        let mut midpoint = |vertices: &mut Vec<Vertex>, i: usize, j: usize| -> usize {
            let key = if i < j { (i, j) } else { (j, i) };
            *midpoints.entry(key).or_insert_with(|| {
                let mid = vertices[i].midpoint(&vertices[j]);
                vertices.push(mid);
                vertices.len() - 1
            })
        };

        for face in &self.faces {
            let [a, b, c] = [face.indices[0], face.indices[1], face.indices[2]];
            let ab = midpoint(&mut vertices, a, b);
            let bc = midpoint(&mut vertices, b, c);
            let ca = midpoint(&mut vertices, c, a);

            for corner in [[a, ab, ca], [ab, b, bc], [ca, bc, c], [ab, bc, ca]] {
                let plane = Plane::from_points(
                    &vertices[corner[0]].pos,
                    &vertices[corner[1]].pos,
                    &vertices[corner[2]].pos,
                );
                faces.push(Face::new(corner.to_vec(), plane));
            }
        }

        PolyMesh::new(vertices, faces, self.metadata.clone())
    }

    /// Uniformly scale the mesh about the origin, in place.
    /// Face normals are unchanged; plane offsets scale with the factor.
    pub fn scale_uniform(&mut self, factor: Real) {
        for v in &mut self.vertices {
            v.pos.coords *= factor;
        }
        for face in &mut self.faces {
            face.plane.w *= factor;
        }
        self.bounding_box = OnceLock::new();
    }

    /// Recompute all vertex normals as the area-weighted average of the
    /// adjacent face normals. Vertices with no (or only degenerate) adjacent
    /// faces fall back to +Z.
    pub fn compute_vertex_normals(&mut self) {
        for v in &mut self.vertices {
            v.normal = Vector3::zeros();
        }

        for face in &self.faces {
            let weighted = face.plane.normal * self.face_area(face);
            for &idx in &face.indices {
                self.vertices[idx].normal += weighted;
            }
        }

        for v in &mut self.vertices {
            v.normal = v.normal.try_normalize(EPSILON).unwrap_or_else(Vector3::z);
        }
    }

    /// Area of a planar face via the Newell vector (half the norm of the
    /// summed edge cross products).
    fn face_area(&self, face: &Face) -> Real {
        let mut sum = Vector3::zeros();
        for i in 0..face.indices.len() {
            let a = &self.vertices[face.indices[i]].pos;
            let b = &self.vertices[face.indices[(i + 1) % face.indices.len()]].pos;
            sum += a.coords.cross(&b.coords);
        }
        sum.norm() * 0.5
    }

    /// Axis-aligned bounding box of the mesh (cached after the first call).
    pub fn bounding_box(&self) -> Aabb {
        *self
            .bounding_box
            .get_or_init(|| Aabb::from_points(self.vertices.iter().map(|v| &v.pos)))
    }
}

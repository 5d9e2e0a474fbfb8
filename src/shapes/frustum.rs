//! Rectangular frustum: a truncated pyramid with two parallel rectangular
//! faces of independently chosen size joined by four trapezoids.

use crate::float_types::Real;
use crate::mesh::PolyMesh;
use crate::shapes::polyhedron::PolyhedronOpts;

/// Construction parameters for a rectangular frustum, fixed at build time.
///
/// The near rectangle (`width1` × `height1`) sits at z = −`depth`/2, the far
/// rectangle (`width2` × `height2`) at z = +`depth`/2, both centered on the
/// origin in x and y. `radius` and `detail` are handed through to the
/// polyhedron base and default to the identities (1 and 0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrustumParams {
    pub width1: Real,
    pub height1: Real,
    pub width2: Real,
    pub height2: Real,
    pub depth: Real,
    /// Uniform scale applied by the polyhedron base (default 1).
    pub radius: Real,
    /// Subdivision level applied by the polyhedron base (default 0).
    pub detail: u32,
}

impl FrustumParams {
    /// Type tag identifying meshes built from these parameters.
    pub const KIND: &'static str = "Frustum";

    /// Parameters with the default `radius = 1` and `detail = 0`.
    pub const fn new(
        width1: Real,
        height1: Real,
        width2: Real,
        height2: Real,
        depth: Real,
    ) -> Self {
        FrustumParams {
            width1,
            height1,
            width2,
            height2,
            depth,
            radius: 1.0,
            detail: 0,
        }
    }
}

/// Compute the 8 vertices and 12 triangles of a rectangular frustum.
///
/// Vertex layout: indices 0–3 are the near rectangle, 4–7 the far one, each
/// ordered (−,−), (+,−), (+,+), (−,+) in (x, y). Triangles are wound
/// counter-clockwise seen from outside, so all normals point outward under
/// the right-handed convention used across this crate.
///
/// The index table is fixed: any parameter values (including zero or
/// negative) keep the same closed topology and merely move vertices.
pub fn frustum_buffers(params: &FrustumParams) -> ([[Real; 3]; 8], [[usize; 3]; 12]) {
    let hw1 = params.width1 / 2.0;
    let hh1 = params.height1 / 2.0;
    let hw2 = params.width2 / 2.0;
    let hh2 = params.height2 / 2.0;
    let hd = params.depth / 2.0;

    let points = [
        // near rectangle, z = -depth/2
        [-hw1, -hh1, -hd],
        [hw1, -hh1, -hd],
        [hw1, hh1, -hd],
        [-hw1, hh1, -hd],
        // far rectangle, z = +depth/2
        [-hw2, -hh2, hd],
        [hw2, -hh2, hd],
        [hw2, hh2, hd],
        [-hw2, hh2, hd],
    ];

    let indices = [
        [0, 3, 2], [0, 2, 1], // near cap, -Z
        [4, 5, 6], [4, 6, 7], // far cap, +Z
        [0, 1, 5], [0, 5, 4], // -Y side
        [1, 2, 6], [1, 6, 5], // +X side
        [2, 3, 7], [2, 7, 6], // +Y side
        [3, 0, 4], [3, 4, 7], // -X side
    ];

    (points, indices)
}

impl<S: Clone> PolyMesh<S> {
    /// Build a rectangular frustum through the polyhedron base.
    ///
    /// The semantic parameters travel with the mesh as its metadata when
    /// `S = FrustumParams`; the derived buffers are not retained beyond the
    /// mesh itself.
    pub fn frustum(params: &FrustumParams, metadata: Option<S>) -> PolyMesh<S> {
        let (points, indices) = frustum_buffers(params);
        let faces: Vec<&[usize]> = indices.iter().map(|tri| tri.as_slice()).collect();
        let opts = PolyhedronOpts {
            radius: params.radius,
            detail: params.detail,
        };
        // The fixed index table never exceeds the 8-point array.
        Self::polyhedron(&points, &faces, &opts, metadata).unwrap()
    }
}

impl PolyMesh<FrustumParams> {
    /// Frustum carrying its own [`FrustumParams`] as metadata, for later
    /// introspection by the host application.
    pub fn frustum_with_params(params: FrustumParams) -> PolyMesh<FrustumParams> {
        Self::frustum(&params, Some(params))
    }
}

//! Shape constructors for [`PolyMesh`](crate::mesh::PolyMesh).

pub mod frustum;
pub mod polyhedron;

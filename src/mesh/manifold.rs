//! Topology validation: watertightness, orientation and Euler characteristic.
//!
//! All checks are index-based. A mesh whose vertices coincide positionally
//! (e.g. a frustum whose far face collapsed to a point) still counts as
//! closed as long as its face indexing is: topology is fixed by indices,
//! not by coordinates.

use crate::mesh::PolyMesh;
use hashbrown::HashMap;

/// Result of [`PolyMesh::analyze_manifold`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifoldReport {
    /// Whether the triangulated mesh is a closed, consistently wound 2-manifold.
    pub is_manifold: bool,
    /// Edges bordering exactly one triangle (0 for closed meshes).
    pub boundary_edges: usize,
    /// Edges shared by more than two triangles.
    pub non_manifold_edges: usize,
    /// Whether every shared edge is traversed once per direction,
    /// i.e. neighboring triangles agree on winding.
    pub consistent_orientation: bool,
    /// V − E + F of the triangulated mesh (2 for a sphere-like solid).
    pub euler_characteristic: i64,
}

impl<S: Clone> PolyMesh<S> {
    /// Analyze the edge topology of the fan-triangulated mesh.
    pub fn analyze_manifold(&self) -> ManifoldReport {
        // Undirected edge -> number of incident triangles
        let mut edge_uses: HashMap<(usize, usize), usize> = HashMap::new();
        // Directed edge -> number of traversals (1 everywhere iff windings agree)
        let mut directed_uses: HashMap<(usize, usize), usize> = HashMap::new();
        let mut triangle_count = 0usize;

        for tri in self.triangles() {
            triangle_count += 1;
            for i in 0..3 {
                let a = tri[i];
                let b = tri[(i + 1) % 3];
                let key = if a < b { (a, b) } else { (b, a) };
                *edge_uses.entry(key).or_insert(0) += 1;
                *directed_uses.entry((a, b)).or_insert(0) += 1;
            }
        }

        let boundary_edges = edge_uses.values().filter(|&&n| n == 1).count();
        let non_manifold_edges = edge_uses.values().filter(|&&n| n > 2).count();
        let consistent_orientation = directed_uses.values().all(|&n| n == 1);

        let vertices = self.vertex_count() as i64;
        let edges = edge_uses.len() as i64;
        let euler_characteristic = vertices - edges + triangle_count as i64;

        ManifoldReport {
            is_manifold: boundary_edges == 0
                && non_manifold_edges == 0
                && consistent_orientation,
            boundary_edges,
            non_manifold_edges,
            consistent_orientation,
            euler_characteristic,
        }
    }

    /// `true` if every edge borders exactly two triangles with opposing
    /// traversal directions: the watertight property.
    pub fn is_manifold(&self) -> bool {
        self.analyze_manifold().is_manifold
    }
}

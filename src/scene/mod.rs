//! Scene assembly: meshes paired with materials, plus lights.

pub mod camera;
pub mod light;
pub mod material;

use crate::mesh::PolyMesh;
use light::Light;
use material::Material;

/// A renderable object: one mesh and the material it is shaded with.
/// The mesh is owned by exactly one `SceneMesh` for the scene's lifetime.
#[derive(Debug, Clone)]
pub struct SceneMesh<S: Clone> {
    pub mesh: PolyMesh<S>,
    pub material: Material,
}

impl<S: Clone> SceneMesh<S> {
    pub const fn new(mesh: PolyMesh<S>, material: Material) -> Self {
        SceneMesh { mesh, material }
    }
}

/// A flat scene: a list of objects and a list of lights. No hierarchy,
/// no transforms; meshes are placed in world coordinates as built.
#[derive(Debug, Clone)]
pub struct Scene<S: Clone> {
    pub objects: Vec<SceneMesh<S>>,
    pub lights: Vec<Light>,
}

impl<S: Clone> Default for Scene<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone> Scene<S> {
    pub const fn new() -> Self {
        Scene {
            objects: Vec::new(),
            lights: Vec::new(),
        }
    }

    pub fn add(&mut self, mesh: PolyMesh<S>, material: Material) {
        self.objects.push(SceneMesh::new(mesh, material));
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }
}

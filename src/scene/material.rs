//! Surface appearance for scene meshes.

use crate::float_types::Real;

/// A Lambert material: a diffuse reflectance per RGB channel, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub diffuse: [Real; 3],
}

impl Material {
    pub const fn new(diffuse: [Real; 3]) -> Self {
        Material { diffuse }
    }
}

impl Default for Material {
    /// Neutral mid-gray.
    fn default() -> Self {
        Material::new([0.7, 0.7, 0.7])
    }
}

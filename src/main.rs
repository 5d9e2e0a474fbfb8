// Builds the one static scene this crate exists for: a rectangular frustum,
// one ambient and one directional light, an orthographic camera, and a single
// render written out as a PNG canvas.

use nalgebra::Vector3;
use prismoid::float_types::Real;
use prismoid::render::Renderer;
use prismoid::scene::Scene;
use prismoid::scene::camera::OrthographicCamera;
use prismoid::scene::light::Light;
use prismoid::scene::material::Material;
use prismoid::{FrustumParams, PolyMesh};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Viewport from the command line, defaulting to 800x600.
    let mut args = std::env::args().skip(1);
    let width: u32 = match args.next() {
        Some(arg) => arg.parse()?,
        None => 800,
    };
    let height: u32 = match args.next() {
        Some(arg) => arg.parse()?,
        None => 600,
    };

    let params = FrustumParams::new(10.0, 10.0, 4.0, 4.0, 8.0);
    let frustum = PolyMesh::frustum_with_params(params);
    log::info!(
        "built {} mesh: {} vertices, {} triangles, manifold: {}",
        FrustumParams::KIND,
        frustum.vertex_count(),
        frustum.triangle_count(),
        frustum.is_manifold()
    );

    let bounds = frustum.bounding_box();
    let center = bounds.center();
    let extent = bounds.size().norm();

    let mut scene = Scene::new();
    scene.add(frustum, Material::new([0.8, 0.55, 0.25]));
    scene.add_light(Light::ambient(0.25));
    scene.add_light(Light::directional(Vector3::new(-1.0, -1.5, -1.0), 0.9));

    // Frame the mesh from a three-quarter view, volume sized to its bounds.
    let mut camera = OrthographicCamera::from_viewport(
        width as Real,
        height as Real,
        extent * 1.2,
        0.1,
        extent * 4.0,
    );
    let eye = center + Vector3::new(1.0, 0.8, 1.0).normalize() * extent * 1.5;
    camera.look_at(eye, center, Vector3::y());

    let renderer = Renderer::new(width, height);
    let canvas = renderer.render(&scene, &camera);

    let path = "frustum.png";
    canvas.save(path)?;
    log::info!("rendered {}x{} canvas to {}", width, height, path);
    Ok(())
}

use image::Rgba;
use nalgebra::{Point3, Vector3};
use prismoid::render::Renderer;
use prismoid::scene::Scene;
use prismoid::scene::camera::OrthographicCamera;
use prismoid::scene::light::Light;
use prismoid::scene::material::Material;
use prismoid::{FrustumParams, PolyMesh};

mod support;
use support::approx_eq;

#[test]
fn orthographic_rays_are_parallel() {
    let camera = OrthographicCamera::new(-2.0, 2.0, -1.0, 1.0, 0.1, 50.0);
    let (o1, d1) = camera.ray(0.0, 0.0);
    let (o2, d2) = camera.ray(1.0, 1.0);
    assert_eq!(d1, d2);
    assert_ne!(o1, o2);
    assert!(approx_eq(d1.norm(), 1.0, 1e-9));
}

#[test]
fn viewport_volume_preserves_aspect() {
    let camera = OrthographicCamera::from_viewport(200.0, 100.0, 10.0, 0.1, 50.0);
    assert!(approx_eq(camera.top - camera.bottom, 10.0, 1e-9));
    assert!(approx_eq(camera.right - camera.left, 20.0, 1e-9));
}

#[test]
fn look_at_builds_an_orthonormal_basis() {
    let mut camera = OrthographicCamera::new(-1.0, 1.0, -1.0, 1.0, 0.1, 50.0);
    camera.look_at(
        Point3::new(5.0, 4.0, 3.0),
        Point3::origin(),
        Vector3::y(),
    );
    assert!(approx_eq(camera.dir.norm(), 1.0, 1e-9));
    assert!(approx_eq(camera.u_axis.norm(), 1.0, 1e-9));
    assert!(approx_eq(camera.v_axis.norm(), 1.0, 1e-9));
    assert!(approx_eq(camera.dir.dot(&camera.u_axis), 0.0, 1e-9));
    assert!(approx_eq(camera.dir.dot(&camera.v_axis), 0.0, 1e-9));
    assert!(approx_eq(camera.u_axis.dot(&camera.v_axis), 0.0, 1e-9));
}

#[test]
fn look_at_survives_a_parallel_up_hint() {
    let mut camera = OrthographicCamera::new(-1.0, 1.0, -1.0, 1.0, 0.1, 50.0);
    camera.look_at(
        Point3::new(0.0, 10.0, 0.0),
        Point3::origin(),
        Vector3::y(),
    );
    assert!(approx_eq(camera.u_axis.norm(), 1.0, 1e-9));
    assert!(approx_eq(camera.dir.dot(&camera.u_axis), 0.0, 1e-9));
}

/// Frustum centered in view, camera on +Z looking back at the origin.
fn frustum_scene() -> (Scene<()>, OrthographicCamera) {
    let mesh: PolyMesh<()> = PolyMesh::frustum(&FrustumParams::new(10.0, 10.0, 4.0, 4.0, 8.0), None);
    let mut scene = Scene::new();
    scene.add(mesh, Material::new([0.5, 0.5, 0.5]));

    let mut camera = OrthographicCamera::from_viewport(64.0, 48.0, 20.0, 0.1, 100.0);
    camera.look_at(Point3::new(0.0, 0.0, 30.0), Point3::origin(), Vector3::y());
    (scene, camera)
}

#[test]
fn center_pixel_hits_and_corners_miss() {
    let (mut scene, camera) = frustum_scene();
    scene.add_light(Light::ambient(1.0));

    let mut renderer = Renderer::new(64, 48);
    renderer.background = [0.0, 0.0, 0.0];
    let canvas = renderer.render(&scene, &camera);

    // The widest rectangle spans ±5 world units; the view volume is 20×26.7,
    // so the corners see nothing but background.
    assert_eq!(*canvas.get_pixel(0, 0), Rgba([0, 0, 0, 255]));
    assert_eq!(*canvas.get_pixel(63, 47), Rgba([0, 0, 0, 255]));
    assert_ne!(*canvas.get_pixel(32, 24), Rgba([0, 0, 0, 255]));
}

#[test]
fn ambient_light_shades_flat() {
    let (mut scene, camera) = frustum_scene();
    scene.add_light(Light::ambient(1.0));

    let mut renderer = Renderer::new(64, 48);
    renderer.background = [0.0, 0.0, 0.0];
    let canvas = renderer.render(&scene, &camera);

    // diffuse 0.5 × full white ambient = mid gray, independent of geometry.
    assert_eq!(*canvas.get_pixel(32, 24), Rgba([128, 128, 128, 255]));
}

#[test]
fn directional_light_follows_lambert() {
    let (mut scene, camera) = frustum_scene();
    // Light traveling straight down the view axis: the far cap faces it head-on.
    scene.add_light(Light::directional(Vector3::new(0.0, 0.0, -1.0), 1.0));

    let mut renderer = Renderer::new(64, 48);
    renderer.background = [0.0, 0.0, 0.0];
    let canvas = renderer.render(&scene, &camera);

    // Center ray hits the +Z cap: lambert = 1, so the channel is diffuse × 255.
    assert_eq!(*canvas.get_pixel(32, 24), Rgba([128, 128, 128, 255]));
}

#[test]
fn empty_scene_renders_background_only() {
    let scene: Scene<()> = Scene::new();
    let camera = OrthographicCamera::new(-1.0, 1.0, -1.0, 1.0, 0.1, 10.0);
    let mut renderer = Renderer::new(8, 8);
    renderer.background = [1.0, 0.0, 0.0];
    let canvas = renderer.render(&scene, &camera);
    for pixel in canvas.pixels() {
        assert_eq!(*pixel, Rgba([255, 0, 0, 255]));
    }
}

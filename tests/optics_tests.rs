use prismoid::float_types::{PI, Real};
use prismoid::optics::{Camera, Lens, MICROMETER, MILLIMETER, Projection, Sensor};

mod support;
use support::approx_eq;

const DEG: Real = PI / 180.0;

/// 5 µm pitch, 4000×3000 active area: a 20 mm × 15 mm (25 mm diagonal) sensor.
fn test_sensor() -> Sensor {
    Sensor::new(5.0 * MICROMETER, 4000, 3000)
}

/// f = 10 mm at f/2.
fn test_lens() -> Lens {
    Lens::new(10.0 * MILLIMETER, 5.0 * MILLIMETER)
}

#[test]
fn sensor_dimensions_follow_the_pixel_grid() {
    let sensor = Sensor::new(1.55 * MICROMETER, 4096, 3072);
    assert!(approx_eq(sensor.width(), 1.55 * MICROMETER * 4096.0, 1e-12));
    assert!(approx_eq(sensor.height(), 1.55 * MICROMETER * 3072.0, 1e-12));
    assert!(approx_eq(
        sensor.circle_of_confusion(),
        2.25 * 1.55 * MICROMETER,
        1e-12
    ));
    assert!(approx_eq(
        sensor.diagonal(),
        (sensor.width().powi(2) + sensor.height().powi(2)).sqrt(),
        1e-12
    ));
}

#[test]
fn f_number_is_focal_length_over_aperture() {
    let lens = test_lens();
    assert!(approx_eq(lens.f_number(), 2.0, 1e-12));
    assert_eq!(lens.projection, Projection::Rectilinear);
}

#[test]
fn rectilinear_angles_of_view() {
    let camera = Camera::new(test_sensor(), test_lens());

    // Sensor width equals 2f, so the horizontal angle is exactly 90°.
    let (horizontal, vertical) = camera.angles_of_view();
    assert!(approx_eq(horizontal, 90.0 * DEG, 1e-9));
    assert!(approx_eq(vertical, 73.74 * DEG, 0.1 * DEG));
    assert!(approx_eq(camera.diagonal_angle_of_view(), 2.03, 0.1 * DEG));
    assert!(approx_eq(camera.instantaneous_angle_of_view(), 0.0005, 0.1 * DEG));
}

#[test]
fn equidistant_angles_of_view() {
    let mut lens = test_lens();
    lens.projection = Projection::Equidistant;
    let camera = Camera::new(test_sensor(), lens);

    let (horizontal, vertical) = camera.angles_of_view();
    assert!(approx_eq(horizontal, 114.6 * DEG, 0.1 * DEG));
    assert!(approx_eq(vertical, 85.944 * DEG, 0.1 * DEG));
    assert!(approx_eq(camera.diagonal_angle_of_view(), 2.5, 0.1 * DEG));
    // One pixel subtends the same angle under either projection.
    assert!(approx_eq(camera.instantaneous_angle_of_view(), 0.0005, 0.1 * DEG));
}

#[test]
fn ground_sample_distance_scales_with_range() {
    let camera = Camera::new(test_sensor(), test_lens());
    assert!(approx_eq(camera.ground_sample_distance(1.0), 0.0005, 1e-4));
    assert!(approx_eq(camera.ground_sample_distance(10.0), 0.005, 1e-3));
}

#[test]
fn hyperfocal_distance_matches_the_reference_value() {
    let camera = Camera::new(test_sensor(), test_lens());
    // f²/(N·c) + f = 0.0001 / 2.25e-5 + 0.01 m.
    assert!(approx_eq(camera.hyperfocal_distance(), 4.45444444444, 0.01));
}

#[test]
fn depth_of_field_brackets_the_focus_distance() {
    let camera = Camera::new(test_sensor(), test_lens());
    let (near, far) = camera.depth_of_field(1.0);
    assert!(approx_eq(near, 0.8163, 0.01));
    assert!(approx_eq(far, 1.29, 0.01));
    assert!(near < 1.0 && 1.0 < far);
}

#[test]
fn depth_of_field_far_limit_reaches_infinity_past_the_hyperfocal_point() {
    let camera = Camera::new(test_sensor(), test_lens());
    // Focused beyond the hyperfocal distance (≈4.45 m), f² − N·c·s ≤ 0.
    let (near, far) = camera.depth_of_field(5.0);
    assert!(near.is_finite());
    assert!(far.is_infinite());
}

#[test]
fn equivalent_focal_lengths_follow_the_crop_factor() {
    let camera = Camera::new(test_sensor(), test_lens());
    // 43.27 mm full-frame diagonal over the 25 mm sensor diagonal.
    assert!(approx_eq(
        camera.equivalent_focal_length_35mm(),
        17.31 * MILLIMETER,
        0.1 * MILLIMETER
    ));
    assert!(approx_eq(
        camera.equivalent_focal_length_aps_c(),
        11.54 * MILLIMETER,
        0.1 * MILLIMETER
    ));
}

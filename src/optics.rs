//! Thin-lens camera calculations: fields of view, ground sample distance,
//! hyperfocal distance, depth of field and equivalent focal lengths.
//!
//! All lengths are in meters and all angles in radians. Inputs are taken as
//! given, matching the crate's stance on numeric validation: physically
//! meaningless values (a focus distance inside the focal length, a zero
//! aperture) flow through the formulas rather than raising errors.
//!
//! References: Ray, *Applied Photographic Optics*, 3rd ed. (equations 22.3
//! and 22.4 for depth of field); Lyon, *Depth of Field Outside the Box*
//! (circle-of-confusion diameter for Bayer sensors).

use crate::float_types::Real;

/// One micrometer in meters.
pub const MICROMETER: Real = 1e-6;
/// One millimeter in meters.
pub const MILLIMETER: Real = 1e-3;

/// Diagonal of the 35 mm full-frame image area per the CIPA guidelines.
const FULL_FRAME_DIAGONAL: Real = 43.27e-3;
/// Circle-of-confusion diameter for a Bayer color-filter array, in pixel
/// pitches (per Lyon).
const BAYER_COC_PITCHES: Real = 2.25;
/// Crop factor between the 35 mm and APS-C image areas.
const APS_C_CROP: Real = 1.5;

/// An image sensor: square pixels of `pixel_pitch` on an active area of
/// `width_pixels` × `height_pixels`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sensor {
    /// Center-to-center pixel spacing, in meters.
    pub pixel_pitch: Real,
    pub width_pixels: u32,
    pub height_pixels: u32,
}

impl Sensor {
    pub const fn new(pixel_pitch: Real, width_pixels: u32, height_pixels: u32) -> Self {
        Sensor {
            pixel_pitch,
            width_pixels,
            height_pixels,
        }
    }

    /// Width of the active area.
    pub fn width(&self) -> Real {
        self.pixel_pitch * self.width_pixels as Real
    }

    /// Height of the active area.
    pub fn height(&self) -> Real {
        self.pixel_pitch * self.height_pixels as Real
    }

    /// Diagonal of the active area.
    pub fn diagonal(&self) -> Real {
        self.width().hypot(self.height())
    }

    /// Circle-of-confusion diameter appropriate for the sensor, assuming a
    /// Bayer color-filter array: 2.25 pixel pitches.
    pub fn circle_of_confusion(&self) -> Real {
        BAYER_COC_PITCHES * self.pixel_pitch
    }
}

/// Mapping from focal-plane distances to view angles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Projection {
    /// Standard perspective projection: θ = 2·atan(d / 2f).
    #[default]
    Rectilinear,
    /// Fisheye projection with angle proportional to image height: θ = d / f.
    Equidistant,
}

/// A thin lens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lens {
    /// Focal length, in meters.
    pub focal_length: Real,
    /// Entrance-pupil diameter, in meters.
    pub aperture_diameter: Real,
    pub projection: Projection,
}

impl Lens {
    /// A rectilinear lens.
    pub const fn new(focal_length: Real, aperture_diameter: Real) -> Self {
        Lens {
            focal_length,
            aperture_diameter,
            projection: Projection::Rectilinear,
        }
    }

    /// The f-number: focal length over aperture diameter.
    pub fn f_number(&self) -> Real {
        self.focal_length / self.aperture_diameter
    }

    /// Angle of view subtended by a length in the focal plane, under this
    /// lens's projection.
    fn angle_of_view(&self, focal_plane_length: Real) -> Real {
        match self.projection {
            Projection::Rectilinear => 2.0 * focal_plane_length.atan2(2.0 * self.focal_length),
            Projection::Equidistant => focal_plane_length / self.focal_length,
        }
    }
}

/// A sensor behind a lens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub sensor: Sensor,
    pub lens: Lens,
}

impl Camera {
    pub const fn new(sensor: Sensor, lens: Lens) -> Self {
        Camera { sensor, lens }
    }

    /// The (horizontal, vertical) angles of view.
    pub fn angles_of_view(&self) -> (Real, Real) {
        (
            self.lens.angle_of_view(self.sensor.width()),
            self.lens.angle_of_view(self.sensor.height()),
        )
    }

    /// The diagonal angle of view.
    pub fn diagonal_angle_of_view(&self) -> Real {
        let (horizontal, vertical) = self.angles_of_view();
        horizontal.hypot(vertical)
    }

    /// The instantaneous angle of view: the angle one pixel subtends.
    pub fn instantaneous_angle_of_view(&self) -> Real {
        self.lens.angle_of_view(self.sensor.pixel_pitch)
    }

    /// Ground sample distance: the footprint of one pixel on a target plane
    /// at `distance` meters.
    pub fn ground_sample_distance(&self, distance: Real) -> Real {
        let ifov = self.instantaneous_angle_of_view();
        2.0 * distance * (ifov / 2.0).tan()
    }

    /// Hyperfocal distance: focused here, everything from half this distance
    /// to infinity is acceptably sharp.
    pub fn hyperfocal_distance(&self) -> Real {
        let f = self.lens.focal_length;
        f * f / (self.lens.f_number() * self.sensor.circle_of_confusion()) + f
    }

    /// The (near, far) limits of acceptable sharpness when focused at
    /// `focus_distance` meters (Ray, equations 22.3 and 22.4).
    ///
    /// The far limit is infinite once `focus_distance` reaches the
    /// hyperfocal regime, i.e. when `f² − N·c·s` is not positive.
    pub fn depth_of_field(&self, focus_distance: Real) -> (Real, Real) {
        let f = self.lens.focal_length;
        let f_squared = f * f;
        let n_times_c = self.lens.f_number() * self.sensor.circle_of_confusion();

        let near = focus_distance * f_squared / (f_squared + n_times_c * focus_distance);

        let far_denominator = f_squared - n_times_c * focus_distance;
        let far = if far_denominator > 0.0 {
            focus_distance * f_squared / far_denominator
        } else {
            Real::INFINITY
        };

        (near, far)
    }

    /// The CIPA "converted focal length into 35 mm camera": the lens focal
    /// length scaled by the full-frame-to-sensor diagonal ratio.
    pub fn equivalent_focal_length_35mm(&self) -> Real {
        let crop_factor = FULL_FRAME_DIAGONAL / self.sensor.diagonal();
        crop_factor * self.lens.focal_length
    }

    /// The APS-C equivalent focal length.
    pub fn equivalent_focal_length_aps_c(&self) -> Real {
        self.equivalent_focal_length_35mm() / APS_C_CROP
    }
}

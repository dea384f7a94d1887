use serde_json::Value;

use crate::{
    field::{self, Object},
    types::Rational,
    Diagnostics, PropertyGroup,
};

use super::split_containers;

/// Radial (k1..kN) and tangential (p1..pN) coefficients of a lens model.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Distortion {
    pub radial: Vec<f64>,
    pub tangential: Option<Vec<f64>>,
}

impl Distortion {
    /// Tangential coefficients are meaningless without radial ones.
    pub fn collapse(radial: Option<Vec<f64>>, tangential: Option<Vec<f64>>) -> Option<Self> {
        radial.map(|radial| Self { radial, tangential })
    }

    fn parse(object: &Object, path: &str, diags: &mut Diagnostics) -> Option<Self> {
        let radial = field::get_array(object, &format!("{path}/radial"), diags);
        let tangential = field::get_array(object, &format!("{path}/tangential"), diags);

        Self::collapse(radial, tangential)
    }
}

/// Shift in X and Y of a projection centre, in millimeters.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Shift {
    pub x: f64,
    pub y: f64,
}

impl Shift {
    /// Both coordinates are required together.
    pub fn collapse(x: Option<f64>, y: Option<f64>) -> Option<Self> {
        Some(Self { x: x?, y: y? })
    }

    fn parse(object: &Object, path: &str, diags: &mut Diagnostics) -> Option<Self> {
        let x = field::get(object, &format!("{path}/x"), diags);
        let y = field::get(object, &format!("{path}/y"), diags);

        Self::collapse(x, y)
    }
}

/// Coefficients of the exposure fall-off (vignetting) of a lens.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct ExposureFalloff {
    pub a1: f64,
    pub a2: Option<f64>,
    pub a3: Option<f64>,
}

impl ExposureFalloff {
    pub fn collapse(a1: Option<f64>, a2: Option<f64>, a3: Option<f64>) -> Option<Self> {
        a1.map(|a1| Self { a1, a2, a3 })
    }

    fn parse(object: &Object, path: &str, diags: &mut Diagnostics) -> Option<Self> {
        let a1 = field::get(object, &format!("{path}/a1"), diags);
        let a2 = field::get(object, &format!("{path}/a2"), diags);
        let a3 = field::get(object, &format!("{path}/a3"), diags);

        Self::collapse(a1, a2, a3)
    }
}

/// Normalised (0-1) focus, iris and zoom encoder positions.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Encoders {
    pub focus: Option<f64>,
    pub iris: Option<f64>,
    pub zoom: Option<f64>,
}

/// Raw focus, iris and zoom encoder values, before homing and ranging.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawEncoders {
    pub focus: Option<u32>,
    pub iris: Option<u32>,
    pub zoom: Option<u32>,
}

macro_rules! impl_encoders {
    ($name:ident, $ty:ty) => {
        impl $name {
            /// Absent when no axis is reported.
            pub fn collapse(focus: Option<$ty>, iris: Option<$ty>, zoom: Option<$ty>) -> Option<Self> {
                if focus.is_none() && iris.is_none() && zoom.is_none() {
                    return None;
                }
                Some(Self { focus, iris, zoom })
            }

            fn parse(object: &Object, path: &str, diags: &mut Diagnostics) -> Option<Self> {
                let focus = field::get(object, &format!("{path}/focus"), diags);
                let iris = field::get(object, &format!("{path}/iris"), diags);
                let zoom = field::get(object, &format!("{path}/zoom"), diags);

                Self::collapse(focus, iris, zoom)
            }
        }
    };
}

impl_encoders!(Encoders, f64);
impl_encoders!(RawEncoders, u32);

/// Lens properties, merged from `static/lens` and the per-sample `lens`.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Lens {
    // Static.
    pub firmware_version: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    /// Focal length printed on the side of a prime lens, in millimeters.
    pub nominal_focal_length: Option<f64>,

    /// Custom coefficients for a particular lens model.
    pub custom: Option<Vec<f64>>,
    pub distortion: Option<Distortion>,
    /// Overscan factor on lens distortion.
    pub distortion_overscan: Option<f64>,
    /// Scaling factor on field of view for tweaking lens calibrations.
    pub distortion_scale: Option<f64>,
    /// Shift of the centre of distortion of the virtual camera.
    pub distortion_shift: Option<Shift>,
    pub encoders: Option<Encoders>,
    /// Position of the entrance pupil relative to the nominal imaging plane.
    pub entrance_pupil_offset: Option<Rational>,
    pub exposure_falloff: Option<ExposureFalloff>,
    pub f_stop: Option<u32>,
    /// Focal length in millimeters.
    pub focal_length: Option<f64>,
    /// Focus distance in millimeters.
    pub focus_distance: Option<u32>,
    /// Shift of the centre of perspective projection of the virtual camera.
    pub perspective_shift: Option<Shift>,
    pub raw_encoders: Option<RawEncoders>,
    /// Linear t-number in 0.001 units.
    pub t_stop: Option<u32>,
    pub undistortion: Option<Distortion>,
}

impl Lens {
    pub fn parse(doc: &Value, diags: &mut Diagnostics) -> Option<Self> {
        let (static_object, object) = split_containers(doc, PropertyGroup::Lens, diags)?;

        let mut lens = Lens::default();

        if let Some(object) = static_object {
            lens.firmware_version = field::get(object, "firmwareVersion", diags);
            lens.make = field::get(object, "make", diags);
            lens.model = field::get(object, "model", diags);
            lens.serial_number = field::get(object, "serialNumber", diags);
            lens.nominal_focal_length = field::get(object, "nominalFocalLength", diags);
        }

        if let Some(object) = object {
            lens.parse_dynamic(object, diags);
        }

        Some(lens)
    }

    fn parse_dynamic(&mut self, object: &Object, diags: &mut Diagnostics) {
        self.custom = field::get_array(object, "custom", diags);

        self.distortion = field::get_object(object, "distortion", diags)
            .and_then(|group| Distortion::parse(group, "distortion", diags));
        self.distortion_overscan = field::get(object, "distortionOverscan", diags);
        self.distortion_scale = field::get(object, "distortionScale", diags);
        self.distortion_shift = field::get_object(object, "distortionShift", diags)
            .and_then(|group| Shift::parse(group, "distortionShift", diags));

        self.encoders =
            field::get_object(object, "encoders", diags).and_then(|group| Encoders::parse(group, "encoders", diags));

        self.entrance_pupil_offset = field::get_object(object, "entrancePupilOffset", diags).and_then(|group| {
            let numerator = field::get::<i64>(group, "entrancePupilOffset/num", diags);
            let denominator = field::get::<i64>(group, "entrancePupilOffset/denom", diags);
            Some(Rational::new(numerator?, denominator?))
        });

        self.exposure_falloff = field::get_object(object, "exposureFalloff", diags)
            .and_then(|group| ExposureFalloff::parse(group, "exposureFalloff", diags));
        self.f_stop = field::get(object, "fStop", diags);
        self.focal_length = field::get(object, "focalLength", diags);
        self.focus_distance = field::get(object, "focusDistance", diags);
        self.perspective_shift = field::get_object(object, "perspectiveShift", diags)
            .and_then(|group| Shift::parse(group, "perspectiveShift", diags));
        self.raw_encoders = field::get_object(object, "rawEncoders", diags)
            .and_then(|group| RawEncoders::parse(group, "rawEncoders", diags));
        self.t_stop = field::get(object, "tStop", diags);
        self.undistortion = field::get_object(object, "undistortion", diags)
            .and_then(|group| Distortion::parse(group, "undistortion", diags));
    }
}

use std::ops::RangeInclusive;

use serde_json::Value;

use crate::{
    field::{self, URN_UUID},
    types::{Dimensions, Rational},
    Diagnostics, Problem, PropertyGroup,
};

/// Valid shutter angles, in thousandths of a degree.
pub const SHUTTER_ANGLE_RANGE: RangeInclusive<u32> = 1..=360000;

/// Static camera properties, read from `static/camera`.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Camera {
    /// Active area of the camera sensor, in microns.
    pub active_sensor_physical_dimensions: Option<Dimensions>,
    /// Photosite resolution of the active sensor area, in pixels.
    pub active_sensor_resolution: Option<Dimensions>,
    /// Nominal ratio of height to width of the image of an axis-aligned square.
    pub anamorphic_squeeze: Option<Rational>,
    pub firmware_version: Option<String>,
    pub label: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    /// Capture frame rate in Hertz.
    pub capture_frame_rate: Option<Rational>,
    /// URN of the FDL used by the camera.
    pub fdl_link: Option<String>,
    /// Arithmetic ISO scale as defined in ISO 12232.
    pub iso_speed: Option<u32>,
    /// See [SHUTTER_ANGLE_RANGE].
    pub shutter_angle: Option<u32>,
}

impl Camera {
    pub fn parse(doc: &Value, diags: &mut Diagnostics) -> Option<Self> {
        let value = PropertyGroup::Camera.lookup_static(doc)?;
        let object = field::as_object(value, PropertyGroup::Camera.as_str(), diags)?;

        let mut camera = Camera {
            active_sensor_physical_dimensions: field::get_with(
                object,
                "activeSensorPhysicalDimensions",
                diags,
                Dimensions::parse,
            ),
            active_sensor_resolution: field::get_with(object, "activeSensorResolution", diags, Dimensions::parse),
            anamorphic_squeeze: field::get_with(object, "anamorphicSqueeze", diags, Rational::parse),
            firmware_version: field::get(object, "firmwareVersion", diags),
            label: field::get(object, "label", diags),
            make: field::get(object, "make", diags),
            model: field::get(object, "model", diags),
            serial_number: field::get(object, "serialNumber", diags),
            capture_frame_rate: field::get_with(object, "captureFrameRate", diags, Rational::parse),
            fdl_link: field::get_matching(object, "fdlLink", &URN_UUID, diags),
            iso_speed: field::get(object, "isoSpeed", diags),
            shutter_angle: field::get(object, "shutterAngle", diags),
        };

        // Out of range only drops the field, the camera itself stays valid.
        if let Some(angle) = camera.shutter_angle {
            if !SHUTTER_ANGLE_RANGE.contains(&angle) {
                diags.push(
                    "shutterAngle",
                    Problem::Range {
                        min: *SHUTTER_ANGLE_RANGE.start(),
                        max: *SHUTTER_ANGLE_RANGE.end(),
                    },
                );
                camera.shutter_angle = None;
            }
        }

        Some(camera)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn parse_camera(body: Value) -> (Option<Camera>, Diagnostics) {
        let mut diags = Diagnostics::new();
        let camera = Camera::parse(&json!({ "static": { "camera": body } }), &mut diags);
        (camera, diags)
    }

    #[test]
    fn parse_full_camera() {
        let (camera, diags) = parse_camera(json!({
            "activeSensorPhysicalDimensions": { "height": 24000, "width": 36000 },
            "activeSensorResolution": { "height": 2160, "width": 3840 },
            "anamorphicSqueeze": { "num": 1, "denom": 1 },
            "firmwareVersion": "1.0.1",
            "label": "A",
            "make": "SpaceCam",
            "model": "Orbiter",
            "serialNumber": "1234567890A",
            "captureFrameRate": { "num": 24000, "denom": 1001 },
            "fdlLink": "urn:uuid:5ca5f233-11b5-4f43-8815-948d73e48a33",
            "isoSpeed": 4000,
            "shutterAngle": 45000
        }));

        assert!(diags.is_empty(), "{:?}", diags.messages());
        let camera = camera.unwrap();
        assert_eq!(
            camera.active_sensor_resolution,
            Some(Dimensions {
                width: 3840,
                height: 2160
            })
        );
        assert_eq!(camera.capture_frame_rate, Some(Rational::new(24000, 1001)));
        assert_eq!(camera.make.as_deref(), Some("SpaceCam"));
        assert_eq!(camera.iso_speed, Some(4000));
        assert_eq!(camera.shutter_angle, Some(45000));
    }

    #[test]
    fn shutter_angle_out_of_range_is_soft() {
        let (camera, diags) = parse_camera(json!({ "make": "SpaceCam", "isoSpeed": 800, "shutterAngle": 400000 }));

        let camera = camera.unwrap();
        assert_eq!(camera.shutter_angle, None);
        assert_eq!(camera.make.as_deref(), Some("SpaceCam"));
        assert_eq!(camera.iso_speed, Some(800));
        assert_eq!(
            diags.messages(),
            ["field: shutterAngle is outside the expected range 1 - 360000."]
        );
    }

    #[test]
    fn shutter_angle_bounds() {
        let (camera, diags) = parse_camera(json!({ "shutterAngle": 360000 }));
        assert_eq!(camera.unwrap().shutter_angle, Some(360000));
        assert!(diags.is_empty());

        let (camera, diags) = parse_camera(json!({ "shutterAngle": 360001 }));
        assert_eq!(camera.unwrap().shutter_angle, None);
        assert_eq!(diags.len(), 1);

        let (camera, diags) = parse_camera(json!({ "shutterAngle": 1 }));
        assert_eq!(camera.unwrap().shutter_angle, Some(1));
        assert!(diags.is_empty());

        let (camera, diags) = parse_camera(json!({ "shutterAngle": 0 }));
        assert_eq!(camera.unwrap().shutter_angle, None);
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn bad_fields_do_not_drop_camera() {
        let (camera, diags) = parse_camera(json!({
            "make": 5,
            "fdlLink": "not-a-urn",
            "activeSensorResolution": { "width": 1 },
            "model": "Orbiter"
        }));

        let camera = camera.unwrap();
        assert_eq!(camera.make, None);
        assert_eq!(camera.fdl_link, None);
        assert_eq!(camera.active_sensor_resolution, None);
        assert_eq!(camera.model.as_deref(), Some("Orbiter"));
        assert_eq!(
            diags.messages(),
            [
                "field: activeSensorResolution is missing required fields",
                "field: make isn't of type: string",
                "field: fdlLink doesn't match required pattern",
            ]
        );
    }

    #[test]
    fn malformed_container() {
        let (camera, diags) = parse_camera(json!([1, 2]));

        assert_eq!(camera, None);
        assert_eq!(diags.messages(), ["field: camera isn't of type: object"]);
    }

    #[test]
    fn dynamic_camera_is_ignored() {
        let mut diags = Diagnostics::new();

        assert_eq!(Camera::parse(&json!({ "camera": { "make": "x" } }), &mut diags), None);
        assert!(diags.is_empty());
    }
}

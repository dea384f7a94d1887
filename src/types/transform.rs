use serde_json::Value;

use crate::{field, Diagnostics};

/// X, Y, Z in metres. Z points up, the system is right handed.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub fn parse(value: &Value, path: &str, diags: &mut Diagnostics) -> Option<Self> {
        let object = field::as_object(value, path, diags)?;
        if !field::require(object, path, &["x", "y", "z"], diags) {
            return None;
        }

        let x = field::get::<f64>(object, &format!("{path}/x"), diags);
        let y = field::get::<f64>(object, &format!("{path}/y"), diags);
        let z = field::get::<f64>(object, &format!("{path}/z"), diags);

        Some(Self { x: x?, y: y?, z: z? })
    }
}

/// Intrinsic ZXY euler angles in degrees.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    pub pan: f64,
    pub tilt: f64,
    pub roll: f64,
}

impl Rotation {
    pub fn parse(value: &Value, path: &str, diags: &mut Diagnostics) -> Option<Self> {
        let object = field::as_object(value, path, diags)?;
        if !field::require(object, path, &["pan", "tilt", "roll"], diags) {
            return None;
        }

        let pan = field::get::<f64>(object, &format!("{path}/pan"), diags);
        let tilt = field::get::<f64>(object, &format!("{path}/tilt"), diags);
        let roll = field::get::<f64>(object, &format!("{path}/roll"), diags);

        Some(Self {
            pan: pan?,
            tilt: tilt?,
            roll: roll?,
        })
    }
}

/// A node of the transform hierarchy, relative to its parent or the stage origin.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Transform {
    pub translation: Vector3,
    pub rotation: Rotation,
    pub scale: Option<Vector3>,
    pub id: Option<String>,
    pub parent_id: Option<String>,
}

impl Transform {
    pub fn parse(value: &Value, path: &str, diags: &mut Diagnostics) -> Option<Self> {
        let object = field::as_object(value, path, diags)?;
        if !field::require(object, path, &["translation", "rotation"], diags) {
            return None;
        }

        let translation = field::get_with(object, &format!("{path}/translation"), diags, Vector3::parse);
        let rotation = field::get_with(object, &format!("{path}/rotation"), diags, Rotation::parse);
        let scale = field::get_with(object, &format!("{path}/scale"), diags, Vector3::parse);
        let id = field::get::<String>(object, &format!("{path}/transformId"), diags);
        let parent_id = field::get::<String>(object, &format!("{path}/parentTransformId"), diags);

        Some(Self {
            translation: translation?,
            rotation: rotation?,
            scale,
            id,
            parent_id,
        })
    }
}

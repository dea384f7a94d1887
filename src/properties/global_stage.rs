use serde_json::Value;

use crate::{
    field::{self, FieldType},
    Diagnostics, Problem, PropertyGroup,
};

/// Position of the stage origin in global ENU and geodetic coordinates.
///
/// This may be dynamic, e.g. if the stage is inside a moving vehicle.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct GlobalStage {
    pub e: f64,
    pub n: f64,
    pub u: f64,
    pub lat0: f64,
    pub lon0: f64,
    pub h0: f64,
}

impl GlobalStage {
    /// All six members are required. Evaluation stops at the first one that
    /// is missing or not a number, so a rejected stage has one diagnostic.
    pub fn parse(doc: &Value, diags: &mut Diagnostics) -> Option<Self> {
        let group = PropertyGroup::GlobalStage.as_str();
        let value = PropertyGroup::GlobalStage.lookup(doc)?;
        let object = field::as_object(value, group, diags)?;

        let mut require = |name: &'static str| -> Option<f64> {
            let Some(value) = object.get(name) else {
                diags.push(group, Problem::MissingField(name));
                return None;
            };

            let number = f64::from_value(value);
            if number.is_none() {
                diags.push(format!("{group}/{name}"), Problem::Type(f64::NAME));
            }
            number
        };

        Some(Self {
            e: require("E")?,
            n: require("N")?,
            u: require("U")?,
            lat0: require("lat0")?,
            lon0: require("lon0")?,
            h0: require("h0")?,
        })
    }
}

//! Value types shared by several property groups.

use std::fmt;

use serde_json::Value;

use crate::{field, Diagnostics};

mod time;
mod transform;

pub use time::{Timecode, TimecodeFormat, Timestamp};
pub use transform::{Rotation, Transform, Vector3};

/// Exact fraction, used for frame rates, squeeze factors and offsets.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational {
    pub numerator: i64,
    pub denominator: i64,
}

impl Rational {
    pub const fn new(numerator: i64, denominator: i64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Parse a `{ "num", "denom" }` object where both parts are `uint32`.
    pub fn parse(value: &Value, path: &str, diags: &mut Diagnostics) -> Option<Self> {
        let object = field::as_object(value, path, diags)?;
        if !field::require(object, path, &["num", "denom"], diags) {
            return None;
        }

        let numerator = field::get::<u32>(object, &format!("{path}/num"), diags);
        let denominator = field::get::<u32>(object, &format!("{path}/denom"), diags);

        Some(Self::new(numerator?.into(), denominator?.into()))
    }

    /// Floating point approximation, `None` for a zero denominator.
    pub fn to_f64(self) -> Option<f64> {
        (self.denominator != 0).then(|| self.numerator as f64 / self.denominator as f64)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Width and height of a sensor area.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn parse(value: &Value, path: &str, diags: &mut Diagnostics) -> Option<Self> {
        let object = field::as_object(value, path, diags)?;
        if !field::require(object, path, &["width", "height"], diags) {
            return None;
        }

        let width = field::get::<u32>(object, &format!("{path}/width"), diags);
        let height = field::get::<u32>(object, &format!("{path}/height"), diags);

        Some(Self {
            width: width?,
            height: height?,
        })
    }
}

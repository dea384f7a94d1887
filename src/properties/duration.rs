use serde_json::Value;

use crate::{field, types::Rational, Diagnostics, Problem, PropertyGroup};

/// Duration of the clip in seconds, read from `static/duration`.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Duration {
    pub rational: Rational,
}

impl Duration {
    pub fn parse(doc: &Value, diags: &mut Diagnostics) -> Option<Self> {
        let value = PropertyGroup::Duration.lookup_static(doc)?;
        let object = field::as_object(value, PropertyGroup::Duration.as_str(), diags)?;

        let numerator = field::get::<u32>(object, "duration/num", diags);
        let denominator = field::get::<u32>(object, "duration/denom", diags);

        match (numerator, denominator) {
            (Some(numerator), Some(denominator)) => Some(Self {
                rational: Rational::new(numerator.into(), denominator.into()),
            }),
            _ => {
                diags.push(PropertyGroup::Duration.as_str(), Problem::MissingFields);
                None
            }
        }
    }
}

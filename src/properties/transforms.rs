use serde_json::Value;
use tracing::debug;

use crate::{types::Transform, Diagnostics, Problem, PropertyGroup};

/// Transform hierarchy of the sample.
///
/// Transforms can name themselves and a parent to compose a hierarchy.
/// Children of one parent are applied in array order.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Transforms {
    pub transforms: Vec<Transform>,
}

impl Transforms {
    /// Only the top level shape is reported. Elements that don't parse are
    /// dropped without diagnostics.
    pub fn parse(doc: &Value, diags: &mut Diagnostics) -> Option<Self> {
        let group = PropertyGroup::Transforms.as_str();
        let value = PropertyGroup::Transforms.lookup(doc)?;

        let Some(array) = value.as_array() else {
            diags.push(group, Problem::Type("array"));
            return None;
        };

        let mut transforms = Vec::with_capacity(array.len());

        for (index, item) in array.iter().enumerate() {
            let mut scratch = Diagnostics::new();
            match Transform::parse(item, &format!("{group}/element"), &mut scratch) {
                Some(transform) => transforms.push(transform),
                None => debug!(index, problems = ?scratch.messages(), "Skipping malformed transform"),
            }
        }

        Some(Self { transforms })
    }
}

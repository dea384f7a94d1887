//! URN identifiers of a sample, its stream and related samples.

use std::fmt;

use serde_json::Value;

use crate::{
    field::{self, ArrayPolicy, URN_UUID},
    Diagnostics, Problem, PropertyGroup,
};

macro_rules! urn_id {
    ($(#[$meta:meta])* $name:ident, $group:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(pub String);

        impl $name {
            /// Absent when the key is missing, or with a diagnostic when malformed.
            pub fn parse(doc: &Value, diags: &mut Diagnostics) -> Option<Self> {
                let root = doc.as_object()?;
                field::get_matching(root, $group.as_str(), &URN_UUID, diags).map(Self)
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

urn_id!(
    /// Unique identifier of the sample in which data is being transported.
    SampleId,
    PropertyGroup::SampleId
);

urn_id!(
    /// Unique identifier of the stream the sample belongs to.
    StreamId,
    PropertyGroup::StreamId
);

/// Samples related to this one, e.g. a performance capture sample or static
/// data from the same device. Their existence should not be relied upon.
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelatedSampleIds {
    pub samples: Vec<String>,
}

impl RelatedSampleIds {
    /// Malformed elements are reported and dropped, the list itself survives.
    pub fn parse(doc: &Value, diags: &mut Diagnostics) -> Option<Self> {
        let group = PropertyGroup::RelatedSampleIds.as_str();
        let value = PropertyGroup::RelatedSampleIds.lookup(doc)?;

        let Some(array) = value.as_array() else {
            diags.push(group, Problem::Type("array"));
            return None;
        };

        let samples = field::collect_array(array, group, ArrayPolicy::Skip, diags, |value| {
            let id = field::element::<String>(value)?;
            if URN_UUID.is_match(&id) {
                Ok(id)
            } else {
                Err(Problem::Pattern)
            }
        })?;

        Some(Self { samples })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const ZERO: &str = "urn:uuid:00000000-0000-0000-0000-000000000000";

    #[test]
    fn parse_sample_id() {
        let mut diags = Diagnostics::new();

        let id = SampleId::parse(&json!({ "sampleId": ZERO }), &mut diags).unwrap();
        assert_eq!(id.as_str(), ZERO);
        assert_eq!(id.to_string(), ZERO);
        assert!(diags.is_empty());
    }

    #[test]
    fn malformed_sample_id() {
        let mut diags = Diagnostics::new();

        assert_eq!(SampleId::parse(&json!({ "sampleId": "not-a-uuid" }), &mut diags), None);
        assert_eq!(diags.messages(), ["field: sampleId doesn't match required pattern"]);

        let mut diags = Diagnostics::new();
        assert_eq!(SampleId::parse(&json!({ "sampleId": 7 }), &mut diags), None);
        assert_eq!(diags.messages(), ["field: sampleId isn't of type: string"]);
    }

    #[test]
    fn parse_stream_id() {
        let mut diags = Diagnostics::new();
        let doc = json!({ "streamId": "urn:uuid:abcdefab-1234-5678-9abc-def012345678" });

        assert!(StreamId::parse(&doc, &mut diags).is_some());
        assert_eq!(
            StreamId::parse(&json!({ "streamId": "URN:UUID:ABCDEFAB-1234-5678-9ABC-DEF012345678" }), &mut diags),
            None
        );
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn related_ids_skip_bad_elements() {
        let mut diags = Diagnostics::new();
        let doc = json!({ "relatedSampleIds": [ZERO, "bad", 123] });

        let related = RelatedSampleIds::parse(&doc, &mut diags).unwrap();
        assert_eq!(related.samples, [ZERO]);
        assert_eq!(
            diags.messages(),
            [
                "field: relatedSampleIds/element doesn't match required pattern",
                "field: relatedSampleIds/element isn't of type: string"
            ]
        );
    }

    #[test]
    fn related_ids_all_bad_is_still_present() {
        let mut diags = Diagnostics::new();

        let related = RelatedSampleIds::parse(&json!({ "relatedSampleIds": [false] }), &mut diags).unwrap();
        assert!(related.samples.is_empty());
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn related_ids_not_an_array() {
        let mut diags = Diagnostics::new();

        assert_eq!(RelatedSampleIds::parse(&json!({ "relatedSampleIds": ZERO }), &mut diags), None);
        assert_eq!(diags.messages(), ["field: relatedSampleIds isn't of type: array"]);
    }
}

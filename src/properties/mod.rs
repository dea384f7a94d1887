//! Entity parsers, one per property group.
//!
//! Every parser takes the whole document, because several groups read both
//! the `static` sub tree and a top level key of the same name. A parser
//! returns `None` without diagnostics when its keys are missing, `None` with
//! diagnostics when the group is malformed or misses required members, and
//! `Some` otherwise. Optional members that fail are reported and left unset.

use serde_json::Value;

use crate::{
    field::{self, Object},
    Diagnostics, PropertyGroup,
};

mod camera;
mod duration;
mod global_stage;
mod ids;
mod lens;
mod protocol;
mod timing;
mod tracker;
mod transforms;

pub use camera::{Camera, SHUTTER_ANGLE_RANGE};
pub use duration::Duration;
pub use global_stage::GlobalStage;
pub use ids::{RelatedSampleIds, SampleId, StreamId};
pub use lens::{Distortion, Encoders, ExposureFalloff, Lens, RawEncoders, Shift};
pub use protocol::Protocol;
pub use timing::{Ptp, SyncOffsets, SyncSource, Synchronization, Timing, TimingMode};
pub use tracker::Tracker;
pub use transforms::Transforms;

/// Static and dynamic containers of a group that lives in both places.
///
/// Returns `None` when neither key is present or neither is an object.
fn split_containers<'a>(
    doc: &'a Value,
    group: PropertyGroup,
    diags: &mut Diagnostics,
) -> Option<(Option<&'a Object>, Option<&'a Object>)> {
    let static_node = group.lookup_static(doc);
    let node = group.lookup(doc);

    if static_node.is_none() && node.is_none() {
        return None;
    }

    let static_object = static_node.and_then(|value| field::as_object(value, &format!("static/{}", group.as_str()), diags));
    let object = node.and_then(|value| field::as_object(value, group.as_str(), diags));

    if static_object.is_none() && object.is_none() {
        return None;
    }

    Some((static_object, object))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    /// Every parser, applied to `doc` with its own sink.
    fn parse_all(doc: &Value) -> (bool, Diagnostics) {
        let mut diags = Diagnostics::new();
        let any = [
            Camera::parse(doc, &mut diags).is_some(),
            Duration::parse(doc, &mut diags).is_some(),
            GlobalStage::parse(doc, &mut diags).is_some(),
            Lens::parse(doc, &mut diags).is_some(),
            Protocol::parse(doc, &mut diags).is_some(),
            RelatedSampleIds::parse(doc, &mut diags).is_some(),
            SampleId::parse(doc, &mut diags).is_some(),
            StreamId::parse(doc, &mut diags).is_some(),
            Timing::parse(doc, &mut diags).is_some(),
            Tracker::parse(doc, &mut diags).is_some(),
            Transforms::parse(doc, &mut diags).is_some(),
        ];
        (any.iter().any(|present| *present), diags)
    }

    #[test]
    fn absence_is_silent() {
        for doc in [json!({}), json!({ "static": {} }), json!({ "other": 1 }), json!(null), json!([])] {
            let (any, diags) = parse_all(&doc);
            assert!(!any, "{doc}");
            assert!(diags.is_empty(), "{doc}");
        }
    }

    #[test]
    fn split_containers_shapes() {
        let mut diags = Diagnostics::new();

        let doc = json!({ "static": { "lens": {} } });
        let (static_object, object) = split_containers(&doc, PropertyGroup::Lens, &mut diags).unwrap();
        assert!(static_object.is_some());
        assert!(object.is_none());

        let doc = json!({ "static": { "lens": 1 }, "lens": "x" });
        assert!(split_containers(&doc, PropertyGroup::Lens, &mut diags).is_none());
        assert_eq!(
            diags.messages(),
            [
                "field: static/lens isn't of type: object",
                "field: lens isn't of type: object"
            ]
        );
    }

    #[test]
    fn idempotent() {
        let doc = json!({
            "static": { "camera": { "shutterAngle": 400000, "make": 1 } },
            "relatedSampleIds": ["bad", 1],
            "timing": { "mode": "sometimes" },
        });

        let first = parse_all(&doc);
        let second = parse_all(&doc);
        assert_eq!(first, second);
        assert_eq!(first.1.len(), 5);
    }
}

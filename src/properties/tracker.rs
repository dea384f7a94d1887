use serde_json::Value;

use crate::{field, Diagnostics, PropertyGroup};

use super::split_containers;

/// Tracking device, merged from `static/tracker` and the per-sample `tracker`.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Tracker {
    pub firmware_version: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    /// Free string for notes about tracking.
    pub notes: Option<String>,
    /// True if the system is recording data.
    pub recording: Option<bool>,
    /// Recording slate, e.g. `A101_A_4`.
    pub slate: Option<String>,
    /// Status of the system, e.g. `Optical Good`.
    pub status: Option<String>,
}

impl Tracker {
    pub fn parse(doc: &Value, diags: &mut Diagnostics) -> Option<Self> {
        let (static_object, object) = split_containers(doc, PropertyGroup::Tracker, diags)?;

        let mut tracker = Tracker::default();

        if let Some(object) = static_object {
            tracker.firmware_version = field::get(object, "firmwareVersion", diags);
            tracker.make = field::get(object, "make", diags);
            tracker.model = field::get(object, "model", diags);
            tracker.serial_number = field::get(object, "serialNumber", diags);
        }

        if let Some(object) = object {
            tracker.notes = field::get(object, "notes", diags);
            tracker.recording = field::get(object, "recording", diags);
            tracker.slate = field::get(object, "slate", diags);
            tracker.status = field::get(object, "status", diags);
        }

        Some(tracker)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parse_tracker() {
        let doc = json!({
            "static": {
                "tracker": { "make": "TrackerMaker", "model": "Tracker", "serialNumber": "1234", "firmwareVersion": "1.0.1" }
            },
            "tracker": { "notes": "Example", "recording": false, "slate": "A101_A_4", "status": "Optical Good" }
        });
        let mut diags = Diagnostics::new();

        let tracker = Tracker::parse(&doc, &mut diags).unwrap();
        assert_eq!(tracker.make.as_deref(), Some("TrackerMaker"));
        assert_eq!(tracker.recording, Some(false));
        assert_eq!(tracker.status.as_deref(), Some("Optical Good"));
        assert!(diags.is_empty());
    }

    #[test]
    fn dynamic_only_with_bad_member() {
        let doc = json!({ "tracker": { "recording": "yes", "slate": "A101" } });
        let mut diags = Diagnostics::new();

        let tracker = Tracker::parse(&doc, &mut diags).unwrap();
        assert_eq!(tracker.recording, None);
        assert_eq!(tracker.slate.as_deref(), Some("A101"));
        assert_eq!(tracker.make, None);
        assert_eq!(diags.messages(), ["field: recording isn't of type: boolean"]);
    }

    #[test]
    fn one_malformed_container() {
        let doc = json!({ "static": { "tracker": "x" }, "tracker": { "notes": "n" } });
        let mut diags = Diagnostics::new();

        let tracker = Tracker::parse(&doc, &mut diags).unwrap();
        assert_eq!(tracker.notes.as_deref(), Some("n"));
        assert_eq!(diags.messages(), ["field: static/tracker isn't of type: object"]);
    }
}

use serde_json::Value;

use crate::{
    field::{self, SEMVER},
    Diagnostics, Problem, PropertyGroup, Version,
};

/// Name and version of the protocol the sample was written with.
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Protocol {
    pub name: String,
    /// `MAJOR.MINOR.PATCH`, validated but not checked for compatibility.
    pub version: String,
}

impl Protocol {
    /// Both members are required. They are checked independently so that
    /// a bad name doesn't hide a bad version.
    pub fn parse(doc: &Value, diags: &mut Diagnostics) -> Option<Self> {
        let group = PropertyGroup::Protocol.as_str();
        let value = PropertyGroup::Protocol.lookup(doc)?;
        let object = field::as_object(value, group, diags)?;

        let name = if object.contains_key("name") {
            field::get::<String>(object, "protocol/name", diags)
        } else {
            diags.push(group, Problem::MissingField("name"));
            None
        };

        let version = if object.contains_key("version") {
            field::get_matching(object, "protocol/version", &SEMVER, diags)
        } else {
            diags.push(group, Problem::MissingField("version"));
            None
        };

        Some(Self {
            name: name?,
            version: version?,
        })
    }

    /// Numeric components of [Protocol::version].
    pub fn semver(&self) -> Option<Version> {
        self.version.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::version;

    #[test]
    fn parse_protocol() {
        let mut diags = Diagnostics::new();
        let doc = json!({ "protocol": { "name": "OpenTrackIO", "version": "1.0.0" } });

        let protocol = Protocol::parse(&doc, &mut diags).unwrap();
        assert_eq!(protocol.name, "OpenTrackIO");
        assert_eq!(protocol.version, "1.0.0");
        assert_eq!(protocol.semver(), Some(version(1, 0, 0)));
        assert!(diags.is_empty());
    }

    #[test]
    fn missing_name() {
        let mut diags = Diagnostics::new();
        let doc = json!({ "protocol": { "version": "1.0.0" } });

        assert_eq!(Protocol::parse(&doc, &mut diags), None);
        assert_eq!(diags.messages(), ["field: protocol is missing require field: name"]);
    }

    #[test]
    fn malformed_version() {
        let mut diags = Diagnostics::new();
        let doc = json!({ "protocol": { "name": "OpenTrackIO", "version": "1x0x0" } });

        assert_eq!(Protocol::parse(&doc, &mut diags), None);
        assert_eq!(diags.messages(), ["field: protocol/version doesn't match required pattern"]);
    }

    #[test]
    fn both_members_reported() {
        let mut diags = Diagnostics::new();
        let doc = json!({ "protocol": { "name": 1 } });

        assert_eq!(Protocol::parse(&doc, &mut diags), None);
        assert_eq!(
            diags.messages(),
            [
                "field: protocol/name isn't of type: string",
                "field: protocol is missing require field: version"
            ]
        );
    }

    #[test]
    fn malformed_container() {
        let mut diags = Diagnostics::new();

        assert_eq!(Protocol::parse(&json!({ "protocol": "1.0.0" }), &mut diags), None);
        assert_eq!(diags.messages(), ["field: protocol isn't of type: object"]);
    }
}

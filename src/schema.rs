use serde_json::Value;
use strum::EnumIter;

/// Top level property groups of a sample.
///
/// See <https://www.opentrackio.org/>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum PropertyGroup {
    Camera,
    Duration,
    GlobalStage,
    Lens,
    Protocol,
    RelatedSampleIds,
    SampleId,
    StreamId,
    Timing,
    Tracker,
    Transforms,
}

/// Key of the sub tree holding static, per-clip properties.
pub const STATIC: &str = "static";

impl PropertyGroup {
    pub fn as_str(self) -> &'static str {
        match self {
            PropertyGroup::Camera => "camera",
            PropertyGroup::Duration => "duration",
            PropertyGroup::GlobalStage => "globalStage",
            PropertyGroup::Lens => "lens",
            PropertyGroup::Protocol => "protocol",
            PropertyGroup::RelatedSampleIds => "relatedSampleIds",
            PropertyGroup::SampleId => "sampleId",
            PropertyGroup::StreamId => "streamId",
            PropertyGroup::Timing => "timing",
            PropertyGroup::Tracker => "tracker",
            PropertyGroup::Transforms => "transforms",
        }
    }

    /// Node of this group at the document root.
    #[inline]
    pub fn lookup(self, doc: &Value) -> Option<&Value> {
        doc.get(self.as_str())
    }

    /// Node of this group inside the `static` sub tree.
    #[inline]
    pub fn lookup_static(self, doc: &Value) -> Option<&Value> {
        doc.get(STATIC)?.get(self.as_str())
    }
}

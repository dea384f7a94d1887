//! Whole sample decoding.

use std::{fs, io::Read, path::Path};

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::debug;

use crate::{
    properties::{
        Camera, Duration, GlobalStage, Lens, Protocol, RelatedSampleIds, SampleId, StreamId, Timing, Tracker,
        Transforms,
    },
    Diagnostics,
};

/// One decoded OpenTrackIO sample.
///
/// Every entity is optional. Absent groups are left unset silently, malformed
/// ones are left unset and reported in [Sample::diagnostics].
#[derive(Default, Debug, Clone)]
pub struct Sample {
    pub camera: Option<Camera>,
    pub duration: Option<Duration>,
    pub global_stage: Option<GlobalStage>,
    pub lens: Option<Lens>,
    pub protocol: Option<Protocol>,
    pub related_sample_ids: Option<RelatedSampleIds>,
    pub sample_id: Option<SampleId>,
    pub stream_id: Option<StreamId>,
    pub timing: Option<Timing>,
    pub tracker: Option<Tracker>,
    pub transforms: Option<Transforms>,

    diagnostics: Diagnostics,
}

impl Sample {
    /// Decode every property group of `doc`.
    ///
    /// Never fails, problems end up in [Sample::diagnostics].
    pub fn from_value(doc: &Value) -> Self {
        let mut diags = Diagnostics::new();

        let sample = Sample {
            camera: Camera::parse(doc, &mut diags),
            duration: Duration::parse(doc, &mut diags),
            global_stage: GlobalStage::parse(doc, &mut diags),
            lens: Lens::parse(doc, &mut diags),
            protocol: Protocol::parse(doc, &mut diags),
            related_sample_ids: RelatedSampleIds::parse(doc, &mut diags),
            sample_id: SampleId::parse(doc, &mut diags),
            stream_id: StreamId::parse(doc, &mut diags),
            timing: Timing::parse(doc, &mut diags),
            tracker: Tracker::parse(doc, &mut diags),
            transforms: Transforms::parse(doc, &mut diags),
            diagnostics: diags,
        };

        debug!(
            protocol = ?sample.protocol.as_ref().map(|protocol| protocol.version.as_str()),
            diagnostics = sample.diagnostics.len(),
            "Decoded sample"
        );

        sample
    }

    /// Parse JSON text and decode it. Only malformed JSON is an error.
    pub fn from_json(text: &str) -> Result<Self> {
        let doc: Value = serde_json::from_str(text).context("Unable to parse sample JSON")?;
        Ok(Self::from_value(&doc))
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let doc: Value = serde_json::from_reader(reader).context("Unable to parse sample JSON")?;
        Ok(Self::from_value(&doc))
    }

    /// Read and decode a JSON sample file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).with_context(|| format!("Unable to read file: {}", path.display()))?;

        Self::from_json(&text)
    }

    /// Problems collected while decoding, in document group order.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// True if decoding produced no diagnostics.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

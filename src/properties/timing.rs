use std::str::FromStr;

use serde_json::Value;
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::{
    field::{self, Object, MAC_ADDRESS},
    types::{Rational, Timecode, Timestamp},
    Diagnostics, Problem, PropertyGroup,
};

/// Whether the transport provides timing or the sample has to carry it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum TimingMode {
    /// The transport packet has inherent timing.
    External,
    /// The transport packet has no inherent timing, a PTP timestamp must be provided.
    Internal,
}

/// Source the device is synchronised to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum SyncSource {
    #[strum(serialize = "genlock")]
    GenLock,
    #[strum(serialize = "videoIn")]
    VideoIn,
    #[strum(serialize = "ptp")]
    Ptp,
    #[strum(serialize = "ntp")]
    Ntp,
}

/// Decode a string member into a closed enumeration.
fn get_enum<T: FromStr>(object: &Object, path: &str, diags: &mut Diagnostics) -> Option<T> {
    let value = field::get::<String>(object, path, diags)?;

    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            diags.push(path, Problem::Enumeration(value));
            None
        }
    }
}

/// Offsets in seconds between sync and sample, for late or early data.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct SyncOffsets {
    pub translation: Option<f64>,
    pub rotation: Option<f64>,
    pub lens_encoders: Option<f64>,
}

impl SyncOffsets {
    pub fn collapse(translation: Option<f64>, rotation: Option<f64>, lens_encoders: Option<f64>) -> Option<Self> {
        if translation.is_none() && rotation.is_none() && lens_encoders.is_none() {
            return None;
        }

        Some(Self {
            translation,
            rotation,
            lens_encoders,
        })
    }
}

/// PTP synchronisation details.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Ptp {
    pub domain: Option<u16>,
    pub offset: Option<f64>,
    /// MAC address of the PTP master.
    pub master: Option<String>,
}

impl Ptp {
    pub fn collapse(domain: Option<u16>, offset: Option<f64>, master: Option<String>) -> Option<Self> {
        if domain.is_none() && offset.is_none() && master.is_none() {
            return None;
        }

        Some(Self { domain, offset, master })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Synchronization {
    pub frequency: Rational,
    pub locked: bool,
    pub source: SyncSource,
    pub offsets: Option<SyncOffsets>,
    /// True if the synchronisation source is present.
    pub present: Option<bool>,
    pub ptp: Option<Ptp>,
}

impl Synchronization {
    /// `frequency`, `locked` and `source` are required. Any failure among
    /// them drops the whole synchronisation, optional members are then skipped.
    pub fn parse(value: &Value, path: &str, diags: &mut Diagnostics) -> Option<Self> {
        let object = field::as_object(value, path, diags)?;
        if !field::require(object, path, &["frequency", "locked", "source"], diags) {
            return None;
        }

        let frequency = field::get_with(object, &format!("{path}/frequency"), diags, Rational::parse);
        let locked = field::get::<bool>(object, &format!("{path}/locked"), diags);
        let source = get_enum::<SyncSource>(object, &format!("{path}/source"), diags);

        let (Some(frequency), Some(locked), Some(source)) = (frequency, locked, source) else {
            return None;
        };

        let offsets_path = format!("{path}/offsets");
        let offsets = field::get_object(object, &offsets_path, diags).and_then(|offsets| {
            SyncOffsets::collapse(
                field::get(offsets, &format!("{offsets_path}/translation"), diags),
                field::get(offsets, &format!("{offsets_path}/rotation"), diags),
                field::get(offsets, &format!("{offsets_path}/lensEncoders"), diags),
            )
        });

        let present = field::get(object, &format!("{path}/present"), diags);

        let ptp_path = format!("{path}/ptp");
        let ptp = field::get_object(object, &ptp_path, diags).and_then(|ptp| {
            Ptp::collapse(
                field::get(ptp, &format!("{ptp_path}/domain"), diags),
                field::get(ptp, &format!("{ptp_path}/offset"), diags),
                field::get_matching(ptp, &format!("{ptp_path}/master"), &MAC_ADDRESS, diags),
            )
        });

        Some(Self {
            frequency,
            locked,
            source,
            offsets,
            present,
            ptp,
        })
    }
}

/// Timing properties of the sample, read from `timing`.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Timing {
    pub frame_rate: Option<Rational>,
    pub mode: Option<TimingMode>,
    /// PTP timestamp at which the data was recorded, for pre-recorded data.
    pub recorded_timestamp: Option<Timestamp>,
    /// PTP timestamp of the data capture instant.
    pub sample_timestamp: Option<Timestamp>,
    pub sequence_number: Option<u16>,
    pub synchronization: Option<Synchronization>,
    pub timecode: Option<Timecode>,
}

impl Timing {
    pub fn parse(doc: &Value, diags: &mut Diagnostics) -> Option<Self> {
        let value = PropertyGroup::Timing.lookup(doc)?;
        let object = field::as_object(value, PropertyGroup::Timing.as_str(), diags)?;

        Some(Self {
            frame_rate: field::get_with(object, "frameRate", diags, Rational::parse),
            mode: get_enum(object, "mode", diags),
            recorded_timestamp: field::get_with(object, "recordedTimestamp", diags, Timestamp::parse),
            sample_timestamp: field::get_with(object, "sampleTimestamp", diags, Timestamp::parse),
            sequence_number: field::get(object, "sequenceNumber", diags),
            synchronization: field::get_with(object, "synchronization", diags, Synchronization::parse),
            timecode: field::get_with(object, "timecode", diags, Timecode::parse),
        })
    }
}

//! PTP timestamps and SMPTE style timecodes.

use std::fmt;

use serde_json::Value;

use crate::{field, Diagnostics};

use super::Rational;

/// PTP timestamp.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp {
    pub seconds: u64,
    pub nanoseconds: u32,
    pub attoseconds: u32,
}

impl Timestamp {
    /// Parse a timestamp, `attoseconds` defaults to zero when absent.
    pub fn parse(value: &Value, path: &str, diags: &mut Diagnostics) -> Option<Self> {
        let object = field::as_object(value, path, diags)?;
        if !field::require(object, path, &["seconds", "nanoseconds"], diags) {
            return None;
        }

        let seconds = field::get::<u64>(object, &format!("{path}/seconds"), diags);
        let nanoseconds = field::get::<u32>(object, &format!("{path}/nanoseconds"), diags);
        let attoseconds = field::get::<u32>(object, &format!("{path}/attoseconds"), diags);

        Some(Self {
            seconds: seconds?,
            nanoseconds: nanoseconds?,
            attoseconds: attoseconds.unwrap_or_default(),
        })
    }
}

/// Frame rate and counting mode of a [Timecode].
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimecodeFormat {
    pub frame_rate: Rational,
    pub drop_frame: bool,
    pub odd_field: Option<bool>,
}

impl TimecodeFormat {
    pub fn parse(value: &Value, path: &str, diags: &mut Diagnostics) -> Option<Self> {
        let object = field::as_object(value, path, diags)?;
        if !field::require(object, path, &["frameRate", "dropFrame"], diags) {
            return None;
        }

        let frame_rate = field::get_with(object, &format!("{path}/frameRate"), diags, Rational::parse);
        let drop_frame = field::get::<bool>(object, &format!("{path}/dropFrame"), diags);
        let odd_field = field::get::<bool>(object, &format!("{path}/oddField"), diags);

        Some(Self {
            frame_rate: frame_rate?,
            drop_frame: drop_frame?,
            odd_field,
        })
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timecode {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
    pub frames: u8,
    pub format: TimecodeFormat,
}

impl Timecode {
    pub fn parse(value: &Value, path: &str, diags: &mut Diagnostics) -> Option<Self> {
        let object = field::as_object(value, path, diags)?;
        if !field::require(object, path, &["hours", "minutes", "seconds", "frames", "format"], diags) {
            return None;
        }

        let hours = field::get::<u8>(object, &format!("{path}/hours"), diags);
        let minutes = field::get::<u8>(object, &format!("{path}/minutes"), diags);
        let seconds = field::get::<u8>(object, &format!("{path}/seconds"), diags);
        let frames = field::get::<u8>(object, &format!("{path}/frames"), diags);
        let format = field::get_with(object, &format!("{path}/format"), diags, TimecodeFormat::parse);

        Some(Self {
            hours: hours?,
            minutes: minutes?,
            seconds: seconds?,
            frames: frames?,
            format: format?,
        })
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.format.drop_frame { ';' } else { ':' };
        write!(
            f,
            "{:02}:{:02}:{:02}{}{:02}",
            self.hours, self.minutes, self.seconds, sep, self.frames
        )
    }
}

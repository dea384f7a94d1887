//! `opentrackio` is a tolerant decoder and validator for OpenTrackIO samples.
//!
//! A sample is decoded from a generic JSON document into one optional record
//! per property group. Malformed fields never abort decoding, they are
//! collected as [Diagnostic]s next to the partially populated result.
//!
//! ```
//! let sample = opentrackio::Sample::from_json(r#"{ "protocol": { "name": "OpenTrackIO", "version": "1.0.0" } }"#)?;
//! assert!(sample.is_clean());
//! # Ok::<(), anyhow::Error>(())
//! ```

mod diagnostics;
mod sample;
mod schema;
mod version;

pub mod field;
pub mod properties;
pub mod types;

pub use diagnostics::{Diagnostic, Diagnostics, Problem};
pub use properties::*;
pub use sample::Sample;
pub use schema::{PropertyGroup, STATIC};
pub use version::{version, Version};

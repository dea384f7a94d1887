//! Validation diagnostics collected while decoding a sample.
//!
//! Decoding never stops on a bad field. Every problem is recorded as a
//! [Diagnostic] in a caller owned [Diagnostics] sink and the parser moves on.

use std::{fmt, slice};

use thiserror::Error;
use tracing::trace;

/// What went wrong with a single field or group.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Problem {
    /// Present, but of the wrong JSON kind or outside the integer width.
    #[error("isn't of type: {0}")]
    Type(&'static str),

    /// A string that doesn't match its constraint pattern.
    #[error("doesn't match required pattern")]
    Pattern,

    /// One named required member is missing or invalid.
    #[error("is missing require field: {0}")]
    MissingField(&'static str),

    /// Required members evaluated as a group are incomplete.
    #[error("is missing required fields")]
    MissingFields,

    /// Numeric value outside of a domain specific range.
    #[error("is outside the expected range {min} - {max}.")]
    Range { min: u32, max: u32 },

    /// String outside of a closed enumeration.
    #[error("has an invalid enumeration value: {0}")]
    Enumeration(String),
}

/// A problem bound to the field path it was found at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub path: String,
    pub problem: Problem,
}

impl Diagnostic {
    pub fn new(path: impl Into<String>, problem: Problem) -> Self {
        Self {
            path: path.into(),
            problem,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field: {} {}", self.path, self.problem)
    }
}

/// Ordered, append-only list of diagnostics for one decode operation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, path: impl Into<String>, problem: Problem) {
        let diagnostic = Diagnostic::new(path, problem);
        trace!(%diagnostic, "field rejected");
        self.items.push(diagnostic);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }

    /// Human readable messages in the order they were recorded.
    pub fn messages(&self) -> Vec<String> {
        self.items.iter().map(ToString::to_string).collect()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

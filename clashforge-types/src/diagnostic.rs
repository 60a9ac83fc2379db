//! Validation diagnostics.
//!
//! Diagnostics are values, not errors: the validator always returns the
//! produced document alongside them, and the caller decides what to show.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How bad a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The document is unsafe to use as-is.
    Error,
    /// Worth showing, but the document may still work.
    Warning,
}

/// What a diagnostic is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "name")]
pub enum Subject {
    /// The node catalog as a whole.
    Catalog,
    /// A policy group, by name.
    Group(String),
    /// A single rule, by its text form.
    Rule(String),
    /// The merged rule sequence as a whole.
    Rules,
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Catalog => f.write_str("node catalog"),
            Self::Group(name) => write!(f, "group `{name}`"),
            Self::Rule(text) => write!(f, "rule `{text}`"),
            Self::Rules => f.write_str("rule sequence"),
        }
    }
}

/// One classified validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub subject: Subject,
}

impl Diagnostic {
    /// An error-severity finding.
    #[must_use]
    pub fn error(subject: Subject, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            subject,
        }
    }

    /// A warning-severity finding.
    #[must_use]
    pub fn warning(subject: Subject, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            subject,
        }
    }

    /// True for error severity.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{level}: {} ({})", self.message, self.subject)
    }
}

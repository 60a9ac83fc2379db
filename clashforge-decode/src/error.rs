//! Error types for the node decoders.

use thiserror::Error;

/// Result type for decode operations.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Errors from decoding one external node description.
///
/// Always local to a single input item; batch callers decide whether to
/// abort or skip-and-continue.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// A structured record lacks one of the required keys.
    #[error("node record {index} is missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    /// The protocol tag is not one the engine supports.
    #[error("unsupported protocol `{0}`")]
    UnsupportedProtocol(String),

    /// A share link failed a decode step.
    #[error("malformed {protocol} share link: {reason} (`{fragment}`)")]
    MalformedShareLink {
        protocol: &'static str,
        reason: String,
        fragment: String,
    },

    /// The structured input parsed, but not to a sequence of records.
    #[error("node record input is not a sequence")]
    NotASequence,

    /// One entry of the sequence is not a key/value mapping.
    #[error("node record {0} is not a mapping")]
    NotAMapping(usize),

    /// A port outside 1-65535.
    #[error("node record {index} (`{name}`) has port 0; ports run 1-65535")]
    InvalidPort { index: usize, name: String },

    /// The structured input is not parseable YAML, even after the
    /// indentation repair pass.
    #[error("YAML parse error: {0}")]
    Yaml(#[source] serde_yaml::Error),

    /// A record carried the required keys but its protocol-specific
    /// fields did not deserialize.
    #[error("node record {index} (`{name}`): {source}")]
    Record {
        index: usize,
        name: String,
        source: serde_yaml::Error,
    },
}

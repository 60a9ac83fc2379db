//! Profile synthesis for clashforge.
//!
//! A synthesis run is a short, pure, synchronous pipeline over value
//! inputs:
//! 1. [`NodeCatalog`] holds the decoded nodes in insertion order with
//!    duplicate detection.
//! 2. [`synthesize_groups`] derives the fixed policy-group topology from
//!    the catalog.
//! 3. [`merge_layers`] folds the precedence-ordered rule layers into one
//!    rule sequence ending in a single terminal `MATCH`.
//! 4. [`validate`] cross-checks rules and groups against the catalog and
//!    the reserved targets, classifying findings as errors or warnings.
//!
//! [`synthesize`] runs all four and returns the [`Profile`]; the engine
//! never withholds a produced document because of diagnostics: the
//! caller displays them and lets the user fix the input.
//!
//! There is no shared state between runs: every run takes its input
//! snapshot and returns a freshly built result, so concurrent runs never
//! interact.

mod baseline;
mod catalog;
mod groups;
mod merge;
mod profile;
mod validate;

pub use baseline::{default_layer, BASELINE_RULES};
pub use catalog::{CatalogError, CatalogResult, NodeCatalog};
pub use groups::{
    synthesize_groups, APP_CATEGORIES, LATENCY_GROUP, PROBE_INTERVAL_SECS, PROBE_TOLERANCE_MS,
    PROBE_URL, UMBRELLA_GROUP,
};
pub use merge::{merge_layers, provider_layers, MergeError, MergeResult};
pub use profile::{synthesize, GroupEntry, Profile, ProfileDocument};
pub use validate::validate;

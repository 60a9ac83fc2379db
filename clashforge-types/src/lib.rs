//! Core type definitions for the clashforge profile synthesis engine.
//!
//! This crate defines the canonical data model shared by the decoder and
//! the engine:
//! - Proxy nodes with a per-protocol, `type`-tagged option set
//! - Policy groups (latency-test, manual-select, category-select)
//! - Routing rules, rule layers and rule providers
//! - Validation diagnostics
//!
//! Everything here is a plain value type: the types carry no behavior
//! beyond construction, (de)serialization and the rule-line text format.
//! Decoding external notations lives in `clashforge-decode`; topology,
//! merging and validation live in `clashforge-engine`.

mod diagnostic;
mod group;
mod layer;
mod node;
mod rule;

pub use diagnostic::{Diagnostic, Severity, Subject};
pub use group::{is_reserved_target, GroupKind, PolicyGroup, DIRECT, REJECT, RESERVED_TARGETS};
pub use layer::{
    LayerOrigin, ProviderBehavior, ProviderFormat, ProviderOrder, ProviderSource, RuleLayer,
    RuleProvider,
};
pub use node::{
    AnytlsOpts, GrpcOpts, H2Opts, Hysteria2Opts, Node, ObfsOpts, PluginOpts, Protocol,
    ProtocolOptions, RealityOpts, ShadowsocksOpts, TrojanOpts, TuicOpts, VlessOpts, VmessOpts,
    WireguardOpts, WsOpts,
};
pub use rule::{Rule, RuleMatcher, RuleParseError};

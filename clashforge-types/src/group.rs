//! Policy groups: named routing policies over nodes, groups and reserved
//! targets.

use serde::{Deserialize, Serialize};

/// Built-in target: connect directly, bypassing every proxy.
pub const DIRECT: &str = "DIRECT";

/// Built-in target: refuse the connection.
pub const REJECT: &str = "REJECT";

/// Targets that are always valid without a node or group definition.
pub const RESERVED_TARGETS: [&str; 2] = [DIRECT, REJECT];

/// Returns true for the built-in targets that need no definition.
#[must_use]
pub fn is_reserved_target(target: &str) -> bool {
    RESERVED_TARGETS.contains(&target)
}

/// What a policy group does with its members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroupKind {
    /// Probes every member and picks the fastest (`url-test`).
    LatencyTest {
        probe_url: String,
        interval_secs: u32,
        tolerance_ms: u32,
    },
    /// User-driven selection over the whole node set (`select`).
    ManualSelect,
    /// Per-category selection with a fixed default ordering (`select`).
    CategorySelect,
}

impl GroupKind {
    /// The group type string in the consumer document.
    #[must_use]
    pub fn type_str(&self) -> &'static str {
        match self {
            Self::LatencyTest { .. } => "url-test",
            Self::ManualSelect | Self::CategorySelect => "select",
        }
    }
}

/// A named routing policy.
///
/// `members` is an ordered list of references: node names, other group
/// names, or reserved targets. It must never be empty and must not form
/// a reference cycle; the synthesizer guarantees both by construction and
/// the validator re-checks them on externally supplied topologies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyGroup {
    pub name: String,
    pub kind: GroupKind,
    pub members: Vec<String>,
    /// Suppress UDP relay through this group (consumer `disable-udp`).
    #[serde(default)]
    pub disable_udp: bool,
}

impl PolicyGroup {
    /// A latency-test group with the given probe parameters.
    #[must_use]
    pub fn latency_test(
        name: impl Into<String>,
        probe_url: impl Into<String>,
        interval_secs: u32,
        tolerance_ms: u32,
        members: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: GroupKind::LatencyTest {
                probe_url: probe_url.into(),
                interval_secs,
                tolerance_ms,
            },
            members,
            disable_udp: false,
        }
    }

    /// A manual-select group.
    #[must_use]
    pub fn manual_select(name: impl Into<String>, members: Vec<String>) -> Self {
        Self {
            name: name.into(),
            kind: GroupKind::ManualSelect,
            members,
            disable_udp: false,
        }
    }

    /// A category-select group.
    #[must_use]
    pub fn category_select(name: impl Into<String>, members: Vec<String>) -> Self {
        Self {
            name: name.into(),
            kind: GroupKind::CategorySelect,
            members,
            disable_udp: false,
        }
    }

    /// Sets the disable-UDP flag.
    #[must_use]
    pub fn with_disable_udp(mut self) -> Self {
        self.disable_udp = true;
        self
    }
}

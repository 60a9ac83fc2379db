//! Profile assembly: one synthesis run end to end, plus the
//! writer-facing document view.

use crate::catalog::NodeCatalog;
use crate::groups::synthesize_groups;
use crate::merge::{merge_layers, MergeResult};
use crate::validate::validate;
use clashforge_types::{Diagnostic, GroupKind, Node, PolicyGroup, Rule, RuleLayer};
use serde::{Deserialize, Serialize};

/// The output of one synthesis run.
///
/// Diagnostics ride alongside the produced parts; an error-severity
/// finding means the document is unsafe to use, but it is still returned
/// so the caller can display the problem and let the user fix it.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub nodes: Vec<Node>,
    pub groups: Vec<PolicyGroup>,
    pub rules: Vec<Rule>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Profile {
    /// True when any diagnostic is error severity.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// The serde view the external document writer consumes.
    ///
    /// Diagnostics are for display only and never serialize into the
    /// routing document.
    #[must_use]
    pub fn document(&self) -> ProfileDocument {
        ProfileDocument {
            proxies: self.nodes.clone(),
            proxy_groups: self.groups.iter().map(GroupEntry::from).collect(),
            rules: self.rules.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Runs the full pipeline: groups from the catalog, rules from the
/// layers, diagnostics over the result.
pub fn synthesize(catalog: &NodeCatalog, layers: &[RuleLayer]) -> MergeResult<Profile> {
    let groups = synthesize_groups(catalog);
    let rules = merge_layers(layers)?;
    let diagnostics = validate(catalog, &groups, &rules);
    Ok(Profile {
        nodes: catalog.iter().cloned().collect(),
        groups,
        rules,
        diagnostics,
    })
}

/// The document structure handed to the external writer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileDocument {
    pub proxies: Vec<Node>,
    #[serde(rename = "proxy-groups")]
    pub proxy_groups: Vec<GroupEntry>,
    /// Comma-joined rule lines, terminal `MATCH` last.
    pub rules: Vec<String>,
}

/// One flattened `proxy-groups` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub group_type: String,
    pub proxies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tolerance: Option<u32>,
    #[serde(rename = "disable-udp", default, skip_serializing_if = "Option::is_none")]
    pub disable_udp: Option<bool>,
}

impl From<&PolicyGroup> for GroupEntry {
    fn from(group: &PolicyGroup) -> Self {
        let (url, interval, tolerance) = match &group.kind {
            GroupKind::LatencyTest {
                probe_url,
                interval_secs,
                tolerance_ms,
            } => (
                Some(probe_url.clone()),
                Some(*interval_secs),
                Some(*tolerance_ms),
            ),
            GroupKind::ManualSelect | GroupKind::CategorySelect => (None, None, None),
        };
        Self {
            name: group.name.clone(),
            group_type: group.kind.type_str().to_string(),
            proxies: group.members.clone(),
            url,
            interval,
            tolerance,
            disable_udp: group.disable_udp.then_some(true),
        }
    }
}

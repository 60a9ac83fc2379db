//! Rule layers and rule providers.
//!
//! A [`RuleLayer`] is one independently sourced batch of rules carrying
//! its merge-precedence tag. A [`RuleProvider`] describes a remote or
//! local rule-set; its content is fetched by an external collaborator,
//! but the `RULE-SET` reference rule it contributes, and which side of
//! the baseline that rule lands on, are modeled here.

use crate::rule::{Rule, RuleMatcher, RuleParseError};
use serde::{Deserialize, Serialize};

/// Where a rule layer comes from, which decides its merge precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayerOrigin {
    /// Single rules added by hand; highest precedence.
    AdHoc,
    /// Provider rule-sets tagged to override the baseline.
    ProviderPrepend,
    /// The built-in preset rule-set.
    PresetBaseline,
    /// Provider rule-sets tagged to extend the baseline.
    ProviderAppend,
}

/// One independently sourced, ordered batch of rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleLayer {
    pub origin: LayerOrigin,
    pub entries: Vec<Rule>,
}

impl RuleLayer {
    #[must_use]
    pub fn new(origin: LayerOrigin, entries: Vec<Rule>) -> Self {
        Self { origin, entries }
    }

    #[must_use]
    pub fn ad_hoc(entries: Vec<Rule>) -> Self {
        Self::new(LayerOrigin::AdHoc, entries)
    }

    #[must_use]
    pub fn preset_baseline(entries: Vec<Rule>) -> Self {
        Self::new(LayerOrigin::PresetBaseline, entries)
    }

    /// Parses one rule per line, skipping blank lines and `#` comments.
    pub fn parse(origin: LayerOrigin, text: &str) -> Result<Self, RuleParseError> {
        let entries = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::parse)
            .collect::<Result<Vec<Rule>, _>>()?;
        Ok(Self::new(origin, entries))
    }
}

/// Where a provider's rule-set content lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProviderSource {
    Http { url: String },
    File { path: String },
}

/// Payload interpretation of a provider's rule-set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderBehavior {
    Domain,
    Ipcidr,
    Classical,
}

/// On-disk format of a provider's rule-set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderFormat {
    Yaml,
    Text,
}

/// Whether a provider's reference rule lands before or after the
/// baseline's non-terminal entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderOrder {
    Prepend,
    Append,
}

/// A named rule-set source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleProvider {
    pub name: String,
    pub source: ProviderSource,
    pub behavior: ProviderBehavior,
    pub format: ProviderFormat,
    /// Refresh interval for the external fetcher, in seconds.
    pub interval_secs: u32,
    /// The policy the provider's matches route to.
    pub target: String,
    pub order: ProviderOrder,
}

impl RuleProvider {
    /// The `RULE-SET,<name>,<target>` rule this provider contributes.
    #[must_use]
    pub fn rule(&self) -> Rule {
        Rule::new(RuleMatcher::RuleSet(self.name.clone()), self.target.clone())
    }
}

//! Routing rules and their comma-joined text form.
//!
//! The text form is the consumer's rule line: `TYPE,value,target` with an
//! optional trailing flag (`no-resolve`), and `MATCH,target` for the
//! terminal catch-all. [`Rule`] implements `FromStr` and `Display` as
//! exact inverses of each other.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from parsing a rule line.
#[derive(Debug, Error)]
pub enum RuleParseError {
    /// The line is empty or whitespace only.
    #[error("empty rule line")]
    Empty,

    /// The matcher type is not one the engine understands.
    #[error("unknown matcher type `{0}`")]
    UnknownMatcher(String),

    /// The line has too few comma-separated parts for its matcher type.
    #[error("rule `{0}` is missing a value or target")]
    MissingParts(String),
}

/// What a rule matches on.
///
/// Covers the matcher types the baseline and provider layers emit; every
/// variant except [`RuleMatcher::Match`] carries a value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleMatcher {
    Domain(String),
    DomainSuffix(String),
    DomainKeyword(String),
    IpCidr(String),
    GeoIp(String),
    GeoSite(String),
    ProcessName(String),
    RuleSet(String),
    SrcIpCidr(String),
    DstPort(String),
    /// The terminal catch-all; matches everything, carries no value.
    Match,
}

impl RuleMatcher {
    /// The matcher's wire tag (`DOMAIN-SUFFIX`, `MATCH`, ...).
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Domain(_) => "DOMAIN",
            Self::DomainSuffix(_) => "DOMAIN-SUFFIX",
            Self::DomainKeyword(_) => "DOMAIN-KEYWORD",
            Self::IpCidr(_) => "IP-CIDR",
            Self::GeoIp(_) => "GEOIP",
            Self::GeoSite(_) => "GEOSITE",
            Self::ProcessName(_) => "PROCESS-NAME",
            Self::RuleSet(_) => "RULE-SET",
            Self::SrcIpCidr(_) => "SRC-IP-CIDR",
            Self::DstPort(_) => "DST-PORT",
            Self::Match => "MATCH",
        }
    }

    /// The matcher value, absent only for `MATCH`.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Domain(v)
            | Self::DomainSuffix(v)
            | Self::DomainKeyword(v)
            | Self::IpCidr(v)
            | Self::GeoIp(v)
            | Self::GeoSite(v)
            | Self::ProcessName(v)
            | Self::RuleSet(v)
            | Self::SrcIpCidr(v)
            | Self::DstPort(v) => Some(v),
            Self::Match => None,
        }
    }

    fn from_parts(tag: &str, value: String) -> Result<Self, RuleParseError> {
        Ok(match tag {
            "DOMAIN" => Self::Domain(value),
            "DOMAIN-SUFFIX" => Self::DomainSuffix(value),
            "DOMAIN-KEYWORD" => Self::DomainKeyword(value),
            "IP-CIDR" => Self::IpCidr(value),
            "GEOIP" => Self::GeoIp(value),
            "GEOSITE" => Self::GeoSite(value),
            "PROCESS-NAME" => Self::ProcessName(value),
            "RULE-SET" => Self::RuleSet(value),
            "SRC-IP-CIDR" => Self::SrcIpCidr(value),
            "DST-PORT" => Self::DstPort(value),
            other => return Err(RuleParseError::UnknownMatcher(other.to_string())),
        })
    }
}

/// One routing rule: a matcher, a target reference, and optional flags.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rule {
    pub matcher: RuleMatcher,
    /// A node name, group name, or reserved target. Resolution is the
    /// validator's job, not the parser's.
    pub target: String,
    /// Trailing flags, e.g. `no-resolve`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl Rule {
    /// A rule with no options.
    #[must_use]
    pub fn new(matcher: RuleMatcher, target: impl Into<String>) -> Self {
        Self {
            matcher,
            target: target.into(),
            options: Vec::new(),
        }
    }

    /// Appends a trailing flag.
    #[must_use]
    pub fn with_option(mut self, option: impl Into<String>) -> Self {
        self.options.push(option.into());
        self
    }

    /// True for the terminal catch-all.
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self.matcher, RuleMatcher::Match)
    }

    /// True when the `no-resolve` flag is present.
    #[must_use]
    pub fn no_resolve(&self) -> bool {
        self.options.iter().any(|o| o == "no-resolve")
    }
}

impl FromStr for Rule {
    type Err = RuleParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.is_empty() {
            return Err(RuleParseError::Empty);
        }

        let mut parts = line.split(',').map(str::trim);
        let tag = parts.next().ok_or(RuleParseError::Empty)?;

        if tag == "MATCH" {
            let target = parts
                .next()
                .filter(|t| !t.is_empty())
                .ok_or_else(|| RuleParseError::MissingParts(line.to_string()))?;
            return Ok(Self::new(RuleMatcher::Match, target));
        }

        let value = parts
            .next()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| RuleParseError::MissingParts(line.to_string()))?;
        let target = parts
            .next()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| RuleParseError::MissingParts(line.to_string()))?;

        let matcher = RuleMatcher::from_parts(tag, value.to_string())?;
        let mut rule = Self::new(matcher, target);
        for option in parts.filter(|o| !o.is_empty()) {
            rule.options.push(option.to_string());
        }
        Ok(rule)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.matcher.tag())?;
        if let Some(value) = self.matcher.value() {
            write!(f, ",{value}")?;
        }
        write!(f, ",{}", self.target)?;
        for option in &self.options {
            write!(f, ",{option}")?;
        }
        Ok(())
    }
}

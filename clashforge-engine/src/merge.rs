//! The rule layer merger: folds independently sourced rule layers into
//! one ordered sequence ending in a single terminal `MATCH`.
//!
//! Merge order: ad hoc entries, provider-prepend entries, the baseline's
//! non-terminal entries, provider-append entries, then the terminal
//! `MATCH` (the baseline's if it had one, a synthesized one targeting
//! the umbrella group otherwise). A `MATCH` wherever it sits preempts
//! everything after it, so provider-append entries must land before the
//! terminal to have any effect.
//!
//! A `MATCH` rule found in a NON-baseline layer keeps its position; the
//! validator flags it as redundant. The documented behavior is the
//! downgrade, not rejection.

use crate::groups::UMBRELLA_GROUP;
use clashforge_types::{
    LayerOrigin, ProviderOrder, Rule, RuleLayer, RuleMatcher, RuleProvider,
};
use thiserror::Error;
use tracing::{debug, warn};

/// Result type for merge operations.
pub type MergeResult<T> = Result<T, MergeError>;

/// Errors from merging rule layers.
#[derive(Debug, Error)]
pub enum MergeError {
    /// The preset baseline supplied more than one terminal `MATCH`,
    /// a contract violation by whoever assembled the layers.
    #[error("preset baseline supplies {0} terminal MATCH rules; expected at most one")]
    DuplicateTerminalMatch(usize),
}

/// Merges the rule layers into one ordered sequence.
///
/// The output contains exactly one `MATCH` rule from the baseline (or a
/// synthesized fallback), positioned last. `MATCH` rules from other
/// layers are passed through in place.
pub fn merge_layers(layers: &[RuleLayer]) -> MergeResult<Vec<Rule>> {
    let mut ad_hoc = Vec::new();
    let mut prepend = Vec::new();
    let mut baseline = Vec::new();
    let mut append = Vec::new();
    let mut terminals = Vec::new();

    for layer in layers {
        match layer.origin {
            LayerOrigin::AdHoc => ad_hoc.extend(layer.entries.iter().cloned()),
            LayerOrigin::ProviderPrepend => prepend.extend(layer.entries.iter().cloned()),
            LayerOrigin::ProviderAppend => append.extend(layer.entries.iter().cloned()),
            LayerOrigin::PresetBaseline => {
                for rule in &layer.entries {
                    if rule.is_match() {
                        terminals.push(rule.clone());
                    } else {
                        baseline.push(rule.clone());
                    }
                }
            }
        }
    }

    if terminals.len() > 1 {
        return Err(MergeError::DuplicateTerminalMatch(terminals.len()));
    }
    let terminal = terminals
        .pop()
        .unwrap_or_else(|| Rule::new(RuleMatcher::Match, UMBRELLA_GROUP));

    for rule in ad_hoc.iter().chain(&prepend).chain(&append) {
        if rule.is_match() {
            warn!(rule = %rule, "MATCH rule outside the baseline kept in place; it shadows later rules");
        }
    }

    let mut merged = ad_hoc;
    merged.append(&mut prepend);
    merged.append(&mut baseline);
    merged.append(&mut append);
    merged.push(terminal);

    debug!(rules = merged.len(), layers = layers.len(), "merged rule layers");
    Ok(merged)
}

/// Splits provider records into their prepend and append layers, keeping
/// addition order within each.
#[must_use]
pub fn provider_layers(providers: &[RuleProvider]) -> (RuleLayer, RuleLayer) {
    let mut prepend = Vec::new();
    let mut append = Vec::new();
    for provider in providers {
        match provider.order {
            ProviderOrder::Prepend => prepend.push(provider.rule()),
            ProviderOrder::Append => append.push(provider.rule()),
        }
    }
    (
        RuleLayer::new(LayerOrigin::ProviderPrepend, prepend),
        RuleLayer::new(LayerOrigin::ProviderAppend, append),
    )
}

//! Property-based tests for the merge ordering law and synthesis
//! determinism.
//!
//! The ordering law: ad hoc entries come strictly before provider-prepend
//! entries, which come strictly before non-match baseline entries, which
//! come strictly before provider-append entries, which come strictly
//! before the single terminal MATCH.

mod common;

use clashforge_engine::{merge_layers, synthesize_groups};
use clashforge_types::{LayerOrigin, Rule, RuleLayer, RuleMatcher};
use common::catalog_of;
use proptest::prelude::*;

fn tagged_rules(prefix: &str, count: usize) -> Vec<Rule> {
    (0..count)
        .map(|i| {
            Rule::new(
                RuleMatcher::DomainSuffix(format!("{prefix}{i}.example.com")),
                format!("{prefix}-target"),
            )
        })
        .collect()
}

fn origin_of(rule: &Rule) -> Option<&'static str> {
    match &rule.matcher {
        RuleMatcher::DomainSuffix(v) if v.starts_with("adhoc") => Some("adhoc"),
        RuleMatcher::DomainSuffix(v) if v.starts_with("pre") => Some("pre"),
        RuleMatcher::DomainSuffix(v) if v.starts_with("base") => Some("base"),
        RuleMatcher::DomainSuffix(v) if v.starts_with("app") => Some("app"),
        _ => None,
    }
}

proptest! {
    /// Every origin class lands in its lawful position band, and the
    /// sequence ends with exactly one MATCH.
    #[test]
    fn merge_ordering_law(
        n_adhoc in 0usize..5,
        n_pre in 0usize..5,
        n_base in 0usize..5,
        n_app in 0usize..5,
        baseline_has_match in any::<bool>(),
    ) {
        let mut baseline = tagged_rules("base", n_base);
        if baseline_has_match {
            baseline.push(Rule::new(RuleMatcher::Match, "Fallback"));
        }
        let layers = [
            RuleLayer::new(LayerOrigin::AdHoc, tagged_rules("adhoc", n_adhoc)),
            RuleLayer::new(LayerOrigin::ProviderPrepend, tagged_rules("pre", n_pre)),
            RuleLayer::new(LayerOrigin::PresetBaseline, baseline),
            RuleLayer::new(LayerOrigin::ProviderAppend, tagged_rules("app", n_app)),
        ];
        let merged = merge_layers(&layers).unwrap();

        // Exactly one MATCH, in final position.
        prop_assert_eq!(merged.iter().filter(|r| r.is_match()).count(), 1);
        prop_assert!(merged.last().unwrap().is_match());
        let expected_target = if baseline_has_match { "Fallback" } else { "Proxy" };
        prop_assert_eq!(merged.last().unwrap().target.as_str(), expected_target);

        // Strict band ordering of the origin classes.
        let rank = |origin: &str| match origin {
            "adhoc" => 0,
            "pre" => 1,
            "base" => 2,
            "app" => 3,
            _ => unreachable!(),
        };
        let ranks: Vec<usize> = merged
            .iter()
            .filter_map(origin_of)
            .map(rank)
            .collect();
        prop_assert!(ranks.windows(2).all(|w| w[0] <= w[1]), "ranks: {:?}", ranks);
        prop_assert_eq!(ranks.len(), n_adhoc + n_pre + n_base + n_app);
    }

    /// Entry order within one origin class is preserved verbatim.
    #[test]
    fn merge_preserves_intra_class_order(n in 1usize..6) {
        let layers = [RuleLayer::new(LayerOrigin::AdHoc, tagged_rules("adhoc", n))];
        let merged = merge_layers(&layers).unwrap();
        let values: Vec<&str> = merged
            .iter()
            .filter_map(|r| r.matcher.value())
            .collect();
        let expected: Vec<String> = (0..n).map(|i| format!("adhoc{i}.example.com")).collect();
        prop_assert_eq!(values, expected.iter().map(String::as_str).collect::<Vec<_>>());
    }

    /// Group synthesis is a pure function of the catalog.
    #[test]
    fn group_synthesis_deterministic(count in 0usize..8) {
        let names: Vec<String> = (0..count).map(|i| format!("node-{i}")).collect();
        let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let catalog = catalog_of(&name_refs);
        let first = synthesize_groups(&catalog);
        let second = synthesize_groups(&catalog);
        prop_assert_eq!(first, second);
    }
}

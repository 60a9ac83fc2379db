//! The referential validator: cross-checks the merged rule sequence and
//! group topology against the node catalog and the reserved targets.
//!
//! Never fails, never mutates. Unknown references are warnings, never
//! errors; pattern-based external filtering can legitimately reference
//! names the engine cannot see. Structural defects (empty catalog, empty
//! member lists, reference cycles, a missing terminal `MATCH`) are
//! errors. The returned list holds all errors first, then all warnings,
//! each in detection order.

use crate::catalog::NodeCatalog;
use clashforge_types::{is_reserved_target, Diagnostic, PolicyGroup, Rule, Subject};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Validates the synthesized document parts, returning classified
/// findings.
#[must_use]
pub fn validate(
    catalog: &NodeCatalog,
    groups: &[PolicyGroup],
    rules: &[Rule],
) -> Vec<Diagnostic> {
    let targets: HashSet<&str> = catalog
        .names()
        .chain(groups.iter().map(|g| g.name.as_str()))
        .collect();
    let known = |name: &str| is_reserved_target(name) || targets.contains(name);

    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if catalog.is_empty() {
        errors.push(Diagnostic::error(
            Subject::Catalog,
            "node catalog is empty; the document cannot route anything",
        ));
    }

    for group in groups {
        if group.members.is_empty() {
            errors.push(Diagnostic::error(
                Subject::Group(group.name.clone()),
                "group has no members",
            ));
        }
    }

    for cycle in find_cycles(groups) {
        errors.push(Diagnostic::error(
            Subject::Group(cycle[0].clone()),
            format!("group reference cycle: {}", cycle.join(" -> ")),
        ));
    }

    if !rules.iter().any(Rule::is_match) {
        errors.push(Diagnostic::error(
            Subject::Rules,
            "rule sequence has no terminal MATCH rule",
        ));
    }

    for group in groups {
        for member in &group.members {
            if !known(member) {
                warnings.push(Diagnostic::warning(
                    Subject::Group(group.name.clone()),
                    format!("references unknown node or group `{member}`"),
                ));
            }
        }
    }

    for rule in rules {
        if !known(&rule.target) {
            warnings.push(Diagnostic::warning(
                Subject::Rule(rule.to_string()),
                format!("targets unknown node or group `{}`", rule.target),
            ));
        }
    }

    // A MATCH anywhere but last shadows every rule after it.
    if let Some((_, body)) = rules.split_last() {
        for rule in body {
            if rule.is_match() {
                warnings.push(Diagnostic::warning(
                    Subject::Rule(rule.to_string()),
                    "redundant MATCH rule before the end of the sequence",
                ));
            }
        }
    }

    for name in catalog.duplicate_names() {
        warnings.push(Diagnostic::warning(
            Subject::Catalog,
            format!("multiple nodes share the name `{name}`"),
        ));
    }

    debug!(
        errors = errors.len(),
        warnings = warnings.len(),
        "validation complete"
    );
    errors.extend(warnings);
    errors
}

/// Finds reference cycles among groups. Each cycle is reported once, as
/// the path from its first-visited group back to itself.
fn find_cycles(groups: &[PolicyGroup]) -> Vec<Vec<String>> {
    let by_name: HashMap<&str, &PolicyGroup> =
        groups.iter().map(|g| (g.name.as_str(), g)).collect();

    let mut done: HashSet<&str> = HashSet::new();
    let mut cycles = Vec::new();

    for group in groups {
        let mut stack: Vec<&str> = Vec::new();
        visit(group.name.as_str(), &by_name, &mut stack, &mut done, &mut cycles);
    }
    cycles
}

fn visit<'a>(
    name: &'a str,
    by_name: &HashMap<&'a str, &'a PolicyGroup>,
    stack: &mut Vec<&'a str>,
    done: &mut HashSet<&'a str>,
    cycles: &mut Vec<Vec<String>>,
) {
    if done.contains(name) {
        return;
    }
    if let Some(start) = stack.iter().position(|&n| n == name) {
        let mut cycle: Vec<String> = stack[start..].iter().map(|s| (*s).to_string()).collect();
        cycle.push(name.to_string());
        cycles.push(cycle);
        return;
    }
    let Some(group) = by_name.get(name) else {
        // Node names and reserved targets cannot continue a cycle.
        return;
    };

    stack.push(name);
    for member in &group.members {
        visit(member.as_str(), by_name, stack, done, cycles);
    }
    stack.pop();
    done.insert(name);
}

//! Best-effort indentation repair for pasted node lists.
//!
//! Browsers and chat clients routinely re-indent YAML on copy, leaving
//! every child field of a list item deeper than its `- ` marker implies.
//! This pass measures the excess of the first child line after each
//! marker and strips that shift from the following lines until the next
//! marker. One bounded pass over the text; on anything it does not
//! recognize it leaves the line alone, and the caller falls back to the
//! original parse error.

use tracing::debug;

/// Attempts the indentation repair.
///
/// Returns `Some(repaired)` when at least one line was shifted, `None`
/// when there was nothing to repair (so the caller can surface its
/// original error instead of reparsing identical text).
#[must_use]
pub fn repair_indentation(input: &str) -> Option<String> {
    let mut out: Vec<String> = Vec::new();
    let mut expected_child = 0usize;
    let mut shift = 0usize;
    let mut changed = false;

    for line in input.lines() {
        let trimmed = line.trim_start_matches(' ');
        if trimmed.trim().is_empty() || trimmed.starts_with('#') {
            out.push(line.to_string());
            continue;
        }

        let indent = line.len() - trimmed.len();

        // A list-item marker resets the measurement: its children are
        // expected two columns deeper.
        if trimmed.starts_with("- ") || trimmed == "-" {
            expected_child = indent + 2;
            shift = 0;
            out.push(line.to_string());
            continue;
        }

        if shift == 0 && expected_child > 0 && indent > expected_child {
            shift = indent - expected_child;
            debug!(shift, expected_child, "indentation repair: excess child indent");
        }

        if shift > 0 && indent >= shift {
            out.push(line[shift..].to_string());
            changed = true;
        } else {
            out.push(line.to_string());
        }
    }

    changed.then(|| out.join("\n"))
}

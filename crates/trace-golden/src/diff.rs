// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Exact line comparison of golden and actual output.
//!
//! Nothing is normalized: trailing whitespace, a missing final newline, or a
//! timestamp that changed between runs all count as differences.

use similar::{DiffTag, TextDiff};

/// Lines of unchanged context around each hunk.
const CONTEXT_RADIUS: usize = 3;

/// Unified diff from `expected` to `actual`, or `None` when they are
/// byte-identical.
///
/// `labels` become the `---`/`+++` header names.
pub fn golden_diff(expected: &[u8], actual: &[u8], labels: (&str, &str)) -> Option<String> {
    if expected == actual {
        return None;
    }

    let expected = String::from_utf8_lossy(expected);
    let actual = String::from_utf8_lossy(actual);
    let diff = TextDiff::from_lines(expected.as_ref(), actual.as_ref());

    if diff.ops().iter().all(|op| op.tag() == DiffTag::Equal) {
        // Distinct invalid UTF-8 sequences decode to the same replacement text.
        return Some(format!(
            "Binary content differs: {} and {}\n",
            labels.0, labels.1
        ));
    }

    let rendered = diff
        .unified_diff()
        .context_radius(CONTEXT_RADIUS)
        .missing_newline_hint(true)
        .header(labels.0, labels.1)
        .to_string();
    Some(rendered)
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;

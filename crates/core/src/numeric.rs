// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use regex::Regex;
use sbc_solve_domain::ConstraintRelation;
use std::sync::LazyLock;

/// Compiles a known-good pattern literal.
#[allow(clippy::expect_used)]
pub(crate) fn pattern(re: &str) -> Regex {
    Regex::new(re).expect("pattern literal must compile")
}

static MIN_RE: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?:min|minimum)[\s.:]*(\d+)"));
static MAX_RE: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?:max|maximum)[\s.:]*(\d+)"));
static EXACT_RE: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?:exact(?:ly)?|precisely)[\s.:]*(\d+)"));
static BARE_RE: LazyLock<Regex> = LazyLock::new(|| pattern(r"(\d+)"));

/// Extracts the first relational qualifier and count from a lowercased
/// text fragment.
///
/// Matching order: `min`/`minimum`, then `max`/`maximum`, then
/// `exact`/`exactly`/`precisely`, then a bare integer. A bare integer with
/// no qualifier is treated as a lower bound (`Min`): an ungoverned count in
/// challenge text is a floor, not an exact target. Returns `None`
/// when no integer is present at all; the caller must then treat the line
/// as unparsed for its category.
#[must_use]
pub fn extract_relation_count(text: &str) -> Option<(ConstraintRelation, u32)> {
    for (re, relation) in [
        (&MIN_RE, ConstraintRelation::Min),
        (&MAX_RE, ConstraintRelation::Max),
        (&EXACT_RE, ConstraintRelation::Exact),
        (&BARE_RE, ConstraintRelation::Min),
    ] {
        if let Some(caps) = re.captures(text)
            && let Some(count) = caps.get(1).and_then(|m| m.as_str().parse::<u32>().ok())
        {
            return Some((relation, count));
        }
    }
    None
}

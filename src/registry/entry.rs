//! Shared record plumbing for catalog entries.
//!
//! Every catalog entry is addressable by a canonical slug plus zero or more
//! aliases. Resolution logic only sees this surface; display fields are
//! opaque to it.

use serde::Serialize;

/// An entry that can be looked up by slug or alias.
///
/// The slug is the single canonical identifier and is unique within its
/// catalog. Aliases are alternate identifiers; the data does not guarantee
/// they are unique across sibling entries (see `resolve_in`).
pub trait Addressable {
    /// Canonical identifier, used in the entry's display path.
    fn slug(&self) -> &str;

    /// Alternate identifiers that resolve to the same entry.
    fn aliases(&self) -> &[&str];

    /// Check whether an identifier names this entry.
    fn matches(&self, input: &str) -> bool {
        self.slug() == input || self.aliases().contains(&input)
    }
}

/// Named external links attached to an entry. All fields optional; entries
/// carry only the links that apply to them.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Links {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<&'static str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<&'static str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub live: Option<&'static str>,
}

/// Resolve an identifier against a fixed table of entries.
///
/// Returns the first entry in declaration order whose slug or alias set
/// contains the input. Declaration order is the tie-break: when two entries
/// claim the same alias, the earlier one wins, always. Later claimants are
/// shadowed (a known data-quality issue in the authored aliases, kept as-is
/// rather than silently rewritten).
pub fn resolve_in<'a, T: Addressable>(entries: &'a [T], input: &str) -> Option<&'a T> {
    entries.iter().find(|e| e.matches(input))
}

/// Canonicalize an identifier: the matching entry's slug, or the input
/// unchanged when nothing matches (identity fallback — the caller decides
/// what "unresolved" means).
pub fn canonicalize_in<'a, T: Addressable>(entries: &'a [T], input: &'a str) -> &'a str {
    resolve_in(entries, input).map(|e| e.slug()).unwrap_or(input)
}

/// Exact-match lookup by canonical slug, after canonicalization.
///
/// `None` is the expected NotFound outcome for any identifier that does not
/// resolve; it is never a partial or fuzzy match.
pub fn get_in<'a, T: Addressable>(entries: &'a [T], input: &str) -> Option<&'a T> {
    let canonical = canonicalize_in(entries, input);
    entries.iter().find(|e| e.slug() == canonical)
}

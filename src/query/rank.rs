use std::cmp::Reverse;

/// Composite sort key for ranked listings.
///
/// Field order drives the derived `Ord`: more matching recipes sorts first
/// (`Reverse` on the count), ties break on ascending name with plain
/// case-sensitive `str` ordering. One stable sort on this key yields both
/// orderings at once; two passes or padded string keys would not.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct RankKey {
    matches: Reverse<usize>,
    name: String,
}

impl RankKey {
    /// Key for filtered listings: descending match count, then name.
    pub fn by_matches(count: usize, name: &str) -> Self {
        RankKey {
            matches: Reverse(count),
            name: name.to_string(),
        }
    }

    /// Key for the unfiltered restaurant listing: name alone. Every key
    /// carries the same count so only the name compares; equal names keep
    /// the candidates' input order under a stable sort.
    pub fn by_name(name: &str) -> Self {
        RankKey {
            matches: Reverse(0),
            name: name.to_string(),
        }
    }
}

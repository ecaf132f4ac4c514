//! Lexical overlap scoring.

use crate::token_set::TokenSet;

/// Jaccard index `|a ∩ b| / |a ∪ b|` of two token sets.
///
/// Returns exactly `0.0` when either set is empty, including when both are:
/// two empty sets share no information.
pub fn jaccard(a: &TokenSet, b: &TokenSet) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    a.intersection_len(b) as f64 / a.union_len(b) as f64
}

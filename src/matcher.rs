//! Approximate name matching for user-typed project and task names.

use regex::Regex;
use std::collections::HashSet;

/// Decide whether a user-typed name refers to a candidate entity's name.
///
/// Three checks, short-circuiting on the first hit:
/// 1. trimmed, lowercased equality;
/// 2. the two names share at least one word;
/// 3. the query, taken as a prefix-anchored pattern, matches the candidate.
///
/// This is deliberately loose. Users rarely type full exact names, and shared
/// words plus prefix matching approximate "close enough" without a real fuzzy
/// distance metric. False positives on common words are an accepted trade-off;
/// the candidate selector disambiguates interactively when several hit.
pub fn names_match(query: &str, candidate: &str) -> bool {
    let query = query.trim().to_lowercase();
    let candidate = candidate.trim().to_lowercase();

    if query == candidate {
        return true;
    }

    let query_words: HashSet<&str> = query.split(' ').collect();
    let candidate_words: HashSet<&str> = candidate.split(' ').collect();
    if query_words.intersection(&candidate_words).next().is_some() {
        return true;
    }

    // The query doubles as a regex here, so metacharacters keep their pattern
    // meaning. A query that does not compile counts as no match.
    match Regex::new(&format!("^(?:{})", query)) {
        Ok(pattern) => pattern.is_match(&candidate),
        Err(_) => false,
    }
}

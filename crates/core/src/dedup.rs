//! Candidate deduplication.

use api_shared::Address;
use std::collections::HashSet;

/// Removes every candidate whose (city, street) pair already appeared earlier in the
/// sequence, keeping first-seen order. Ids are ignored.
pub fn dedup_candidates(mut candidates: Vec<Address>) -> Vec<Address> {
    let mut seen = HashSet::with_capacity(candidates.len());
    candidates.retain(|address| {
        let (city, street) = address.dedup_key();
        seen.insert((city.to_owned(), street.to_owned()))
    });
    candidates
}

//! Deterministic mock address data.
//!
//! Stands in for a real address provider. The same (postcode, street number) always
//! produces the same candidates, and the pools are small enough that a single lookup
//! regularly contains several candidates sharing a (city, street) pair.

use api_shared::Address;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

const CITIES: &[&str] = &[
    "Amsterdam",
    "Rotterdam",
    "Utrecht",
    "Eindhoven",
    "Groningen",
    "Leiden",
];

const STREETS: &[&str] = &[
    "Main Street",
    "Station Road",
    "Church Lane",
    "Mill Road",
    "Park Avenue",
    "High Street",
    "Canal Side",
];

const MIN_CANDIDATES: usize = 3;
const MAX_CANDIDATES: usize = 6;

fn is_all_zeros(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b == b'0')
}

// FNV-1a, stable across platforms and toolchains.
fn seed_for(postcode: &str, street_number: &str) -> u64 {
    postcode
        .bytes()
        .chain(std::iter::once(0xff))
        .chain(street_number.bytes())
        .fold(0xcbf2_9ce4_8422_2325, |hash, byte| {
            (hash ^ u64::from(byte)).wrapping_mul(0x0000_0100_0000_01b3)
        })
}

/// Generates lookup candidates for an already validated postcode and street number.
///
/// Returns `None` when nothing matches, which is the case for an all-zero postcode or
/// street number.
pub fn generate_addresses(postcode: &str, street_number: &str) -> Option<Vec<Address>> {
    if is_all_zeros(postcode) || is_all_zeros(street_number) {
        return None;
    }

    let mut rng = StdRng::seed_from_u64(seed_for(postcode, street_number));
    let count = rng.gen_range(MIN_CANDIDATES..=MAX_CANDIDATES);
    let cities: Vec<&str> = CITIES.choose_multiple(&mut rng, 2).copied().collect();
    let streets: Vec<&str> = STREETS.choose_multiple(&mut rng, 3).copied().collect();

    let addresses = (0..count)
        .map(|index| {
            let city = cities[rng.gen_range(0..cities.len())];
            let street = streets[rng.gen_range(0..streets.len())];
            let name = format!("{postcode}|{street_number}|{index}|{city}|{street}");
            Address {
                id: Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes())
                    .simple()
                    .to_string(),
                street: street.to_owned(),
                city: city.to_owned(),
                postcode: postcode.to_owned(),
                house_number: String::new(),
                first_name: None,
                last_name: None,
            }
        })
        .collect();

    Some(addresses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn same_input_yields_same_candidates() {
        let first = generate_addresses("1234", "1").expect("match");
        let second = generate_addresses("1234", "1").expect("match");
        assert_eq!(first, second);
    }

    #[test]
    fn candidate_count_and_fields_are_within_bounds() {
        for (postcode, number) in [("1234", "1"), ("5678", "42"), ("99999", "7")] {
            let list = generate_addresses(postcode, number).expect("match");
            assert!((MIN_CANDIDATES..=MAX_CANDIDATES).contains(&list.len()));
            for address in &list {
                assert_eq!(address.postcode, postcode);
                assert!(CITIES.contains(&address.city.as_str()));
                assert!(STREETS.contains(&address.street.as_str()));
                assert_eq!(address.id.len(), 32);
                assert!(address.first_name.is_none());
            }
        }
    }

    #[test]
    fn ids_are_unique_within_a_lookup() {
        let list = generate_addresses("4321", "12").expect("match");
        let ids: HashSet<_> = list.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids.len(), list.len());
    }

    #[test]
    fn all_zero_inputs_have_no_match() {
        assert!(generate_addresses("0000", "1").is_none());
        assert!(generate_addresses("1234", "0").is_none());
        assert!(generate_addresses("1234", "000").is_none());
        assert!(generate_addresses("1000", "10").is_some());
    }
}

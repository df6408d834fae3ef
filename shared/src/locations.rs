//! Static state → city reference table used by the state/city dropdowns.
//!
//! The table is closed: it is neither fetched nor persisted, and every form
//! that offers a location reads it from here.

use lazy_static::lazy_static;
use std::collections::BTreeMap;

const STATE_CITIES: &[(&str, &[&str])] = &[
    ("Abuja FCT", &["Abuja", "Gwagwalada", "Kuje", "Bwari"]),
    ("Delta", &["Asaba", "Warri", "Sapele", "Ughelli"]),
    ("Edo", &["Benin City", "Auchi", "Ekpoma", "Uromi"]),
    ("Enugu", &["Enugu", "Nsukka", "Agbani", "Oji River"]),
    ("Kaduna", &["Kaduna", "Zaria", "Kafanchan", "Saminaka"]),
    ("Kano", &["Kano", "Wudil", "Gaya", "Rano"]),
    ("Lagos", &["Ikeja", "Lekki", "Victoria Island", "Surulere", "Yaba", "Ikorodu", "Epe"]),
    ("Ogun", &["Abeokuta", "Ijebu-Ode", "Sagamu", "Ota"]),
    ("Oyo", &["Ibadan", "Ogbomosho", "Oyo", "Iseyin"]),
    ("Rivers", &["Port Harcourt", "Obio-Akpor", "Bonny", "Eleme"]),
];

lazy_static! {
    static ref LOOKUP: BTreeMap<&'static str, &'static [&'static str]> =
        STATE_CITIES.iter().copied().collect();
}

/// All known states, alphabetically.
pub fn states() -> Vec<&'static str> {
    LOOKUP.keys().copied().collect()
}

/// Cities of `state`; empty for a blank or unknown state.
pub fn cities_for(state: &str) -> &'static [&'static str] {
    if state.is_empty() {
        return &[];
    }
    LOOKUP.get(state).copied().unwrap_or(&[])
}

pub fn is_known_state(state: &str) -> bool {
    LOOKUP.contains_key(state)
}

/// Whether `city` is a valid choice for `state`.
pub fn is_city_of(state: &str, city: &str) -> bool {
    cities_for(state).contains(&city)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn states_are_sorted_and_complete() {
        let list = states();
        assert_eq!(list.len(), STATE_CITIES.len());
        let mut sorted = list.clone();
        sorted.sort();
        assert_eq!(list, sorted);
    }

    #[test]
    fn every_state_maps_to_its_own_cities() {
        for (state, cities) in STATE_CITIES {
            assert_eq!(cities_for(state), *cities);
            assert!(!cities.is_empty(), "{} has no cities", state);
        }
    }

    #[test]
    fn blank_or_unknown_state_has_no_cities() {
        assert!(cities_for("").is_empty());
        assert!(cities_for("Atlantis").is_empty());
        assert!(!is_known_state("Atlantis"));
    }

    #[test]
    fn city_membership_is_per_state() {
        assert!(is_city_of("Lagos", "Ikeja"));
        assert!(!is_city_of("Kano", "Ikeja"));
    }
}

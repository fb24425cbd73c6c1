//! Splitting free-form addresses into postal components.

use lazy_static::lazy_static;
use regex::Regex;

use crate::contact::rules::lexicon::AU_STATES;
use crate::contact::rules::patterns::{AU_POSTCODE, AU_STATE_CASED, STREET_KEYWORD};
use crate::models::contact::SplitAddress;

const DEFAULT_COUNTRY: &str = "Australia";

lazy_static! {
    // "<head> <STATE> <postcode>[,] [country]"
    static ref AU_LOCALITY: Regex = Regex::new(&format!(
        r"(?i)^(?P<head>.+)\s+(?P<state>{})\s+(?P<postcode>\d{{4}})(?:,?\s*(?P<country>[a-z][a-z .]*))?$",
        AU_STATES.join("|")
    ))
    .unwrap();
}

/// Split an address into street, city, state, postcode and country.
///
/// Tries `"<street>, <city> <STATE> <postcode>[ <country>]"` first, then the
/// same layout without the comma. Anything else ends up whole in `street`.
pub fn split_address(address: &str) -> SplitAddress {
    let address = address.trim();

    if let Some(caps) = AU_LOCALITY.captures(address) {
        let head = caps["head"].trim().trim_end_matches(',');
        let (street, city) = match head.rsplit_once(',') {
            Some((street, city)) => (street.trim(), city.trim()),
            None => split_street_city(head),
        };

        if !city.is_empty() {
            let country = caps
                .name("country")
                .map(|c| c.as_str().trim().trim_end_matches('.').trim())
                .filter(|c| !c.is_empty())
                .unwrap_or(DEFAULT_COUNTRY);

            return SplitAddress {
                street: street.to_string(),
                city: city.to_string(),
                state: caps["state"].to_uppercase(),
                postcode: caps["postcode"].to_string(),
                country: country.to_string(),
            };
        }
    }

    let looks_australian = AU_STATE_CASED.is_match(address) || AU_POSTCODE.is_match(address);
    SplitAddress {
        street: address.to_string(),
        country: if looks_australian {
            DEFAULT_COUNTRY.to_string()
        } else {
            String::new()
        },
        ..Default::default()
    }
}

/// Split a comma-less `"<street> <city>"` head.
///
/// The street ends at the first street-type word that follows a plain word
/// ("10 Acland St St Kilda" -> "10 Acland St" / "St Kilda"). Without one, the
/// last word is the city.
fn split_street_city(head: &str) -> (&str, &str) {
    for m in STREET_KEYWORD.find_iter(head) {
        let before = &head[..m.start()];
        let follows_word = before
            .split_whitespace()
            .last()
            .is_some_and(|w| w.chars().any(char::is_alphabetic) && !STREET_KEYWORD.is_match(w));

        let mut end = m.end();
        if head[end..].starts_with('.') {
            end += 1;
        }
        let city = head[end..].trim();
        if follows_word && !city.is_empty() {
            return (head[..end].trim(), city);
        }
    }

    match head.rsplit_once(char::is_whitespace) {
        Some((street, city)) => (street.trim(), city.trim()),
        None => ("", head),
    }
}

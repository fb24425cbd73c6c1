//! Postal address resolution.
//!
//! Australian layouts are tried first: a "place line" (`Sydney NSW 2000`)
//! plus the street line above it. Cards often list a registered and an
//! office address, so candidates are scored by the heading above them.
//! Only when no place line exists does the generic street-keyword scan run.

use tracing::debug;

use super::{is_contact_line, is_job_title};
use crate::contact::preprocess::Line;
use crate::contact::rules::patterns::{
    has_company_suffix, ADDRESS_HEADING, ADDRESS_LABEL, AU_POSTCODE, AU_STATE_CASED, PO_BOX,
    POSTAL_CONTINUATION, STREET_KEYWORD,
};

const OFFICE_SCORE: u32 = 100;
const UNLABELLED_SCORE: u32 = 50;
const REGISTERED_SCORE: u32 = 10;

/// An address assembled around one place line.
#[derive(Debug, Clone, PartialEq, Eq)]
struct AddressCandidate {
    text: String,
    score: u32,
}

/// Find the postal address, or `None` when the lines hold none.
///
/// `default_country` is appended to Australian addresses that do not name
/// a country.
pub fn resolve_address(lines: &[Line], default_country: &str) -> Option<String> {
    let texts: Vec<&str> = lines.iter().map(|l| strip_label(&l.text)).collect();

    if let Some(address) = resolve_au_address(&texts, default_country) {
        debug!("address (AU): {:?}", address);
        return Some(address);
    }

    let address = resolve_generic_address(&texts)?;
    debug!("address (generic): {:?}", address);
    Some(address)
}

fn resolve_au_address(texts: &[&str], default_country: &str) -> Option<String> {
    let mut best: Option<AddressCandidate> = None;

    for (idx, line) in texts.iter().enumerate() {
        let Some(place) = place_text(line) else {
            continue;
        };

        let (mut text, top) = if is_one_line_address(place) {
            (place.to_string(), idx)
        } else {
            match idx.checked_sub(1).filter(|&prev| is_street_line(texts[prev])) {
                Some(prev) => (format!("{}, {}", texts[prev], place), prev),
                None => (place.to_string(), idx),
            }
        };

        match texts.get(idx + 1) {
            Some(next) if next.eq_ignore_ascii_case("australia") => {
                text = format!("{text}, {next}");
            }
            _ if !default_country.is_empty()
                && !text.to_lowercase().contains(&default_country.to_lowercase()) =>
            {
                text = format!("{text}, {default_country}");
            }
            _ => {}
        }

        let score = heading_score(texts, top);
        debug!("AU address candidate (score {}): {:?}", score, text);
        if best.as_ref().is_none_or(|b| score > b.score) {
            best = Some(AddressCandidate { text, score });
        }
    }

    best.map(|b| b.text)
}

fn resolve_generic_address(texts: &[&str]) -> Option<String> {
    let idx = texts.iter().position(|text| {
        text.chars().any(|c| c.is_ascii_digit())
            && STREET_KEYWORD.is_match(text)
            && !is_contact_line(text)
            && !has_company_suffix(text)
            && !is_job_title(text)
            && !ADDRESS_HEADING.is_match(text)
    })?;

    let mut parts = vec![texts[idx]];
    if let Some(next) = texts.get(idx + 1) {
        if POSTAL_CONTINUATION.is_match(next) && !is_contact_line(next) && !has_company_suffix(next) {
            parts.push(*next);
        }
    }
    Some(parts.join(", "))
}

/// Australian state token and a 4-digit postcode on the same line.
fn is_place_line(text: &str) -> bool {
    AU_STATE_CASED.is_match(text) && AU_POSTCODE.is_match(text)
}

/// The locality part of a place line.
///
/// Contact details after the postcode (`Sydney NSW 2000  Tel 02 9999 1234`)
/// are cut off. `None` when the line is no place line or the locality itself
/// is a contact detail.
fn place_text(text: &str) -> Option<&str> {
    if !is_place_line(text) {
        return None;
    }

    let mut place = text;
    if let Some(state) = AU_STATE_CASED.find(text) {
        if let Some(postcode) = AU_POSTCODE.find_at(text, state.end()) {
            let rest = text[postcode.end()..]
                .trim_start_matches(|c: char| !c.is_alphanumeric() && c != '+' && c != '(');
            if is_contact_line(rest) {
                place = text[..postcode.end()].trim_end();
            }
        }
    }

    (!is_contact_line(place)).then_some(place)
}

/// A place line that already carries the street, e.g.
/// `45B/2 Park Street, Sydney NSW 2000`.
fn is_one_line_address(text: &str) -> bool {
    let Some(state) = AU_STATE_CASED.find(text) else {
        return false;
    };
    let before = &text[..state.start()];
    before.chars().any(|c| c.is_ascii_digit())
        || (before.contains(',') && STREET_KEYWORD.is_match(before))
}

fn is_street_line(text: &str) -> bool {
    let has_digit = text.chars().any(|c| c.is_ascii_digit());
    !is_contact_line(text)
        && !has_company_suffix(text)
        && !ADDRESS_HEADING.is_match(text)
        && !text.ends_with(':')
        && !is_place_line(text)
        && (has_digit || STREET_KEYWORD.is_match(text) || PO_BOX.is_match(text))
}

/// Score a candidate by the nearest "office" or "registered" heading in the
/// two lines above it. Lines that are not headings ("Chief Operating
/// Officer") are skipped.
fn heading_score(texts: &[&str], top: usize) -> u32 {
    for above in (top.saturating_sub(2)..top).rev() {
        let text = texts[above];
        if !is_heading(text) {
            continue;
        }
        let words: Vec<String> = text
            .split(|c: char| !c.is_alphabetic())
            .map(str::to_lowercase)
            .collect();
        if words.iter().any(|w| w == "registered") {
            return REGISTERED_SCORE;
        }
        if words.iter().any(|w| w == "office") {
            return OFFICE_SCORE;
        }
    }
    UNLABELLED_SCORE
}

/// "Head Office:", "Registered Address" or a short label ending in ':'.
fn is_heading(text: &str) -> bool {
    ADDRESS_HEADING.is_match(text)
        || (text.ends_with(':') && text.split_whitespace().count() <= 4)
}

fn strip_label(text: &str) -> &str {
    match ADDRESS_LABEL.find(text) {
        Some(m) => &text[m.end()..],
        None => text,
    }
}

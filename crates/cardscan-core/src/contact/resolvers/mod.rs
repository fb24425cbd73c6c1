//! Entity resolvers: name, title, company and address.
//!
//! Each resolver is a pure function over the cleaned lines plus whatever the
//! earlier stages already resolved, carried in a [`ResolveContext`].

pub mod address;
pub mod company;
pub mod domain;
pub mod name;
pub mod title;
pub mod validator;

pub use address::resolve_address;
pub use company::{resolve_company, CompanyCandidate, CompanySignal};
pub use domain::company_name_from_domain;
pub use name::{resolve_name, ResolvedName};
pub use title::resolve_title;
pub use validator::validate_company;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::preprocess::Line;
use super::rules::lexicon::has_title_word;
use super::rules::patterns::{
    has_company_suffix, AU_POSTCODE, AU_STATE_CASED, EMAIL, FIELD_LABEL, LINKEDIN, PHONE, PO_BOX,
    STREET_KEYWORD, URL_MARKER,
};

/// What the resolvers know so far.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolveContext<'a> {
    /// Cleaned input lines.
    pub lines: &'a [Line],
    /// Index (into `lines`) of the line holding the person's name.
    pub anchor: Option<usize>,
    pub full_name: Option<&'a str>,
    pub job_title: Option<&'a str>,
    pub company: Option<&'a str>,
    pub email: Option<&'a str>,
    pub website: Option<&'a str>,
}

impl<'a> ResolveContext<'a> {
    pub fn new(lines: &'a [Line]) -> Self {
        Self {
            lines,
            ..Default::default()
        }
    }

    /// Index of the first line after the anchor, or 0 without one.
    pub fn after_anchor(&self) -> usize {
        self.anchor.map_or(0, |a| a + 1)
    }
}

/// Lines that can hold neither a name nor a title.
///
/// Shared by the name and title resolvers: wrong length, field labels, email
/// addresses, leading digits, URLs and company names.
pub(crate) fn is_excluded_line(line: &str) -> bool {
    let len = line.chars().count();
    len < 2
        || len > 60
        || FIELD_LABEL.is_match(line)
        || line.contains('@')
        || line.starts_with(|c: char| c.is_ascii_digit())
        || URL_MARKER.is_match(line)
        || has_company_suffix(line)
}

/// Lines carrying contact details rather than names.
pub(crate) fn is_contact_line(line: &str) -> bool {
    FIELD_LABEL.is_match(line)
        || EMAIL.is_match(line)
        || line.contains('@')
        || URL_MARKER.is_match(line)
        || LINKEDIN.is_match(line)
        || PHONE
            .find_iter(line)
            .any(|m| m.as_str().chars().filter(|c| c.is_ascii_digit()).count() >= 7)
}

/// Heuristic check for postal addresses.
pub(crate) fn looks_like_address(line: &str) -> bool {
    let has_digit = line.chars().any(|c| c.is_ascii_digit());
    (AU_STATE_CASED.is_match(line) && AU_POSTCODE.is_match(line))
        || PO_BOX.is_match(line)
        || (has_digit && STREET_KEYWORD.is_match(line))
}

/// Title-like lines: contains a job-title word.
pub(crate) fn is_job_title(line: &str) -> bool {
    has_title_word(line)
}

/// Accent-stripped, lowercase, alphanumeric-only form for comparisons.
pub(crate) fn normalize_for_compare(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Upper-case the first letter of a word.
pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

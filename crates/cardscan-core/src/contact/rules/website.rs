//! Website and domain extraction.
//!
//! Candidates are collected in three tiers: a value after a `w:`/`web:`
//! label, explicit `http(s)://` or `www.` tokens, then bare `name.tld` tokens.
//! Bare tokens are looked for only after email addresses have been blanked
//! out, so the local part of an email never turns into a website.

use super::email::email_domain;
use super::lexicon::{is_compound_tld, is_first_name, is_generic_mail_domain, is_known_tld, is_surname};
use super::patterns::{BARE_DOMAIN, EMAIL, EXPLICIT_URL, WEBSITE_LABEL};
use super::{ExtractionMatch, FieldExtractor};

/// Website field extractor.
pub struct WebsiteExtractor;

impl WebsiteExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WebsiteExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for WebsiteExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results: Vec<Self::Output> = Vec::new();
        let mut push = |raw: &str, confidence: f32| {
            if let Some(url) = normalize_website(raw) {
                if !results.iter().any(|r| r.value == url) {
                    results.push(ExtractionMatch::new(url, confidence, raw));
                }
            }
        };

        // Labelled values
        for line in text.lines() {
            if let Some(caps) = WEBSITE_LABEL.captures(line.trim()) {
                push(&caps[1], 0.95);
            }
        }

        // Explicit protocol or www. prefix
        for m in EXPLICIT_URL.find_iter(text) {
            push(m.as_str(), 0.9);
        }

        // Bare domains, with emails blanked out
        let without_emails = EMAIL.replace_all(text, " ");
        for m in BARE_DOMAIN.find_iter(&without_emails) {
            push(m.as_str(), 0.6);
        }

        results
    }
}

/// Extract the company website.
///
/// Falls back to `https://www.<domain>` of the email address when the text
/// has no usable website, unless the domain belongs to a consumer mail
/// provider.
pub fn extract_website(text: &str, email: Option<&str>, derive_from_email: bool) -> Option<String> {
    if let Some(m) = WebsiteExtractor::new().extract(text) {
        return Some(m.value);
    }

    if !derive_from_email {
        return None;
    }

    let domain = email.and_then(email_domain)?;
    if is_generic_mail_domain(domain) {
        return None;
    }
    normalize_website(domain)
}

/// Validate a candidate and normalize it to `https://www.host[/path]`.
///
/// `www.` is added only to bare registrable domains; existing subdomains are
/// kept as they are.
pub fn normalize_website(candidate: &str) -> Option<String> {
    let candidate = candidate
        .trim()
        .trim_end_matches(|c: char| matches!(c, '.' | ',' | ';' | ':' | ')' | '/'));

    if candidate.is_empty()
        || candidate.chars().any(char::is_whitespace)
        || candidate.contains('@')
        || candidate.to_lowercase().contains("linkedin.com")
    {
        return None;
    }

    let without_scheme = strip_scheme(candidate);
    let (host, path) = match without_scheme.find('/') {
        Some(idx) => without_scheme.split_at(idx),
        None => (without_scheme, ""),
    };
    let host = host.to_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(&host);

    if !is_valid_domain(host) {
        return None;
    }

    let labels: Vec<&str> = host.split('.').collect();
    let registrable = labels.len() == 2
        || (labels.len() == 3 && is_compound_tld(&format!("{}.{}", labels[1], labels[2])));
    let www = if registrable { "www." } else { "" };
    let path = path.trim_end_matches('/');

    Some(format!("https://{www}{host}{path}"))
}

/// Check whether a bare host (no scheme, no path) looks like a real domain.
pub fn is_valid_domain(host: &str) -> bool {
    if !host.contains('.') || host.contains('@') || host.chars().any(char::is_whitespace) {
        return false;
    }

    let host = host.to_lowercase();
    let labels: Vec<&str> = host.split('.').collect();
    if labels
        .iter()
        .any(|l| l.is_empty() || !l.chars().all(|c| c.is_ascii_alphanumeric() || c == '-'))
    {
        return false;
    }

    let last = labels[labels.len() - 1];
    let compound = labels.len() >= 3
        && is_compound_tld(&format!("{}.{}", labels[labels.len() - 2], last));
    let listed = compound || is_known_tld(last);

    let plausible_unlisted =
        last.chars().all(|c| c.is_ascii_alphabetic()) && (3..=6).contains(&last.len());
    if !listed && !plausible_unlisted {
        return false;
    }

    // "peter.yu" or "jane.smith": a person's name, not a domain
    if labels.len() == 2 && !listed {
        let (first, second) = (labels[0], labels[1]);
        if is_first_name(first) || is_surname(second) || second.len() <= 3 {
            return false;
        }
    }

    true
}

fn strip_scheme(s: &str) -> &str {
    let lower = s.to_lowercase();
    for scheme in ["https://", "http://"] {
        if lower.starts_with(scheme) {
            return &s[scheme.len()..];
        }
    }
    s
}

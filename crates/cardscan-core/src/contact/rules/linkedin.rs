//! LinkedIn profile extraction and search fallback.

use url::Url;

use super::patterns::LINKEDIN;
use super::{ExtractionMatch, FieldExtractor};

const SEARCH_ENDPOINT: &str = "https://www.google.com/search";

/// LinkedIn field extractor.
pub struct LinkedinExtractor;

impl LinkedinExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LinkedinExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for LinkedinExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        LINKEDIN
            .find_iter(text)
            .map(|m| {
                let raw = m.as_str().trim_end_matches('/');
                let url = if raw.to_lowercase().starts_with("http") {
                    raw.to_string()
                } else {
                    format!("https://{raw}")
                };
                ExtractionMatch::new(url, 0.95, m.as_str()).with_position(m.start(), m.end())
            })
            .collect()
    }
}

/// Extract the first LinkedIn profile or company URL.
pub fn extract_linkedin(text: &str) -> Option<String> {
    LinkedinExtractor::new().extract(text).map(|m| m.value)
}

/// Build a web search URL for "<name> <company> LinkedIn".
///
/// Returns `None` when neither a name nor a company is known, since the query
/// would only say "LinkedIn".
pub fn linkedin_search_url(full_name: Option<&str>, company: Option<&str>) -> Option<String> {
    let terms: Vec<&str> = [full_name, company]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect();

    if terms.is_empty() {
        return None;
    }

    let query = format!("{} LinkedIn", terms.join(" "));
    Url::parse_with_params(SEARCH_ENDPOINT, &[("q", query.as_str())])
        .ok()
        .map(String::from)
}

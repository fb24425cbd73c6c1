//! Rule-based contact parser.

use serde::Serialize;
use tracing::{debug, info};

use crate::models::config::ExtractionConfig;
use crate::models::contact::ParsedContact;

use super::preprocess::{clean_lines, joined_text, Line};
use super::resolvers::{
    resolve_address, resolve_company, resolve_name, resolve_title, validate_company,
    ResolveContext,
};
use super::rules::{
    extract_linkedin, extract_website, linkedin_search_url, EmailExtractor, FieldExtractor,
    PhoneExtractor,
};

/// Result of contact extraction.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    /// Extracted contact.
    pub contact: ParsedContact,
    /// Cleaned lines the resolvers worked on.
    pub lines: Vec<Line>,
    /// Fields that could not be found.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for contact parsing.
///
/// Parsing never fails: anything that cannot be found is left out of the
/// returned contact.
pub trait ContactParser {
    /// Parse a contact from free text.
    fn parse(&self, text: &str) -> ExtractionResult;
}

/// Contact parser built from ordered heuristics.
///
/// Runs cleanup, then the field extractors, then name, title and company
/// resolution, the company repair pass and finally the address resolver.
#[derive(Debug, Clone)]
pub struct RuleContactParser {
    /// Derive a website from a company email domain.
    website_from_email: bool,
    /// Attach a LinkedIn search URL when no profile is printed.
    linkedin_search: bool,
    /// Lines after the name searched for a suffix-less company.
    company_lookahead: usize,
    /// Country appended to Australian addresses.
    default_country: String,
}

impl RuleContactParser {
    /// Create a new parser with default settings.
    pub fn new() -> Self {
        Self::from_config(&ExtractionConfig::default())
    }

    /// Create a parser from extraction settings.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            website_from_email: config.derive_website_from_email,
            linkedin_search: config.linkedin_search_fallback,
            company_lookahead: config.company_lookahead,
            default_country: config.default_country.clone(),
        }
    }

    /// Set website derivation from the email domain.
    pub fn with_website_from_email(mut self, enabled: bool) -> Self {
        self.website_from_email = enabled;
        self
    }

    /// Set the LinkedIn search fallback.
    pub fn with_linkedin_search(mut self, enabled: bool) -> Self {
        self.linkedin_search = enabled;
        self
    }

    /// Set how many lines after the name may hold a suffix-less company.
    pub fn with_company_lookahead(mut self, lines: usize) -> Self {
        self.company_lookahead = lines;
        self
    }

    /// Set the country appended to Australian addresses.
    pub fn with_default_country(mut self, country: impl Into<String>) -> Self {
        self.default_country = country.into();
        self
    }

    fn extract(&self, lines: &[Line]) -> ParsedContact {
        let text = joined_text(lines);

        let email = EmailExtractor::new().extract(&text).map(|m| m.value);
        let phone = PhoneExtractor::new().extract(&text).map(|m| m.value);
        let website = extract_website(&text, email.as_deref(), self.website_from_email);
        let linkedin_url = extract_linkedin(&text);

        let base = ResolveContext {
            email: email.as_deref(),
            website: website.as_deref(),
            ..ResolveContext::new(lines)
        };

        let name = resolve_name(&base);
        let ctx = ResolveContext {
            anchor: name.as_ref().and_then(|n| n.anchor),
            full_name: name.as_ref().map(|n| n.value.as_str()),
            ..base
        };

        let job_title = resolve_title(&ctx);
        let ctx = ResolveContext {
            job_title: job_title.as_deref(),
            ..ctx
        };

        let candidate = resolve_company(&ctx, self.company_lookahead);
        let company = validate_company(&ctx, candidate);
        if let Some(company) = &company {
            debug!("company {:?} ({:?})", company.name, company.signal);
        }
        let company_name = company.map(|c| c.name);

        let address = resolve_address(lines, &self.default_country);

        let linkedin_search_url = match &linkedin_url {
            None if self.linkedin_search => linkedin_search_url(ctx.full_name, company_name.as_deref()),
            _ => None,
        };

        ParsedContact {
            full_name: name.map(|n| n.value),
            job_title,
            company_name,
            email,
            phone,
            website,
            linkedin_url,
            linkedin_search_url,
            address,
        }
    }
}

impl Default for RuleContactParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactParser for RuleContactParser {
    fn parse(&self, text: &str) -> ExtractionResult {
        info!("Parsing contact from {} characters of text", text.len());

        let (result, processing_time_ms) = timed(|| {
            let lines = clean_lines(text);
            let contact = self.extract(&lines);
            (contact, lines)
        });
        let (contact, lines) = result;

        let mut warnings = Vec::new();
        for (missing, field) in [
            (contact.full_name.is_none(), "name"),
            (contact.email.is_none(), "email"),
            (contact.phone.is_none(), "phone"),
            (contact.company_name.is_none(), "company"),
        ] {
            if missing {
                warnings.push(format!("Could not extract {field}"));
            }
        }

        debug!(
            "Extracted {} fields from {} lines",
            contact.field_count(),
            lines.len()
        );

        ExtractionResult {
            contact,
            lines,
            warnings,
            processing_time_ms,
        }
    }
}

/// Parse a contact with the default rule set.
pub fn parse_contact(text: &str) -> ParsedContact {
    RuleContactParser::new().parse(text).contact
}

#[cfg(not(target_arch = "wasm32"))]
fn timed<T>(f: impl FnOnce() -> T) -> (T, u64) {
    let start = std::time::Instant::now();
    let value = f();
    (value, start.elapsed().as_millis() as u64)
}

// `Instant::now` is unavailable on wasm32-unknown-unknown
#[cfg(target_arch = "wasm32")]
fn timed<T>(f: impl FnOnce() -> T) -> (T, u64) {
    (f(), 0)
}

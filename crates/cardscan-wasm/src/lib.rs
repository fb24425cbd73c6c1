//! WASM bindings for business card contact extraction.
//!
//! This crate provides WebAssembly bindings for use in browsers and Node.js.

use wasm_bindgen::prelude::*;

use cardscan_core::contact::resolvers::company_name_from_domain;
use cardscan_core::contact::rules::{format_phone, normalize_website};
use cardscan_core::models::ExtractionConfig;
use cardscan_core::{clean_lines, parse_contact, ContactParser, ParsedContact, RuleContactParser};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn from_js(contact: JsValue) -> Result<ParsedContact, JsValue> {
    serde_wasm_bindgen::from_value(contact).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Extract contact data from text.
///
/// Takes card or signature text (from OCR or a pasted email) and returns a
/// contact object. Fields that could not be found are left out.
#[wasm_bindgen]
pub fn extract_contact_from_text(text: &str) -> Result<JsValue, JsValue> {
    to_js(&parse_contact(text))
}

/// Cleaned input lines, with sign-offs and disclaimers removed.
#[wasm_bindgen]
pub fn clean_text_lines(text: &str) -> js_sys::Array {
    clean_lines(text)
        .into_iter()
        .map(|line| JsValue::from_str(&line.text))
        .collect()
}

/// Split a single-line address into street, city, state, postcode and country.
#[wasm_bindgen]
pub fn split_address(address: &str) -> Result<JsValue, JsValue> {
    to_js(&cardscan_core::split_address(address))
}

/// Render a contact object (as returned by the extractor) as a vCard 3.0 card.
#[wasm_bindgen]
pub fn to_vcard(contact: JsValue) -> Result<String, JsValue> {
    Ok(cardscan_core::to_vcard(&from_js(contact)?))
}

/// Render a contact object as pretty-printed JSON.
#[wasm_bindgen]
pub fn contact_to_json(contact: JsValue) -> Result<String, JsValue> {
    serde_json::to_string_pretty(&from_js(contact)?).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Format a phone number the way the extractor does.
#[wasm_bindgen]
pub fn format_phone_number(phone: &str) -> String {
    format_phone(phone)
}

/// Normalize a website to `https://www.<domain>`.
#[wasm_bindgen]
pub fn normalize_website_url(website: &str) -> Option<String> {
    normalize_website(website)
}

/// Title-cased company name guessed from a domain or URL.
#[wasm_bindgen]
pub fn company_from_domain(domain: &str) -> Option<String> {
    company_name_from_domain(domain)
}

/// Contact extractor class for browser use.
#[wasm_bindgen]
pub struct ContactExtractor {
    config: ExtractionConfig,
    parser: RuleContactParser,
    log_warnings: bool,
}

#[wasm_bindgen]
impl ContactExtractor {
    /// Create a new contact extractor with default settings.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        let config = ExtractionConfig::default();
        Self {
            parser: RuleContactParser::from_config(&config),
            config,
            log_warnings: false,
        }
    }

    fn rebuild(&mut self) {
        self.parser = RuleContactParser::from_config(&self.config);
    }

    /// Derive a website from the email domain when none is printed.
    #[wasm_bindgen]
    pub fn set_derive_website(&mut self, enabled: bool) {
        self.config.derive_website_from_email = enabled;
        self.rebuild();
    }

    /// Attach a LinkedIn search URL when no profile link is found.
    #[wasm_bindgen]
    pub fn set_linkedin_search(&mut self, enabled: bool) {
        self.config.linkedin_search_fallback = enabled;
        self.rebuild();
    }

    /// Lines after the name searched for a company without a legal suffix.
    #[wasm_bindgen]
    pub fn set_company_lookahead(&mut self, lines: usize) {
        self.config.company_lookahead = lines;
        self.rebuild();
    }

    /// Country appended to Australian addresses that do not name one.
    /// An empty string disables it.
    #[wasm_bindgen]
    pub fn set_default_country(&mut self, country: &str) {
        self.config.default_country = country.to_string();
        self.rebuild();
    }

    /// Log extraction warnings to the browser console.
    #[wasm_bindgen]
    pub fn set_log_warnings(&mut self, enabled: bool) {
        self.log_warnings = enabled;
    }

    /// Extract a contact from text.
    #[wasm_bindgen]
    pub fn extract(&self, text: &str) -> Result<JsValue, JsValue> {
        let result = self.parser.parse(text);
        self.report(&result.warnings);
        to_js(&result.contact)
    }

    /// Extract a contact as a vCard 3.0 card.
    #[wasm_bindgen]
    pub fn extract_vcard(&self, text: &str) -> String {
        let result = self.parser.parse(text);
        self.report(&result.warnings);
        cardscan_core::to_vcard(&result.contact)
    }

    /// Get extraction result with metadata.
    ///
    /// The object carries `contact`, `lines`, `warnings` and `processingTimeMs`.
    #[wasm_bindgen]
    pub fn extract_with_metadata(&self, text: &str) -> Result<JsValue, JsValue> {
        let result = self.parser.parse(text);
        self.report(&result.warnings);
        to_js(&result)
    }

    fn report(&self, warnings: &[String]) {
        if !self.log_warnings {
            return;
        }
        for warning in warnings {
            web_sys::console::warn_1(&JsValue::from_str(warning));
        }
    }
}

impl Default for ContactExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const CARD: &str = "Jane Smith\nChief Marketing Officer\nFlow Power Pty Ltd\n\
                        e: jane.smith@flowpower.com.au\n";

    #[wasm_bindgen_test]
    fn test_version() {
        let v = version();
        assert!(!v.is_empty());
    }

    #[wasm_bindgen_test]
    fn test_extract_contact_from_text() {
        let value = extract_contact_from_text(CARD).unwrap();
        let contact: ParsedContact = serde_wasm_bindgen::from_value(value).unwrap();
        assert_eq!(contact.full_name.as_deref(), Some("Jane Smith"));
        assert_eq!(contact.company_name.as_deref(), Some("Flow Power Pty Ltd"));
        assert_eq!(contact.website.as_deref(), Some("https://www.flowpower.com.au"));
    }

    #[wasm_bindgen_test]
    fn test_extractor_settings() {
        let mut extractor = ContactExtractor::new();
        extractor.set_derive_website(false);
        extractor.set_linkedin_search(false);

        let value = extractor.extract(CARD).unwrap();
        let contact: ParsedContact = serde_wasm_bindgen::from_value(value).unwrap();
        assert_eq!(contact.website, None);
        assert_eq!(contact.linkedin_search_url, None);
    }

    #[wasm_bindgen_test]
    fn test_vcard_round_trip_through_js() {
        let value = extract_contact_from_text(CARD).unwrap();
        let card = to_vcard(value).unwrap();
        assert!(card.starts_with("BEGIN:VCARD\r\n"));
        assert!(card.contains("ORG:Flow Power Pty Ltd\r\n"));
    }

    #[wasm_bindgen_test]
    fn test_helpers() {
        assert_eq!(format_phone_number("0432123456"), "(043) 212-3456");
        assert_eq!(
            normalize_website_url("flowpower.com.au").as_deref(),
            Some("https://www.flowpower.com.au")
        );
        assert_eq!(company_from_domain("flowpower.com.au").as_deref(), Some("Flow Power"));
        assert_eq!(clean_text_lines("Kind regards,\nJane\n").length(), 1);
    }
}

//! Rule-based field extractors for business cards and signatures.

pub mod email;
pub mod lexicon;
pub mod linkedin;
pub mod patterns;
pub mod phone;
pub mod website;

pub use email::{email_domain, extract_email, EmailExtractor};
pub use linkedin::{extract_linkedin, linkedin_search_url, LinkedinExtractor};
pub use patterns::*;
pub use phone::{extract_phone, format_phone, PhoneExtractor};
pub use website::{extract_website, is_valid_domain, normalize_website, WebsiteExtractor};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// Extraction context with confidence scores.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Confidence score (0.0 - 1.0).
    pub confidence: f32,
    /// Byte range in the source text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, confidence: f32, source: impl Into<String>) -> Self {
        Self {
            value,
            confidence,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}

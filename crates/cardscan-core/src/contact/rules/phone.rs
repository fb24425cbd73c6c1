//! Phone number extraction and formatting.

use regex::Captures;

use super::patterns::{AU_STATE_POSTCODE, PHONE, PHONE_LABEL, REGISTRATION_LABEL};
use super::{ExtractionMatch, FieldExtractor};

const MIN_DIGITS: usize = 7;
const MAX_DIGITS: usize = 15;

/// Phone field extractor.
///
/// Numbers on labelled lines (`m:`, `tel`, `phone`, ...) come first, followed
/// by any other phone-shaped run of digits in the text.
pub struct PhoneExtractor {
    format: bool,
}

impl PhoneExtractor {
    /// Create a new phone extractor.
    pub fn new() -> Self {
        Self { format: true }
    }

    /// Set whether to reformat 10/11 digit numbers.
    pub fn with_formatting(mut self, format: bool) -> Self {
        self.format = format;
        self
    }

    fn push_candidates(
        &self,
        line: &str,
        offset: usize,
        confidence: f32,
        results: &mut Vec<ExtractionMatch<String>>,
        seen: &mut Vec<String>,
    ) {
        // Blank out "NSW 2000" so a postcode never joins the number after it.
        // Same byte length, so match offsets still refer to `line`.
        let masked =
            AU_STATE_POSTCODE.replace_all(line, |caps: &Captures| " ".repeat(caps[0].len()));
        for m in PHONE.find_iter(&masked) {
            let digits = digits_of(m.as_str());
            if !(MIN_DIGITS..=MAX_DIGITS).contains(&digits.len()) || seen.contains(&digits) {
                continue;
            }
            seen.push(digits);

            let value = if self.format {
                format_phone(m.as_str())
            } else {
                clean_phone(m.as_str())
            };
            results.push(
                ExtractionMatch::new(value, confidence, m.as_str())
                    .with_position(offset + m.start(), offset + m.end()),
            );
        }
    }
}

impl Default for PhoneExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for PhoneExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();
        let mut seen = Vec::new();

        // Line start offsets so positions refer to the full text
        let mut lines = Vec::new();
        let mut offset = 0;
        for line in text.split('\n') {
            lines.push((offset, line));
            offset += line.len() + 1;
        }

        // Labelled lines first (higher confidence)
        for (offset, line) in &lines {
            let trimmed = line.trim_start();
            if PHONE_LABEL.is_match(trimmed) {
                let lead = line.len() - trimmed.len();
                self.push_candidates(trimmed, offset + lead, 0.95, &mut results, &mut seen);
            }
        }

        // Everything else (lower confidence)
        for (offset, line) in &lines {
            if REGISTRATION_LABEL.is_match(line) {
                continue;
            }
            self.push_candidates(line, *offset, 0.7, &mut results, &mut seen);
        }

        results
    }
}

/// Extract the canonical phone number from text.
pub fn extract_phone(text: &str) -> Option<String> {
    PhoneExtractor::new().extract(text).map(|m| m.value)
}

/// Format a phone number.
///
/// Numbers written with a leading `+` are kept as written. Otherwise 10 digits
/// become `(XXX) XXX-XXXX` and 11 digits starting with `1` become
/// `+1 (XXX) XXX-XXXX`; anything else is only cleaned up.
pub fn format_phone(raw: &str) -> String {
    let cleaned = clean_phone(raw);
    if cleaned.starts_with('+') {
        return cleaned;
    }

    let digits = digits_of(&cleaned);
    match digits.len() {
        10 => format!("({}) {}-{}", &digits[0..3], &digits[3..6], &digits[6..10]),
        11 if digits.starts_with('1') => format!(
            "+1 ({}) {}-{}",
            &digits[1..4],
            &digits[4..7],
            &digits[7..11]
        ),
        _ => cleaned,
    }
}

/// Trim and collapse internal whitespace.
fn clean_phone(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn digits_of(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_phone() {
        assert_eq!(format_phone("212 555 0100"), "(212) 555-0100");
        assert_eq!(format_phone("1-212-555-0100"), "+1 (212) 555-0100");
        assert_eq!(format_phone("+61 2  9999 1234"), "+61 2 9999 1234");
        assert_eq!(format_phone("02 999 1234"), "02 999 1234");
    }

    #[test]
    fn test_labelled_line_wins() {
        let text = "Call 02 9999 1234 for reception\nm: 0432 123 456";
        let results = PhoneExtractor::new().extract_all(text);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].value, "(043) 212-3456");
        assert_eq!(results[0].confidence, 0.95);
        assert_eq!(results[1].value, "(029) 999-1234");
        assert_eq!(results[1].confidence, 0.7);
    }

    #[test]
    fn test_digit_count_bounds() {
        // Postcodes and short numbers are not phones
        assert_eq!(extract_phone("Sydney NSW 2000"), None);
        assert_eq!(extract_phone("ref 12-34"), None);
        // 16 digits is too long
        assert_eq!(extract_phone("4111 1111 1111 1111"), None);
    }

    #[test]
    fn test_postcode_before_number() {
        assert_eq!(
            extract_phone("Sydney NSW 2000 02 9999 1234"),
            Some("(029) 999-1234".to_string())
        );

        let text = "Level 3, 1 Pitt St, Sydney NSW 2000 +61 2 9999 1234";
        let m = PhoneExtractor::new().extract(text).unwrap();
        assert_eq!(m.value, "+61 2 9999 1234");
        let (start, end) = m.position.unwrap();
        assert_eq!(&text[start..end], "+61 2 9999 1234");
    }

    #[test]
    fn test_dedupes_on_digits() {
        let text = "t: +61 2 9999 1234\nPhone +61 (2) 9999-1234";
        let results = PhoneExtractor::new().extract_all(text);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].value, "+61 2 9999 1234");
    }

    #[test]
    fn test_skips_registration_numbers() {
        assert_eq!(extract_phone("ABN 12 345 678 901"), None);
    }

    #[test]
    fn test_position_refers_to_full_text() {
        let text = "Jane Smith\nm: 0432 123 456";
        let m = PhoneExtractor::new().extract(text).unwrap();
        let (start, end) = m.position.unwrap();
        assert_eq!(&text[start..end], "0432 123 456");
    }
}

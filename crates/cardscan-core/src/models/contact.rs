//! Contact record produced by the parser.

use serde::{Deserialize, Serialize};

/// A contact extracted from a business card or email signature.
///
/// Every field is optional. A field that could not be resolved is `None` and
/// is left out of the serialized form entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedContact {
    /// Person's full name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    /// Job title or role.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,

    /// Employer or organisation name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,

    /// Canonical (first seen) email address, lowercased.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Canonical phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Company website, normalized to `https://www.`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    /// LinkedIn profile or company page found in the text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,

    /// Search URL to find the profile when none was printed on the card.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_search_url: Option<String>,

    /// Postal address as a single line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl ParsedContact {
    /// True when nothing at all was extracted.
    pub fn is_empty(&self) -> bool {
        self.field_count() == 0
    }

    /// Number of resolved fields.
    pub fn field_count(&self) -> usize {
        [
            &self.full_name,
            &self.job_title,
            &self.company_name,
            &self.email,
            &self.phone,
            &self.website,
            &self.linkedin_url,
            &self.linkedin_search_url,
            &self.address,
        ]
        .iter()
        .filter(|f| f.is_some())
        .count()
    }

    /// Split the address into postal components, if there is one.
    pub fn split_address(&self) -> Option<SplitAddress> {
        self.address.as_deref().map(crate::address::split_address)
    }
}

/// Postal components of an address, used for address-card export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitAddress {
    pub street: String,
    pub city: String,
    /// Always upper-case.
    pub state: String,
    pub postcode: String,
    pub country: String,
}

impl SplitAddress {
    /// Check if the address has any data.
    pub fn is_empty(&self) -> bool {
        self.street.is_empty()
            && self.city.is_empty()
            && self.state.is_empty()
            && self.postcode.is_empty()
            && self.country.is_empty()
    }

    /// Format the address back into a single line.
    pub fn format(&self) -> String {
        let mut locality = Vec::new();
        for part in [&self.city, &self.state, &self.postcode] {
            if !part.is_empty() {
                locality.push(part.as_str());
            }
        }

        let mut parts = Vec::new();
        if !self.street.is_empty() {
            parts.push(self.street.clone());
        }
        if !locality.is_empty() {
            parts.push(locality.join(" "));
        }
        if !self.country.is_empty() {
            parts.push(self.country.clone());
        }
        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fields_are_omitted() {
        let contact = ParsedContact {
            full_name: Some("Jane Smith".to_string()),
            email: Some("jane@acme.com".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_value(&contact).unwrap();
        let obj = json.as_object().unwrap();

        assert_eq!(obj.len(), 2);
        assert_eq!(obj["fullName"], "Jane Smith");
        assert!(!obj.contains_key("phone"));
        assert!(!json.to_string().contains("null"));
    }

    #[test]
    fn test_field_count() {
        assert!(ParsedContact::default().is_empty());

        let contact = ParsedContact {
            phone: Some("(212) 555-0100".to_string()),
            website: Some("https://www.acme.com".to_string()),
            ..Default::default()
        };
        assert_eq!(contact.field_count(), 2);
    }

    #[test]
    fn test_split_address_format() {
        let split = SplitAddress {
            street: "1 George St".to_string(),
            city: "Sydney".to_string(),
            state: "NSW".to_string(),
            postcode: "2000".to_string(),
            country: "Australia".to_string(),
        };
        assert_eq!(split.format(), "1 George St, Sydney NSW 2000, Australia");
        assert!(SplitAddress::default().is_empty());
    }
}

//! Configuration structures for contact extraction and output.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{CardscanError, Result};

/// Main configuration for cardscan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardscanConfig {
    /// Contact extraction configuration.
    pub extraction: ExtractionConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

/// Contact extraction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Derive a website from the email domain when none is printed.
    pub derive_website_from_email: bool,

    /// Attach a LinkedIn search URL when no profile link is found.
    pub linkedin_search_fallback: bool,

    /// Lines after the name searched for a company without a legal suffix.
    pub company_lookahead: usize,

    /// Country assumed for addresses with an Australian state or postcode.
    pub default_country: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            derive_website_from_email: true,
            linkedin_search_fallback: true,
            company_lookahead: 5,
            default_country: "Australia".to_string(),
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format.
    pub format: OutputFormat,

    /// Include the split postal address in the output.
    pub split_address: bool,
}

/// Output format for extracted contacts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
    Text,
    Vcard,
}

impl CardscanConfig {
    /// Load configuration from a JSON file.
    ///
    /// Malformed JSON or invalid values are reported as
    /// [`CardscanError::Config`] naming the file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| CardscanError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

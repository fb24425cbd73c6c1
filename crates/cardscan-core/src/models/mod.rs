//! Data models for extracted contacts and configuration.

pub mod config;
pub mod contact;

pub use config::{CardscanConfig, ExtractionConfig, OutputConfig, OutputFormat};
pub use contact::{ParsedContact, SplitAddress};

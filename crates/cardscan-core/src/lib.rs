//! Core library for business card and email signature contact extraction.
//!
//! This crate provides:
//! - Text cleanup for OCR transcriptions and pasted signatures
//! - Regex field extractors (email, phone, website, LinkedIn)
//! - Rule-based name, title, company and address resolution
//! - Postal address splitting and vCard export
//!
//! Parsing is pure: it takes a string, returns a [`ParsedContact`], and never
//! fails. Missing information shows up as absent fields.

pub mod error;
pub mod models;
pub mod contact;
pub mod address;
pub mod vcard;

pub use error::{CardscanError, Result};
pub use models::contact::{ParsedContact, SplitAddress};
pub use models::config::CardscanConfig;
pub use contact::{clean_lines, parse_contact, ContactParser, ExtractionResult, Line, RuleContactParser};
pub use address::split_address;
pub use vcard::to_vcard;

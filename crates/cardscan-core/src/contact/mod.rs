//! Contact extraction from business-card and signature text.

mod parser;
pub mod preprocess;
pub mod resolvers;
pub mod rules;

pub use parser::{parse_contact, ContactParser, ExtractionResult, RuleContactParser};
pub use preprocess::{clean_lines, Line};

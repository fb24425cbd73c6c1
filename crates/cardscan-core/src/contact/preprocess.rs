//! Raw text cleanup.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::rules::lexicon::{is_disclaimer_start, is_sign_off};

/// A trimmed, non-empty line of input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// 0-based line number in the raw input.
    pub number: usize,
    /// Trimmed text.
    pub text: String,
}

impl Line {
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }
}

/// Split raw text into cleaned lines.
///
/// Leading sign-offs ("Kind regards,") are dropped until the first line that
/// is not one. Everything from the first disclaimer line onwards is cut.
pub fn clean_lines(text: &str) -> Vec<Line> {
    let mut lines: Vec<Line> = text
        .lines()
        .enumerate()
        .map(|(number, raw)| Line::new(number, raw.trim()))
        .filter(|line| !line.text.is_empty())
        .skip_while(|line| is_sign_off(&line.text))
        .collect();

    if let Some(cut) = lines.iter().position(|l| is_disclaimer_start(&l.text)) {
        trace!("dropping {} lines from disclaimer at line {}", lines.len() - cut, lines[cut].number);
        lines.truncate(cut);
    }

    lines
}

/// Join cleaned lines back into the text the field extractors scan.
pub fn joined_text(lines: &[Line]) -> String {
    lines
        .iter()
        .map(|l| l.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

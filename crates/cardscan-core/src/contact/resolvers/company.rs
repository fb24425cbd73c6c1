//! Company name resolution.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{is_contact_line, is_job_title, looks_like_address, ResolveContext};
use crate::contact::rules::patterns::has_company_suffix;

/// Which rule produced a company name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanySignal {
    /// Line with a legal suffix (Ltd, Inc, GmbH, ...).
    Strong,
    /// Title Case line near the name.
    Weak,
    /// Built from the website or email domain.
    Derived,
    /// First leftover line when nothing better exists.
    Fallback,
}

/// A company name and how it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyCandidate {
    pub name: String,
    pub signal: CompanySignal,
    /// Line index the name came from, if any.
    pub line: Option<usize>,
}

impl CompanyCandidate {
    pub fn new(name: impl Into<String>, signal: CompanySignal, line: Option<usize>) -> Self {
        Self {
            name: name.into(),
            signal,
            line,
        }
    }
}

/// Find the company name.
///
/// Pass 1 takes the first line from the anchor onwards with a legal suffix.
/// Pass 2 looks at the next `lookahead` lines after the anchor for a short
/// Title Case line that is not a job title.
pub fn resolve_company(ctx: &ResolveContext<'_>, lookahead: usize) -> Option<CompanyCandidate> {
    let start = ctx.anchor.unwrap_or(0);

    for (idx, line) in ctx.lines.iter().enumerate().skip(start) {
        if has_company_suffix(&line.text) && !is_contact_line(&line.text) {
            debug!("company (strong) at line {}: {:?}", line.number, line.text);
            return Some(CompanyCandidate::new(
                line.text.clone(),
                CompanySignal::Strong,
                Some(idx),
            ));
        }
    }

    for (idx, line) in ctx
        .lines
        .iter()
        .enumerate()
        .skip(ctx.after_anchor())
        .take(lookahead)
    {
        let text = line.text.as_str();
        if is_job_title(text) || is_contact_line(text) || looks_like_address(text) {
            continue;
        }
        if is_weak_company(text) {
            debug!("company (weak) at line {}: {:?}", line.number, text);
            return Some(CompanyCandidate::new(text, CompanySignal::Weak, Some(idx)));
        }
    }

    None
}

/// Short Title Case line: 3-60 chars, at most 6 words, at least 60% of the
/// words capitalized.
pub fn is_weak_company(line: &str) -> bool {
    let len = line.chars().count();
    let words: Vec<&str> = line.split_whitespace().collect();
    if !(3..=60).contains(&len) || words.is_empty() || words.len() > 6 {
        return false;
    }

    let capitalized = words
        .iter()
        .filter(|w| w.chars().next().is_some_and(char::is_uppercase))
        .count();
    capitalized * 10 >= words.len() * 6
}

//! Person name resolution.

use tracing::debug;

use super::{capitalize, is_excluded_line, is_job_title, ResolveContext};
use crate::contact::rules::patterns::{CAPS_NAME_TOKEN, NAME_TOKEN};

/// A resolved name and the line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedName {
    pub value: String,
    /// Line index of the name; `None` when it was derived from the email.
    pub anchor: Option<usize>,
}

/// Find the person's name.
///
/// The first line (top-down) of one to four name-shaped tokens wins and
/// becomes the anchor for later resolvers. Without one, the email local part
/// is tried (`jane.smith@` -> "Jane Smith").
pub fn resolve_name(ctx: &ResolveContext<'_>) -> Option<ResolvedName> {
    for (idx, line) in ctx.lines.iter().enumerate() {
        let text = line.text.as_str();
        if is_excluded_line(text) || is_job_title(text) {
            continue;
        }
        if is_name_line(text) {
            debug!("name anchor at line {}: {:?}", line.number, text);
            return Some(ResolvedName {
                value: text.to_string(),
                anchor: Some(idx),
            });
        }
    }

    let derived = ctx.email.and_then(name_from_email)?;
    debug!("name derived from email: {:?}", derived);
    Some(ResolvedName {
        value: derived,
        anchor: None,
    })
}

/// True if every token of the line has the shape of a name part.
///
/// An ALL-CAPS token counts only after the first token ("Jane SMITH"), so a
/// logo line such as "ACME" is not taken for a name.
pub fn is_name_line(line: &str) -> bool {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() || tokens.len() > 4 {
        return false;
    }

    tokens.iter().enumerate().all(|(i, token)| {
        let token = token.trim_end_matches(',');
        NAME_TOKEN.is_match(token) || (i > 0 && CAPS_NAME_TOKEN.is_match(token))
    })
}

/// Build a name from an email local part split on `.`, `_` or `-`.
pub fn name_from_email(email: &str) -> Option<String> {
    let (local, _) = email.split_once('@')?;
    let parts: Vec<&str> = local
        .split(['.', '_', '-'])
        .filter(|p| !p.is_empty())
        .collect();

    if parts.len() < 2 || !parts.iter().all(|p| p.chars().all(char::is_alphabetic)) {
        return None;
    }

    Some(
        parts
            .iter()
            .map(|p| capitalize(&p.to_lowercase()))
            .collect::<Vec<_>>()
            .join(" "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::preprocess::clean_lines;

    fn resolve(text: &str, email: Option<&str>) -> Option<ResolvedName> {
        let lines = clean_lines(text);
        let ctx = ResolveContext {
            email,
            ..ResolveContext::new(&lines)
        };
        resolve_name(&ctx)
    }

    #[test]
    fn test_name_shapes() {
        assert!(is_name_line("Jane Smith"));
        assert!(is_name_line("J. R. Hartley"));
        assert!(is_name_line("Mary-Jane O'Neil"));
        assert!(is_name_line("Angus MacLeod"));
        assert!(is_name_line("Jane SMITH"));
        assert!(is_name_line("Zoë Müller"));
        assert!(!is_name_line("ACME"));
        assert!(!is_name_line("jane smith"));
        assert!(!is_name_line("The Quick Brown Fox Jumps"));
    }

    #[test]
    fn test_skips_non_name_lines() {
        let text = "ACME\nwww.acme.com\nChief Executive Officer\n12 George St\nJane Smith";
        let name = resolve(text, None).unwrap();
        assert_eq!(name.value, "Jane Smith");
        assert_eq!(name.anchor, Some(4));
    }

    #[test]
    fn test_skips_company_lines() {
        let name = resolve("Acme Pty Ltd\nJohn Citizen", None).unwrap();
        assert_eq!(name.value, "John Citizen");
    }

    #[test]
    fn test_falls_back_to_email() {
        let name = resolve("0432 123 456", Some("mary_o-brien@acme.com")).unwrap();
        assert_eq!(name.value, "Mary O Brien");
        assert_eq!(name.anchor, None);
    }

    #[test]
    fn test_email_fallback_needs_two_parts() {
        assert_eq!(name_from_email("info@acme.com"), None);
        assert_eq!(name_from_email("jane.smith2@acme.com"), None);
        assert_eq!(resolve("", Some("sales@acme.com")), None);
    }
}

//! Company names derived from domains.

use crate::contact::rules::lexicon::DOMAIN_WORD_SUFFIXES;
use crate::contact::rules::patterns::DOMAIN_TOKEN;

use super::capitalize;

/// Turn a website or domain into a readable company name.
///
/// `https://www.flowpower.com.au` -> "Flow Power", `acme-labs.io` ->
/// "Acme Labs", `acme.com` -> "Acme".
pub fn company_name_from_domain(input: &str) -> Option<String> {
    let label = domain_label(input)?;
    if !label.chars().any(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    let words: Vec<String> = if label.contains(['-', '_']) {
        label
            .split(['-', '_'])
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect()
    } else {
        split_compound(&label)
    };

    Some(
        words
            .iter()
            .map(|w| capitalize(w))
            .collect::<Vec<_>>()
            .join(" "),
    )
}

/// First label of the first domain in `input`, lowercased.
///
/// Strips an email local part, the protocol, a leading `w.` label and `www.`.
pub fn domain_label(input: &str) -> Option<String> {
    let lower = input.trim().to_lowercase();
    let mut rest = lower.rsplit_once('@').map_or(lower.as_str(), |(_, domain)| domain);
    for prefix in ["https://", "http://"] {
        rest = rest.strip_prefix(prefix).unwrap_or(rest);
    }
    for prefix in ["w. ", "w: ", "w:"] {
        rest = rest.strip_prefix(prefix).unwrap_or(rest);
    }
    let rest = rest.trim_start();
    let rest = rest.strip_prefix("www.").unwrap_or(rest);

    let token = DOMAIN_TOKEN.find(rest)?;
    let label = token.as_str().split('.').next()?;
    (!label.is_empty()).then(|| label.to_string())
}

/// Split a one-word label on a known word ending ("flowpower" -> flow, power).
fn split_compound(label: &str) -> Vec<String> {
    for suffix in DOMAIN_WORD_SUFFIXES {
        if let Some(prefix) = label.strip_suffix(suffix) {
            if prefix.len() >= 2 {
                return vec![prefix.to_string(), suffix.to_string()];
            }
        }
    }
    vec![label.to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_name_from_domain() {
        assert_eq!(
            company_name_from_domain("flowpower.com.au"),
            Some("Flow Power".to_string())
        );
        assert_eq!(
            company_name_from_domain("https://www.greenenergy.com"),
            Some("Green Energy".to_string())
        );
        assert_eq!(
            company_name_from_domain("w. acme-labs.io"),
            Some("Acme Labs".to_string())
        );
        assert_eq!(company_name_from_domain("acme.com"), Some("Acme".to_string()));
    }

    #[test]
    fn test_suffix_alone_is_not_split() {
        assert_eq!(company_name_from_domain("media.com"), Some("Media".to_string()));
    }

    #[test]
    fn test_no_domain() {
        assert_eq!(company_name_from_domain("no domain here"), None);
        assert_eq!(company_name_from_domain("123.com"), None);
    }

    #[test]
    fn test_domain_label() {
        assert_eq!(domain_label("WWW.Acme.com.au/contact"), Some("acme".to_string()));
        assert_eq!(domain_label("jane@acme.com"), Some("acme".to_string()));
        assert_eq!(domain_label("jane.smith@acme.com"), Some("acme".to_string()));
        assert_eq!(
            company_name_from_domain("jane.smith@flowpower.com.au"),
            Some("Flow Power".to_string())
        );
    }
}

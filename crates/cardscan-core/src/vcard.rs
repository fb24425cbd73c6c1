//! vCard 3.0 export for parsed contacts.

use crate::models::contact::ParsedContact;

/// Maximum content line length in octets, excluding CRLF.
const MAX_LINE_OCTETS: usize = 75;

/// Render a contact as a vCard 3.0 card.
///
/// Lines end in CRLF and are folded at 75 octets. The address is split into
/// postal components for the `ADR` property.
pub fn to_vcard(contact: &ParsedContact) -> String {
    let mut out = String::new();
    let mut push = |line: String| out.push_str(&fold_line(&line));

    push("BEGIN:VCARD".to_string());
    push("VERSION:3.0".to_string());

    let display_name = contact
        .full_name
        .as_deref()
        .or(contact.company_name.as_deref())
        .unwrap_or_default();
    push(format!("FN:{}", escape_text(display_name)));

    let (family, given) = contact
        .full_name
        .as_deref()
        .map(split_name)
        .unwrap_or_default();
    push(format!("N:{};{};;;", escape_text(family), escape_text(given)));

    if let Some(company) = &contact.company_name {
        push(format!("ORG:{}", escape_text(company)));
    }
    if let Some(title) = &contact.job_title {
        push(format!("TITLE:{}", escape_text(title)));
    }
    if let Some(email) = &contact.email {
        push(format!("EMAIL;TYPE=work:{email}"));
    }
    if let Some(phone) = &contact.phone {
        push(format!("TEL;TYPE=work,voice:{phone}"));
    }
    if let Some(website) = &contact.website {
        push(format!("URL:{website}"));
    }
    if let Some(parts) = contact.split_address().filter(|p| !p.is_empty()) {
        push(format!(
            "ADR;TYPE=work:;;{};{};{};{};{}",
            escape_text(&parts.street),
            escape_text(&parts.city),
            escape_text(&parts.state),
            escape_text(&parts.postcode),
            escape_text(&parts.country),
        ));
    }
    if let Some(linkedin) = &contact.linkedin_url {
        push(format!("X-SOCIALPROFILE;TYPE=linkedin:{linkedin}"));
    }

    push("END:VCARD".to_string());
    out
}

/// Escape a TEXT value: backslash, comma, semicolon and newlines.
pub fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            ',' => result.push_str("\\,"),
            ';' => result.push_str("\\;"),
            '\n' => result.push_str("\\n"),
            '\r' => {}
            _ => result.push(c),
        }
    }
    result
}

/// "Jane Mary Smith" -> ("Smith", "Jane Mary").
fn split_name(full_name: &str) -> (&str, &str) {
    match full_name.trim().rsplit_once(' ') {
        Some((given, family)) => (family, given.trim()),
        None => (full_name.trim(), ""),
    }
}

/// Fold a content line into 75-octet chunks joined by CRLF + space.
fn fold_line(line: &str) -> String {
    let mut result = String::with_capacity(line.len() + 4);
    let mut rest = line;
    let mut limit = MAX_LINE_OCTETS;

    while rest.len() > limit {
        let mut end = limit;
        while !rest.is_char_boundary(end) {
            end -= 1;
        }
        result.push_str(&rest[..end]);
        result.push_str("\r\n ");
        rest = &rest[end..];
        // Continuation lines lose one octet to the leading space
        limit = MAX_LINE_OCTETS - 1;
    }

    result.push_str(rest);
    result.push_str("\r\n");
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn jane() -> ParsedContact {
        ParsedContact {
            full_name: Some("Jane Smith".to_string()),
            job_title: Some("Chief Marketing Officer".to_string()),
            company_name: Some("Flow Power Pty Ltd".to_string()),
            email: Some("jane.smith@flowpower.com.au".to_string()),
            phone: Some("(043) 212-3456".to_string()),
            website: Some("https://www.flowpower.com.au".to_string()),
            address: Some("45B/2 Park Street, Sydney NSW 2000 Australia".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_full_card() {
        let card = to_vcard(&jane());
        let expected = "BEGIN:VCARD\r\n\
                        VERSION:3.0\r\n\
                        FN:Jane Smith\r\n\
                        N:Smith;Jane;;;\r\n\
                        ORG:Flow Power Pty Ltd\r\n\
                        TITLE:Chief Marketing Officer\r\n\
                        EMAIL;TYPE=work:jane.smith@flowpower.com.au\r\n\
                        TEL;TYPE=work,voice:(043) 212-3456\r\n\
                        URL:https://www.flowpower.com.au\r\n\
                        ADR;TYPE=work:;;45B/2 Park Street;Sydney;NSW;2000;Australia\r\n\
                        END:VCARD\r\n";
        assert_eq!(card, expected);
    }

    #[test]
    fn test_company_only_card() {
        let contact = ParsedContact {
            company_name: Some("Acme, Inc.".to_string()),
            linkedin_url: Some("https://linkedin.com/company/acme".to_string()),
            ..Default::default()
        };
        let card = to_vcard(&contact);
        assert!(card.contains("FN:Acme\\, Inc.\r\n"));
        assert!(card.contains("N:;;;;\r\n"));
        assert!(card.contains("X-SOCIALPROFILE;TYPE=linkedin:https://linkedin.com/company/acme\r\n"));
        assert!(!card.contains("ADR"));
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("a,b;c\\d\ne"), "a\\,b\\;c\\\\d\\ne");
    }

    #[test]
    fn test_folds_long_lines() {
        let title = "Senior Vice President of Global Strategic Partnerships and Business Development";
        let contact = ParsedContact {
            job_title: Some(title.to_string()),
            ..Default::default()
        };
        let card = to_vcard(&contact);
        assert!(card.lines().all(|l| l.len() <= MAX_LINE_OCTETS));
        assert!(card.replace("\r\n ", "").contains(&format!("TITLE:{title}\r\n")));
    }
}

//! Job title resolution.

use tracing::debug;

use super::{is_excluded_line, is_job_title, ResolveContext};

/// Find the job title: the first line after the name anchor that contains a
/// job-title word and is not a contact, company or URL line.
pub fn resolve_title(ctx: &ResolveContext<'_>) -> Option<String> {
    let found = ctx.lines.iter().skip(ctx.after_anchor()).find(|line| {
        let text = line.text.as_str();
        !is_excluded_line(text)
            && ctx.company.is_none_or(|company| !text.eq_ignore_ascii_case(company))
            && is_job_title(text)
    })?;

    debug!("job title at line {}: {:?}", found.number, found.text);
    Some(found.text.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::preprocess::clean_lines;

    #[test]
    fn test_title_after_anchor() {
        let lines = clean_lines("Senior Partner Search\nJane Smith\nHead of Product");
        let ctx = ResolveContext {
            anchor: Some(1),
            ..ResolveContext::new(&lines)
        };
        assert_eq!(resolve_title(&ctx), Some("Head of Product".to_string()));
    }

    #[test]
    fn test_skips_company_and_contact_lines() {
        let lines = clean_lines("Jane Smith\nAcme Marketing Pty Ltd\nsales@acme.com\nMarketing Director");
        let ctx = ResolveContext {
            anchor: Some(0),
            ..ResolveContext::new(&lines)
        };
        assert_eq!(resolve_title(&ctx), Some("Marketing Director".to_string()));
    }

    #[test]
    fn test_skips_resolved_company() {
        let lines = clean_lines("Jane Smith\nProduct Labs\nProduct Owner");
        let ctx = ResolveContext {
            anchor: Some(0),
            company: Some("Product Labs"),
            ..ResolveContext::new(&lines)
        };
        assert_eq!(resolve_title(&ctx), Some("Product Owner".to_string()));
    }

    #[test]
    fn test_scans_from_top_without_anchor() {
        let lines = clean_lines("CTO\n0432 123 456");
        let ctx = ResolveContext::new(&lines);
        assert_eq!(resolve_title(&ctx), Some("CTO".to_string()));
    }

    #[test]
    fn test_no_title() {
        let lines = clean_lines("Jane Smith\nAcme Pty Ltd");
        let ctx = ResolveContext {
            anchor: Some(0),
            ..ResolveContext::new(&lines)
        };
        assert_eq!(resolve_title(&ctx), None);
    }
}

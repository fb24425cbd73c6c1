//! Check-and-repair pass over the resolved company name.

use tracing::debug;

use super::company::{CompanyCandidate, CompanySignal};
use super::domain::{company_name_from_domain, domain_label};
use super::{is_contact_line, is_job_title, looks_like_address, normalize_for_compare, ResolveContext};
use crate::contact::preprocess::Line;
use crate::contact::rules::email_domain;
use crate::contact::rules::lexicon::is_generic_mail_domain;
use crate::contact::rules::patterns::{has_company_suffix, DOMAIN_TOKEN, URL_MARKER};
use crate::contact::rules::website::is_valid_domain;

/// Validate the resolved company and repair it when it is implausible.
///
/// A candidate survives when it does not look like an address, a URL or the
/// person's name. Weak (suffix-less) candidates must also agree with the
/// company domain when one is known. Otherwise the lines are re-scanned in a
/// fixed tier order; see [`repair`].
pub fn validate_company(
    ctx: &ResolveContext<'_>,
    candidate: Option<CompanyCandidate>,
) -> Option<CompanyCandidate> {
    let domain = company_domain(ctx);
    let label = domain.as_deref().and_then(domain_label);

    if let Some(candidate) = candidate {
        if is_plausible(ctx, &candidate, label.as_deref()) {
            return Some(candidate);
        }
        debug!("rejected company candidate {:?}", candidate.name);
        return repair(ctx, Some(&candidate.name), domain.as_deref(), label.as_deref());
    }

    repair(ctx, None, domain.as_deref(), label.as_deref())
}

fn is_plausible(ctx: &ResolveContext<'_>, candidate: &CompanyCandidate, label: Option<&str>) -> bool {
    let name = candidate.name.as_str();
    if looks_like_address(name) || looks_like_url(name) || is_same_as_person(ctx, name) {
        return false;
    }

    match candidate.signal {
        CompanySignal::Strong => has_company_suffix(name),
        CompanySignal::Weak => {
            label.is_none_or(|label| normalize_for_compare(name).contains(label))
        }
        CompanySignal::Derived | CompanySignal::Fallback => true,
    }
}

/// Re-derive the company name, trying in order:
///
/// 1. a suffixed line whose letters contain the domain label
/// 2. any suffixed line
/// 3. a name built from the website or email domain
/// 4. a line containing the domain label
/// 5. with no domain at all, the first leftover line
fn repair(
    ctx: &ResolveContext<'_>,
    rejected: Option<&str>,
    domain: Option<&str>,
    label: Option<&str>,
) -> Option<CompanyCandidate> {
    let remaining: Vec<(usize, &Line)> = ctx
        .lines
        .iter()
        .enumerate()
        .filter(|(idx, line)| {
            let text = line.text.as_str();
            Some(*idx) != ctx.anchor
                && !is_contact_line(text)
                && rejected.is_none_or(|r| text != r)
                && !is_same_as_person(ctx, text)
                && !looks_like_address(text)
                && !is_domain_shaped(text)
        })
        .collect();

    let pick = |tier: &str, signal: CompanySignal, (idx, line): &(usize, &Line)| {
        debug!("company repaired via {} at line {}: {:?}", tier, line.number, line.text);
        CompanyCandidate::new(line.text.clone(), signal, Some(*idx))
    };

    if let Some(label) = label {
        if let Some(found) = remaining
            .iter()
            .find(|(_, l)| has_company_suffix(&l.text) && normalize_for_compare(&l.text).contains(label))
        {
            return Some(pick("domain-matched suffix", CompanySignal::Strong, found));
        }
    }

    if let Some(found) = remaining.iter().find(|(_, l)| has_company_suffix(&l.text)) {
        return Some(pick("suffix", CompanySignal::Strong, found));
    }

    if let Some(derived) = domain
        .and_then(company_name_from_domain)
        .filter(|name| !is_same_as_person(ctx, name))
    {
        debug!("company derived from domain: {:?}", derived);
        return Some(CompanyCandidate::new(derived, CompanySignal::Derived, None));
    }

    if let Some(label) = label {
        if let Some(found) = remaining
            .iter()
            .find(|(_, l)| normalize_for_compare(&l.text).contains(label))
        {
            return Some(pick("domain label", CompanySignal::Weak, found));
        }
        return None;
    }

    remaining
        .iter()
        .find(|(_, l)| (2..=60).contains(&l.text.chars().count()) && !is_job_title(&l.text))
        .map(|found| pick("fallback", CompanySignal::Fallback, found))
}

/// The domain that identifies the company: the website, or the email domain
/// when it is not a consumer mail provider.
fn company_domain(ctx: &ResolveContext<'_>) -> Option<String> {
    if let Some(website) = ctx.website {
        return Some(website.to_string());
    }
    ctx.email
        .and_then(email_domain)
        .filter(|d| !is_generic_mail_domain(d))
        .map(str::to_string)
}

fn is_same_as_person(ctx: &ResolveContext<'_>, text: &str) -> bool {
    ctx.full_name.is_some_and(|name| {
        let name = normalize_for_compare(name);
        !name.is_empty() && name == normalize_for_compare(text)
    })
}

/// A bare URL or domain token such as `acme.com.au`.
fn looks_like_url(text: &str) -> bool {
    let text = text.trim();
    URL_MARKER.is_match(text)
        || (!text.contains(char::is_whitespace) && is_valid_domain(text.trim_end_matches('/')))
}

/// A single dotted token like `francisco.guerrero`, valid domain or not.
fn is_domain_shaped(text: &str) -> bool {
    DOMAIN_TOKEN
        .find(text)
        .is_some_and(|m| m.start() == 0 && m.end() == text.len())
}

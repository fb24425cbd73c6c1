//! Common regex patterns for contact extraction.

use lazy_static::lazy_static;
use regex::Regex;

use super::lexicon::AU_STATES;

lazy_static! {
    // Email pattern
    pub static ref EMAIL: Regex = Regex::new(
        r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}"
    ).unwrap();

    // Phone patterns. Separators never include a line break.
    pub static ref PHONE: Regex = Regex::new(
        r"\+?\(?\d[\d \t().-]{5,}\d"
    ).unwrap();

    pub static ref PHONE_LABEL: Regex = Regex::new(
        r"(?i)^(?:m\s*:|t\s*:|p\s*:|mob(?:ile)?\b|tel(?:ephone)?\b|phone\b|ph\b|cell\b)"
    ).unwrap();

    // Business registration numbers look like phone numbers
    pub static ref REGISTRATION_LABEL: Regex = Regex::new(
        r"(?i)\b(?:abn|acn|arbn|gst|vat|ein)\b"
    ).unwrap();

    // Any "label:" prefix declaring the type of the rest of the line
    pub static ref FIELD_LABEL: Regex = Regex::new(
        r"(?i)^(?:[a-z]{1,2}|mob|tel|fax|ph|web|url|www|mobile|phone|email|e-mail|website|office|direct|address|linkedin|skype|twitter)\s*:|^[wW]\.\s"
    ).unwrap();

    // Website patterns
    pub static ref WEBSITE_LABEL: Regex = Regex::new(
        r"(?i)^(?:(?:web|website|url|www)\s*:|w\s*:|w\.\s)\s*(\S+)"
    ).unwrap();

    pub static ref EXPLICIT_URL: Regex = Regex::new(
        r#"(?i)(?:https?://|www\.)[^\s,;<>"'()]+"#
    ).unwrap();

    pub static ref BARE_DOMAIN: Regex = Regex::new(
        r#"(?i)\b[a-z0-9](?:[a-z0-9-]*[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]*[a-z0-9])?)+(?:/[^\s,;<>"'()]*)?"#
    ).unwrap();

    // First domain-shaped token in a string
    pub static ref DOMAIN_TOKEN: Regex = Regex::new(
        r"(?i)[a-z0-9][a-z0-9_-]*(?:\.[a-z0-9-]+)+"
    ).unwrap();

    pub static ref URL_MARKER: Regex = Regex::new(
        r"(?i)https?://|www\.|\.(?:com|net|org|edu|gov|io|co|ai|app|dev|biz|info|au|uk|nz)\b"
    ).unwrap();

    // LinkedIn profile or company page
    pub static ref LINKEDIN: Regex = Regex::new(
        r"(?i)(?:https?://)?(?:[a-z]{2,3}\.)?linkedin\.com/(?:in|company)/[a-z0-9_%-]+/?"
    ).unwrap();

    // Legal company forms, tolerant of trailing periods
    pub static ref COMPANY_SUFFIX: Regex = Regex::new(
        r"(?i)\b(?:pty\.?\s+ltd|pty\.?\s+limited|pte\.?\s+ltd|sdn\.?\s+bhd|ltd|limited|inc|incorporated|llc|llp|plc|corp|corporation|gmbh|sarl|srl|pty|bhd)\b\.?"
    ).unwrap();

    // Short suffixes that are only safe with exact casing
    pub static ref COMPANY_SUFFIX_CASED: Regex = Regex::new(
        r"(?:^|\s)(?:AG|AB|NV|BV|KK|Oy|S\.A\.|S\.p\.A\.|B\.V\.|N\.V\.)(?:\s|,|$)"
    ).unwrap();

    // Person-name token shapes: Capitalized (incl. accented), initial,
    // hyphenated, apostrophe, Mc/Mac
    pub static ref NAME_TOKEN: Regex = Regex::new(
        r"^(?:\p{Lu}\p{Ll}+(?:-\p{Lu}\p{Ll}+)*|\p{Lu}\.?|\p{Lu}['’]\p{Lu}?\p{Ll}+|Ma?c\p{Lu}\p{Ll}+)$"
    ).unwrap();

    // ALL-CAPS surname
    pub static ref CAPS_NAME_TOKEN: Regex = Regex::new(
        r"^\p{Lu}{2,}(?:-\p{Lu}{2,})*$"
    ).unwrap();

    // Address patterns
    pub static ref AU_STATE: Regex = Regex::new(
        &format!(r"(?i)\b(?:{})\b", AU_STATES.join("|"))
    ).unwrap();

    pub static ref AU_STATE_CASED: Regex = Regex::new(
        &format!(r"\b(?:{}|Vic|Qld|Tas)\b", AU_STATES.join("|"))
    ).unwrap();

    /// A state token directly followed by its postcode (`NSW 2000`).
    pub static ref AU_STATE_POSTCODE: Regex = Regex::new(
        &format!(r"\b(?:{}|Vic|Qld|Tas)[ \t]+\d{{4}}\b", AU_STATES.join("|"))
    ).unwrap();

    pub static ref AU_POSTCODE: Regex = Regex::new(
        r"\b\d{4}\b"
    ).unwrap();

    pub static ref STREET_KEYWORD: Regex = Regex::new(
        r"(?i)\b(?:street|st|road|rd|avenue|ave|boulevard|blvd|drive|dr|lane|ln|way|place|pl|court|ct|terrace|tce|parade|pde|highway|hwy|crescent|cres|close|square|sq|circuit|cct|esplanade|floor|level|lvl|suite|ste|unit|shop|building|bldg|box|rue|via|calle|plaza|platz|strasse|straße|str|weg|avenida|chemin)\b"
    ).unwrap();

    pub static ref PO_BOX: Regex = Regex::new(
        r"(?i)\b(?:p\.?\s?o\.?|gpo|locked\s+bag)\s*box\b|\blocked\s+bag\b"
    ).unwrap();

    pub static ref ADDRESS_HEADING: Regex = Regex::new(
        r"(?i)^(?:(?:registered|postal|mailing|office|head|physical|street|business|billing)\s+)*(?:address|office)\s*:?$"
    ).unwrap();

    // "Address:" style prefix in front of an address
    pub static ref ADDRESS_LABEL: Regex = Regex::new(
        r"(?i)^(?:a|addr|address|location|office address|postal address)\s*:\s*"
    ).unwrap();

    pub static ref POSTAL_CONTINUATION: Regex = Regex::new(
        r"(?i)\b\d{4,5}\b|\bcedex\b"
    ).unwrap();
}

/// True if the line contains a legal company form (Ltd, Inc, GmbH, ...).
pub fn has_company_suffix(line: &str) -> bool {
    COMPANY_SUFFIX.is_match(line) || COMPANY_SUFFIX_CASED.is_match(line)
}

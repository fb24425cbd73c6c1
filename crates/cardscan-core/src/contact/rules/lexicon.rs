//! Curated vocabularies used by the extractors and resolvers.
//!
//! All lists are lowercase. Lookups go through the `is_*` helpers, which
//! build their sets once on first use.

use std::collections::HashSet;

use lazy_static::lazy_static;

/// Closing lines that precede a signature block.
pub const SIGN_OFFS: &[&str] = &[
    "regards",
    "kind regards",
    "kindest regards",
    "best regards",
    "warm regards",
    "warmest regards",
    "many regards",
    "thanks and regards",
    "thanks & regards",
    "sincerely",
    "yours sincerely",
    "yours faithfully",
    "yours truly",
    "cheers",
    "thanks",
    "many thanks",
    "thank you",
    "with thanks",
    "best",
    "best wishes",
    "all the best",
    "rgds",
    "talk soon",
];

/// Phrases that open an email disclaimer; everything from there on is dropped.
pub const DISCLAIMER_TRIGGERS: &[&str] = &[
    "confidentiality notice",
    "this email message is intended",
    "this e-mail message is intended",
    "this email and any attachments",
    "this e-mail and any attachments",
    "this message and any attachments",
    "this message is intended only",
    "this email is confidential",
    "this e-mail is confidential",
    "the information contained in this",
    "if you have received this email in error",
    "if you have received this message in error",
    "if you are not the intended recipient",
    "privileged and confidential",
    "please consider the environment before printing",
    "disclaimer:",
];

/// Words that mark a line as a job title.
pub const TITLE_WORDS: &[&str] = &[
    // C-level and abbreviations
    "ceo", "cfo", "cto", "coo", "cmo", "cio", "cpo", "cro", "cso", "ciso", "vp", "svp", "evp",
    "avp", "md", "gm",
    // Seniority
    "chief", "senior", "sr", "junior", "jr", "lead", "head", "principal", "director", "manager",
    "president", "vice", "executive", "officer", "partner", "founder", "co-founder", "cofounder",
    "owner", "associate", "assistant", "intern", "coordinator", "supervisor", "chairman",
    "chairperson", "chair", "trustee",
    // Functional
    "engineer", "developer", "designer", "consultant", "analyst", "architect", "specialist",
    "advisor", "adviser", "accountant", "sales", "marketing", "operations", "product",
    "recruiter", "counsel", "attorney", "lawyer", "solicitor", "barrister", "scientist",
    "researcher", "strategist", "administrator", "representative", "broker", "agent", "editor",
    "producer", "technician", "secretary", "treasurer", "professor", "lecturer", "teacher",
    "coach", "therapist", "physician", "nurse", "pharmacist", "planner", "estimator", "surveyor",
];

/// Top-level domains accepted without further checks.
pub const KNOWN_TLDS: &[&str] = &[
    "com", "net", "org", "edu", "gov", "mil", "int", "io", "co", "ai", "app", "dev", "biz",
    "info", "me", "tv", "us", "uk", "au", "nz", "ca", "de", "fr", "es", "it", "nl", "be", "ch",
    "at", "se", "no", "dk", "fi", "ie", "pt", "pl", "jp", "cn", "sg", "hk", "tw", "in", "id",
    "my", "ph", "th", "vn", "kr", "za", "br", "mx", "ar", "cl", "eu", "asia", "global", "agency",
    "studio", "tech", "digital", "solutions", "group", "consulting", "media", "design", "cloud",
    "online", "site", "store", "shop", "xyz", "health", "law", "finance", "energy", "email",
    "network", "systems", "services", "partners", "capital", "ventures", "labs", "works",
];

/// Two-label public suffixes such as `com.au`.
pub const COMPOUND_TLDS: &[&str] = &[
    "com.au", "net.au", "org.au", "edu.au", "gov.au", "asn.au", "id.au", "co.uk", "org.uk",
    "ac.uk", "gov.uk", "ltd.uk", "plc.uk", "co.nz", "org.nz", "net.nz", "govt.nz", "ac.nz",
    "co.jp", "com.sg", "com.hk", "com.my", "co.za", "com.br", "co.in", "com.cn", "com.mx",
];

/// Consumer mail providers that say nothing about the sender's company.
pub const GENERIC_MAIL_DOMAINS: &[&str] = &[
    "gmail.com", "googlemail.com", "outlook.com", "outlook.com.au", "hotmail.com",
    "hotmail.co.uk", "live.com", "live.com.au", "msn.com", "yahoo.com", "yahoo.com.au",
    "yahoo.co.uk", "ymail.com", "icloud.com", "me.com", "mac.com", "aol.com", "protonmail.com",
    "proton.me", "gmx.com", "mail.com", "zoho.com", "fastmail.com", "bigpond.com",
    "bigpond.net.au", "optusnet.com.au", "tpg.com.au", "iinet.net.au",
];

/// Common given names, used to spot `first.last` tokens posing as domains.
pub const FIRST_NAMES: &[&str] = &[
    "james", "john", "robert", "michael", "william", "david", "richard", "joseph", "thomas",
    "charles", "daniel", "matthew", "anthony", "mark", "paul", "steven", "andrew", "peter",
    "kevin", "brian", "george", "edward", "jason", "ryan", "jacob", "nicholas", "tom", "sam",
    "ben", "chris", "alex", "jack", "luke", "adam", "tim", "nick", "dan", "mike", "steve", "joe",
    "mary", "patricia", "jennifer", "linda", "elizabeth", "susan", "jessica", "sarah", "karen",
    "nancy", "lisa", "emma", "olivia", "sophie", "emily", "anna", "jane", "kate", "rachel",
    "laura", "amy", "michelle", "hannah", "grace", "chloe", "lucy", "maria", "francisco", "jose",
    "juan", "carlos", "luis", "wei", "ming", "raj", "priya", "amit", "mohammed", "ahmed", "ali",
];

/// Common family names, same purpose as [`FIRST_NAMES`].
pub const SURNAMES: &[&str] = &[
    "smith", "jones", "williams", "brown", "taylor", "wilson", "johnson", "lee", "martin",
    "white", "anderson", "thompson", "nguyen", "tran", "chen", "wang", "li", "zhang", "liu",
    "yang", "huang", "wu", "zhou", "yu", "lin", "kim", "park", "patel", "singh", "kumar", "khan",
    "garcia", "martinez", "rodriguez", "lopez", "gonzalez", "guerrero", "walker", "harris",
    "clark", "lewis", "young", "king", "wright", "scott", "green", "baker", "adams", "hall",
    "wood", "kelly", "murphy", "campbell", "stewart", "morris", "cooper",
];

/// Word endings split off a one-word domain label ("flowpower" -> "flow power").
pub const DOMAIN_WORD_SUFFIXES: &[&str] = &[
    "solutions", "australia", "consulting", "services", "partners", "capital", "digital",
    "systems", "network", "energy", "global", "health", "group", "power", "media", "works",
    "labs", "tech", "homes", "legal",
];

/// Australian state and territory abbreviations.
pub const AU_STATES: &[&str] = &["NSW", "VIC", "QLD", "WA", "SA", "TAS", "ACT", "NT"];

lazy_static! {
    static ref SIGN_OFF_SET: HashSet<&'static str> = SIGN_OFFS.iter().copied().collect();
    static ref TITLE_WORD_SET: HashSet<&'static str> = TITLE_WORDS.iter().copied().collect();
    static ref TLD_SET: HashSet<&'static str> = KNOWN_TLDS.iter().copied().collect();
    static ref COMPOUND_TLD_SET: HashSet<&'static str> = COMPOUND_TLDS.iter().copied().collect();
    static ref GENERIC_MAIL_SET: HashSet<&'static str> =
        GENERIC_MAIL_DOMAINS.iter().copied().collect();
    static ref FIRST_NAME_SET: HashSet<&'static str> = FIRST_NAMES.iter().copied().collect();
    static ref SURNAME_SET: HashSet<&'static str> = SURNAMES.iter().copied().collect();
}

/// True if the line is nothing but a sign-off such as "Kind regards,".
pub fn is_sign_off(line: &str) -> bool {
    let normalized = line
        .trim()
        .trim_end_matches(|c: char| c.is_ascii_punctuation() || c.is_whitespace())
        .to_lowercase();
    SIGN_OFF_SET.contains(normalized.as_str())
}

/// True if the line opens a legal disclaimer.
pub fn is_disclaimer_start(line: &str) -> bool {
    let lower = line.to_lowercase();
    DISCLAIMER_TRIGGERS.iter().any(|t| lower.contains(t))
}

/// True if any word of the line is a job-title word.
pub fn has_title_word(line: &str) -> bool {
    line.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '-'))
        .any(|word| TITLE_WORD_SET.contains(word))
}

pub fn is_known_tld(label: &str) -> bool {
    TLD_SET.contains(label)
}

pub fn is_compound_tld(suffix: &str) -> bool {
    COMPOUND_TLD_SET.contains(suffix)
}

pub fn is_generic_mail_domain(domain: &str) -> bool {
    GENERIC_MAIL_SET.contains(domain.to_lowercase().as_str())
}

pub fn is_first_name(word: &str) -> bool {
    FIRST_NAME_SET.contains(word)
}

pub fn is_surname(word: &str) -> bool {
    SURNAME_SET.contains(word)
}

//! Output formatting shared by `parse` and `batch`.

use cardscan_core::models::OutputFormat;
use cardscan_core::{to_vcard, ParsedContact, SplitAddress};

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
    /// vCard 3.0
    Vcard,
}

impl Format {
    /// File extension for outputs in this format.
    pub fn extension(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Csv => "csv",
            Format::Text => "txt",
            Format::Vcard => "vcf",
        }
    }
}

impl From<OutputFormat> for Format {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => Format::Json,
            OutputFormat::Csv => Format::Csv,
            OutputFormat::Text => Format::Text,
            OutputFormat::Vcard => Format::Vcard,
        }
    }
}

const CONTACT_COLUMNS: [&str; 9] = [
    "full_name",
    "job_title",
    "company_name",
    "email",
    "phone",
    "website",
    "linkedin_url",
    "linkedin_search_url",
    "address",
];

const ADDRESS_COLUMNS: [&str; 5] = ["street", "city", "state", "postcode", "country"];

pub fn format_contact(
    contact: &ParsedContact,
    format: Format,
    split_address: bool,
) -> anyhow::Result<String> {
    let parts = if split_address {
        Some(contact.split_address().unwrap_or_default())
    } else {
        None
    };

    match format {
        Format::Json => format_json(contact, parts.as_ref()),
        Format::Csv => format_csv(contact, parts.as_ref()),
        Format::Text => Ok(format_text(contact, parts.as_ref())),
        Format::Vcard => Ok(to_vcard(contact)),
    }
}

fn format_json(contact: &ParsedContact, parts: Option<&SplitAddress>) -> anyhow::Result<String> {
    let mut json = serde_json::to_value(contact)?;
    if let (Some(parts), Some(obj)) = (parts, json.as_object_mut()) {
        obj.insert("splitAddress".to_string(), serde_json::to_value(parts)?);
    }
    Ok(serde_json::to_string_pretty(&json)?)
}

fn format_csv(contact: &ParsedContact, parts: Option<&SplitAddress>) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    let mut header: Vec<&str> = CONTACT_COLUMNS.to_vec();
    if parts.is_some() {
        header.extend(ADDRESS_COLUMNS);
    }
    wtr.write_record(&header)?;

    let mut record = contact_record(contact);
    if let Some(parts) = parts {
        record.extend([
            parts.street.clone(),
            parts.city.clone(),
            parts.state.clone(),
            parts.postcode.clone(),
            parts.country.clone(),
        ]);
    }
    wtr.write_record(&record)?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

/// Contact fields in [`CONTACT_COLUMNS`] order, absent fields empty.
pub fn contact_record(contact: &ParsedContact) -> Vec<String> {
    [
        &contact.full_name,
        &contact.job_title,
        &contact.company_name,
        &contact.email,
        &contact.phone,
        &contact.website,
        &contact.linkedin_url,
        &contact.linkedin_search_url,
        &contact.address,
    ]
    .into_iter()
    .map(|field| field.clone().unwrap_or_default())
    .collect()
}

fn format_text(contact: &ParsedContact, parts: Option<&SplitAddress>) -> String {
    let mut output = String::new();

    let rows = [
        ("Name", &contact.full_name),
        ("Title", &contact.job_title),
        ("Company", &contact.company_name),
        ("Email", &contact.email),
        ("Phone", &contact.phone),
        ("Website", &contact.website),
        ("LinkedIn", &contact.linkedin_url),
        ("LinkedIn search", &contact.linkedin_search_url),
        ("Address", &contact.address),
    ];
    for (label, value) in rows {
        if let Some(value) = value {
            output.push_str(&format!("{label}: {value}\n"));
        }
    }

    if let Some(parts) = parts.filter(|p| !p.is_empty()) {
        output.push_str("\nPostal address:\n");
        output.push_str(&format!("  Street:   {}\n", parts.street));
        output.push_str(&format!("  City:     {}\n", parts.city));
        output.push_str(&format!("  State:    {}\n", parts.state));
        output.push_str(&format!("  Postcode: {}\n", parts.postcode));
        output.push_str(&format!("  Country:  {}\n", parts.country));
    }

    if output.is_empty() {
        output.push_str("No contact details found\n");
    }

    output
}

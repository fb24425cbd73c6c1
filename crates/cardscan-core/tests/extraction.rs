use cardscan_core::{parse_contact, split_address, to_vcard, ContactParser, ParsedContact, RuleContactParser};
use pretty_assertions::assert_eq;

const FLOW_POWER_CARD: &str = "Jane Smith\n\
                               Chief Marketing Officer\n\
                               Flow Power Pty Ltd\n\
                               45B/2 Park Street, Sydney NSW 2000 Australia\n\
                               m: 0432 123 456\n\
                               e: jane.smith@flowpower.com.au\n\
                               w: www.flowpower.com.au";

#[test]
fn test_business_card() {
    let contact = parse_contact(FLOW_POWER_CARD);

    assert_eq!(
        contact,
        ParsedContact {
            full_name: Some("Jane Smith".to_string()),
            job_title: Some("Chief Marketing Officer".to_string()),
            company_name: Some("Flow Power Pty Ltd".to_string()),
            email: Some("jane.smith@flowpower.com.au".to_string()),
            phone: Some("(043) 212-3456".to_string()),
            website: Some("https://www.flowpower.com.au".to_string()),
            linkedin_url: None,
            linkedin_search_url: Some(
                "https://www.google.com/search?q=Jane+Smith+Flow+Power+Pty+Ltd+LinkedIn".to_string()
            ),
            address: Some("45B/2 Park Street, Sydney NSW 2000 Australia".to_string()),
        }
    );
}

#[test]
fn test_website_from_company_email() {
    let contact = parse_contact("John Doe\nSales Manager\njohn.doe@acme.com");
    assert_eq!(contact.website.as_deref(), Some("https://www.acme.com"));

    let contact = parse_contact("John Doe\nSales Manager\njohn.doe@gmail.com");
    assert_eq!(contact.website, None);
}

#[test]
fn test_weak_company_signal() {
    let text = "John Doe\nSenior Engineer\nExampleCorp Solutions\np: 02 9000 1234";
    let contact = parse_contact(text);
    assert_eq!(contact.company_name.as_deref(), Some("ExampleCorp Solutions"));

    let text = "John Doe\nSenior Engineer\nExampleCorp Solutions\njohn@examplecorp.com";
    let contact = parse_contact(text);
    assert_eq!(contact.company_name.as_deref(), Some("ExampleCorp Solutions"));
}

#[test]
fn test_personal_name_is_not_a_website() {
    let text = "Francisco Guerrero\ne: francisco.guerrero@gmail.com\nfrancisco.guerrero";
    let contact = parse_contact(text);
    assert_eq!(contact.website, None);
    assert_eq!(contact.company_name, None);

    let text = "Francisco Guerrero\nfrancisco.guerrero\ne: francisco.guerrero@bluewave.com.au";
    let contact = parse_contact(text);
    assert_eq!(contact.website.as_deref(), Some("https://www.bluewave.com.au"));
}

#[test]
fn test_disclaimer_only_input() {
    let text = "CONFIDENTIALITY NOTICE: This email message is intended only for the \
                addressee.\nIf you are not the intended recipient, delete it.";
    let contact = parse_contact(text);
    assert_eq!(contact, ParsedContact::default());
    assert_eq!(serde_json::to_string(&contact).unwrap(), "{}");
}

#[test]
fn test_signature_with_sign_off() {
    let text = "Kind regards,\n\
                Cheers\n\
                Sam O'Neil\n\
                Product Designer | Bluewave Digital\n\
                sam@bluewave.io";
    let contact = parse_contact(text);

    assert_eq!(contact.full_name.as_deref(), Some("Sam O'Neil"));
    assert_eq!(
        contact.job_title.as_deref(),
        Some("Product Designer | Bluewave Digital")
    );
    assert_eq!(contact.website.as_deref(), Some("https://www.bluewave.io"));
    assert_eq!(contact.company_name.as_deref(), Some("Bluewave"));
}

#[test]
fn test_parsing_is_deterministic() {
    let parser = RuleContactParser::new();
    let first = parser.parse(FLOW_POWER_CARD);
    let second = parser.parse(FLOW_POWER_CARD);
    assert_eq!(first.contact, second.contact);
    assert_eq!(first.lines, second.lines);
}

#[test]
fn test_absent_fields_are_not_null() {
    let contact = parse_contact("Jane Smith\nm: 0432 123 456");
    let json = serde_json::to_value(&contact).unwrap();
    let obj = json.as_object().unwrap();

    assert!(obj.values().all(|v| v.is_string()));
    assert!(!obj.contains_key("email"));
    assert!(!obj.contains_key("address"));
}

#[test]
fn test_split_extracted_address() {
    let contact = parse_contact(FLOW_POWER_CARD);
    let parts = contact.split_address().unwrap();

    assert_eq!(parts.street, "45B/2 Park Street");
    assert_eq!(parts.city, "Sydney");
    assert_eq!(parts.state, "NSW");
    assert_eq!(parts.postcode, "2000");
    assert_eq!(parts.country, "Australia");
    assert_eq!(split_address(contact.address.as_deref().unwrap()), parts);
}

#[test]
fn test_vcard_export() {
    let card = to_vcard(&parse_contact(FLOW_POWER_CARD));
    assert!(card.starts_with("BEGIN:VCARD\r\nVERSION:3.0\r\n"));
    assert!(card.contains("ORG:Flow Power Pty Ltd\r\n"));
    assert!(card.contains("ADR;TYPE=work:;;45B/2 Park Street;Sydney;NSW;2000;Australia\r\n"));
    assert!(card.ends_with("END:VCARD\r\n"));
}

use once_cell::sync::Lazy;
use regex::Regex;

use super::models::ContactInfo;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap());
// A single-line run of digits and separators; digit count is checked afterwards.
static PHONE_CANDIDATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\+?\(?[0-9][0-9 \t\-\.\(\)]{8,}[0-9]\)?").unwrap());
static LINKEDIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)linkedin\.com/in/[\w\-]+").unwrap());

const MIN_PHONE_DIGITS: usize = 10;

pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

pub fn extract_phone(text: &str) -> Option<String> {
    PHONE_CANDIDATE_RE
        .find_iter(text)
        .map(|m| m.as_str())
        .find(|candidate| candidate.chars().filter(char::is_ascii_digit).count() >= MIN_PHONE_DIGITS)
        .map(clean_phone)
        .filter(|phone| !phone.is_empty())
}

pub fn extract_linkedin(text: &str) -> Option<String> {
    LINKEDIN_RE.find(text).map(|m| m.as_str().to_string())
}

/// Contact fields found anywhere in the document. Fields that are not found
/// stay empty.
pub fn extract_contact_info(text: &str) -> ContactInfo {
    ContactInfo {
        email: extract_email(text).unwrap_or_default(),
        phone: extract_phone(text).unwrap_or_default(),
        linkedin: extract_linkedin(text).unwrap_or_default(),
        ..ContactInfo::default()
    }
}

/// Applies `Label: value` lines from a contact section on top of the
/// document-wide matches. Blank values keep what was there.
pub fn apply_contact_overrides(contact: &mut ContactInfo, lines: &[String]) {
    for line in lines {
        let lower = line.to_lowercase();
        let Some((_, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();
        if value.is_empty() {
            continue;
        }

        if lower.contains("email") {
            contact.email = value.to_string();
        }
        if lower.contains("phone") {
            contact.phone = value.to_string();
        }
        if lower.contains("linkedin") {
            contact.linkedin = value.to_string();
        }
    }
}

fn clean_phone(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '(' | ')' | ' '))
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_email_finds_first_address() {
        assert_eq!(
            extract_email("Reach me: Jane.Doe@Example.com or jd@other.org"),
            Some("Jane.Doe@Example.com".to_string())
        );
        assert_eq!(extract_email("no address here"), None);
    }

    #[test]
    fn extract_phone_requires_ten_digits() {
        assert_eq!(
            extract_phone("Phone +1 (555) 123-4567"),
            Some("+1 (555) 123-4567".to_string())
        );
        assert_eq!(
            extract_phone("call 555.123.4567 today"),
            Some("5551234567".to_string())
        );
        assert_eq!(extract_phone("ext 12345"), None);
    }

    #[test]
    fn extract_phone_ignores_year_ranges() {
        let text = "Acme Corp\n2019 - 2022\nDid things";
        assert_eq!(extract_phone(text), None);
    }

    #[test]
    fn extract_phone_does_not_span_lines() {
        let text = "12345\n67890\n";
        assert_eq!(extract_phone(text), None);
    }

    #[test]
    fn extract_linkedin_is_case_insensitive() {
        assert_eq!(
            extract_linkedin("see https://www.LinkedIn.com/in/jane-doe_1 for more"),
            Some("LinkedIn.com/in/jane-doe_1".to_string())
        );
        assert_eq!(extract_linkedin("linkedin: jane"), None);
    }

    #[test]
    fn extract_contact_info_leaves_unknown_fields_empty() {
        let contact = extract_contact_info("jane@doe.dev");
        assert_eq!(contact.email, "jane@doe.dev");
        assert_eq!(contact.phone, "");
        assert_eq!(contact.linkedin, "");
        assert_eq!(contact.address, "");
    }

    #[test]
    fn contact_lines_override_document_matches() {
        let mut contact = extract_contact_info("old@example.com 555 111 2222");
        let lines = vec![
            "Email: new@example.com".to_string(),
            "LinkedIn: https://linkedin.com/in/jane".to_string(),
            "Phone:".to_string(),
            "phone number 555 999 0000".to_string(),
        ];

        apply_contact_overrides(&mut contact, &lines);

        assert_eq!(contact.email, "new@example.com");
        assert_eq!(contact.linkedin, "https://linkedin.com/in/jane");
        assert_eq!(contact.phone, "555 111 2222");
    }
}

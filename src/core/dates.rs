use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%B %d, %Y", "%d %B %Y"];

/// Reduces a resume date to its 4-digit year.
///
/// Bare years pass through untouched, parseable dates yield their year and
/// anything else is returned as given. `None` and empty input give `""`.
pub fn normalize_year(value: Option<&str>) -> String {
    let Some(raw) = value else {
        return String::new();
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if is_bare_year(trimmed) {
        return trimmed.to_string();
    }

    match parse_year(trimmed) {
        Some(year) if (1000..=9999).contains(&year) => year.to_string(),
        _ => raw.to_string(),
    }
}

fn is_bare_year(value: &str) -> bool {
    value.len() == 4 && value.bytes().all(|b| b.is_ascii_digit())
}

fn parse_year(value: &str) -> Option<i32> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.year());
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Some(parsed.year());
    }

    for format in DATE_FORMATS {
        if let Ok(parsed) = NaiveDate::parse_from_str(value, format) {
            return Some(parsed.year());
        }
    }

    // Year-month and month-year forms carry no day; pin them to the 1st.
    if let Ok(parsed) = NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d") {
        return Some(parsed.year());
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(&format!("1 {value}"), "%d %B %Y") {
        return Some(parsed.year());
    }

    None
}

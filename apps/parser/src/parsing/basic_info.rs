use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::BasicInfo;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-z]{2,}").unwrap());

/// Loose on purpose: any run of 10+ digits, spaces and hyphens starting and ending with a digit.
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\+?\d[\d\s\-]{8,}\d").unwrap());

static LINKEDIN_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"linkedin\.com/\S+").unwrap());

const LINKEDIN_SCHEME: &str = "https://";

/// Extracts contact fields from the `header` section.
///
/// - `name` is the first line verbatim.
/// - `location` is the last line, but only when there are more than two lines.
/// - `email`, `phone` and `linkedin` are the first regex match over all lines
///   joined with a space. A LinkedIn match always gets an `https://` prefix.
pub fn extract_basic_info(lines: &[String]) -> BasicInfo {
    let joined = lines.join(" ");
    let first_match = |pattern: &Regex| {
        pattern
            .find(&joined)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    };

    let linkedin = LINKEDIN_PATTERN
        .find(&joined)
        .map(|m| format!("{LINKEDIN_SCHEME}{}", m.as_str()))
        .unwrap_or_default();

    BasicInfo {
        name: lines.first().cloned().unwrap_or_default(),
        email: first_match(&EMAIL_PATTERN),
        phone: first_match(&PHONE_PATTERN),
        linkedin,
        location: if lines.len() > 2 {
            lines.last().cloned().unwrap_or_default()
        } else {
            String::new()
        },
    }
}

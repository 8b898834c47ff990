// Helper functions for safe logging and wire formatting

use regex::Regex;
use std::sync::OnceLock;

/// Masks tokens for safe logging
/// Shows only first and last 4 characters
///
/// # Example
/// ```
/// use recruit_console::common::helpers::safe_token_log;
/// assert_eq!(safe_token_log("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9"), "eyJh...VCJ9");
/// ```
pub fn safe_token_log(token: &str) -> String {
    if token.len() > 8 && token.is_ascii() {
        format!("{}...{}", &token[..4], &token[token.len() - 4..])
    } else {
        "***".to_string()
    }
}

/// Turns a camelCase wire name into a sentence-case label
/// (`jobTypeId` -> `Job type`).
pub fn humanize_field(field: &str) -> String {
    let trimmed = field
        .strip_suffix("Ids")
        .or_else(|| field.strip_suffix("Id"))
        .filter(|s| !s.is_empty())
        .unwrap_or(field);

    let mut label = String::with_capacity(trimmed.len() + 4);
    for (i, ch) in trimmed.chars().enumerate() {
        if i == 0 {
            label.extend(ch.to_uppercase());
        } else if ch.is_uppercase() {
            label.push(' ');
            label.extend(ch.to_lowercase());
        } else {
            label.push(ch);
        }
    }
    label
}

/// Upper-cases the first character.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Percent-encodes a value for use as a single path segment.
pub fn path_segment(value: impl ToString) -> String {
    urlencoding::encode(&value.to_string()).into_owned()
}

fn disposition_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)filename\*?=(?:UTF-8'')?"?([^";]+)"?"#)
            .unwrap_or_else(|_| unreachable!("static pattern"))
    })
}

/// Extracts the file name from a `Content-Disposition` header value.
/// Prefers the RFC 5987 `filename*` form when both are present.
pub fn filename_from_disposition(header: &str) -> Option<String> {
    let re = disposition_regex();

    let mut plain = None;
    for caps in re.captures_iter(header) {
        let whole = caps.get(0).map(|m| m.as_str()).unwrap_or_default();
        let value = caps.get(1).map(|m| m.as_str().trim()).unwrap_or_default();
        if value.is_empty() {
            continue;
        }
        if whole.to_lowercase().starts_with("filename*") {
            return urlencoding::decode(value)
                .map(|decoded| decoded.into_owned())
                .ok()
                .or_else(|| Some(value.to_string()));
        }
        if plain.is_none() {
            plain = Some(value.to_string());
        }
    }
    plain
}

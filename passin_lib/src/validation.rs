//! Input validation and formatting helpers for the search, registration,
//! and login flows.

use crate::error::PassinError;

/// Longest accepted search term, in bytes.
pub const MAX_SEARCH_LENGTH: usize = 100;

/// Strips ASCII control characters, trims whitespace, and enforces a byte
/// length limit on a search term.
pub fn sanitize_search(input: &str) -> Result<String, PassinError> {
    if input.len() > MAX_SEARCH_LENGTH {
        return Err(PassinError::InvalidInput(format!(
            "search exceeds maximum length of {} bytes",
            MAX_SEARCH_LENGTH
        )));
    }
    let cleaned: String = input.chars().filter(|c| !c.is_ascii_control()).collect();
    Ok(cleaned.trim().to_string())
}

/// Progressively masks a digit string as `###.###.###-##`, mirroring the
/// registration form's as-you-type CPF formatting. Non-digits are dropped
/// and input is capped at 11 digits.
pub fn format_cpf(value: &str) -> String {
    let digits: Vec<char> = value
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(11)
        .collect();
    let mut out = String::with_capacity(14);
    for (i, c) in digits.iter().enumerate() {
        match i {
            3 | 6 => out.push('.'),
            9 => out.push('-'),
            _ => {}
        }
        out.push(*c);
    }
    out
}

/// Validates a CPF: exactly 11 digits after stripping punctuation. Returns
/// the bare digit string the API expects.
pub fn validate_cpf(value: &str) -> Result<String, PassinError> {
    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() != 11 {
        return Err(PassinError::InvalidInput(
            "CPF must contain exactly 11 digits".to_string(),
        ));
    }
    Ok(digits)
}

/// Minimal e-mail shape check for the registration form.
pub fn validate_email(value: &str) -> Result<String, PassinError> {
    let trimmed = value.trim();
    let valid = trimmed
        .split_once('@')
        .map(|(local, domain)| {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        })
        .unwrap_or(false);
    if !valid {
        return Err(PassinError::InvalidInput(format!(
            "invalid e-mail address: {}",
            trimmed
        )));
    }
    Ok(trimmed.to_string())
}

/// Requires a non-empty value after trimming, for required form fields.
pub fn require_non_empty(value: &str, field: &str) -> Result<String, PassinError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(PassinError::InvalidInput(format!(
            "{} must not be empty",
            field
        )));
    }
    Ok(trimmed.to_string())
}

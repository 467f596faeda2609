use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ApiError;

pub const MAX_SEARCH_LEN: usize = 100;

static SLUG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("regex compiles"));

// Same shape the browser enforces for `type=email`.
static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s.]+(?:\.[^@\s.]+)+$").expect("regex compiles"));

pub fn validate_slug(value: &str) -> Result<&str, ApiError> {
    if value.len() <= 80 && SLUG.is_match(value) {
        Ok(value)
    } else {
        Err(ApiError::BadRequest(format!("`{value}` is not a valid page slug")))
    }
}

pub fn validate_search(value: Option<&str>) -> Result<Option<&str>, ApiError> {
    match value {
        Some(q) if q.chars().count() > MAX_SEARCH_LEN => Err(ApiError::BadRequest(format!(
            "search must be at most {MAX_SEARCH_LEN} characters"
        ))),
        other => Ok(other),
    }
}

pub fn looks_like_email(value: &str) -> bool {
    EMAIL.is_match(value.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_slug() {
        assert!(validate_slug("winter-dreams").is_ok());
        assert!(validate_slug("ballet").is_ok());
        assert!(validate_slug("Winter").is_err());
        assert!(validate_slug("../etc").is_err());
        assert!(validate_slug("double--dash").is_err());
        assert!(validate_slug("").is_err());
    }

    #[test]
    fn test_validate_search() {
        assert!(validate_search(None).is_ok());
        assert!(validate_search(Some("tap")).is_ok());
        assert!(validate_search(Some(&"x".repeat(MAX_SEARCH_LEN + 1))).is_err());
    }

    #[test]
    fn test_looks_like_email() {
        assert!(looks_like_email("dancer@example.com"));
        assert!(looks_like_email(" a.b@studio.co.uk "));
        assert!(!looks_like_email("dancer@example"));
        assert!(!looks_like_email("not an email"));
        assert!(!looks_like_email(""));
    }
}

use crate::domain::ports::EmailValidator;
use crate::utils::error::{DemoError, Result};
use regex::Regex;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Accepts `local@domain.tld` shaped addresses. Good enough for the demo,
/// not an RFC 5322 parser.
#[derive(Debug, Clone)]
pub struct RegexEmailValidator {
    pattern: Regex,
}

impl RegexEmailValidator {
    pub fn new() -> Result<Self> {
        Self::with_pattern(EMAIL_PATTERN)
    }

    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|e| DemoError::ConfigError {
            message: format!("email pattern: {}", e),
        })?;
        Ok(Self { pattern })
    }
}

impl EmailValidator for RegexEmailValidator {
    fn is_valid(&self, email: &str) -> bool {
        let valid = self.pattern.is_match(email);
        tracing::debug!("Email '{}' valid: {}", email, valid);
        valid
    }
}

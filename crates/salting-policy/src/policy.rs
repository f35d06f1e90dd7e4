use serde::{Deserialize, Serialize};

use crate::error::PolicyViolation;

/// Minimum password length, in characters.
pub const DEFAULT_MIN_LENGTH: usize = 8;

/// Configurable strength rules. The default requires at least 8 characters
/// including an ASCII digit, an ASCII uppercase letter, an ASCII lowercase
/// letter and one character outside `[A-Za-z0-9]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub require_digit: bool,
    pub require_uppercase: bool,
    pub require_lowercase: bool,
    pub require_special: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            require_digit: true,
            require_uppercase: true,
            require_lowercase: true,
            require_special: true,
        }
    }
}

/// Character classes present in a password.
#[derive(Default)]
struct Classes {
    chars: usize,
    digit: bool,
    upper: bool,
    lower: bool,
    special: bool,
}

impl Classes {
    fn scan(password: &str) -> Self {
        password.chars().fold(Self::default(), |mut acc, c| {
            acc.chars += 1;
            match c {
                '0'..='9' => acc.digit = true,
                'A'..='Z' => acc.upper = true,
                'a'..='z' => acc.lower = true,
                _ => acc.special = true,
            }
            acc
        })
    }
}

impl PasswordPolicy {
    /// Check a password, reporting every unmet requirement.
    ///
    /// Length counts characters, not bytes.
    pub fn check(&self, password: &str) -> Result<(), Vec<PolicyViolation>> {
        let found = Classes::scan(password);
        let mut violations = Vec::new();

        if found.chars < self.min_length {
            violations.push(PolicyViolation::TooShort {
                min: self.min_length,
                actual: found.chars,
            });
        }
        if self.require_digit && !found.digit {
            violations.push(PolicyViolation::MissingDigit);
        }
        if self.require_uppercase && !found.upper {
            violations.push(PolicyViolation::MissingUppercase);
        }
        if self.require_lowercase && !found.lower {
            violations.push(PolicyViolation::MissingLowercase);
        }
        if self.require_special && !found.special {
            violations.push(PolicyViolation::MissingSpecial);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }

    pub fn is_valid(&self, password: &str) -> bool {
        self.check(password).is_ok()
    }
}

/// Check a password against the default policy.
pub fn validate(password: &str) -> bool {
    PasswordPolicy::default().is_valid(password)
}

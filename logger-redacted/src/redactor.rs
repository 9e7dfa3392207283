use base64::{engine::general_purpose, Engine as _};
use lazy_static::lazy_static;
use regex::Regex;
use sha2::{Digest, Sha256};

lazy_static! {
    static ref PHONE_REGEX: Regex =
        Regex::new(r"\b(?:\+\d{1,3}[-.\s]?)?\(?([0-9]{3,5})\)?[-.\s]?([0-9]{3})[-.\s]?([0-9]{4})\b")
            .unwrap();
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b").unwrap();
    static ref ADMISSION_REGEX: Regex =
        Regex::new(r"\b(?:IPD|OPD|ADM)[-/]?\d{4,}\b").unwrap();
}

/// Patient-data redaction configuration
#[derive(Debug, Clone)]
pub struct RedactionConfig {
    pub redact_phones: bool,
    pub redact_emails: bool,
    pub redact_admission_numbers: bool,
    pub hash_for_correlation: bool,
    pub custom_patterns: Vec<(Regex, String)>,
}

impl Default for RedactionConfig {
    fn default() -> Self {
        Self {
            redact_phones: true,
            redact_emails: true,
            redact_admission_numbers: true,
            hash_for_correlation: true,
            custom_patterns: Vec::new(),
        }
    }
}

/// Redactor for patient-identifying text in log messages
pub struct PhiRedactor {
    config: RedactionConfig,
}

impl PhiRedactor {
    pub fn new(config: RedactionConfig) -> Self {
        Self { config }
    }

    pub fn redact(&self, text: &str) -> String {
        let mut result = text.to_string();

        if self.config.redact_phones {
            result = self.redact_phones(&result);
        }

        if self.config.redact_emails {
            result = self.redact_emails(&result);
        }

        if self.config.redact_admission_numbers {
            result = self.redact_admission_numbers(&result);
        }

        for (pattern, replacement) in &self.config.custom_patterns {
            result = pattern.replace_all(&result, replacement.as_str()).to_string();
        }

        result
    }

    fn redact_phones(&self, text: &str) -> String {
        PHONE_REGEX
            .replace_all(text, |caps: &regex::Captures| {
                if self.config.hash_for_correlation {
                    format!("PHONE[{}]", self.hash_value(&caps[0]))
                } else {
                    "(***) ***-****".to_string()
                }
            })
            .to_string()
    }

    fn redact_emails(&self, text: &str) -> String {
        EMAIL_REGEX
            .replace_all(text, |caps: &regex::Captures| {
                if self.config.hash_for_correlation {
                    format!("EMAIL[{}]", self.hash_value(&caps[0]))
                } else {
                    "***@***".to_string()
                }
            })
            .to_string()
    }

    fn redact_admission_numbers(&self, text: &str) -> String {
        ADMISSION_REGEX
            .replace_all(text, |caps: &regex::Captures| {
                if self.config.hash_for_correlation {
                    format!("ADMISSION[{}]", self.hash_value(&caps[0]))
                } else {
                    "ADMISSION[******]".to_string()
                }
            })
            .to_string()
    }

    fn hash_value(&self, value: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(value.as_bytes());
        let result = hasher.finalize();
        general_purpose::STANDARD.encode(&result[..8]) // Use first 8 bytes for shorter hash
    }
}

impl Default for PhiRedactor {
    fn default() -> Self {
        Self::new(RedactionConfig::default())
    }
}

/// Mask a patient name down to initials: "Asha Rao" -> "A*** R***".
///
/// Used for structured log fields that carry a name by itself, where the
/// pattern-based redactor has nothing to match on.
pub fn redact_name(name: &str) -> String {
    name.split_whitespace()
        .map(|word| match word.chars().next() {
            Some(first) => format!("{first}***"),
            None => String::new(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_redaction() {
        let redactor = PhiRedactor::new(RedactionConfig {
            hash_for_correlation: false,
            ..Default::default()
        });

        let text = "Attendant reachable at (555) 123-4567";
        let redacted = redactor.redact(text);
        assert!(redacted.contains("(***) ***-****"));
        assert!(!redacted.contains("123-4567"));
    }

    #[test]
    fn test_email_redaction() {
        let redactor = PhiRedactor::new(RedactionConfig {
            hash_for_correlation: false,
            ..Default::default()
        });

        let text = "Invoice sent to asha.rao@example.com";
        let redacted = redactor.redact(text);
        assert!(!redacted.contains("asha.rao@example.com"));
    }

    #[test]
    fn test_admission_number_redaction() {
        let redactor = PhiRedactor::new(RedactionConfig::default());

        let redacted = redactor.redact("discharge summary for IPD-20240931");
        assert!(!redacted.contains("IPD-20240931"));
        assert!(redacted.contains("ADMISSION["));
    }

    #[test]
    fn test_hash_correlation_is_stable() {
        let redactor = PhiRedactor::default();

        let first = redactor.redact("IPD-20240931 ready");
        let second = redactor.redact("IPD-20240931 billed");
        let hash = |s: &str| s.split('[').nth(1).map(str::to_string);
        assert_eq!(hash(&first), hash(&second));
    }

    #[test]
    fn test_custom_pattern() {
        let config = RedactionConfig {
            custom_patterns: vec![(
                Regex::new(r"\bBED-\d+\b").unwrap(),
                "BED[REDACTED]".to_string(),
            )],
            ..Default::default()
        };
        let redactor = PhiRedactor::new(config);

        let redacted = redactor.redact("moved to BED-412");
        assert_eq!(redacted, "moved to BED[REDACTED]");
    }

    #[test]
    fn test_redact_name() {
        assert_eq!(redact_name("Asha Rao"), "A*** R***");
        assert_eq!(redact_name(""), "");
    }
}

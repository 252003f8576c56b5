//! Input validation for the onboarding and client forms.
//!
//! Every check is a pure, total predicate: malformed or unknown input yields
//! `false`, never a panic. Patterns are compiled once and always match the
//! full string.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static DIGITS_6_10: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{6,10}$").expect("valid pattern"));
static DIGITS_10_11: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10,11}$").expect("valid pattern"));
static PASSPORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9]{6,10}$").expect("valid pattern"));
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid pattern"));
static MOBILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^3[0-9]{9}$").expect("valid pattern"));

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Identity document types accepted on the client forms.
///
/// The set is closed: adding or removing a type means touching this enum and
/// its rule, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentKind {
    /// Cédula de ciudadanía
    Cc,
    /// Cédula de extranjería
    Ce,
    /// Tarjeta de identidad
    Ti,
    /// Pasaporte
    Pp,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 4] = [
        DocumentKind::Cc,
        DocumentKind::Ce,
        DocumentKind::Ti,
        DocumentKind::Pp,
    ];

    /// The two-letter form code for this document type.
    pub fn code(self) -> &'static str {
        match self {
            DocumentKind::Cc => "CC",
            DocumentKind::Ce => "CE",
            DocumentKind::Ti => "TI",
            DocumentKind::Pp => "PP",
        }
    }

    /// Resolve a form code (case-insensitive, surrounding whitespace
    /// ignored). Unknown codes resolve to `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "CC" => Some(DocumentKind::Cc),
            "CE" => Some(DocumentKind::Ce),
            "TI" => Some(DocumentKind::Ti),
            "PP" => Some(DocumentKind::Pp),
            _ => None,
        }
    }

    fn rule(self) -> &'static Regex {
        match self {
            DocumentKind::Cc | DocumentKind::Ce => &DIGITS_6_10,
            DocumentKind::Ti => &DIGITS_10_11,
            DocumentKind::Pp => &PASSPORT,
        }
    }

    /// Full-string check of `number` against this document type's rule.
    pub fn matches(self, number: &str) -> bool {
        self.rule().is_match(number)
    }
}

/// Check a document number against the rule for `type_code`. Unknown type
/// codes fail the check rather than erroring.
pub fn validate_document(type_code: &str, number: &str) -> bool {
    DocumentKind::from_code(type_code).is_some_and(|kind| kind.matches(number))
}

/// Lexical email-shape check: something before the `@`, a dot somewhere
/// after it, no whitespace anywhere. Deliverability is not our business.
pub fn validate_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Colombian mobile number: exactly 10 digits starting with 3 once all
/// whitespace is stripped. Any other non-digit character fails.
pub fn validate_phone(phone: &str) -> bool {
    let digits: String = phone.split_whitespace().collect();
    MOBILE.is_match(&digits)
}

/// Registration password policy: at least [`MIN_PASSWORD_LEN`] characters.
pub fn validate_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

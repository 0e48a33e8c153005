//! Contact validation and canonicalization.
//!
//! Phones are parsed with libphonenumber metadata (via the `phonenumber`
//! crate) and rendered as E.164 digits without the leading `+`. Emails are
//! syntax-checked and kept as trimmed text, without case folding.
//!
//! A rejection is a value, not a failure: callers drop the cell and move on.

use email_address::EmailAddress;
use phonenumber::{Mode, country};
use thiserror::Error;

/// Region assumed for phone numbers written without a country code.
pub const DEFAULT_PHONE_REGION: country::Id = country::Id::BR;

/// Why a contact cell produced no address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactRejection {
    #[error("phone number could not be parsed")]
    Unparseable,
    #[error("phone number is not valid for its region")]
    InvalidNumber,
    #[error("email address is malformed")]
    MalformedEmail,
}

/// Validates and canonicalizes contact cells for row interpretation.
///
/// Wrap an implementation to observe rejected cells without touching the
/// interpreter.
pub trait ContactNormalizer {
    fn normalize_phone(&self, raw: &str) -> Result<String, ContactRejection>;
    fn normalize_email(&self, raw: &str) -> Result<String, ContactRejection>;
}

/// Normalizer backed by libphonenumber metadata, fixed to [`DEFAULT_PHONE_REGION`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardContacts;

impl ContactNormalizer for StandardContacts {
    fn normalize_phone(&self, raw: &str) -> Result<String, ContactRejection> {
        normalize_phone(raw, DEFAULT_PHONE_REGION)
    }

    fn normalize_email(&self, raw: &str) -> Result<String, ContactRejection> {
        normalize_email(raw)
    }
}

/// Parse, validate, and format a phone number as bare E.164 digits.
pub fn normalize_phone(raw: &str, region: country::Id) -> Result<String, ContactRejection> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ContactRejection::Unparseable);
    }
    let number =
        phonenumber::parse(Some(region), trimmed).map_err(|_| ContactRejection::Unparseable)?;
    if !phonenumber::is_valid(&number) {
        return Err(ContactRejection::InvalidNumber);
    }
    let formatted = number.format().mode(Mode::E164).to_string();
    Ok(formatted.chars().filter(char::is_ascii_digit).collect())
}

/// Check email syntax and return the trimmed address unchanged.
pub fn normalize_email(raw: &str) -> Result<String, ContactRejection> {
    let trimmed = raw.trim();
    if is_email(trimmed) {
        Ok(trimmed.to_string())
    } else {
        Err(ContactRejection::MalformedEmail)
    }
}

/// RFC 5322 addr-spec on a host name; display names and address literals
/// are not accepted.
fn is_email(text: &str) -> bool {
    if text.is_empty() || text.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((_, domain)) = text.rsplit_once('@') else {
        return false;
    };
    is_host_name(domain) && EmailAddress::is_valid(text)
}

/// Dotted name ending in an alphabetic (or punycode) top-level label.
///
/// IP addresses fail the top-level check; `[..]` literals and underscores fail
/// the label check.
fn is_host_name(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    let Some((top_level, _)) = labels.split_last() else {
        return false;
    };
    labels.len() >= 2 && labels.iter().copied().all(is_domain_label) && is_top_level_label(top_level)
}

fn is_domain_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= 63
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c == '-' || c.is_alphanumeric())
}

fn is_top_level_label(label: &str) -> bool {
    let punycode = label.len() >= 4
        && label.get(..2).is_some_and(|prefix| prefix.eq_ignore_ascii_case("xn"))
        && label.chars().all(|c| c == '-' || c.is_ascii_alphanumeric());
    punycode || (label.chars().count() >= 2 && label.chars().all(char::is_alphabetic))
}

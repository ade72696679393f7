//! Registration intake - raw form to validated record

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Maximum length for single-line fields
const MAX_FIELD_LEN: usize = 500;

/// Maximum length for the address (free-form textarea)
const MAX_ADDRESS_LEN: usize = 1000;

/// Phone numbers carry between 8 and 15 digits (E.164 upper bound)
const MIN_PHONE_DIGITS: usize = 8;
const MAX_PHONE_DIGITS: usize = 15;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("invalid email regex"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9 ().-]+$").expect("invalid phone regex"));

/// Auto-assigned identifier of a persisted registration
pub type RegistrationId = i64;

/// Registration form exactly as submitted by the browser.
///
/// Missing fields deserialize as empty strings so that validation, not the
/// extractor, decides what is wrong with the submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationForm {
    pub child_name: String,
    pub parent_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// Validated registration: one parent/child submission.
///
/// Fields are trimmed. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationRecord {
    child_name: String,
    parent_name: String,
    email: String,
    phone: String,
    address: String,
}

impl RegistrationRecord {
    /// Validate and build a record.
    ///
    /// # Rules
    /// - Every field non-empty after trimming
    /// - At most 500 characters (address: 1000)
    /// - `email` shaped like `local@domain.tld`
    /// - `phone` digits with optional `+`, spaces, dashes, dots, parentheses;
    ///   8 to 15 digits in total
    ///
    /// # Example
    /// ```
    /// use nuryanti_core::RegistrationRecord;
    ///
    /// let record = RegistrationRecord::new(
    ///     "Ali", "Budi", "budi@example.com", "081234567890", "Jl. Mawar 1",
    /// );
    /// assert!(record.is_ok());
    /// assert!(RegistrationRecord::new("Ali", "Budi", "budi", "0812345678", "x").is_err());
    /// ```
    pub fn new(
        child_name: &str,
        parent_name: &str,
        email: &str,
        phone: &str,
        address: &str,
    ) -> Result<Self, ValidationError> {
        let child_name = text_field("childName", child_name, MAX_FIELD_LEN)?;
        let parent_name = text_field("parentName", parent_name, MAX_FIELD_LEN)?;
        let email = text_field("email", email, MAX_FIELD_LEN)?;
        let phone = text_field("phone", phone, MAX_FIELD_LEN)?;
        let address = text_field("address", address, MAX_ADDRESS_LEN)?;

        if !is_email(email) {
            return Err(ValidationError::InvalidFormat {
                field: "email",
                reason: "must look like name@domain.tld",
            });
        }

        if !PHONE_RE.is_match(phone) {
            return Err(ValidationError::InvalidFormat {
                field: "phone",
                reason: "may only contain digits, spaces, dashes, dots, parentheses and a leading +",
            });
        }

        let digits = phone.chars().filter(char::is_ascii_digit).count();
        if !(MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits) {
            return Err(ValidationError::InvalidFormat {
                field: "phone",
                reason: "must contain between 8 and 15 digits",
            });
        }

        Ok(Self {
            child_name: child_name.to_owned(),
            parent_name: parent_name.to_owned(),
            email: email.to_owned(),
            phone: phone.to_owned(),
            address: address.to_owned(),
        })
    }

    pub fn child_name(&self) -> &str {
        &self.child_name
    }

    pub fn parent_name(&self) -> &str {
        &self.parent_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn address(&self) -> &str {
        &self.address
    }
}

impl TryFrom<RegistrationForm> for RegistrationRecord {
    type Error = ValidationError;

    fn try_from(form: RegistrationForm) -> Result<Self, Self::Error> {
        Self::try_from(&form)
    }
}

impl TryFrom<&RegistrationForm> for RegistrationRecord {
    type Error = ValidationError;

    fn try_from(form: &RegistrationForm) -> Result<Self, Self::Error> {
        Self::new(
            &form.child_name,
            &form.parent_name,
            &form.email,
            &form.phone,
            &form.address,
        )
    }
}

/// Shared email shape check, also used for configured addresses
pub(crate) fn is_email(s: &str) -> bool {
    EMAIL_RE.is_match(s)
}

fn text_field<'a>(
    field: &'static str,
    value: &'a str,
    max: usize,
) -> Result<&'a str, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> RegistrationForm {
        RegistrationForm {
            child_name: "Ali".into(),
            parent_name: "Budi".into(),
            email: "budi@example.com".into(),
            phone: "081234567890".into(),
            address: "Jl. Mawar 1".into(),
        }
    }

    #[test]
    fn accepts_valid_form() {
        let record = RegistrationRecord::try_from(form()).unwrap();
        assert_eq!(record.child_name(), "Ali");
        assert_eq!(record.parent_name(), "Budi");
        assert_eq!(record.email(), "budi@example.com");
        assert_eq!(record.phone(), "081234567890");
        assert_eq!(record.address(), "Jl. Mawar 1");
    }

    #[test]
    fn trims_whitespace() {
        let mut f = form();
        f.child_name = "  Ali \n".into();
        let record = RegistrationRecord::try_from(f).unwrap();
        assert_eq!(record.child_name(), "Ali");
    }

    #[test]
    fn rejects_blank_fields() {
        let mut f = form();
        f.parent_name = "   ".into();
        let err = RegistrationRecord::try_from(f).unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "parentName" });
    }

    #[test]
    fn missing_fields_deserialize_empty() {
        let f: RegistrationForm = serde_json::from_str(r#"{"childName": "Ali"}"#).unwrap();
        assert_eq!(f.child_name, "Ali");
        assert_eq!(f.email, "");

        let err = RegistrationRecord::try_from(f).unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "parentName" });
    }

    #[test]
    fn rejects_malformed_email() {
        for bad in ["budi", "budi@", "@example.com", "budi@example", "bu di@example.com"] {
            let mut f = form();
            f.email = bad.into();
            let err = RegistrationRecord::try_from(f).unwrap_err();
            assert!(
                matches!(err, ValidationError::InvalidFormat { field: "email", .. }),
                "accepted {bad}"
            );
        }
    }

    #[test]
    fn accepts_formatted_phone_numbers() {
        for ok in ["+62 812-3456-7890", "(021) 555.1234", "0812345678"] {
            let mut f = form();
            f.phone = ok.into();
            assert!(RegistrationRecord::try_from(f).is_ok(), "rejected {ok}");
        }
    }

    #[test]
    fn rejects_bad_phone_numbers() {
        for bad in ["phone me", "1234567", "1234567890123456", "08x2345678", "62+812345678"] {
            let mut f = form();
            f.phone = bad.into();
            let err = RegistrationRecord::try_from(f).unwrap_err();
            assert!(
                matches!(err, ValidationError::InvalidFormat { field: "phone", .. }),
                "accepted {bad}"
            );
        }
    }

    #[test]
    fn max_length() {
        let mut f = form();
        f.address = "a".repeat(1000);
        assert!(RegistrationRecord::try_from(f.clone()).is_ok());

        f.address = "a".repeat(1001);
        let err = RegistrationRecord::try_from(f).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooLong {
                field: "address",
                max: 1000
            }
        );
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let mut f = form();
        // 500 two-byte characters is still within the limit
        f.child_name = "é".repeat(500);
        assert!(RegistrationRecord::try_from(f).is_ok());
    }
}

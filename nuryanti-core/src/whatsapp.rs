//! WhatsApp deep links
//!
//! Canonical form: `https://wa.me/{digits}?text={percent-encoded message}`.
//! Building a link is pure; the server never calls WhatsApp itself, the
//! browser opens the link.

use std::fmt;

use crate::error::ConfigError;

const WA_ME_BASE: &str = "https://wa.me/";

const MIN_DIGITS: usize = 8;
const MAX_DIGITS: usize = 15;

/// Destination number in international format, digits only (no `+`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhatsAppNumber(String);

impl WhatsAppNumber {
    /// Parse a configured number.
    ///
    /// A leading `+` and separators (spaces, dashes, dots, parentheses) are
    /// dropped. What remains must be 8 to 15 digits.
    ///
    /// ```
    /// use nuryanti_core::WhatsAppNumber;
    ///
    /// let number = WhatsAppNumber::parse("+62 857-2154-9005").unwrap();
    /// assert_eq!(number.as_str(), "6285721549005");
    /// ```
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let raw = raw.trim();
        let body = raw.strip_prefix('+').unwrap_or(raw);

        let mut digits = String::with_capacity(body.len());
        for c in body.chars() {
            match c {
                '0'..='9' => digits.push(c),
                ' ' | '-' | '.' | '(' | ')' => {}
                _ => {
                    return Err(ConfigError::invalid(
                        "WHATSAPP_NUMBER",
                        format!("unexpected character '{c}'"),
                    ))
                }
            }
        }

        if !(MIN_DIGITS..=MAX_DIGITS).contains(&digits.len()) {
            return Err(ConfigError::invalid(
                "WHATSAPP_NUMBER",
                format!("expected {MIN_DIGITS} to {MAX_DIGITS} digits, got {}", digits.len()),
            ));
        }

        Ok(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Deep link that opens a chat with this number, pre-filled with `message`.
    pub fn deep_link(&self, message: &str) -> String {
        format!("{WA_ME_BASE}{}?text={}", self.0, urlencoding::encode(message))
    }
}

impl fmt::Display for WhatsAppNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{}", self.0)
    }
}

//! # Credit Card
//!
//! Card data captured at the point of sale. Construction never validates:
//! card data may be captured before any processor is known, so validity is
//! a property checked at charge time.
//!
//! This type deliberately implements `Debug` and `Display` with a masked
//! number, and carries no serde derives, so the raw PAN cannot leak into
//! logs or serialized output.

use std::fmt;

/// A stored-value card: number plus expiry month/year.
#[derive(Clone, PartialEq, Eq)]
pub struct CreditCard {
    /// Card number (digit string, unvalidated at construction)
    pub number: String,

    /// Expiry month (nominally 1-12, validated at charge time)
    pub expiry_month: u8,

    /// Expiry year (four digits)
    pub expiry_year: u16,
}

impl CreditCard {
    /// Capture card data. No validation happens here.
    pub fn new(number: impl Into<String>, expiry_month: u8, expiry_year: u16) -> Self {
        Self {
            number: number.into(),
            expiry_month,
            expiry_year,
        }
    }

    /// Masked form of the card number, e.g. `XXXX-XXXX-XXXX-1234`.
    ///
    /// Numbers with four or fewer characters, or containing non-ASCII
    /// input, are fully masked.
    pub fn masked(&self) -> String {
        if self.number.len() <= 4 || !self.number.is_ascii() {
            return "XXXX".to_string();
        }
        let last4 = &self.number[self.number.len() - 4..];
        format!("XXXX-XXXX-XXXX-{}", last4)
    }
}

impl fmt::Display for CreditCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.masked())
    }
}

impl fmt::Debug for CreditCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreditCard")
            .field("number", &self.masked())
            .field("expiry_month", &self.expiry_month)
            .field("expiry_year", &self.expiry_year)
            .finish()
    }
}

//! # Charge Error Types
//!
//! Typed error handling for the chargeline payment engine.
//! All payment operations return `Result<T, ChargeError>`.

use thiserror::Error;

/// Core error type for all payment operations.
///
/// Every failure kind is distinct so callers can branch on cause rather
/// than matching on a generic failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChargeError {
    /// Expiry month outside the 1-12 range
    #[error("Invalid expiry month: {month} (must be between 1 and 12)")]
    InvalidMonth { month: u8 },

    /// Card expiry date lies strictly before the current date
    #[error("Card expired: {month:02}/{year}")]
    CardExpired { month: u8, year: u16 },

    /// Card number failed structural (Luhn) validation
    #[error("Invalid card number")]
    InvalidCardNumber,

    /// Gateway credential did not match the expected API key
    #[error("Invalid API key")]
    InvalidApiKey,

    /// Attempted to pay an order with total 0
    #[error("Cannot pay an order with total 0")]
    ZeroAmount,

    /// Attempted to pay an order that is already paid
    #[error("Order has already been paid")]
    AlreadyPaid,

    /// Configuration errors (missing keys, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ChargeError {
    /// Returns true if this error reflects bad card data (as opposed to a
    /// credential, order, or configuration problem). Card faults are the
    /// only failures the cardholder can correct at the point of sale.
    pub fn is_card_error(&self) -> bool {
        matches!(
            self,
            ChargeError::InvalidMonth { .. }
                | ChargeError::CardExpired { .. }
                | ChargeError::InvalidCardNumber
        )
    }

    /// Stable short code for structured logs and machine-readable output.
    pub fn code(&self) -> &'static str {
        match self {
            ChargeError::InvalidMonth { .. } => "invalid_month",
            ChargeError::CardExpired { .. } => "card_expired",
            ChargeError::InvalidCardNumber => "invalid_card_number",
            ChargeError::InvalidApiKey => "invalid_api_key",
            ChargeError::ZeroAmount => "zero_amount",
            ChargeError::AlreadyPaid => "already_paid",
            ChargeError::Configuration(_) => "configuration",
        }
    }
}

/// Result type alias for payment operations
pub type ChargeResult<T> = Result<T, ChargeError>;

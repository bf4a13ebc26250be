//! # Payment Processor Trait
//!
//! Core trait for payment gateway implementations. Production gateways and
//! test doubles are variants satisfying the same contract, selected by
//! explicit injection.

use crate::card::CreditCard;
use crate::error::ChargeResult;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Core trait for payment gateway implementations.
///
/// The pipeline is synchronous: every operation either returns or fails
/// before the caller proceeds. Both methods borrow the card for the
/// duration of one call; a processor never owns card or order data.
pub trait PaymentProcessor: Send + Sync {
    /// Validate a card against the expiry policy and the Luhn checksum.
    ///
    /// Check order is part of the contract: month range first, then
    /// expiry, then checksum — callers depend on receiving the earliest
    /// detectable error.
    fn validate_card(&self, card: &CreditCard, month: u8, year: u16) -> ChargeResult<()>;

    /// Charge the given amount (minor currency units) against the card.
    ///
    /// Re-validates the card using its own stored expiry, then verifies
    /// the gateway credential. A bad credential never masks a bad card.
    fn charge(&self, card: &CreditCard, amount: i64) -> ChargeResult<ChargeRecord>;

    /// Gateway name (for logging and receipts).
    fn gateway_name(&self) -> &'static str;
}

/// Record of a settled charge, emitted at the gateway boundary.
#[derive(Debug, Clone, Serialize)]
pub struct ChargeRecord {
    /// Unique charge reference (generated)
    pub reference: String,

    /// Gateway that settled the charge
    pub gateway: String,

    /// Masked card number
    pub card_mask: String,

    /// Amount in minor currency units
    pub amount: i64,

    /// Settlement timestamp
    pub charged_at: DateTime<Utc>,
}

impl ChargeRecord {
    /// Create a charge record with a generated reference.
    pub fn new(gateway: impl Into<String>, card: &CreditCard, amount: i64) -> Self {
        Self {
            reference: Uuid::new_v4().to_string(),
            gateway: gateway.into(),
            card_mask: card.masked(),
            amount,
            charged_at: Utc::now(),
        }
    }
}

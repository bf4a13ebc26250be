//! # VectorPay Processor
//!
//! The production payment processor. Validates a card against the expiry
//! policy and the Luhn checksum, verifies the gateway credential, and
//! settles the charge by emitting a charge record at the gateway boundary.

use crate::config::GatewayConfig;
use charge_core::{
    luhn_checksum, ChargeError, ChargeRecord, ChargeResult, Clock, CreditCard, PaymentProcessor,
    SystemClock,
};
use chrono::NaiveDate;
use tracing::{debug, info, warn};

/// VectorPay gateway processor.
///
/// Holds the credential presented by the merchant integration and the
/// expected baseline from configuration; the two are compared at charge
/// time, after card validation has succeeded.
pub struct VectorPayProcessor {
    api_key: String,
    config: GatewayConfig,
    clock: Box<dyn Clock>,
}

impl VectorPayProcessor {
    /// Create a processor presenting `api_key` against the configured
    /// expected key. Uses the system clock for expiry comparison.
    pub fn new(api_key: impl Into<String>, config: GatewayConfig) -> Self {
        Self {
            api_key: api_key.into(),
            config,
            clock: Box::new(SystemClock),
        }
    }

    /// Create a processor from environment configuration, presenting the
    /// configured key itself (the usual production wiring).
    pub fn from_env() -> ChargeResult<Self> {
        let config = GatewayConfig::from_env()?;
        Ok(Self::new(config.api_key.clone(), config))
    }

    /// Builder: replace the clock (for deterministic expiry tests).
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    fn check_api_key(&self) -> bool {
        constant_time_compare(&self.api_key, &self.config.api_key)
    }
}

impl PaymentProcessor for VectorPayProcessor {
    fn validate_card(&self, card: &CreditCard, month: u8, year: u16) -> ChargeResult<()> {
        if !(1..=12).contains(&month) {
            return Err(ChargeError::InvalidMonth { month });
        }

        // u16 years and validated months always form a first-of-month date
        let expiry = NaiveDate::from_ymd_opt(year as i32, month as u32, 1)
            .expect("validated expiry month forms a date");
        if expiry < self.clock.today() {
            return Err(ChargeError::CardExpired { month, year });
        }

        // Screen empty and non-digit numbers before the pure checksum,
        // which is defined only over digit strings.
        if card.number.is_empty() || !card.number.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ChargeError::InvalidCardNumber);
        }
        if !luhn_checksum(&card.number) {
            return Err(ChargeError::InvalidCardNumber);
        }

        debug!(card = %card, "card validated");
        Ok(())
    }

    fn charge(&self, card: &CreditCard, amount: i64) -> ChargeResult<ChargeRecord> {
        self.validate_card(card, card.expiry_month, card.expiry_year)?;

        if !self.check_api_key() {
            warn!(gateway = self.gateway_name(), "credential mismatch");
            return Err(ChargeError::InvalidApiKey);
        }

        let record = ChargeRecord::new(self.gateway_name(), card, amount);

        info!(
            reference = %record.reference,
            card = %record.card_mask,
            fingerprint = %card_fingerprint(&card.number),
            amount_minor = amount,
            "charging card {} for ${:.2}",
            record.card_mask,
            amount as f64 / 100.0
        );

        Ok(record)
    }

    fn gateway_name(&self) -> &'static str {
        "vectorpay"
    }
}

/// Stable SHA-256 fingerprint of a card number, for correlating charges
/// without retaining the PAN. Truncated to 16 hex chars.
fn card_fingerprint(number: &str) -> String {
    use sha2::{Digest, Sha256};

    let digest = Sha256::digest(number.as_bytes());
    hex::encode(digest)[..16].to_string()
}

fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.bytes()
        .zip(b.bytes())
        .fold(0, |acc, (x, y)| acc | (x ^ y))
        == 0
}

//! # Payment Orchestration
//!
//! `pay_order` composes card validation, the charge, and the order state
//! transition. Processor failures surface to the caller unchanged and
//! leave the order untouched at OPEN.

use crate::card::CreditCard;
use crate::error::{ChargeError, ChargeResult};
use crate::order::Order;
use crate::processor::{ChargeRecord, PaymentProcessor};
use serde::Serialize;
use tracing::{debug, info};

/// Confirmation value returned by a successful [`pay_order`].
#[derive(Debug, Clone, Serialize)]
pub struct Receipt {
    /// The settled order's ID
    pub order_id: String,

    /// Final order total in minor currency units
    pub total: i64,

    /// The gateway charge record
    pub record: ChargeRecord,
}

/// Settle an order against a card via the given processor.
///
/// Exactly one charge attempt per invocation; no internal retry. On any
/// failure the order remains OPEN and the specific error kind is returned
/// for the caller to branch on. On success the order transitions to PAID
/// and the receipt carries the final total.
pub fn pay_order(
    order: &mut Order,
    card: &CreditCard,
    processor: &dyn PaymentProcessor,
) -> ChargeResult<Receipt> {
    if order.is_paid() {
        return Err(ChargeError::AlreadyPaid);
    }

    let amount = order.total();
    if amount == 0 {
        return Err(ChargeError::ZeroAmount);
    }

    debug!(
        order_id = %order.id,
        amount,
        gateway = processor.gateway_name(),
        "settling order"
    );

    processor.validate_card(card, card.expiry_month, card.expiry_year)?;
    let record = processor.charge(card, amount)?;

    order.pay()?;

    info!(order_id = %order.id, amount, reference = %record.reference, "order paid in full");

    Ok(Receipt {
        order_id: order.id.clone(),
        total: amount,
        record,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::{LineItem, OrderStatus};

    /// Test double: applies the month/expiry policy against a fixed date
    /// and settles every structurally acceptable charge.
    struct ProcessorStub {
        today: chrono::NaiveDate,
    }

    impl ProcessorStub {
        fn new() -> Self {
            Self {
                today: chrono::NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
            }
        }
    }

    impl PaymentProcessor for ProcessorStub {
        fn validate_card(&self, _card: &CreditCard, month: u8, year: u16) -> ChargeResult<()> {
            if !(1..=12).contains(&month) {
                return Err(ChargeError::InvalidMonth { month });
            }
            let expiry =
                chrono::NaiveDate::from_ymd_opt(year as i32, month as u32, 1).unwrap();
            if expiry < self.today {
                return Err(ChargeError::CardExpired { month, year });
            }
            Ok(())
        }

        fn charge(&self, card: &CreditCard, amount: i64) -> ChargeResult<ChargeRecord> {
            self.validate_card(card, card.expiry_month, card.expiry_year)?;
            Ok(ChargeRecord::new(self.gateway_name(), card, amount))
        }

        fn gateway_name(&self) -> &'static str {
            "stub"
        }
    }

    fn valid_card() -> CreditCard {
        CreditCard::new("1249190007575069", 12, 2026)
    }

    fn order_with_coke() -> Order {
        let mut order = Order::new();
        order.add_item(LineItem::new("Coke", 300));
        order
    }

    #[test]
    fn test_pay_order_valid() {
        let mut order = order_with_coke();
        let receipt = pay_order(&mut order, &valid_card(), &ProcessorStub::new()).unwrap();

        assert_eq!(order.status(), OrderStatus::Paid);
        assert_eq!(receipt.total, 300);
        assert_eq!(receipt.order_id, order.id);
        assert_eq!(receipt.record.amount, 300);
    }

    #[test]
    fn test_pay_order_empty_order() {
        let mut order = Order::new();
        let err = pay_order(&mut order, &valid_card(), &ProcessorStub::new()).unwrap_err();

        assert_eq!(err, ChargeError::ZeroAmount);
        assert_eq!(order.status(), OrderStatus::Open);
    }

    #[test]
    fn test_pay_order_invalid_card_month() {
        let mut order = order_with_coke();
        let card = CreditCard::new("1249190007575069", 15, 2026);
        let err = pay_order(&mut order, &card, &ProcessorStub::new()).unwrap_err();

        assert_eq!(err, ChargeError::InvalidMonth { month: 15 });
        assert_eq!(order.status(), OrderStatus::Open);
    }

    #[test]
    fn test_pay_order_card_expired() {
        let mut order = order_with_coke();
        let card = CreditCard::new("1249190007575069", 12, 2023);
        let err = pay_order(&mut order, &card, &ProcessorStub::new()).unwrap_err();

        assert_eq!(
            err,
            ChargeError::CardExpired {
                month: 12,
                year: 2023
            }
        );
        assert_eq!(order.status(), OrderStatus::Open);
    }

    #[test]
    fn test_pay_order_already_paid_does_not_recharge() {
        /// Counts charge attempts so a re-settlement would be visible.
        struct CountingProcessor {
            charges: std::sync::atomic::AtomicU32,
        }

        impl PaymentProcessor for CountingProcessor {
            fn validate_card(&self, _: &CreditCard, _: u8, _: u16) -> ChargeResult<()> {
                Ok(())
            }

            fn charge(&self, card: &CreditCard, amount: i64) -> ChargeResult<ChargeRecord> {
                self.charges
                    .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
                Ok(ChargeRecord::new(self.gateway_name(), card, amount))
            }

            fn gateway_name(&self) -> &'static str {
                "counting"
            }
        }

        let processor = CountingProcessor {
            charges: std::sync::atomic::AtomicU32::new(0),
        };

        let mut order = order_with_coke();
        pay_order(&mut order, &valid_card(), &processor).unwrap();

        let err = pay_order(&mut order, &valid_card(), &processor).unwrap_err();
        assert_eq!(err, ChargeError::AlreadyPaid);
        assert_eq!(
            processor.charges.load(std::sync::atomic::Ordering::SeqCst),
            1
        );
        assert!(order.is_paid());
    }

    #[test]
    fn test_pay_order_charge_failure_leaves_order_open() {
        struct DecliningProcessor;

        impl PaymentProcessor for DecliningProcessor {
            fn validate_card(&self, _: &CreditCard, _: u8, _: u16) -> ChargeResult<()> {
                Ok(())
            }

            fn charge(&self, _: &CreditCard, _: i64) -> ChargeResult<ChargeRecord> {
                Err(ChargeError::InvalidApiKey)
            }

            fn gateway_name(&self) -> &'static str {
                "declining"
            }
        }

        let mut order = order_with_coke();
        let err = pay_order(&mut order, &valid_card(), &DecliningProcessor).unwrap_err();

        assert_eq!(err, ChargeError::InvalidApiKey);
        assert_eq!(order.status(), OrderStatus::Open);
    }
}

//! # charge-core
//!
//! Core types and traits for the chargeline payment engine.
//!
//! This crate provides:
//! - `Order`, `LineItem`, and `OrderStatus` for the order lifecycle
//! - `CreditCard` for card data captured at the point of sale
//! - `PaymentProcessor` trait for implementing payment gateways
//! - `luhn_checksum` for structural card-number validation
//! - `Clock` for injectable expiry-date comparison
//! - `ChargeError` for typed error handling
//! - `pay_order` to drive validation, charge, and the order transition
//!
//! ## Example
//!
//! ```rust,ignore
//! use charge_core::{pay_order, CreditCard, LineItem, Order};
//!
//! // Build an order
//! let mut order = Order::new();
//! order.add_item(LineItem::new("Shoes", 100_00).with_quantity(2));
//! order.add_item(LineItem::new("Hat", 50_00));
//!
//! // Card data is captured unvalidated; validity is a charge-time property
//! let card = CreditCard::new("1249190007575069", 12, 2030);
//!
//! // Settle against any PaymentProcessor implementation
//! let receipt = pay_order(&mut order, &card, &processor)?;
//! println!("paid {}", receipt.total);
//! ```

pub mod card;
pub mod clock;
pub mod error;
pub mod luhn;
pub mod order;
pub mod payment;
pub mod processor;

// Re-exports for convenience
pub use card::CreditCard;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ChargeError, ChargeResult};
pub use luhn::luhn_checksum;
pub use order::{LineItem, Order, OrderStatus};
pub use payment::{pay_order, Receipt};
pub use processor::{ChargeRecord, PaymentProcessor};

//! # charge-gateway
//!
//! VectorPay gateway processor for the chargeline payment engine.
//!
//! This crate provides the production [`PaymentProcessor`] implementation:
//! card validation (expiry policy + Luhn checksum) and credential-checked
//! settlement against the VectorPay gateway boundary.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use charge_core::{pay_order, CreditCard, LineItem, Order};
//! use charge_gateway::{GatewayConfig, VectorPayProcessor};
//!
//! // Expected credential baseline from VECTORPAY_API_KEY
//! let config = GatewayConfig::from_env()?;
//! let processor = VectorPayProcessor::new(config.api_key.clone(), config);
//!
//! let mut order = Order::new();
//! order.add_item(LineItem::new("Shoes", 100_00).with_quantity(2));
//!
//! let card = CreditCard::new("1249190007575069", 12, 2030);
//! let receipt = pay_order(&mut order, &card, &processor)?;
//! ```
//!
//! [`PaymentProcessor`]: charge_core::PaymentProcessor

pub mod config;
pub mod processor;

// Re-exports
pub use config::GatewayConfig;
pub use processor::VectorPayProcessor;

//! # Chargeline
//!
//! Interactive point-of-sale front end for the chargeline payment engine.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export VECTORPAY_API_KEY=0super-1secret-2api-3key
//!
//! # Run the demo checkout (test card number: 1249190007575069)
//! chargeline
//! ```

use charge_core::{pay_order, ChargeError, CreditCard, LineItem, Order};
use charge_gateway::VectorPayProcessor;
use std::io::{self, Write};
use tracing::{error, info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    print_banner();

    let processor = VectorPayProcessor::from_env()?;

    let card_number = prompt("Please enter your card number: ")?;
    let month: u8 = prompt("Please enter the card expiration month: ")?
        .parse()
        .map_err(|_| anyhow::anyhow!("expiration month must be a number"))?;
    let year: u16 = prompt("Please enter the card expiration year: ")?
        .parse()
        .map_err(|_| anyhow::anyhow!("expiration year must be a number"))?;

    let card = CreditCard::new(card_number, month, year);

    let mut order = Order::new();
    order.add_item(LineItem::new("Shoes", 100_00).with_quantity(2));
    order.add_item(LineItem::new("Hat", 50_00));

    info!(order_id = %order.id, total_minor = order.total(), "order created");

    match pay_order(&mut order, &card, &processor) {
        Ok(receipt) => {
            println!(
                "Order paid in full: ${:.2}",
                receipt.total as f64 / 100.0
            );
            println!("{}", serde_json::to_string_pretty(&receipt)?);
            Ok(())
        }
        Err(err) => {
            error!(code = err.code(), "payment failed: {err}");
            match &err {
                ChargeError::CardExpired { .. } => {
                    println!("Card is expired. Please use a different card.");
                }
                ChargeError::InvalidMonth { .. } => {
                    println!("Invalid expiry month. Please enter a valid month between 1 and 12.");
                }
                other => {
                    println!("Payment failed: {other}");
                }
            }
            // Payment failures are classified outcomes, already reported
            std::process::exit(1);
        }
    }
}

fn prompt(message: &str) -> io::Result<String> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn print_banner() {
    println!(
        r#"
  💳 Chargeline 💳
  ━━━━━━━━━━━━━━━━━
  Stored-value checkout
  Version: {}

"#,
        env!("CARGO_PKG_VERSION")
    );
}

//! # Gateway Configuration
//!
//! Configuration for the VectorPay gateway. The expected API key is loaded
//! from the environment; the core never reads ambient process state itself.

use charge_core::{ChargeError, ChargeResult};
use std::env;

/// VectorPay gateway configuration
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Expected API key: the baseline a processor's presented credential
    /// is compared against at charge time
    pub api_key: String,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `VECTORPAY_API_KEY`
    pub fn from_env() -> ChargeResult<Self> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let api_key = env::var("VECTORPAY_API_KEY")
            .map_err(|_| ChargeError::Configuration("VECTORPAY_API_KEY not set".to_string()))?;

        if api_key.trim().is_empty() {
            return Err(ChargeError::Configuration(
                "VECTORPAY_API_KEY must not be empty".to_string(),
            ));
        }

        Ok(Self { api_key })
    }

    /// Create config with an explicit key (for testing)
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }
}

//! # Fuelquote Pricing
//!
//! Pricing engine and display formatting for fuel quotes.
//!
//! ## Pricing Formula
//!
//! ```text
//! final = max(retail - tier_discount + market_adjustment + grid_surcharge, floor)
//! ```
//!
//! Where:
//! - tier_discount: retail x tier discount percent (15% down to 2%)
//! - market_adjustment: per-country ZAR adjustment (may be negative)
//! - grid_surcharge: Coastal/Inland supply surcharge
//! - floor: minimum final price in ZAR

pub mod display;
pub mod engine;

pub use display::format_quote;
pub use engine::PricingEngine;

use rust_decimal::Decimal;

/// Pricing configuration
#[derive(Debug, Clone)]
pub struct PricingConfig {
    /// Wholesale price per litre in ZAR
    pub base_wholesale_price: Decimal,
    /// Retail price per litre in ZAR before adjustments
    pub base_retail_price: Decimal,
    /// Lowest final price a quote may carry
    pub minimum_price_floor: Decimal,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            base_wholesale_price: fuelquote_common::BASE_WHOLESALE_PRICE,
            base_retail_price: fuelquote_common::BASE_RETAIL_PRICE,
            minimum_price_floor: fuelquote_common::MINIMUM_PRICE_FLOOR,
        }
    }
}

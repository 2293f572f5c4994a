//! # Fuelquote Common
//!
//! Shared domain types and lookup tables for the fuel price quote service.
//!
//! ## Core Types
//!
//! - [`CustomerTier`]: validated pricing bracket (1 best discount, 14 least)
//! - [`Country`]: markets served, each keyed into the local-market-adjustment
//!   and currency-conversion tables
//! - [`GridLocation`]: Coastal/Inland supply classification with its surcharge
//! - [`PriceBreakdown`] / [`FormattedQuote`]: the quote result and its
//!   display-string rendering
//!
//! All monetary constants are fixed at build time; nothing here mutates at
//! runtime.

pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{QuoteError, Result, ValidationError};
pub use types::{
    market::{Country, CurrencyInfo, GridLocation},
    quote::{CustomerTier, FormattedQuote, PriceBreakdown},
};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Fuelquote version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Wholesale price per litre in ZAR
pub const BASE_WHOLESALE_PRICE: Decimal = dec!(18.00);

/// Retail price per litre in ZAR, before discounts and adjustments
pub const BASE_RETAIL_PRICE: Decimal = dec!(21.50);

/// Minimum final price in ZAR, regardless of discounts and adjustments
pub const MINIMUM_PRICE_FLOOR: Decimal = dec!(12.00);

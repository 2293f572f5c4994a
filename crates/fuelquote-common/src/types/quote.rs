//! Quote result types and the customer tier table
//!
//! [`CustomerTier`] validates on construction; the discount table lookup
//! still falls back to zero percent for an out-of-table tier so the table
//! read itself can never fail.

use crate::error::ValidationError;
use crate::types::market::{Country, GridLocation};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Lowest (best-discount) customer tier
pub const MIN_TIER: u8 = 1;

/// Highest (least-discount) customer tier
pub const MAX_TIER: u8 = 14;

/// Discount percent per tier, indexed by tier - 1 (tier 1 => 15%, tier 14 => 2%)
const TIER_DISCOUNT_PERCENT: [Decimal; 14] = [
    dec!(15),
    dec!(14),
    dec!(13),
    dec!(12),
    dec!(11),
    dec!(10),
    dec!(9),
    dec!(8),
    dec!(7),
    dec!(6),
    dec!(5),
    dec!(4),
    dec!(3),
    dec!(2),
];

/// Customer pricing bracket (1 best discount, 14 least)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64")]
pub struct CustomerTier(u8);

impl CustomerTier {
    /// Validate an untrusted tier value
    pub fn new(tier: i64) -> Result<Self, ValidationError> {
        if (i64::from(MIN_TIER)..=i64::from(MAX_TIER)).contains(&tier) {
            Ok(Self(tier as u8))
        } else {
            Err(ValidationError::InvalidTier { tier })
        }
    }

    /// Raw tier value
    pub fn get(&self) -> u8 {
        self.0
    }

    /// Discount percent for this tier. Unknown tiers fall back to zero;
    /// validation makes that branch unreachable in practice, but the lookup
    /// stays a plain get-with-fallback rather than a panic path.
    pub fn discount_percent(&self) -> Decimal {
        usize::from(self.0)
            .checked_sub(1)
            .and_then(|idx| TIER_DISCOUNT_PERCENT.get(idx))
            .copied()
            .unwrap_or(Decimal::ZERO)
    }
}

impl TryFrom<i64> for CustomerTier {
    type Error = ValidationError;

    fn try_from(tier: i64) -> Result<Self, Self::Error> {
        Self::new(tier)
    }
}

/// Complete price breakdown for one quote; computed per request, never stored
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub base_wholesale_price: Decimal,
    pub base_retail_price: Decimal,
    pub customer_tier: CustomerTier,
    pub country: Country,
    pub grid_location: GridLocation,
    /// Discount as a fraction of retail (tier 1 => 0.15)
    pub tier_discount_percentage: Decimal,
    /// ZAR amount taken off the retail price for this tier
    pub tier_discount: Decimal,
    pub local_market_adjustment: Decimal,
    pub grid_location_adjustment: Decimal,
    /// Clamped result; never below the configured floor
    pub final_price: Decimal,
}

/// Display-string rendering of a [`PriceBreakdown`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedQuote {
    pub wholesale_price: String,
    pub base_retail_price: String,
    pub tier_discount: String,
    pub local_market_adjustment: String,
    pub grid_location_adjustment: String,
    pub final_price: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_bounds() {
        assert!(CustomerTier::new(1).is_ok());
        assert!(CustomerTier::new(14).is_ok());
        assert!(CustomerTier::new(0).is_err());
        assert!(CustomerTier::new(15).is_err());
        assert!(CustomerTier::new(-3).is_err());
    }

    #[test]
    fn test_discount_table_endpoints() {
        assert_eq!(CustomerTier::new(1).unwrap().discount_percent(), dec!(15));
        assert_eq!(CustomerTier::new(14).unwrap().discount_percent(), dec!(2));
    }

    #[test]
    fn test_discount_table_is_descending() {
        let mut previous = dec!(16);
        for tier in MIN_TIER..=MAX_TIER {
            let pct = CustomerTier::new(i64::from(tier)).unwrap().discount_percent();
            assert!(pct < previous, "tier {} percent {} not descending", tier, pct);
            previous = pct;
        }
    }

    #[test]
    fn test_tier_deserialization_validates() {
        let tier: CustomerTier = serde_json::from_str("7").unwrap();
        assert_eq!(tier.get(), 7);
        assert!(serde_json::from_str::<CustomerTier>("15").is_err());
    }

    #[test]
    fn test_breakdown_serializes_camel_case() {
        let breakdown = PriceBreakdown {
            base_wholesale_price: dec!(18.00),
            base_retail_price: dec!(21.50),
            customer_tier: CustomerTier::new(1).unwrap(),
            country: Country::SouthAfrica,
            grid_location: GridLocation::Inland,
            tier_discount_percentage: dec!(0.15),
            tier_discount: dec!(3.225),
            local_market_adjustment: dec!(0.00),
            grid_location_adjustment: dec!(1.60),
            final_price: dec!(19.875),
        };

        let json = serde_json::to_value(&breakdown).unwrap();
        assert_eq!(json["customerTier"], 1);
        assert_eq!(json["country"], "South Africa");
        assert_eq!(json["gridLocation"], "Inland");
        assert_eq!(json["finalPrice"], 19.875);
        assert_eq!(json["tierDiscountPercentage"], 0.15);
    }
}

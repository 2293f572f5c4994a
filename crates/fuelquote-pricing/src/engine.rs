//! Fuel price calculation
//!
//! Applies the tier discount, per-country market adjustment, and grid
//! surcharge to the retail price, then clamps the result to the configured
//! floor. Pure function of the static tables and its inputs; validation
//! happens before a request reaches the engine.

use crate::PricingConfig;
use fuelquote_common::{Country, CustomerTier, GridLocation, PriceBreakdown};
use rust_decimal_macros::dec;
use tracing::{debug, instrument};

/// Deterministic quote calculator over the static market tables
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    /// Compute the full price breakdown for already-validated inputs.
    ///
    /// Always returns a value; the table lookups fall back to a zero
    /// adjustment for keys they do not know instead of failing.
    #[instrument(skip(self))]
    pub fn calculate(
        &self,
        tier: CustomerTier,
        country: Country,
        grid_location: GridLocation,
    ) -> PriceBreakdown {
        let discount_fraction = tier.discount_percent() / dec!(100);
        let tier_discount = self.config.base_retail_price * discount_fraction;

        let local_market_adjustment = country.market_adjustment();
        let grid_location_adjustment = grid_location.adjustment();

        let calculated = self.config.base_retail_price - tier_discount
            + local_market_adjustment
            + grid_location_adjustment;

        // Minimum price protection
        let final_price = calculated.max(self.config.minimum_price_floor);

        debug!(%calculated, %final_price, "quote computed");

        PriceBreakdown {
            base_wholesale_price: self.config.base_wholesale_price,
            base_retail_price: self.config.base_retail_price,
            customer_tier: tier,
            country,
            grid_location,
            tier_discount_percentage: discount_fraction,
            tier_discount,
            local_market_adjustment,
            grid_location_adjustment,
            final_price,
        }
    }
}

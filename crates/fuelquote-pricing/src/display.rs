//! Currency-aware display formatting for quote breakdowns
//!
//! All amounts render with two decimals. The market adjustment carries an
//! explicit sign, with values inside 0.01 of zero rendered unsigned. Grid
//! surcharges are always non-negative in the table, so they render with a
//! fixed `+` prefix and no negative branch; a negative table entry would
//! display with the wrong sign (known limitation, kept as-is).

use fuelquote_common::{FormattedQuote, PriceBreakdown};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Values with an absolute magnitude below this display as zero
const ZERO_EPSILON: Decimal = dec!(0.01);

/// Render a price breakdown as display strings
pub fn format_quote(breakdown: &PriceBreakdown) -> FormattedQuote {
    FormattedQuote {
        wholesale_price: zar(breakdown.base_wholesale_price),
        base_retail_price: zar(breakdown.base_retail_price),
        tier_discount: format!("-{}", zar(breakdown.tier_discount)),
        local_market_adjustment: format_adjustment(breakdown.local_market_adjustment),
        grid_location_adjustment: format!("+{}", zar(breakdown.grid_location_adjustment)),
        final_price: format_final_price(breakdown),
    }
}

/// Two-decimal ZAR amount with the reference-currency prefix
fn zar(value: Decimal) -> String {
    format!("R{:.2}", value.round_dp(2))
}

/// Sign-aware rendering for market adjustments
fn format_adjustment(value: Decimal) -> String {
    if value.abs() < ZERO_EPSILON {
        zar(value.abs())
    } else if value > Decimal::ZERO {
        format!("+{}", zar(value))
    } else {
        format!("-{}", zar(value.abs()))
    }
}

/// Final price in the local currency, with the ZAR reference appended for
/// non-reference countries
fn format_final_price(breakdown: &PriceBreakdown) -> String {
    if breakdown.country.is_reference() {
        return format!("{} ZAR", zar(breakdown.final_price));
    }

    let currency = breakdown.country.currency();
    let local = (breakdown.final_price / currency.rate).round_dp(2);
    format!(
        "{}{:.2} {} | {} ZAR",
        currency.symbol,
        local,
        currency.code,
        zar(breakdown.final_price)
    )
}

//! Market lookup tables - countries, grid locations, and currencies
//!
//! Each [`Country`] keys into two parallel tables: a local market adjustment
//! in ZAR and a display currency with its conversion rate. [`GridLocation`]
//! carries the supply surcharge. South Africa is the reference market;
//! every other country's price is also shown against ZAR.

use crate::error::ValidationError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Countries served by the quoting engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    #[serde(rename = "South Africa")]
    SouthAfrica,
    Zimbabwe,
    Botswana,
}

impl Country {
    /// Every country in the known set
    pub const ALL: [Country; 3] = [Country::SouthAfrica, Country::Zimbabwe, Country::Botswana];

    /// Local market adjustment in ZAR, applied on top of the retail price
    pub fn market_adjustment(&self) -> Decimal {
        match self {
            Country::SouthAfrica => dec!(0.00),
            Country::Zimbabwe => dec!(-5.65),
            Country::Botswana => dec!(-6.40),
        }
    }

    /// Display currency for this country's final price
    pub fn currency(&self) -> CurrencyInfo {
        match self {
            Country::SouthAfrica => CurrencyInfo {
                rate: dec!(1.0),
                symbol: "R",
                code: "ZAR",
            },
            Country::Zimbabwe => CurrencyInfo {
                rate: dec!(19.97),
                symbol: "$",
                code: "USD",
            },
            Country::Botswana => CurrencyInfo {
                rate: dec!(1.36),
                symbol: "P",
                code: "BWP",
            },
        }
    }

    /// Whether this country prices in the reference currency (ZAR)
    pub fn is_reference(&self) -> bool {
        matches!(self, Country::SouthAfrica)
    }

    /// Human-readable country name, matching the wire format
    pub fn name(&self) -> &'static str {
        match self {
            Country::SouthAfrica => "South Africa",
            Country::Zimbabwe => "Zimbabwe",
            Country::Botswana => "Botswana",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Country {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "South Africa" => Ok(Country::SouthAfrica),
            "Zimbabwe" => Ok(Country::Zimbabwe),
            "Botswana" => Ok(Country::Botswana),
            other => Err(ValidationError::UnknownCountry(other.to_string())),
        }
    }
}

/// Conversion entry for a country's display currency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyInfo {
    /// ZAR per unit of local currency; 1.0 for the reference market
    pub rate: Decimal,
    /// Currency symbol prefix (e.g. "R", "$", "P")
    pub symbol: &'static str,
    /// ISO currency code (e.g. "ZAR", "USD", "BWP")
    pub code: &'static str,
}

/// Physical supply classification driving a fixed surcharge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GridLocation {
    Coastal,
    Inland,
}

impl GridLocation {
    /// Every grid location in the known set
    pub const ALL: [GridLocation; 2] = [GridLocation::Coastal, GridLocation::Inland];

    /// Supply surcharge in ZAR for this grid classification.
    /// Table values are always non-negative.
    pub fn adjustment(&self) -> Decimal {
        match self {
            GridLocation::Coastal => dec!(0.75),
            GridLocation::Inland => dec!(1.60),
        }
    }
}

impl fmt::Display for GridLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GridLocation::Coastal => "Coastal",
            GridLocation::Inland => "Inland",
        };
        f.write_str(name)
    }
}

impl FromStr for GridLocation {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Coastal" => Ok(GridLocation::Coastal),
            "Inland" => Ok(GridLocation::Inland),
            other => Err(ValidationError::UnknownGridLocation(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_adjustments() {
        assert_eq!(Country::SouthAfrica.market_adjustment(), dec!(0.00));
        assert_eq!(Country::Zimbabwe.market_adjustment(), dec!(-5.65));
        assert_eq!(Country::Botswana.market_adjustment(), dec!(-6.40));
    }

    #[test]
    fn test_grid_adjustments() {
        assert_eq!(GridLocation::Coastal.adjustment(), dec!(0.75));
        assert_eq!(GridLocation::Inland.adjustment(), dec!(1.60));
    }

    #[test]
    fn test_reference_currency() {
        let zar = Country::SouthAfrica.currency();
        assert_eq!(zar.rate, dec!(1.0));
        assert_eq!(zar.code, "ZAR");
        assert!(Country::SouthAfrica.is_reference());
        assert!(!Country::Zimbabwe.is_reference());
    }

    #[test]
    fn test_country_parsing() {
        assert_eq!("South Africa".parse::<Country>().unwrap(), Country::SouthAfrica);
        assert_eq!("Botswana".parse::<Country>().unwrap(), Country::Botswana);
        assert!("Namibia".parse::<Country>().is_err());
        // case-sensitive, matching the accepted wire values exactly
        assert!("south africa".parse::<Country>().is_err());
    }

    #[test]
    fn test_grid_location_parsing() {
        assert_eq!("Coastal".parse::<GridLocation>().unwrap(), GridLocation::Coastal);
        assert!("Offshore".parse::<GridLocation>().is_err());
    }

    #[test]
    fn test_country_serde_uses_display_names() {
        let json = serde_json::to_string(&Country::SouthAfrica).unwrap();
        assert_eq!(json, "\"South Africa\"");
        let back: Country = serde_json::from_str("\"Zimbabwe\"").unwrap();
        assert_eq!(back, Country::Zimbabwe);
    }
}

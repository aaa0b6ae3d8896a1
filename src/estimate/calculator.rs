//! Flat-rate property tax calculators.
//!
//! Rates last reviewed March 2019:
//!
//! - **National**: 1.17% nationwide average (April 2018). Understates the
//!   true figure because California's effective rate is taken against market
//!   value rather than assessed value.
//! - **California**: 1.143% statewide average (2017 annual report). Every
//!   area pays at least 1%; tax rate areas can add bonds on top.
//! - **Colorado**: 0.57% statewide average (2018).
//! - **Washington DC**: 0.85% after the $73,350 homestead exemption, assuming
//!   an owner-occupier.

use serde::Serialize;

const NATIONAL_RATE: f64 = 0.0117;
const CALIFORNIA_RATE: f64 = 0.01143;
const COLORADO_RATE: f64 = 0.0057;
const DC_RATE: f64 = 0.0085;
const DC_HOMESTEAD_EXEMPTION: f64 = 73_350.0;

/// One estimate, serialized as the `/ptax` success body.
///
/// Field order is the JSON key order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CalculationResult {
    /// Annual tax, two decimals.
    pub property_tax_amount: String,
    pub property_tax_effective_rate: EffectiveRate,
    pub information: &'static str,
}

/// Tax divided by value.
///
/// A JSON number for every calculator except Washington DC, which sends a
/// five-decimal string. Clients depend on both shapes.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EffectiveRate {
    Ratio(f64),
    Formatted(String),
}

/// A jurisdiction's tax calculation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Calculator {
    National,
    California,
    Colorado,
    WashingtonDc,
}

impl Calculator {
    /// The calculator registered for a two-letter state code, if any.
    pub fn for_state(code: &str) -> Option<Self> {
        match code {
            "CA" => Some(Self::California),
            "CO" => Some(Self::Colorado),
            "DC" => Some(Self::WashingtonDc),
            _ => None,
        }
    }

    /// Estimates annual tax on a property worth `value`.
    ///
    /// `address` is unused by the flat-rate calculators; it is the hook for
    /// jurisdiction-level rates.
    pub fn compute(self, _address: Option<&str>, value: f64) -> CalculationResult {
        match self {
            Self::National => flat_rate(
                value,
                NATIONAL_RATE,
                "Based on the nationwide average property tax rate",
            ),
            Self::California => flat_rate(
                value,
                CALIFORNIA_RATE,
                "Based on the California statewide average property tax rate",
            ),
            Self::Colorado => flat_rate(
                value,
                COLORADO_RATE,
                "Based on the Colorado statewide average property tax rate",
            ),
            Self::WashingtonDc => {
                let assessed = (value - DC_HOMESTEAD_EXEMPTION).max(0.0);
                let amount = assessed * DC_RATE;
                CalculationResult {
                    property_tax_amount: format!("{amount:.2}"),
                    property_tax_effective_rate: EffectiveRate::Formatted(format!(
                        "{:.5}",
                        amount / value
                    )),
                    information: "Based on DC-wide property tax rate after application of homestead exemption",
                }
            }
        }
    }
}

fn flat_rate(value: f64, rate: f64, information: &'static str) -> CalculationResult {
    CalculationResult {
        property_tax_amount: format!("{:.2}", value * rate),
        property_tax_effective_rate: EffectiveRate::Ratio(rate),
        information,
    }
}

//! Tariff impact calculation
//!
//! Pure economic model estimating how a tariff on the import cost of a good
//! moves its consumer price, given the retailer's markup and how much of the
//! tariff cost the seller passes through instead of absorbing.

use crate::core::types::{CalculationResult, TariffCalculation};
use crate::utils::error::{Result, TrackerError};

/// Pass-through applied when the caller does not supply one, in percent
pub const DEFAULT_PASS_THROUGH_PCT: f64 = 75.0;

/// Compute the tariff impact on the consumer price
///
/// Deterministic and side-effect free. Intermediate values are kept at full
/// precision; only the six outputs are rounded, half-up to 2 decimal places.
pub fn compute_impact(input: &TariffCalculation) -> Result<CalculationResult> {
    validate(input)?;

    let pass_through = input.pass_through_rate.unwrap_or(DEFAULT_PASS_THROUGH_PCT);

    let import_cost = input.retail_price / (1.0 + input.retail_markup / 100.0);
    let tariff_amount = import_cost * (input.tariff_rate / 100.0);
    let tariff_passed = tariff_amount * (pass_through / 100.0);
    let future_price = input.retail_price + tariff_passed;

    let tariff_tax_pct = if future_price > 0.0 {
        (tariff_amount / future_price) * 100.0
    } else {
        0.0
    };
    let price_increase_pct = if input.retail_price > 0.0 {
        (tariff_passed / input.retail_price) * 100.0
    } else {
        0.0
    };

    Ok(CalculationResult {
        import_cost: round2(import_cost),
        tariff_amount: round2(tariff_amount),
        tariff_passed: round2(tariff_passed),
        future_price: round2(future_price),
        tariff_tax_pct: round2(tariff_tax_pct),
        price_increase_pct: round2(price_increase_pct),
    })
}

fn validate(input: &TariffCalculation) -> Result<()> {
    if !input.retail_price.is_finite() || input.retail_price < 0.0 {
        return Err(TrackerError::validation(
            "retail_price must be a non-negative number",
        ));
    }
    // markup of -100% would zero the denominator of the import-cost formula
    if !input.retail_markup.is_finite() || input.retail_markup <= -100.0 {
        return Err(TrackerError::validation(
            "retail_markup must be greater than -100",
        ));
    }
    if !input.tariff_rate.is_finite() || input.tariff_rate < 0.0 {
        return Err(TrackerError::validation(
            "tariff_rate must be a non-negative number",
        ));
    }
    Ok(())
}

/// Round half-up to 2 decimal places
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

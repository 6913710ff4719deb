//! Growth Simulator
//!
//! Future value of fixed periodic contributions at a fixed annual rate,
//! compounded annually via the ordinary-annuity formula. Pure and stateless;
//! the only failure mode is input validation.

use crate::error::{Result, SimulatorError};
use crate::model::{RiskTier, SimulationInput, SimulationResult, YearPoint};

/// Fixed mapping from risk tier to assumed annual growth rate.
const RATE_TABLE: [(RiskTier, f64); 3] = [
    (RiskTier::Conservative, 0.05),
    (RiskTier::Balanced, 0.08),
    (RiskTier::Aggressive, 0.12),
];

/// Look up the annual rate for a tier.
///
/// Total over the current enum, but the table is the source of truth: a tier
/// without an entry surfaces as `InvalidRiskTier` instead of defaulting.
pub fn rate_for(tier: RiskTier) -> Result<f64> {
    RATE_TABLE
        .iter()
        .find(|(t, _)| *t == tier)
        .map(|&(_, rate)| rate)
        .ok_or_else(|| SimulatorError::InvalidRiskTier(tier.label().into()))
}

/// Run the projection for a validated input.
///
/// Produces one `YearPoint` per year 1..=n, in chronological order, plus the
/// final value (identical to the last point's `portfolio_value`).
///
/// Note on the formula: the *monthly* amount compounds as if deposited once
/// per year (`P * ((1+r)^i - 1) / r` with `P` the monthly figure), while
/// cumulative contributions count all twelve monthly deposits. That mismatch
/// is the published product behavior and is kept bit-for-bit compatible; do
/// not switch to true monthly compounding without product sign-off.
pub fn simulate(input: &SimulationInput) -> Result<SimulationResult> {
    let p = input.monthly_contribution();
    let rate = rate_for(input.risk_tier())?;
    let years = input.years();

    let annual_series: Vec<YearPoint> = (1..=years)
        .map(|year| YearPoint {
            year,
            portfolio_value: annuity_value(p, rate, year),
            cumulative_contribution: p * 12.0 * f64::from(year),
        })
        .collect();

    tracing::debug!(
        monthly_contribution = p,
        years,
        tier = %input.risk_tier(),
        rate,
        "computed growth projection"
    );

    Ok(SimulationResult {
        final_value: annuity_value(p, rate, years),
        annual_series,
    })
}

/// Ordinary-annuity future value of `p` after `year` periods at `rate`.
///
/// Falls back to linear accumulation at a zero rate so the formula stays
/// total if the tier table ever grows a 0% entry.
fn annuity_value(p: f64, rate: f64, year: u32) -> f64 {
    if rate == 0.0 {
        p * f64::from(year)
    } else {
        // powf, not powi: year is u32 and must not wrap through i32.
        p * ((1.0 + rate).powf(f64::from(year)) - 1.0) / rate
    }
}

//! Domain Models
//!
//! Inputs and outputs of the growth simulation. All projection arithmetic is
//! plain f64 with no rounding; formatting for display belongs to callers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulatorError};

/// Smallest accepted monthly contribution, in currency units.
pub const MIN_MONTHLY_CONTRIBUTION: f64 = 10.0;

/// Shortest accepted investment horizon, in years.
pub const MIN_YEARS: u32 = 1;

/// Qualitative risk appetite, mapped to a fixed assumed annual return.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Conservative,
    Balanced,
    Aggressive,
}

impl RiskTier {
    pub const ALL: [Self; 3] = [Self::Conservative, Self::Balanced, Self::Aggressive];

    /// Wire/display name, matching the serde representation.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Conservative => "conservative",
            Self::Balanced => "balanced",
            Self::Aggressive => "aggressive",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RiskTier {
    type Err = SimulatorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "conservative" => Ok(Self::Conservative),
            "balanced" => Ok(Self::Balanced),
            "aggressive" => Ok(Self::Aggressive),
            other => Err(SimulatorError::InvalidInput(format!(
                "risk_tier must be one of conservative, balanced, aggressive (got '{other}')"
            ))),
        }
    }
}

/// Validated simulation request.
///
/// Construction is the only way to obtain one, so every instance satisfies
/// the contribution and horizon minimums. Out-of-range values are rejected,
/// never clamped.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SimulationInput {
    monthly_contribution: f64,
    years: u32,
    risk_tier: RiskTier,
}

impl SimulationInput {
    pub fn new(monthly_contribution: f64, years: u32, risk_tier: RiskTier) -> Result<Self> {
        if !monthly_contribution.is_finite() {
            return Err(SimulatorError::InvalidInput(
                "monthly_contribution must be a finite number".into(),
            ));
        }
        if monthly_contribution < MIN_MONTHLY_CONTRIBUTION {
            return Err(SimulatorError::InvalidInput(format!(
                "monthly_contribution must be at least {MIN_MONTHLY_CONTRIBUTION} (got {monthly_contribution})"
            )));
        }
        if years < MIN_YEARS {
            return Err(SimulatorError::InvalidInput(format!(
                "years must be at least {MIN_YEARS} (got {years})"
            )));
        }

        Ok(Self {
            monthly_contribution,
            years,
            risk_tier,
        })
    }

    pub const fn monthly_contribution(&self) -> f64 {
        self.monthly_contribution
    }

    pub const fn years(&self) -> u32 {
        self.years
    }

    pub const fn risk_tier(&self) -> RiskTier {
        self.risk_tier
    }
}

/// One year of the projected trajectory.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct YearPoint {
    /// 1-based year index.
    pub year: u32,

    /// Compounded value through this year.
    pub portfolio_value: f64,

    /// Nominal money paid in through this year, ignoring growth.
    pub cumulative_contribution: f64,
}

/// Full simulation output: final value plus the year-by-year series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Projected value at the end of the full period. Always equals the
    /// `portfolio_value` of the last series entry.
    pub final_value: f64,

    /// One entry per year, chronological, years 1..=n.
    pub annual_series: Vec<YearPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_labels_round_trip() {
        for tier in RiskTier::ALL {
            assert_eq!(tier.label().parse::<RiskTier>().unwrap(), tier);
        }
    }

    #[test]
    fn tier_parse_is_case_insensitive() {
        assert_eq!("Balanced".parse::<RiskTier>().unwrap(), RiskTier::Balanced);
        assert_eq!(
            " AGGRESSIVE ".parse::<RiskTier>().unwrap(),
            RiskTier::Aggressive
        );
    }

    #[test]
    fn tier_parse_rejects_unknown() {
        let err = "speculative".parse::<RiskTier>().unwrap_err();
        assert!(matches!(err, SimulatorError::InvalidInput(_)));
    }

    #[test]
    fn tier_serde_uses_lowercase() {
        let json = serde_json::to_string(&RiskTier::Conservative).unwrap();
        assert_eq!(json, "\"conservative\"");
    }

    #[test]
    fn input_accepts_boundary_values() {
        let input = SimulationInput::new(10.0, 1, RiskTier::Conservative).unwrap();
        assert_eq!(input.monthly_contribution(), 10.0);
        assert_eq!(input.years(), 1);
    }

    #[test]
    fn input_rejects_small_contribution() {
        let err = SimulationInput::new(9.99, 20, RiskTier::Balanced).unwrap_err();
        assert!(matches!(err, SimulatorError::InvalidInput(ref msg) if msg.contains("monthly_contribution")));
    }

    #[test]
    fn input_rejects_zero_contribution() {
        assert!(SimulationInput::new(0.0, 20, RiskTier::Balanced).is_err());
    }

    #[test]
    fn input_rejects_non_finite_contribution() {
        assert!(SimulationInput::new(f64::NAN, 20, RiskTier::Balanced).is_err());
        assert!(SimulationInput::new(f64::INFINITY, 20, RiskTier::Balanced).is_err());
    }

    #[test]
    fn input_rejects_zero_years() {
        let err = SimulationInput::new(700.0, 0, RiskTier::Balanced).unwrap_err();
        assert!(matches!(err, SimulatorError::InvalidInput(ref msg) if msg.contains("years")));
    }
}

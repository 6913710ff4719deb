//! Error Types for the Growth Simulator

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SimulatorError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulatorError {
    /// Input rejected at construction. The message names the offending field.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Rate lookup received a tier with no table entry.
    ///
    /// Unreachable while `RiskTier` stays a closed enum matching the rate
    /// table, but kept as a distinct failure rather than a silent default.
    #[error("Unknown risk tier: {0}")]
    InvalidRiskTier(String),
}

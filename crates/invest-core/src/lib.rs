//! # invest-core
//!
//! Compound-growth simulation engine: projects the future value of a fixed
//! monthly contribution invested at a tier-dependent annual rate, compounded
//! annually, and exposes both the final value and the full year-by-year
//! trajectory.
//!
//! The crate is deliberately small and pure. It performs no I/O, holds no
//! state, and is safe to call concurrently; market data and advice services
//! live in their own crates and never feed into the projection.
//!
//! ## Example
//!
//! ```rust
//! use invest_core::{simulate, RiskTier, SimulationInput};
//!
//! let input = SimulationInput::new(700.0, 20, RiskTier::Balanced)?;
//! let result = simulate(&input)?;
//!
//! assert_eq!(result.annual_series.len(), 20);
//! assert_eq!(result.final_value, result.annual_series[19].portfolio_value);
//! # Ok::<(), invest_core::SimulatorError>(())
//! ```

pub mod error;
pub mod model;
pub mod simulator;

pub use error::{Result, SimulatorError};
pub use model::{
    MIN_MONTHLY_CONTRIBUTION, MIN_YEARS, RiskTier, SimulationInput, SimulationResult, YearPoint,
};
pub use simulator::{rate_for, simulate};

//! # bb84-sim
//!
//! Monte Carlo validation of the classical statistics behind BB84.
//!
//! No qubits are simulated. Measuring in the preparation basis copies the bit;
//! measuring in the other basis yields a fair coin. Three protocol variants are
//! repeated many times and their per-run rates compared against theory:
//!
//! - **Basis agreement**: Alice and Bob choose bases at random, p = 0.5.
//! - **Intercept-resend**: Eve measures and resends in a random basis; error
//!   rate over the sifted key, p = 0.25.
//! - **Fixed basis**: Alice and Bob share a known basis and only Eve guesses;
//!   error rate over every position, p = 0.25.
//!
//! ## Usage
//!
//! ```no_run
//! use bb84_sim::prelude::*;
//!
//! let params = SimulationParameters::for_protocol(Protocol::InterceptResend, 1000, 1000)?;
//! let report = run_seeded(Protocol::InterceptResend, params, 42)?;
//! println!("mean error rate: {:.4}", report.summary.empirical_mean);
//! # Ok::<(), bb84_sim::error::SimError>(())
//! ```

pub mod agreement;
pub mod bb84;
pub mod bb84_states;
pub mod error;
pub mod fixed_basis;
pub mod intercept_resend;
pub mod params;
pub mod simulation;
pub mod statistics;
pub mod trial;

#[cfg(test)]
mod tests;

pub mod prelude {
    pub use crate::agreement::*;
    pub use crate::bb84_states::*;
    pub use crate::error::SimError;
    pub use crate::fixed_basis::*;
    pub use crate::intercept_resend::*;
    pub use crate::params::*;
    pub use crate::simulation::*;
    pub use crate::statistics::*;
    pub use crate::trial::*;
}

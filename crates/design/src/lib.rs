//! Sizing calculations for horizontal, above-ground petroleum storage tanks.
//!
//! A tank is a cylindrical shell closed by two dished ends. Given a
//! [`TankDesignParameters`], [`compute_design`] derives:
//!
//! - the shell plate thickness from the thin-wall pressure formula,
//!   rounded up to a standard plate gauge ([`shell`])
//! - dished-end geometry ([`heads`])
//! - internal volumes and the capacity-match verdict ([`capacity`])
//! - shell, end, empty, operating and hydrotest weights ([`weight`])
//! - the component catalogue and safety requirement register used by reports
//!   ([`components`], [`requirements`])
//!
//! The calculation is pure: identical parameters always produce an identical
//! [`TankDesign`].

mod design;
mod error;
mod parameters;

pub mod capacity;
pub mod components;
pub mod heads;
pub mod material;
pub mod requirements;
pub mod shell;
pub mod sizing;
pub mod weight;

pub use design::{HYDROSTATIC_TEST_FACTOR, TankDesign, compute_design};
pub use error::DesignError;
pub use parameters::{DesignInputs, TankDesignParameters};
pub use vessel_core::constraint::ConstraintError;

//! Shared types for the climate-prep cleaning jobs.
//!
//! Holds the error type used across crates, CF model-calendar handling for
//! climate time axes, and the run-scoped output context built from the
//! environment.

pub mod calendar;
pub mod error;
pub mod run;

pub use calendar::{daily_range, Calendar, CfDate};
pub use error::{PrepError, PrepResult};
pub use run::RunContext;

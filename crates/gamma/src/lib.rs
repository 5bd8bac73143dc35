//! Structured gamma parameter generation.
//!
//! Turns a mortality CSVV into a dataset of mean coefficients plus random
//! draws from the coefficient distribution. The draws are pre-created so
//! the projection system itself can stay deterministic and outputs can be
//! replicated.

mod sampler;
mod structured;

pub use sampler::sample_multivariate_normal;
pub use structured::build_gamma_dataset;

/// Seed for the coefficient draws.
pub const SEED: u64 = 42;

/// Number of draws from the coefficient distribution.
pub const N_SAMPLES: usize = 15;

// If you change these, you will likely need to change the structure of
// the output dataset.
pub const N_AGE_COHORT: usize = 3;
pub const N_POLYNOMIAL_DEGREES: usize = 4;
pub const N_COVARNAMES: usize = 3;

/// Shape the flat gamma vector is folded into.
pub const GAMMA_SHAPE: [usize; 3] = [N_AGE_COHORT, N_POLYNOMIAL_DEGREES, N_COVARNAMES];

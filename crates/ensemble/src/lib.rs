//! CMIP ensemble assembly.
//!
//! Turns catalog definitions into resolvable source locations, normalizes
//! the quirks of individual source files, and combines the results into
//! scenario/model trees with historical runs spliced onto projections.

pub mod assemble;
pub mod catalog;
pub mod gdpcir;
pub mod gdpcir_targets;
pub mod normalize;
pub mod resolver;
pub mod tree_merge;

pub use assemble::{assemble_tree, expand_members, DatasetOpener, EnsembleMember};
pub use catalog::{Cmip5Catalog, ScenarioSpec, VariableSpec};
pub use gdpcir::{build_gdpcir_ensemble, estimate_tas, GdpcirRun};
pub use gdpcir_targets::GDPCIR_TARGETS;
pub use normalize::{normalize, TARGET_CALENDAR};
pub use resolver::{format_uri, year_from_uri, FILE_PATTERN};
pub use tree_merge::merge_scenarios;

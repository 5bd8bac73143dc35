//! Labeled N-dimensional array model.
//!
//! A small in-memory stand-in for the external array library's data
//! structures: arrays with named dimensions ([`DataArray`]), collections of
//! arrays sharing dimensions and coordinates ([`Dataset`]), and path-keyed
//! hierarchies of datasets ([`DataTree`]).
//!
//! The cleaning jobs build these once from source files, transform them
//! through pure functions (concat, merge, calendar conversion, dropna), and
//! persist them exactly once; nothing here has an update lifecycle.

pub mod array;
pub mod attrs;
pub mod chunk;
pub mod coord;
pub mod dataset;
pub mod tree;

pub use array::{DataArray, Values};
pub use attrs::Attrs;
pub use chunk::ChunkSpec;
pub use coord::Coord;
pub use dataset::{CombineAttrs, Dataset};
pub use tree::DataTree;

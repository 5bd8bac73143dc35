//! Socioeconomic and geographic tabular cleaning.
//!
//! Everything here indexes by census tract: GEOIDs are kept as strings
//! end to end so region labels line up with the transformed climate data.

pub mod segment_weights;
pub mod socioeconomics;
pub mod table;
pub mod tracts;

pub use segment_weights::clean_segment_weights;
pub use socioeconomics::{
    clean_income_adjusted, clean_pci, clean_pop, merge_socioeconomics,
};
pub use table::Table;
pub use tracts::{read_tracts, tracts_to_batch, write_tracts_parquet, Tract};

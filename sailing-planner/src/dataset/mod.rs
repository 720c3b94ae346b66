//! Raw schedule dataset and the leg catalog built from it.
//!
//! The dataset is a single JSON document with three sections:
//! - `sailings`: one record per scheduled sailing
//! - `rates`: the price of each sailing, joined by sailing code
//! - `exchange_rates`: per-day multipliers into the base currency
//!
//! Loading is abstracted behind [`DatasetSource`] so the planner can be
//! driven from a file, from memory in tests, or through a cache.

mod catalog;
mod error;
mod source;
mod types;

pub use catalog::{CatalogError, LegCatalog, build_exchange_rates};
pub use error::DatasetError;
pub use source::{DatasetSource, InMemorySource, JsonFileSource};
pub use types::{RawAmount, RawDataset, RawRate, RawSailing};

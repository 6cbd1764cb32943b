//! Stateless cleaning transformations.
//!
//! Each cleaner takes a dataset and a column-scoped configuration and
//! returns a new dataset; inputs are never mutated.

mod dedupe;
mod fill;
mod outliers;

pub use dedupe::remove_duplicates;
pub use fill::{fill_missing, FillOutcome};
pub use outliers::remove_outliers;

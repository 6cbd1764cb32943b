//! Dynamic row/value model shared by the analysis and transform layers.

mod table;
mod value;

pub use table::{column_names, column_values, numeric_column_values, row_key, rows_from_json, Row};
pub use value::Value;

pub mod error;
pub mod labels;
pub mod matrix;
pub mod parser;
pub mod stats;
pub mod store;

pub use error::{GridError, Result};
pub use labels::{merge, merge_labeltables, LabelRow, LabelTable};
pub use matrix::Matrix;
pub use parser::{parse_grid, GridFile};
pub use stats::{CsvFormat, StatMetadata};
pub use store::MatrixStore;

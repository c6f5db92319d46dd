pub mod convert;
pub mod export;
pub mod info;
pub mod labels;
pub mod stats;
pub mod validate;

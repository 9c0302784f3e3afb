pub mod data_loader;
pub mod error;
mod extractor;
pub mod series;

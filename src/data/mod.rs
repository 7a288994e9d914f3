//! Data module - table ingestion and cell classification

mod table;

pub use table::{Cell, SampleTable, TableError};

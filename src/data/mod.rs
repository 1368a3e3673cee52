//! Data ingestion collaborators

pub mod csv;

pub use csv::CsvDataset;

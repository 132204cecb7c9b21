//! Adapters layer
//!
//! Implementations of port traits for external data sources.

pub mod json;

pub use json::JsonCategoryRepository;

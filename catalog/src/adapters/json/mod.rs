//! JSON adapters
//!
//! Implementations of repository traits over JSON seed data.

pub mod category_repo;

pub use category_repo::JsonCategoryRepository;

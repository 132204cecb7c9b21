//! Domain entities
//!
//! Pure domain models representing core business concepts.

pub mod category;

pub use category::Category;

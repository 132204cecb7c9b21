//! Repository port traits
//!
//! These traits define the interface for data lookup.
//! Implementations are provided by adapters (e.g., a JSON seed file)
//! and by test doubles in `test_utils`.

use crate::domain::entities::Category;

/// Repository for Category entities
pub trait CategoryRepository: Send + Sync {
    /// Find a category by ID
    ///
    /// A missing category is `None`, not an error.
    fn find_by_id(&self, id: &str) -> Option<Category>;
}

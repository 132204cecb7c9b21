//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::Category;

/// Create a test category with a name derived from its id
pub fn test_category(id: &str) -> Category {
    Category::new(id, format!("Category {}", id))
}

/// Create a test category with a specific name
pub fn test_category_named(id: &str, name: &str) -> Category {
    Category::new(id, name)
}

/// Create `count` categories with ids "1".."count"
pub fn test_categories(count: usize) -> Vec<Category> {
    (1..=count).map(|i| test_category(&i.to_string())).collect()
}

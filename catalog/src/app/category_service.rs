//! Category service
//!
//! Looks categories up through the repository port and decides what a
//! miss means for callers.

use std::sync::Arc;

use crate::domain::entities::Category;
use crate::domain::ports::CategoryRepository;
use crate::error::DomainError;

/// Service for reading categories
pub struct CategoryService<CR>
where
    CR: CategoryRepository,
{
    categories: Arc<CR>,
}

impl<CR> CategoryService<CR>
where
    CR: CategoryRepository,
{
    pub fn new(categories: Arc<CR>) -> Self {
        Self { categories }
    }

    /// Get a category by ID
    ///
    /// Unlike the repository, a missing category is an error here.
    pub fn get(&self, id: &str) -> Result<Category, DomainError> {
        if id.is_empty() {
            return Err(DomainError::Validation(
                "Category id must not be empty".to_string(),
            ));
        }

        match self.categories.find_by_id(id) {
            Some(category) => {
                tracing::debug!(category_id = %id, name = %category.name, "Category found");
                Ok(category)
            }
            None => {
                tracing::debug!(category_id = %id, "Category not found");
                Err(DomainError::NotFound(format!("Category {} not found", id)))
            }
        }
    }
}

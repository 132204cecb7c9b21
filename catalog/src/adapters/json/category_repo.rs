//! JSON seed file adapter for CategoryRepository

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::domain::entities::Category;
use crate::domain::ports::CategoryRepository;
use crate::error::DomainError;

/// Read-only CategoryRepository loaded from a JSON array of categories
#[derive(Debug, Default)]
pub struct JsonCategoryRepository {
    categories: HashMap<String, Category>,
}

impl JsonCategoryRepository {
    /// Build from already-parsed categories, rejecting duplicate ids
    pub fn from_categories(categories: Vec<Category>) -> Result<Self, DomainError> {
        let mut by_id = HashMap::with_capacity(categories.len());
        for category in categories {
            if by_id.contains_key(&category.id) {
                return Err(DomainError::AlreadyExists(format!(
                    "Category {} appears more than once",
                    category.id
                )));
            }
            by_id.insert(category.id.clone(), category);
        }
        Ok(Self { categories: by_id })
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DomainError> {
        let categories: Vec<Category> = serde_json::from_reader(reader)?;
        Self::from_categories(categories)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            DomainError::Storage(format!("cannot open {}: {}", path.display(), e))
        })?;
        let repo = Self::from_reader(BufReader::new(file))?;
        tracing::info!(path = %path.display(), count = repo.len(), "Loaded categories");
        Ok(repo)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl CategoryRepository for JsonCategoryRepository {
    fn find_by_id(&self, id: &str) -> Option<Category> {
        self.categories.get(id).cloned()
    }
}

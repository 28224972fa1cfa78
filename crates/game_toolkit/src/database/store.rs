//! Generic keyed element store

use super::DatabaseError;
use crate::config::{self, ConfigFormat};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Element that can be stored in a [`Database`]
pub trait DatabaseElement {
    /// Unique identifier within its database
    fn id(&self) -> &str;
}

/// On-disk layout shared by RON and TOML database files
#[derive(Deserialize)]
#[serde(bound = "T: DeserializeOwned")]
struct DatabaseFile<T> {
    elements: Vec<T>,
}

/// Check that no two elements share an id
pub fn validate_unique_ids<T: DatabaseElement>(elements: &[T]) -> Result<(), DatabaseError> {
    let duplicates = duplicate_ids(elements);
    if duplicates.is_empty() {
        Ok(())
    } else {
        Err(DatabaseError::DuplicateIds(duplicates))
    }
}

fn duplicate_ids<T: DatabaseElement>(elements: &[T]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut duplicates: Vec<String> = elements
        .iter()
        .map(DatabaseElement::id)
        .filter(|id| !seen.insert(*id))
        .map(str::to_string)
        .collect();
    duplicates.sort_unstable();
    duplicates.dedup();
    duplicates
}

/// Elements indexed by id
///
/// The index is rebuilt only by [`reload`](Self::reload); [`edit`](Self::edit)
/// calls it after every change to the backing list.
#[derive(Debug, Clone)]
pub struct Database<T> {
    elements: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T: DatabaseElement> Database<T> {
    /// Build a database, logging (not failing on) duplicate ids
    ///
    /// Duplicated ids are left out of the index.
    pub fn new(elements: Vec<T>) -> Self {
        let mut database = Self {
            elements,
            index: HashMap::new(),
        };
        // duplicates are already logged by reload
        let _ = database.reload();
        database
    }

    /// Build a database, rejecting duplicate ids
    pub fn try_new(elements: Vec<T>) -> Result<Self, DatabaseError> {
        validate_unique_ids(&elements)?;
        Ok(Self::new(elements))
    }

    /// Element with `id`
    pub fn get(&self, id: &str) -> Option<&T> {
        self.index.get(id).and_then(|&i| self.elements.get(i))
    }

    /// Whether `id` resolves to an element
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Lookup-able ids, in element order
    pub fn ids(&self) -> Vec<&str> {
        self.elements
            .iter()
            .map(DatabaseElement::id)
            .filter(|id| self.index.contains_key(*id))
            .collect()
    }

    /// Backing element list
    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    /// Number of elements, including ones with duplicated ids
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the database has no elements
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Change the backing list, then rebuild the index
    pub fn edit(&mut self, f: impl FnOnce(&mut Vec<T>)) -> Result<(), DatabaseError> {
        f(&mut self.elements);
        self.reload()
    }

    /// Rebuild the index from the backing list
    ///
    /// Duplicated ids are logged, excluded from the index and reported.
    pub fn reload(&mut self) -> Result<(), DatabaseError> {
        let duplicates = duplicate_ids(&self.elements);

        self.index.clear();
        self.index.reserve(self.elements.len());
        for (i, element) in self.elements.iter().enumerate() {
            self.index.insert(element.id().to_string(), i);
        }

        if duplicates.is_empty() {
            return Ok(());
        }

        for id in &duplicates {
            self.index.remove(id);
        }
        log::error!("Database of {} has duplicate ids: {}", std::any::type_name::<T>(), duplicates.join(", "));
        Err(DatabaseError::DuplicateIds(duplicates))
    }

    /// Consume the database and return its elements
    pub fn into_elements(self) -> Vec<T> {
        self.elements
    }
}

impl<T: DatabaseElement + DeserializeOwned> Database<T> {
    /// Parse a database document: `elements = [...]` in TOML, `(elements: [...])` in RON
    pub fn parse(contents: &str, format: ConfigFormat) -> Result<Self, DatabaseError> {
        let file: DatabaseFile<T> = config::parse_str(contents, format)?;
        Self::try_new(file.elements)
    }

    /// Load a database file, choosing the format from its extension
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, DatabaseError> {
        let path = path.as_ref();
        let file: DatabaseFile<T> = config::load_file(path)?;
        let database = Self::try_new(file.elements)?;
        log::info!("Loaded {} elements from {}", database.len(), path.display());
        Ok(database)
    }
}

impl<T: DatabaseElement> Default for Database<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

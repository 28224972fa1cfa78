//! Databases collected by element type

use super::{Database, DatabaseElement, DatabaseError};
use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;

/// Type-erased view of a [`Database`]
pub trait AnyDatabase {
    /// Lookup-able ids
    fn ids(&self) -> Vec<&str>;

    /// Number of elements
    fn len(&self) -> usize;

    /// Whether the database is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Name of the element type
    fn element_type(&self) -> &'static str;

    /// Downcast support
    fn as_any(&self) -> &dyn Any;

    /// Mutable downcast support
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: DatabaseElement + 'static> AnyDatabase for Database<T> {
    fn ids(&self) -> Vec<&str> {
        Self::ids(self)
    }

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn element_type(&self) -> &'static str {
        type_name::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// One database per element type
#[derive(Default)]
pub struct DatabaseManager {
    databases: HashMap<TypeId, Box<dyn AnyDatabase>>,
}

impl DatabaseManager {
    /// Create an empty manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the database for element type `T`
    pub fn register<T: DatabaseElement + 'static>(&mut self, database: Database<T>) -> Result<(), DatabaseError> {
        let type_id = TypeId::of::<T>();
        if self.databases.contains_key(&type_id) {
            log::error!("Database {} is already registered in DatabaseManager", type_name::<T>());
            return Err(DatabaseError::AlreadyRegistered(type_name::<T>()));
        }

        log::debug!("Registered database {} with {} elements", type_name::<T>(), database.len());
        self.databases.insert(type_id, Box::new(database));
        Ok(())
    }

    /// Database for element type `T`; logs an error when missing
    pub fn get<T: DatabaseElement + 'static>(&self) -> Option<&Database<T>> {
        let database = self
            .databases
            .get(&TypeId::of::<T>())
            .and_then(|db| db.as_any().downcast_ref::<Database<T>>());
        if database.is_none() {
            log::error!("Cannot find Database {} in DatabaseManager", type_name::<T>());
        }
        database
    }

    /// Mutable database for element type `T`; logs an error when missing
    pub fn get_mut<T: DatabaseElement + 'static>(&mut self) -> Option<&mut Database<T>> {
        let database = self
            .databases
            .get_mut(&TypeId::of::<T>())
            .and_then(|db| db.as_any_mut().downcast_mut::<Database<T>>());
        if database.is_none() {
            log::error!("Cannot find Database {} in DatabaseManager", type_name::<T>());
        }
        database
    }

    /// Shortcut for `get::<T>()` followed by an element lookup
    pub fn element<T: DatabaseElement + 'static>(&self, id: &str) -> Option<&T> {
        self.get::<T>()?.get(id)
    }

    /// Ids of the database for `T`, empty when missing
    pub fn ids_of<T: DatabaseElement + 'static>(&self) -> Vec<&str> {
        self.get::<T>().map(Database::ids).unwrap_or_default()
    }

    /// Element type names with their element counts, sorted by name
    pub fn summary(&self) -> Vec<(&'static str, usize)> {
        let mut summary: Vec<_> = self
            .databases
            .values()
            .map(|db| (db.element_type(), db.len()))
            .collect();
        summary.sort_unstable();
        summary
    }

    /// Number of registered databases
    pub fn len(&self) -> usize {
        self.databases.len()
    }

    /// Whether no database is registered
    pub fn is_empty(&self) -> bool {
        self.databases.is_empty()
    }
}

impl std::fmt::Debug for DatabaseManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseManager").field("databases", &self.summary()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Level {
        id: &'static str,
    }

    impl DatabaseElement for Level {
        fn id(&self) -> &str {
            self.id
        }
    }

    #[derive(Debug)]
    struct Item {
        id: String,
        price: u32,
    }

    impl DatabaseElement for Item {
        fn id(&self) -> &str {
            &self.id
        }
    }

    fn manager() -> DatabaseManager {
        let mut manager = DatabaseManager::new();
        manager
            .register(Database::new(vec![Level { id: "intro" }, Level { id: "boss" }]))
            .unwrap();
        manager
    }

    #[test]
    fn test_get_by_type() {
        let manager = manager();
        let levels = manager.get::<Level>().unwrap();
        assert_eq!(levels.ids(), vec!["intro", "boss"]);
        assert!(manager.element::<Level>("boss").is_some());
    }

    #[test]
    fn test_missing_database_is_none() {
        let manager = manager();
        assert!(manager.get::<Item>().is_none());
        assert!(manager.element::<Item>("potion").is_none());
        assert!(manager.ids_of::<Item>().is_empty());
    }

    #[test]
    fn test_register_twice_fails() {
        let mut manager = manager();
        let result = manager.register(Database::new(vec![Level { id: "other" }]));
        assert!(matches!(result, Err(DatabaseError::AlreadyRegistered(_))));
        assert_eq!(manager.ids_of::<Level>(), vec!["intro", "boss"]);
    }

    #[test]
    fn test_get_mut_and_summary() {
        let mut manager = manager();
        manager.register(Database::<Item>::default()).unwrap();

        manager
            .get_mut::<Item>()
            .unwrap()
            .edit(|items| items.push(Item { id: "potion".to_string(), price: 4 }))
            .unwrap();

        assert_eq!(manager.element::<Item>("potion").unwrap().price, 4);
        assert_eq!(manager.len(), 2);
        let counts: Vec<usize> = manager.summary().into_iter().map(|(_, count)| count).collect();
        assert_eq!(counts.iter().sum::<usize>(), 3);
    }
}

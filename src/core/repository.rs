use std::collections::HashMap;

use crate::core::models::BaseEntity;
use crate::errors::{Error, Result};

/// In-memory, id-keyed store owned by the session. Ids are handed out in
/// insertion order, so `values` returns items in the order they were entered.
#[derive(Debug)]
pub struct Repository<T: BaseEntity> {
    items: HashMap<i32, T>,
    next_id: i32,
}

impl<T: BaseEntity> Default for Repository<T> {
    fn default() -> Self {
        Self {
            items: HashMap::new(),
            next_id: 1,
        }
    }
}

impl<T: BaseEntity> Repository<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn insert(&mut self, mut entity: T) -> &T {
        let id = self.next_id;
        self.next_id += 1;
        entity.set_id(id);
        self.items.entry(id).or_insert(entity)
    }

    pub fn get(&self, id: i32) -> Result<&T> {
        self.items
            .get(&id)
            .ok_or_else(|| Error::Parse(format!("Entity with id {} not found.", id)))
    }

    pub fn delete(&mut self, id: i32) -> Result<T> {
        self.items
            .remove(&id)
            .ok_or_else(|| Error::Parse(format!("Entity with id {} not found.", id)))
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.next_id = 1;
    }

    /// Ascending by id.
    pub fn values(&self) -> Vec<&T> {
        let mut v: Vec<&T> = self.items.values().collect();
        v.sort_by_key(|e| e.id());
        v
    }

    /// Owned copies in insertion order, for handing to the pure scheduler.
    pub fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.values().into_iter().cloned().collect()
    }
}

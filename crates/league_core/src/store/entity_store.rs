//! Ordered, duplicate-free collection of one entity kind.

use crate::model::{Entity, EntityKind};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// An equal entity is already stored.
    Duplicate(EntityKind),
    /// No equal entity is stored.
    NotFound(EntityKind),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Duplicate(kind) => {
                write!(f, "This {} already exists in the league", kind.singular())
            }
            Self::NotFound(kind) => write!(f, "{} could not be found in the league", kind.title()),
        }
    }
}

impl Error for StoreError {}

/// Entities are shared as `Rc` so last-shown lists reference, not copy, them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityStore<T> {
    items: Vec<Rc<T>>,
}

impl<T> Default for EntityStore<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Entity> EntityStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `entity` unless an equal one is present.
    ///
    /// Returns the shared handle now held by the store.
    pub fn add(&mut self, entity: T) -> StoreResult<Rc<T>> {
        if self.contains(&entity) {
            return Err(StoreError::Duplicate(T::KIND));
        }
        let entity = Rc::new(entity);
        self.items.push(Rc::clone(&entity));
        Ok(entity)
    }

    /// Removes the stored entity equal to `entity`.
    pub fn remove(&mut self, entity: &T) -> StoreResult<Rc<T>> {
        let index = self
            .items
            .iter()
            .position(|item| item.as_ref() == entity)
            .ok_or(StoreError::NotFound(T::KIND))?;
        Ok(self.items.remove(index))
    }

    pub fn contains(&self, entity: &T) -> bool {
        self.items.iter().any(|item| item.as_ref() == entity)
    }

    /// Read-only view in insertion order.
    pub fn all(&self) -> &[Rc<T>] {
        &self.items
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

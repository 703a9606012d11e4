use tracing::{debug, instrument};

use super::Entity;

/// Ordered collection of records.
///
/// No internal synchronization: a concurrent host must serialize access
/// itself, e.g. with a single lock around the whole registry.
#[derive(Debug, Clone)]
pub struct Registry<T: Entity> {
    items: Vec<T>,
}

impl<T: Entity> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Registry<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends `item` to the end. Ids are not checked for uniqueness and the
    /// record is not validated.
    #[instrument(skip(self, item), fields(id = %item.id()))]
    pub fn add(&mut self, item: T) {
        self.items.push(item);
        debug!(len = self.items.len(), "Record added");
    }

    /// Returns the first record, in insertion order, whose id equals `id`.
    #[instrument(skip(self, id), fields(id = %id))]
    pub fn find(&self, id: &T::Id) -> Option<&T> {
        let found = self.items.iter().find(|item| item.id() == id);
        match found {
            Some(_) => debug!("Record found"),
            None => debug!("Record not found"),
        }
        found
    }

    /// Collects clones of every record matching `predicate`, keeping their
    /// relative order. The registry itself is left untouched.
    pub fn filter<P>(&self, mut predicate: P) -> Vec<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().filter(|item| predicate(item)).cloned().collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Entity> FromIterator<T> for Registry<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut registry = Self::new();
        registry.extend(iter);
        registry
    }
}

impl<T: Entity> Extend<T> for Registry<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<'a, T: Entity> IntoIterator for &'a Registry<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

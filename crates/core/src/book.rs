//! Session-local address book.

use api_shared::Address;

/// Insertion-ordered collection of book entries, unique by `id`.
///
/// Inserting an entry whose id is already present is a no-op: the first write wins and
/// existing entries are never overwritten.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    entries: Vec<Address>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `entry` unless an entry with the same id exists.
    ///
    /// Returns `true` if the entry was added.
    pub fn insert(&mut self, entry: Address) -> bool {
        if self.contains(&entry.id) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Removes the entry with `id`, keeping the order of the others.
    ///
    /// Returns `true` if an entry was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Replaces every entry. Later duplicates of an id in `entries` are dropped.
    pub fn replace_all(&mut self, entries: Vec<Address>) {
        self.entries.clear();
        for entry in entries {
            self.insert(entry);
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&Address> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn entries(&self) -> &[Address] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

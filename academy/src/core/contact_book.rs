//! Name-keyed contact store.

use crate::core::error::{CollectionError, Result};

/// A contact entry. `name` is the case-sensitive key; `phone` is free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub phone: String,
}

/// Contacts keyed by exact name, displayed in first-insertion order.
///
/// Overwriting a name keeps the entry where it was first inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactBook {
    entries: Vec<Contact>,
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite. Returns the previous phone when `name` existed.
    pub fn set(&mut self, name: impl Into<String>, phone: impl Into<String>) -> Option<String> {
        let name = name.into();
        let phone = phone.into();
        match self.position(&name) {
            Some(index) => Some(std::mem::replace(&mut self.entries[index].phone, phone)),
            None => {
                self.entries.push(Contact { name, phone });
                None
            }
        }
    }

    /// Phone number stored under `name`.
    pub fn get(&self, name: &str) -> Result<&str> {
        self.position(name)
            .map(|index| self.entries[index].phone.as_str())
            .ok_or_else(|| CollectionError::KeyNotFound(name.to_string()))
    }

    /// Remove and return the contact stored under `name`.
    pub fn delete(&mut self, name: &str) -> Result<Contact> {
        let index = self
            .position(name)
            .ok_or_else(|| CollectionError::KeyNotFound(name.to_string()))?;
        Ok(self.entries.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contact> + '_ {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|contact| contact.name == name)
    }
}

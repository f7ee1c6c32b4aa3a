use std::fmt;

use super::*;

/// Opaque identity of a contact, issued once when the contact is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactHandle(Uuid);

impl ContactHandle {
    fn new() -> Self {
        ContactHandle(Uuid::new_v4())
    }
}

impl fmt::Display for ContactHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    handle: ContactHandle,
    name: String,
    #[serde(default)]
    pub is_favorite: bool,
}

impl Contact {
    pub fn new(name: impl Into<String>) -> Self {
        Contact {
            handle: ContactHandle::new(),
            name: name.into(),
            is_favorite: false,
        }
    }

    pub fn handle(&self) -> ContactHandle {
        self.handle
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Contacts with a blank name are never admitted into a store.
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    pub fn toggle_favorite(&mut self) {
        self.is_favorite = !self.is_favorite;
    }
}

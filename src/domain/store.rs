use super::*;

use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Authoritative grouped contact list.
///
/// Every contact lives in exactly one section and keeps its insertion
/// position. `index` maps each live handle to the section holding it and is
/// updated together with `sections` by every mutation.
#[derive(Debug, Clone)]
pub struct GroupedContactStore {
    sections: BTreeMap<Section, Vec<Contact>>,
    index: HashMap<ContactHandle, Section>,
}

impl Default for GroupedContactStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GroupedContactStore {
    pub fn new() -> Self {
        Self {
            sections: Section::ALL.iter().map(|&s| (s, Vec::new())).collect(),
            index: HashMap::new(),
        }
    }

    /// Store holding the startup contacts of the demo screen.
    pub fn with_demo_seed() -> Self {
        let mut store = Self::new();
        store.seed([
            (
                Section::Ceo,
                vec![Contact::new("Elon Musk"), Contact::new("Tim Cook")],
            ),
            (Section::Peasants, vec![Contact::new("Bill Gates")]),
        ]);
        store
    }

    /// Replaces the whole content of the store. Blank-named contacts and
    /// repeated handles are skipped.
    pub fn seed<I>(&mut self, initial: I)
    where
        I: IntoIterator<Item = (Section, Vec<Contact>)>,
    {
        let mut sections: BTreeMap<Section, Vec<Contact>> =
            Section::ALL.iter().map(|&s| (s, Vec::new())).collect();
        let mut index = HashMap::new();

        for (section, contacts) in initial {
            for contact in contacts {
                if !contact.has_name() {
                    warn!(handle = %contact.handle(), "skipping blank-named contact in seed");
                    continue;
                }
                if index.contains_key(&contact.handle()) {
                    warn!(handle = %contact.handle(), "skipping duplicate contact in seed");
                    continue;
                }
                index.insert(contact.handle(), section);
                sections.entry(section).or_default().push(contact);
            }
        }

        debug!(contacts = index.len(), "store seeded");
        self.sections = sections;
        self.index = index;
    }

    pub fn add(&mut self, name: &str, section: Section) -> Result<ContactHandle, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::InvalidInput(
                "Contact name must not be empty".to_string(),
            ));
        }

        let contact = Contact::new(name);
        let handle = contact.handle();

        self.sections.entry(section).or_default().push(contact);
        self.index.insert(handle, section);

        debug!(%handle, ?section, "contact added");
        Ok(handle)
    }

    pub fn remove(&mut self, handle: ContactHandle) -> Result<(), AppError> {
        let section = self.section_of(handle).ok_or_else(not_found)?;

        let contacts = self.sections.entry(section).or_default();
        let position = contacts
            .iter()
            .position(|c| c.handle() == handle)
            .ok_or_else(not_found)?;

        contacts.remove(position);
        self.index.remove(&handle);

        debug!(%handle, ?section, "contact removed");
        Ok(())
    }

    pub fn toggle_favorite(&mut self, handle: ContactHandle) -> Result<(), AppError> {
        let contact = self.get_mut(handle).ok_or_else(not_found)?;
        contact.toggle_favorite();

        debug!(%handle, is_favorite = contact.is_favorite, "favorite toggled");
        Ok(())
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(
            Section::ALL
                .iter()
                .map(|&section| SectionSnapshot {
                    section,
                    contacts: self.sections.get(&section).cloned().unwrap_or_default(),
                })
                .collect(),
        )
    }

    pub fn get(&self, handle: ContactHandle) -> Option<&Contact> {
        let section = self.section_of(handle)?;
        self.sections
            .get(&section)?
            .iter()
            .find(|c| c.handle() == handle)
    }

    fn get_mut(&mut self, handle: ContactHandle) -> Option<&mut Contact> {
        let section = self.section_of(handle)?;
        self.sections
            .get_mut(&section)?
            .iter_mut()
            .find(|c| c.handle() == handle)
    }

    pub fn section_of(&self, handle: ContactHandle) -> Option<Section> {
        self.index.get(&handle).copied()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Contact".to_string())
}

use super::*;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSnapshot {
    pub section: Section,
    pub contacts: Vec<Contact>,
}

/// Owned, point-in-time copy of the store's grouped contents.
///
/// Sections always appear in `Section::ALL` order, including empty ones.
/// Row numbers start at 1 and run across sections, so the first contact of
/// `Peasants` follows the last contact of `Ceo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    sections: Vec<SectionSnapshot>,
}

impl Snapshot {
    pub(crate) fn new(sections: Vec<SectionSnapshot>) -> Self {
        Snapshot { sections }
    }

    pub fn sections(&self) -> &[SectionSnapshot] {
        &self.sections
    }

    pub fn contacts(&self, section: Section) -> &[Contact] {
        self.sections
            .iter()
            .find(|s| s.section == section)
            .map(|s| s.contacts.as_slice())
            .unwrap_or_default()
    }

    pub fn find(&self, handle: ContactHandle) -> Option<(Section, &Contact)> {
        self.sections.iter().find_map(|s| {
            s.contacts
                .iter()
                .find(|c| c.handle() == handle)
                .map(|c| (s.section, c))
        })
    }

    pub fn rows(&self) -> impl Iterator<Item = (usize, Section, &Contact)> {
        self.sections
            .iter()
            .flat_map(|s| s.contacts.iter().map(move |c| (s.section, c)))
            .enumerate()
            .map(|(i, (section, contact))| (i + 1, section, contact))
    }

    pub fn handle_at(&self, row: usize) -> Option<ContactHandle> {
        self.rows()
            .find(|(n, _, _)| *n == row)
            .map(|(_, _, contact)| contact.handle())
    }

    pub fn len(&self) -> usize {
        self.sections.iter().map(|s| s.contacts.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn names(&self, section: Section) -> Vec<&str> {
        self.contacts(section)
            .iter()
            .map(|c| c.name())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Snapshot {
        Snapshot::new(vec![
            SectionSnapshot {
                section: Section::Ceo,
                contacts: vec![Contact::new("Elon Musk"), Contact::new("Tim Cook")],
            },
            SectionSnapshot {
                section: Section::Peasants,
                contacts: vec![Contact::new("Bill Gates")],
            },
        ])
    }

    #[test]
    fn rows_run_across_sections() {
        let snapshot = sample();
        let rows: Vec<(usize, Section, &str)> = snapshot
            .rows()
            .map(|(n, s, c)| (n, s, c.name()))
            .collect();

        assert_eq!(
            rows,
            vec![
                (1, Section::Ceo, "Elon Musk"),
                (2, Section::Ceo, "Tim Cook"),
                (3, Section::Peasants, "Bill Gates"),
            ]
        );
    }

    #[test]
    fn handle_at_maps_row_numbers() {
        let snapshot = sample();
        let bill = snapshot.contacts(Section::Peasants)[0].handle();

        assert_eq!(snapshot.handle_at(3), Some(bill));
        assert_eq!(snapshot.handle_at(0), None);
        assert_eq!(snapshot.handle_at(4), None);
    }

    #[test]
    fn find_reports_section() {
        let snapshot = sample();
        let tim = snapshot.contacts(Section::Ceo)[1].handle();

        let (section, contact) = snapshot.find(tim).unwrap();
        assert_eq!(section, Section::Ceo);
        assert_eq!(contact.name(), "Tim Cook");
        assert_eq!(snapshot.len(), 3);
    }
}

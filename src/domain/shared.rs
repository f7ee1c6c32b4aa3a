use super::*;

use std::sync::{Arc, Mutex};

/// Thread-safe handle to a `GroupedContactStore`.
///
/// Each call holds the lock for the whole operation, so a snapshot never
/// observes a half-applied mutation.
#[derive(Debug, Clone, Default)]
pub struct SharedContactStore {
    inner: Arc<Mutex<GroupedContactStore>>,
}

impl SharedContactStore {
    pub fn new(store: GroupedContactStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    pub fn seed<I>(&self, initial: I) -> Result<(), AppError>
    where
        I: IntoIterator<Item = (Section, Vec<Contact>)>,
    {
        self.inner.lock()?.seed(initial);
        Ok(())
    }

    pub fn add(&self, name: &str, section: Section) -> Result<ContactHandle, AppError> {
        self.inner.lock()?.add(name, section)
    }

    pub fn remove(&self, handle: ContactHandle) -> Result<(), AppError> {
        self.inner.lock()?.remove(handle)
    }

    pub fn toggle_favorite(&self, handle: ContactHandle) -> Result<(), AppError> {
        self.inner.lock()?.toggle_favorite(handle)
    }

    pub fn snapshot(&self) -> Result<Snapshot, AppError> {
        Ok(self.inner.lock()?.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn concurrent_adds_all_land() -> Result<(), AppError> {
        let shared = SharedContactStore::default();

        thread::scope(|s| -> Result<(), AppError> {
            let mut workers = Vec::new();
            for worker in 0..4 {
                let shared = shared.clone();
                workers.push(s.spawn(move || -> Result<(), AppError> {
                    let section = if worker % 2 == 0 {
                        Section::Ceo
                    } else {
                        Section::Peasants
                    };
                    for i in 0..25 {
                        shared.add(&format!("Worker{worker} Contact{i}"), section)?;
                    }
                    Ok(())
                }));
            }

            for worker in workers {
                worker.join().unwrap()?;
            }
            Ok(())
        })?;

        let snapshot = shared.snapshot()?;
        assert_eq!(snapshot.len(), 100);
        assert_eq!(snapshot.contacts(Section::Ceo).len(), 50);
        assert_eq!(snapshot.contacts(Section::Peasants).len(), 50);
        Ok(())
    }

    #[test]
    fn stale_removal_reports_not_found() -> Result<(), AppError> {
        let shared = SharedContactStore::new(GroupedContactStore::with_demo_seed());
        let row_action = shared.clone();

        let handle = shared.snapshot()?.handle_at(1).unwrap();
        shared.remove(handle)?;

        assert!(row_action.remove(handle).is_err_and(|e| e.is_not_found()));
        assert_eq!(shared.snapshot()?.names(Section::Ceo), vec!["Tim Cook"]);
        Ok(())
    }
}

//! Records shown by the dashboard and where they come from

use anyhow::{bail, Result};

/// One row of the records table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl Record {
    pub fn new(id: u64, name: &str, email: &str, role: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
            role: role.to_string(),
        }
    }
}

/// Backend the dashboard fetches records from
///
/// `fetch` may block (network, disk); the app calls it off the UI thread.
pub trait DataSource: Send + Sync {
    fn fetch(&self) -> Result<Vec<Record>>;
}

/// In-memory source with a fixed set of records
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<Record>,
}

impl StaticSource {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// A handful of sample users
    pub fn sample() -> Self {
        Self::new(vec![
            Record::new(1, "Ada Lovelace", "ada@example.com", "admin"),
            Record::new(2, "Grace Hopper", "grace@example.com", "editor"),
            Record::new(3, "Alan Turing", "alan@example.com", "viewer"),
            Record::new(4, "Edsger Dijkstra", "edsger@example.com", "editor"),
            Record::new(5, "Barbara Liskov", "barbara@example.com", "viewer"),
        ])
    }
}

impl DataSource for StaticSource {
    fn fetch(&self) -> Result<Vec<Record>> {
        Ok(self.records.clone())
    }
}

/// Local copy of the fetched records, edited in place
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn replace(&mut self, records: Vec<Record>) {
        self.records = records;
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, id: u64) -> Option<&Record> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rename a record; the name is trimmed and must not end up empty
    pub fn rename(&mut self, id: u64, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            bail!("Name cannot be empty");
        }
        let Some(record) = self.records.iter_mut().find(|record| record.id == id) else {
            bail!("Record {} no longer exists", id);
        };
        record.name = name.to_string();
        Ok(())
    }

    /// Remove a record, returning it if it was present
    pub fn remove(&mut self, id: u64) -> Option<Record> {
        let index = self.records.iter().position(|record| record.id == id)?;
        Some(self.records.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> RecordStore {
        let mut store = RecordStore::default();
        store.replace(StaticSource::sample().fetch().unwrap());
        store
    }

    #[test]
    fn test_static_source_returns_records() {
        let records = StaticSource::sample().fetch().unwrap();
        assert_eq!(records.len(), 5);
        assert_eq!(records[0].name, "Ada Lovelace");
    }

    #[test]
    fn test_rename_trims_name() {
        let mut store = store();
        store.rename(2, "  Rear Admiral Hopper ").unwrap();
        assert_eq!(store.get(2).unwrap().name, "Rear Admiral Hopper");
    }

    #[test]
    fn test_rename_rejects_blank_and_missing() {
        let mut store = store();
        assert!(store.rename(2, "   ").is_err());
        assert_eq!(store.get(2).unwrap().name, "Grace Hopper");
        assert!(store.rename(99, "Nobody").is_err());
    }

    #[test]
    fn test_remove() {
        let mut store = store();
        let removed = store.remove(3).unwrap();
        assert_eq!(removed.name, "Alan Turing");
        assert_eq!(store.len(), 4);
        assert!(store.get(3).is_none());
        assert!(store.remove(3).is_none());
    }
}

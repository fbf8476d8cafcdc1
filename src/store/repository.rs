//! Entry repository
//!
//! The one owner of the persisted entry list and form draft. Every view reads and writes through
//! it, so the payload shape under each key is defined here and nowhere else.
//!
//! Writes are whole snapshots: read the full list, change it in memory, write the full list.

use super::backend::KeyValueBackend;
use super::error::{StoreError, StoreResult, SubmitError};
use crate::tracker::{Entry, EntryDraft, WeightUnit};

/// Key holding the JSON array of submitted entries
pub const ENTRIES_KEY: &str = "weightEntries";

/// Key holding the in-progress form draft
pub const DRAFT_KEY: &str = "weightData";

/// Persisted entry list and form draft over any key-value backend
#[derive(Debug, Clone)]
pub struct EntryRepository<B> {
    backend: B,
}

impl<B: KeyValueBackend> EntryRepository<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Load every entry in submission order
    pub fn load(&self) -> StoreResult<Vec<Entry>> {
        let Some(raw) = self.backend.get_item(ENTRIES_KEY)? else {
            return Ok(Vec::new());
        };

        let entries: Vec<Entry> = serde_json::from_str(&raw).map_err(|e| {
            tracing::warn!("Stored entries are unreadable: {}", e);
            StoreError::Corrupt {
                key: ENTRIES_KEY.to_string(),
                error: e.to_string(),
            }
        })?;

        tracing::debug!("Loaded {} entries", entries.len());
        Ok(entries)
    }

    /// Append one entry and return the new list length
    pub fn append(&self, entry: Entry) -> StoreResult<usize> {
        self.append_all(std::iter::once(entry))
    }

    /// Append a batch with a single snapshot write and return the new list length
    pub fn append_all(&self, new_entries: impl IntoIterator<Item = Entry>) -> StoreResult<usize> {
        let mut entries = self.load()?;
        let before = entries.len();
        entries.extend(new_entries);

        self.save_entries(&entries)?;
        tracing::info!(
            "Appended {} entries ({} total)",
            entries.len() - before,
            entries.len()
        );
        Ok(entries.len())
    }

    fn save_entries(&self, entries: &[Entry]) -> StoreResult<()> {
        let json = serde_json::to_string(entries)?;
        self.backend.set_item(ENTRIES_KEY, &json)
    }

    /// Load the saved draft, or an empty one
    pub fn load_draft(&self) -> StoreResult<EntryDraft> {
        self.load_draft_or(WeightUnit::default())
    }

    /// Load the saved draft, or an empty one preselecting `unit`
    pub fn load_draft_or(&self, unit: WeightUnit) -> StoreResult<EntryDraft> {
        let Some(raw) = self.backend.get_item(DRAFT_KEY)? else {
            return Ok(EntryDraft::cleared(unit));
        };

        serde_json::from_str(&raw).map_err(|e| {
            tracing::warn!("Stored draft is unreadable: {}", e);
            StoreError::Corrupt {
                key: DRAFT_KEY.to_string(),
                error: e.to_string(),
            }
        })
    }

    /// Persist the draft (called on every keystroke)
    pub fn save_draft(&self, draft: &EntryDraft) -> StoreResult<()> {
        let json = serde_json::to_string(draft)?;
        self.backend.set_item(DRAFT_KEY, &json)?;
        tracing::trace!("Saved draft");
        Ok(())
    }

    /// Drop the saved draft
    pub fn clear_draft(&self) -> StoreResult<()> {
        self.backend.remove_item(DRAFT_KEY)
    }

    /// Validate a draft, append the entry and reset the saved draft
    ///
    /// The reset draft keeps the unit selection. On a validation error nothing is written.
    pub fn submit(&self, draft: &EntryDraft) -> Result<Entry, SubmitError> {
        let entry = draft.validate()?;
        self.append(entry.clone())?;
        self.save_draft(&EntryDraft::cleared(draft.unit))?;

        tracing::info!(
            "Recorded {} on {}: {} {} ({})",
            entry.name,
            entry.date,
            entry.weight,
            entry.unit,
            entry.category
        );
        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::backend::{FileBackend, MemoryBackend};
    use crate::tracker::{Category, DraftField};
    use tempfile::TempDir;

    fn draft(name: &str, date: &str, weight: &str, height: &str) -> EntryDraft {
        EntryDraft::default()
            .with(DraftField::Name, name)
            .with(DraftField::Date, date)
            .with(DraftField::Weight, weight)
            .with(DraftField::Height, height)
    }

    #[test]
    fn test_empty_store_loads_empty() {
        let repo = EntryRepository::new(MemoryBackend::new());
        assert!(repo.load().unwrap().is_empty());
        assert_eq!(repo.load_draft().unwrap(), EntryDraft::default());
    }

    #[test]
    fn test_append_only() {
        let repo = EntryRepository::new(MemoryBackend::new());

        let first = draft("a", "2024-01-15", "50", "170").validate().unwrap();
        let second = draft("b", "2024-01-10", "70", "170").validate().unwrap();
        let third = draft("c", "2024-01-20", "95", "170").validate().unwrap();

        assert_eq!(repo.append(first.clone()).unwrap(), 1);
        let snapshot = repo.load().unwrap();

        assert_eq!(repo.append(second.clone()).unwrap(), 2);
        assert_eq!(repo.append(third.clone()).unwrap(), 3);

        let loaded = repo.load().unwrap();
        assert_eq!(loaded[..1], snapshot[..]);
        // Submission order, not date order
        assert_eq!(loaded, vec![first, second, third]);
    }

    #[test]
    fn test_round_trip_through_file_backend() {
        let temp_dir = TempDir::new().unwrap();
        let entries: Vec<Entry> = [
            ("a", "72.35", WeightUnit::Kg),
            ("b", "180.2", WeightUnit::Lbs),
            ("c", "0.1", WeightUnit::Kg),
        ]
        .into_iter()
        .map(|(name, weight, unit)| {
            draft(name, "2024-02-01", weight, "165.5")
                .unit(unit)
                .validate()
                .unwrap()
        })
        .collect();

        {
            let repo = EntryRepository::new(FileBackend::open(temp_dir.path()).unwrap());
            assert_eq!(repo.append_all(entries.clone()).unwrap(), 3);
        }

        let reopened = EntryRepository::new(FileBackend::open(temp_dir.path()).unwrap());
        assert_eq!(reopened.load().unwrap(), entries);
    }

    #[test]
    fn test_full_precision_weight_reloads_exactly() {
        let repo = EntryRepository::new(MemoryBackend::new());
        let d = draft("Ana", "2024-01-15", "114612.72181642633", "170");

        let entry = repo.submit(&d).unwrap();
        assert_eq!(repo.load().unwrap(), vec![entry]);
    }

    #[test]
    fn test_corrupt_payload_is_reported() {
        let backend = MemoryBackend::new();
        backend.set_item(ENTRIES_KEY, "{not json").unwrap();
        let repo = EntryRepository::new(backend);

        match repo.load() {
            Err(StoreError::Corrupt { key, .. }) => assert_eq!(key, ENTRIES_KEY),
            other => panic!("expected corrupt error, got {:?}", other),
        }

        // Appending must not overwrite what could not be read
        let entry = draft("a", "2024-01-15", "70", "170").validate().unwrap();
        assert!(repo.append(entry).is_err());
        assert_eq!(
            repo.backend().get_item(ENTRIES_KEY).unwrap().as_deref(),
            Some("{not json")
        );
    }

    #[test]
    fn test_unknown_category_is_corrupt() {
        let backend = MemoryBackend::new();
        backend
            .set_item(
                ENTRIES_KEY,
                r#"[{"name":"x","date":"2024-01-15","weight":70,"unit":"kg","height":170,"category":"Obese"}]"#,
            )
            .unwrap();
        let repo = EntryRepository::new(backend);
        assert!(matches!(repo.load(), Err(StoreError::Corrupt { .. })));
    }

    #[test]
    fn test_draft_persistence() {
        let repo = EntryRepository::new(MemoryBackend::new());
        let d = draft("Ana", "2024-01-15", "7", "").unit(WeightUnit::Lbs);

        repo.save_draft(&d).unwrap();
        assert_eq!(repo.load_draft().unwrap(), d);

        repo.clear_draft().unwrap();
        assert_eq!(repo.load_draft().unwrap(), EntryDraft::default());
        assert_eq!(
            repo.load_draft_or(WeightUnit::Lbs).unwrap(),
            EntryDraft::cleared(WeightUnit::Lbs)
        );
    }

    #[test]
    fn test_submit_appends_and_resets_draft() {
        let repo = EntryRepository::new(MemoryBackend::new());
        let d = draft("Ana", "2024-01-15", "95", "170").unit(WeightUnit::Kg);
        repo.save_draft(&d).unwrap();

        let entry = repo.submit(&d).unwrap();
        assert_eq!(entry.category, Category::Overweight);
        assert_eq!(repo.load().unwrap(), vec![entry]);
        assert!(repo.load_draft().unwrap().is_blank());
    }

    #[test]
    fn test_submit_invalid_writes_nothing() {
        let repo = EntryRepository::new(MemoryBackend::new());
        let d = draft("Ana", "2024-01-15", "abc", "170");
        repo.save_draft(&d).unwrap();

        assert!(matches!(repo.submit(&d), Err(SubmitError::Invalid(_))));
        assert!(repo.load().unwrap().is_empty());
        assert_eq!(repo.load_draft().unwrap(), d);
    }
}

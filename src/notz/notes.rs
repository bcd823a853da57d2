//! The note store: owns the authoritative ordered collection of notes,
//! applies mutations, derives filtered views, and keeps the durable
//! snapshot in sync.
//!
//! Every mutating operation rewrites the full collection under
//! [`NOTES_KEY`] before returning; there is no delta or append path.
//! Views are recomputed on every call with a linear scan—personal note
//! sets are small, so no index is kept.

use crate::error::Result;
use crate::id::IdGenerator;
use crate::model::{Note, Section};
use crate::store::{Storage, NOTES_KEY};
use log::{debug, warn};

/// The authoritative container for a session's notes.
///
/// Generic over its two collaborators: the durable [`Storage`] backend
/// and the [`IdGenerator`] handing out fresh ids. Construct one per
/// session with [`NoteStore::open`]; nothing else may mutate the
/// collection.
pub struct NoteStore<S: Storage, G: IdGenerator> {
    notes: Vec<Note>,
    storage: S,
    ids: G,
}

impl<S: Storage, G: IdGenerator> NoteStore<S, G> {
    /// Opens a store over `storage`, loading the existing snapshot.
    ///
    /// Fails open: an absent, unreadable, or undecodable snapshot
    /// yields an empty collection, never an error.
    pub fn open(storage: S, ids: G) -> Self {
        let notes = match storage.load(NOTES_KEY) {
            Ok(Some(bytes)) => match serde_json::from_slice(&bytes) {
                Ok(notes) => notes,
                Err(err) => {
                    warn!("snapshot undecodable, starting empty: {}", err);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!("snapshot unreadable, starting empty: {}", err);
                Vec::new()
            }
        };
        Self {
            notes,
            storage,
            ids,
        }
    }

    /// Creates a note and appends it to the collection.
    ///
    /// `text` is trimmed for the check only; if nothing remains the
    /// call is a silent no-op (`Ok(None)`) and no snapshot is written.
    /// The stored note keeps the caller's strings verbatim.
    pub fn create(&mut self, title: &str, text: &str) -> Result<Option<&Note>> {
        if text.trim().is_empty() {
            debug!("create rejected: blank text");
            return Ok(None);
        }

        let id = self.ids.new_id();
        self.notes
            .push(Note::new(id, title.to_string(), text.to_string()));
        self.persist()?;
        Ok(self.notes.last())
    }

    /// Overwrites the title and text of the note matching `id`.
    ///
    /// `id` and the archived flag are untouched. No trimming or
    /// emptiness check applies here—unlike create, edit accepts empty
    /// text. An unknown id is a silent no-op; the snapshot is written
    /// either way, matching the original contract.
    pub fn edit(&mut self, id: &str, title: &str, text: &str) -> Result<Option<&Note>> {
        let position = self.notes.iter().position(|n| n.id == id);
        if let Some(i) = position {
            self.notes[i].title = title.to_string();
            self.notes[i].text = text.to_string();
        } else {
            debug!("edit no-op: no note with id {}", id);
        }
        self.persist()?;
        Ok(position.map(|i| &self.notes[i]))
    }

    /// Flips the archived flag of the note matching `id`.
    ///
    /// An unknown id is a silent no-op; the snapshot is written either
    /// way. Toggling twice restores the original flag.
    pub fn toggle_archive(&mut self, id: &str) -> Result<Option<&Note>> {
        let position = self.notes.iter().position(|n| n.id == id);
        if let Some(i) = position {
            self.notes[i].is_archived = !self.notes[i].is_archived;
        } else {
            debug!("toggle_archive no-op: no note with id {}", id);
        }
        self.persist()?;
        Ok(position.map(|i| &self.notes[i]))
    }

    /// Derives a view of the collection, in collection order.
    ///
    /// The search predicate (case-insensitive containment in title or
    /// text) applies before the section filter. The iterator is lazy
    /// and borrows the collection; call again to restart.
    pub fn query<'a>(
        &'a self,
        search: Option<&str>,
        section: Section,
    ) -> impl Iterator<Item = &'a Note> {
        let needle = search.map(|term| term.to_lowercase());
        self.notes.iter().filter(move |note| {
            if let Some(term) = &needle {
                let hit = note.title.to_lowercase().contains(term)
                    || note.text.to_lowercase().contains(term);
                if !hit {
                    return false;
                }
            }
            section.admits(note.is_archived)
        })
    }

    /// Looks up a note by id.
    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// The full collection, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.notes.iter()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Consumes the store and hands back its backend, so a fresh store
    /// can be opened over the same bytes (restart simulation).
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist(&mut self) -> Result<()> {
        let bytes = serde_json::to_vec(&self.notes)?;
        self.storage.save(NOTES_KEY, &bytes)?;
        debug!("persisted {} notes", self.notes.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::fixtures::SequentialIds;
    use crate::store::memory::{fixtures::seeded, InMemoryStore};
    use std::collections::HashSet;

    fn empty_store() -> NoteStore<InMemoryStore, SequentialIds> {
        NoteStore::open(InMemoryStore::new(), SequentialIds::new())
    }

    #[test]
    fn created_ids_are_pairwise_distinct() {
        let mut store = empty_store();
        for i in 0..20 {
            store.create("t", &format!("text {}", i)).unwrap();
        }
        let ids: HashSet<String> = store.iter().map(|n| n.id.clone()).collect();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn create_appends_in_order_with_archive_off() {
        let mut store = empty_store();
        store.create("Shop", "milk").unwrap();
        let note = store.create("Work", "report").unwrap().unwrap();
        assert!(!note.is_archived);

        let titles: Vec<&str> = store.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, ["Shop", "Work"]);
    }

    #[test]
    fn blank_text_is_rejected_without_a_write() {
        let mut store = empty_store();
        assert!(store.create("anything", "").unwrap().is_none());
        assert!(store.create("anything", "   ").unwrap().is_none());
        assert!(store.create("anything", "\n\t ").unwrap().is_none());
        assert!(store.is_empty());

        // No snapshot may exist: nothing was ever persisted.
        let storage = store.into_storage();
        assert!(storage.load(NOTES_KEY).unwrap().is_none());
    }

    #[test]
    fn create_keeps_surrounding_whitespace_in_stored_text() {
        let mut store = empty_store();
        let note = store.create("t", "  milk  ").unwrap().unwrap();
        assert_eq!(note.text, "  milk  ");
    }

    #[test]
    fn edit_overwrites_title_and_text_only() {
        let mut store = empty_store();
        let id = store.create("Shop", "milk").unwrap().unwrap().id.clone();
        store.toggle_archive(&id).unwrap();

        let edited = store.edit(&id, "Errands", "").unwrap().unwrap();
        assert_eq!(edited.id, id);
        assert_eq!(edited.title, "Errands");
        assert_eq!(edited.text, "");
        assert!(edited.is_archived);
    }

    #[test]
    fn edit_unknown_id_is_a_silent_noop() {
        let mut store = empty_store();
        store.create("Shop", "milk").unwrap();
        let before: Vec<Note> = store.iter().cloned().collect();

        assert!(store.edit("nonexistent", "a", "b").unwrap().is_none());

        let after: Vec<Note> = store.iter().cloned().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn toggle_archive_is_an_involution() {
        let mut store = empty_store();
        let id = store.create("Shop", "milk").unwrap().unwrap().id.clone();

        assert!(store.toggle_archive(&id).unwrap().unwrap().is_archived);
        assert!(!store.toggle_archive(&id).unwrap().unwrap().is_archived);
    }

    #[test]
    fn toggle_unknown_id_is_a_silent_noop() {
        let mut store = empty_store();
        store.create("Shop", "milk").unwrap();
        let before: Vec<Note> = store.iter().cloned().collect();

        assert!(store.toggle_archive("nonexistent").unwrap().is_none());
        let after: Vec<Note> = store.iter().cloned().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn query_filters_by_section() {
        let mut store = empty_store();
        store.create("Shop", "milk").unwrap();
        let id = store.create("Work", "report").unwrap().unwrap().id.clone();
        store.toggle_archive(&id).unwrap();

        let active: Vec<&str> = store
            .query(None, Section::Notes)
            .map(|n| n.title.as_str())
            .collect();
        assert_eq!(active, ["Shop"]);

        let archived: Vec<&str> = store
            .query(None, Section::Archive)
            .map(|n| n.title.as_str())
            .collect();
        assert_eq!(archived, ["Work"]);

        let all: Vec<&str> = store
            .query(None, Section::All)
            .map(|n| n.title.as_str())
            .collect();
        assert_eq!(all, ["Shop", "Work"]);
    }

    #[test]
    fn query_search_matches_title_or_text_case_insensitively() {
        let mut store = empty_store();
        store.create("Shop", "milk").unwrap();
        store.create("Work", "Weekly MILK budget").unwrap();
        store.create("Gym", "leg day").unwrap();

        let hits: Vec<&str> = store
            .query(Some("Milk"), Section::Notes)
            .map(|n| n.title.as_str())
            .collect();
        assert_eq!(hits, ["Shop", "Work"]);

        assert_eq!(store.query(Some("zzz"), Section::Notes).count(), 0);
    }

    #[test]
    fn query_applies_search_before_section_filter() {
        let mut store = empty_store();
        store.create("Shop", "milk").unwrap();
        let id = store
            .create("Pantry", "milk and flour")
            .unwrap()
            .unwrap()
            .id
            .clone();
        store.toggle_archive(&id).unwrap();

        // The archived match survives the search stage but is dropped
        // by the "notes" section, and vice versa.
        let active: Vec<&str> = store
            .query(Some("milk"), Section::Notes)
            .map(|n| n.title.as_str())
            .collect();
        assert_eq!(active, ["Shop"]);

        let archived: Vec<&str> = store
            .query(Some("milk"), Section::Archive)
            .map(|n| n.title.as_str())
            .collect();
        assert_eq!(archived, ["Pantry"]);
    }

    #[test]
    fn query_is_restartable() {
        let mut store = empty_store();
        store.create("Shop", "milk").unwrap();

        assert_eq!(store.query(None, Section::Notes).count(), 1);
        assert_eq!(store.query(None, Section::Notes).count(), 1);
    }

    #[test]
    fn reopening_reproduces_the_collection_exactly() {
        let mut store = empty_store();
        store.create("Shop", "milk").unwrap();
        let id = store.create("Work", "report").unwrap().unwrap().id.clone();
        store.toggle_archive(&id).unwrap();
        store.edit(&id, "Office", "quarterly report").unwrap();

        let before: Vec<Note> = store.iter().cloned().collect();
        let reopened = NoteStore::open(store.into_storage(), SequentialIds::new());
        let after: Vec<Note> = reopened.iter().cloned().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn empty_collection_round_trips() {
        let mut store = empty_store();
        // Force a snapshot of the empty collection via a no-op edit.
        store.edit("nonexistent", "a", "b").unwrap();

        let reopened = NoteStore::open(store.into_storage(), SequentialIds::new());
        assert!(reopened.is_empty());
    }

    #[test]
    fn corrupt_snapshot_opens_empty() {
        let storage = seeded(b"{ not json");
        let store = NoteStore::open(storage, SequentialIds::new());
        assert!(store.is_empty());
    }

    #[test]
    fn noop_edit_still_writes_a_snapshot() {
        let mut store = empty_store();
        store.edit("nonexistent", "a", "b").unwrap();

        let storage = store.into_storage();
        let bytes = storage.load(NOTES_KEY).unwrap().expect("snapshot written");
        assert_eq!(bytes, b"[]");
    }
}

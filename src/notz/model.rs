use serde::{Deserialize, Serialize};

/// A single note.
///
/// The `id` is an opaque string assigned once at creation by an
/// [`IdGenerator`](crate::id::IdGenerator) and never reassigned; the
/// store treats it as a token, never parsing it. Snapshots keep the
/// camelCase field spelling (`isArchived`) so existing data files stay
/// readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub text: String,
    #[serde(default)]
    pub is_archived: bool,
}

impl Note {
    /// Crate-private: notes are only born through
    /// [`NoteStore::create`](crate::notes::NoteStore::create).
    pub(crate) fn new(id: String, title: String, text: String) -> Self {
        Self {
            id,
            title,
            text,
            is_archived: false,
        }
    }
}

/// The view filter selecting active vs archived vs all notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    /// Non-archived notes only.
    #[default]
    Notes,
    /// Archived notes only.
    Archive,
    /// No archive-status filtering.
    All,
}

impl Section {
    /// Maps a section name to a filter. Only the two reserved names
    /// select a side; every other string means "show everything".
    pub fn parse(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "notes" => Section::Notes,
            "archive" => Section::Archive,
            _ => Section::All,
        }
    }

    pub(crate) fn admits(&self, archived: bool) -> bool {
        match self {
            Section::Notes => !archived,
            Section::Archive => archived,
            Section::All => true,
        }
    }
}

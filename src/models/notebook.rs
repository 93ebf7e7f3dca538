//! Row models for the bilingual (French / English) vocabulary notebook.

use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EnglishItem {
    pub id: i64,
    pub french_text: String,
    pub english_text: String,
    pub category_id: i64,
    pub notes: Option<String>,
    pub created_at: String,
}

/// Fields a user fills in to add or edit a notebook entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnglishItemDraft {
    pub french_text: String,
    pub english_text: String,
    pub category_id: Option<i64>,
    pub notes: Option<String>,
}

/// Filter for listing entries: optional category equality and an optional
/// case-insensitive search over both texts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotebookFilter {
    pub category_id: Option<i64>,
    pub search: Option<String>,
}

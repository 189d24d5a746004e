//! Entity editors
//!
//! Dialog workflows orchestrating validation, image normalization and the
//! collection services. Each editor walks the same state machine:
//!
//! `Closed -> Open(Create | Edit) -> Saved -> Closed`, or
//! `Open -> Cancelled -> Closed`.
//!
//! Validation failures keep the dialog open with field-level errors and
//! persist nothing. A successful save persists, broadcasts (through the
//! service), surfaces a success toast, and closes.

pub mod content;
pub mod event;
pub mod leader;

pub use content::ContentEditor;
pub use event::EventEditor;
pub use leader::LeaderEditor;

/// What an open dialog is doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    /// Editing the entity with this id; saves preserve it
    Edit(String),
}

/// Dialog lifecycle state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorState {
    Closed,
    Open(EditorMode),
}

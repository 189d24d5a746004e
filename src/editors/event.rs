//! Event editor dialog

use std::collections::BTreeMap;
use std::sync::Arc;

use uuid::Uuid;

use crate::config::DEFAULT_EVENT_IMAGE;
use crate::editors::{EditorMode, EditorState};
use crate::error::{AppError, Result};
use crate::models::Event;
use crate::notify::{Notification, Notifier};
use crate::services::EventsService;
use crate::upload::{self, ImageUpload, PreviewHandle, UploadSequencer};

/// Create/edit/delete workflow for events
pub struct EventEditor {
    service: EventsService,
    notifier: Arc<dyn Notifier>,
    sequencer: UploadSequencer,
    state: EditorState,
    title: String,
    date: String,
    description: String,
    /// Normalized data URL of a newly attached image, or the entity's
    /// existing value when editing; empty means "no image chosen"
    image: String,
    preview: Option<PreviewHandle>,
    field_errors: BTreeMap<&'static str, String>,
    pending_delete: Option<String>,
}

impl EventEditor {
    pub fn new(service: EventsService, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            service,
            notifier,
            sequencer: UploadSequencer::new(),
            state: EditorState::Closed,
            title: String::new(),
            date: String::new(),
            description: String::new(),
            image: String::new(),
            preview: None,
            field_errors: BTreeMap::new(),
            pending_delete: None,
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// Field-level validation messages from the last failed save
    pub fn field_errors(&self) -> &BTreeMap<&'static str, String> {
        &self.field_errors
    }

    /// Open with blank fields for a new event
    pub fn open_create(&mut self) {
        self.reset_fields();
        self.state = EditorState::Open(EditorMode::Create);
    }

    /// Open pre-populated from the stored event
    pub fn open_edit(&mut self, id: &str) -> Result<()> {
        let event = self.service.get(id)?;

        self.reset_fields();
        self.title = event.title;
        self.date = event.date;
        self.description = event.description;
        self.image = event.image;
        self.state = EditorState::Open(EditorMode::Edit(id.to_string()));
        Ok(())
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    pub fn set_date(&mut self, date: &str) {
        self.date = date.to_string();
    }

    pub fn set_description(&mut self, description: &str) {
        self.description = description.to_string();
    }

    /// Normalize an uploaded image into the dialog. A failed upload leaves
    /// the prior image in place; a superseded one is discarded.
    pub fn attach_image(&mut self, upload: &ImageUpload) -> Result<()> {
        let ticket = self.sequencer.begin();

        let normalized = match upload::normalize(upload) {
            Ok(normalized) => normalized,
            Err(err) => {
                self.notifier.notify(err.notification());
                return Err(err);
            }
        };

        if !self.sequencer.is_current(&ticket) {
            // A newer upload started while this one was processing.
            normalized.preview.release();
            return Ok(());
        }

        if let Some(old) = self.preview.take() {
            old.release();
        }
        self.image = normalized.data_url;
        self.preview = Some(normalized.preview);
        Ok(())
    }

    /// Validate and persist. On success the dialog closes and the change
    /// has already been broadcast; on validation failure it stays open.
    pub fn save(&mut self) -> Result<Event> {
        let mode = match &self.state {
            EditorState::Open(mode) => mode.clone(),
            EditorState::Closed => {
                return Err(AppError::validation("form", "No dialog is open"));
            }
        };

        self.field_errors.clear();
        for (field, value) in [
            ("title", &self.title),
            ("date", &self.date),
            ("description", &self.description),
        ] {
            if value.trim().is_empty() {
                self.field_errors.insert(field, "This field is required".to_string());
            }
        }
        if !self.field_errors.is_empty() {
            let err = AppError::validation("form", "Please fill in all required fields");
            self.notifier.notify(err.notification());
            return Err(err);
        }

        let event = Event {
            id: match &mode {
                EditorMode::Edit(id) => id.clone(),
                EditorMode::Create => Uuid::new_v4().to_string(),
            },
            title: self.title.trim().to_string(),
            date: self.date.trim().to_string(),
            description: self.description.trim().to_string(),
            image: if self.image.is_empty() {
                DEFAULT_EVENT_IMAGE.to_string()
            } else {
                self.image.clone()
            },
        };

        self.service.save(event.clone())?;

        self.notifier.notify(match mode {
            EditorMode::Create => {
                Notification::success("Event Created", "The new event has been successfully created.")
            }
            EditorMode::Edit(_) => {
                Notification::success("Event Updated", "The event has been successfully updated.")
            }
        });

        self.close();
        Ok(event)
    }

    /// Close without persisting anything
    pub fn cancel(&mut self) {
        self.close();
    }

    /// First step of the delete flow; nothing is removed yet
    pub fn request_delete(&mut self, id: &str) {
        self.pending_delete = Some(id.to_string());
    }

    /// Abandon a pending delete
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Confirm the pending delete, re-persist and broadcast
    pub fn confirm_delete(&mut self) -> Result<()> {
        let id = self
            .pending_delete
            .take()
            .ok_or_else(|| AppError::validation("delete", "No delete is pending confirmation"))?;

        self.service.delete(&id)?;
        self.notifier.notify(Notification::success(
            "Event Deleted",
            "The event has been successfully removed.",
        ));
        Ok(())
    }

    fn close(&mut self) {
        self.reset_fields();
        self.state = EditorState::Closed;
    }

    fn reset_fields(&mut self) {
        if let Some(preview) = self.preview.take() {
            preview.release();
        }
        self.title.clear();
        self.date.clear();
        self.description.clear();
        self.image.clear();
        self.field_errors.clear();
    }
}

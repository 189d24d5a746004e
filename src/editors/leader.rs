//! Leader editor dialog
//!
//! Same workflow as the event editor; name and role are required, the bio
//! is optional and stored only when non-empty.

use std::collections::BTreeMap;
use std::sync::Arc;

use uuid::Uuid;

use crate::config::DEFAULT_LEADER_IMAGE;
use crate::editors::{EditorMode, EditorState};
use crate::error::{AppError, Result};
use crate::models::Leader;
use crate::notify::{Notification, Notifier};
use crate::services::LeadersService;
use crate::upload::{self, ImageUpload, PreviewHandle, UploadSequencer};

/// Create/edit/delete workflow for leadership profiles
pub struct LeaderEditor {
    service: LeadersService,
    notifier: Arc<dyn Notifier>,
    sequencer: UploadSequencer,
    state: EditorState,
    name: String,
    role: String,
    bio: String,
    image: String,
    preview: Option<PreviewHandle>,
    field_errors: BTreeMap<&'static str, String>,
    pending_delete: Option<String>,
}

impl LeaderEditor {
    pub fn new(service: LeadersService, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            service,
            notifier,
            sequencer: UploadSequencer::new(),
            state: EditorState::Closed,
            name: String::new(),
            role: String::new(),
            bio: String::new(),
            image: String::new(),
            preview: None,
            field_errors: BTreeMap::new(),
            pending_delete: None,
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn field_errors(&self) -> &BTreeMap<&'static str, String> {
        &self.field_errors
    }

    pub fn open_create(&mut self) {
        self.reset_fields();
        self.state = EditorState::Open(EditorMode::Create);
    }

    pub fn open_edit(&mut self, id: &str) -> Result<()> {
        let leader = self.service.get(id)?;

        self.reset_fields();
        self.name = leader.name;
        self.role = leader.role;
        self.bio = leader.bio.unwrap_or_default();
        self.image = leader.image;
        self.state = EditorState::Open(EditorMode::Edit(id.to_string()));
        Ok(())
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn set_role(&mut self, role: &str) {
        self.role = role.to_string();
    }

    pub fn set_bio(&mut self, bio: &str) {
        self.bio = bio.to_string();
    }

    /// Normalize an uploaded image into the dialog
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

    pub fn save(&mut self) -> Result<Leader> {
        let mode = match &self.state {
            EditorState::Open(mode) => mode.clone(),
            EditorState::Closed => {
                return Err(AppError::validation("form", "No dialog is open"));
            }
        };

        self.field_errors.clear();
        for (field, value) in [("name", &self.name), ("role", &self.role)] {
            if value.trim().is_empty() {
                self.field_errors.insert(field, "This field is required".to_string());
            }
        }
        if !self.field_errors.is_empty() {
            let err = AppError::validation("form", "Please fill in all required fields");
            self.notifier.notify(err.notification());
            return Err(err);
        }

        let bio = self.bio.trim();
        let leader = Leader {
            id: match &mode {
                EditorMode::Edit(id) => id.clone(),
                EditorMode::Create => Uuid::new_v4().to_string(),
            },
            name: self.name.trim().to_string(),
            role: self.role.trim().to_string(),
            bio: if bio.is_empty() {
                None
            } else {
                Some(bio.to_string())
            },
            image: if self.image.is_empty() {
                DEFAULT_LEADER_IMAGE.to_string()
            } else {
                self.image.clone()
            },
        };

        self.service.save(leader.clone())?;

        self.notifier.notify(match mode {
            EditorMode::Create => {
                Notification::success("Leader Added", "The new leader has been successfully added.")
            }
            EditorMode::Edit(_) => {
                Notification::success("Leader Updated", "The leader has been successfully updated.")
            }
        });

        self.close();
        Ok(leader)
    }

    pub fn cancel(&mut self) {
        self.close();
    }

    pub fn request_delete(&mut self, id: &str) {
        self.pending_delete = Some(id.to_string());
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn confirm_delete(&mut self) -> Result<()> {
        let id = self
            .pending_delete
            .take()
            .ok_or_else(|| AppError::validation("delete", "No delete is pending confirmation"))?;

        self.service.delete(&id)?;
        self.notifier.notify(Notification::success(
            "Leader Deleted",
            "The leader has been successfully removed.",
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
        self.name.clear();
        self.role.clear();
        self.bio.clear();
        self.image.clear();
        self.field_errors.clear();
    }
}

//! Content editor dialogs
//!
//! Two small flows: a text dialog editing one named field in one language
//! branch, and an image dialog replacing one page image slot. Unlike the
//! entity editors there is no create/delete — content fields always exist.

use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::models::{Language, Page};
use crate::notify::{Notification, Notifier};
use crate::services::ContentService;
use crate::upload::{self, ImageUpload, PreviewHandle, UploadSequencer};

/// An open text edit
#[derive(Debug, Clone, PartialEq)]
pub struct TextEdit {
    pub language: Language,
    pub page: Page,
    pub field: String,
    pub value: String,
}

struct ImageSlotEdit {
    page: Page,
    slot: String,
    /// Normalized data URL once an upload landed
    value: Option<String>,
}

/// Edit workflow for page text and image slots
pub struct ContentEditor {
    service: ContentService,
    notifier: Arc<dyn Notifier>,
    sequencer: UploadSequencer,
    editing: Option<TextEdit>,
    image_edit: Option<ImageSlotEdit>,
    preview: Option<PreviewHandle>,
}

impl ContentEditor {
    pub fn new(service: ContentService, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            service,
            notifier,
            sequencer: UploadSequencer::new(),
            editing: None,
            image_edit: None,
            preview: None,
        }
    }

    /// The text edit currently open, if any
    pub fn editing(&self) -> Option<&TextEdit> {
        self.editing.as_ref()
    }

    // ----- text flow -----

    /// Open the text dialog pre-populated with the field's current value
    pub fn begin_edit(&mut self, language: Language, page: Page, field: &str) -> Result<()> {
        let value = self.service.text_field(language, page, field)?;
        self.editing = Some(TextEdit {
            language,
            page,
            field: field.to_string(),
            value,
        });
        Ok(())
    }

    /// Replace the in-dialog value
    pub fn set_value(&mut self, value: &str) {
        if let Some(edit) = self.editing.as_mut() {
            edit.value = value.to_string();
        }
    }

    /// Persist the edited field and broadcast
    pub fn save(&mut self) -> Result<()> {
        let edit = self
            .editing
            .take()
            .ok_or_else(|| AppError::validation("form", "No content edit is open"))?;

        self.service
            .set_text(edit.language, edit.page, &edit.field, &edit.value)?;

        self.notifier.notify(Notification::success(
            "Content Updated",
            "Your changes have been saved successfully.",
        ));
        Ok(())
    }

    /// Abandon the open text edit
    pub fn cancel(&mut self) {
        self.editing = None;
    }

    // ----- image flow -----

    /// Open the image dialog for one page slot
    pub fn open_image(&mut self, page: Page, slot: &str) {
        self.release_preview();
        self.image_edit = Some(ImageSlotEdit {
            page,
            slot: slot.to_string(),
            value: None,
        });
    }

    /// Normalize an uploaded image into the open slot dialog
    pub fn attach_image(&mut self, upload: &ImageUpload) -> Result<()> {
        let edit = self
            .image_edit
            .as_mut()
            .ok_or_else(|| AppError::validation("image", "No image slot is open"))?;

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
        edit.value = Some(normalized.data_url);
        self.preview = Some(normalized.preview);
        Ok(())
    }

    /// Persist the uploaded image into its slot and broadcast
    pub fn save_image(&mut self) -> Result<()> {
        let edit = self
            .image_edit
            .take()
            .ok_or_else(|| AppError::validation("image", "No image slot is open"))?;

        let value = match edit.value {
            Some(value) => value,
            None => {
                // Keep the dialog open until an upload landed.
                let err = AppError::validation("image", "Please upload an image first");
                self.notifier.notify(err.notification());
                self.image_edit = Some(edit);
                return Err(err);
            }
        };

        self.service.set_image(edit.page, &edit.slot, &value)?;
        self.release_preview();

        self.notifier.notify(Notification::success(
            "Image Updated",
            format!("The {} image has been successfully updated.", edit.slot),
        ));
        Ok(())
    }

    /// Abandon the open image dialog, releasing the preview
    pub fn cancel_image(&mut self) {
        self.release_preview();
        self.image_edit = None;
    }

    fn release_preview(&mut self) {
        if let Some(preview) = self.preview.take() {
            preview.release();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::ChangeBus;
    use crate::notify::RecordingNotifier;
    use crate::seed;
    use crate::storage::Store;

    fn create_test_editor() -> (ContentEditor, ContentService, RecordingNotifier) {
        let service = ContentService::new(Store::in_memory(), ChangeBus::new());
        let notifier = RecordingNotifier::new();
        let editor = ContentEditor::new(service.clone(), Arc::new(notifier.clone()));
        (editor, service, notifier)
    }

    #[test]
    fn begin_edit_loads_the_current_value() {
        let (mut editor, _service, _notifier) = create_test_editor();

        editor
            .begin_edit(Language::English, Page::Homepage, "heroTitle")
            .unwrap();

        let edit = editor.editing().unwrap();
        assert_eq!(
            edit.value,
            seed::default_content().english.homepage.hero_title
        );
    }

    #[test]
    fn save_persists_the_new_value() {
        let (mut editor, service, notifier) = create_test_editor();

        editor
            .begin_edit(Language::Swahili, Page::About, "missionTitle")
            .unwrap();
        editor.set_value("Dhamira Mpya");
        editor.save().unwrap();

        assert_eq!(
            service.text().swahili.about.mission_title,
            "Dhamira Mpya"
        );
        assert!(editor.editing().is_none());
        assert_eq!(
            notifier.notifications().last().unwrap().title,
            "Content Updated"
        );
    }

    #[test]
    fn unknown_field_fails_before_a_dialog_opens() {
        let (mut editor, _service, _notifier) = create_test_editor();

        let result = editor.begin_edit(Language::English, Page::Homepage, "noSuchField");
        assert!(matches!(result, Err(AppError::Validation { .. })));
        assert!(editor.editing().is_none());
    }

    #[test]
    fn cancel_discards_the_edit() {
        let (mut editor, service, _notifier) = create_test_editor();

        editor
            .begin_edit(Language::English, Page::Homepage, "heroTitle")
            .unwrap();
        editor.set_value("Discarded");
        editor.cancel();

        assert!(editor.save().is_err());
        assert_eq!(service.text(), seed::default_content());
    }

    #[test]
    fn save_image_without_upload_keeps_the_dialog_open() {
        let (mut editor, service, _notifier) = create_test_editor();

        editor.open_image(Page::Homepage, "hero");
        let result = editor.save_image();

        assert!(matches!(result, Err(AppError::Validation { .. })));
        assert_eq!(service.images(), seed::default_images());

        // Still open: a later attach+save succeeds.
        let upload = test_upload();
        editor.attach_image(&upload).unwrap();
        editor.save_image().unwrap();
        assert!(service
            .images()
            .homepage
            .get("hero")
            .unwrap()
            .starts_with("data:image/jpeg;base64,"));
    }

    fn test_upload() -> ImageUpload {
        use image::{DynamicImage, Rgb, RgbImage};
        use std::io::Cursor;

        let img = RgbImage::from_pixel(64, 48, Rgb([10, 120, 200]));
        let mut bytes = Vec::new();
        DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();

        ImageUpload {
            filename: "hero.png".into(),
            mime_type: "image/png".into(),
            bytes,
        }
    }
}

//! Content service
//!
//! The bilingual page text tree and the page image slots. Text edits
//! address one named field in one language branch; both branches share the
//! same field set. Content and images are persisted under separate keys
//! with no transaction between them.

use crate::bus::ChangeBus;
use crate::config::{CONTENT_KEY, IMAGES_KEY};
use crate::error::{AppError, Result};
use crate::models::{ContentImages, Language, LanguageContent, Page, SiteContent};
use crate::seed;
use crate::storage::Store;

/// Service for managing editable page content
#[derive(Clone)]
pub struct ContentService {
    store: Store,
    bus: ChangeBus,
}

impl ContentService {
    pub fn new(store: Store, bus: ChangeBus) -> Self {
        Self { store, bus }
    }

    /// The full text tree, seeding or healing as needed
    pub fn text(&self) -> SiteContent {
        match self.store.read::<SiteContent>(CONTENT_KEY) {
            Ok(Some(content)) => content,
            Ok(None) => self.reseed_text(),
            Err(err) => {
                tracing::warn!("Content tree unreadable ({}), reseeding", err);
                self.reseed_text()
            }
        }
    }

    fn reseed_text(&self) -> SiteContent {
        let content = seed::default_content();
        if let Err(err) = self.store.write(CONTENT_KEY, &content) {
            tracing::warn!("Failed to persist content seed: {}", err);
        }
        content
    }

    /// The image slot map, seeding or healing as needed
    pub fn images(&self) -> ContentImages {
        match self.store.read::<ContentImages>(IMAGES_KEY) {
            Ok(Some(images)) => images,
            Ok(None) => self.reseed_images(),
            Err(err) => {
                tracing::warn!("Image map unreadable ({}), reseeding", err);
                self.reseed_images()
            }
        }
    }

    fn reseed_images(&self) -> ContentImages {
        let images = seed::default_images();
        if let Err(err) = self.store.write(IMAGES_KEY, &images) {
            tracing::warn!("Failed to persist images seed: {}", err);
        }
        images
    }

    /// Current value of one named text field
    pub fn text_field(&self, language: Language, page: Page, field: &str) -> Result<String> {
        let content = self.text();
        let branch = match language {
            Language::English => &content.english,
            Language::Swahili => &content.swahili,
        };
        field_value(branch, page, field).map(str::to_string)
    }

    /// Overwrite one named text field in one language branch, then broadcast
    pub fn set_text(&self, language: Language, page: Page, field: &str, value: &str) -> Result<()> {
        let mut content = self.text();
        let branch = match language {
            Language::English => &mut content.english,
            Language::Swahili => &mut content.swahili,
        };

        *field_slot(branch, page, field)? = value.to_string();

        self.store.write(CONTENT_KEY, &content)?;
        self.bus.broadcast();

        tracing::info!("Updated content field {:?}/{:?}/{}", language, page, field);
        Ok(())
    }

    /// Overwrite one named image slot, then broadcast
    pub fn set_image(&self, page: Page, slot: &str, value: &str) -> Result<()> {
        let mut images = self.images();
        let map = match page {
            Page::Homepage => &mut images.homepage,
            Page::About => &mut images.about,
        };
        map.insert(slot.to_string(), value.to_string());

        self.store.write(IMAGES_KEY, &images)?;
        self.bus.broadcast();

        tracing::info!("Updated image slot {:?}/{}", page, slot);
        Ok(())
    }
}

fn unknown_field(page: Page, field: &str) -> AppError {
    AppError::validation(
        "field",
        format!("Unknown content field \"{field}\" on the {page:?} page"),
    )
}

fn field_value<'a>(branch: &'a LanguageContent, page: Page, field: &str) -> Result<&'a str> {
    let value = match (page, field) {
        (Page::Homepage, "heroTitle") => &branch.homepage.hero_title,
        (Page::Homepage, "heroDescription") => &branch.homepage.hero_description,
        (Page::Homepage, "welcomeMessage") => &branch.homepage.welcome_message,
        (Page::Homepage, "serviceTimesTitle") => &branch.homepage.service_times_title,
        (Page::About, "churchHistoryTitle") => &branch.about.church_history_title,
        (Page::About, "churchHistoryContent") => &branch.about.church_history_content,
        (Page::About, "visionTitle") => &branch.about.vision_title,
        (Page::About, "visionContent") => &branch.about.vision_content,
        (Page::About, "missionTitle") => &branch.about.mission_title,
        (Page::About, "missionContent") => &branch.about.mission_content,
        _ => return Err(unknown_field(page, field)),
    };
    Ok(value)
}

fn field_slot<'a>(branch: &'a mut LanguageContent, page: Page, field: &str) -> Result<&'a mut String> {
    let slot = match (page, field) {
        (Page::Homepage, "heroTitle") => &mut branch.homepage.hero_title,
        (Page::Homepage, "heroDescription") => &mut branch.homepage.hero_description,
        (Page::Homepage, "welcomeMessage") => &mut branch.homepage.welcome_message,
        (Page::Homepage, "serviceTimesTitle") => &mut branch.homepage.service_times_title,
        (Page::About, "churchHistoryTitle") => &mut branch.about.church_history_title,
        (Page::About, "churchHistoryContent") => &mut branch.about.church_history_content,
        (Page::About, "visionTitle") => &mut branch.about.vision_title,
        (Page::About, "visionContent") => &mut branch.about.vision_content,
        (Page::About, "missionTitle") => &mut branch.about.mission_title,
        (Page::About, "missionContent") => &mut branch.about.mission_content,
        _ => return Err(unknown_field(page, field)),
    };
    Ok(slot)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> ContentService {
        ContentService::new(Store::in_memory(), ChangeBus::new())
    }

    #[test]
    fn first_read_seeds_the_default_tree() {
        let service = create_test_service();
        assert_eq!(service.text(), seed::default_content());
        assert_eq!(service.images(), seed::default_images());
    }

    #[test]
    fn set_text_updates_only_the_addressed_branch() {
        let service = create_test_service();

        service
            .set_text(Language::Swahili, Page::Homepage, "heroTitle", "Karibu sana")
            .unwrap();

        let content = service.text();
        assert_eq!(content.swahili.homepage.hero_title, "Karibu sana");
        // The English branch keeps its seeded value.
        assert_eq!(
            content.english.homepage.hero_title,
            seed::default_content().english.homepage.hero_title
        );
    }

    #[test]
    fn unknown_field_is_a_validation_error() {
        let service = create_test_service();

        let result = service.set_text(Language::English, Page::About, "heroTitle", "x");
        assert!(matches!(result, Err(AppError::Validation { .. })));

        // Nothing was persisted.
        assert_eq!(service.text(), seed::default_content());
    }

    #[test]
    fn text_field_reads_back_what_was_set() {
        let service = create_test_service();

        service
            .set_text(Language::English, Page::About, "visionContent", "New vision")
            .unwrap();

        let value = service
            .text_field(Language::English, Page::About, "visionContent")
            .unwrap();
        assert_eq!(value, "New vision");
    }

    #[test]
    fn set_image_overwrites_the_slot() {
        let service = create_test_service();

        service
            .set_image(Page::Homepage, "hero", "data:image/jpeg;base64,AAAA")
            .unwrap();

        let images = service.images();
        assert_eq!(
            images.homepage.get("hero").unwrap(),
            "data:image/jpeg;base64,AAAA"
        );
        // Other slots are untouched.
        assert!(images.about.contains_key("history"));
    }

    #[test]
    fn content_edit_broadcasts() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        let bus = ChangeBus::new();
        let service = ContentService::new(Store::in_memory(), bus.clone());

        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();
        let _sub = bus.subscribe(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        service
            .set_text(Language::English, Page::Homepage, "heroTitle", "Hi")
            .unwrap();
        service.set_image(Page::About, "history", "url").unwrap();

        assert_eq!(fired.load(Ordering::SeqCst), 2);
    }
}

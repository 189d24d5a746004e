//! Static interface translations
//!
//! Lookup for fixed interface strings (navigation, buttons, section
//! headers). Editable page text lives in the content tree, not here.
//! Unknown keys echo back so a missing entry degrades to the key name
//! instead of breaking the page.

use crate::models::Language;

/// key, English, Swahili
const TRANSLATIONS: &[(&str, &str, &str)] = &[
    ("home", "Home", "Nyumbani"),
    ("about", "About Us", "Kuhusu Sisi"),
    ("events", "Events", "Matukio"),
    ("contact", "Contact", "Wasiliana Nasi"),
    ("welcome", "Welcome to", "Karibu"),
    ("joinUs", "Join Us This Sunday", "Jiunge Nasi Jumapili Hii"),
    ("learnMore", "Learn More", "Jifunze Zaidi"),
    ("serviceTimes", "Service Times", "Nyakati za Ibada"),
    ("sundayService", "Sunday Service", "Ibada ya Jumapili"),
    ("upcomingEvents", "Upcoming Events", "Matukio Yajayo"),
    ("ourHistory", "Our History", "Historia Yetu"),
    ("ourVision", "Our Vision", "Maono Yetu"),
    ("ourMission", "Our Mission", "Misheni Yetu"),
    ("quickLinks", "Quick Links", "Viungo vya Haraka"),
    ("followUs", "Follow Us", "Tufuate"),
    ("copyright", "All Rights Reserved", "Haki Zote Zimehifadhiwa"),
];

/// Dictionary lookup bound to one interface language
#[derive(Debug, Clone, Copy)]
pub struct Translator {
    language: Language,
}

impl Translator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Translate a fixed interface string; unknown keys echo back
    pub fn t(&self, key: &str) -> String {
        match TRANSLATIONS.iter().find(|(k, _, _)| *k == key) {
            Some((_, english, swahili)) => match self.language {
                Language::English => (*english).to_string(),
                Language::Swahili => (*swahili).to_string(),
            },
            None => {
                tracing::warn!("Unknown translation key: {}", key);
                key.to_string()
            }
        }
    }
}

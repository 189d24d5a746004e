//! Entity and content models
//!
//! Rust structs matching the JSON shapes persisted under each storage key.
//! Field names serialize in camelCase where the stored data uses it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A church event shown on the public Events and Home pages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    /// Free-form display text (e.g. "May 4, 2025"); never parsed as a date
    pub date: String,
    pub description: String,
    /// Encoded image data URL, or a plain URL for the seeded defaults
    pub image: String,
}

/// A leadership profile shown on the About and Home pages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leader {
    pub id: String,
    pub name: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub image: String,
}

/// Admin account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    #[serde(rename = "admin")]
    Admin,
    #[serde(rename = "super-admin")]
    SuperAdmin,
}

/// Admin account as persisted.
///
/// Passwords are stored in plaintext. This mirrors the site being
/// reimplemented and is a known limitation, not something to harden here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub password: String,
}

impl User {
    /// The user as mirrored into the session key, password stripped
    pub fn session(&self) -> SessionUser {
        SessionUser {
            id: self.id.clone(),
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role,
        }
    }
}

/// The authenticated user, persisted so a reload preserves the login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: UserRole,
}

/// Language branch of the content tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Swahili,
}

/// Page branch addressed by content edits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Homepage,
    About,
}

/// Home page text fields for one language
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomepageContent {
    pub hero_title: String,
    pub hero_description: String,
    pub welcome_message: String,
    pub service_times_title: String,
}

/// About page text fields for one language
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    pub church_history_title: String,
    pub church_history_content: String,
    pub vision_title: String,
    pub vision_content: String,
    pub mission_title: String,
    pub mission_content: String,
}

/// All text for one language branch.
///
/// Both language branches share this type, which keeps the English and
/// Swahili structures parallel by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageContent {
    pub homepage: HomepageContent,
    pub about: AboutContent,
}

/// Full bilingual text tree persisted under the content key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub english: LanguageContent,
    pub swahili: LanguageContent,
}

/// Named image slots per page; values are data URLs or plain URLs
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContentImages {
    #[serde(default)]
    pub homepage: BTreeMap<String, String>,
    #[serde(default)]
    pub about: BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_role_serializes_with_hyphenated_names() {
        let json = serde_json::to_string(&UserRole::SuperAdmin).unwrap();
        assert_eq!(json, "\"super-admin\"");

        let role: UserRole = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, UserRole::Admin);
    }

    #[test]
    fn homepage_content_uses_camel_case_keys() {
        let content = HomepageContent {
            hero_title: "Welcome".into(),
            hero_description: "Desc".into(),
            welcome_message: "Hello".into(),
            service_times_title: "Times".into(),
        };

        let value = serde_json::to_value(&content).unwrap();
        assert!(value.get("heroTitle").is_some());
        assert!(value.get("serviceTimesTitle").is_some());
        assert!(value.get("hero_title").is_none());
    }

    #[test]
    fn session_strips_password() {
        let user = User {
            id: "1".into(),
            email: "a@b.c".into(),
            name: "A".into(),
            role: UserRole::Admin,
            password: "secret".into(),
        };

        let session = user.session();
        let value = serde_json::to_value(&session).unwrap();
        assert!(value.get("password").is_none());
        assert_eq!(value.get("email").unwrap(), "a@b.c");
    }

    #[test]
    fn leader_bio_is_optional_when_absent() {
        let json = r#"{"id":"1","name":"N","role":"Deacon","image":"x"}"#;
        let leader: Leader = serde_json::from_str(json).unwrap();
        assert!(leader.bio.is_none());
    }
}

//! Application configuration constants
//!
//! Central location for resource limits, storage keys and fallback image
//! URLs used throughout the crate.

// ===== Image Upload Limits =====

/// Maximum accepted size for an uploaded image file (10 MiB).
/// Larger files are rejected before any decoding happens.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Maximum stored image width in pixels
pub const MAX_IMAGE_WIDTH: u32 = 800;

/// Maximum stored image height in pixels
pub const MAX_IMAGE_HEIGHT: u32 = 600;

/// Target size for the encoded image string, in kilobytes
pub const TARGET_ENCODED_KB: usize = 200;

/// Base64 expands binary data by roughly this factor; the size target is
/// checked against the encoded string, not the raw JPEG bytes.
pub const BASE64_OVERHEAD: f64 = 1.37;

/// JPEG quality the compression search starts at (percent)
pub const JPEG_QUALITY_START: u8 = 90;

/// Quality decrement per compression iteration (percent)
pub const JPEG_QUALITY_STEP: u8 = 10;

/// Quality floor. Once reached the encoding is accepted whatever its size.
pub const JPEG_QUALITY_FLOOR: u8 = 10;

// ===== Storage Keys =====

/// Events collection
pub const EVENTS_KEY: &str = "krc_events";
/// Leaders collection
pub const LEADERS_KEY: &str = "krc_leaders";
/// Admin accounts collection (includes passwords)
pub const USERS_KEY: &str = "krc_users";
/// Currently authenticated user (password stripped); absent when logged out
pub const SESSION_KEY: &str = "krc_user";
/// Bilingual page text tree
pub const CONTENT_KEY: &str = "krc_content";
/// Page image slot map
pub const IMAGES_KEY: &str = "krc_images";

// ===== Fallback Images =====

/// Placeholder stored when a new event is saved without an uploaded image
pub const DEFAULT_EVENT_IMAGE: &str =
    "https://images.unsplash.com/photo-1438232992991-995b7058bbb3?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80";

/// Placeholder stored when a new leader is saved without an uploaded image
pub const DEFAULT_LEADER_IMAGE: &str =
    "https://images.unsplash.com/photo-1568602471122-7832951cc4c5?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80";

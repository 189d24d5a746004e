//! Collection services
//!
//! High-level operations over the persisted collections:
//! - `events` / `leaders`: entity collections with upsert and delete
//! - `content`: the bilingual text tree and the page image slots
//! - `auth`: login, session and user management
//!
//! Every mutation is a whole-collection read-modify-write followed
//! synchronously by a change-bus broadcast, so a notified listener always
//! observes the post-write state.

pub mod auth;
pub mod content;
pub mod events;
pub mod leaders;

pub use auth::AuthService;
pub use content::ContentService;
pub use events::EventsService;
pub use leaders::LeadersService;

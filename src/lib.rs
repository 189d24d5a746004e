//! Content management core for a bilingual church website.
//!
//! Everything lives on the client side of the original site: entities
//! (events, leaders, users) and page content persist as JSON collections
//! in a key/value store, a payload-free change bus tells mounted views to
//! re-read, and uploaded images are normalized to bounded JPEG data URLs
//! before storage.

pub mod app;
pub mod bus;
pub mod config;
pub mod editors;
pub mod error;
pub mod models;
pub mod notify;
pub mod seed;
pub mod services;
pub mod storage;
pub mod translate;
pub mod upload;
pub mod views;

pub use app::AppState;
pub use error::{AppError, Result};

//! Bilimbot - Telegram bot for looking up educational programs in Kazakhstan
//!
//! The user picks an education level (bachelor/master/doctorate), then a
//! search method: by university (a numbered menu of deduplicated, sorted
//! university names) or by specialty (case-insensitive substring search
//! over all program-title fields in both languages).
//!
//! # Module Structure
//!
//! - `core`: configuration, errors, logging
//! - `catalog`: the immutable program dataset and its data model
//! - `search`: the two filter modes over the catalog
//! - `dialog`: conversation state machine and per-chat session store
//! - `render`: user-facing prompt and result formatting
//! - `telegram`: teloxide integration and the dispatcher schema

pub mod catalog;
pub mod cli;
pub mod core;
pub mod dialog;
pub mod render;
pub mod search;
pub mod telegram;

// Re-export commonly used types for convenience
pub use catalog::{EducationLevel, ProgramCatalog, ProgramRecord};
pub use crate::core::{config, AppError, AppResult};
pub use dialog::{DialogController, DialogState, Event, SearchMethod};
pub use render::Reply;

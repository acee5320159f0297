//! # epik-core
//!
//! Data model shared by every epik crate:
//! - [`Story`] and [`Task`] value objects, validated on construction
//! - JSON loading for stories (`Story::from_json_file`)
//! - [`StoryError`], the error kinds raised while building a story

pub mod entities;
pub mod errors;

pub use entities::{Story, Task};
pub use errors::StoryError;

//! Shared helpers for rendering generated project sources.

pub mod handlebars;
pub mod source_text;

pub use handlebars::{get_handlebars, write_string_to_file};

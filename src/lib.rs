//! Rubberduck library.
//!
//! One scratch note per day, opened straight in your editor.

pub mod config;
pub mod console;
pub mod editor;
pub mod error;
pub mod scratch;

pub use error::Error;

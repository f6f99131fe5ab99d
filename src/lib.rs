// ABOUTME: Library module for the deckgen program.
// ABOUTME: Contains core functionality for rendering slide decks to ODP files.

// Reexport modules
pub mod content;
pub mod deck;
pub mod errors;
pub mod odp;
pub mod theme;
pub mod utils;

// Reexport common types and functions
pub use content::{course_slides, COMBINED_DECK_NAME};
pub use deck::{group_by_module, Slide, SlideKind};
pub use errors::{DeckError, Result};
pub use odp::render_deck;

#[cfg(test)]
mod tests;

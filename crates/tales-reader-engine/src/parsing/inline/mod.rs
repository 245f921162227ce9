//! # Inline Parsing
//!
//! Cursor-based resolution of `_underscore_` emphasis inside a reflowed
//! paragraph.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum (Text, Emphasis)
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with position tracking
//! - **`parser`**: `parse_inline()` main entry point
//!
//! Nodes carry byte spans into the paragraph text instead of markup, so the
//! prose itself is never reinterpreted: `<`, `&` and friends stay literal
//! characters and only the underscore pairs carry structure.

pub mod cursor;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::InlineNode;

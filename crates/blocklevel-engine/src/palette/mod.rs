//! # Palette Filtering
//!
//! Rewrites one category's palette description so it only offers the blocks
//! a tier may use.
//!
//! ## Pipeline
//!
//! 1. **Lexing** (`lexer`): Logos splits the text into start tags, end tags
//!    and text runs.
//! 2. **Scanning** (`scan`): the first start tag becomes the wrapper, and the
//!    body is cut into a flat list of top-level elements (block, separator,
//!    other). Nested content stays verbatim inside its parent.
//! 3. **Filtering** (`filter`): blocks outside the tier's cumulative allowed
//!    set are dropped, separators are tidied and the wrapper is reassembled.
//!
//! ## Key Invariants
//!
//! - The filter never fails. Malformed markup passes through unchanged; a
//!   category left with no blocks renders as its bare wrapper.
//! - Only the outermost `type` of a top-level block decides inclusion.
//! - Surviving blocks keep their nested content byte for byte.
//! - Filtered output never starts with a separator, never repeats one, and
//!   always ends with exactly one.

pub mod filter;
pub mod lexer;
mod normalize;
pub mod scan;

pub use filter::PaletteFilter;
pub use scan::{Element, ElementKind, Palette, ScanError, scan};

/// Separator appended when filtered content does not already end with one.
pub const SEPARATOR: &str = r#"<sep gap="36"/>"#;

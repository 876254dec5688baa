//! chpl_core: Core utilities shared by the Chapel uAST crates.
//!
//! Provides the node arena, string interning for names, and source ranges.

pub mod arena;
pub mod intern;
pub mod text;

// Re-export commonly used types
pub use arena::CompilerArena;
pub use intern::{InternedString, StringInterner};
pub use text::TextRange;

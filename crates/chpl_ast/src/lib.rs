//! chpl_ast: Chapel uAST definitions.
//!
//! Defines the node kinds, the `AstNode` sum type and its per-kind structs,
//! the enumerated tags nodes carry, and the primitive/pragma name tables.
//! Trees are built elsewhere (a parser, or `chpl_nodebuilder`) and are
//! immutable once built.

pub mod ast_tag;
pub mod generated;
pub mod node;
pub mod prim_tags;
pub mod types;

// Re-export key types
pub use ast_tag::AstTag;
pub use node::*;
pub use prim_tags::{PragmaTag, PrimTag};
pub use types::*;

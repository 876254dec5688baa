//! Printer errors.
//!
//! Both variants mean the tree handed to the printer broke an invariant the
//! tree's producer is responsible for. Nothing inside the printer recovers
//! from them.

use chpl_ast::AstTag;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrintError {
    /// A node of the wrong kind sits in a position the grammar restricts.
    #[error("unhandled uAST node: expected {expected}, found {found}")]
    UnhandledVariant {
        expected: &'static str,
        found: AstTag,
    },

    /// A tag still holds its default/unset member where a keyword is needed.
    #[error("unresolved {family} tag reached a position that requires a keyword")]
    UnresolvedSentinel { family: &'static str },
}

pub type PrintResult<T = ()> = Result<T, PrintError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = PrintError::UnhandledVariant {
            expected: "loop",
            found: AstTag::Return,
        };
        assert_eq!(err.to_string(), "unhandled uAST node: expected loop, found Return");

        let err = PrintError::UnresolvedSentinel { family: "intent" };
        assert_eq!(
            err.to_string(),
            "unresolved intent tag reached a position that requires a keyword"
        );
    }
}

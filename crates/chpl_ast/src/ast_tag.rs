//! AstTag enum - the kinds of node in the Chapel uAST.

use std::fmt;

/// The kind of a uAST node. One tag per `AstNode` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum AstTag {
    // ========================================================================
    // Expressions
    // ========================================================================
    Array,
    As,
    BoolLiteral,
    BytesLiteral,
    CStringLiteral,
    Domain,
    Dot,
    ErroneousExpression,
    FnCall,
    Identifier,
    ImagLiteral,
    IntLiteral,
    Let,
    New,
    OpCall,
    PrimCall,
    Range,
    RealLiteral,
    Reduce,
    Scan,
    StringLiteral,
    Tuple,
    TypeQuery,
    UintLiteral,
    Zip,

    // ========================================================================
    // Statements
    // ========================================================================
    Begin,
    Block,
    BracketLoop,
    Break,
    Catch,
    Cobegin,
    Coforall,
    Comment,
    Conditional,
    Continue,
    Defer,
    Delete,
    DoWhile,
    EmptyStmt,
    ExternBlock,
    For,
    Forall,
    Foreach,
    Import,
    Include,
    Label,
    Local,
    Manage,
    On,
    Require,
    Return,
    Select,
    Serial,
    Sync,
    Throw,
    Try,
    Use,
    When,
    While,
    Yield,

    // ========================================================================
    // Declarations and their parts
    // ========================================================================
    Class,
    Enum,
    EnumElement,
    Formal,
    ForwardingDecl,
    Function,
    Module,
    MultiDecl,
    Record,
    TaskVar,
    TupleDecl,
    TypeDecl,
    Union,
    VarArgFormal,
    Variable,
    VisibilityClause,
    WithClause,
}

impl AstTag {
    /// The node kind's name as it appears in uAST dumps.
    pub fn name(self) -> &'static str {
        match self {
            AstTag::Array => "Array",
            AstTag::As => "As",
            AstTag::BoolLiteral => "BoolLiteral",
            AstTag::BytesLiteral => "BytesLiteral",
            AstTag::CStringLiteral => "CStringLiteral",
            AstTag::Domain => "Domain",
            AstTag::Dot => "Dot",
            AstTag::ErroneousExpression => "ErroneousExpression",
            AstTag::FnCall => "FnCall",
            AstTag::Identifier => "Identifier",
            AstTag::ImagLiteral => "ImagLiteral",
            AstTag::IntLiteral => "IntLiteral",
            AstTag::Let => "Let",
            AstTag::New => "New",
            AstTag::OpCall => "OpCall",
            AstTag::PrimCall => "PrimCall",
            AstTag::Range => "Range",
            AstTag::RealLiteral => "RealLiteral",
            AstTag::Reduce => "Reduce",
            AstTag::Scan => "Scan",
            AstTag::StringLiteral => "StringLiteral",
            AstTag::Tuple => "Tuple",
            AstTag::TypeQuery => "TypeQuery",
            AstTag::UintLiteral => "UintLiteral",
            AstTag::Zip => "Zip",
            AstTag::Begin => "Begin",
            AstTag::Block => "Block",
            AstTag::BracketLoop => "BracketLoop",
            AstTag::Break => "Break",
            AstTag::Catch => "Catch",
            AstTag::Cobegin => "Cobegin",
            AstTag::Coforall => "Coforall",
            AstTag::Comment => "Comment",
            AstTag::Conditional => "Conditional",
            AstTag::Continue => "Continue",
            AstTag::Defer => "Defer",
            AstTag::Delete => "Delete",
            AstTag::DoWhile => "DoWhile",
            AstTag::EmptyStmt => "EmptyStmt",
            AstTag::ExternBlock => "ExternBlock",
            AstTag::For => "For",
            AstTag::Forall => "Forall",
            AstTag::Foreach => "Foreach",
            AstTag::Import => "Import",
            AstTag::Include => "Include",
            AstTag::Label => "Label",
            AstTag::Local => "Local",
            AstTag::Manage => "Manage",
            AstTag::On => "On",
            AstTag::Require => "Require",
            AstTag::Return => "Return",
            AstTag::Select => "Select",
            AstTag::Serial => "Serial",
            AstTag::Sync => "Sync",
            AstTag::Throw => "Throw",
            AstTag::Try => "Try",
            AstTag::Use => "Use",
            AstTag::When => "When",
            AstTag::While => "While",
            AstTag::Yield => "Yield",
            AstTag::Class => "Class",
            AstTag::Enum => "Enum",
            AstTag::EnumElement => "EnumElement",
            AstTag::Formal => "Formal",
            AstTag::ForwardingDecl => "ForwardingDecl",
            AstTag::Function => "Function",
            AstTag::Module => "Module",
            AstTag::MultiDecl => "MultiDecl",
            AstTag::Record => "Record",
            AstTag::TaskVar => "TaskVar",
            AstTag::TupleDecl => "TupleDecl",
            AstTag::TypeDecl => "TypeDecl",
            AstTag::Union => "Union",
            AstTag::VarArgFormal => "VarArgFormal",
            AstTag::Variable => "Variable",
            AstTag::VisibilityClause => "VisibilityClause",
            AstTag::WithClause => "WithClause",
        }
    }

    /// Whether nodes of this kind are loops that can carry a `label`.
    pub fn is_loop(self) -> bool {
        matches!(
            self,
            AstTag::For
                | AstTag::Forall
                | AstTag::Foreach
                | AstTag::Coforall
                | AstTag::BracketLoop
                | AstTag::While
                | AstTag::DoWhile
        )
    }
}

impl fmt::Display for AstTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_names() {
        assert_eq!(AstTag::FnCall.name(), "FnCall");
        assert_eq!(AstTag::CStringLiteral.to_string(), "CStringLiteral");
        assert_eq!(AstTag::VisibilityClause.name(), "VisibilityClause");
    }

    #[test]
    fn test_tag_categories() {
        assert!(AstTag::Coforall.is_loop());
        assert!(!AstTag::Conditional.is_loop());
        assert!(AstTag::DoWhile.is_loop());
        assert!(AstTag::BracketLoop.is_loop());
    }
}

//! Enumerated tags and flag types carried by uAST nodes.
//!
//! Most tag families have a `Default` member meaning "not written in the
//! source / not resolved". Where the grammar needs a concrete keyword the
//! printer refuses to turn that member into text.

bitflags::bitflags! {
    /// Boolean properties of a `Function` declaration.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FunctionFlags: u8 {
        const NONE           = 0;
        const OVERRIDE       = 1 << 0;
        const INLINE         = 1 << 1;
        const THROWS         = 1 << 2;
        /// Declared without a formal list, e.g. `proc R.size`.
        const PARENLESS      = 1 << 3;
        /// A method declared inside its type's body (no receiver prefix).
        const PRIMARY_METHOD = 1 << 4;
    }
}

/// Identifier of a node, unique within one tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    pub const INVALID: NodeId = NodeId(u32::MAX);

    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

/// Linkage of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Linkage {
    #[default]
    Default,
    Extern,
    Export,
}

/// Visibility of a declaration or of a `use`/`import`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    #[default]
    Default,
    Private,
    Public,
}

/// Passing mode or storage kind.
///
/// Shared by formals, variables, task variables, tuple declarations and
/// function return intents. Variables of `Default` kind are index variables
/// (loop indices, catch errors) that are written without a keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Intent {
    #[default]
    Default,
    Const,
    Var,
    ConstVar,
    ConstRef,
    Ref,
    In,
    ConstIn,
    Out,
    Inout,
    Param,
    Type,
}

/// Kind of a `module` declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModuleKind {
    #[default]
    Default,
    /// Created for a file with no explicit module; written as a plain module.
    Implicit,
    Prototype,
}

/// Memory management strategy of a `new` expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Management {
    #[default]
    Default,
    Borrowed,
    Owned,
    Shared,
    Unmanaged,
}

/// How the limitations of a visibility clause were written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LimitationKind {
    /// `use M;`, `use M as N;`, or `import M.x;` (single dotted limitation).
    #[default]
    None,
    /// `use M only a, b;`
    Only,
    /// `use M except a;`
    Except,
    /// `import M.{a, b};`
    Braces,
}

/// Keyword introducing a function-like declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionKind {
    Proc,
    Iter,
    Operator,
    Lambda,
}

/// How a statement list was delimited in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlockStyle {
    /// `{ ... }`
    #[default]
    Explicit,
    /// No braces; introduced by `do`/`then` or a single statement.
    Implicit,
    /// Both the optional keyword and braces, e.g. `for x in y do { ... }`.
    UnnecessaryKeywordAndBlock,
}

/// Upper bound form of a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RangeOpKind {
    /// `lo..hi`
    #[default]
    Default,
    /// `lo..<hi`
    OpenHigh,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_sentinels() {
        assert_eq!(Linkage::default(), Linkage::Default);
        assert_eq!(Visibility::default(), Visibility::Default);
        assert_eq!(Intent::default(), Intent::Default);
        assert_eq!(ModuleKind::default(), ModuleKind::Default);
        assert_eq!(Management::default(), Management::Default);
        assert_eq!(LimitationKind::default(), LimitationKind::None);
        assert_eq!(BlockStyle::default(), BlockStyle::Explicit);
    }

    #[test]
    fn test_function_flags() {
        let flags = FunctionFlags::OVERRIDE | FunctionFlags::THROWS;
        assert!(flags.contains(FunctionFlags::THROWS));
        assert!(!flags.contains(FunctionFlags::INLINE));
        assert!(FunctionFlags::NONE.is_empty());
    }

    #[test]
    fn test_node_id() {
        assert!(NodeId(0).is_valid());
        assert!(!NodeId::INVALID.is_valid());
    }
}

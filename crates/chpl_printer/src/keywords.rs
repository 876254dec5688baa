//! Tag to keyword tables.
//!
//! Callers skip a decoration whose tag is at its default before asking for
//! a keyword. A lookup that still receives the default member is an
//! unresolved tree and fails.

use crate::error::{PrintError, PrintResult};
use chpl_ast::types::*;

/// Callee names that are really type-constructor keywords: `owned C` is
/// stored as a call of `owned` but written without parentheses.
pub const RESERVED_CALLEES: [&str; 6] = ["borrowed", "owned", "unmanaged", "shared", "sync", "single"];

pub fn is_reserved_callee(name: &str) -> bool {
    RESERVED_CALLEES.contains(&name)
}

fn unresolved(family: &'static str) -> PrintError {
    tracing::debug!(family, "keyword requested for an unresolved tag");
    PrintError::UnresolvedSentinel { family }
}

pub fn linkage_keyword(kind: Linkage) -> PrintResult<&'static str> {
    match kind {
        Linkage::Extern => Ok("extern"),
        Linkage::Export => Ok("export"),
        Linkage::Default => Err(unresolved("linkage")),
    }
}

pub fn visibility_keyword(kind: Visibility) -> PrintResult<&'static str> {
    match kind {
        Visibility::Private => Ok("private"),
        Visibility::Public => Ok("public"),
        Visibility::Default => Err(unresolved("visibility")),
    }
}

pub fn function_kind_keyword(kind: FunctionKind) -> &'static str {
    match kind {
        FunctionKind::Proc => "proc",
        FunctionKind::Iter => "iter",
        FunctionKind::Operator => "operator",
        FunctionKind::Lambda => "lambda",
    }
}

pub fn intent_keyword(kind: Intent) -> PrintResult<&'static str> {
    match kind {
        Intent::Const => Ok("const"),
        Intent::Var => Ok("var"),
        Intent::ConstVar => Ok("const var"),
        Intent::ConstRef => Ok("const ref"),
        Intent::Ref => Ok("ref"),
        Intent::In => Ok("in"),
        Intent::ConstIn => Ok("const in"),
        Intent::Out => Ok("out"),
        Intent::Inout => Ok("inout"),
        Intent::Param => Ok("param"),
        Intent::Type => Ok("type"),
        Intent::Default => Err(unresolved("intent")),
    }
}

/// `None` for implicit modules, which are written as plain `module`.
pub fn module_kind_keyword(kind: ModuleKind) -> PrintResult<Option<&'static str>> {
    match kind {
        ModuleKind::Implicit => Ok(None),
        ModuleKind::Prototype => Ok(Some("prototype")),
        ModuleKind::Default => Err(unresolved("module kind")),
    }
}

pub fn management_keyword(kind: Management) -> PrintResult<&'static str> {
    match kind {
        Management::Borrowed => Ok("borrowed"),
        Management::Owned => Ok("owned"),
        Management::Shared => Ok("shared"),
        Management::Unmanaged => Ok("unmanaged"),
        Management::Default => Err(unresolved("management")),
    }
}

/// Only `only` and `except` are spelled as words; brace limitations are
/// punctuation and `None` has no keyword.
pub fn limitation_keyword(kind: LimitationKind) -> PrintResult<&'static str> {
    match kind {
        LimitationKind::Only => Ok("only"),
        LimitationKind::Except => Ok("except"),
        LimitationKind::Braces | LimitationKind::None => Err(unresolved("limitation kind")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_keywords() {
        assert_eq!(intent_keyword(Intent::ConstRef), Ok("const ref"));
        assert_eq!(intent_keyword(Intent::ConstIn), Ok("const in"));
        assert_eq!(intent_keyword(Intent::Type), Ok("type"));
        assert_eq!(
            intent_keyword(Intent::Default),
            Err(PrintError::UnresolvedSentinel { family: "intent" })
        );
    }

    #[test]
    fn test_sentinels_rejected() {
        assert!(linkage_keyword(Linkage::Default).is_err());
        assert!(visibility_keyword(Visibility::Default).is_err());
        assert!(module_kind_keyword(ModuleKind::Default).is_err());
        assert!(management_keyword(Management::Default).is_err());
        assert!(limitation_keyword(LimitationKind::None).is_err());
        assert!(limitation_keyword(LimitationKind::Braces).is_err());
    }

    #[test]
    fn test_concrete_keywords() {
        assert_eq!(linkage_keyword(Linkage::Export), Ok("export"));
        assert_eq!(visibility_keyword(Visibility::Private), Ok("private"));
        assert_eq!(function_kind_keyword(FunctionKind::Iter), "iter");
        assert_eq!(module_kind_keyword(ModuleKind::Prototype), Ok(Some("prototype")));
        assert_eq!(module_kind_keyword(ModuleKind::Implicit), Ok(None));
        assert_eq!(management_keyword(Management::Unmanaged), Ok("unmanaged"));
        assert_eq!(limitation_keyword(LimitationKind::Except), Ok("except"));
    }

    #[test]
    fn test_reserved_callees() {
        assert!(is_reserved_callee("owned"));
        assert!(is_reserved_callee("single"));
        assert!(!is_reserved_callee("new"));
        assert!(!is_reserved_callee("ownedThing"));
    }
}

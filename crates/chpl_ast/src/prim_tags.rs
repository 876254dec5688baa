//! Primitive and pragma tags together with their source spellings.
//!
//! `__primitive` calls and `pragma` attributes are stored as tags; the
//! spelling used in source code is recovered through `name()`.

/// A compiler primitive invoked through `__primitive("name", ...)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimTag {
    Noop,
    Move,
    Init,
    InitField,
    InitVar,
    InitVarSplitDecl,
    Assign,
    Add,
    Subtract,
    Mult,
    Divide,
    Equal,
    NotEqual,
    LessThan,
    GreaterThan,
    LogicalAnd,
    LogicalOr,
    Return,
    Yield,
    Deref,
    AddrOf,
    GetMember,
    GetMemberValue,
    SetMember,
    TypeOf,
    StaticTypeOf,
    IsSubtype,
    CallDestructor,
    NumFields,
    FieldNumToName,
    GetRealPart,
    GetImagPart,
    StringLengthBytes,
    ArrayGet,
    ArraySet,
    CommGet,
    CommPut,
    Error,
    Warning,
    GpuKernelLaunch,
}

impl PrimTag {
    /// The string spelling of this primitive.
    pub fn name(self) -> &'static str {
        match self {
            PrimTag::Noop => "noop",
            PrimTag::Move => "move",
            PrimTag::Init => "init",
            PrimTag::InitField => "init field",
            PrimTag::InitVar => "init var",
            PrimTag::InitVarSplitDecl => "init var split decl",
            PrimTag::Assign => "=",
            PrimTag::Add => "+",
            PrimTag::Subtract => "-",
            PrimTag::Mult => "*",
            PrimTag::Divide => "/",
            PrimTag::Equal => "==",
            PrimTag::NotEqual => "!=",
            PrimTag::LessThan => "<",
            PrimTag::GreaterThan => ">",
            PrimTag::LogicalAnd => "&&",
            PrimTag::LogicalOr => "||",
            PrimTag::Return => "return",
            PrimTag::Yield => "yield",
            PrimTag::Deref => "deref",
            PrimTag::AddrOf => "addr of",
            PrimTag::GetMember => "get member",
            PrimTag::GetMemberValue => "get member value",
            PrimTag::SetMember => "set member",
            PrimTag::TypeOf => "typeof",
            PrimTag::StaticTypeOf => "static typeof",
            PrimTag::IsSubtype => "is_subtype",
            PrimTag::CallDestructor => "call destructor",
            PrimTag::NumFields => "num fields",
            PrimTag::FieldNumToName => "field num to name",
            PrimTag::GetRealPart => "complex_get_real",
            PrimTag::GetImagPart => "complex_get_imag",
            PrimTag::StringLengthBytes => "string_length_bytes",
            PrimTag::ArrayGet => "array_get",
            PrimTag::ArraySet => "array_set",
            PrimTag::CommGet => "chpl_comm_get",
            PrimTag::CommPut => "chpl_comm_put",
            PrimTag::Error => "error",
            PrimTag::Warning => "warning",
            PrimTag::GpuKernelLaunch => "gpu kernel launch",
        }
    }
}

/// A `pragma "..."` attribute attached to a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PragmaTag {
    NoDoc,
    NoInit,
    NoAutoDestroy,
    NoDefaultFunctions,
    NoCopyReturn,
    AlwaysRvf,
    DoNotRvf,
    ExportInit,
    FnSynchronizationFree,
    FnReturnsIteratorRecord,
    Unsafe,
    LocalePrivate,
    DataClass,
    LastResort,
    IgnoreNoinit,
    CodegenForCpuAndGpu,
    PlainOldData,
}

impl PragmaTag {
    /// The string spelling of this pragma.
    pub fn name(self) -> &'static str {
        match self {
            PragmaTag::NoDoc => "no doc",
            PragmaTag::NoInit => "no init",
            PragmaTag::NoAutoDestroy => "no auto destroy",
            PragmaTag::NoDefaultFunctions => "no default functions",
            PragmaTag::NoCopyReturn => "no copy return",
            PragmaTag::AlwaysRvf => "always RVF",
            PragmaTag::DoNotRvf => "do not RVF",
            PragmaTag::ExportInit => "export init",
            PragmaTag::FnSynchronizationFree => "fn synchronization free",
            PragmaTag::FnReturnsIteratorRecord => "fn returns iterator",
            PragmaTag::Unsafe => "unsafe",
            PragmaTag::LocalePrivate => "locale private",
            PragmaTag::DataClass => "data class",
            PragmaTag::LastResort => "last resort",
            PragmaTag::IgnoreNoinit => "ignore noinit",
            PragmaTag::CodegenForCpuAndGpu => "codegen for CPU and GPU",
            PragmaTag::PlainOldData => "plain old data",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prim_names() {
        assert_eq!(PrimTag::Move.name(), "move");
        assert_eq!(PrimTag::AddrOf.name(), "addr of");
        assert_eq!(PrimTag::Assign.name(), "=");
    }

    #[test]
    fn test_pragma_names() {
        assert_eq!(PragmaTag::NoDoc.name(), "no doc");
        assert_eq!(PragmaTag::CodegenForCpuAndGpu.name(), "codegen for CPU and GPU");
    }
}

//! uAST node definitions.
//!
//! Every node kind has its own struct, and `AstNode` is the closed sum of
//! all of them. Children are arena-allocated references; a child whose kind
//! is fixed by the grammar is stored with its concrete type (for example the
//! `when` arms of a `select`), everything else as an `AstNode`.

use crate::prim_tags::{PragmaTag, PrimTag};
use crate::types::*;
use chpl_core::intern::InternedString;
use chpl_core::text::TextRange;

// ============================================================================
// Core Node Wrapper
// ============================================================================

/// Common data shared by all uAST nodes.
#[derive(Debug, Clone, Copy)]
pub struct NodeData {
    pub id: NodeId,
    /// Source position range.
    pub range: TextRange,
}

impl NodeData {
    pub fn new(id: NodeId, pos: u32, end: u32) -> Self {
        Self {
            id,
            range: TextRange::new(pos, end),
        }
    }

    /// Data for a node synthesized without a source position.
    pub fn synthesized(id: NodeId) -> Self {
        Self {
            id,
            range: TextRange::default(),
        }
    }
}

/// A list of nodes, allocated in the arena.
pub type NodeList<'a, T> = &'a [T];

/// An optional arena-allocated node.
pub type OptionalNode<'a, T> = Option<&'a T>;

/// Any uAST node.
#[derive(Debug)]
pub enum AstNode<'a> {
    // Expressions
    Array(Array<'a>),
    As(As<'a>),
    BoolLiteral(BoolLiteral),
    BytesLiteral(BytesLiteral<'a>),
    CStringLiteral(CStringLiteral<'a>),
    Domain(Domain<'a>),
    Dot(Dot<'a>),
    ErroneousExpression(NodeData),
    FnCall(FnCall<'a>),
    Identifier(Identifier),
    ImagLiteral(NumericLiteral),
    IntLiteral(NumericLiteral),
    Let(Let<'a>),
    New(New<'a>),
    OpCall(OpCall<'a>),
    PrimCall(PrimCall<'a>),
    Range(Range<'a>),
    RealLiteral(NumericLiteral),
    Reduce(Reduce<'a>),
    Scan(Scan<'a>),
    StringLiteral(StringLiteral<'a>),
    Tuple(Tuple<'a>),
    TypeQuery(TypeQuery),
    UintLiteral(NumericLiteral),
    Zip(Zip<'a>),

    // Statements
    Begin(Begin<'a>),
    Block(Block<'a>),
    BracketLoop(IndexableLoop<'a>),
    Break(Break<'a>),
    Catch(Catch<'a>),
    Cobegin(Cobegin<'a>),
    Coforall(IndexableLoop<'a>),
    Comment(Comment<'a>),
    Conditional(Conditional<'a>),
    Continue(Continue<'a>),
    Defer(Defer<'a>),
    Delete(Delete<'a>),
    DoWhile(DoWhile<'a>),
    EmptyStmt(NodeData),
    ExternBlock(ExternBlock<'a>),
    For(For<'a>),
    Forall(IndexableLoop<'a>),
    Foreach(IndexableLoop<'a>),
    Import(Import<'a>),
    Include(Include),
    Label(Label<'a>),
    Local(Local<'a>),
    Manage(Manage<'a>),
    On(On<'a>),
    Require(Require<'a>),
    Return(Return<'a>),
    Select(Select<'a>),
    Serial(Serial<'a>),
    Sync(Sync<'a>),
    Throw(Throw<'a>),
    Try(Try<'a>),
    Use(Use<'a>),
    When(When<'a>),
    While(While<'a>),
    Yield(Yield<'a>),

    // Declarations
    Class(Class<'a>),
    Enum(Enum<'a>),
    EnumElement(EnumElement<'a>),
    Formal(Formal<'a>),
    ForwardingDecl(ForwardingDecl<'a>),
    Function(Function<'a>),
    Module(Module<'a>),
    MultiDecl(MultiDecl<'a>),
    Record(Record<'a>),
    TaskVar(TaskVar<'a>),
    TupleDecl(TupleDecl<'a>),
    TypeDecl(TypeDecl<'a>),
    Union(Union<'a>),
    VarArgFormal(VarArgFormal<'a>),
    Variable(Variable<'a>),
    VisibilityClause(VisibilityClause<'a>),
    WithClause(WithClause<'a>),
}

// ============================================================================
// Names and Literals
// ============================================================================

#[derive(Debug, Clone)]
pub struct Identifier {
    pub data: NodeData,
    pub name: InternedString,
}

#[derive(Debug, Clone)]
pub struct BoolLiteral {
    pub data: NodeData,
    pub value: bool,
}

/// An int, uint, real or imag literal. `text` is the token as written,
/// e.g. `0x1F`, `1_000u`, `2.5e3`, `3.0i`.
#[derive(Debug, Clone)]
pub struct NumericLiteral {
    pub data: NodeData,
    pub text: InternedString,
}

/// A `"..."` literal. `value` holds the unescaped bytes.
#[derive(Debug, Clone)]
pub struct StringLiteral<'a> {
    pub data: NodeData,
    pub value: &'a [u8],
}

/// A `b"..."` literal.
#[derive(Debug, Clone)]
pub struct BytesLiteral<'a> {
    pub data: NodeData,
    pub value: &'a [u8],
}

/// A `c"..."` literal.
#[derive(Debug, Clone)]
pub struct CStringLiteral<'a> {
    pub data: NodeData,
    pub value: &'a [u8],
}

/// `?name` in a type or formal position.
#[derive(Debug, Clone)]
pub struct TypeQuery {
    pub data: NodeData,
    pub name: InternedString,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug)]
pub struct Array<'a> {
    pub data: NodeData,
    pub exprs: NodeList<'a, AstNode<'a>>,
}

/// `symbol as rename`, inside a visibility clause or `manage`.
#[derive(Debug)]
pub struct As<'a> {
    pub data: NodeData,
    pub symbol: &'a AstNode<'a>,
    pub rename: &'a AstNode<'a>,
}

/// `{lo..hi, ...}` domain literal, or a bare `?D` query.
#[derive(Debug)]
pub struct Domain<'a> {
    pub data: NodeData,
    pub exprs: NodeList<'a, AstNode<'a>>,
}

#[derive(Debug)]
pub struct Dot<'a> {
    pub data: NodeData,
    pub receiver: &'a AstNode<'a>,
    pub field: InternedString,
}

/// One actual argument of a call, optionally named.
#[derive(Debug)]
pub struct Actual<'a> {
    pub name: Option<InternedString>,
    pub value: AstNode<'a>,
}

#[derive(Debug)]
pub struct FnCall<'a> {
    pub data: NodeData,
    pub callee: &'a AstNode<'a>,
    pub actuals: NodeList<'a, Actual<'a>>,
    /// Written as `callee[args]` rather than `callee(args)`.
    pub uses_square_brackets: bool,
}

/// `let x = e in body` expression.
#[derive(Debug)]
pub struct Let<'a> {
    pub data: NodeData,
    pub decls: NodeList<'a, Variable<'a>>,
    pub expression: &'a AstNode<'a>,
}

#[derive(Debug)]
pub struct New<'a> {
    pub data: NodeData,
    pub type_expression: &'a AstNode<'a>,
    pub management: Management,
}

/// An operator application. One actual makes it unary, two make it binary.
///
/// Postfix `!` is spelled `postfix!`; the nilable-class `?` is the unary `?`.
#[derive(Debug)]
pub struct OpCall<'a> {
    pub data: NodeData,
    pub op: InternedString,
    pub actuals: NodeList<'a, AstNode<'a>>,
}

impl<'a> OpCall<'a> {
    pub fn is_unary_op(&self) -> bool {
        self.actuals.len() == 1
    }

    pub fn is_binary_op(&self) -> bool {
        self.actuals.len() == 2
    }
}

/// `__primitive("name", args...)`
#[derive(Debug)]
pub struct PrimCall<'a> {
    pub data: NodeData,
    pub prim: PrimTag,
    pub actuals: NodeList<'a, AstNode<'a>>,
}

#[derive(Debug)]
pub struct Range<'a> {
    pub data: NodeData,
    pub op_kind: RangeOpKind,
    pub lower_bound: OptionalNode<'a, AstNode<'a>>,
    pub upper_bound: OptionalNode<'a, AstNode<'a>>,
}

/// `op reduce iterand`
#[derive(Debug)]
pub struct Reduce<'a> {
    pub data: NodeData,
    pub op: &'a AstNode<'a>,
    pub iterand: &'a AstNode<'a>,
}

/// `op scan iterand`
#[derive(Debug)]
pub struct Scan<'a> {
    pub data: NodeData,
    pub op: &'a AstNode<'a>,
    pub iterand: &'a AstNode<'a>,
}

#[derive(Debug)]
pub struct Tuple<'a> {
    pub data: NodeData,
    pub exprs: NodeList<'a, AstNode<'a>>,
}

#[derive(Debug)]
pub struct Zip<'a> {
    pub data: NodeData,
    pub actuals: NodeList<'a, AstNode<'a>>,
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug)]
pub struct Block<'a> {
    pub data: NodeData,
    pub block_style: BlockStyle,
    pub stmts: NodeList<'a, AstNode<'a>>,
}

#[derive(Debug)]
pub struct Begin<'a> {
    pub data: NodeData,
    pub with_clause: OptionalNode<'a, WithClause<'a>>,
    pub block_style: BlockStyle,
    pub stmts: NodeList<'a, AstNode<'a>>,
}

/// Shared shape of `forall`, `foreach`, `coforall` and `[i in x]` loops.
#[derive(Debug)]
pub struct IndexableLoop<'a> {
    pub data: NodeData,
    pub index: OptionalNode<'a, AstNode<'a>>,
    pub iterand: &'a AstNode<'a>,
    pub with_clause: OptionalNode<'a, WithClause<'a>>,
    pub block_style: BlockStyle,
    pub stmts: NodeList<'a, AstNode<'a>>,
}

#[derive(Debug)]
pub struct For<'a> {
    pub data: NodeData,
    pub index: OptionalNode<'a, AstNode<'a>>,
    pub iterand: &'a AstNode<'a>,
    pub is_param: bool,
    pub block_style: BlockStyle,
    pub stmts: NodeList<'a, AstNode<'a>>,
}

#[derive(Debug)]
pub struct Break<'a> {
    pub data: NodeData,
    /// Label of the loop being exited.
    pub target: OptionalNode<'a, Identifier>,
}

#[derive(Debug)]
pub struct Continue<'a> {
    pub data: NodeData,
    pub target: OptionalNode<'a, Identifier>,
}

#[derive(Debug)]
pub struct Catch<'a> {
    pub data: NodeData,
    pub error: OptionalNode<'a, Variable<'a>>,
    pub has_parens_around_error: bool,
    pub stmts: NodeList<'a, AstNode<'a>>,
}

#[derive(Debug)]
pub struct Cobegin<'a> {
    pub data: NodeData,
    pub with_clause: OptionalNode<'a, WithClause<'a>>,
    pub task_bodies: NodeList<'a, AstNode<'a>>,
}

#[derive(Debug)]
pub struct Comment<'a> {
    pub data: NodeData,
    /// Full comment text including the `//` or `/* */` delimiters.
    pub text: &'a str,
}

#[derive(Debug)]
pub struct Conditional<'a> {
    pub data: NodeData,
    pub condition: &'a AstNode<'a>,
    pub then_block_style: BlockStyle,
    pub then_stmts: NodeList<'a, AstNode<'a>>,
    pub else_block_style: BlockStyle,
    pub else_stmts: Option<NodeList<'a, AstNode<'a>>>,
}

#[derive(Debug)]
pub struct Defer<'a> {
    pub data: NodeData,
    pub block_style: BlockStyle,
    pub stmts: NodeList<'a, AstNode<'a>>,
}

#[derive(Debug)]
pub struct Delete<'a> {
    pub data: NodeData,
    pub exprs: NodeList<'a, AstNode<'a>>,
}

#[derive(Debug)]
pub struct DoWhile<'a> {
    pub data: NodeData,
    pub block_style: BlockStyle,
    pub stmts: NodeList<'a, AstNode<'a>>,
    pub condition: &'a AstNode<'a>,
}

/// `extern { ... }` block of C code, kept verbatim.
#[derive(Debug)]
pub struct ExternBlock<'a> {
    pub data: NodeData,
    pub code: &'a str,
}

#[derive(Debug)]
pub struct Import<'a> {
    pub data: NodeData,
    pub visibility: Visibility,
    pub clauses: NodeList<'a, VisibilityClause<'a>>,
}

#[derive(Debug)]
pub struct Use<'a> {
    pub data: NodeData,
    pub visibility: Visibility,
    pub clauses: NodeList<'a, VisibilityClause<'a>>,
}

/// `include [private|public] [prototype] module Name`
#[derive(Debug, Clone)]
pub struct Include {
    pub data: NodeData,
    pub visibility: Visibility,
    pub is_prototype: bool,
    pub name: InternedString,
}

#[derive(Debug)]
pub struct Label<'a> {
    pub data: NodeData,
    pub name: InternedString,
    pub loop_stmt: &'a AstNode<'a>,
}

#[derive(Debug)]
pub struct Local<'a> {
    pub data: NodeData,
    pub condition: OptionalNode<'a, AstNode<'a>>,
    pub block_style: BlockStyle,
    pub stmts: NodeList<'a, AstNode<'a>>,
}

#[derive(Debug)]
pub struct Manage<'a> {
    pub data: NodeData,
    pub managers: NodeList<'a, AstNode<'a>>,
    pub block_style: BlockStyle,
    pub stmts: NodeList<'a, AstNode<'a>>,
}

#[derive(Debug)]
pub struct On<'a> {
    pub data: NodeData,
    pub destination: &'a AstNode<'a>,
    pub block_style: BlockStyle,
    pub stmts: NodeList<'a, AstNode<'a>>,
}

#[derive(Debug)]
pub struct Require<'a> {
    pub data: NodeData,
    pub exprs: NodeList<'a, AstNode<'a>>,
}

#[derive(Debug)]
pub struct Return<'a> {
    pub data: NodeData,
    pub value: OptionalNode<'a, AstNode<'a>>,
}

#[derive(Debug)]
pub struct Select<'a> {
    pub data: NodeData,
    pub expr: &'a AstNode<'a>,
    pub when_stmts: NodeList<'a, When<'a>>,
}

#[derive(Debug)]
pub struct Serial<'a> {
    pub data: NodeData,
    pub condition: OptionalNode<'a, AstNode<'a>>,
    pub block_style: BlockStyle,
    pub stmts: NodeList<'a, AstNode<'a>>,
}

#[derive(Debug)]
pub struct Sync<'a> {
    pub data: NodeData,
    pub block_style: BlockStyle,
    pub stmts: NodeList<'a, AstNode<'a>>,
}

#[derive(Debug)]
pub struct Throw<'a> {
    pub data: NodeData,
    pub error_expression: &'a AstNode<'a>,
}

/// `try`/`try!` either around a block with catch handlers, or in front of a
/// single expression (`try! f()`).
#[derive(Debug)]
pub struct Try<'a> {
    pub data: NodeData,
    pub is_try_bang: bool,
    pub is_expression_level: bool,
    pub stmts: NodeList<'a, AstNode<'a>>,
    pub handlers: NodeList<'a, Catch<'a>>,
}

/// An arm of a `select`. No case expressions means `otherwise`.
#[derive(Debug)]
pub struct When<'a> {
    pub data: NodeData,
    pub case_exprs: NodeList<'a, AstNode<'a>>,
    pub block_style: BlockStyle,
    pub stmts: NodeList<'a, AstNode<'a>>,
}

impl<'a> When<'a> {
    pub fn is_otherwise(&self) -> bool {
        self.case_exprs.is_empty()
    }
}

#[derive(Debug)]
pub struct While<'a> {
    pub data: NodeData,
    pub condition: &'a AstNode<'a>,
    pub block_style: BlockStyle,
    pub stmts: NodeList<'a, AstNode<'a>>,
}

#[derive(Debug)]
pub struct Yield<'a> {
    pub data: NodeData,
    pub value: &'a AstNode<'a>,
}

// ============================================================================
// Declarations
// ============================================================================

/// Attributes attached to a declaration.
#[derive(Debug)]
pub struct Attributes<'a> {
    pub pragmas: NodeList<'a, PragmaTag>,
}

#[derive(Debug)]
pub struct Variable<'a> {
    pub data: NodeData,
    pub attributes: OptionalNode<'a, Attributes<'a>>,
    pub linkage: Linkage,
    /// External name, e.g. the `"c_x"` of `extern "c_x" var x: int`.
    pub linkage_name: OptionalNode<'a, AstNode<'a>>,
    pub is_config: bool,
    pub kind: Intent,
    pub name: InternedString,
    pub type_expression: OptionalNode<'a, AstNode<'a>>,
    pub init_expression: OptionalNode<'a, AstNode<'a>>,
}

#[derive(Debug)]
pub struct Formal<'a> {
    pub data: NodeData,
    pub attributes: OptionalNode<'a, Attributes<'a>>,
    pub intent: Intent,
    pub name: InternedString,
    pub type_expression: OptionalNode<'a, AstNode<'a>>,
    pub init_expression: OptionalNode<'a, AstNode<'a>>,
}

/// A variadic formal, `args: int ...n` or `args ...?k`.
#[derive(Debug)]
pub struct VarArgFormal<'a> {
    pub data: NodeData,
    pub intent: Intent,
    pub name: InternedString,
    pub type_expression: OptionalNode<'a, AstNode<'a>>,
    pub init_expression: OptionalNode<'a, AstNode<'a>>,
    pub count: OptionalNode<'a, AstNode<'a>>,
}

/// A task intent or task-private variable inside a `with` clause.
#[derive(Debug)]
pub struct TaskVar<'a> {
    pub data: NodeData,
    pub intent: Intent,
    pub name: InternedString,
    pub type_expression: OptionalNode<'a, AstNode<'a>>,
    pub init_expression: OptionalNode<'a, AstNode<'a>>,
}

/// `var (a, (b, c)) = ...`. Elements are variable-like declarations or
/// nested tuple declarations.
#[derive(Debug)]
pub struct TupleDecl<'a> {
    pub data: NodeData,
    pub intent: Intent,
    pub decls: NodeList<'a, AstNode<'a>>,
    pub type_expression: OptionalNode<'a, AstNode<'a>>,
    pub init_expression: OptionalNode<'a, AstNode<'a>>,
}

/// `var a, b: int = 1;` Elements are `Variable` or `TupleDecl` nodes.
#[derive(Debug)]
pub struct MultiDecl<'a> {
    pub data: NodeData,
    pub decls: NodeList<'a, AstNode<'a>>,
}

#[derive(Debug)]
pub struct Function<'a> {
    pub data: NodeData,
    pub attributes: OptionalNode<'a, Attributes<'a>>,
    pub linkage: Linkage,
    pub linkage_name: OptionalNode<'a, AstNode<'a>>,
    pub visibility: Visibility,
    pub kind: FunctionKind,
    pub flags: FunctionFlags,
    pub name: InternedString,
    /// The receiver of a method; its type expression names the receiver type.
    pub this_formal: OptionalNode<'a, Formal<'a>>,
    /// Formals other than the receiver.
    pub formals: NodeList<'a, AstNode<'a>>,
    pub return_intent: Intent,
    pub return_type: OptionalNode<'a, AstNode<'a>>,
    pub where_clause: OptionalNode<'a, AstNode<'a>>,
    /// `None` for a declaration without a body (`extern proc f(): int;`).
    pub body: Option<NodeList<'a, AstNode<'a>>>,
}

impl<'a> Function<'a> {
    pub fn is_method(&self) -> bool {
        self.this_formal.is_some()
    }

    pub fn is_primary_method(&self) -> bool {
        self.is_method() && self.flags.contains(FunctionFlags::PRIMARY_METHOD)
    }

    pub fn is_override(&self) -> bool {
        self.flags.contains(FunctionFlags::OVERRIDE)
    }

    pub fn is_inline(&self) -> bool {
        self.flags.contains(FunctionFlags::INLINE)
    }

    pub fn throws(&self) -> bool {
        self.flags.contains(FunctionFlags::THROWS)
    }

    pub fn is_parenless(&self) -> bool {
        self.flags.contains(FunctionFlags::PARENLESS)
    }
}

#[derive(Debug)]
pub struct Module<'a> {
    pub data: NodeData,
    pub visibility: Visibility,
    pub kind: ModuleKind,
    pub name: InternedString,
    pub stmts: NodeList<'a, AstNode<'a>>,
}

#[derive(Debug)]
pub struct Class<'a> {
    pub data: NodeData,
    pub linkage: Linkage,
    pub linkage_name: OptionalNode<'a, AstNode<'a>>,
    pub name: InternedString,
    pub parent_class: OptionalNode<'a, AstNode<'a>>,
    pub decls: NodeList<'a, AstNode<'a>>,
}

#[derive(Debug)]
pub struct Record<'a> {
    pub data: NodeData,
    pub linkage: Linkage,
    pub linkage_name: OptionalNode<'a, AstNode<'a>>,
    pub name: InternedString,
    pub decls: NodeList<'a, AstNode<'a>>,
}

#[derive(Debug)]
pub struct Union<'a> {
    pub data: NodeData,
    pub linkage: Linkage,
    pub linkage_name: OptionalNode<'a, AstNode<'a>>,
    pub name: InternedString,
    pub decls: NodeList<'a, AstNode<'a>>,
}

#[derive(Debug)]
pub struct Enum<'a> {
    pub data: NodeData,
    pub name: InternedString,
    pub elements: NodeList<'a, EnumElement<'a>>,
}

#[derive(Debug)]
pub struct EnumElement<'a> {
    pub data: NodeData,
    pub name: InternedString,
    pub init_expression: OptionalNode<'a, AstNode<'a>>,
}

/// An opaque type declaration, `extern type T`.
#[derive(Debug)]
pub struct TypeDecl<'a> {
    pub data: NodeData,
    pub linkage: Linkage,
    pub linkage_name: OptionalNode<'a, AstNode<'a>>,
    pub name: InternedString,
}

#[derive(Debug)]
pub struct ForwardingDecl<'a> {
    pub data: NodeData,
    pub expr: &'a AstNode<'a>,
}

/// One clause of a `use` or `import`.
#[derive(Debug)]
pub struct VisibilityClause<'a> {
    pub data: NodeData,
    pub symbol: &'a AstNode<'a>,
    pub limitation_kind: LimitationKind,
    pub limitations: NodeList<'a, AstNode<'a>>,
}

/// `with (ref x, in y)` on a task-parallel construct.
#[derive(Debug)]
pub struct WithClause<'a> {
    pub data: NodeData,
    pub exprs: NodeList<'a, AstNode<'a>>,
}

//! chpl_nodebuilder: Synthetic uAST construction.
//!
//! Builds arena-allocated trees without a parser, for code generators that
//! want to print Chapel and for tests. Every node gets a fresh `NodeId` and
//! an empty source range.

use chpl_ast::node::*;
use chpl_ast::types::*;
use chpl_ast::PrimTag;
use chpl_core::{CompilerArena, InternedString, StringInterner};
use std::cell::Cell;

pub struct NodeBuilder<'a> {
    arena: &'a CompilerArena,
    interner: &'a StringInterner,
    next_id: Cell<u32>,
}

impl<'a> NodeBuilder<'a> {
    pub fn new(arena: &'a CompilerArena, interner: &'a StringInterner) -> Self {
        Self {
            arena,
            interner,
            next_id: Cell::new(0),
        }
    }

    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    /// Fresh node data.
    pub fn data(&self) -> NodeData {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        NodeData::synthesized(NodeId(id))
    }

    pub fn name(&self, text: &str) -> InternedString {
        self.interner.intern(text)
    }

    // ========================================================================
    // Arena plumbing
    // ========================================================================

    pub fn alloc(&self, node: AstNode<'a>) -> &'a AstNode<'a> {
        self.arena.alloc(node)
    }

    /// Allocate a typed child (a `WithClause`, `Formal`, `Identifier`, ...).
    pub fn alloc_value<T>(&self, value: T) -> &'a T {
        self.arena.alloc(value)
    }

    pub fn opt(&self, node: Option<AstNode<'a>>) -> Option<&'a AstNode<'a>> {
        node.map(|n| self.alloc(n))
    }

    pub fn list<T>(&self, items: Vec<T>) -> &'a [T] {
        self.arena.alloc_slice(items)
    }

    pub fn bytes(&self, value: &[u8]) -> &'a [u8] {
        self.arena.alloc_bytes(value)
    }

    pub fn text(&self, value: &str) -> &'a str {
        self.arena.alloc_str(value)
    }

    // ========================================================================
    // Names and literals
    // ========================================================================

    pub fn identifier(&self, name: &str) -> Identifier {
        Identifier {
            data: self.data(),
            name: self.name(name),
        }
    }

    pub fn ident(&self, name: &str) -> AstNode<'a> {
        AstNode::Identifier(self.identifier(name))
    }

    fn numeric(&self, text: &str) -> NumericLiteral {
        NumericLiteral {
            data: self.data(),
            text: self.name(text),
        }
    }

    pub fn int(&self, text: &str) -> AstNode<'a> {
        AstNode::IntLiteral(self.numeric(text))
    }

    pub fn uint(&self, text: &str) -> AstNode<'a> {
        AstNode::UintLiteral(self.numeric(text))
    }

    pub fn real(&self, text: &str) -> AstNode<'a> {
        AstNode::RealLiteral(self.numeric(text))
    }

    pub fn imag(&self, text: &str) -> AstNode<'a> {
        AstNode::ImagLiteral(self.numeric(text))
    }

    pub fn bool_lit(&self, value: bool) -> AstNode<'a> {
        AstNode::BoolLiteral(BoolLiteral {
            data: self.data(),
            value,
        })
    }

    pub fn string(&self, value: &[u8]) -> AstNode<'a> {
        AstNode::StringLiteral(StringLiteral {
            data: self.data(),
            value: self.bytes(value),
        })
    }

    pub fn bytes_lit(&self, value: &[u8]) -> AstNode<'a> {
        AstNode::BytesLiteral(BytesLiteral {
            data: self.data(),
            value: self.bytes(value),
        })
    }

    pub fn cstring(&self, value: &[u8]) -> AstNode<'a> {
        AstNode::CStringLiteral(CStringLiteral {
            data: self.data(),
            value: self.bytes(value),
        })
    }

    pub fn type_query(&self, name: &str) -> AstNode<'a> {
        AstNode::TypeQuery(TypeQuery {
            data: self.data(),
            name: self.name(name),
        })
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    pub fn op(&self, op: &str, actuals: Vec<AstNode<'a>>) -> AstNode<'a> {
        AstNode::OpCall(OpCall {
            data: self.data(),
            op: self.name(op),
            actuals: self.list(actuals),
        })
    }

    pub fn binary(&self, op: &str, lhs: AstNode<'a>, rhs: AstNode<'a>) -> AstNode<'a> {
        self.op(op, vec![lhs, rhs])
    }

    pub fn unary(&self, op: &str, operand: AstNode<'a>) -> AstNode<'a> {
        self.op(op, vec![operand])
    }

    pub fn actual(&self, value: AstNode<'a>) -> Actual<'a> {
        Actual { name: None, value }
    }

    pub fn named(&self, name: &str, value: AstNode<'a>) -> Actual<'a> {
        Actual {
            name: Some(self.name(name)),
            value,
        }
    }

    pub fn call_with(
        &self,
        callee: AstNode<'a>,
        actuals: Vec<Actual<'a>>,
        uses_square_brackets: bool,
    ) -> AstNode<'a> {
        AstNode::FnCall(FnCall {
            data: self.data(),
            callee: self.alloc(callee),
            actuals: self.list(actuals),
            uses_square_brackets,
        })
    }

    /// `callee(args)` with positional arguments.
    pub fn call(&self, callee: AstNode<'a>, args: Vec<AstNode<'a>>) -> AstNode<'a> {
        let actuals = args.into_iter().map(|a| self.actual(a)).collect();
        self.call_with(callee, actuals, false)
    }

    pub fn prim_call(&self, prim: PrimTag, actuals: Vec<AstNode<'a>>) -> AstNode<'a> {
        AstNode::PrimCall(PrimCall {
            data: self.data(),
            prim,
            actuals: self.list(actuals),
        })
    }

    pub fn dot(&self, receiver: AstNode<'a>, field: &str) -> AstNode<'a> {
        AstNode::Dot(Dot {
            data: self.data(),
            receiver: self.alloc(receiver),
            field: self.name(field),
        })
    }

    pub fn range(
        &self,
        op_kind: RangeOpKind,
        lower_bound: Option<AstNode<'a>>,
        upper_bound: Option<AstNode<'a>>,
    ) -> AstNode<'a> {
        AstNode::Range(Range {
            data: self.data(),
            op_kind,
            lower_bound: self.opt(lower_bound),
            upper_bound: self.opt(upper_bound),
        })
    }

    pub fn tuple(&self, exprs: Vec<AstNode<'a>>) -> AstNode<'a> {
        AstNode::Tuple(Tuple {
            data: self.data(),
            exprs: self.list(exprs),
        })
    }

    // ========================================================================
    // Statements
    // ========================================================================

    pub fn block(&self, block_style: BlockStyle, stmts: Vec<AstNode<'a>>) -> AstNode<'a> {
        AstNode::Block(Block {
            data: self.data(),
            block_style,
            stmts: self.list(stmts),
        })
    }

    pub fn ret(&self, value: Option<AstNode<'a>>) -> AstNode<'a> {
        AstNode::Return(Return {
            data: self.data(),
            value: self.opt(value),
        })
    }

    pub fn with_clause(&self, exprs: Vec<AstNode<'a>>) -> &'a WithClause<'a> {
        self.alloc_value(WithClause {
            data: self.data(),
            exprs: self.list(exprs),
        })
    }

    pub fn task_var(&self, intent: Intent, name: &str) -> AstNode<'a> {
        AstNode::TaskVar(TaskVar {
            data: self.data(),
            intent,
            name: self.name(name),
            type_expression: None,
            init_expression: None,
        })
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    pub fn variable(
        &self,
        kind: Intent,
        name: &str,
        type_expression: Option<AstNode<'a>>,
        init_expression: Option<AstNode<'a>>,
    ) -> Variable<'a> {
        Variable {
            data: self.data(),
            attributes: None,
            linkage: Linkage::Default,
            linkage_name: None,
            is_config: false,
            kind,
            name: self.name(name),
            type_expression: self.opt(type_expression),
            init_expression: self.opt(init_expression),
        }
    }

    /// A loop index or other keyword-less variable.
    pub fn index_var(&self, name: &str) -> AstNode<'a> {
        AstNode::Variable(self.variable(Intent::Default, name, None, None))
    }

    pub fn formal(
        &self,
        intent: Intent,
        name: &str,
        type_expression: Option<AstNode<'a>>,
        init_expression: Option<AstNode<'a>>,
    ) -> Formal<'a> {
        Formal {
            data: self.data(),
            attributes: None,
            intent,
            name: self.name(name),
            type_expression: self.opt(type_expression),
            init_expression: self.opt(init_expression),
        }
    }

    /// A `proc`-style declaration with no formals and an empty body.
    /// Callers fill in the remaining public fields.
    pub fn function(&self, kind: FunctionKind, name: &str) -> Function<'a> {
        Function {
            data: self.data(),
            attributes: None,
            linkage: Linkage::Default,
            linkage_name: None,
            visibility: Visibility::Default,
            kind,
            flags: FunctionFlags::NONE,
            name: self.name(name),
            this_formal: None,
            formals: &[],
            return_intent: Intent::Default,
            return_type: None,
            where_clause: None,
            body: Some(&[]),
        }
    }

    pub fn visibility_clause(
        &self,
        symbol: AstNode<'a>,
        limitation_kind: LimitationKind,
        limitations: Vec<AstNode<'a>>,
    ) -> VisibilityClause<'a> {
        VisibilityClause {
            data: self.data(),
            symbol: self.alloc(symbol),
            limitation_kind,
            limitations: self.list(limitations),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chpl_ast::AstTag;

    #[test]
    fn test_fresh_ids() {
        let arena = CompilerArena::new();
        let interner = StringInterner::new();
        let b = NodeBuilder::new(&arena, &interner);
        let x = b.ident("x");
        let y = b.ident("y");
        assert_eq!(x.id(), NodeId(0));
        assert_eq!(y.id(), NodeId(1));
        assert!(x.range().is_empty());
    }

    #[test]
    fn test_binary_shape() {
        let arena = CompilerArena::new();
        let interner = StringInterner::new();
        let b = NodeBuilder::new(&arena, &interner);
        let sum = b.binary("+", b.int("1"), b.ident("x"));
        assert_eq!(sum.tag(), AstTag::OpCall);
        let call = sum.as_op_call().expect("op call");
        assert!(call.is_binary_op());
        assert!(!call.is_unary_op());
        assert_eq!(interner.resolve(call.op), "+");
        assert_eq!(call.actuals[1].tag(), AstTag::Identifier);
    }

    #[test]
    fn test_function_defaults() {
        let arena = CompilerArena::new();
        let interner = StringInterner::new();
        let b = NodeBuilder::new(&arena, &interner);
        let f = b.function(FunctionKind::Iter, "these");
        assert!(!f.is_method());
        assert!(f.body.is_some_and(|stmts| stmts.is_empty()));
        assert_eq!(f.return_intent, Intent::Default);
    }
}

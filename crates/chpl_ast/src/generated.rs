//! Generated helpers for uAST nodes.
//!
//! Kind and common-data accessors over every `AstNode` variant, plus
//! checked downcasts used by the printer.

use crate::ast_tag::AstTag;
use crate::node::*;
use crate::types::NodeId;
use chpl_core::text::TextRange;

impl<'a> AstNode<'a> {
    /// The kind of this node.
    pub fn tag(&self) -> AstTag {
        match self {
            AstNode::Array(_) => AstTag::Array,
            AstNode::As(_) => AstTag::As,
            AstNode::BoolLiteral(_) => AstTag::BoolLiteral,
            AstNode::BytesLiteral(_) => AstTag::BytesLiteral,
            AstNode::CStringLiteral(_) => AstTag::CStringLiteral,
            AstNode::Domain(_) => AstTag::Domain,
            AstNode::Dot(_) => AstTag::Dot,
            AstNode::ErroneousExpression(_) => AstTag::ErroneousExpression,
            AstNode::FnCall(_) => AstTag::FnCall,
            AstNode::Identifier(_) => AstTag::Identifier,
            AstNode::ImagLiteral(_) => AstTag::ImagLiteral,
            AstNode::IntLiteral(_) => AstTag::IntLiteral,
            AstNode::Let(_) => AstTag::Let,
            AstNode::New(_) => AstTag::New,
            AstNode::OpCall(_) => AstTag::OpCall,
            AstNode::PrimCall(_) => AstTag::PrimCall,
            AstNode::Range(_) => AstTag::Range,
            AstNode::RealLiteral(_) => AstTag::RealLiteral,
            AstNode::Reduce(_) => AstTag::Reduce,
            AstNode::Scan(_) => AstTag::Scan,
            AstNode::StringLiteral(_) => AstTag::StringLiteral,
            AstNode::Tuple(_) => AstTag::Tuple,
            AstNode::TypeQuery(_) => AstTag::TypeQuery,
            AstNode::UintLiteral(_) => AstTag::UintLiteral,
            AstNode::Zip(_) => AstTag::Zip,
            AstNode::Begin(_) => AstTag::Begin,
            AstNode::Block(_) => AstTag::Block,
            AstNode::BracketLoop(_) => AstTag::BracketLoop,
            AstNode::Break(_) => AstTag::Break,
            AstNode::Catch(_) => AstTag::Catch,
            AstNode::Cobegin(_) => AstTag::Cobegin,
            AstNode::Coforall(_) => AstTag::Coforall,
            AstNode::Comment(_) => AstTag::Comment,
            AstNode::Conditional(_) => AstTag::Conditional,
            AstNode::Continue(_) => AstTag::Continue,
            AstNode::Defer(_) => AstTag::Defer,
            AstNode::Delete(_) => AstTag::Delete,
            AstNode::DoWhile(_) => AstTag::DoWhile,
            AstNode::EmptyStmt(_) => AstTag::EmptyStmt,
            AstNode::ExternBlock(_) => AstTag::ExternBlock,
            AstNode::For(_) => AstTag::For,
            AstNode::Forall(_) => AstTag::Forall,
            AstNode::Foreach(_) => AstTag::Foreach,
            AstNode::Import(_) => AstTag::Import,
            AstNode::Include(_) => AstTag::Include,
            AstNode::Label(_) => AstTag::Label,
            AstNode::Local(_) => AstTag::Local,
            AstNode::Manage(_) => AstTag::Manage,
            AstNode::On(_) => AstTag::On,
            AstNode::Require(_) => AstTag::Require,
            AstNode::Return(_) => AstTag::Return,
            AstNode::Select(_) => AstTag::Select,
            AstNode::Serial(_) => AstTag::Serial,
            AstNode::Sync(_) => AstTag::Sync,
            AstNode::Throw(_) => AstTag::Throw,
            AstNode::Try(_) => AstTag::Try,
            AstNode::Use(_) => AstTag::Use,
            AstNode::When(_) => AstTag::When,
            AstNode::While(_) => AstTag::While,
            AstNode::Yield(_) => AstTag::Yield,
            AstNode::Class(_) => AstTag::Class,
            AstNode::Enum(_) => AstTag::Enum,
            AstNode::EnumElement(_) => AstTag::EnumElement,
            AstNode::Formal(_) => AstTag::Formal,
            AstNode::ForwardingDecl(_) => AstTag::ForwardingDecl,
            AstNode::Function(_) => AstTag::Function,
            AstNode::Module(_) => AstTag::Module,
            AstNode::MultiDecl(_) => AstTag::MultiDecl,
            AstNode::Record(_) => AstTag::Record,
            AstNode::TaskVar(_) => AstTag::TaskVar,
            AstNode::TupleDecl(_) => AstTag::TupleDecl,
            AstNode::TypeDecl(_) => AstTag::TypeDecl,
            AstNode::Union(_) => AstTag::Union,
            AstNode::VarArgFormal(_) => AstTag::VarArgFormal,
            AstNode::Variable(_) => AstTag::Variable,
            AstNode::VisibilityClause(_) => AstTag::VisibilityClause,
            AstNode::WithClause(_) => AstTag::WithClause,
        }
    }

    pub fn data(&self) -> &NodeData {
        match self {
            AstNode::Array(n) => &n.data,
            AstNode::As(n) => &n.data,
            AstNode::BoolLiteral(n) => &n.data,
            AstNode::BytesLiteral(n) => &n.data,
            AstNode::CStringLiteral(n) => &n.data,
            AstNode::Domain(n) => &n.data,
            AstNode::Dot(n) => &n.data,
            AstNode::ErroneousExpression(d) => d,
            AstNode::FnCall(n) => &n.data,
            AstNode::Identifier(n) => &n.data,
            AstNode::ImagLiteral(n) => &n.data,
            AstNode::IntLiteral(n) => &n.data,
            AstNode::Let(n) => &n.data,
            AstNode::New(n) => &n.data,
            AstNode::OpCall(n) => &n.data,
            AstNode::PrimCall(n) => &n.data,
            AstNode::Range(n) => &n.data,
            AstNode::RealLiteral(n) => &n.data,
            AstNode::Reduce(n) => &n.data,
            AstNode::Scan(n) => &n.data,
            AstNode::StringLiteral(n) => &n.data,
            AstNode::Tuple(n) => &n.data,
            AstNode::TypeQuery(n) => &n.data,
            AstNode::UintLiteral(n) => &n.data,
            AstNode::Zip(n) => &n.data,
            AstNode::Begin(n) => &n.data,
            AstNode::Block(n) => &n.data,
            AstNode::BracketLoop(n) => &n.data,
            AstNode::Break(n) => &n.data,
            AstNode::Catch(n) => &n.data,
            AstNode::Cobegin(n) => &n.data,
            AstNode::Coforall(n) => &n.data,
            AstNode::Comment(n) => &n.data,
            AstNode::Conditional(n) => &n.data,
            AstNode::Continue(n) => &n.data,
            AstNode::Defer(n) => &n.data,
            AstNode::Delete(n) => &n.data,
            AstNode::DoWhile(n) => &n.data,
            AstNode::EmptyStmt(d) => d,
            AstNode::ExternBlock(n) => &n.data,
            AstNode::For(n) => &n.data,
            AstNode::Forall(n) => &n.data,
            AstNode::Foreach(n) => &n.data,
            AstNode::Import(n) => &n.data,
            AstNode::Include(n) => &n.data,
            AstNode::Label(n) => &n.data,
            AstNode::Local(n) => &n.data,
            AstNode::Manage(n) => &n.data,
            AstNode::On(n) => &n.data,
            AstNode::Require(n) => &n.data,
            AstNode::Return(n) => &n.data,
            AstNode::Select(n) => &n.data,
            AstNode::Serial(n) => &n.data,
            AstNode::Sync(n) => &n.data,
            AstNode::Throw(n) => &n.data,
            AstNode::Try(n) => &n.data,
            AstNode::Use(n) => &n.data,
            AstNode::When(n) => &n.data,
            AstNode::While(n) => &n.data,
            AstNode::Yield(n) => &n.data,
            AstNode::Class(n) => &n.data,
            AstNode::Enum(n) => &n.data,
            AstNode::EnumElement(n) => &n.data,
            AstNode::Formal(n) => &n.data,
            AstNode::ForwardingDecl(n) => &n.data,
            AstNode::Function(n) => &n.data,
            AstNode::Module(n) => &n.data,
            AstNode::MultiDecl(n) => &n.data,
            AstNode::Record(n) => &n.data,
            AstNode::TaskVar(n) => &n.data,
            AstNode::TupleDecl(n) => &n.data,
            AstNode::TypeDecl(n) => &n.data,
            AstNode::Union(n) => &n.data,
            AstNode::VarArgFormal(n) => &n.data,
            AstNode::Variable(n) => &n.data,
            AstNode::VisibilityClause(n) => &n.data,
            AstNode::WithClause(n) => &n.data,
        }
    }

    pub fn id(&self) -> NodeId {
        self.data().id
    }

    pub fn range(&self) -> TextRange {
        self.data().range
    }

    pub fn as_identifier(&self) -> Option<&Identifier> {
        match self {
            AstNode::Identifier(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_op_call(&self) -> Option<&OpCall<'a>> {
        match self {
            AstNode::OpCall(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_type_query(&self) -> Option<&TypeQuery> {
        match self {
            AstNode::TypeQuery(n) => Some(n),
            _ => None,
        }
    }
}

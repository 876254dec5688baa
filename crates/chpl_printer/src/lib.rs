//! chpl_printer: uAST to Chapel source text.
//!
//! Reconstructs parseable Chapel from an immutable uAST. The output keeps the
//! tree's meaning (grouping, decorations, block shape) but makes no attempt
//! at pretty layout: there is no indentation and statement lists are only
//! separated by newlines.
//!
//! A tree that violates a structural invariant (a sentinel tag in a keyword
//! position, a node of the wrong kind in a restricted slot) cannot be
//! printed. `print_chapel_syntax` treats that as fatal; the `try_` entry
//! points report it as a `PrintError`.

pub mod error;
pub mod escape;
pub mod keywords;
pub mod precedence;

pub use error::{PrintError, PrintResult};
pub use escape::quote_string_for_c;

use chpl_ast::node::*;
use chpl_ast::types::*;
use chpl_ast::AstTag;
use chpl_core::intern::{InternedString, StringInterner};
use keywords::*;
use precedence::{needs_parens, want_spaces, Operator};

/// Options for the printer.
#[derive(Debug, Clone)]
pub struct PrinterOptions {
    /// Print comment nodes verbatim instead of dropping them.
    pub emit_comments: bool,
    /// Separator between statements of a statement list.
    pub new_line: String,
}

impl Default for PrinterOptions {
    fn default() -> Self {
        Self {
            emit_comments: false,
            new_line: "\n".to_string(),
        }
    }
}

/// Print any uAST node as Chapel source.
///
/// # Panics
///
/// Panics if the tree cannot be printed; see [`try_print_chapel_syntax`].
pub fn print_chapel_syntax(node: &AstNode<'_>, interner: &StringInterner) -> String {
    match try_print_chapel_syntax(node, interner) {
        Ok(text) => text,
        Err(err) => fatal(err),
    }
}

pub fn try_print_chapel_syntax(node: &AstNode<'_>, interner: &StringInterner) -> PrintResult<String> {
    Printer::new(interner).print(node)
}

/// Print only the declaration header of a function:
/// `[visibility] kind [receiver.]name(formals)`.
///
/// # Panics
///
/// Panics if the function cannot be printed.
pub fn print_function_signature(function: &Function<'_>, interner: &StringInterner) -> String {
    match try_print_function_signature(function, interner) {
        Ok(text) => text,
        Err(err) => fatal(err),
    }
}

pub fn try_print_function_signature(
    function: &Function<'_>,
    interner: &StringInterner,
) -> PrintResult<String> {
    Printer::new(interner).print_signature(function)
}

fn fatal(err: PrintError) -> ! {
    tracing::error!(error = %err, "uAST cannot be printed");
    panic!("{err}");
}

/// The printer converts uAST nodes to text.
pub struct Printer<'i> {
    output: String,
    options: PrinterOptions,
    interner: &'i StringInterner,
    /// Set while printing a type expression; binary operators lose their
    /// surrounding spaces there.
    printing_type: bool,
}

impl<'i> Printer<'i> {
    pub fn new(interner: &'i StringInterner) -> Self {
        Self::with_options(interner, PrinterOptions::default())
    }

    pub fn with_options(interner: &'i StringInterner, options: PrinterOptions) -> Self {
        Self {
            output: String::with_capacity(256),
            options,
            interner,
            printing_type: false,
        }
    }

    /// Print a node. Nothing is returned on error.
    pub fn print(&mut self, node: &AstNode<'_>) -> PrintResult<String> {
        let _span = tracing::trace_span!("print_chapel_syntax", tag = %node.tag()).entered();
        self.reset();
        self.print_node(node)?;
        tracing::trace!(len = self.output.len(), "printed uAST node");
        Ok(std::mem::take(&mut self.output))
    }

    /// Print the declaration header of a function.
    pub fn print_signature(&mut self, function: &Function<'_>) -> PrintResult<String> {
        let name = self.resolve(function.name);
        let _span = tracing::trace_span!("print_function_signature", name).entered();
        self.reset();
        if function.visibility != Visibility::Default {
            self.write(visibility_keyword(function.visibility)?);
            self.write(" ");
        }
        self.write(function_kind_keyword(function.kind));
        self.write(" ");
        self.print_function_header(function)?;
        tracing::trace!(len = self.output.len(), "printed function signature");
        Ok(std::mem::take(&mut self.output))
    }

    fn reset(&mut self) {
        self.output.clear();
        self.printing_type = false;
    }

    fn resolve(&self, s: InternedString) -> &'i str {
        self.interner.resolve(s)
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    fn print_node(&mut self, node: &AstNode<'_>) -> PrintResult {
        match node {
            // Expressions
            AstNode::Array(n) => self.print_delimited(n.exprs, ", ", "[", "]"),
            AstNode::As(n) => {
                self.print_node(n.symbol)?;
                self.write(" as ");
                self.print_node(n.rename)
            }
            AstNode::BoolLiteral(n) => {
                self.write(if n.value { "true" } else { "false" });
                Ok(())
            }
            AstNode::BytesLiteral(n) => {
                self.print_quoted("b", n.value);
                Ok(())
            }
            AstNode::CStringLiteral(n) => {
                self.print_quoted("c", n.value);
                Ok(())
            }
            AstNode::Domain(n) => self.print_domain(n),
            AstNode::Dot(n) => {
                self.print_tight(n.receiver)?;
                self.write(".");
                self.write_name(n.field);
                Ok(())
            }
            AstNode::ErroneousExpression(_) => {
                self.write("<ERROR: Erroneous Expression>");
                Ok(())
            }
            AstNode::FnCall(n) => self.print_fn_call(n),
            AstNode::Identifier(n) => {
                self.write_name(n.name);
                Ok(())
            }
            AstNode::ImagLiteral(n)
            | AstNode::IntLiteral(n)
            | AstNode::RealLiteral(n)
            | AstNode::UintLiteral(n) => {
                self.write_name(n.text);
                Ok(())
            }
            AstNode::Let(n) => self.print_let(n),
            AstNode::New(n) => {
                self.write("new ");
                if n.management != Management::Default {
                    self.write(management_keyword(n.management)?);
                    self.write(" ");
                }
                self.print_node(n.type_expression)
            }
            AstNode::OpCall(n) => self.print_op_call(n),
            AstNode::PrimCall(n) => self.print_prim_call(n),
            AstNode::Range(n) => {
                if let Some(lower) = n.lower_bound {
                    self.print_node(lower)?;
                }
                self.write(match n.op_kind {
                    RangeOpKind::Default => "..",
                    RangeOpKind::OpenHigh => "..<",
                });
                if let Some(upper) = n.upper_bound {
                    self.print_node(upper)?;
                }
                Ok(())
            }
            AstNode::Reduce(n) => {
                self.print_node(n.op)?;
                self.write(" reduce ");
                self.print_tight(n.iterand)
            }
            AstNode::Scan(n) => {
                self.print_node(n.op)?;
                self.write(" scan ");
                self.print_tight(n.iterand)
            }
            AstNode::StringLiteral(n) => {
                self.print_quoted("", n.value);
                Ok(())
            }
            AstNode::Tuple(n) => {
                self.write("(");
                self.print_list(n.exprs, ", ")?;
                // (a,) is a one-tuple, (a) is just a
                if n.exprs.len() == 1 {
                    self.write(",");
                }
                self.write(")");
                Ok(())
            }
            AstNode::TypeQuery(n) => {
                self.write("?");
                self.write_name(n.name);
                Ok(())
            }
            AstNode::Zip(n) => {
                self.write("zip");
                self.print_delimited(n.actuals, ", ", "(", ")")
            }

            // Statements
            AstNode::Begin(n) => {
                self.write("begin ");
                if let Some(with) = n.with_clause {
                    self.print_with_clause(with)?;
                    self.write(" ");
                }
                self.print_block_with_style(n.block_style, n.stmts, None)
            }
            AstNode::Block(n) => self.print_block_with_style(n.block_style, n.stmts, None),
            AstNode::BracketLoop(n) => self.print_bracket_loop(n),
            AstNode::Break(n) => {
                self.write("break");
                self.print_jump_target(n.target);
                Ok(())
            }
            AstNode::Catch(n) => self.print_catch(n),
            AstNode::Cobegin(n) => {
                self.write("cobegin ");
                if let Some(with) = n.with_clause {
                    self.print_with_clause(with)?;
                    self.write(" ");
                }
                self.print_braced(n.task_bodies)
            }
            AstNode::Coforall(n) => self.print_indexable_loop("coforall ", n),
            AstNode::Comment(n) => {
                if self.options.emit_comments {
                    self.write(n.text);
                }
                Ok(())
            }
            AstNode::Conditional(n) => {
                self.write("if ");
                self.print_node(n.condition)?;
                self.write(" ");
                self.print_block_with_style(n.then_block_style, n.then_stmts, Some("then "))?;
                if let Some(else_stmts) = n.else_stmts {
                    self.write(" else ");
                    self.print_block_with_style(n.else_block_style, else_stmts, None)?;
                }
                Ok(())
            }
            AstNode::Continue(n) => {
                self.write("continue");
                self.print_jump_target(n.target);
                Ok(())
            }
            AstNode::Defer(n) => {
                self.write("defer ");
                self.print_block_with_style(n.block_style, n.stmts, None)
            }
            AstNode::Delete(n) => {
                self.write("delete ");
                self.print_list(n.exprs, ", ")
            }
            AstNode::DoWhile(n) => {
                self.write("do ");
                self.print_block_with_style(n.block_style, n.stmts, None)?;
                self.write(" while ");
                self.print_node(n.condition)
            }
            AstNode::EmptyStmt(_) => {
                self.write(";");
                Ok(())
            }
            AstNode::ExternBlock(n) => {
                self.write("extern {");
                self.write_newline();
                self.write(n.code);
                self.write("}");
                Ok(())
            }
            AstNode::For(n) => {
                self.write("for ");
                if n.is_param {
                    self.write("param ");
                }
                self.print_loop_index(n.index)?;
                self.print_node(n.iterand)?;
                self.write(" ");
                self.print_block_with_style(n.block_style, n.stmts, Some("do "))
            }
            AstNode::Forall(n) => self.print_indexable_loop("forall ", n),
            AstNode::Foreach(n) => self.print_indexable_loop("foreach ", n),
            AstNode::Import(n) => self.print_visibility_stmt(n.visibility, "import ", n.clauses),
            AstNode::Include(n) => {
                self.write("include ");
                self.print_visibility(n.visibility)?;
                if n.is_prototype {
                    self.write("prototype ");
                }
                self.write("module ");
                self.write_name(n.name);
                Ok(())
            }
            AstNode::Label(n) => {
                let loop_tag = n.loop_stmt.tag();
                if !loop_tag.is_loop() {
                    return Err(PrintError::UnhandledVariant {
                        expected: "loop",
                        found: loop_tag,
                    });
                }
                self.write("label ");
                self.write_name(n.name);
                self.write(" ");
                self.print_node(n.loop_stmt)
            }
            AstNode::Local(n) => {
                self.write("local ");
                self.print_optional_condition(n.condition)?;
                self.print_block_with_style(n.block_style, n.stmts, Some("do "))
            }
            AstNode::Manage(n) => {
                self.write("manage ");
                self.print_list(n.managers, ", ")?;
                self.write(" ");
                self.print_block_with_style(n.block_style, n.stmts, Some("do "))
            }
            AstNode::On(n) => {
                self.write("on ");
                self.print_node(n.destination)?;
                self.write(" ");
                self.print_block_with_style(n.block_style, n.stmts, Some("do "))
            }
            AstNode::Require(n) => {
                self.write("require ");
                self.print_list(n.exprs, ", ")
            }
            AstNode::Return(n) => {
                self.write("return");
                if let Some(value) = n.value {
                    self.write(" ");
                    self.print_node(value)?;
                }
                Ok(())
            }
            AstNode::Select(n) => {
                self.write("select ");
                self.print_node(n.expr)?;
                self.write(" {");
                for (i, when) in n.when_stmts.iter().enumerate() {
                    if i > 0 {
                        self.write_newline();
                    }
                    self.print_when(when)?;
                }
                self.write("}");
                Ok(())
            }
            AstNode::Serial(n) => {
                self.write("serial ");
                self.print_optional_condition(n.condition)?;
                self.print_block_with_style(n.block_style, n.stmts, Some("do "))
            }
            AstNode::Sync(n) => {
                self.write("sync ");
                self.print_block_with_style(n.block_style, n.stmts, None)
            }
            AstNode::Throw(n) => {
                self.write("throw ");
                self.print_node(n.error_expression)
            }
            AstNode::Try(n) => self.print_try(n),
            AstNode::Use(n) => self.print_visibility_stmt(n.visibility, "use ", n.clauses),
            AstNode::When(n) => self.print_when(n),
            AstNode::While(n) => {
                self.write("while ");
                self.print_node(n.condition)?;
                self.write(" ");
                self.print_block_with_style(n.block_style, n.stmts, Some("do "))
            }
            AstNode::Yield(n) => {
                self.write("yield ");
                self.print_node(n.value)
            }

            // Declarations
            AstNode::Class(n) => {
                self.print_linkage(n.linkage, n.linkage_name)?;
                self.write("class ");
                self.write_name(n.name);
                self.write(" ");
                if let Some(parent) = n.parent_class {
                    self.write(": ");
                    self.print_type(parent)?;
                    self.write(" ");
                }
                self.print_braced(n.decls)
            }
            AstNode::Enum(n) => {
                self.write("enum ");
                self.write_name(n.name);
                self.write(" { ");
                for (i, element) in n.elements.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    self.print_enum_element(element)?;
                }
                self.write(" }");
                Ok(())
            }
            AstNode::EnumElement(n) => self.print_enum_element(n),
            AstNode::Formal(n) => self.print_formal(n),
            AstNode::ForwardingDecl(n) => {
                self.write("forwarding ");
                self.print_node(n.expr)
            }
            AstNode::Function(n) => self.print_function(n),
            AstNode::Module(n) => {
                self.print_visibility(n.visibility)?;
                if n.kind != ModuleKind::Default {
                    if let Some(keyword) = module_kind_keyword(n.kind)? {
                        self.write(keyword);
                        self.write(" ");
                    }
                }
                self.write("module ");
                self.write_name(n.name);
                self.write(" ");
                self.print_braced(n.stmts)
            }
            AstNode::MultiDecl(n) => self.print_multi_decl(n),
            AstNode::Record(n) => {
                self.print_linkage(n.linkage, n.linkage_name)?;
                self.write("record ");
                self.write_name(n.name);
                self.write(" ");
                self.print_braced(n.decls)
            }
            AstNode::TaskVar(n) => {
                // A task intent is never implied.
                self.write(intent_keyword(n.intent)?);
                self.write(" ");
                self.print_name_type_init(n.name, n.type_expression, n.init_expression)
            }
            AstNode::TupleDecl(n) => self.print_tuple_decl(n),
            AstNode::TypeDecl(n) => {
                self.print_linkage(n.linkage, n.linkage_name)?;
                self.write("type ");
                self.write_name(n.name);
                Ok(())
            }
            AstNode::Union(n) => {
                self.print_linkage(n.linkage, n.linkage_name)?;
                self.write("union ");
                self.write_name(n.name);
                self.write(" ");
                self.print_braced(n.decls)
            }
            AstNode::VarArgFormal(n) => {
                self.print_intent(n.intent)?;
                self.print_name_type_init(n.name, n.type_expression, n.init_expression)?;
                self.write(" ...");
                if let Some(count) = n.count {
                    self.print_node(count)?;
                }
                Ok(())
            }
            AstNode::Variable(n) => self.print_variable(n),
            AstNode::VisibilityClause(n) => self.print_visibility_clause(n),
            AstNode::WithClause(n) => self.print_with_clause(n),
        }
    }

    // ========================================================================
    // Statement lists
    // ========================================================================

    /// Print a statement list according to its block style. The implicit
    /// keyword (`do `, `then `) is written whenever the style is not
    /// `Explicit`; braces are written whenever it is not `Implicit`.
    fn print_block_with_style(
        &mut self,
        style: BlockStyle,
        stmts: &[AstNode<'_>],
        implicit_keyword: Option<&str>,
    ) -> PrintResult {
        if let Some(keyword) = implicit_keyword {
            if style != BlockStyle::Explicit {
                self.write(keyword);
            }
        }
        match style {
            BlockStyle::Implicit => self.print_stmts(stmts),
            BlockStyle::Explicit | BlockStyle::UnnecessaryKeywordAndBlock => self.print_braced(stmts),
        }
    }

    fn print_braced(&mut self, stmts: &[AstNode<'_>]) -> PrintResult {
        self.write("{");
        self.print_stmts(stmts)?;
        self.write("}");
        Ok(())
    }

    fn print_stmts(&mut self, stmts: &[AstNode<'_>]) -> PrintResult {
        let mut first = true;
        for stmt in stmts {
            if self.is_dropped(stmt) {
                continue;
            }
            if !first {
                self.write_newline();
            }
            self.print_node(stmt)?;
            first = false;
        }
        Ok(())
    }

    fn print_list(&mut self, nodes: &[AstNode<'_>], separator: &str) -> PrintResult {
        let mut first = true;
        for node in nodes {
            if self.is_dropped(node) {
                continue;
            }
            if !first {
                self.write(separator);
            }
            self.print_node(node)?;
            first = false;
        }
        Ok(())
    }

    fn is_dropped(&self, node: &AstNode<'_>) -> bool {
        matches!(node, AstNode::Comment(_)) && !self.options.emit_comments
    }

    fn print_delimited(&mut self, nodes: &[AstNode<'_>], separator: &str, open: &str, close: &str) -> PrintResult {
        self.write(open);
        self.print_list(nodes, separator)?;
        self.write(close);
        Ok(())
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    fn print_quoted(&mut self, marker: &str, value: &[u8]) {
        self.write(marker);
        self.write("\"");
        self.write_owned(quote_string_for_c(value));
        self.write("\"");
    }

    fn print_domain(&mut self, node: &Domain<'_>) -> PrintResult {
        match node.exprs {
            [] => Ok(()),
            // {?D} is written as the bare query ?D
            [query] if query.as_type_query().is_some() => self.print_node(query),
            exprs => self.print_delimited(exprs, ", ", "{", "}"),
        }
    }

    fn print_fn_call(&mut self, node: &FnCall<'_>) -> PrintResult {
        self.print_tight(node.callee)?;

        let reserved = node
            .callee
            .as_identifier()
            .is_some_and(|ident| is_reserved_callee(self.resolve(ident.name)));
        if reserved {
            // owned C, sync int
            let operand = node.actuals.first().ok_or(PrintError::UnhandledVariant {
                expected: "type operand",
                found: AstTag::FnCall,
            })?;
            self.write(" ");
            return self.print_node(&operand.value);
        }

        let (open, close) = if node.uses_square_brackets { ("[", "]") } else { ("(", ")") };
        self.write(open);
        for (i, actual) in node.actuals.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            if let Some(name) = actual.name {
                self.write_name(name);
                self.write(" = ");
            }
            self.print_node(&actual.value)?;
        }
        self.write(close);
        Ok(())
    }

    fn print_op_call(&mut self, node: &OpCall<'_>) -> PrintResult {
        let op = Operator::of(self.resolve(node.op), node.actuals.len());
        if node.is_unary_op() {
            let operand = &node.actuals[0];
            if op.postfix {
                self.print_operand(op, operand, false)?;
                self.write(op.symbol);
            } else {
                self.write(op.symbol);
                self.print_operand(op, operand, true)?;
            }
            return Ok(());
        }
        if !node.is_binary_op() {
            return Err(PrintError::UnhandledVariant {
                expected: "unary or binary operator call",
                found: AstTag::OpCall,
            });
        }

        self.print_operand(op, &node.actuals[0], false)?;
        if want_spaces(op.symbol, self.printing_type) {
            self.write(" ");
            self.write(op.symbol);
            self.write(" ");
        } else {
            self.write(op.symbol);
        }
        self.print_operand(op, &node.actuals[1], true)
    }

    /// Print an operand of `outer`, parenthesized when it is an operator
    /// call that would otherwise regroup, or an expression that binds
    /// looser than any operator.
    fn print_operand(&mut self, outer: Operator<'_>, operand: &AstNode<'_>, is_rhs: bool) -> PrintResult {
        let parens = match operand.as_op_call() {
            Some(inner) => {
                let inner = Operator::of(self.resolve(inner.op), inner.actuals.len());
                needs_parens(
                    outer.symbol,
                    inner.symbol,
                    outer.unary,
                    outer.postfix,
                    inner.unary,
                    inner.postfix,
                    is_rhs,
                )
            }
            None => binds_loosely(operand),
        };
        self.print_grouped(operand, parens)
    }

    /// Print a receiver, callee or reduction iterand. These bind tighter
    /// than every operator: `(a + b).size`, `+ reduce (A + B)`.
    fn print_tight(&mut self, node: &AstNode<'_>) -> PrintResult {
        let parens = node.as_op_call().is_some() || binds_loosely(node);
        self.print_grouped(node, parens)
    }

    fn print_grouped(&mut self, node: &AstNode<'_>, parens: bool) -> PrintResult {
        if !parens {
            return self.print_node(node);
        }
        self.write("(");
        self.print_node(node)?;
        self.write(")");
        Ok(())
    }

    fn print_prim_call(&mut self, node: &PrimCall<'_>) -> PrintResult {
        self.write("__primitive(");
        self.print_quoted("", node.prim.name().as_bytes());
        for actual in node.actuals {
            self.write(", ");
            self.print_node(actual)?;
        }
        self.write(")");
        Ok(())
    }

    fn print_let(&mut self, node: &Let<'_>) -> PrintResult {
        self.write("let ");
        for (i, decl) in node.decls.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.print_name_type_init(decl.name, decl.type_expression, decl.init_expression)?;
        }
        self.write(" in ");
        self.print_node(node.expression)
    }

    /// Print a type expression. Binary operators inside it are written
    /// without spaces (`2*int`).
    fn print_type(&mut self, node: &AstNode<'_>) -> PrintResult {
        let outer = std::mem::replace(&mut self.printing_type, true);
        let result = self.print_node(node);
        self.printing_type = outer;
        result
    }

    // ========================================================================
    // Loops, tasks and other block statements
    // ========================================================================

    fn print_loop_index(&mut self, index: Option<&AstNode<'_>>) -> PrintResult {
        if let Some(index) = index {
            self.print_node(index)?;
            self.write(" in ");
        }
        Ok(())
    }

    fn print_indexable_loop(&mut self, keyword: &str, node: &IndexableLoop<'_>) -> PrintResult {
        self.write(keyword);
        self.print_loop_index(node.index)?;
        self.print_node(node.iterand)?;
        if let Some(with) = node.with_clause {
            self.write(" ");
            self.print_with_clause(with)?;
        }
        self.write(" ");
        self.print_block_with_style(node.block_style, node.stmts, Some("do "))
    }

    fn print_bracket_loop(&mut self, node: &IndexableLoop<'_>) -> PrintResult {
        self.write("[");
        self.print_loop_index(node.index)?;
        self.print_node(node.iterand)?;
        if let Some(with) = node.with_clause {
            self.write(" ");
            self.print_with_clause(with)?;
        }
        self.write("]");
        if node.block_style != BlockStyle::Implicit || !node.stmts.is_empty() {
            self.write(" ");
            self.print_block_with_style(node.block_style, node.stmts, None)?;
        }
        Ok(())
    }

    fn print_optional_condition(&mut self, condition: Option<&AstNode<'_>>) -> PrintResult {
        if let Some(condition) = condition {
            self.print_node(condition)?;
            self.write(" ");
        }
        Ok(())
    }

    fn print_jump_target(&mut self, target: Option<&Identifier>) {
        if let Some(target) = target {
            self.write(" ");
            self.write_name(target.name);
        }
    }

    fn print_with_clause(&mut self, node: &WithClause<'_>) -> PrintResult {
        self.write("with ");
        self.print_delimited(node.exprs, ", ", "(", ")")
    }

    fn print_when(&mut self, node: &When<'_>) -> PrintResult {
        if node.is_otherwise() {
            self.write("otherwise ");
        } else {
            self.write("when ");
            self.print_list(node.case_exprs, ", ")?;
            self.write(" ");
        }
        self.print_block_with_style(node.block_style, node.stmts, Some("do "))
    }

    fn print_try(&mut self, node: &Try<'_>) -> PrintResult {
        self.write(if node.is_try_bang { "try! " } else { "try " });
        if node.is_expression_level {
            // try! f(), the single statement is the guarded expression
            return self.print_stmts(node.stmts);
        }
        self.print_braced(node.stmts)?;
        for handler in node.handlers {
            self.write(" ");
            self.print_catch(handler)?;
        }
        Ok(())
    }

    fn print_catch(&mut self, node: &Catch<'_>) -> PrintResult {
        self.write("catch ");
        if let Some(error) = node.error {
            if node.has_parens_around_error {
                self.write("(");
            }
            self.write_name(error.name);
            if let Some(type_expression) = error.type_expression {
                self.write(" : ");
                self.print_type(type_expression)?;
            }
            if node.has_parens_around_error {
                self.write(")");
            }
            self.write(" ");
        }
        self.print_braced(node.stmts)
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    fn print_pragmas(&mut self, attributes: Option<&Attributes<'_>>) {
        let Some(attributes) = attributes else {
            return;
        };
        for pragma in attributes.pragmas {
            self.write("pragma \"");
            self.write(pragma.name());
            self.write("\" ");
        }
    }

    fn print_linkage(&mut self, linkage: Linkage, linkage_name: Option<&AstNode<'_>>) -> PrintResult {
        if linkage == Linkage::Default {
            return Ok(());
        }
        self.write(linkage_keyword(linkage)?);
        self.write(" ");
        if let Some(name) = linkage_name {
            self.print_node(name)?;
            self.write(" ");
        }
        Ok(())
    }

    fn print_visibility(&mut self, visibility: Visibility) -> PrintResult {
        if visibility != Visibility::Default {
            self.write(visibility_keyword(visibility)?);
            self.write(" ");
        }
        Ok(())
    }

    /// Intent keyword followed by a space, nothing for the default intent.
    fn print_intent(&mut self, intent: Intent) -> PrintResult {
        if intent != Intent::Default {
            self.write(intent_keyword(intent)?);
            self.write(" ");
        }
        Ok(())
    }

    fn print_name_type_init(
        &mut self,
        name: InternedString,
        type_expression: Option<&AstNode<'_>>,
        init_expression: Option<&AstNode<'_>>,
    ) -> PrintResult {
        self.write_name(name);
        if let Some(type_expression) = type_expression {
            self.write(": ");
            self.print_type(type_expression)?;
        }
        if let Some(init_expression) = init_expression {
            self.write(" = ");
            self.print_node(init_expression)?;
        }
        Ok(())
    }

    fn print_variable(&mut self, node: &Variable<'_>) -> PrintResult {
        self.print_pragmas(node.attributes);
        if node.is_config {
            self.write("config ");
        } else {
            self.print_linkage(node.linkage, node.linkage_name)?;
        }
        // Loop indices carry the default kind and have no keyword.
        self.print_intent(node.kind)?;
        self.print_name_type_init(node.name, node.type_expression, node.init_expression)
    }

    fn print_formal(&mut self, node: &Formal<'_>) -> PrintResult {
        self.print_pragmas(node.attributes);
        self.print_intent(node.intent)?;
        self.print_name_type_init(node.name, node.type_expression, node.init_expression)
    }

    fn print_enum_element(&mut self, node: &EnumElement<'_>) -> PrintResult {
        self.write_name(node.name);
        if let Some(init_expression) = node.init_expression {
            self.write(" = ");
            self.print_node(init_expression)?;
        }
        Ok(())
    }

    fn print_tuple_decl(&mut self, node: &TupleDecl<'_>) -> PrintResult {
        self.print_intent(node.intent)?;
        self.print_tuple_contents(node)?;
        if let Some(type_expression) = node.type_expression {
            self.write(": ");
            self.print_type(type_expression)?;
        }
        if let Some(init_expression) = node.init_expression {
            self.write(" = ");
            self.print_node(init_expression)?;
        }
        Ok(())
    }

    /// `(a, (b, c: int))`, element intents are implied by the outer one.
    fn print_tuple_contents(&mut self, node: &TupleDecl<'_>) -> PrintResult {
        self.write("(");
        for (i, decl) in node.decls.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.print_declared_component(decl)?;
        }
        if node.decls.len() == 1 {
            self.write(",");
        }
        self.write(")");
        Ok(())
    }

    /// One component of a tuple or multi-variable declaration, printed
    /// without its own kind keyword.
    fn print_declared_component(&mut self, decl: &AstNode<'_>) -> PrintResult {
        match decl {
            AstNode::TupleDecl(inner) => {
                self.print_tuple_contents(inner)?;
                if let Some(type_expression) = inner.type_expression {
                    self.write(": ");
                    self.print_type(type_expression)?;
                }
                if let Some(init_expression) = inner.init_expression {
                    self.write(" = ");
                    self.print_node(init_expression)?;
                }
                Ok(())
            }
            AstNode::Variable(v) => self.print_name_type_init(v.name, v.type_expression, v.init_expression),
            AstNode::Formal(f) => self.print_name_type_init(f.name, f.type_expression, f.init_expression),
            AstNode::VarArgFormal(f) => self.print_name_type_init(f.name, f.type_expression, f.init_expression),
            AstNode::TaskVar(t) => self.print_name_type_init(t.name, t.type_expression, t.init_expression),
            other => Err(PrintError::UnhandledVariant {
                expected: "variable-like declaration",
                found: other.tag(),
            }),
        }
    }

    /// `var a, b: int = 1, (c, d) = t`, all components share the first
    /// declaration's kind.
    fn print_multi_decl(&mut self, node: &MultiDecl<'_>) -> PrintResult {
        let kind = match node.decls.first() {
            Some(AstNode::Variable(v)) => v.kind,
            Some(AstNode::TupleDecl(t)) => t.intent,
            Some(other) => {
                return Err(PrintError::UnhandledVariant {
                    expected: "variable or tuple declaration",
                    found: other.tag(),
                })
            }
            None => {
                return Err(PrintError::UnhandledVariant {
                    expected: "at least one declaration",
                    found: AstTag::MultiDecl,
                })
            }
        };
        if let Some(AstNode::Variable(first)) = node.decls.first() {
            self.print_pragmas(first.attributes);
            if first.is_config {
                self.write("config ");
            } else {
                self.print_linkage(first.linkage, first.linkage_name)?;
            }
        }
        self.write(intent_keyword(kind)?);
        self.write(" ");
        for (i, decl) in node.decls.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.print_declared_component(decl)?;
        }
        Ok(())
    }

    fn print_visibility_stmt(
        &mut self,
        visibility: Visibility,
        keyword: &str,
        clauses: &[VisibilityClause<'_>],
    ) -> PrintResult {
        self.print_visibility(visibility)?;
        self.write(keyword);
        for (i, clause) in clauses.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.print_visibility_clause(clause)?;
        }
        Ok(())
    }

    fn print_visibility_clause(&mut self, node: &VisibilityClause<'_>) -> PrintResult {
        self.print_node(node.symbol)?;
        match (node.limitation_kind, node.limitations) {
            (LimitationKind::Braces, limitations) => {
                self.write(".");
                self.print_delimited(limitations, ", ", "{", "}")
            }
            (LimitationKind::None, []) => Ok(()),
            (LimitationKind::None, [limitation]) => {
                // use M.x
                if limitation.as_identifier().is_none() {
                    return Err(PrintError::UnhandledVariant {
                        expected: "identifier",
                        found: limitation.tag(),
                    });
                }
                self.write(".");
                self.print_node(limitation)
            }
            (kind, limitations) => {
                let keyword = limitation_keyword(kind)?;
                self.write(" ");
                self.write(keyword);
                if !limitations.is_empty() {
                    self.write(" ");
                    self.print_list(limitations, ", ")?;
                }
                Ok(())
            }
        }
    }

    // ========================================================================
    // Functions
    // ========================================================================

    fn print_function(&mut self, node: &Function<'_>) -> PrintResult {
        self.print_pragmas(node.attributes);
        self.print_linkage(node.linkage, node.linkage_name)?;
        self.print_visibility(node.visibility)?;
        if node.is_override() {
            self.write("override ");
        } else if node.is_inline() {
            self.write("inline ");
        }
        self.write(function_kind_keyword(node.kind));
        self.write(" ");
        self.print_function_header(node)?;

        if node.return_intent != Intent::Default {
            self.write(" ");
            self.write(intent_keyword(node.return_intent)?);
        }
        if let Some(return_type) = node.return_type {
            self.write(": ");
            self.print_type(return_type)?;
        }
        if let Some(where_clause) = node.where_clause {
            self.write(" where ");
            self.print_node(where_clause)?;
        }
        if node.throws() {
            self.write(" throws");
        }
        match node.body {
            Some(stmts) => {
                self.write(" ");
                self.print_braced(stmts)
            }
            None => {
                self.write(";");
                Ok(())
            }
        }
    }

    /// `[this-intent] [receiver.]name(formals)`, shared by full functions
    /// and signatures.
    fn print_function_header(&mut self, node: &Function<'_>) -> PrintResult {
        if let Some(this_formal) = node.this_formal {
            self.print_intent(this_formal.intent)?;

            if !node.is_primary_method() {
                let receiver = this_formal.type_expression.ok_or(PrintError::UnhandledVariant {
                    expected: "receiver type expression",
                    found: AstTag::Formal,
                })?;
                if receiver.as_identifier().is_some() {
                    self.print_node(receiver)?;
                } else {
                    self.write("(");
                    self.print_type(receiver)?;
                    self.write(")");
                }
                self.write(".");
            }
        }

        let name = self.resolve(node.name);
        if node.kind == FunctionKind::Operator && name == "=" {
            self.write(" = ");
        } else {
            self.write(name);
        }

        if node.formals.is_empty() && node.is_parenless() {
            return Ok(());
        }
        self.print_delimited(node.formals, ", ", "(", ")")
    }

    // ========================================================================
    // Output helpers
    // ========================================================================

    fn write(&mut self, s: &str) {
        self.output.push_str(s);
    }

    fn write_owned(&mut self, s: String) {
        self.output.push_str(&s);
    }

    fn write_name(&mut self, name: InternedString) {
        let text = self.resolve(name);
        self.output.push_str(text);
    }

    fn write_newline(&mut self) {
        self.output.push_str(&self.options.new_line);
    }
}

/// Expressions with no operator precedence of their own that extend as far
/// right as possible when re-parsed.
fn binds_loosely(node: &AstNode<'_>) -> bool {
    matches!(
        node,
        AstNode::Conditional(_) | AstNode::Let(_) | AstNode::Reduce(_) | AstNode::Scan(_) | AstNode::Range(_)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chpl_core::CompilerArena;
    use chpl_nodebuilder::NodeBuilder;

    #[test]
    fn test_printer_is_reusable() {
        let arena = CompilerArena::new();
        let interner = StringInterner::new();
        let b = NodeBuilder::new(&arena, &interner);
        let mut printer = Printer::new(&interner);
        assert_eq!(printer.print(&b.ident("x")).unwrap(), "x");
        assert_eq!(printer.print(&b.int("42")).unwrap(), "42");
    }

    #[test]
    fn test_error_leaves_no_partial_text() {
        let arena = CompilerArena::new();
        let interner = StringInterner::new();
        let b = NodeBuilder::new(&arena, &interner);
        let mut printer = Printer::new(&interner);
        let bad = b.block(BlockStyle::Explicit, vec![b.ident("ok"), b.task_var(Intent::Default, "x")]);
        assert!(printer.print(&bad).is_err());
        assert_eq!(printer.print(&b.ident("y")).unwrap(), "y");
    }

    #[test]
    fn test_type_context_restored() {
        let arena = CompilerArena::new();
        let interner = StringInterner::new();
        let b = NodeBuilder::new(&arena, &interner);
        let tuple_type = b.binary("*", b.int("2"), b.ident("int"));
        let var = b.variable(Intent::Var, "x", Some(tuple_type), Some(b.binary("+", b.int("1"), b.int("2"))));
        let mut printer = Printer::new(&interner);
        assert_eq!(printer.print(&AstNode::Variable(var)).unwrap(), "var x: 2*int = 1 + 2");
    }

    #[test]
    fn test_new_line_option() {
        let arena = CompilerArena::new();
        let interner = StringInterner::new();
        let b = NodeBuilder::new(&arena, &interner);
        let options = PrinterOptions {
            new_line: "; ".to_string(),
            ..PrinterOptions::default()
        };
        let mut printer = Printer::with_options(&interner, options);
        let block = b.block(BlockStyle::Explicit, vec![b.ident("a"), b.ident("b")]);
        assert_eq!(printer.print(&block).unwrap(), "{a; b}");
    }
}

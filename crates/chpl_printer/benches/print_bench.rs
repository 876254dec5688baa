use chpl_ast::node::*;
use chpl_ast::types::*;
use chpl_core::{CompilerArena, StringInterner};
use chpl_nodebuilder::NodeBuilder;
use chpl_printer::Printer;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// A module with `count` procs of the form
///
/// ```chapel
/// proc fN(x: int, ref y: real): int {
///   for i in 1..x do y += i ** 2 - (x - i);
///   return x * (y: int);
/// }
/// ```
fn build_module<'a>(b: &NodeBuilder<'a>, count: usize) -> AstNode<'a> {
    let mut stmts = Vec::with_capacity(count);
    for n in 0..count {
        let square = b.binary("**", b.ident("i"), b.int("2"));
        let diff = b.binary("-", b.ident("x"), b.ident("i"));
        let body = b.binary("+=", b.ident("y"), b.binary("-", square, diff));
        let loop_stmt = AstNode::For(For {
            data: b.data(),
            index: b.opt(Some(b.index_var("i"))),
            iterand: b.alloc(b.range(RangeOpKind::Default, Some(b.int("1")), Some(b.ident("x")))),
            is_param: false,
            block_style: BlockStyle::Implicit,
            stmts: b.list(vec![body]),
        });
        let cast = b.binary(":", b.ident("y"), b.ident("int"));
        let ret = b.ret(Some(b.binary("*", b.ident("x"), cast)));

        let mut function = b.function(FunctionKind::Proc, &format!("f{n}"));
        function.formals = b.list(vec![
            AstNode::Formal(b.formal(Intent::Default, "x", Some(b.ident("int")), None)),
            AstNode::Formal(b.formal(Intent::Ref, "y", Some(b.ident("real")), None)),
        ]);
        function.return_type = b.opt(Some(b.ident("int")));
        function.body = Some(b.list(vec![loop_stmt, ret]));
        stmts.push(AstNode::Function(function));
    }
    AstNode::Module(Module {
        data: b.data(),
        visibility: Visibility::Default,
        kind: ModuleKind::Default,
        name: b.name("Bench"),
        stmts: b.list(stmts),
    })
}

fn bench_print_module(c: &mut Criterion) {
    let arena = CompilerArena::new();
    let interner = StringInterner::new();
    let builder = NodeBuilder::new(&arena, &interner);
    let module = build_module(&builder, 200);

    c.bench_function("print_module_200_procs", |b| {
        b.iter(|| {
            let mut printer = Printer::new(&interner);
            let text = printer.print(black_box(&module));
            black_box(text)
        });
    });
}

criterion_group!(benches, bench_print_module);
criterion_main!(benches);

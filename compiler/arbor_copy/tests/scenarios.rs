//! End-to-end copies of a whole source file.
//!
//! The tree below corresponds to:
//!
//! ```text
//! package geom
//!
//! import "fmt"
//!
//! type Point struct {
//!     X, Y int `json:"xy"`
//! }
//!
//! func (p *Point) Sum(xs ...int) (total int) {
//!     for _, x := range xs {
//!         total += x
//!     }
//!     switch t := p.(type) {
//!     case *Point:
//!         fmt.Println(t)
//!     default:
//!     }
//!     select {
//!     case v := <-ch:
//!         _ = v
//!     }
//!     if n := len(xs); n > 2 {
//!         go fmt.Println(p.X)
//!     } else {
//!         defer fmt.Println(xs[1:n])
//!     }
//!     return
//! }
//! ```

use std::cell::Cell;
use std::sync::Arc;

use arbor_copy::{deep_copy, init_tracing, Copier, CopyConfig, ResolutionPolicy};
use arbor_diagnostic::{DiagnosticQueue, ErrorCode, QueueConfig};
use arbor_ir::visitor::{walk_expr, HandleSet, Visitor};
use arbor_ir::{
    AssignOp, BasicLit, BinaryOp, BlockStmt, Decl, DeclKeyword, DeclKind, Expr, ExprKind, ExtNode,
    Field, FieldList, File, FuncType, Ident, LitKind, Node, ObjKind, Object, Scope, Spec,
    SpecKind, Span, Stmt, StmtKind, StringInterner, UnaryOp, P,
};
use pretty_assertions::assert_eq;

/// Builds nodes with increasing spans.
struct Builder {
    interner: StringInterner,
    at: Cell<u32>,
}

impl Builder {
    fn new() -> Self {
        Builder {
            interner: StringInterner::new(),
            at: Cell::new(0),
        }
    }

    fn span(&self) -> Span {
        let start = self.at.get();
        self.at.set(start + 2);
        Span::new(start, start + 1)
    }

    fn ident(&self, text: &str) -> P<Ident> {
        Ident::shared(self.interner.intern(text), self.span())
    }

    fn name(&self, text: &str) -> P<Expr> {
        Expr::ident(Ident::new(self.interner.intern(text), self.span()))
    }

    fn lit(&self, kind: LitKind, text: &str) -> P<Expr> {
        Expr::lit(BasicLit::new(kind, self.interner.intern(text), self.span()))
    }

    fn expr(&self, kind: ExprKind) -> P<Expr> {
        Expr::shared(kind, self.span())
    }

    fn stmt(&self, kind: StmtKind) -> P<Stmt> {
        Stmt::shared(kind, self.span())
    }

    fn block(&self, list: Vec<P<Stmt>>) -> P<BlockStmt> {
        Arc::new(BlockStmt::new(Some(list), self.span()))
    }

    fn fields(&self, list: Vec<P<Field>>) -> P<FieldList> {
        Arc::new(FieldList::new(Some(list), self.span()))
    }

    fn field(&self, names: &[&str], ty: P<Expr>) -> P<Field> {
        let names = names.iter().map(|n| self.ident(n)).collect::<Vec<_>>();
        Arc::new(Field {
            names: (!names.is_empty()).then_some(names),
            ty,
            tag: None,
            span: self.span(),
        })
    }

    fn call(&self, fun: P<Expr>, args: Vec<P<Expr>>) -> P<Expr> {
        self.expr(ExprKind::Call {
            fun,
            args: Some(args),
            ellipsis: None,
        })
    }

    fn println(&self, arg: P<Expr>) -> P<Expr> {
        let fmt = self.name("fmt");
        let fun = self.expr(ExprKind::Selector {
            x: fmt,
            sel: self.ident("Println"),
        });
        self.call(fun, vec![arg])
    }
}

fn import_decl(b: &Builder) -> P<Decl> {
    let path = Arc::new(BasicLit::new(LitKind::String, b.interner.intern("\"fmt\""), b.span()));
    let spec = Spec::shared(SpecKind::Import { name: None, path }, b.span());
    Decl::shared(
        DeclKind::Gen {
            tok: DeclKeyword::Import,
            grouped: false,
            specs: Some(vec![spec]),
        },
        b.span(),
    )
}

fn type_decl(b: &Builder) -> P<Decl> {
    let tag = Arc::new(BasicLit::new(
        LitKind::String,
        b.interner.intern("`json:\"xy\"`"),
        b.span(),
    ));
    let member = Arc::new(Field {
        names: Some(vec![b.ident("X"), b.ident("Y")]),
        ty: b.name("int"),
        tag: Some(tag),
        span: b.span(),
    });
    let ty = b.expr(ExprKind::StructType {
        fields: Some(b.fields(vec![member])),
        incomplete: false,
    });
    let spec = Spec::shared(
        SpecKind::Type {
            name: b.ident("Point"),
            type_params: None,
            alias: false,
            ty,
        },
        b.span(),
    );
    Decl::shared(
        DeclKind::Gen {
            tok: DeclKeyword::Type,
            grouped: false,
            specs: Some(vec![spec]),
        },
        b.span(),
    )
}

fn range_loop(b: &Builder) -> P<Stmt> {
    let add = b.stmt(StmtKind::Assign {
        lhs: Some(vec![b.name("total")]),
        tok: AssignOp::Compound(BinaryOp::Add),
        rhs: Some(vec![b.name("x")]),
    });
    b.stmt(StmtKind::Range {
        key: Some(b.name("_")),
        value: Some(b.name("x")),
        tok: Some(AssignOp::Define),
        x: b.name("xs"),
        body: b.block(vec![add]),
    })
}

fn type_switch(b: &Builder) -> P<Stmt> {
    let guard = b.expr(ExprKind::TypeAssert {
        x: b.name("p"),
        ty: None,
    });
    let assign = b.stmt(StmtKind::Assign {
        lhs: Some(vec![b.name("t")]),
        tok: AssignOp::Define,
        rhs: Some(vec![guard]),
    });
    let point = b.expr(ExprKind::Star { x: b.name("Point") });
    let print = b.stmt(StmtKind::Expr(b.println(b.name("t"))));
    let case = b.stmt(StmtKind::CaseClause {
        list: Some(vec![point]),
        body: Some(vec![print]),
    });
    let default = b.stmt(StmtKind::CaseClause {
        list: None,
        body: Some(vec![]),
    });
    b.stmt(StmtKind::TypeSwitch {
        init: None,
        assign,
        body: b.block(vec![case, default]),
    })
}

fn select(b: &Builder) -> P<Stmt> {
    let recv = b.expr(ExprKind::Unary {
        op: UnaryOp::Recv,
        x: b.name("ch"),
    });
    let comm = b.stmt(StmtKind::Assign {
        lhs: Some(vec![b.name("v")]),
        tok: AssignOp::Define,
        rhs: Some(vec![recv]),
    });
    let discard = b.stmt(StmtKind::Assign {
        lhs: Some(vec![b.name("_")]),
        tok: AssignOp::Assign,
        rhs: Some(vec![b.name("v")]),
    });
    let clause = b.stmt(StmtKind::CommClause {
        comm: Some(comm),
        body: Some(vec![discard]),
    });
    b.stmt(StmtKind::Select {
        body: b.block(vec![clause]),
    })
}

fn if_else(b: &Builder) -> P<Stmt> {
    let len = b.call(b.name("len"), vec![b.name("xs")]);
    let init = b.stmt(StmtKind::Assign {
        lhs: Some(vec![b.name("n")]),
        tok: AssignOp::Define,
        rhs: Some(vec![len]),
    });
    let cond = b.expr(ExprKind::Binary {
        x: b.name("n"),
        op: BinaryOp::Gt,
        y: b.lit(LitKind::Int, "2"),
    });
    let field = b.expr(ExprKind::Selector {
        x: b.name("p"),
        sel: b.ident("X"),
    });
    let go = b.stmt(StmtKind::Go {
        call: b.println(field),
    });
    let tail = b.expr(ExprKind::Slice {
        x: b.name("xs"),
        low: Some(b.lit(LitKind::Int, "1")),
        high: Some(b.name("n")),
        max: None,
        slice3: false,
    });
    let defer = b.stmt(StmtKind::Defer {
        call: b.println(tail),
    });
    b.stmt(StmtKind::If {
        init: Some(init),
        cond,
        body: b.block(vec![go]),
        else_branch: Some(b.stmt(StmtKind::Block(BlockStmt::new(
            Some(vec![defer]),
            b.span(),
        )))),
    })
}

fn method_decl(b: &Builder) -> P<Decl> {
    let recv_ty = b.expr(ExprKind::Star { x: b.name("Point") });
    let variadic = b.expr(ExprKind::Ellipsis {
        elt: Some(b.name("int")),
    });
    let ty = Arc::new(FuncType {
        type_params: None,
        params: Some(b.fields(vec![b.field(&["xs"], variadic)])),
        results: Some(b.fields(vec![b.field(&["total"], b.name("int"))])),
        span: b.span(),
    });
    let body = b.block(vec![
        range_loop(b),
        type_switch(b),
        select(b),
        if_else(b),
        b.stmt(StmtKind::Return { results: None }),
    ]);
    Decl::shared(
        DeclKind::Func {
            recv: Some(b.fields(vec![b.field(&["p"], recv_ty)])),
            name: b.ident("Sum"),
            ty,
            body: Some(body),
        },
        b.span(),
    )
}

fn source_file(b: &Builder) -> P<File> {
    Arc::new(File {
        package: b.ident("geom"),
        decls: Some(vec![import_decl(b), type_decl(b), method_decl(b)]),
        unresolved: Some(vec![b.ident("ch"), b.ident("len")]),
        span: b.span(),
    })
}

#[derive(Default)]
struct KindCounter {
    selectors: usize,
    slices: usize,
}

impl<'ast> Visitor<'ast> for KindCounter {
    fn visit_expr(&mut self, expr: &'ast P<Expr>) {
        match expr.kind {
            ExprKind::Selector { .. } => self.selectors += 1,
            ExprKind::Slice { .. } => self.slices += 1,
            _ => {}
        }
        walk_expr(self, expr);
    }
}

#[test]
fn test_deep_copy_whole_file() {
    init_tracing();
    let b = Builder::new();
    let src = Node::File(source_file(&b));

    let copy = deep_copy(&src);

    assert_eq!(copy, src);
    assert!(HandleSet::collect(&copy).is_disjoint(&HandleSet::collect(&src)));
    assert_eq!(
        HandleSet::collect(&copy).len(),
        HandleSet::collect(&src).len()
    );

    let mut counter = KindCounter::default();
    arbor_ir::visitor::walk_node(&mut counter, &copy);
    assert_eq!(counter.selectors, 4);
    assert_eq!(counter.slices, 1);
}

#[test]
fn test_copy_of_copy_matches_copy() {
    let b = Builder::new();
    let src = Node::File(source_file(&b));

    let once = deep_copy(&src);
    let twice = deep_copy(&once);
    assert_eq!(twice, once);
    assert!(!twice.ptr_eq(&once));
}

#[test]
fn test_copy_each_subtree_through_copy_node() {
    let b = Builder::new();
    let file = source_file(&b);
    let Some(decls) = file.decls.as_ref() else {
        panic!("file has declarations");
    };

    let mut queue = DiagnosticQueue::new();
    let mut copier = Copier::new(CopyConfig::default(), &mut queue);
    for decl in decls {
        let src = Node::Decl(Arc::clone(decl));
        let copy = copier.copy_node(Some(&src));
        assert_eq!(copy.as_ref(), Some(&src));
        assert!(copy.is_some_and(|copy| !copy.ptr_eq(&src)));
    }
    assert!(copier.stats().copied > 0);
    assert_eq!(copier.stats().passthrough, 0);
    assert!(queue.is_empty());
}

#[test]
fn test_shared_ext_node_is_reported_once_per_edge() {
    let b = Builder::new();
    let unknown = Expr::shared(ExprKind::Ext(ExtNode::new("QuoteExpr", 1_u8)), Span::new(500, 510));
    let stmt = Stmt::shared(
        StmtKind::Assign {
            lhs: Some(vec![Arc::clone(&unknown)]),
            tok: AssignOp::Assign,
            rhs: Some(vec![Arc::clone(&unknown), b.name("y")]),
        },
        Span::new(490, 520),
    );

    let mut queue = DiagnosticQueue::with_config(QueueConfig::unlimited());
    let copy = Copier::new(CopyConfig::default(), &mut queue).copy_stmt(&stmt);
    assert_eq!(copy, stmt);
    assert_eq!(queue.len(), 2);

    let mut deduped = DiagnosticQueue::new();
    Copier::new(CopyConfig::default(), &mut deduped).copy_stmt(&stmt);
    assert_eq!(deduped.len(), 1);
    assert_eq!(deduped.dropped(), 1);

    let flushed = deduped.flush();
    assert_eq!(flushed[0].code, ErrorCode::W0001);
    assert_eq!(flushed[0].primary_span(), Some(Span::new(500, 510)));
    assert!(deduped.is_empty());
}

#[test]
fn test_rebind_file_against_new_scope() {
    let b = Builder::new();
    let point = b.interner.intern("Point");
    let old = Arc::new(Object::new(ObjKind::Type, point, Span::new(0, 5)));

    let src = Spec::shared(
        SpecKind::Value {
            names: Some(vec![b.ident("origin")]),
            ty: Some(Expr::ident(Ident::bound(point, b.span(), &old))),
            values: None,
        },
        b.span(),
    );

    let mut scope = Scope::new();
    scope.insert(Object::new(ObjKind::Type, point, Span::new(100, 105)));
    let config = CopyConfig::default().with_resolutions(ResolutionPolicy::Rebind);
    let mut queue = DiagnosticQueue::new();
    let copy = Copier::new(config, &mut queue)
        .with_resolver(&scope)
        .copy_spec(&src);

    let SpecKind::Value { ty: Some(ty), .. } = &copy.kind else {
        panic!("expected typed value spec");
    };
    let ExprKind::Ident(ident) = &ty.kind else {
        panic!("expected identifier type");
    };
    let resolved = ident.resolved();
    assert!(resolved.is_some_and(|obj| obj.decl == Span::new(100, 105)));
    assert!(queue.is_empty());
    assert_eq!(copy, src);
}

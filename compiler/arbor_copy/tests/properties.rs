//! Property-based tests for the copy engine.
//!
//! Generated expression and statement trees are copied and checked for:
//! 1. Structural equality with the source
//! 2. No handle shared with the source
//! 3. Idempotence: copy(copy(x)) == copy(x)

#![allow(
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use std::sync::Arc;

use arbor_copy::{Copier, CopyConfig, LiteralPolicy};
use arbor_diagnostic::Diagnostic;
use arbor_ir::visitor::HandleSet;
use arbor_ir::{
    AssignOp, BasicLit, BinaryOp, BlockStmt, ChanDir, Expr, ExprKind, Ident, LitKind, Name, Node,
    Span, Stmt, StmtKind, UnaryOp, P,
};
use proptest::prelude::*;

// -- Strategies --

fn arb_span() -> impl Strategy<Value = Span> {
    (0u32..1000, 0u32..50).prop_map(|(start, len)| Span::new(start, start + len))
}

fn arb_name() -> impl Strategy<Value = Name> {
    (0u32..16, 0u32..64).prop_map(|(shard, local)| Name::new(shard, local))
}

fn arb_binop() -> impl Strategy<Value = BinaryOp> {
    prop_oneof![
        Just(BinaryOp::Add),
        Just(BinaryOp::Sub),
        Just(BinaryOp::Mul),
        Just(BinaryOp::LogAnd),
        Just(BinaryOp::Eq),
        Just(BinaryOp::Shl),
    ]
}

fn arb_unop() -> impl Strategy<Value = UnaryOp> {
    prop_oneof![
        Just(UnaryOp::Neg),
        Just(UnaryOp::Not),
        Just(UnaryOp::Addr),
        Just(UnaryOp::Recv),
    ]
}

fn arb_chan_dir() -> impl Strategy<Value = ChanDir> {
    prop_oneof![
        Just(ChanDir::Both),
        Just(ChanDir::Send),
        Just(ChanDir::Recv),
    ]
}

fn arb_leaf() -> impl Strategy<Value = P<Expr>> {
    prop_oneof![
        (arb_name(), arb_span()).prop_map(|(name, span)| Expr::ident(Ident::new(name, span))),
        (arb_name(), arb_span())
            .prop_map(|(value, span)| Expr::lit(BasicLit::new(LitKind::Int, value, span))),
        arb_span().prop_map(|span| Expr::shared(ExprKind::Bad, span)),
    ]
}

fn arb_seq<T: std::fmt::Debug>(
    elem: impl Strategy<Value = P<T>>,
) -> impl Strategy<Value = Option<Vec<P<T>>>> {
    prop::option::of(prop::collection::vec(elem, 0..4))
}

fn arb_expr() -> impl Strategy<Value = P<Expr>> {
    arb_leaf().prop_recursive(6, 64, 4, |inner| {
        prop_oneof![
            (inner.clone(), arb_binop(), inner.clone(), arb_span())
                .prop_map(|(x, op, y, span)| Expr::shared(ExprKind::Binary { x, op, y }, span)),
            (arb_unop(), inner.clone(), arb_span())
                .prop_map(|(op, x, span)| Expr::shared(ExprKind::Unary { op, x }, span)),
            (inner.clone(), arb_span())
                .prop_map(|(x, span)| Expr::shared(ExprKind::Paren { x }, span)),
            (inner.clone(), arb_seq(inner.clone()), any::<bool>(), arb_span()).prop_map(
                |(fun, args, dots, span)| {
                    let ellipsis = dots.then_some(span);
                    Expr::shared(
                        ExprKind::Call {
                            fun,
                            args,
                            ellipsis,
                        },
                        span,
                    )
                }
            ),
            (inner.clone(), inner.clone(), arb_span())
                .prop_map(|(x, index, span)| Expr::shared(ExprKind::Index { x, index }, span)),
            (
                inner.clone(),
                prop::option::of(inner.clone()),
                prop::option::of(inner.clone()),
                prop::option::of(inner.clone()),
                arb_span(),
            )
                .prop_map(|(x, low, high, max, span)| {
                    let slice3 = max.is_some();
                    Expr::shared(
                        ExprKind::Slice {
                            x,
                            low,
                            high,
                            max,
                            slice3,
                        },
                        span,
                    )
                }),
            (inner.clone(), arb_name(), arb_span()).prop_map(|(x, sel, span)| {
                let sel = Ident::shared(sel, span);
                Expr::shared(ExprKind::Selector { x, sel }, span)
            }),
            (prop::option::of(inner.clone()), arb_seq(inner.clone()), arb_span()).prop_map(
                |(ty, elts, span)| Expr::shared(
                    ExprKind::CompositeLit {
                        ty,
                        elts,
                        incomplete: false,
                    },
                    span
                )
            ),
            prop_oneof![
                (inner.clone(), inner.clone(), arb_span()).prop_map(|(key, value, span)| {
                    Expr::shared(ExprKind::MapType { key, value }, span)
                }),
                (prop::option::of(inner.clone()), inner.clone(), arb_span()).prop_map(
                    |(len, elt, span)| Expr::shared(ExprKind::ArrayType { len, elt }, span)
                ),
                (arb_chan_dir(), inner.clone(), arb_span()).prop_map(|(dir, value, span)| {
                    Expr::shared(ExprKind::ChanType { dir, value }, span)
                }),
            ],
            (inner.clone(), inner, arb_span()).prop_map(|(key, value, span)| Expr::shared(
                ExprKind::KeyValue { key, value },
                span
            )),
        ]
    })
}

fn arb_stmt() -> impl Strategy<Value = P<Stmt>> {
    let leaf = prop_oneof![
        (arb_expr(), arb_span()).prop_map(|(x, span)| Stmt::shared(StmtKind::Expr(x), span)),
        (arb_seq(arb_expr()), arb_span())
            .prop_map(|(results, span)| Stmt::shared(StmtKind::Return { results }, span)),
        (arb_seq(arb_expr()), arb_seq(arb_expr()), arb_span()).prop_map(|(lhs, rhs, span)| {
            Stmt::shared(
                StmtKind::Assign {
                    lhs,
                    tok: AssignOp::Assign,
                    rhs,
                },
                span,
            )
        }),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            (arb_seq(inner.clone()), arb_span()).prop_map(|(list, span)| Stmt::shared(
                StmtKind::Block(BlockStmt::new(list, span)),
                span
            )),
            (
                prop::option::of(inner.clone()),
                arb_expr(),
                arb_seq(inner.clone()),
                prop::option::of(inner),
                arb_span(),
            )
                .prop_map(|(init, cond, body, else_branch, span)| Stmt::shared(
                    StmtKind::If {
                        init,
                        cond,
                        body: Arc::new(BlockStmt::new(body, span)),
                        else_branch,
                    },
                    span
                )),
        ]
    })
}

fn copy(config: CopyConfig, node: &Node) -> (Node, usize) {
    let mut diags: Vec<Diagnostic> = Vec::new();
    let mut copier = Copier::new(config, &mut diags);
    let copied = copier.copy(node);
    (copied, copier.stats().copied)
}

// -- Properties --

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        max_shrink_iters: 500,
        ..ProptestConfig::default()
    })]

    #[test]
    fn copy_preserves_expr_structure(expr in arb_expr()) {
        let src = Node::Expr(expr);
        let (copied, _) = copy(CopyConfig::default(), &src);
        prop_assert_eq!(&copied, &src);
    }

    #[test]
    fn copy_shares_no_expr_handles(expr in arb_expr()) {
        let src = Node::Expr(expr);
        let (copied, count) = copy(CopyConfig::default(), &src);
        let copied_handles = HandleSet::collect(&copied);
        prop_assert!(copied_handles.is_disjoint(&HandleSet::collect(&src)));
        prop_assert_eq!(copied_handles.len(), count);
    }

    #[test]
    fn copy_is_idempotent(stmt in arb_stmt()) {
        let src = Node::Stmt(stmt);
        let (once, _) = copy(CopyConfig::default(), &src);
        let (twice, _) = copy(CopyConfig::default(), &once);
        prop_assert_eq!(&twice, &once);
        prop_assert!(!twice.ptr_eq(&once));
    }

    #[test]
    fn copy_preserves_stmt_structure(stmt in arb_stmt()) {
        let src = Node::Stmt(stmt);
        let (copied, _) = copy(CopyConfig::default(), &src);
        prop_assert_eq!(&copied, &src);
        prop_assert!(HandleSet::collect(&copied).is_disjoint(&HandleSet::collect(&src)));
    }

    #[test]
    fn shared_literals_are_the_only_shared_handles(expr in arb_expr()) {
        let src = Node::Expr(expr);
        let mut diags: Vec<Diagnostic> = Vec::new();
        let config = CopyConfig::default().with_literals(LiteralPolicy::Share);
        let mut copier = Copier::new(config, &mut diags);
        let copied = copier.copy(&src);

        prop_assert_eq!(&copied, &src);
        let shared = HandleSet::collect(&copied).shared_with(&HandleSet::collect(&src));
        prop_assert!(shared <= copier.stats().shared_literals);
    }
}

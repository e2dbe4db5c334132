//! Expression and type-expression copying.

use std::sync::Arc;

use arbor_ir::{Expr, ExprKind, FuncType, Seq, P};

use super::Copier;
use crate::stack::ensure_sufficient_stack;
use crate::LiteralPolicy;

impl Copier<'_> {
    pub fn copy_expr(&mut self, expr: &P<Expr>) -> P<Expr> {
        ensure_sufficient_stack(self.config.stack, || self.copy_expr_inner(expr))
    }

    fn copy_expr_inner(&mut self, expr: &P<Expr>) -> P<Expr> {
        let kind = match &expr.kind {
            ExprKind::Ext(ext) => return self.passthrough(expr, ext.kind, expr.span),

            ExprKind::BasicLit(_) if self.config.literals == LiteralPolicy::Share => {
                self.stats.shared_literals += 1;
                return Arc::clone(expr);
            }

            ExprKind::Bad => ExprKind::Bad,

            ExprKind::Ident(ident) => ExprKind::Ident(self.copy_ident_value(ident)),

            ExprKind::BasicLit(lit) => ExprKind::BasicLit(*lit),

            ExprKind::Ellipsis { elt } => ExprKind::Ellipsis {
                elt: self.copy_opt_expr(elt.as_ref()),
            },

            ExprKind::FuncLit { ty, body } => ExprKind::FuncLit {
                ty: self.copy_func_type(ty),
                body: self.copy_block(body),
            },

            ExprKind::CompositeLit {
                ty,
                elts,
                incomplete,
            } => ExprKind::CompositeLit {
                ty: self.copy_opt_expr(ty.as_ref()),
                elts: self.copy_exprs(elts),
                incomplete: *incomplete,
            },

            ExprKind::Paren { x } => ExprKind::Paren {
                x: self.copy_expr(x),
            },

            ExprKind::Selector { x, sel } => ExprKind::Selector {
                x: self.copy_expr(x),
                sel: self.copy_ident(sel),
            },

            ExprKind::Index { x, index } => ExprKind::Index {
                x: self.copy_expr(x),
                index: self.copy_expr(index),
            },

            ExprKind::IndexList { x, indices } => ExprKind::IndexList {
                x: self.copy_expr(x),
                indices: self.copy_exprs(indices),
            },

            ExprKind::Slice {
                x,
                low,
                high,
                max,
                slice3,
            } => ExprKind::Slice {
                x: self.copy_expr(x),
                low: self.copy_opt_expr(low.as_ref()),
                high: self.copy_opt_expr(high.as_ref()),
                max: self.copy_opt_expr(max.as_ref()),
                slice3: *slice3,
            },

            ExprKind::TypeAssert { x, ty } => ExprKind::TypeAssert {
                x: self.copy_expr(x),
                ty: self.copy_opt_expr(ty.as_ref()),
            },

            ExprKind::Call {
                fun,
                args,
                ellipsis,
            } => ExprKind::Call {
                fun: self.copy_expr(fun),
                args: self.copy_exprs(args),
                ellipsis: *ellipsis,
            },

            ExprKind::Star { x } => ExprKind::Star {
                x: self.copy_expr(x),
            },

            ExprKind::Unary { op, x } => ExprKind::Unary {
                op: *op,
                x: self.copy_expr(x),
            },

            ExprKind::Binary { x, op, y } => ExprKind::Binary {
                x: self.copy_expr(x),
                op: *op,
                y: self.copy_expr(y),
            },

            ExprKind::KeyValue { key, value } => ExprKind::KeyValue {
                key: self.copy_expr(key),
                value: self.copy_expr(value),
            },

            ExprKind::ArrayType { len, elt } => ExprKind::ArrayType {
                len: self.copy_opt_expr(len.as_ref()),
                elt: self.copy_expr(elt),
            },

            ExprKind::StructType { fields, incomplete } => ExprKind::StructType {
                fields: self.copy_opt_fields(fields.as_ref()),
                incomplete: *incomplete,
            },

            ExprKind::FuncType(ty) => ExprKind::FuncType(self.copy_func_type_value(ty)),

            ExprKind::InterfaceType {
                methods,
                incomplete,
            } => ExprKind::InterfaceType {
                methods: self.copy_opt_fields(methods.as_ref()),
                incomplete: *incomplete,
            },

            ExprKind::MapType { key, value } => ExprKind::MapType {
                key: self.copy_expr(key),
                value: self.copy_expr(value),
            },

            ExprKind::ChanType { dir, value } => ExprKind::ChanType {
                dir: *dir,
                value: self.copy_expr(value),
            },
        };
        self.alloc(Expr::new(kind, expr.span))
    }

    pub(super) fn copy_opt_expr(&mut self, expr: Option<&P<Expr>>) -> Option<P<Expr>> {
        expr.map(|expr| self.copy_expr(expr))
    }

    pub(super) fn copy_exprs(&mut self, exprs: &Seq<Expr>) -> Seq<Expr> {
        self.copy_seq(exprs, Self::copy_expr)
    }

    pub fn copy_func_type(&mut self, ty: &P<FuncType>) -> P<FuncType> {
        let copied = self.copy_func_type_value(ty);
        self.alloc(copied)
    }

    fn copy_func_type_value(&mut self, ty: &FuncType) -> FuncType {
        FuncType {
            type_params: self.copy_opt_fields(ty.type_params.as_ref()),
            params: self.copy_opt_fields(ty.params.as_ref()),
            results: self.copy_opt_fields(ty.results.as_ref()),
            span: ty.span,
        }
    }
}

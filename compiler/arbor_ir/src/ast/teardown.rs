//! Non-recursive destruction for expression and statement trees.
//!
//! Dropping a node the usual way recurses once per level of nesting, which
//! overflows the stack on deeply nested input. `Expr` and `Stmt` instead
//! detach their children and tear them down from a heap work-list. Only
//! children whose last handle is being released are detached; a child still
//! shared with another tree just loses one reference count.

use std::mem;
use std::sync::Arc;

use super::{
    BlockStmt, Decl, DeclKind, Expr, ExprKind, Field, FieldList, FuncType, Seq, Spec, SpecKind,
    Stmt, StmtKind, P,
};

impl Drop for Expr {
    fn drop(&mut self) {
        if is_leaf_expr(&self.kind) {
            return;
        }
        let mut teardown = Teardown::default();
        teardown.expr_kind(mem::replace(&mut self.kind, ExprKind::Bad));
        teardown.run();
    }
}

impl Drop for Stmt {
    fn drop(&mut self) {
        if is_leaf_stmt(&self.kind) {
            return;
        }
        let mut teardown = Teardown::default();
        teardown.stmt_kind(mem::replace(&mut self.kind, StmtKind::Bad));
        teardown.run();
    }
}

fn is_leaf_expr(kind: &ExprKind) -> bool {
    matches!(
        kind,
        ExprKind::Bad | ExprKind::Ident(_) | ExprKind::BasicLit(_) | ExprKind::Ext(_)
    )
}

fn is_leaf_stmt(kind: &StmtKind) -> bool {
    matches!(
        kind,
        StmtKind::Bad | StmtKind::Empty { .. } | StmtKind::Branch { .. } | StmtKind::Ext(_)
    )
}

/// A node whose last handle was released, waiting for its children to be
/// detached.
enum Orphan {
    Expr(Expr),
    Stmt(Stmt),
    Decl(Decl),
    Spec(Spec),
    Field(Field),
    FieldList(FieldList),
    FuncType(FuncType),
    Block(BlockStmt),
}

#[derive(Default)]
struct Teardown {
    pending: Vec<Orphan>,
}

impl Teardown {
    fn run(&mut self) {
        while let Some(orphan) = self.pending.pop() {
            match orphan {
                // The emptied node drops as a leaf.
                Orphan::Expr(mut expr) => {
                    self.expr_kind(mem::replace(&mut expr.kind, ExprKind::Bad));
                }
                Orphan::Stmt(mut stmt) => {
                    self.stmt_kind(mem::replace(&mut stmt.kind, StmtKind::Bad));
                }
                Orphan::Decl(decl) => self.decl_kind(decl.kind),
                Orphan::Spec(spec) => self.spec_kind(spec.kind),
                Orphan::Field(field) => {
                    self.expr(field.ty);
                }
                Orphan::FieldList(list) => {
                    for field in list.list.into_iter().flatten() {
                        if let Some(field) = Arc::into_inner(field) {
                            self.pending.push(Orphan::Field(field));
                        }
                    }
                }
                Orphan::FuncType(ty) => self.func_type_value(ty),
                Orphan::Block(block) => self.stmts(block.list),
            }
        }
    }

    fn expr(&mut self, expr: P<Expr>) {
        if let Some(expr) = Arc::into_inner(expr) {
            if !is_leaf_expr(&expr.kind) {
                self.pending.push(Orphan::Expr(expr));
            }
        }
    }

    fn opt_expr(&mut self, expr: Option<P<Expr>>) {
        if let Some(expr) = expr {
            self.expr(expr);
        }
    }

    fn exprs(&mut self, exprs: Seq<Expr>) {
        for expr in exprs.into_iter().flatten() {
            self.expr(expr);
        }
    }

    fn stmt(&mut self, stmt: P<Stmt>) {
        if let Some(stmt) = Arc::into_inner(stmt) {
            if !is_leaf_stmt(&stmt.kind) {
                self.pending.push(Orphan::Stmt(stmt));
            }
        }
    }

    fn opt_stmt(&mut self, stmt: Option<P<Stmt>>) {
        if let Some(stmt) = stmt {
            self.stmt(stmt);
        }
    }

    fn stmts(&mut self, stmts: Seq<Stmt>) {
        for stmt in stmts.into_iter().flatten() {
            self.stmt(stmt);
        }
    }

    fn block(&mut self, block: P<BlockStmt>) {
        if let Some(block) = Arc::into_inner(block) {
            self.pending.push(Orphan::Block(block));
        }
    }

    fn fields(&mut self, list: Option<P<FieldList>>) {
        if let Some(list) = list.and_then(Arc::into_inner) {
            self.pending.push(Orphan::FieldList(list));
        }
    }

    fn func_type(&mut self, ty: P<FuncType>) {
        if let Some(ty) = Arc::into_inner(ty) {
            self.pending.push(Orphan::FuncType(ty));
        }
    }

    fn func_type_value(&mut self, ty: FuncType) {
        self.fields(ty.type_params);
        self.fields(ty.params);
        self.fields(ty.results);
    }

    fn expr_kind(&mut self, kind: ExprKind) {
        match kind {
            ExprKind::Bad | ExprKind::Ident(_) | ExprKind::BasicLit(_) | ExprKind::Ext(_) => {}
            ExprKind::Ellipsis { elt } => self.opt_expr(elt),
            ExprKind::FuncLit { ty, body } => {
                self.func_type(ty);
                self.block(body);
            }
            ExprKind::CompositeLit { ty, elts, .. } => {
                self.opt_expr(ty);
                self.exprs(elts);
            }
            ExprKind::Paren { x }
            | ExprKind::Selector { x, .. }
            | ExprKind::Star { x }
            | ExprKind::Unary { x, .. }
            | ExprKind::ChanType { value: x, .. } => self.expr(x),
            ExprKind::Index { x, index: y }
            | ExprKind::Binary { x, y, .. }
            | ExprKind::KeyValue { key: x, value: y }
            | ExprKind::MapType { key: x, value: y } => {
                self.expr(x);
                self.expr(y);
            }
            ExprKind::IndexList { x, indices } => {
                self.expr(x);
                self.exprs(indices);
            }
            ExprKind::Slice {
                x, low, high, max, ..
            } => {
                self.expr(x);
                self.opt_expr(low);
                self.opt_expr(high);
                self.opt_expr(max);
            }
            ExprKind::TypeAssert { x, ty } => {
                self.expr(x);
                self.opt_expr(ty);
            }
            ExprKind::Call { fun, args, .. } => {
                self.expr(fun);
                self.exprs(args);
            }
            ExprKind::ArrayType { len, elt } => {
                self.opt_expr(len);
                self.expr(elt);
            }
            ExprKind::StructType { fields, .. } => self.fields(fields),
            ExprKind::InterfaceType { methods, .. } => self.fields(methods),
            ExprKind::FuncType(ty) => self.func_type_value(ty),
        }
    }

    fn stmt_kind(&mut self, kind: StmtKind) {
        match kind {
            StmtKind::Bad
            | StmtKind::Empty { .. }
            | StmtKind::Branch { .. }
            | StmtKind::Ext(_) => {}
            StmtKind::Decl(decl) => {
                if let Some(decl) = Arc::into_inner(decl) {
                    self.pending.push(Orphan::Decl(decl));
                }
            }
            StmtKind::Labeled { stmt, .. } => self.stmt(stmt),
            StmtKind::Expr(x)
            | StmtKind::IncDec { x, .. }
            | StmtKind::Go { call: x }
            | StmtKind::Defer { call: x } => self.expr(x),
            StmtKind::Send { chan, value } => {
                self.expr(chan);
                self.expr(value);
            }
            StmtKind::Assign { lhs, rhs, .. } => {
                self.exprs(lhs);
                self.exprs(rhs);
            }
            StmtKind::Return { results } => self.exprs(results),
            StmtKind::Block(block) => self.stmts(block.list),
            StmtKind::If {
                init,
                cond,
                body,
                else_branch,
            } => {
                self.opt_stmt(init);
                self.expr(cond);
                self.block(body);
                self.opt_stmt(else_branch);
            }
            StmtKind::CaseClause { list, body } => {
                self.exprs(list);
                self.stmts(body);
            }
            StmtKind::Switch { init, tag, body } => {
                self.opt_stmt(init);
                self.opt_expr(tag);
                self.block(body);
            }
            StmtKind::TypeSwitch { init, assign, body } => {
                self.opt_stmt(init);
                self.stmt(assign);
                self.block(body);
            }
            StmtKind::CommClause { comm, body } => {
                self.opt_stmt(comm);
                self.stmts(body);
            }
            StmtKind::Select { body } => self.block(body),
            StmtKind::For {
                init,
                cond,
                post,
                body,
            } => {
                self.opt_stmt(init);
                self.opt_expr(cond);
                self.opt_stmt(post);
                self.block(body);
            }
            StmtKind::Range {
                key, value, x, body, ..
            } => {
                self.opt_expr(key);
                self.opt_expr(value);
                self.expr(x);
                self.block(body);
            }
        }
    }

    fn decl_kind(&mut self, kind: DeclKind) {
        match kind {
            DeclKind::Bad | DeclKind::Ext(_) => {}
            DeclKind::Gen { specs, .. } => {
                for spec in specs.into_iter().flatten() {
                    if let Some(spec) = Arc::into_inner(spec) {
                        self.pending.push(Orphan::Spec(spec));
                    }
                }
            }
            DeclKind::Func { recv, ty, body, .. } => {
                self.fields(recv);
                self.func_type(ty);
                if let Some(body) = body {
                    self.block(body);
                }
            }
        }
    }

    fn spec_kind(&mut self, kind: SpecKind) {
        match kind {
            SpecKind::Import { .. } | SpecKind::Ext(_) => {}
            SpecKind::Value { ty, values, .. } => {
                self.opt_expr(ty);
                self.exprs(values);
            }
            SpecKind::Type {
                type_params, ty, ..
            } => {
                self.fields(type_params);
                self.expr(ty);
            }
        }
    }
}

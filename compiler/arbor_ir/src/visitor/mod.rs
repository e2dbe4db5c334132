//! Read-only tree traversal.
//!
//! Every child edge of the tree is a `P<T>` handle, and `Visitor` has one
//! `visit_*` method per handle type. Default implementations call the
//! matching `walk_*` function, which visits the children. Override a
//! `visit_*` method to observe a handle and call `walk_*` to keep descending.
//!
//! ```text
//! struct CountCalls(usize);
//!
//! impl<'ast> Visitor<'ast> for CountCalls {
//!     fn visit_expr(&mut self, expr: &'ast P<Expr>) {
//!         if matches!(expr.kind, ExprKind::Call { .. }) {
//!             self.0 += 1;
//!         }
//!         walk_expr(self, expr);
//!     }
//! }
//! ```

use std::sync::Arc;

use rustc_hash::FxHashSet;

use crate::ast::{
    BasicLit, BlockStmt, Decl, DeclKind, Expr, ExprKind, Field, FieldList, File, FuncType, Ident,
    Node, Seq, Spec, SpecKind, Stmt, StmtKind, P,
};

pub trait Visitor<'ast> {
    fn visit_expr(&mut self, expr: &'ast P<Expr>) {
        walk_expr(self, expr);
    }

    fn visit_stmt(&mut self, stmt: &'ast P<Stmt>) {
        walk_stmt(self, stmt);
    }

    fn visit_decl(&mut self, decl: &'ast P<Decl>) {
        walk_decl(self, decl);
    }

    fn visit_spec(&mut self, spec: &'ast P<Spec>) {
        walk_spec(self, spec);
    }

    fn visit_field_list(&mut self, list: &'ast P<FieldList>) {
        walk_field_list(self, list);
    }

    fn visit_field(&mut self, field: &'ast P<Field>) {
        walk_field(self, field);
    }

    fn visit_func_type(&mut self, ty: &'ast P<FuncType>) {
        walk_func_type(self, ty);
    }

    fn visit_block(&mut self, block: &'ast P<BlockStmt>) {
        walk_block(self, block);
    }

    fn visit_file(&mut self, file: &'ast P<File>) {
        walk_file(self, file);
    }

    /// Detached identifier handle (selector, name list, label). Identifiers
    /// in expression position arrive through `visit_expr`.
    fn visit_ident(&mut self, ident: &'ast P<Ident>) {
        let _ = ident;
    }

    /// Detached literal handle (import path, struct tag).
    fn visit_lit(&mut self, lit: &'ast P<BasicLit>) {
        let _ = lit;
    }
}

pub fn walk_node<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, node: &'ast Node) {
    match node {
        Node::Expr(expr) => visitor.visit_expr(expr),
        Node::Stmt(stmt) => visitor.visit_stmt(stmt),
        Node::Decl(decl) => visitor.visit_decl(decl),
        Node::Spec(spec) => visitor.visit_spec(spec),
        Node::Field(field) => visitor.visit_field(field),
        Node::FieldList(list) => visitor.visit_field_list(list),
        Node::File(file) => visitor.visit_file(file),
    }
}

fn walk_exprs<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, exprs: &'ast Seq<Expr>) {
    for expr in exprs.iter().flatten() {
        visitor.visit_expr(expr);
    }
}

fn walk_stmts<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, stmts: &'ast Seq<Stmt>) {
    for stmt in stmts.iter().flatten() {
        visitor.visit_stmt(stmt);
    }
}

fn walk_opt_expr<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, expr: &'ast Option<P<Expr>>) {
    if let Some(expr) = expr {
        visitor.visit_expr(expr);
    }
}

fn walk_opt_stmt<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, stmt: &'ast Option<P<Stmt>>) {
    if let Some(stmt) = stmt {
        visitor.visit_stmt(stmt);
    }
}

fn walk_opt_fields<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    list: &'ast Option<P<FieldList>>,
) {
    if let Some(list) = list {
        visitor.visit_field_list(list);
    }
}

pub fn walk_expr<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, expr: &'ast Expr) {
    match &expr.kind {
        ExprKind::Bad | ExprKind::Ident(_) | ExprKind::BasicLit(_) | ExprKind::Ext(_) => {}

        ExprKind::Ellipsis { elt } => walk_opt_expr(visitor, elt),
        ExprKind::FuncLit { ty, body } => {
            visitor.visit_func_type(ty);
            visitor.visit_block(body);
        }
        ExprKind::CompositeLit { ty, elts, .. } => {
            walk_opt_expr(visitor, ty);
            walk_exprs(visitor, elts);
        }
        ExprKind::Paren { x } | ExprKind::Star { x } | ExprKind::Unary { x, .. } => {
            visitor.visit_expr(x);
        }
        ExprKind::Selector { x, sel } => {
            visitor.visit_expr(x);
            visitor.visit_ident(sel);
        }
        ExprKind::Index { x, index } => {
            visitor.visit_expr(x);
            visitor.visit_expr(index);
        }
        ExprKind::IndexList { x, indices } => {
            visitor.visit_expr(x);
            walk_exprs(visitor, indices);
        }
        ExprKind::Slice {
            x, low, high, max, ..
        } => {
            visitor.visit_expr(x);
            walk_opt_expr(visitor, low);
            walk_opt_expr(visitor, high);
            walk_opt_expr(visitor, max);
        }
        ExprKind::TypeAssert { x, ty } => {
            visitor.visit_expr(x);
            walk_opt_expr(visitor, ty);
        }
        ExprKind::Call { fun, args, .. } => {
            visitor.visit_expr(fun);
            walk_exprs(visitor, args);
        }
        ExprKind::Binary { x, y, .. } => {
            visitor.visit_expr(x);
            visitor.visit_expr(y);
        }
        ExprKind::KeyValue { key, value } | ExprKind::MapType { key, value } => {
            visitor.visit_expr(key);
            visitor.visit_expr(value);
        }
        ExprKind::ArrayType { len, elt } => {
            walk_opt_expr(visitor, len);
            visitor.visit_expr(elt);
        }
        ExprKind::StructType { fields, .. } => walk_opt_fields(visitor, fields),
        ExprKind::FuncType(ty) => walk_func_type(visitor, ty),
        ExprKind::InterfaceType { methods, .. } => walk_opt_fields(visitor, methods),
        ExprKind::ChanType { value, .. } => visitor.visit_expr(value),
    }
}

pub fn walk_stmt<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, stmt: &'ast Stmt) {
    match &stmt.kind {
        StmtKind::Bad | StmtKind::Empty { .. } | StmtKind::Ext(_) => {}

        StmtKind::Decl(decl) => visitor.visit_decl(decl),
        StmtKind::Labeled { label, stmt } => {
            visitor.visit_ident(label);
            visitor.visit_stmt(stmt);
        }
        StmtKind::Expr(x)
        | StmtKind::IncDec { x, .. }
        | StmtKind::Go { call: x }
        | StmtKind::Defer { call: x } => visitor.visit_expr(x),
        StmtKind::Send { chan, value } => {
            visitor.visit_expr(chan);
            visitor.visit_expr(value);
        }
        StmtKind::Assign { lhs, rhs, .. } => {
            walk_exprs(visitor, lhs);
            walk_exprs(visitor, rhs);
        }
        StmtKind::Return { results } => walk_exprs(visitor, results),
        StmtKind::Branch { label, .. } => {
            if let Some(label) = label {
                visitor.visit_ident(label);
            }
        }
        StmtKind::Block(block) => walk_block(visitor, block),
        StmtKind::If {
            init,
            cond,
            body,
            else_branch,
        } => {
            walk_opt_stmt(visitor, init);
            visitor.visit_expr(cond);
            visitor.visit_block(body);
            walk_opt_stmt(visitor, else_branch);
        }
        StmtKind::CaseClause { list, body } => {
            walk_exprs(visitor, list);
            walk_stmts(visitor, body);
        }
        StmtKind::Switch { init, tag, body } => {
            walk_opt_stmt(visitor, init);
            walk_opt_expr(visitor, tag);
            visitor.visit_block(body);
        }
        StmtKind::TypeSwitch { init, assign, body } => {
            walk_opt_stmt(visitor, init);
            visitor.visit_stmt(assign);
            visitor.visit_block(body);
        }
        StmtKind::CommClause { comm, body } => {
            walk_opt_stmt(visitor, comm);
            walk_stmts(visitor, body);
        }
        StmtKind::Select { body } => visitor.visit_block(body),
        StmtKind::For {
            init,
            cond,
            post,
            body,
        } => {
            walk_opt_stmt(visitor, init);
            walk_opt_expr(visitor, cond);
            walk_opt_stmt(visitor, post);
            visitor.visit_block(body);
        }
        StmtKind::Range {
            key,
            value,
            x,
            body,
            ..
        } => {
            walk_opt_expr(visitor, key);
            walk_opt_expr(visitor, value);
            visitor.visit_expr(x);
            visitor.visit_block(body);
        }
    }
}

pub fn walk_decl<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, decl: &'ast Decl) {
    match &decl.kind {
        DeclKind::Bad | DeclKind::Ext(_) => {}
        DeclKind::Gen { specs, .. } => {
            for spec in specs.iter().flatten() {
                visitor.visit_spec(spec);
            }
        }
        DeclKind::Func {
            recv,
            name,
            ty,
            body,
        } => {
            walk_opt_fields(visitor, recv);
            visitor.visit_ident(name);
            visitor.visit_func_type(ty);
            if let Some(body) = body {
                visitor.visit_block(body);
            }
        }
    }
}

pub fn walk_spec<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, spec: &'ast Spec) {
    match &spec.kind {
        SpecKind::Ext(_) => {}
        SpecKind::Import { name, path } => {
            if let Some(name) = name {
                visitor.visit_ident(name);
            }
            visitor.visit_lit(path);
        }
        SpecKind::Value { names, ty, values } => {
            for name in names.iter().flatten() {
                visitor.visit_ident(name);
            }
            walk_opt_expr(visitor, ty);
            walk_exprs(visitor, values);
        }
        SpecKind::Type {
            name,
            type_params,
            ty,
            ..
        } => {
            visitor.visit_ident(name);
            walk_opt_fields(visitor, type_params);
            visitor.visit_expr(ty);
        }
    }
}

pub fn walk_field_list<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, list: &'ast FieldList) {
    for field in list.list.iter().flatten() {
        visitor.visit_field(field);
    }
}

pub fn walk_field<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, field: &'ast Field) {
    for name in field.names.iter().flatten() {
        visitor.visit_ident(name);
    }
    visitor.visit_expr(&field.ty);
    if let Some(tag) = &field.tag {
        visitor.visit_lit(tag);
    }
}

pub fn walk_func_type<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, ty: &'ast FuncType) {
    walk_opt_fields(visitor, &ty.type_params);
    walk_opt_fields(visitor, &ty.params);
    walk_opt_fields(visitor, &ty.results);
}

pub fn walk_block<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, block: &'ast BlockStmt) {
    walk_stmts(visitor, &block.list);
}

pub fn walk_file<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, file: &'ast File) {
    visitor.visit_ident(&file.package);
    for decl in file.decls.iter().flatten() {
        visitor.visit_decl(decl);
    }
    for ident in file.unresolved.iter().flatten() {
        visitor.visit_ident(ident);
    }
}

/// Addresses of every handle reachable from a node, the root included.
///
/// Two trees share structure exactly when their handle sets intersect.
#[derive(Default, Debug)]
pub struct HandleSet {
    addrs: FxHashSet<usize>,
}

impl HandleSet {
    pub fn collect(node: &Node) -> Self {
        let mut set = HandleSet::default();
        walk_node(&mut set, node);
        set
    }

    fn record<T>(&mut self, handle: &P<T>) {
        self.addrs.insert(Arc::as_ptr(handle).cast::<()>() as usize);
    }

    pub fn contains<T>(&self, handle: &P<T>) -> bool {
        self.addrs
            .contains(&(Arc::as_ptr(handle).cast::<()>() as usize))
    }

    pub fn len(&self) -> usize {
        self.addrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addrs.is_empty()
    }

    pub fn is_disjoint(&self, other: &HandleSet) -> bool {
        self.addrs.is_disjoint(&other.addrs)
    }

    /// Number of handles present in both sets.
    pub fn shared_with(&self, other: &HandleSet) -> usize {
        self.addrs.intersection(&other.addrs).count()
    }
}

impl<'ast> Visitor<'ast> for HandleSet {
    fn visit_expr(&mut self, expr: &'ast P<Expr>) {
        self.record(expr);
        walk_expr(self, expr);
    }

    fn visit_stmt(&mut self, stmt: &'ast P<Stmt>) {
        self.record(stmt);
        walk_stmt(self, stmt);
    }

    fn visit_decl(&mut self, decl: &'ast P<Decl>) {
        self.record(decl);
        walk_decl(self, decl);
    }

    fn visit_spec(&mut self, spec: &'ast P<Spec>) {
        self.record(spec);
        walk_spec(self, spec);
    }

    fn visit_field_list(&mut self, list: &'ast P<FieldList>) {
        self.record(list);
        walk_field_list(self, list);
    }

    fn visit_field(&mut self, field: &'ast P<Field>) {
        self.record(field);
        walk_field(self, field);
    }

    fn visit_func_type(&mut self, ty: &'ast P<FuncType>) {
        self.record(ty);
        walk_func_type(self, ty);
    }

    fn visit_block(&mut self, block: &'ast P<BlockStmt>) {
        self.record(block);
        walk_block(self, block);
    }

    fn visit_file(&mut self, file: &'ast P<File>) {
        self.record(file);
        walk_file(self, file);
    }

    fn visit_ident(&mut self, ident: &'ast P<Ident>) {
        self.record(ident);
    }

    fn visit_lit(&mut self, lit: &'ast P<BasicLit>) {
        self.record(lit);
    }
}

/// True when any handle reachable from `a` is also reachable from `b`.
pub fn shares_nodes(a: &Node, b: &Node) -> bool {
    !HandleSet::collect(a).is_disjoint(&HandleSet::collect(b))
}

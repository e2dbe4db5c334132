//! Category-erased node handle.

use std::sync::Arc;

use super::{Decl, Expr, Field, FieldList, File, Spec, Stmt, P};
use crate::{Span, Spanned};

/// Handle to any node in the tree.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Node {
    Expr(P<Expr>),
    Stmt(P<Stmt>),
    Decl(P<Decl>),
    Spec(P<Spec>),
    Field(P<Field>),
    FieldList(P<FieldList>),
    File(P<File>),
}

impl Node {
    /// Kind name of the concrete variant, e.g. `"BinaryExpr"`.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Expr(expr) => expr.kind.name(),
            Node::Stmt(stmt) => stmt.kind.name(),
            Node::Decl(decl) => decl.kind.name(),
            Node::Spec(spec) => spec.kind.name(),
            Node::Field(_) => "Field",
            Node::FieldList(_) => "FieldList",
            Node::File(_) => "File",
        }
    }

    /// True when both handles point at the same allocation.
    pub fn ptr_eq(&self, other: &Node) -> bool {
        match (self, other) {
            (Node::Expr(a), Node::Expr(b)) => Arc::ptr_eq(a, b),
            (Node::Stmt(a), Node::Stmt(b)) => Arc::ptr_eq(a, b),
            (Node::Decl(a), Node::Decl(b)) => Arc::ptr_eq(a, b),
            (Node::Spec(a), Node::Spec(b)) => Arc::ptr_eq(a, b),
            (Node::Field(a), Node::Field(b)) => Arc::ptr_eq(a, b),
            (Node::FieldList(a), Node::FieldList(b)) => Arc::ptr_eq(a, b),
            (Node::File(a), Node::File(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Spanned for Node {
    fn span(&self) -> Span {
        match self {
            Node::Expr(expr) => expr.span,
            Node::Stmt(stmt) => stmt.span,
            Node::Decl(decl) => decl.span,
            Node::Spec(spec) => spec.span,
            Node::Field(field) => field.span,
            Node::FieldList(list) => list.span,
            Node::File(file) => file.span,
        }
    }
}

impl From<P<Expr>> for Node {
    fn from(expr: P<Expr>) -> Self {
        Node::Expr(expr)
    }
}

impl From<P<Stmt>> for Node {
    fn from(stmt: P<Stmt>) -> Self {
        Node::Stmt(stmt)
    }
}

impl From<P<Decl>> for Node {
    fn from(decl: P<Decl>) -> Self {
        Node::Decl(decl)
    }
}

impl From<P<Spec>> for Node {
    fn from(spec: P<Spec>) -> Self {
        Node::Spec(spec)
    }
}

impl From<P<Field>> for Node {
    fn from(field: P<Field>) -> Self {
        Node::Field(field)
    }
}

impl From<P<FieldList>> for Node {
    fn from(list: P<FieldList>) -> Self {
        Node::FieldList(list)
    }
}

impl From<P<File>> for Node {
    fn from(file: P<File>) -> Self {
        Node::File(file)
    }
}

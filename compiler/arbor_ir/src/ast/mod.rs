//! Syntax tree node types.
//!
//! The tree is built from reference-counted handles (`P<T>`). A parser may
//! hand out several handles to one node, and nodes are immutable once built,
//! so "the same node" means `Arc::ptr_eq`, not structural equality.
//!
//! # Module Structure
//!
//! - `expr`: expressions and type expressions (`Expr`, `ExprKind`, `Ident`, ...)
//! - `stmt`: statements (`Stmt`, `StmtKind`, `BlockStmt`)
//! - `decl`: declarations, specs, and files
//! - `field`: field groups (`Field`, `FieldList`)
//! - `node`: the category-erased `Node` handle
//! - `operators`: scalar operator and keyword tokens
//! - `teardown`: non-recursive `Drop` for expressions and statements

mod decl;
mod expr;
mod field;
mod node;
mod operators;
mod stmt;
mod teardown;

use std::any::Any;
use std::fmt;
use std::sync::Arc;

pub use decl::{Decl, DeclKind, File, Spec, SpecKind};
pub use expr::{BasicLit, Expr, ExprKind, FuncType, Ident};
pub use field::{Field, FieldList};
pub use node::Node;
pub use operators::{
    AssignOp, BinaryOp, BranchKind, ChanDir, DeclKeyword, IncDec, LitKind, UnaryOp,
};
pub use stmt::{BlockStmt, Stmt, StmtKind};

/// Shared handle to a tree node.
pub type P<T> = Arc<T>;

/// Ordered sequence of child nodes.
///
/// `None` (absent) and `Some(vec![])` (empty) are different trees.
pub type Seq<T> = Option<Vec<P<T>>>;

/// Node kind contributed by a grammar extension.
///
/// The payload is opaque to this crate; consumers downcast it. Equality
/// compares the kind and payload identity.
#[derive(Clone)]
pub struct ExtNode {
    pub kind: &'static str,
    pub payload: Arc<dyn Any + Send + Sync>,
}

impl ExtNode {
    pub fn new(kind: &'static str, payload: impl Any + Send + Sync) -> Self {
        ExtNode {
            kind,
            payload: Arc::new(payload),
        }
    }

    pub fn payload<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref()
    }
}

impl PartialEq for ExtNode {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && Arc::ptr_eq(&self.payload, &other.payload)
    }
}

impl Eq for ExtNode {}

impl fmt::Debug for ExtNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ExtNode").field(&self.kind).finish()
    }
}

//! Arbor IR - syntax tree node model
//!
//! This crate contains the data structures the copy engine reads and builds:
//! - Spans for source locations
//! - Names and the string interner for identifier and literal text
//! - Syntax tree nodes (`Expr`, `Stmt`, `Decl`, `Spec`, field groups, `File`)
//! - Resolution objects that identifiers refer back to
//! - A read-only `Visitor` over the tree
//!
//! # Design
//!
//! - **Shared handles**: child edges are `P<T>` (`Arc<T>`), so node identity
//!   is observable and trees can be sent across threads.
//! - **Absent vs. empty**: sequences are `Seq<T>` (`Option<Vec<P<T>>>`).
//! - **Closed kinds with an escape hatch**: every category is an enum with an
//!   `Ext` variant for kinds contributed by grammar extensions.

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod interner;
mod name;
mod resolve;
mod span;
mod traits;
pub mod visitor;

pub use ast::{
    AssignOp, BasicLit, BinaryOp, BlockStmt, BranchKind, ChanDir, Decl, DeclKeyword, DeclKind,
    Expr, ExprKind, ExtNode, Field, FieldList, File, FuncType, Ident, IncDec, LitKind, Node, Seq,
    Spec, SpecKind, Stmt, StmtKind, UnaryOp, P,
};
pub use interner::{InternError, SharedInterner, StringInterner, StringLookup};
pub use name::Name;
pub use resolve::{ObjKind, Object, Resolver, Scope};
pub use span::{Span, SpanError};
pub use traits::{Named, Spanned};

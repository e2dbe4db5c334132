//! Declarations, specs, and source files.

use std::fmt;
use std::sync::Arc;

use super::operators::DeclKeyword;
use super::{BasicLit, BlockStmt, Expr, ExtNode, FieldList, FuncType, Ident, Seq, P};
use crate::{Span, Spanned};

/// Top-level or statement-level declaration.
#[derive(Clone, Eq, PartialEq)]
pub struct Decl {
    pub kind: DeclKind,
    pub span: Span,
}

impl Decl {
    pub fn new(kind: DeclKind, span: Span) -> Self {
        Decl { kind, span }
    }

    pub fn shared(kind: DeclKind, span: Span) -> P<Self> {
        Arc::new(Decl::new(kind, span))
    }
}

impl fmt::Debug for Decl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

impl Spanned for Decl {
    fn span(&self) -> Span {
        self.span
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum DeclKind {
    Bad,

    /// `tok spec` or `tok ( specs )`.
    Gen {
        tok: DeclKeyword,
        grouped: bool,
        specs: Seq<Spec>,
    },

    /// Function or method; `body` is absent for external functions.
    Func {
        recv: Option<P<FieldList>>,
        name: P<Ident>,
        ty: P<FuncType>,
        body: Option<P<BlockStmt>>,
    },

    Ext(ExtNode),
}

impl DeclKind {
    pub fn name(&self) -> &'static str {
        match self {
            DeclKind::Bad => "BadDecl",
            DeclKind::Gen { .. } => "GenDecl",
            DeclKind::Func { .. } => "FuncDecl",
            DeclKind::Ext(ext) => ext.kind,
        }
    }
}

/// One entry of a grouped declaration.
#[derive(Clone, Eq, PartialEq)]
pub struct Spec {
    pub kind: SpecKind,
    pub span: Span,
}

impl Spec {
    pub fn new(kind: SpecKind, span: Span) -> Self {
        Spec { kind, span }
    }

    pub fn shared(kind: SpecKind, span: Span) -> P<Self> {
        Arc::new(Spec::new(kind, span))
    }
}

impl fmt::Debug for Spec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

impl Spanned for Spec {
    fn span(&self) -> Span {
        self.span
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum SpecKind {
    /// `name "path"`
    Import {
        name: Option<P<Ident>>,
        path: P<BasicLit>,
    },

    /// `names ty = values` inside `var` or `const`.
    ///
    /// A single `ty` is written once for all `names`.
    Value {
        names: Seq<Ident>,
        ty: Option<P<Expr>>,
        values: Seq<Expr>,
    },

    /// `name[type_params] ty`, or `name = ty` when `alias` is set.
    Type {
        name: P<Ident>,
        type_params: Option<P<FieldList>>,
        alias: bool,
        ty: P<Expr>,
    },

    Ext(ExtNode),
}

impl SpecKind {
    pub fn name(&self) -> &'static str {
        match self {
            SpecKind::Import { .. } => "ImportSpec",
            SpecKind::Value { .. } => "ValueSpec",
            SpecKind::Type { .. } => "TypeSpec",
            SpecKind::Ext(ext) => ext.kind,
        }
    }
}

/// A parsed source file.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct File {
    pub package: P<Ident>,
    pub decls: Seq<Decl>,
    /// Identifiers the parser could not resolve within the file.
    pub unresolved: Seq<Ident>,
    pub span: Span,
}

impl Spanned for File {
    fn span(&self) -> Span {
        self.span
    }
}

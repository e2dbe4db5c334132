//! Expression and type-expression nodes.

use std::fmt;
use std::sync::{Arc, Weak};

use super::operators::{BinaryOp, ChanDir, LitKind, UnaryOp};
use super::{BlockStmt, ExtNode, FieldList, Seq, P};
use crate::{Name, Named, Object, Span, Spanned};

/// Expression node.
#[derive(Clone, Eq, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }

    /// Allocate a new shared handle for this expression.
    pub fn shared(kind: ExprKind, span: Span) -> P<Self> {
        Arc::new(Expr::new(kind, span))
    }

    /// Identifier expression with the span of the identifier itself.
    pub fn ident(ident: Ident) -> P<Self> {
        let span = ident.span;
        Expr::shared(ExprKind::Ident(ident), span)
    }

    /// Literal expression with the span of the literal itself.
    pub fn lit(lit: BasicLit) -> P<Self> {
        let span = lit.span;
        Expr::shared(ExprKind::BasicLit(lit), span)
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

impl Spanned for Expr {
    fn span(&self) -> Span {
        self.span
    }
}

/// Expression kinds, including type expressions.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum ExprKind {
    /// Placeholder for source the parser could not make sense of.
    Bad,

    Ident(Ident),

    BasicLit(BasicLit),

    /// `...T` in a parameter list or `[...]T` array length.
    Ellipsis { elt: Option<P<Expr>> },

    /// `func(params) results { body }`
    FuncLit { ty: P<FuncType>, body: P<BlockStmt> },

    /// `T{elts}`; `ty` is absent for elided inner literals.
    CompositeLit {
        ty: Option<P<Expr>>,
        elts: Seq<Expr>,
        incomplete: bool,
    },

    Paren { x: P<Expr> },

    /// `x.sel`
    Selector { x: P<Expr>, sel: P<Ident> },

    /// `x[index]`
    Index { x: P<Expr>, index: P<Expr> },

    /// `x[i0, i1, ...]`, a generic instantiation.
    IndexList { x: P<Expr>, indices: Seq<Expr> },

    /// `x[low:high:max]`; each bound is independently optional.
    Slice {
        x: P<Expr>,
        low: Option<P<Expr>>,
        high: Option<P<Expr>>,
        max: Option<P<Expr>>,
        slice3: bool,
    },

    /// `x.(ty)`; `ty` is absent in a type switch guard `x.(type)`.
    TypeAssert { x: P<Expr>, ty: Option<P<Expr>> },

    /// `fun(args)`; `ellipsis` is the span of a trailing `...`.
    Call {
        fun: P<Expr>,
        args: Seq<Expr>,
        ellipsis: Option<Span>,
    },

    /// `*x`, either a dereference or a pointer type.
    Star { x: P<Expr> },

    Unary { op: UnaryOp, x: P<Expr> },

    Binary { x: P<Expr>, op: BinaryOp, y: P<Expr> },

    /// `key: value` inside a composite literal.
    KeyValue { key: P<Expr>, value: P<Expr> },

    /// `[len]elt`; `len` is absent for slice types.
    ArrayType { len: Option<P<Expr>>, elt: P<Expr> },

    StructType {
        fields: Option<P<FieldList>>,
        incomplete: bool,
    },

    FuncType(FuncType),

    InterfaceType {
        methods: Option<P<FieldList>>,
        incomplete: bool,
    },

    MapType { key: P<Expr>, value: P<Expr> },

    ChanType { dir: ChanDir, value: P<Expr> },

    Ext(ExtNode),
}

impl ExprKind {
    /// Node kind name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            ExprKind::Bad => "BadExpr",
            ExprKind::Ident(_) => "Ident",
            ExprKind::BasicLit(_) => "BasicLit",
            ExprKind::Ellipsis { .. } => "Ellipsis",
            ExprKind::FuncLit { .. } => "FuncLit",
            ExprKind::CompositeLit { .. } => "CompositeLit",
            ExprKind::Paren { .. } => "ParenExpr",
            ExprKind::Selector { .. } => "SelectorExpr",
            ExprKind::Index { .. } => "IndexExpr",
            ExprKind::IndexList { .. } => "IndexListExpr",
            ExprKind::Slice { .. } => "SliceExpr",
            ExprKind::TypeAssert { .. } => "TypeAssertExpr",
            ExprKind::Call { .. } => "CallExpr",
            ExprKind::Star { .. } => "StarExpr",
            ExprKind::Unary { .. } => "UnaryExpr",
            ExprKind::Binary { .. } => "BinaryExpr",
            ExprKind::KeyValue { .. } => "KeyValueExpr",
            ExprKind::ArrayType { .. } => "ArrayType",
            ExprKind::StructType { .. } => "StructType",
            ExprKind::FuncType(_) => "FuncType",
            ExprKind::InterfaceType { .. } => "InterfaceType",
            ExprKind::MapType { .. } => "MapType",
            ExprKind::ChanType { .. } => "ChanType",
            ExprKind::Ext(ext) => ext.kind,
        }
    }
}

/// Identifier.
///
/// `obj` is a weak back-reference into an external resolution table. It is
/// not part of the syntax, so equality compares only name and span.
#[derive(Clone)]
pub struct Ident {
    pub name: Name,
    pub span: Span,
    pub obj: Option<Weak<Object>>,
}

impl Ident {
    pub fn new(name: Name, span: Span) -> Self {
        Ident {
            name,
            span,
            obj: None,
        }
    }

    /// Identifier already bound to `obj`.
    pub fn bound(name: Name, span: Span, obj: &Arc<Object>) -> Self {
        Ident {
            name,
            span,
            obj: Some(Arc::downgrade(obj)),
        }
    }

    pub fn shared(name: Name, span: Span) -> P<Self> {
        Arc::new(Ident::new(name, span))
    }

    /// The resolved object, if bound and the resolution table is still alive.
    pub fn resolved(&self) -> Option<Arc<Object>> {
        self.obj.as_ref().and_then(Weak::upgrade)
    }

    pub fn is_bound(&self) -> bool {
        self.obj.is_some()
    }
}

impl PartialEq for Ident {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.span == other.span
    }
}

impl Eq for Ident {}

impl fmt::Debug for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ident")
            .field("name", &self.name)
            .field("span", &self.span)
            .field("bound", &self.is_bound())
            .finish()
    }
}

impl Spanned for Ident {
    fn span(&self) -> Span {
        self.span
    }
}

impl Named for Ident {
    fn name(&self) -> Name {
        self.name
    }
}

/// Literal of basic type. `value` is the interned source text.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct BasicLit {
    pub kind: LitKind,
    pub value: Name,
    pub span: Span,
}

impl BasicLit {
    pub fn new(kind: LitKind, value: Name, span: Span) -> Self {
        BasicLit { kind, value, span }
    }
}

impl Spanned for BasicLit {
    fn span(&self) -> Span {
        self.span
    }
}

/// Function signature: `func[type_params](params) results`.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct FuncType {
    pub type_params: Option<P<FieldList>>,
    pub params: Option<P<FieldList>>,
    pub results: Option<P<FieldList>>,
    pub span: Span,
}

impl Spanned for FuncType {
    fn span(&self) -> Span {
        self.span
    }
}

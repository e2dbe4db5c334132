//! Statement nodes.

use std::fmt;
use std::sync::Arc;

use super::operators::{AssignOp, BranchKind, IncDec};
use super::{Decl, Expr, ExtNode, Ident, Seq, P};
use crate::{Span, Spanned};

/// Statement node.
#[derive(Clone, Eq, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }

    pub fn shared(kind: StmtKind, span: Span) -> P<Self> {
        Arc::new(Stmt::new(kind, span))
    }
}

impl fmt::Debug for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

impl Spanned for Stmt {
    fn span(&self) -> Span {
        self.span
    }
}

/// Statement kinds.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum StmtKind {
    Bad,

    /// Declaration inside a function body.
    Decl(P<Decl>),

    /// `implicit` is set for the statement the parser inserts before a
    /// closing brace.
    Empty { implicit: bool },

    Labeled { label: P<Ident>, stmt: P<Stmt> },

    Expr(P<Expr>),

    /// `chan <- value`
    Send { chan: P<Expr>, value: P<Expr> },

    IncDec { x: P<Expr>, tok: IncDec },

    Assign {
        lhs: Seq<Expr>,
        tok: AssignOp,
        rhs: Seq<Expr>,
    },

    Go { call: P<Expr> },

    Defer { call: P<Expr> },

    Return { results: Seq<Expr> },

    Branch {
        tok: BranchKind,
        label: Option<P<Ident>>,
    },

    Block(BlockStmt),

    If {
        init: Option<P<Stmt>>,
        cond: P<Expr>,
        body: P<BlockStmt>,
        else_branch: Option<P<Stmt>>,
    },

    /// `case list: body`; an absent `list` is the `default` clause.
    CaseClause { list: Seq<Expr>, body: Seq<Stmt> },

    Switch {
        init: Option<P<Stmt>>,
        tag: Option<P<Expr>>,
        body: P<BlockStmt>,
    },

    /// `switch init; assign { body }` where `assign` is `x := y.(type)` or
    /// `y.(type)`.
    TypeSwitch {
        init: Option<P<Stmt>>,
        assign: P<Stmt>,
        body: P<BlockStmt>,
    },

    /// `case comm: body` in a select; an absent `comm` is `default`.
    CommClause {
        comm: Option<P<Stmt>>,
        body: Seq<Stmt>,
    },

    Select { body: P<BlockStmt> },

    For {
        init: Option<P<Stmt>>,
        cond: Option<P<Expr>>,
        post: Option<P<Stmt>>,
        body: P<BlockStmt>,
    },

    /// `for key, value tok range x { body }`; `tok` is absent with no key.
    Range {
        key: Option<P<Expr>>,
        value: Option<P<Expr>>,
        tok: Option<AssignOp>,
        x: P<Expr>,
        body: P<BlockStmt>,
    },

    Ext(ExtNode),
}

impl StmtKind {
    /// Node kind name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            StmtKind::Bad => "BadStmt",
            StmtKind::Decl(_) => "DeclStmt",
            StmtKind::Empty { .. } => "EmptyStmt",
            StmtKind::Labeled { .. } => "LabeledStmt",
            StmtKind::Expr(_) => "ExprStmt",
            StmtKind::Send { .. } => "SendStmt",
            StmtKind::IncDec { .. } => "IncDecStmt",
            StmtKind::Assign { .. } => "AssignStmt",
            StmtKind::Go { .. } => "GoStmt",
            StmtKind::Defer { .. } => "DeferStmt",
            StmtKind::Return { .. } => "ReturnStmt",
            StmtKind::Branch { .. } => "BranchStmt",
            StmtKind::Block(_) => "BlockStmt",
            StmtKind::If { .. } => "IfStmt",
            StmtKind::CaseClause { .. } => "CaseClause",
            StmtKind::Switch { .. } => "SwitchStmt",
            StmtKind::TypeSwitch { .. } => "TypeSwitchStmt",
            StmtKind::CommClause { .. } => "CommClause",
            StmtKind::Select { .. } => "SelectStmt",
            StmtKind::For { .. } => "ForStmt",
            StmtKind::Range { .. } => "RangeStmt",
            StmtKind::Ext(ext) => ext.kind,
        }
    }
}

/// Braced statement list.
///
/// An absent `list` and an empty one are distinct: `{}` parses to
/// `Some(vec![])`, a block that was never filled in holds `None`.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct BlockStmt {
    pub list: Seq<Stmt>,
    pub span: Span,
}

impl BlockStmt {
    pub fn new(list: Seq<Stmt>, span: Span) -> Self {
        BlockStmt { list, span }
    }

    pub fn len(&self) -> usize {
        self.list.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Spanned for BlockStmt {
    fn span(&self) -> Span {
        self.span
    }
}

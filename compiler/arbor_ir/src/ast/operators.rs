//! Operator and keyword tokens carried as scalar node fields.

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Quo,
    Rem,

    // Bitwise
    And,
    Or,
    Xor,
    Shl,
    Shr,
    AndNot,

    // Logical
    LogAnd,
    LogOr,

    // Comparison
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

impl BinaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Quo => "/",
            Self::Rem => "%",
            Self::And => "&",
            Self::Or => "|",
            Self::Xor => "^",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::AndNot => "&^",
            Self::LogAnd => "&&",
            Self::LogOr => "||",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
        }
    }

    /// Binding strength, higher binds tighter (5 = multiplicative, 1 = `||`).
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Mul
            | Self::Quo
            | Self::Rem
            | Self::Shl
            | Self::Shr
            | Self::And
            | Self::AndNot => 5,
            Self::Add | Self::Sub | Self::Or | Self::Xor => 4,
            Self::Eq | Self::NotEq | Self::Lt | Self::LtEq | Self::Gt | Self::GtEq => 3,
            Self::LogAnd => 2,
            Self::LogOr => 1,
        }
    }
}

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    Plus,
    Neg,
    Not,
    BitNot,
    /// Address-of `&x`.
    Addr,
    /// Channel receive `<-ch`.
    Recv,
    /// Type-set approximation `~T`.
    Tilde,
}

impl UnaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Neg => "-",
            Self::Not => "!",
            Self::BitNot => "^",
            Self::Addr => "&",
            Self::Recv => "<-",
            Self::Tilde => "~",
        }
    }
}

/// Assignment and definition tokens.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum AssignOp {
    /// `=`
    Assign,
    /// `:=`
    Define,
    /// `op=`
    Compound(BinaryOp),
}

/// `x++` or `x--`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum IncDec {
    Inc,
    Dec,
}

/// Branch statement keyword.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BranchKind {
    Break,
    Continue,
    Goto,
    Fallthrough,
}

/// Keyword introducing a grouped declaration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DeclKeyword {
    Import,
    Const,
    Type,
    Var,
}

/// Channel direction.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum ChanDir {
    #[default]
    Both,
    Send,
    Recv,
}

/// Basic literal kind.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LitKind {
    Int,
    Float,
    Imag,
    Char,
    String,
}

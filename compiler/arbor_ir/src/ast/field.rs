//! Field groups: parameter lists, results, struct members, interface methods.

use super::{BasicLit, Expr, Seq, P};
use crate::{Ident, Span, Spanned};

/// One entry of a field group: `a, b int`, an anonymous `int`, or an
/// embedded type.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Field {
    /// Absent for anonymous parameters and embedded fields.
    pub names: Seq<Ident>,
    pub ty: P<Expr>,
    /// Struct tag literal.
    pub tag: Option<P<BasicLit>>,
    pub span: Span,
}

impl Spanned for Field {
    fn span(&self) -> Span {
        self.span
    }
}

/// Parenthesized or braced list of fields.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct FieldList {
    pub list: Seq<Field>,
    pub span: Span,
}

impl FieldList {
    pub fn new(list: Seq<Field>, span: Span) -> Self {
        FieldList { list, span }
    }

    /// Number of declared fields. A field with several names counts once per
    /// name; an anonymous field counts once.
    pub fn num_fields(&self) -> usize {
        self.list.iter().flatten().fold(0, |count, field| {
            count + field.names.as_ref().map_or(1, |names| names.len().max(1))
        })
    }
}

impl Spanned for FieldList {
    fn span(&self) -> Span {
        self.span
    }
}

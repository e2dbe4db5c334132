//! Focused accessor traits shared by node types.

use crate::{Name, Span};

/// Types that record a source location.
pub trait Spanned {
    fn span(&self) -> Span;
}

/// Types that carry an interned name.
pub trait Named {
    fn name(&self) -> Name;
}

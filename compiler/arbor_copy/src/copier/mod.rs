//! The copy engine.
//!
//! `Copier` walks a source tree and builds an independent one: every handle
//! in the result is freshly allocated, scalar fields are copied by value,
//! and absent sequences stay absent. Two kinds of handle may be reused:
//!
//! - literals, when `LiteralPolicy::Share` is configured;
//! - `Ext` nodes, whose shape the engine does not know. These are reported
//!   through the diagnostic sink and returned as-is.
//!
//! Dispatch for each node category lives in its own submodule.

mod decl;
mod expr;
mod stmt;

use std::sync::{Arc, Weak};

use arbor_diagnostic::{resolution_dropped, unsupported_node, DiagnosticSink};
use arbor_ir::{BasicLit, Field, FieldList, Ident, Node, Object, Resolver, Seq, Span, P};

use crate::{CopyConfig, LiteralPolicy, ResolutionPolicy};

/// Counters for one `Copier`, accumulated across calls.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct CopyStats {
    /// Nodes allocated for the copy.
    pub copied: usize,
    /// Literal handles reused under `LiteralPolicy::Share`.
    pub shared_literals: usize,
    /// Unsupported nodes returned unduplicated.
    pub passthrough: usize,
    /// Bound identifiers the resolver could not rebind.
    pub unresolved: usize,
}

/// Deep-copies syntax trees.
///
/// A `Copier` holds only configuration, the injected diagnostic sink and
/// resolver, and statistics. It can copy any number of trees.
pub struct Copier<'a> {
    config: CopyConfig,
    sink: &'a mut dyn DiagnosticSink,
    resolver: Option<&'a dyn Resolver>,
    stats: CopyStats,
}

impl<'a> Copier<'a> {
    pub fn new(config: CopyConfig, sink: &'a mut dyn DiagnosticSink) -> Self {
        Copier {
            config,
            sink,
            resolver: None,
            stats: CopyStats::default(),
        }
    }

    /// Use `resolver` to rebind identifiers under `ResolutionPolicy::Rebind`.
    #[must_use]
    pub fn with_resolver(mut self, resolver: &'a dyn Resolver) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn config(&self) -> &CopyConfig {
        &self.config
    }

    pub fn stats(&self) -> CopyStats {
        self.stats
    }

    /// Copy any node. `None` in, `None` out.
    pub fn copy_node(&mut self, node: Option<&Node>) -> Option<Node> {
        node.map(|node| self.copy(node))
    }

    #[tracing::instrument(level = "trace", skip_all)]
    pub fn copy(&mut self, node: &Node) -> Node {
        let before = self.stats;

        let copied = match node {
            Node::Expr(expr) => Node::Expr(self.copy_expr(expr)),
            Node::Stmt(stmt) => Node::Stmt(self.copy_stmt(stmt)),
            Node::Decl(decl) => Node::Decl(self.copy_decl(decl)),
            Node::Spec(spec) => Node::Spec(self.copy_spec(spec)),
            Node::Field(field) => Node::Field(self.copy_field(field)),
            Node::FieldList(list) => Node::FieldList(self.copy_field_list(list)),
            Node::File(file) => Node::File(self.copy_file(file)),
        };

        tracing::trace!(
            kind = node.kind_name(),
            copied = self.stats.copied - before.copied,
            shared_literals = self.stats.shared_literals - before.shared_literals,
            passthrough = self.stats.passthrough - before.passthrough,
            "copied node"
        );
        copied
    }

    /// Copy a field group. The entry list keeps absent vs. empty, and every
    /// entry gets its own copies of its names and type.
    pub fn copy_field_list(&mut self, list: &P<FieldList>) -> P<FieldList> {
        let copied = FieldList {
            list: self.copy_seq(&list.list, Self::copy_field),
            span: list.span,
        };
        self.alloc(copied)
    }

    pub fn copy_field(&mut self, field: &P<Field>) -> P<Field> {
        let copied = Field {
            names: self.copy_seq(&field.names, Self::copy_ident),
            ty: self.copy_expr(&field.ty),
            tag: field.tag.as_ref().map(|tag| self.copy_lit(tag)),
            span: field.span,
        };
        self.alloc(copied)
    }

    /// Copy a detached identifier. Identifiers are always duplicated, even
    /// when the source shares one handle between several parents.
    pub fn copy_ident(&mut self, ident: &P<Ident>) -> P<Ident> {
        let copied = self.copy_ident_value(ident);
        self.alloc(copied)
    }

    fn copy_ident_value(&mut self, ident: &Ident) -> Ident {
        Ident {
            name: ident.name,
            span: ident.span,
            obj: self.rebind(ident),
        }
    }

    fn rebind(&mut self, ident: &Ident) -> Option<Weak<Object>> {
        if self.config.resolutions != ResolutionPolicy::Rebind {
            return None;
        }
        let resolver = self.resolver?;

        let obj = resolver.resolve(ident);
        if obj.is_none() && ident.is_bound() {
            self.stats.unresolved += 1;
            self.sink.emit(resolution_dropped(ident.span));
        }
        obj
    }

    pub fn copy_lit(&mut self, lit: &P<BasicLit>) -> P<BasicLit> {
        match self.config.literals {
            LiteralPolicy::Share => {
                self.stats.shared_literals += 1;
                Arc::clone(lit)
            }
            LiteralPolicy::Duplicate => self.alloc(**lit),
        }
    }

    fn copy_seq<T>(
        &mut self,
        seq: &Seq<T>,
        mut copy: impl FnMut(&mut Self, &P<T>) -> P<T>,
    ) -> Seq<T> {
        let items = seq.as_ref()?;
        let mut copied = Vec::with_capacity(items.len());
        for item in items {
            copied.push(copy(self, item));
        }
        Some(copied)
    }

    fn copy_opt_fields(&mut self, list: Option<&P<FieldList>>) -> Option<P<FieldList>> {
        list.map(|list| self.copy_field_list(list))
    }

    fn copy_opt_ident(&mut self, ident: Option<&P<Ident>>) -> Option<P<Ident>> {
        ident.map(|ident| self.copy_ident(ident))
    }

    fn alloc<T>(&mut self, value: T) -> P<T> {
        self.stats.copied += 1;
        Arc::new(value)
    }

    /// Report an unsupported node and hand its handle back.
    fn passthrough<T>(&mut self, handle: &P<T>, kind: &str, span: Span) -> P<T> {
        self.stats.passthrough += 1;
        self.sink.emit(unsupported_node(kind, span));
        Arc::clone(handle)
    }
}

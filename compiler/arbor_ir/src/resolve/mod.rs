//! Resolved-symbol objects referenced from identifiers.
//!
//! Objects are owned by a resolution table (`Scope`) that lives outside the
//! syntax tree. Identifiers only hold a `Weak` back-reference, so a tree never
//! keeps resolution state alive and a copied tree must not point into the
//! original table.

use std::sync::{Arc, Weak};

use rustc_hash::FxHashMap;

use crate::{Ident, Name, Named, Span};

/// What a resolved identifier denotes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ObjKind {
    Package,
    Const,
    Type,
    Var,
    Func,
    Label,
}

/// A named entity produced by resolution.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Object {
    pub kind: ObjKind,
    pub name: Name,
    /// Span of the declaring identifier.
    pub decl: Span,
}

impl Object {
    pub fn new(kind: ObjKind, name: Name, decl: Span) -> Self {
        Object { kind, name, decl }
    }
}

impl Named for Object {
    fn name(&self) -> Name {
        self.name
    }
}

/// Maps names to the objects they resolve to, with an optional outer scope.
#[derive(Clone, Debug, Default)]
pub struct Scope {
    objects: FxHashMap<Name, Arc<Object>>,
    outer: Option<Arc<Scope>>,
}

impl Scope {
    pub fn new() -> Self {
        Scope::default()
    }

    pub fn with_outer(outer: Arc<Scope>) -> Self {
        Scope {
            objects: FxHashMap::default(),
            outer: Some(outer),
        }
    }

    /// Insert `obj`, returning the object it replaced if the name was taken.
    pub fn insert(&mut self, obj: Object) -> Option<Arc<Object>> {
        self.objects.insert(obj.name(), Arc::new(obj))
    }

    /// Find `name` in this scope or any enclosing one.
    pub fn lookup(&self, name: Name) -> Option<&Arc<Object>> {
        match self.objects.get(&name) {
            Some(obj) => Some(obj),
            None => self.outer.as_deref().and_then(|outer| outer.lookup(name)),
        }
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

/// Re-resolves freshly copied identifiers against some resolution table.
pub trait Resolver {
    fn resolve(&self, ident: &Ident) -> Option<Weak<Object>>;
}

impl Resolver for Scope {
    fn resolve(&self, ident: &Ident) -> Option<Weak<Object>> {
        self.lookup(ident.name()).map(Arc::downgrade)
    }
}

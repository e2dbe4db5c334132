//! Copy engine configuration.

/// What to do with literal nodes, which have no node-typed children.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum LiteralPolicy {
    /// Allocate a fresh node for every literal.
    #[default]
    Duplicate,
    /// Return the source literal's handle.
    Share,
}

/// What to do with an identifier's back-reference into resolution state.
///
/// The back-reference is never carried over as-is: it points into the
/// source tree's resolution table.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum ResolutionPolicy {
    /// Copied identifiers are unresolved.
    #[default]
    Strip,
    /// Ask the copier's `Resolver` for each copied identifier. Without a
    /// resolver this behaves like `Strip`.
    Rebind,
}

/// Stack growth parameters for deep trees.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct StackConfig {
    /// Grow the stack when less than this many bytes remain.
    pub red_zone: usize,
    /// Bytes allocated per growth.
    pub growth: usize,
}

impl Default for StackConfig {
    fn default() -> Self {
        StackConfig {
            red_zone: 100 * 1024,
            growth: 1024 * 1024,
        }
    }
}

/// Configuration for a `Copier`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct CopyConfig {
    pub literals: LiteralPolicy,
    pub resolutions: ResolutionPolicy,
    pub stack: StackConfig,
}

impl CopyConfig {
    #[must_use]
    pub fn with_literals(mut self, literals: LiteralPolicy) -> Self {
        self.literals = literals;
        self
    }

    #[must_use]
    pub fn with_resolutions(mut self, resolutions: ResolutionPolicy) -> Self {
        self.resolutions = resolutions;
        self
    }

    #[must_use]
    pub fn with_stack(mut self, stack: StackConfig) -> Self {
        self.stack = stack;
        self
    }
}

//! Arbor Copy - deep-copy engine for Arbor syntax trees
//!
//! Given any node, produces a structurally identical tree that shares no
//! node handles with the original, so the copy can be rewritten without
//! affecting the source.
//!
//! # Usage
//!
//! ```text
//! let mut queue = DiagnosticQueue::new();
//! let mut copier = Copier::new(CopyConfig::default(), &mut queue);
//! let copy = copier.copy_node(Some(&node));
//! ```
//!
//! `deep_copy` is the one-shot form with default configuration, forwarding
//! diagnostics to `tracing`.
//!
//! # Unsupported kinds
//!
//! Nodes the engine has no shape for (`Ext` variants) are returned as-is and
//! reported with a `W0001` warning. Everything else is duplicated.

mod config;
mod copier;
mod stack;
mod tracing_setup;

pub use config::{CopyConfig, LiteralPolicy, ResolutionPolicy, StackConfig};
pub use copier::{Copier, CopyStats};
pub use tracing_setup::init_tracing;

use arbor_diagnostic::TracingSink;
use arbor_ir::Node;

/// Copy `node` with the default configuration.
pub fn deep_copy(node: &Node) -> Node {
    let mut sink = TracingSink;
    Copier::new(CopyConfig::default(), &mut sink).copy(node)
}

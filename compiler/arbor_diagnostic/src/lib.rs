//! Diagnostics for the copy engine.
//!
//! The engine never writes to global output. It reports through a
//! [`DiagnosticSink`] supplied by the caller:
//! - [`DiagnosticQueue`] collects, deduplicates, and sorts diagnostics
//! - [`TracingSink`] forwards them to `tracing`
//! - `()` discards them
//!
//! ```text
//! let mut queue = DiagnosticQueue::new();
//! let copy = Copier::new(CopyConfig::default(), &mut queue).copy_expr(&expr);
//! for diag in queue.flush() {
//!     eprintln!("{diag}");
//! }
//! ```

mod diagnostic;
mod error_code;
pub mod queue;
mod sink;

pub use diagnostic::{resolution_dropped, unsupported_node, Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
pub use queue::{DiagnosticQueue, QueueConfig};
pub use sink::{DiagnosticSink, TracingSink};

//! Where diagnostics go.

use crate::{Diagnostic, Severity};

/// Receives diagnostics as they are produced.
pub trait DiagnosticSink {
    fn emit(&mut self, diagnostic: Diagnostic);
}

/// Discards everything.
impl DiagnosticSink for () {
    fn emit(&mut self, diagnostic: Diagnostic) {
        let _ = diagnostic;
    }
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn emit(&mut self, diagnostic: Diagnostic) {
        (**self).emit(diagnostic);
    }
}

/// Forwards diagnostics to the `tracing` subscriber.
///
/// Warnings are logged at `WARN`, notes at `DEBUG`.
#[derive(Copy, Clone, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&mut self, diagnostic: Diagnostic) {
        let span = diagnostic.primary_span().map(|s| s.to_range());
        match diagnostic.severity {
            Severity::Warning => tracing::warn!(
                code = %diagnostic.code,
                ?span,
                "{}",
                diagnostic.message
            ),
            Severity::Note => tracing::debug!(
                code = %diagnostic.code,
                ?span,
                "{}",
                diagnostic.message
            ),
        }
    }
}

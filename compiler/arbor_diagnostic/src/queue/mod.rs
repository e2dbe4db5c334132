//! Collecting sink with deduplication and a size limit.

use rustc_hash::FxHashSet;

use crate::{Diagnostic, DiagnosticSink};

/// Configuration for `DiagnosticQueue`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct QueueConfig {
    /// Maximum number of diagnostics kept (0 = unlimited).
    pub limit: usize,
    /// Drop diagnostics identical to one already queued.
    pub deduplicate: bool,
}

impl Default for QueueConfig {
    fn default() -> Self {
        QueueConfig {
            limit: 100,
            deduplicate: true,
        }
    }
}

impl QueueConfig {
    /// No limit and no deduplication (for testing).
    pub fn unlimited() -> Self {
        QueueConfig {
            limit: 0,
            deduplicate: false,
        }
    }
}

/// Queue for collecting diagnostics across one or more copies.
///
/// ```text
/// let mut queue = DiagnosticQueue::new();
/// Copier::new(config, &mut queue).copy_file(&file);
/// let sorted = queue.flush();
/// ```
#[derive(Clone, Debug, Default)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    seen: FxHashSet<Diagnostic>,
    /// Diagnostics rejected by the limit or deduplication.
    dropped: usize,
    config: QueueConfig,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::with_config(QueueConfig::default())
    }

    pub fn with_config(config: QueueConfig) -> Self {
        DiagnosticQueue {
            diagnostics: Vec::new(),
            seen: FxHashSet::default(),
            dropped: 0,
            config,
        }
    }

    /// Add a diagnostic. Returns `false` if it was filtered out.
    pub fn add(&mut self, diag: Diagnostic) -> bool {
        if self.limit_reached() {
            self.dropped += 1;
            return false;
        }

        if self.config.deduplicate && !self.seen.insert(diag.clone()) {
            self.dropped += 1;
            return false;
        }

        self.diagnostics.push(diag);
        true
    }

    pub fn limit_reached(&self) -> bool {
        self.config.limit > 0 && self.diagnostics.len() >= self.config.limit
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_warning()).count()
    }

    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Get diagnostics without clearing the queue.
    pub fn peek(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    /// Return diagnostics sorted by position and reset the queue.
    ///
    /// Diagnostics without a primary span sort first. The sort is stable,
    /// so diagnostics at the same position keep emission order.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let mut result = std::mem::take(&mut self.diagnostics);
        result.sort_by_key(|d| d.primary_span().map(|s| (s.start, s.end)));
        self.seen.clear();
        self.dropped = 0;
        result
    }
}

impl DiagnosticSink for DiagnosticQueue {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.add(diagnostic);
    }
}

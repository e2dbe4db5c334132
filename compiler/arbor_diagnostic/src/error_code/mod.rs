use std::fmt;

/// Diagnostic codes reported while copying a tree.
///
/// Format: W#### for warnings, N#### for notes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum ErrorCode {
    /// Node kind not known to the engine; the original handle was reused
    W0001,
    /// Identifier was bound in the source tree but could not be re-resolved
    N0001,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::W0001 => "W0001",
            ErrorCode::N0001 => "N0001",
        }
    }

    /// One-line explanation of the code.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::W0001 => "unsupported node kind was shared instead of copied",
            ErrorCode::N0001 => "identifier resolution was dropped during copy",
        }
    }

    pub fn is_warning(&self) -> bool {
        self.as_str().starts_with('W')
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

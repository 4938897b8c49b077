use std::fmt;

/// Non-fatal finding raised while validating a document.
///
/// Collected by the caller instead of printed, so the parse result stays a
/// pure function of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: u32,
    pub kind: DiagnosticKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    UnrecognizedElement { tag: String },
}

impl Diagnostic {
    pub fn unrecognized(line: u32, tag: impl Into<String>) -> Self {
        Diagnostic {
            line,
            kind: DiagnosticKind::UnrecognizedElement { tag: tag.into() },
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DiagnosticKind::UnrecognizedElement { tag } => write!(
                f,
                "XML error at line {}: Unrecognized element <{tag}>",
                self.line
            ),
        }
    }
}

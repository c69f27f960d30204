use std::fmt;

use thiserror::Error;

// The Display text of each kind is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiagnosticKind {
    #[error("Duplicate label: {0}")]
    DuplicateLabel(String),

    #[error("Directive {0} requires an argument.")]
    MissingDirectiveArgument(String),

    #[error("Instruction {0} requires an operand.")]
    MissingInstructionOperand(String),

    #[error("Unknown instruction or directive: {0}")]
    UnknownKeyword(String),
}

/// One linting issue. `line` is zero-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: usize,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn new(line: usize, kind: DiagnosticKind) -> Self {
        Diagnostic { line, kind }
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

// One-based, as printed by the command line tool
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {}", self.line + 1, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let cases = [
            (DiagnosticKind::DuplicateLabel("LOOP".into()), "Duplicate label: LOOP"),
            (
                DiagnosticKind::MissingDirectiveArgument(".EQUATE".into()),
                "Directive .EQUATE requires an argument.",
            ),
            (
                DiagnosticKind::MissingInstructionOperand("LDA".into()),
                "Instruction LDA requires an operand.",
            ),
            (
                DiagnosticKind::UnknownKeyword("FOO".into()),
                "Unknown instruction or directive: FOO",
            ),
        ];

        for (kind, expected) in cases {
            assert_eq!(Diagnostic::new(0, kind).message(), expected);
        }
    }

    #[test]
    fn display_is_one_based() {
        let d = Diagnostic::new(4, DiagnosticKind::UnknownKeyword("X".into()));
        assert_eq!(d.to_string(), "Line 5: Unknown instruction or directive: X");
    }
}

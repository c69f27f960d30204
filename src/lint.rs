use std::collections::HashSet;

use tracing::{debug, trace};

use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::grammar::Grammar;
use crate::syntax::{self, Keyword};

/// Line-by-line checker for Pep/8 source.
///
/// The linter only owns its grammar. Labels and diagnostics belong to a single
/// call to [`Linter::lint`], so one instance can be shared freely and repeated
/// calls on the same text give the same result.
#[derive(Debug, Clone, Default)]
pub struct Linter {
    grammar: Grammar,
}

// State of a single lint call
#[derive(Debug, Default)]
struct LintRun {
    labels: HashSet<String>,
    diagnostics: Vec<Diagnostic>,
}

impl LintRun {
    fn report(&mut self, line: usize, kind: DiagnosticKind) {
        debug!(line, %kind, "diagnostic");
        self.diagnostics.push(Diagnostic::new(line, kind));
    }
}

impl Linter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_grammar(grammar: Grammar) -> Self {
        Linter { grammar }
    }

    pub fn lint(&self, source: &str) -> Vec<Diagnostic> {
        let mut run = LintRun::default();

        for (index, line) in source.lines().enumerate() {
            let line = line.trim();

            // Ignore empty lines and comments
            if line.is_empty() || syntax::is_comment(line) {
                continue;
            }

            self.check_line(&mut run, line, index);
        }

        debug!(
            labels = run.labels.len(),
            diagnostics = run.diagnostics.len(),
            "lint finished"
        );
        run.diagnostics
    }

    fn check_line(&self, run: &mut LintRun, line: &str, index: usize) {
        let code = syntax::strip_comment(line);
        let mut tokens = code.split_whitespace().peekable();

        // Only the first token may define a label
        if let Some(name) = tokens.peek().copied().and_then(syntax::label_name) {
            if run.labels.contains(name) {
                run.report(index, DiagnosticKind::DuplicateLabel(name.to_string()));
            } else {
                run.labels.insert(name.to_string());
            }
            tokens.next();
        }

        let Some(first) = tokens.next() else {
            return;
        };
        let has_operand = tokens.next().is_some();

        let keyword = self.grammar.classify(first);
        trace!(line = index, ?keyword, has_operand, "classified");

        match keyword {
            Keyword::Unknown(k) => run.report(index, DiagnosticKind::UnknownKeyword(k)),
            kw if has_operand || !self.grammar.requires_operand(&kw) => (),
            Keyword::Directive(k) => run.report(index, DiagnosticKind::MissingDirectiveArgument(k)),
            Keyword::Instruction(k) => {
                run.report(index, DiagnosticKind::MissingInstructionOperand(k))
            }
        }
    }
}

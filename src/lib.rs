// Top-level public modules
pub mod config;
pub mod diagnostic;
pub mod grammar;
pub mod lint;
pub mod output;
pub mod source;
pub mod variables;

// Internal modules used by grammar and lint
mod data;
mod syntax;

use thiserror::Error;
use tracing::{debug, info, warn};

// Simplify the interface for users
pub use config::{Config, ConfigError, IType};
pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use grammar::Grammar;
pub use lint::Linter;
pub use output::{exit_status, render, FileReport};
pub use source::{FileSource, SourceError, SourceProvider, StringSource};
pub use syntax::Keyword;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RunError {
    #[error("No matching files found.")]
    NoMatchingFiles,
}

fn lint_one(
    linter: &Linter,
    provider: &dyn SourceProvider,
    name: String,
    list_variables: bool,
) -> FileReport {
    let text = match provider.load(&name) {
        Ok(t) => t,
        Err(e) => {
            warn!(file = %name, error = %e, "cannot load source");
            return FileReport {
                name,
                outcome: Err(e),
                variables: None,
            };
        }
    };

    let diagnostics = linter.lint(&text);
    debug!(file = %name, diagnostics = diagnostics.len(), "linted");

    let variables = list_variables.then(|| {
        variables::get_all_variables(text.lines())
            .into_iter()
            .map(|line| line.trim().to_string())
            .collect()
    });

    FileReport {
        name,
        outcome: Ok(diagnostics),
        variables,
    }
}

fn lint_all(
    provider: &dyn SourceProvider,
    names: Vec<String>,
    list_variables: bool,
) -> Result<Vec<FileReport>, RunError> {
    if names.is_empty() {
        return Err(RunError::NoMatchingFiles);
    }

    let linter = Linter::new();
    let reports: Vec<FileReport> = names
        .into_iter()
        .map(|name| lint_one(&linter, provider, name, list_variables))
        .collect();

    info!(
        files = reports.len(),
        clean = reports.iter().filter(|r| r.is_clean()).count(),
        "run finished"
    );
    Ok(reports)
}

// Lint every source unit named by the configuration, in order.
// Load failures are reported per file; only an empty file list is an error.
pub fn run(config: &Config) -> Result<Vec<FileReport>, RunError> {
    match &config.itype {
        IType::Patterns(p) => lint_all(&FileSource, source::expand_patterns(p), config.list_variables),
        IType::Strings(s) => lint_all(s, s.names(), config.list_variables),
    }
}

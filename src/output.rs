use std::fmt::Write;

use crate::diagnostic::Diagnostic;
use crate::source::SourceError;

// Result of linting one source unit
#[derive(Debug)]
pub struct FileReport {
    pub name: String,

    // Diagnostics, or the reason the source could not be loaded
    pub outcome: Result<Vec<Diagnostic>, SourceError>,

    // Variable definition lines, when requested
    pub variables: Option<Vec<String>>,
}

impl FileReport {
    pub fn is_clean(&self) -> bool {
        matches!(&self.outcome, Ok(d) if d.is_empty())
    }
}

fn render_one(out: &mut String, report: &FileReport) -> std::fmt::Result {
    match &report.outcome {
        Err(e) => writeln!(out, "Error: {e}")?,
        Ok(diagnostics) if diagnostics.is_empty() => {
            writeln!(out, "No linting errors found in {}.", report.name)?
        }
        Ok(diagnostics) => {
            writeln!(out, "Linting errors in {}:", report.name)?;
            for d in diagnostics {
                writeln!(out, "  {d}")?;
            }
        }
    }

    match &report.variables {
        Some(vars) if vars.is_empty() => {
            writeln!(out, "No variables defined in {}.", report.name)?
        }
        Some(vars) => {
            writeln!(out, "Variables in {}:", report.name)?;
            for v in vars {
                writeln!(out, "  {v}")?;
            }
        }
        None => (),
    }

    Ok(())
}

// Text printed for a whole run, one block per file in input order
pub fn render(reports: &[FileReport]) -> String {
    let mut out = String::new();
    for report in reports {
        render_one(&mut out, report).expect("Internal error: formatting into a String failed");
    }
    out
}

// Exit status: 1 if any file had diagnostics or could not be loaded
pub fn exit_status(reports: &[FileReport]) -> i32 {
    if reports.iter().all(FileReport::is_clean) {
        0
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::DiagnosticKind;

    fn report(name: &str, outcome: Result<Vec<Diagnostic>, SourceError>) -> FileReport {
        FileReport {
            name: name.to_string(),
            outcome,
            variables: None,
        }
    }

    #[test]
    fn clean_file() {
        let reports = [report("a.pep", Ok(vec![]))];
        assert_eq!(render(&reports), "No linting errors found in a.pep.\n");
        assert_eq!(exit_status(&reports), 0);
    }

    #[test]
    fn file_with_errors() {
        let reports = [report(
            "a.pep",
            Ok(vec![
                Diagnostic::new(0, DiagnosticKind::UnknownKeyword("FOO".into())),
                Diagnostic::new(2, DiagnosticKind::DuplicateLabel("L".into())),
            ]),
        )];
        assert_eq!(
            render(&reports),
            "Linting errors in a.pep:\n  Line 1: Unknown instruction or directive: FOO\n  Line 3: Duplicate label: L\n"
        );
        assert_eq!(exit_status(&reports), 1);
    }

    #[test]
    fn missing_file() {
        let reports = [
            report("a.pep", Ok(vec![])),
            report(
                "b.pep",
                Err(SourceError::NotFound {
                    name: "b.pep".into(),
                }),
            ),
        ];
        assert_eq!(
            render(&reports),
            "No linting errors found in a.pep.\nError: File 'b.pep' not found.\n"
        );
        assert_eq!(exit_status(&reports), 1);
    }

    #[test]
    fn variables_listing() {
        let mut r = report("a.pep", Ok(vec![]));
        r.variables = Some(vec!["x: .WORD 1".into()]);
        let mut empty = report("b.pep", Ok(vec![]));
        empty.variables = Some(vec![]);
        assert_eq!(
            render(&[r, empty]),
            "No linting errors found in a.pep.\nVariables in a.pep:\n  x: .WORD 1\nNo linting errors found in b.pep.\nNo variables defined in b.pep.\n"
        );
    }

    #[test]
    fn render_keeps_every_block_in_order() {
        let reports: Vec<FileReport> = (0..3)
            .map(|i| report(&format!("f{i}.pep"), Ok(vec![])))
            .collect();
        assert_eq!(
            render(&reports),
            "No linting errors found in f0.pep.\nNo linting errors found in f1.pep.\nNo linting errors found in f2.pep.\n"
        );
    }

    #[test]
    fn no_reports_is_success() {
        assert_eq!(exit_status(&[]), 0);
        assert_eq!(render(&[]), "");
    }
}

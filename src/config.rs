use indoc::indoc;
use thiserror::Error;

use crate::source::StringSource;

pub enum IType {
    // File patterns from the command line, wildcards allowed
    Patterns(Vec<String>),

    // In-memory sources, for tests
    Strings(StringSource),
}

pub struct Config {
    pub itype: IType,
    pub verbose: bool,
    pub list_variables: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("help requested")]
    HelpRequested,

    #[error("Invalid flag: {0}")]
    InvalidFlag(String),

    #[error("No input files given")]
    MissingInput,
}

// Name used for the source built by `Config::build_string_test`
pub const STRING_SOURCE_NAME: &str = "<string>";

pub fn help() -> &'static str {
    indoc! {"
        Usage: peplint [flags] <file1> <file2> ...

        Files may be given as patterns using * and ?, e.g. 'src/*.pep'.

        Flags (all are optional):
        -h: This help message
        -v: Verbose logging (RUST_LOG overrides)
        -l: Also list variable definitions of each file
    "}
}

impl Config {
    pub fn build(args: &[String]) -> Result<Config, ConfigError> {
        let mut verbose = false;
        let mut list_variables = false;
        let mut patterns = Vec::new();

        // Flags may appear anywhere; everything else is a file pattern.
        for a in args.iter().skip(1) {
            if a.starts_with('-') && a.len() > 1 {
                match a.as_str() {
                    "-h" => return Err(ConfigError::HelpRequested),
                    "-v" => verbose = true,
                    "-l" => list_variables = true,
                    _ => return Err(ConfigError::InvalidFlag(a.to_string())),
                }
            } else {
                patterns.push(a.to_string());
            }
        }

        if patterns.is_empty() {
            return Err(ConfigError::MissingInput);
        }

        return Ok(Config {
            itype: IType::Patterns(patterns),
            verbose,
            list_variables,
        });
    }

    pub fn build_string_test(input_string: &str) -> Config {
        Config {
            itype: IType::Strings(StringSource::new().with(STRING_SOURCE_NAME, input_string)),
            verbose: false,
            list_variables: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("peplint")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn patterns_and_flags() {
        let config = Config::build(&args(&["-l", "a.pep", "-v", "src/*.pep"])).unwrap();
        assert!(config.verbose);
        assert!(config.list_variables);
        match config.itype {
            IType::Patterns(p) => assert_eq!(p, vec!["a.pep", "src/*.pep"]),
            IType::Strings(_) => panic!("expected patterns"),
        }
    }

    #[test]
    fn defaults() {
        let config = Config::build(&args(&["a.pep"])).unwrap();
        assert!(!config.verbose);
        assert!(!config.list_variables);
    }

    #[test]
    fn no_arguments() {
        assert_eq!(Config::build(&args(&[])).err(), Some(ConfigError::MissingInput));
        assert_eq!(Config::build(&args(&["-v"])).err(), Some(ConfigError::MissingInput));
    }

    #[test]
    fn help_flag() {
        assert_eq!(
            Config::build(&args(&["a.pep", "-h"])).err(),
            Some(ConfigError::HelpRequested)
        );
    }

    #[test]
    fn invalid_flag() {
        assert_eq!(
            Config::build(&args(&["-x", "a.pep"])).err(),
            Some(ConfigError::InvalidFlag("-x".to_string()))
        );
    }

    #[test]
    fn lone_dash_is_a_pattern() {
        assert!(Config::build(&args(&["-"])).is_ok());
    }

    #[test]
    fn string_test_config() {
        let config = Config::build_string_test("STOP\n");
        assert!(matches!(config.itype, IType::Strings(_)));
    }
}

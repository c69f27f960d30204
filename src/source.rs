use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("File '{name}' not found.")]
    NotFound { name: String },

    #[error("Unable to read '{name}': {source}")]
    Unreadable {
        name: String,
        #[source]
        source: io::Error,
    },
}

// Anything that can hand the linter the text of a named source unit: files on
// disk, strings in memory, or a remote fetcher.
pub trait SourceProvider {
    fn load(&self, name: &str) -> Result<String, SourceError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FileSource;

impl SourceProvider for FileSource {
    fn load(&self, name: &str) -> Result<String, SourceError> {
        fs::read_to_string(name).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => SourceError::NotFound {
                name: name.to_string(),
            },
            _ => SourceError::Unreadable {
                name: name.to_string(),
                source: e,
            },
        })
    }
}

#[derive(Debug, Default, Clone)]
pub struct StringSource {
    sources: HashMap<String, String>,
}

impl StringSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, text: &str) -> Self {
        self.sources.insert(name.to_string(), text.to_string());
        self
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.sources.keys().cloned().collect();
        names.sort();
        names
    }
}

impl SourceProvider for StringSource {
    fn load(&self, name: &str) -> Result<String, SourceError> {
        self.sources
            .get(name)
            .cloned()
            .ok_or_else(|| SourceError::NotFound {
                name: name.to_string(),
            })
    }
}

fn has_wildcard(s: &str) -> bool {
    s.contains(['*', '?', '['])
}

// Matches `c` against the `[...]` class opening at `p[start]`.
// Returns whether it matched and the index just past the closing `]`,
// or None when the class is never closed and `[` is an ordinary character.
fn match_class(p: &[char], start: usize, c: char) -> Option<(bool, usize)> {
    let mut i = start + 1;
    let negate = p.get(i) == Some(&'!');
    if negate {
        i += 1;
    }

    let mut matched = false;
    let mut first = true;
    while i < p.len() {
        // A `]` right after the opening bracket is a member
        if p[i] == ']' && !first {
            return Some((matched != negate, i + 1));
        }
        first = false;

        if i + 2 < p.len() && p[i + 1] == '-' && p[i + 2] != ']' {
            matched |= p[i] <= c && c <= p[i + 2];
            i += 3;
        } else {
            matched |= p[i] == c;
            i += 1;
        }
    }

    None
}

// Index of the next pattern item if `c` matches the item at `pi`
fn match_one(p: &[char], pi: usize, c: char) -> Option<usize> {
    match *p.get(pi)? {
        '?' => Some(pi + 1),
        '[' => match match_class(p, pi, c) {
            Some((true, next)) => Some(next),
            Some((false, _)) => None,
            None => (c == '[').then_some(pi + 1),
        },
        lit => (lit == c).then_some(pi + 1),
    }
}

// `*` matches any run of characters, `?` exactly one, `[seq]` one character
// in seq and `[!seq]` one character outside it. Ranges like `a-z` are allowed.
pub fn glob_match(pattern: &str, text: &str) -> bool {
    let p: Vec<char> = pattern.chars().collect();
    let t: Vec<char> = text.chars().collect();
    let mut pi = 0;
    let mut ti = 0;
    let mut star_pi = None;
    let mut star_ti = 0;

    while ti < t.len() {
        if p.get(pi) == Some(&'*') {
            star_pi = Some(pi);
            star_ti = ti;
            pi += 1;
        } else if let Some(next) = match_one(&p, pi, t[ti]) {
            pi = next;
            ti += 1;
        } else if let Some(sp) = star_pi {
            pi = sp + 1;
            star_ti += 1;
            ti = star_ti;
        } else {
            return false;
        }
    }

    while p.get(pi) == Some(&'*') {
        pi += 1;
    }

    pi == p.len()
}

// Entries of `dir` whose names match `part`. Hidden entries are matched only
// by parts that start with a dot themselves. Intermediate components must be
// directories and the last one must be a file.
fn matching_entries(dir: &Path, part: &str, last: bool) -> Vec<PathBuf> {
    let listing = if dir.as_os_str().is_empty() {
        Path::new(".")
    } else {
        dir
    };

    let entries = match fs::read_dir(listing) {
        Ok(entries) => entries,
        Err(e) => {
            debug!(dir = %listing.display(), error = %e, "cannot list directory");
            return Vec::new();
        }
    };

    entries
        .filter_map(Result::ok)
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| !name.starts_with('.') || part.starts_with('.'))
        .filter(|name| glob_match(part, name))
        .map(|name| dir.join(name))
        .filter(|path| if last { path.is_file() } else { path.is_dir() })
        .collect()
}

// Wildcards may appear in any path component; each one is expanded against
// the directories matched so far.
fn expand_pattern(pattern: &str) -> Vec<String> {
    if !has_wildcard(pattern) {
        return if Path::new(pattern).exists() {
            vec![pattern.to_string()]
        } else {
            Vec::new()
        };
    }

    let components: Vec<Component<'_>> = Path::new(pattern).components().collect();
    let mut found = vec![PathBuf::new()];

    for (i, component) in components.iter().enumerate() {
        let last = i + 1 == components.len();
        found = match component.as_os_str().to_str() {
            Some(part) if has_wildcard(part) => found
                .iter()
                .flat_map(|dir| matching_entries(dir, part, last))
                .collect(),
            _ => found.into_iter().map(|dir| dir.join(component)).collect(),
        };

        if found.is_empty() {
            break;
        }
    }

    let mut matches: Vec<String> = found
        .into_iter()
        .filter(|path| path.exists())
        .map(|path| path.to_string_lossy().into_owned())
        .collect();

    matches.sort();
    matches
}

/// Expands command-line file patterns into existing paths, keeping the order
/// of the patterns and sorting the matches of each.
pub fn expand_patterns<S: AsRef<str>>(patterns: &[S]) -> Vec<String> {
    patterns
        .iter()
        .flat_map(|p| {
            let found = expand_pattern(p.as_ref());
            debug!(pattern = p.as_ref(), matches = found.len(), "expanded");
            found
        })
        .collect()
}

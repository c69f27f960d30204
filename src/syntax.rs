// Line shapes recognised by the linter

pub const COMMENT_START: char = ';';

// Classification of the first token of a line, after any label.
// Each variant carries the upper-cased keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Keyword {
    Directive(String),
    Instruction(String),
    Unknown(String),
}

impl Keyword {
    pub fn text(&self) -> &str {
        match self {
            Keyword::Directive(k) | Keyword::Instruction(k) | Keyword::Unknown(k) => k,
        }
    }
}

// A trimmed line made only of a comment
pub fn is_comment(line: &str) -> bool {
    line.starts_with(COMMENT_START)
}

// Drop everything from the first comment character onward.
// Semicolons inside string operands are not special-cased.
pub fn strip_comment(line: &str) -> &str {
    match line.find(COMMENT_START) {
        Some(pos) => line[..pos].trim(),
        None => line.trim(),
    }
}

// Returns the label name if the token starts with `[A-Za-z_]\w*:`.
// Anything after the colon is part of the same token and is discarded with it.
pub fn label_name(token: &str) -> Option<&str> {
    let mut chars = token.char_indices();

    match chars.next() {
        Some((_, c)) if c.is_ascii_alphabetic() || c == '_' => (),
        _ => return None,
    }

    for (pos, c) in chars {
        if c == ':' {
            return Some(&token[..pos]);
        }
        if !(c.is_alphanumeric() || c == '_') {
            return None;
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_lines() {
        assert!(is_comment("; hello"));
        assert!(is_comment(";"));
        assert!(!is_comment("LDA 1,i ; load"));
    }

    #[test]
    fn strip_inline_comment() {
        assert_eq!(strip_comment("LDA 1,i ; load one"), "LDA 1,i");
        assert_eq!(strip_comment("STOP"), "STOP");
        assert_eq!(strip_comment("  ; only comment"), "");
        assert_eq!(strip_comment(".ASCII \"a;b\""), ".ASCII \"a");
    }

    #[test]
    fn labels() {
        assert_eq!(label_name("LOOP:"), Some("LOOP"));
        assert_eq!(label_name("_x1:"), Some("_x1"));
        assert_eq!(label_name("main:extra"), Some("main"));
        assert_eq!(label_name("a::"), Some("a"));
    }

    #[test]
    fn not_labels() {
        assert_eq!(label_name("LOOP"), None);
        assert_eq!(label_name("1abc:"), None);
        assert_eq!(label_name(":"), None);
        assert_eq!(label_name("a-b:"), None);
        assert_eq!(label_name(".END:"), None);
        assert_eq!(label_name(""), None);
    }

    #[test]
    fn keyword_text() {
        assert_eq!(Keyword::Unknown("FOO".to_string()).text(), "FOO");
        assert_eq!(Keyword::Directive(".END".to_string()).text(), ".END");
    }
}

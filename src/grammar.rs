use std::collections::HashSet;

use crate::data::{DIRECTIVES, END_DIRECTIVE, INSTRUCTIONS, ZERO_OPERAND_INSTRUCTIONS};
use crate::syntax::Keyword;

/// Closed vocabulary the linter classifies tokens against.
///
/// Keywords are stored upper-cased; every lookup is whole-token and
/// case-insensitive.
#[derive(Debug, Clone)]
pub struct Grammar {
    instructions: HashSet<String>,
    directives: HashSet<String>,
    zero_operand: HashSet<String>,
}

fn upper_set<I, S>(keywords: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    keywords
        .into_iter()
        .map(|k| k.as_ref().to_ascii_uppercase())
        .collect()
}

impl Grammar {
    pub fn new<I, D, Z, S>(instructions: I, directives: D, zero_operand: Z) -> Self
    where
        I: IntoIterator<Item = S>,
        D: IntoIterator<Item = S>,
        Z: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Grammar {
            instructions: upper_set(instructions),
            directives: upper_set(directives),
            zero_operand: upper_set(zero_operand),
        }
    }

    /// The reference Pep/8 grammar.
    pub fn pep8() -> Self {
        Self::new(
            INSTRUCTIONS.iter().copied(),
            DIRECTIVES.iter().copied(),
            ZERO_OPERAND_INSTRUCTIONS.iter().copied(),
        )
    }

    pub fn is_directive(&self, keyword: &str) -> bool {
        keyword.starts_with('.') && self.directives.contains(&keyword.to_ascii_uppercase())
    }

    pub fn is_instruction(&self, mnemonic: &str) -> bool {
        self.instructions.contains(&mnemonic.to_ascii_uppercase())
    }

    // Directives need an argument unless they end the program.
    // Instructions need an operand unless listed as zero-operand.
    // Unknown keywords have no operand rule.
    pub fn requires_operand(&self, keyword: &Keyword) -> bool {
        match keyword {
            Keyword::Directive(k) => !k.eq_ignore_ascii_case(END_DIRECTIVE),
            Keyword::Instruction(k) => !self.zero_operand.contains(&k.to_ascii_uppercase()),
            Keyword::Unknown(_) => false,
        }
    }

    // Directives are tried before instructions. The keyword is upper-cased
    // with full Unicode rules so messages show it as written, in capitals.
    pub fn classify(&self, token: &str) -> Keyword {
        let keyword = token.to_uppercase();
        if self.is_directive(&keyword) {
            Keyword::Directive(keyword)
        } else if self.is_instruction(&keyword) {
            Keyword::Instruction(keyword)
        } else {
            Keyword::Unknown(keyword)
        }
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::pep8()
    }
}

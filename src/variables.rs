// Storage-defining lines: a label plus one of the pseudo-instructions below

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PseudoInstruction {
    Addrss,
    Ascii,
    Block,
    Byte,
    Equate,
    Word,
}

impl PseudoInstruction {
    pub const ALL: [PseudoInstruction; 6] = [
        PseudoInstruction::Addrss,
        PseudoInstruction::Ascii,
        PseudoInstruction::Block,
        PseudoInstruction::Byte,
        PseudoInstruction::Equate,
        PseudoInstruction::Word,
    ];

    pub fn keyword(&self) -> &'static str {
        match self {
            PseudoInstruction::Addrss => ".ADDRSS",
            PseudoInstruction::Ascii => ".ASCII",
            PseudoInstruction::Block => ".BLOCK",
            PseudoInstruction::Byte => ".BYTE",
            PseudoInstruction::Equate => ".EQUATE",
            PseudoInstruction::Word => ".WORD",
        }
    }
}

// Substring checks only: the keyword may sit anywhere on the line, and
// matching is case-sensitive.
pub fn is_variable_definition(line: &str) -> bool {
    if !line.contains(':') {
        return false;
    }

    PseudoInstruction::ALL
        .iter()
        .any(|p| line.contains(p.keyword()))
}

pub fn get_all_variables<'a, I>(lines: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .filter(|line| is_variable_definition(line))
        .collect()
}

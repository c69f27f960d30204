// Pep/8 mnemonics, including register-suffixed (A/X) and numbered variants.
pub const INSTRUCTIONS: &[&str] = &[
    "ADDA", "ADDSP", "ADDX",
    "ANDA", "ANDX",
    "ASLA", "ASLX",
    "ASRA", "ASRX",
    "BR", "BRC", "BREQ", "BRGE", "BRGT", "BRLE", "BRLT", "BRNE", "BRV",
    "CALL",
    "CHARI", "CHARO",
    "CPA", "CPX",
    "DECI", "DECO",
    "LDA", "LDX", "LDBYTEA", "LDBYTEX",
    "MOVFLGA", "MOVSPA",
    "NEGA", "NEGX",
    "NOP", "NOP0", "NOP1", "NOP2", "NOP3",
    "NOTA", "NOTX",
    "ORA", "ORX",
    "RET0", "RET1", "RET2", "RET3", "RET4", "RET5", "RET6", "RET7", "RETTR",
    "ROLA", "ROLX",
    "RORA", "RORX",
    "STA", "STX", "STBYTEA", "STBYTEX",
    "STOP",
    "STRO",
    "SUBA", "SUBX", "SUBSP",
];

pub const DIRECTIVES: &[&str] = &[
    ".EQUATE", ".ASCII", ".BLOCK", ".BURN", ".BYTE", ".END", ".WORD", ".ADDRSS",
];

// Mnemonics accepted without an operand.
// RET has no entry in INSTRUCTIONS, so only RET0 is reachable from the RET family.
pub const ZERO_OPERAND_INSTRUCTIONS: &[&str] = &[
    "ASLA", "ASLX", "ASRA", "ASRX", "STOP", "RET", "RET0", "NOP", "NOP0",
];

// The only directive that stands on its own.
pub const END_DIRECTIVE: &str = ".END";

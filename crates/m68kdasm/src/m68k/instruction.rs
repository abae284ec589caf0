use std::fmt;

use crate::error::ErrorKind;

/// Operation size suffix (.B, .W, .L).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    Byte,
    Word,
    Long,
}

impl Size {
    /// Size suffix in canonical syntax.
    pub fn suffix(&self) -> &'static str {
        match self {
            Size::Byte => ".B",
            Size::Word => ".W",
            Size::Long => ".L",
        }
    }

    /// Number of bytes this size occupies.
    pub fn bytes(&self) -> u8 {
        match self {
            Size::Byte => 1,
            Size::Word => 2,
            Size::Long => 4,
        }
    }

    /// Extension words an immediate of this size takes in the instruction
    /// stream. Byte immediates still occupy a full word.
    pub fn immediate_words(&self) -> usize {
        match self {
            Size::Byte | Size::Word => 1,
            Size::Long => 2,
        }
    }

    /// The size field used by most families: 00=B, 01=W, 10=L.
    pub fn from_standard_bits(bits: u16) -> Result<Self, ErrorKind> {
        match bits & 0x3 {
            0 => Ok(Size::Byte),
            1 => Ok(Size::Word),
            2 => Ok(Size::Long),
            b => Err(ErrorKind::InvalidSizeField { bits: b as u8 }),
        }
    }

    /// The MOVE size field: 01=B, 11=W, 10=L.
    pub fn from_move_bits(bits: u16) -> Result<Self, ErrorKind> {
        match bits & 0x3 {
            1 => Ok(Size::Byte),
            3 => Ok(Size::Word),
            2 => Ok(Size::Long),
            b => Err(ErrorKind::InvalidSizeField { bits: b as u8 }),
        }
    }
}

/// Condition codes for Bcc, DBcc and Scc.
///
/// These correspond to the 4-bit condition field (bits 11-8) in
/// the opcode word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// 0000: True (always)
    True,
    /// 0001: False (never)
    False,
    /// 0010: High (!C & !Z)
    Hi,
    /// 0011: Low or Same (C | Z)
    Ls,
    /// 0100: Carry Clear / High or Same (!C)
    Cc,
    /// 0101: Carry Set / Low (C)
    Cs,
    /// 0110: Not Equal (!Z)
    Ne,
    /// 0111: Equal (Z)
    Eq,
    /// 1000: Overflow Clear (!V)
    Vc,
    /// 1001: Overflow Set (V)
    Vs,
    /// 1010: Plus (!N)
    Pl,
    /// 1011: Minus (N)
    Mi,
    /// 1100: Greater or Equal
    Ge,
    /// 1101: Less Than
    Lt,
    /// 1110: Greater Than
    Gt,
    /// 1111: Less or Equal
    Le,
}

impl Condition {
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0xF {
            0x0 => Condition::True,
            0x1 => Condition::False,
            0x2 => Condition::Hi,
            0x3 => Condition::Ls,
            0x4 => Condition::Cc,
            0x5 => Condition::Cs,
            0x6 => Condition::Ne,
            0x7 => Condition::Eq,
            0x8 => Condition::Vc,
            0x9 => Condition::Vs,
            0xA => Condition::Pl,
            0xB => Condition::Mi,
            0xC => Condition::Ge,
            0xD => Condition::Lt,
            0xE => Condition::Gt,
            _ => Condition::Le,
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            Condition::True => "T",
            Condition::False => "F",
            Condition::Hi => "HI",
            Condition::Ls => "LS",
            Condition::Cc => "CC",
            Condition::Cs => "CS",
            Condition::Ne => "NE",
            Condition::Eq => "EQ",
            Condition::Vc => "VC",
            Condition::Vs => "VS",
            Condition::Pl => "PL",
            Condition::Mi => "MI",
            Condition::Ge => "GE",
            Condition::Lt => "LT",
            Condition::Gt => "GT",
            Condition::Le => "LE",
        }
    }
}

/// Mnemonic of the raw-data pseudo-instruction.
pub const DATA_WORD_MNEMONIC: &str = "DC.W";

/// A fully decoded 68k instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Instruction {
    /// Address of the first byte of this instruction.
    pub address: u32,
    /// The first word of the instruction.
    pub opcode: u16,
    /// Canonical mnemonic including any size suffix (e.g. `ADD.W`, `BNE.S`).
    pub mnemonic: String,
    /// Canonical operand text, `", "`-separated; empty when there are none.
    pub operands: String,
    /// Total instruction length in bytes.
    pub size: usize,
    /// The raw instruction bytes.
    pub raw_bytes: Vec<u8>,
}

impl Instruction {
    /// Mnemonic and operands as they would be fed back to an assembler.
    pub fn assembly(&self) -> String {
        if self.operands.is_empty() {
            self.mnemonic.clone()
        } else {
            format!("{} {}", self.mnemonic, self.operands)
        }
    }

    /// Address of the instruction that follows this one.
    pub fn next_address(&self) -> u32 {
        self.address.wrapping_add(self.size as u32)
    }

    /// True for the `DC.W` pseudo-instruction emitted for unrecognized words.
    pub fn is_data(&self) -> bool {
        self.mnemonic == DATA_WORD_MNEMONIC
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08X}: {}", self.address, self.assembly())
    }
}

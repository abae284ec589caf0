use std::fmt;

use crate::m68k::instruction::Instruction;

/// What went wrong while decoding, without location context.
///
/// Family decoders and the addressing-mode decoder only see a byte window,
/// so they report one of these and the engine wraps it in a [`DecodeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The buffer ends before the opcode word or one of its extension words.
    InsufficientData { needed: usize, available: usize },
    /// A mode/register combination the 68000 does not define (mode 7, reg 5-7).
    InvalidAddressingMode { mode: u8, reg: u8 },
    /// A 2-bit size field holding the reserved value for its family.
    InvalidSizeField { bits: u8 },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InsufficientData { needed, available } => {
                write!(f, "need {needed} bytes, only {available} available")
            }
            ErrorKind::InvalidAddressingMode { mode, reg } => {
                write!(f, "invalid addressing mode {mode}.{reg}")
            }
            ErrorKind::InvalidSizeField { bits } => {
                write!(f, "invalid size field %{bits:02b}")
            }
        }
    }
}

/// A decode failure at a known location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeError {
    /// Address of the instruction that failed to decode.
    pub address: u32,
    /// The opcode word, if at least two bytes were available.
    pub opcode: Option<u16>,
    pub kind: ErrorKind,
}

impl DecodeError {
    pub fn new(address: u32, opcode: Option<u16>, kind: ErrorKind) -> Self {
        DecodeError {
            address,
            opcode,
            kind,
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.opcode {
            Some(opcode) => write!(
                f,
                "at ${:08X} (opcode ${opcode:04X}): {}",
                self.address, self.kind
            ),
            None => write!(f, "at ${:08X}: {}", self.address, self.kind),
        }
    }
}

impl std::error::Error for DecodeError {}

/// A range walk that stopped early.
///
/// Carries every instruction decoded before the failure so callers can see
/// how far decoding progressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeError {
    pub decoded: Vec<Instruction>,
    pub error: DecodeError,
}

impl RangeError {
    /// Number of bytes covered by the successfully decoded prefix.
    pub fn consumed(&self) -> usize {
        self.decoded.iter().map(|inst| inst.size).sum()
    }
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "decoding stopped after {} instructions: {}",
            self.decoded.len(),
            self.error
        )
    }
}

impl std::error::Error for RangeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

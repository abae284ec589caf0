use crate::error::{DecodeError, ErrorKind, RangeError};

use super::addressing::{self, EffectiveAddress};
use super::instruction::{Instruction, Size, DATA_WORD_MNEMONIC};
use super::table;

/// Signature shared by every instruction-family decoder.
///
/// The context is positioned just past the opcode word; the decoder pulls
/// whatever extension words it needs and returns the rendered fields.
pub type DecoderFn = fn(&mut DecodeCtx<'_>, u16) -> Result<Fields, ErrorKind>;

/// What a family decoder produces: everything except the location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fields {
    pub mnemonic: String,
    pub operands: String,
    /// Bytes consumed, including the opcode word.
    pub len: usize,
}

impl Fields {
    /// The `DC.W $XXXX` pseudo-instruction for a word with no 68000 meaning.
    pub fn data_word(opcode: u16) -> Self {
        Fields {
            mnemonic: DATA_WORD_MNEMONIC.to_string(),
            operands: format!("${opcode:04X}"),
            len: 2,
        }
    }
}

/// Per-instruction decode state wrapping a byte slice with position tracking.
///
/// `data` starts at the opcode word. A fresh context is built for every
/// instruction, so decoders never see state from a previous decode.
pub struct DecodeCtx<'a> {
    data: &'a [u8],
    address: u32,
    pos: usize,
}

impl<'a> DecodeCtx<'a> {
    /// Context for the instruction at `address`, positioned after the opcode.
    pub fn new(data: &'a [u8], address: u32) -> Self {
        DecodeCtx {
            data,
            address,
            pos: 2,
        }
    }

    /// Address of the instruction being decoded.
    pub fn address(&self) -> u32 {
        self.address
    }

    /// Address of the next unread word.
    pub fn current_pc(&self) -> u32 {
        self.address.wrapping_add(self.pos as u32)
    }

    pub fn read_u16(&mut self) -> Result<u16, ErrorKind> {
        let val = addressing::read_word(self.data, self.pos)?;
        self.pos += 2;
        Ok(val)
    }

    pub fn read_u32(&mut self) -> Result<u32, ErrorKind> {
        let val = addressing::read_long(self.data, self.pos)?;
        self.pos += 4;
        Ok(val)
    }

    /// Read an immediate operand of the given size from the instruction stream.
    pub fn read_immediate(&mut self, size: Size) -> Result<u32, ErrorKind> {
        let (value, words) = addressing::read_immediate(self.data, self.pos, size)?;
        self.pos += words * 2;
        Ok(value)
    }

    /// Decode an effective address whose extension words start at the
    /// current position.
    pub fn ea(&mut self, mode: u8, reg: u8, size: Size) -> Result<EffectiveAddress, ErrorKind> {
        let rest = &self.data[self.pos.min(self.data.len())..];
        let (ea, words) = addressing::decode_ea(rest, mode, reg, size).map_err(|e| {
            // Report lengths relative to the start of the instruction.
            match e {
                ErrorKind::InsufficientData { needed, available } => {
                    ErrorKind::InsufficientData {
                        needed: needed + self.pos,
                        available: available + self.pos,
                    }
                }
                other => other,
            }
        })?;
        self.pos += words * 2;
        Ok(ea)
    }

    /// Like [`DecodeCtx::ea`], rendered straight to operand text.
    pub fn operand(&mut self, mode: u8, reg: u8, size: Size) -> Result<String, ErrorKind> {
        Ok(self.ea(mode, reg, size)?.text())
    }

    /// Wrap up the decode with the given mnemonic and operand text.
    pub fn finish(&self, mnemonic: impl Into<String>, operands: impl Into<String>) -> Fields {
        Fields {
            mnemonic: mnemonic.into(),
            operands: operands.into(),
            len: self.pos,
        }
    }
}

/// Decode a single instruction.
///
/// - `data`: bytes starting at the instruction's first byte
/// - `address`: the logical address of `data[0]`
///
/// Words that match no dispatch entry decode as `DC.W $XXXX` with size 2,
/// so a caller can always make forward progress. Errors are reserved for
/// truncated input and encodings the architecture rejects.
pub fn decode_instruction(data: &[u8], address: u32) -> Result<Instruction, DecodeError> {
    let opcode = addressing::read_word(data, 0)
        .map_err(|kind| DecodeError::new(address, None, kind))?;

    let fields = match table::resolve(opcode) {
        Some(pattern) => {
            let mut ctx = DecodeCtx::new(data, address);
            (pattern.decode)(&mut ctx, opcode)
                .map_err(|kind| DecodeError::new(address, Some(opcode), kind))?
        }
        None => Fields::data_word(opcode),
    };

    Ok(Instruction {
        address,
        opcode,
        mnemonic: fields.mnemonic,
        operands: fields.operands,
        size: fields.len,
        raw_bytes: data[..fields.len].to_vec(),
    })
}

/// Iterator over the instructions in a byte range.
///
/// Yields `Err` once on the first decode failure and then stops.
pub struct Instructions<'a> {
    data: &'a [u8],
    start_address: u32,
    offset: usize,
    failed: bool,
}

impl Instructions<'_> {
    /// Byte offset of the next instruction to decode (or of the failure).
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl Iterator for Instructions<'_> {
    type Item = Result<Instruction, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.offset >= self.data.len() {
            return None;
        }
        let address = self.start_address.wrapping_add(self.offset as u32);
        match decode_instruction(&self.data[self.offset..], address) {
            Ok(inst) => {
                self.offset += inst.size;
                Some(Ok(inst))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

impl std::iter::FusedIterator for Instructions<'_> {}

/// Walk `data` instruction by instruction, starting at `start_address`.
pub fn instructions(data: &[u8], start_address: u32) -> Instructions<'_> {
    Instructions {
        data,
        start_address,
        offset: 0,
        failed: false,
    }
}

/// Decode every instruction in `data`.
///
/// On failure the error carries all instructions decoded before it.
pub fn decode_range(data: &[u8], start_address: u32) -> Result<Vec<Instruction>, RangeError> {
    let mut decoded = Vec::new();
    for result in instructions(data, start_address) {
        match result {
            Ok(inst) => decoded.push(inst),
            Err(error) => return Err(RangeError { decoded, error }),
        }
    }
    Ok(decoded)
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Decode one instruction at address 0 and return its assembly text.
    pub(crate) fn asm(bytes: &[u8]) -> String {
        asm_at(bytes, 0)
    }

    pub(crate) fn asm_at(bytes: &[u8], address: u32) -> String {
        let inst = decode_instruction(bytes, address).unwrap();
        assert_eq!(inst.size, inst.raw_bytes.len());
        inst.assembly()
    }

    /// Run a single family decoder in isolation.
    pub(crate) fn run(decoder: DecoderFn, bytes: &[u8]) -> Result<Fields, ErrorKind> {
        let opcode = u16::from_be_bytes([bytes[0], bytes[1]]);
        let mut ctx = DecodeCtx::new(bytes, 0);
        decoder(&mut ctx, opcode)
    }

    /// Decode one instruction and return its length in bytes.
    pub(crate) fn len(bytes: &[u8]) -> usize {
        decode_instruction(bytes, 0).unwrap().size
    }
}

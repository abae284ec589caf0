use crate::error::ErrorKind;
use crate::output::formatter::format_ea;

use super::instruction::Size;

/// One of the 68000's 12 effective addressing modes.
///
/// The 68k encodes effective addresses using a 3-bit mode field and a
/// 3-bit register field. Modes 0-6 use the register field directly;
/// mode 7 overloads the register field to select among absolute,
/// PC-relative, and immediate modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectiveAddress {
    /// Dn: data register direct
    DataDirect(u8),
    /// An: address register direct
    AddressDirect(u8),
    /// (An): address register indirect
    AddressIndirect(u8),
    /// (An)+: address register indirect with postincrement
    AddressPostIncrement(u8),
    /// -(An): address register indirect with predecrement
    AddressPreDecrement(u8),
    /// (d16,An): address register indirect with 16-bit displacement
    AddressDisplacement(u8, i16),
    /// (d8,An,Xn.size): address register indirect with index
    AddressIndex {
        reg: u8,
        index_reg: IndexRegister,
        index_size: Size,
        displacement: i8,
    },
    /// (xxx).W: absolute short (16-bit, sign-extended to 32)
    AbsoluteShort(u16),
    /// (xxx).L: absolute long (32-bit)
    AbsoluteLong(u32),
    /// (d16,PC): PC-relative with 16-bit displacement
    PcDisplacement(i16),
    /// (d8,PC,Xn.size): PC-relative with index
    PcIndex {
        index_reg: IndexRegister,
        index_size: Size,
        displacement: i8,
    },
    /// #imm: immediate value, tagged with the width it was read at
    Immediate { value: u32, size: Size },
}

/// Identifies an index register used in indexed addressing modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexRegister {
    /// Data register D0-D7
    Data(u8),
    /// Address register A0-A7
    Address(u8),
}

impl EffectiveAddress {
    /// Effective address as printed in an operand list.
    pub fn text(&self) -> String {
        format_ea(self)
    }
}

/// Decode a 6-bit effective address field.
///
/// `data` is the instruction stream positioned right after everything the
/// caller has already consumed. `size` is the operand size of the enclosing
/// instruction and only matters for immediates. Returns the decoded address
/// and the number of extension words it occupies.
pub fn decode_ea(
    data: &[u8],
    mode: u8,
    reg: u8,
    size: Size,
) -> Result<(EffectiveAddress, usize), ErrorKind> {
    let reg = reg & 0x7;
    match mode & 0x7 {
        0 => Ok((EffectiveAddress::DataDirect(reg), 0)),
        1 => Ok((EffectiveAddress::AddressDirect(reg), 0)),
        2 => Ok((EffectiveAddress::AddressIndirect(reg), 0)),
        3 => Ok((EffectiveAddress::AddressPostIncrement(reg), 0)),
        4 => Ok((EffectiveAddress::AddressPreDecrement(reg), 0)),
        5 => {
            let disp = read_word(data, 0)? as i16;
            Ok((EffectiveAddress::AddressDisplacement(reg, disp), 1))
        }
        6 => {
            let ext = read_word(data, 0)?;
            let (index_reg, index_size, displacement) = decode_index_word(ext);
            Ok((
                EffectiveAddress::AddressIndex {
                    reg,
                    index_reg,
                    index_size,
                    displacement,
                },
                1,
            ))
        }
        _ => match reg {
            0 => Ok((EffectiveAddress::AbsoluteShort(read_word(data, 0)?), 1)),
            1 => Ok((EffectiveAddress::AbsoluteLong(read_long(data, 0)?), 2)),
            2 => {
                let disp = read_word(data, 0)? as i16;
                Ok((EffectiveAddress::PcDisplacement(disp), 1))
            }
            3 => {
                let ext = read_word(data, 0)?;
                let (index_reg, index_size, displacement) = decode_index_word(ext);
                Ok((
                    EffectiveAddress::PcIndex {
                        index_reg,
                        index_size,
                        displacement,
                    },
                    1,
                ))
            }
            4 => {
                let (value, words) = read_immediate(data, 0, size)?;
                Ok((EffectiveAddress::Immediate { value, size }, words))
            }
            _ => Err(ErrorKind::InvalidAddressingMode { mode: 7, reg }),
        },
    }
}

/// Decode an effective address straight to operand text.
pub fn decode_operand(
    data: &[u8],
    mode: u8,
    reg: u8,
    size: Size,
) -> Result<(String, usize), ErrorKind> {
    let (ea, words) = decode_ea(data, mode, reg, size)?;
    Ok((ea.text(), words))
}

/// Split a brief extension word into index register, index size and
/// 8-bit displacement.
fn decode_index_word(ext: u16) -> (IndexRegister, Size, i8) {
    let num = ((ext >> 12) & 0x7) as u8;
    let index_reg = if ext & 0x8000 != 0 {
        IndexRegister::Address(num)
    } else {
        IndexRegister::Data(num)
    };
    let index_size = if ext & 0x0800 != 0 { Size::Long } else { Size::Word };
    (index_reg, index_size, (ext & 0xFF) as i8)
}

/// Read an immediate of the given operand size at `offset`.
///
/// Byte immediates occupy a full word; only the low byte is kept.
pub(crate) fn read_immediate(
    data: &[u8],
    offset: usize,
    size: Size,
) -> Result<(u32, usize), ErrorKind> {
    let value = match size {
        Size::Byte => u32::from(read_word(data, offset)? & 0xFF),
        Size::Word => u32::from(read_word(data, offset)?),
        Size::Long => read_long(data, offset)?,
    };
    Ok((value, size.immediate_words()))
}

pub(crate) fn read_word(data: &[u8], offset: usize) -> Result<u16, ErrorKind> {
    match data.get(offset..offset + 2) {
        Some(bytes) => Ok(u16::from_be_bytes([bytes[0], bytes[1]])),
        None => Err(ErrorKind::InsufficientData {
            needed: offset + 2,
            available: data.len(),
        }),
    }
}

pub(crate) fn read_long(data: &[u8], offset: usize) -> Result<u32, ErrorKind> {
    match data.get(offset..offset + 4) {
        Some(bytes) => Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])),
        None => Err(ErrorKind::InsufficientData {
            needed: offset + 4,
            available: data.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(data: &[u8], mode: u8, reg: u8, size: Size) -> (String, usize) {
        decode_operand(data, mode, reg, size).unwrap()
    }

    #[test]
    fn register_modes_take_no_extension_words() {
        assert_eq!(text(&[], 0, 3, Size::Word), ("D3".to_string(), 0));
        assert_eq!(text(&[], 1, 7, Size::Word), ("A7".to_string(), 0));
        assert_eq!(text(&[], 2, 1, Size::Word), ("(A1)".to_string(), 0));
        assert_eq!(text(&[], 3, 2, Size::Word), ("(A2)+".to_string(), 0));
        assert_eq!(text(&[], 4, 7, Size::Word), ("-(A7)".to_string(), 0));
    }

    #[test]
    fn displacement_is_signed() {
        // (-552,A6)
        assert_eq!(
            text(&[0xFD, 0xD8], 5, 6, Size::Word),
            ("(-552,A6)".to_string(), 1)
        );
    }

    #[test]
    fn index_word_selects_register_and_size() {
        // D1.L, displacement 8: 0001_1000_0000_1000
        assert_eq!(
            text(&[0x18, 0x08], 6, 0, Size::Word),
            ("(8,A0,D1.L)".to_string(), 1)
        );
        // A2.W, displacement -2: 1010_0000_1111_1110
        assert_eq!(
            text(&[0xA0, 0xFE], 6, 5, Size::Word),
            ("(-2,A5,A2.W)".to_string(), 1)
        );
    }

    #[test]
    fn absolute_short_prints_raw_word() {
        assert_eq!(
            text(&[0x12, 0x34], 7, 0, Size::Word),
            ("$1234".to_string(), 1)
        );
        assert_eq!(
            text(&[0xFF, 0xF0], 7, 0, Size::Word),
            ("$FFF0".to_string(), 1)
        );
    }

    #[test]
    fn absolute_long() {
        assert_eq!(
            text(&[0x00, 0xDF, 0xF1, 0x80], 7, 1, Size::Word),
            ("$00DFF180".to_string(), 2)
        );
    }

    #[test]
    fn pc_relative_is_not_resolved() {
        assert_eq!(
            text(&[0x00, 0x10], 7, 2, Size::Word),
            ("(16,PC)".to_string(), 1)
        );
        assert_eq!(
            text(&[0x00, 0x04], 7, 3, Size::Word),
            ("(4,PC,D0.W)".to_string(), 1)
        );
    }

    #[test]
    fn immediate_width_follows_operand_size() {
        assert_eq!(
            text(&[0x12, 0xFF], 7, 4, Size::Byte),
            ("#$FF".to_string(), 1)
        );
        assert_eq!(
            text(&[0x12, 0x34], 7, 4, Size::Word),
            ("#$1234".to_string(), 1)
        );
        assert_eq!(
            text(&[0x00, 0x01, 0x00, 0x00], 7, 4, Size::Long),
            ("#$00010000".to_string(), 2)
        );
    }

    #[test]
    fn undefined_mode7_registers() {
        for reg in 5..8 {
            assert_eq!(
                decode_ea(&[0, 0, 0, 0], 7, reg, Size::Word),
                Err(ErrorKind::InvalidAddressingMode { mode: 7, reg })
            );
        }
    }

    #[test]
    fn short_buffer_is_insufficient_data() {
        assert_eq!(
            decode_ea(&[0x00], 5, 0, Size::Word),
            Err(ErrorKind::InsufficientData {
                needed: 2,
                available: 1
            })
        );
        assert_eq!(
            decode_ea(&[0x00, 0x00], 7, 1, Size::Word),
            Err(ErrorKind::InsufficientData {
                needed: 4,
                available: 2
            })
        );
    }
}

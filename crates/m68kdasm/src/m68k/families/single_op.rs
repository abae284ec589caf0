use crate::error::ErrorKind;
use crate::m68k::decode::{DecodeCtx, Fields};
use crate::m68k::instruction::Size;
use crate::output::formatter::sized;

use super::{ea_mode, ea_reg, is_data_alterable, standard_size};

/// NEGX, CLR, NEG, NOT and TST: one data alterable EA operand, standard
/// size field, operation picked by bits 11-8.
pub fn decode_single_op(ctx: &mut DecodeCtx<'_>, opcode: u16) -> Result<Fields, ErrorKind> {
    let name = match (opcode >> 8) & 0xF {
        0x0 => "NEGX",
        0x2 => "CLR",
        0x4 => "NEG",
        0x6 => "NOT",
        0xA => "TST",
        _ => return Ok(Fields::data_word(opcode)),
    };
    let size = standard_size(opcode)?;
    let (mode, reg) = (ea_mode(opcode), ea_reg(opcode));
    if !is_data_alterable(mode, reg) {
        return Ok(Fields::data_word(opcode));
    }
    let ea = ctx.operand(mode, reg, size)?;
    Ok(ctx.finish(sized(name, size), ea))
}

pub fn decode_tas(ctx: &mut DecodeCtx<'_>, opcode: u16) -> Result<Fields, ErrorKind> {
    let (mode, reg) = (ea_mode(opcode), ea_reg(opcode));
    if !is_data_alterable(mode, reg) {
        return Ok(Fields::data_word(opcode));
    }
    let ea = ctx.operand(mode, reg, Size::Byte)?;
    Ok(ctx.finish("TAS", ea))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::m68k::decode::decode_instruction;
    use crate::m68k::decode::test_support::{asm, len};

    #[test]
    fn each_operation() {
        assert_eq!(asm(&[0x42, 0x80]), "CLR.L D0");
        assert_eq!(asm(&[0x44, 0x50]), "NEG.W (A0)");
        assert_eq!(asm(&[0x40, 0x01]), "NEGX.B D1");
        assert_eq!(asm(&[0x46, 0xA2]), "NOT.L -(A2)");
        assert_eq!(asm(&[0x4A, 0x78, 0x12, 0x34]), "TST.W $1234");
    }

    #[test]
    fn size_11_is_rejected() {
        let err = decode_instruction(&[0x42, 0xC0], 0x40).unwrap_err();
        assert_eq!(err.opcode, Some(0x42C0));
        assert_eq!(err.kind, ErrorKind::InvalidSizeField { bits: 3 });
    }

    #[test]
    fn tas_is_unsized() {
        assert_eq!(asm(&[0x4A, 0xC0]), "TAS D0");
        assert_eq!(asm(&[0x4A, 0xD1]), "TAS (A1)");
    }

    #[test]
    fn non_alterable_operands_are_data() {
        // CLR.W A0 = 0100_0010_01_001_000
        assert_eq!(asm(&[0x42, 0x48]), "DC.W $4248");
        // NEG.L A3
        assert_eq!(asm(&[0x44, 0x8B]), "DC.W $448B");
        // TST.W (16,PC) and NOT.B #imm
        assert_eq!(asm(&[0x4A, 0x7A, 0x00, 0x10]), "DC.W $4A7A");
        assert_eq!(asm(&[0x46, 0x3C, 0x00, 0x01]), "DC.W $463C");
        // TAS A1
        assert_eq!(asm(&[0x4A, 0xC9]), "DC.W $4AC9");
        assert_eq!(len(&[0x42, 0x48, 0x4E, 0x75]), 2);
    }

    #[test]
    fn absolute_operands_stay_valid() {
        assert_eq!(asm(&[0x42, 0xB9, 0x00, 0xDF, 0xF0, 0x9A]), "CLR.L $00DFF09A");
        assert_eq!(asm(&[0x4A, 0xF8, 0x01, 0x00]), "TAS $0100");
    }

    #[test]
    fn illegal_is_not_tas() {
        assert_eq!(asm(&[0x4A, 0xFC]), "ILLEGAL");
    }
}

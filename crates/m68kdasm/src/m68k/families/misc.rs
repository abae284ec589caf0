//! Line 4 control and miscellaneous instructions, plus EXG.

use crate::error::ErrorKind;
use crate::m68k::decode::{DecodeCtx, Fields};
use crate::m68k::instruction::Size;
use crate::output::formatter::{format_immediate, format_signed_immediate, join_operands};

use super::{ea_mode, ea_reg, upper_reg};

/// Instructions that are the whole opcode word with no operands.
pub fn decode_implied(ctx: &mut DecodeCtx<'_>, opcode: u16) -> Result<Fields, ErrorKind> {
    let name = match opcode {
        0x4E70 => "RESET",
        0x4E71 => "NOP",
        0x4E73 => "RTE",
        0x4E75 => "RTS",
        0x4E76 => "TRAPV",
        0x4E77 => "RTR",
        0x4AFC => "ILLEGAL",
        _ => return Ok(Fields::data_word(opcode)),
    };
    Ok(ctx.finish(name, ""))
}

/// STOP #imm. The immediate is loaded into SR, so it prints as a word.
pub fn decode_stop(ctx: &mut DecodeCtx<'_>, _opcode: u16) -> Result<Fields, ErrorKind> {
    let imm = u32::from(ctx.read_u16()?);
    Ok(ctx.finish("STOP", format!("#{}", format_immediate(imm, 2))))
}

pub fn decode_trap(ctx: &mut DecodeCtx<'_>, opcode: u16) -> Result<Fields, ErrorKind> {
    Ok(ctx.finish("TRAP", format!("#{}", opcode & 0xF)))
}

// ─── Stack frames ────────────────────────────────────────────────

pub fn decode_link(ctx: &mut DecodeCtx<'_>, opcode: u16) -> Result<Fields, ErrorKind> {
    let disp = i32::from(ctx.read_u16()? as i16);
    Ok(ctx.finish(
        "LINK",
        format!("A{}, #{}", ea_reg(opcode), format_signed_immediate(disp)),
    ))
}

pub fn decode_unlk(ctx: &mut DecodeCtx<'_>, opcode: u16) -> Result<Fields, ErrorKind> {
    Ok(ctx.finish("UNLK", format!("A{}", ea_reg(opcode))))
}

// ─── Register manipulation ───────────────────────────────────────

pub fn decode_swap(ctx: &mut DecodeCtx<'_>, opcode: u16) -> Result<Fields, ErrorKind> {
    Ok(ctx.finish("SWAP", format!("D{}", ea_reg(opcode))))
}

/// EXT.W (byte to word) or EXT.L (word to long), selected by bit 6.
pub fn decode_ext(ctx: &mut DecodeCtx<'_>, opcode: u16) -> Result<Fields, ErrorKind> {
    let name = if opcode & 0x0040 != 0 { "EXT.L" } else { "EXT.W" };
    Ok(ctx.finish(name, format!("D{}", ea_reg(opcode))))
}

/// EXG. The opmode in bits 7-3 picks data/data, address/address or
/// data/address; in the mixed form Rx is the data register.
pub fn decode_exg(ctx: &mut DecodeCtx<'_>, opcode: u16) -> Result<Fields, ErrorKind> {
    let rx = upper_reg(opcode);
    let ry = ea_reg(opcode);
    let operands = match (opcode >> 3) & 0x1F {
        0x08 => format!("D{rx}, D{ry}"),
        0x09 => format!("A{rx}, A{ry}"),
        0x11 => format!("D{rx}, A{ry}"),
        _ => return Ok(Fields::data_word(opcode)),
    };
    Ok(ctx.finish("EXG", operands))
}

// ─── Address computation ─────────────────────────────────────────

pub fn decode_lea(ctx: &mut DecodeCtx<'_>, opcode: u16) -> Result<Fields, ErrorKind> {
    let ea = ctx.operand(ea_mode(opcode), ea_reg(opcode), Size::Long)?;
    let an = format!("A{}", upper_reg(opcode));
    Ok(ctx.finish("LEA", join_operands(&[ea, an])))
}

pub fn decode_pea(ctx: &mut DecodeCtx<'_>, opcode: u16) -> Result<Fields, ErrorKind> {
    let ea = ctx.operand(ea_mode(opcode), ea_reg(opcode), Size::Long)?;
    Ok(ctx.finish("PEA", ea))
}

/// CHK <ea>,Dn. The bound is a word.
pub fn decode_chk(ctx: &mut DecodeCtx<'_>, opcode: u16) -> Result<Fields, ErrorKind> {
    let ea = ctx.operand(ea_mode(opcode), ea_reg(opcode), Size::Word)?;
    let dn = format!("D{}", upper_reg(opcode));
    Ok(ctx.finish("CHK", join_operands(&[ea, dn])))
}

#[cfg(test)]
mod tests {
    use crate::m68k::decode::test_support::{asm, len};

    #[test]
    fn implied_instructions() {
        for (word, name) in [
            (0x4E70u16, "RESET"),
            (0x4E71, "NOP"),
            (0x4E73, "RTE"),
            (0x4E75, "RTS"),
            (0x4E76, "TRAPV"),
            (0x4E77, "RTR"),
            (0x4AFC, "ILLEGAL"),
        ] {
            assert_eq!(asm(&word.to_be_bytes()), name);
            assert_eq!(len(&word.to_be_bytes()), 2);
        }
    }

    #[test]
    fn stop_and_trap() {
        assert_eq!(asm(&[0x4E, 0x72, 0x27, 0x00]), "STOP #$2700");
        assert_eq!(asm(&[0x4E, 0x4F]), "TRAP #15");
        assert_eq!(asm(&[0x4E, 0x40]), "TRAP #0");
    }

    #[test]
    fn link_and_unlk() {
        assert_eq!(asm(&[0x4E, 0x56, 0xFF, 0xF8]), "LINK A6, #-$8");
        assert_eq!(asm(&[0x4E, 0x55, 0x00, 0x00]), "LINK A5, #0");
        assert_eq!(asm(&[0x4E, 0x5E]), "UNLK A6");
    }

    #[test]
    fn swap_and_ext() {
        assert_eq!(asm(&[0x48, 0x43]), "SWAP D3");
        assert_eq!(asm(&[0x48, 0x80]), "EXT.W D0");
        assert_eq!(asm(&[0x48, 0xC1]), "EXT.L D1");
    }

    #[test]
    fn exg_forms() {
        assert_eq!(asm(&[0xC1, 0x41]), "EXG D0, D1");
        assert_eq!(asm(&[0xC1, 0x49]), "EXG A0, A1");
        assert_eq!(asm(&[0xC5, 0x8B]), "EXG D2, A3");
    }

    #[test]
    fn lea_and_pea() {
        assert_eq!(asm(&[0x4F, 0xD1]), "LEA (A1), A7");
        assert_eq!(asm(&[0x41, 0xFA, 0x00, 0x10]), "LEA (16,PC), A0");
        assert_eq!(asm(&[0x48, 0x50]), "PEA (A0)");
        assert_eq!(asm(&[0x48, 0x79, 0x00, 0x00, 0x10, 0x00]), "PEA $00001000");
    }

    #[test]
    fn chk() {
        assert_eq!(asm(&[0x41, 0x81]), "CHK D1, D0");
        assert_eq!(asm(&[0x41, 0xBC, 0x00, 0x64]), "CHK #$0064, D0");
    }
}

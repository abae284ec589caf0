use crate::error::ErrorKind;
use crate::m68k::decode::{DecodeCtx, Fields};
use crate::m68k::instruction::Size;
use crate::output::formatter::{format_register_list, format_signed_immediate, join_operands, sized};

use super::{ea_mode, ea_reg, upper_reg};

// ─── MOVE / MOVEA ────────────────────────────────────────────────

/// MOVE <ea>,<ea>, lines 1-3.
///
/// Uses its own size encoding. The destination EA has its mode and register
/// fields swapped relative to the source (register in bits 11-9, mode in
/// bits 8-6). A destination of An is MOVEA, which has no byte form.
pub fn decode_move(ctx: &mut DecodeCtx<'_>, opcode: u16) -> Result<Fields, ErrorKind> {
    let size = Size::from_move_bits(opcode >> 12)?;
    let dst_mode = ((opcode >> 6) & 0x7) as u8;
    let dst_reg = upper_reg(opcode);

    if dst_mode == 1 && size == Size::Byte {
        return Ok(Fields::data_word(opcode));
    }

    let src = ctx.operand(ea_mode(opcode), ea_reg(opcode), size)?;
    if dst_mode == 1 {
        let an = format!("A{dst_reg}");
        return Ok(ctx.finish(sized("MOVEA", size), join_operands(&[src, an])));
    }
    let dst = ctx.operand(dst_mode, dst_reg, size)?;
    Ok(ctx.finish(sized("MOVE", size), join_operands(&[src, dst])))
}

// ─── MOVEQ ───────────────────────────────────────────────────────

pub fn decode_moveq(ctx: &mut DecodeCtx<'_>, opcode: u16) -> Result<Fields, ErrorKind> {
    let data = i32::from(opcode as u8 as i8);
    Ok(ctx.finish(
        "MOVEQ",
        format!("#{}, D{}", format_signed_immediate(data), upper_reg(opcode)),
    ))
}

// ─── MOVEM ───────────────────────────────────────────────────────

/// MOVEM <list>,<ea> or <ea>,<list>.
///
/// The register mask is the first extension word, ahead of any EA
/// extension. Bit 10 set means memory to registers.
pub fn decode_movem(ctx: &mut DecodeCtx<'_>, opcode: u16) -> Result<Fields, ErrorKind> {
    let size = if opcode & 0x0040 != 0 {
        Size::Long
    } else {
        Size::Word
    };
    let (mode, reg) = (ea_mode(opcode), ea_reg(opcode));
    if !movem_operand_allowed(opcode & 0x0400 != 0, mode, reg) {
        return Ok(Fields::data_word(opcode));
    }
    let mask = ctx.read_u16()?;
    let ea = ctx.operand(mode, reg, size)?;
    let list = format_register_list(mask, mode == 4);
    let operands = if opcode & 0x0400 == 0 {
        join_operands(&[list, ea])
    } else {
        join_operands(&[ea, list])
    };
    Ok(ctx.finish(sized("MOVEM", size), operands))
}

/// Control addressing plus -(An) for stores, or (An)+ and PC-relative for
/// loads. Mode 7 registers 5-7 are left to the EA decoder to reject.
fn movem_operand_allowed(to_registers: bool, mode: u8, reg: u8) -> bool {
    match (mode, reg) {
        (2 | 5 | 6, _) | (7, 0 | 1) => true,
        (3, _) | (7, 2 | 3) => to_registers,
        (4, _) => !to_registers,
        (7, 4) => false,
        (7, _) => true,
        _ => false,
    }
}

// ─── MOVEP ───────────────────────────────────────────────────────

/// MOVEP (d16,Ay),Dx or Dx,(d16,Ay). Bit 7 is the direction (set means
/// register to memory) and bit 6 the size.
pub fn decode_movep(ctx: &mut DecodeCtx<'_>, opcode: u16) -> Result<Fields, ErrorKind> {
    let size = if opcode & 0x0040 != 0 {
        Size::Long
    } else {
        Size::Word
    };
    let disp = ctx.read_u16()? as i16;
    let mem = format!("({disp},A{})", ea_reg(opcode));
    let dn = format!("D{}", upper_reg(opcode));
    let operands = if opcode & 0x0080 != 0 {
        join_operands(&[dn, mem])
    } else {
        join_operands(&[mem, dn])
    };
    Ok(ctx.finish(sized("MOVEP", size), operands))
}

// ─── Status register moves ───────────────────────────────────────

pub fn decode_move_from_sr(ctx: &mut DecodeCtx<'_>, opcode: u16) -> Result<Fields, ErrorKind> {
    let ea = ctx.operand(ea_mode(opcode), ea_reg(opcode), Size::Word)?;
    Ok(ctx.finish("MOVE.W", format!("SR, {ea}")))
}

pub fn decode_move_to_ccr(ctx: &mut DecodeCtx<'_>, opcode: u16) -> Result<Fields, ErrorKind> {
    let ea = ctx.operand(ea_mode(opcode), ea_reg(opcode), Size::Word)?;
    Ok(ctx.finish("MOVE.W", format!("{ea}, CCR")))
}

pub fn decode_move_to_sr(ctx: &mut DecodeCtx<'_>, opcode: u16) -> Result<Fields, ErrorKind> {
    let ea = ctx.operand(ea_mode(opcode), ea_reg(opcode), Size::Word)?;
    Ok(ctx.finish("MOVE.W", format!("{ea}, SR")))
}

/// MOVE An,USP / MOVE USP,An. Bit 3 set reads the USP.
pub fn decode_move_usp(ctx: &mut DecodeCtx<'_>, opcode: u16) -> Result<Fields, ErrorKind> {
    let an = format!("A{}", ea_reg(opcode));
    let operands = if opcode & 0x0008 != 0 {
        format!("USP, {an}")
    } else {
        format!("{an}, USP")
    };
    Ok(ctx.finish("MOVE.L", operands))
}

use crate::error::ErrorKind;
use crate::m68k::decode::{DecodeCtx, Fields};
use crate::m68k::instruction::{Condition, Size};
use crate::output::formatter::format_address;

use super::{ea_mode, ea_reg, is_data_alterable};

fn condition(opcode: u16) -> Condition {
    Condition::from_bits(((opcode >> 8) & 0xF) as u8)
}

// ─── Bcc / BRA / BSR ─────────────────────────────────────────────

/// Branches, line 6.
///
/// The low byte of the opcode is the displacement. 0x00 means a 16-bit
/// displacement follows and 0xFF means a 32-bit one; any other value is the
/// signed 8-bit displacement itself. The target is relative to the word
/// after the opcode.
pub fn decode_branch(ctx: &mut DecodeCtx<'_>, opcode: u16) -> Result<Fields, ErrorKind> {
    let name = match (opcode >> 8) & 0xF {
        0 => "BRA".to_string(),
        1 => "BSR".to_string(),
        _ => format!("B{}", condition(opcode).suffix()),
    };
    let base = ctx.current_pc();
    let (suffix, displacement, digits) = match opcode & 0xFF {
        0x00 => (".W", i32::from(ctx.read_u16()? as i16), 4),
        0xFF => (".L", ctx.read_u32()? as i32, 8),
        d => (".S", i32::from(d as u8 as i8), 4),
    };
    let target = base.wrapping_add(displacement as u32);
    Ok(ctx.finish(
        format!("{name}{suffix}"),
        format_address(target, digits),
    ))
}

// ─── DBcc / Scc ──────────────────────────────────────────────────

/// DBcc Dn,<label> with a 16-bit displacement from the extension word.
pub fn decode_dbcc(ctx: &mut DecodeCtx<'_>, opcode: u16) -> Result<Fields, ErrorKind> {
    let base = ctx.current_pc();
    let displacement = i32::from(ctx.read_u16()? as i16);
    let target = base.wrapping_add(displacement as u32);
    Ok(ctx.finish(
        format!("DB{}", condition(opcode).suffix()),
        format!("D{}, {}", ea_reg(opcode), format_address(target, 4)),
    ))
}

pub fn decode_scc(ctx: &mut DecodeCtx<'_>, opcode: u16) -> Result<Fields, ErrorKind> {
    let (mode, reg) = (ea_mode(opcode), ea_reg(opcode));
    if !is_data_alterable(mode, reg) {
        return Ok(Fields::data_word(opcode));
    }
    let ea = ctx.operand(mode, reg, Size::Byte)?;
    Ok(ctx.finish(format!("S{}", condition(opcode).suffix()), ea))
}

// ─── JSR / JMP ───────────────────────────────────────────────────

pub fn decode_jsr(ctx: &mut DecodeCtx<'_>, opcode: u16) -> Result<Fields, ErrorKind> {
    let ea = ctx.operand(ea_mode(opcode), ea_reg(opcode), Size::Long)?;
    Ok(ctx.finish("JSR", ea))
}

pub fn decode_jmp(ctx: &mut DecodeCtx<'_>, opcode: u16) -> Result<Fields, ErrorKind> {
    let ea = ctx.operand(ea_mode(opcode), ea_reg(opcode), Size::Long)?;
    Ok(ctx.finish("JMP", ea))
}

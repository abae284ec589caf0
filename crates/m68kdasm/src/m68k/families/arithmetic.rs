use crate::error::ErrorKind;
use crate::m68k::decode::{DecodeCtx, Fields};
use crate::m68k::instruction::Size;
use crate::output::formatter::sized;

use super::{
    address_arith, dyadic, ea_mode, ea_reg, immediate_op, is_data_alterable, register_pair,
    standard_size, upper_reg,
};

// ─── ADD / SUB ───────────────────────────────────────────────────

pub fn decode_add(ctx: &mut DecodeCtx<'_>, opcode: u16) -> Result<Fields, ErrorKind> {
    dyadic(ctx, opcode, "ADD", true)
}

pub fn decode_sub(ctx: &mut DecodeCtx<'_>, opcode: u16) -> Result<Fields, ErrorKind> {
    dyadic(ctx, opcode, "SUB", true)
}

// ─── ADDA / SUBA ─────────────────────────────────────────────────

pub fn decode_adda(ctx: &mut DecodeCtx<'_>, opcode: u16) -> Result<Fields, ErrorKind> {
    address_arith(ctx, opcode, "ADDA")
}

pub fn decode_suba(ctx: &mut DecodeCtx<'_>, opcode: u16) -> Result<Fields, ErrorKind> {
    address_arith(ctx, opcode, "SUBA")
}

// ─── ADDX / SUBX ─────────────────────────────────────────────────

pub fn decode_addx(ctx: &mut DecodeCtx<'_>, opcode: u16) -> Result<Fields, ErrorKind> {
    let size = standard_size(opcode)?;
    Ok(ctx.finish(sized("ADDX", size), register_pair(opcode)))
}

pub fn decode_subx(ctx: &mut DecodeCtx<'_>, opcode: u16) -> Result<Fields, ErrorKind> {
    let size = standard_size(opcode)?;
    Ok(ctx.finish(sized("SUBX", size), register_pair(opcode)))
}

// ─── ADDQ / SUBQ ─────────────────────────────────────────────────

/// ADDQ/SUBQ #1-8,<ea>. Bit 8 picks SUBQ; a data field of 0 means 8.
///
/// The destination is any alterable EA; An only for word and long.
pub fn decode_quick(ctx: &mut DecodeCtx<'_>, opcode: u16) -> Result<Fields, ErrorKind> {
    let size = standard_size(opcode)?;
    let (mode, reg) = (ea_mode(opcode), ea_reg(opcode));
    let alterable = if mode == 1 {
        size != Size::Byte
    } else {
        is_data_alterable(mode, reg)
    };
    if !alterable {
        return Ok(Fields::data_word(opcode));
    }
    let data = match upper_reg(opcode) {
        0 => 8,
        n => n,
    };
    let name = if opcode & 0x0100 == 0 { "ADDQ" } else { "SUBQ" };
    let ea = ctx.operand(mode, reg, size)?;
    Ok(ctx.finish(sized(name, size), format!("#{data}, {ea}")))
}

// ─── ADDI / SUBI ─────────────────────────────────────────────────

pub fn decode_addi(ctx: &mut DecodeCtx<'_>, opcode: u16) -> Result<Fields, ErrorKind> {
    immediate_op(ctx, opcode, "ADDI")
}

pub fn decode_subi(ctx: &mut DecodeCtx<'_>, opcode: u16) -> Result<Fields, ErrorKind> {
    immediate_op(ctx, opcode, "SUBI")
}

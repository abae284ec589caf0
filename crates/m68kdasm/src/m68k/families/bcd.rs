use crate::error::ErrorKind;
use crate::m68k::decode::{DecodeCtx, Fields};
use crate::m68k::instruction::Size;

use super::{ea_mode, ea_reg, is_data_alterable, register_pair};

pub fn decode_abcd(ctx: &mut DecodeCtx<'_>, opcode: u16) -> Result<Fields, ErrorKind> {
    Ok(ctx.finish("ABCD", register_pair(opcode)))
}

pub fn decode_sbcd(ctx: &mut DecodeCtx<'_>, opcode: u16) -> Result<Fields, ErrorKind> {
    Ok(ctx.finish("SBCD", register_pair(opcode)))
}

pub fn decode_nbcd(ctx: &mut DecodeCtx<'_>, opcode: u16) -> Result<Fields, ErrorKind> {
    let (mode, reg) = (ea_mode(opcode), ea_reg(opcode));
    if !is_data_alterable(mode, reg) {
        return Ok(Fields::data_word(opcode));
    }
    let ea = ctx.operand(mode, reg, Size::Byte)?;
    Ok(ctx.finish("NBCD", ea))
}

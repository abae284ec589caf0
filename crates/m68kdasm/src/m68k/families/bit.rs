use crate::error::ErrorKind;
use crate::m68k::decode::{DecodeCtx, Fields};
use crate::m68k::instruction::Size;
use crate::output::formatter::{format_immediate, join_operands};

use super::{ea_mode, ea_reg, upper_reg};

const BIT_OPS: [&str; 4] = ["BTST", "BCHG", "BCLR", "BSET"];

/// Bit operations act on a long when the target is a data register and on
/// a byte everywhere else.
fn target_size(mode: u8) -> Size {
    if mode == 0 {
        Size::Long
    } else {
        Size::Byte
    }
}

/// BTST/BCHG/BCLR/BSET Dn,<ea>
pub fn decode_bit_dynamic(ctx: &mut DecodeCtx<'_>, opcode: u16) -> Result<Fields, ErrorKind> {
    let name = BIT_OPS[((opcode >> 6) & 0x3) as usize];
    let mode = ea_mode(opcode);
    let dn = format!("D{}", upper_reg(opcode));
    let ea = ctx.operand(mode, ea_reg(opcode), target_size(mode))?;
    Ok(ctx.finish(name, join_operands(&[dn, ea])))
}

/// BTST/BCHG/BCLR/BSET #n,<ea>. The bit number sits in the low byte of the
/// first extension word.
pub fn decode_bit_static(ctx: &mut DecodeCtx<'_>, opcode: u16) -> Result<Fields, ErrorKind> {
    let name = BIT_OPS[((opcode >> 6) & 0x3) as usize];
    let bit = u32::from(ctx.read_u16()? & 0xFF);
    let mode = ea_mode(opcode);
    let ea = ctx.operand(mode, ea_reg(opcode), target_size(mode))?;
    Ok(ctx.finish(name, format!("#{}, {ea}", format_immediate(bit, 1))))
}

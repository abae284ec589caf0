//! Per-family instruction decoders.
//!
//! Every decoder has the [`DecoderFn`](super::decode::DecoderFn) signature and
//! is reached only through the dispatch table, which guarantees the opcode
//! matches the decoder's bit pattern. Decoders extract fixed fields from the
//! opcode, pull extension words through the [`DecodeCtx`], and render
//! canonical text.

pub mod arithmetic;
pub mod bcd;
pub mod bit;
pub mod branch;
pub mod compare;
pub mod logical;
pub mod misc;
pub mod moves;
pub mod muldiv;
pub mod shift;
pub mod single_op;

use crate::error::ErrorKind;
use crate::output::formatter::{format_immediate, join_operands, sized};

use super::decode::{DecodeCtx, Fields};
use super::instruction::Size;

/// EA mode field, bits 5-3.
fn ea_mode(opcode: u16) -> u8 {
    ((opcode >> 3) & 0x7) as u8
}

/// EA register field, bits 2-0.
fn ea_reg(opcode: u16) -> u8 {
    (opcode & 0x7) as u8
}

/// Register field in bits 11-9.
fn upper_reg(opcode: u16) -> u8 {
    ((opcode >> 9) & 0x7) as u8
}

/// Standard size field, bits 7-6.
fn standard_size(opcode: u16) -> Result<Size, ErrorKind> {
    Size::from_standard_bits((opcode >> 6) & 0x3)
}

/// Data alterable EA: anything but An, PC-relative and immediate.
///
/// Mode 7 registers 5-7 pass here and are rejected by the EA decoder as
/// `InvalidAddressingMode`.
fn is_data_alterable(mode: u8, reg: u8) -> bool {
    match mode {
        1 => false,
        7 => !(2..=4).contains(&reg),
        _ => true,
    }
}

/// Memory alterable EA: data alterable without Dn.
fn is_memory_alterable(mode: u8, reg: u8) -> bool {
    mode != 0 && is_data_alterable(mode, reg)
}

/// Generic `<ea>,Dn` / `Dn,<ea>` form shared by ADD, SUB, AND, OR and CMP.
///
/// Bit 8 clear: the EA is the source and Dn the destination. An is a legal
/// source only for word and long, and only when `address_source` is set.
/// Bit 8 set: Dn is the source and the EA a memory alterable destination.
fn dyadic(
    ctx: &mut DecodeCtx<'_>,
    opcode: u16,
    name: &str,
    address_source: bool,
) -> Result<Fields, ErrorKind> {
    let size = standard_size(opcode)?;
    let (mode, reg) = (ea_mode(opcode), ea_reg(opcode));
    let to_ea = opcode & 0x0100 != 0;
    let undefined = if to_ea {
        !is_memory_alterable(mode, reg)
    } else {
        mode == 1 && (!address_source || size == Size::Byte)
    };
    if undefined {
        return Ok(Fields::data_word(opcode));
    }

    let dn = format!("D{}", upper_reg(opcode));
    let ea = ctx.operand(mode, reg, size)?;
    let operands = if to_ea {
        join_operands(&[dn, ea])
    } else {
        join_operands(&[ea, dn])
    };
    Ok(ctx.finish(sized(name, size), operands))
}

/// `<ea>,An` for ADDA, SUBA and CMPA. Bit 8 selects long over word.
fn address_arith(ctx: &mut DecodeCtx<'_>, opcode: u16, name: &str) -> Result<Fields, ErrorKind> {
    let size = if opcode & 0x0100 != 0 {
        Size::Long
    } else {
        Size::Word
    };
    let ea = ctx.operand(ea_mode(opcode), ea_reg(opcode), size)?;
    let an = format!("A{}", upper_reg(opcode));
    Ok(ctx.finish(sized(name, size), join_operands(&[ea, an])))
}

/// `Dy,Dx` or `-(Ay),-(Ax)`, selected by bit 3. Used by ADDX, SUBX, ABCD and SBCD.
fn register_pair(opcode: u16) -> String {
    let rx = upper_reg(opcode);
    let ry = ea_reg(opcode);
    if opcode & 0x0008 == 0 {
        format!("D{ry}, D{rx}")
    } else {
        format!("-(A{ry}), -(A{rx})")
    }
}

/// `#imm,<ea>` for ADDI, SUBI, ANDI, ORI, EORI and CMPI.
///
/// The immediate precedes the destination's extension words in memory, so
/// it is read first.
fn immediate_op(ctx: &mut DecodeCtx<'_>, opcode: u16, name: &str) -> Result<Fields, ErrorKind> {
    let size = standard_size(opcode)?;
    let imm = ctx.read_immediate(size)?;
    let dst = ctx.operand(ea_mode(opcode), ea_reg(opcode), size)?;
    let src = format!("#{}", format_immediate(imm, size.bytes()));
    Ok(ctx.finish(sized(name, size), join_operands(&[src, dst])))
}

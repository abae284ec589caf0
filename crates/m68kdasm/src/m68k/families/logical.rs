use crate::error::ErrorKind;
use crate::m68k::decode::{DecodeCtx, Fields};
use crate::output::formatter::{format_immediate, join_operands, sized};

use super::{dyadic, ea_mode, ea_reg, immediate_op, standard_size, upper_reg};

pub fn decode_and(ctx: &mut DecodeCtx<'_>, opcode: u16) -> Result<Fields, ErrorKind> {
    dyadic(ctx, opcode, "AND", false)
}

pub fn decode_or(ctx: &mut DecodeCtx<'_>, opcode: u16) -> Result<Fields, ErrorKind> {
    dyadic(ctx, opcode, "OR", false)
}

/// EOR only exists in the `Dn,<ea>` direction.
pub fn decode_eor(ctx: &mut DecodeCtx<'_>, opcode: u16) -> Result<Fields, ErrorKind> {
    let size = standard_size(opcode)?;
    let dn = format!("D{}", upper_reg(opcode));
    let ea = ctx.operand(ea_mode(opcode), ea_reg(opcode), size)?;
    Ok(ctx.finish(sized("EOR", size), join_operands(&[dn, ea])))
}

pub fn decode_andi(ctx: &mut DecodeCtx<'_>, opcode: u16) -> Result<Fields, ErrorKind> {
    immediate_op(ctx, opcode, "ANDI")
}

pub fn decode_ori(ctx: &mut DecodeCtx<'_>, opcode: u16) -> Result<Fields, ErrorKind> {
    immediate_op(ctx, opcode, "ORI")
}

pub fn decode_eori(ctx: &mut DecodeCtx<'_>, opcode: u16) -> Result<Fields, ErrorKind> {
    immediate_op(ctx, opcode, "EORI")
}

/// ORI, ANDI or EORI, from bits 11-9 of a status-register opcode.
fn status_op_name(opcode: u16) -> Option<&'static str> {
    match (opcode >> 9) & 0x7 {
        0 => Some("ORI"),
        1 => Some("ANDI"),
        5 => Some("EORI"),
        _ => None,
    }
}

/// ORI/ANDI/EORI #imm,CCR. Only the low byte of the extension word is used.
pub fn decode_to_ccr(ctx: &mut DecodeCtx<'_>, opcode: u16) -> Result<Fields, ErrorKind> {
    let Some(name) = status_op_name(opcode) else {
        return Ok(Fields::data_word(opcode));
    };
    let imm = u32::from(ctx.read_u16()? & 0xFF);
    Ok(ctx.finish(format!("{name}.B"), format!("#{}, CCR", format_immediate(imm, 1))))
}

/// ORI/ANDI/EORI #imm,SR.
pub fn decode_to_sr(ctx: &mut DecodeCtx<'_>, opcode: u16) -> Result<Fields, ErrorKind> {
    let Some(name) = status_op_name(opcode) else {
        return Ok(Fields::data_word(opcode));
    };
    let imm = u32::from(ctx.read_u16()?);
    Ok(ctx.finish(format!("{name}.W"), format!("#{}, SR", format_immediate(imm, 2))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::m68k::decode::test_support::{asm, len, run};

    #[test]
    fn and_both_directions() {
        assert_eq!(asm(&[0xC0, 0x41]), "AND.W D1, D0");
        // AND.B D0,(A0)+ = 1100_000_1_00_011_000
        assert_eq!(asm(&[0xC1, 0x18]), "AND.B D0, (A0)+");
    }

    #[test]
    fn or_register_to_memory() {
        // OR.L D2,(A1) = 1000_010_110_010_001
        assert_eq!(asm(&[0x85, 0x91]), "OR.L D2, (A1)");
    }

    #[test]
    fn register_destination_with_bit_8_is_data() {
        // OR.W D0,D0 would assemble to 0x8040
        assert_eq!(asm(&[0x81, 0x40]), "DC.W $8140");
        assert_eq!(asm(&[0x81, 0x88]), "DC.W $8188");
        assert_eq!(asm(&[0xC1, 0x80]), "DC.W $C180");
        assert_eq!(asm(&[0xC1, 0x87]), "DC.W $C187");
        assert_eq!(len(&[0xC1, 0x87, 0x4E, 0x75]), 2);
    }

    #[test]
    fn non_memory_destinations_are_data() {
        // OR.W D0,(16,PC) = 1000_000_1_01_111_010
        assert_eq!(asm(&[0x81, 0x7A, 0x00, 0x10]), "DC.W $817A");
    }

    #[test]
    fn and_or_take_no_address_register_source() {
        // AND.W A0,D0 = 1100_000_001_001_000
        assert_eq!(asm(&[0xC0, 0x48]), "DC.W $C048");
        assert_eq!(asm(&[0x80, 0x89]), "DC.W $8089");
    }

    #[test]
    fn eor_is_register_source() {
        // EOR.B D3,D4 = 1011_011_100_000_100
        assert_eq!(asm(&[0xB7, 0x04]), "EOR.B D3, D4");
    }

    #[test]
    fn immediate_forms() {
        assert_eq!(asm(&[0x02, 0x50, 0xF0, 0xF0]), "ANDI.W #$F0F0, (A0)");
        assert_eq!(asm(&[0x00, 0x00, 0x00, 0x01]), "ORI.B #1, D0");
        assert_eq!(
            asm(&[0x0A, 0x87, 0xFF, 0xFF, 0xFF, 0xFF]),
            "EORI.L #$FFFFFFFF, D7"
        );
    }

    #[test]
    fn long_immediate_consumes_six_bytes() {
        // ANDI.L #$0000FFFF,D1 followed by an RTS that must not be swallowed
        assert_eq!(len(&[0x02, 0x81, 0x00, 0x00, 0xFF, 0xFF, 0x4E, 0x75]), 6);
    }

    #[test]
    fn status_register_forms() {
        assert_eq!(asm(&[0x00, 0x3C, 0x00, 0x10]), "ORI.B #16, CCR");
        assert_eq!(asm(&[0x02, 0x7C, 0xF8, 0xFF]), "ANDI.W #$F8FF, SR");
        assert_eq!(asm(&[0x0A, 0x3C, 0x00, 0xFF]), "EORI.B #$FF, CCR");
        assert_eq!(asm(&[0x0A, 0x7C, 0x27, 0x00]), "EORI.W #$2700, SR");
    }

    #[test]
    fn ccr_immediate_missing() {
        assert_eq!(
            run(decode_to_ccr, &[0x00, 0x3C]),
            Err(ErrorKind::InsufficientData {
                needed: 4,
                available: 2
            })
        );
    }
}

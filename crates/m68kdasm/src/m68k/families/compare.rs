use crate::error::ErrorKind;
use crate::m68k::decode::{DecodeCtx, Fields};
use crate::output::formatter::sized;

use super::{address_arith, dyadic, ea_reg, immediate_op, standard_size, upper_reg};

pub fn decode_cmp(ctx: &mut DecodeCtx<'_>, opcode: u16) -> Result<Fields, ErrorKind> {
    dyadic(ctx, opcode, "CMP", true)
}

pub fn decode_cmpa(ctx: &mut DecodeCtx<'_>, opcode: u16) -> Result<Fields, ErrorKind> {
    address_arith(ctx, opcode, "CMPA")
}

/// CMPM (Ay)+,(Ax)+
pub fn decode_cmpm(ctx: &mut DecodeCtx<'_>, opcode: u16) -> Result<Fields, ErrorKind> {
    let size = standard_size(opcode)?;
    let operands = format!("(A{})+, (A{})+", ea_reg(opcode), upper_reg(opcode));
    Ok(ctx.finish(sized("CMPM", size), operands))
}

pub fn decode_cmpi(ctx: &mut DecodeCtx<'_>, opcode: u16) -> Result<Fields, ErrorKind> {
    immediate_op(ctx, opcode, "CMPI")
}

#[cfg(test)]
mod tests {
    use crate::m68k::decode::test_support::{asm, len};

    #[test]
    fn cmp_register_forms() {
        assert_eq!(asm(&[0xB0, 0x41]), "CMP.W D1, D0");
        // CMP.L (A0),D2 = 1011_010_010_010_000
        assert_eq!(asm(&[0xB4, 0x90]), "CMP.L (A0), D2");
    }

    #[test]
    fn cmpa_sizes() {
        assert_eq!(asm(&[0xB2, 0xC0]), "CMPA.W D0, A1");
        assert_eq!(asm(&[0xB3, 0xC8]), "CMPA.L A0, A1");
    }

    #[test]
    fn cmpm_postincrement_pair() {
        assert_eq!(asm(&[0xB3, 0x08]), "CMPM.B (A0)+, (A1)+");
        assert_eq!(asm(&[0xB5, 0x89]), "CMPM.L (A1)+, (A2)+");
    }

    #[test]
    fn cmpi_immediates() {
        assert_eq!(asm(&[0x0C, 0x43, 0x12, 0x34]), "CMPI.W #$1234, D3");
        assert_eq!(
            asm(&[0x0C, 0x90, 0x12, 0x34, 0x56, 0x78]),
            "CMPI.L #$12345678, (A0)"
        );
        assert_eq!(len(&[0x0C, 0x90, 0x12, 0x34, 0x56, 0x78]), 6);
    }

    #[test]
    fn cmpi_with_absolute_destination() {
        // CMPI.B #10,$1234 = 0x0C38 0x000A 0x1234
        assert_eq!(asm(&[0x0C, 0x38, 0x00, 0x0A, 0x12, 0x34]), "CMPI.B #10, $1234");
    }
}

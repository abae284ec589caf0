use crate::error::ErrorKind;
use crate::m68k::decode::{DecodeCtx, Fields};
use crate::m68k::instruction::Size;
use crate::output::formatter::join_operands;

use super::{ea_mode, ea_reg, upper_reg};

/// MULU, MULS, DIVU and DIVS `<ea>,Dn`.
///
/// Line C multiplies and line 8 divides; bit 8 selects the signed form.
/// The source is always a word and no size suffix is printed.
pub fn decode_mul_div(ctx: &mut DecodeCtx<'_>, opcode: u16) -> Result<Fields, ErrorKind> {
    let signed = opcode & 0x0100 != 0;
    let name = match (opcode & 0xF000, signed) {
        (0xC000, false) => "MULU",
        (0xC000, true) => "MULS",
        (_, false) => "DIVU",
        (_, true) => "DIVS",
    };
    let ea = ctx.operand(ea_mode(opcode), ea_reg(opcode), Size::Word)?;
    let dn = format!("D{}", upper_reg(opcode));
    Ok(ctx.finish(name, join_operands(&[ea, dn])))
}

#[cfg(test)]
mod tests {
    use crate::m68k::decode::test_support::{asm, len};

    #[test]
    fn multiply() {
        assert_eq!(asm(&[0xC0, 0xC1]), "MULU D1, D0");
        // MULS (A0),D2 = 1100_010_111_010_000
        assert_eq!(asm(&[0xC5, 0xD0]), "MULS (A0), D2");
    }

    #[test]
    fn divide() {
        assert_eq!(asm(&[0x80, 0xFC, 0x00, 0x0A]), "DIVU #10, D0");
        assert_eq!(asm(&[0x83, 0xC3]), "DIVS D3, D1");
    }

    #[test]
    fn word_immediate_source() {
        assert_eq!(asm(&[0xC0, 0xFC, 0x01, 0x00]), "MULU #$0100, D0");
        assert_eq!(len(&[0xC0, 0xFC, 0x01, 0x00]), 4);
    }
}

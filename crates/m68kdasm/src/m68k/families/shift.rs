use crate::error::ErrorKind;
use crate::m68k::decode::{DecodeCtx, Fields};
use crate::m68k::instruction::Size;

use super::{ea_mode, ea_reg, standard_size, upper_reg};

const SHIFT_KINDS: [&str; 4] = ["AS", "LS", "ROX", "RO"];

/// Shifts and rotates, line E.
///
/// Size bits 11 select the memory form: one-bit shift of a word in memory,
/// with the kind in bits 10-9. Otherwise the register form shifts Dy by a
/// count that is either an immediate 1-8 (0 encodes 8) or held in Dx,
/// with the kind in bits 4-3. Bit 8 gives the direction in both forms.
pub fn decode_shift(ctx: &mut DecodeCtx<'_>, opcode: u16) -> Result<Fields, ErrorKind> {
    let direction = if opcode & 0x0100 != 0 { "L" } else { "R" };

    if (opcode >> 6) & 0x3 == 0x3 {
        // Bit 11 set here is a bit-field op on later CPUs.
        if opcode & 0x0800 != 0 {
            return Ok(Fields::data_word(opcode));
        }
        let kind = SHIFT_KINDS[((opcode >> 9) & 0x3) as usize];
        let ea = ctx.operand(ea_mode(opcode), ea_reg(opcode), Size::Word)?;
        return Ok(ctx.finish(format!("{kind}{direction}.W"), ea));
    }

    let size = standard_size(opcode)?;
    let kind = SHIFT_KINDS[((opcode >> 3) & 0x3) as usize];
    let count = upper_reg(opcode);
    let count = if opcode & 0x0020 != 0 {
        format!("D{count}")
    } else if count == 0 {
        "#8".to_string()
    } else {
        format!("#{count}")
    };
    let operands = format!("{count}, D{}", ea_reg(opcode));
    Ok(ctx.finish(format!("{kind}{direction}{}", size.suffix()), operands))
}

#[cfg(test)]
mod tests {
    use crate::m68k::decode::test_support::{asm, len};

    #[test]
    fn immediate_count() {
        // ASL.W #1,D0 = 1110_001_1_01_0_00_000
        assert_eq!(asm(&[0xE3, 0x40]), "ASL.W #1, D0");
        assert_eq!(asm(&[0xE1, 0x13]), "ROXL.B #8, D3");
        assert_eq!(asm(&[0xE8, 0x5F]), "ROR.W #4, D7");
    }

    #[test]
    fn register_count() {
        // LSR.L D1,D2 = 1110_001_0_10_1_01_010
        assert_eq!(asm(&[0xE2, 0xAA]), "LSR.L D1, D2");
    }

    #[test]
    fn memory_forms() {
        assert_eq!(asm(&[0xE0, 0xD0]), "ASR.W (A0)");
        assert_eq!(asm(&[0xE3, 0xE9, 0x00, 0x04]), "LSL.W (4,A1)");
        assert_eq!(asm(&[0xE7, 0xE2]), "ROL.W -(A2)");
        assert_eq!(asm(&[0xE4, 0xF9, 0x00, 0x01, 0x00, 0x00]), "ROXR.W $00010000");
    }

    #[test]
    fn memory_form_with_bit_11_is_data() {
        assert_eq!(asm(&[0xE8, 0xD0, 0x00, 0x00]), "DC.W $E8D0");
        assert_eq!(len(&[0xE8, 0xD0, 0x00, 0x00]), 2);
    }
}

//! Canonical operand text.
//!
//! Everything the decoders print goes through here so that the same value
//! always renders the same way: uppercase registers, `$`-prefixed uppercase
//! hex, decimal for small immediates.

use crate::m68k::addressing::{EffectiveAddress, IndexRegister};
use crate::m68k::instruction::Size;

/// Format an unsigned immediate.
///
/// Values below 100 print in decimal; anything larger prints as hex
/// zero-padded to `byte_width * 2` digits.
pub fn format_immediate(value: u32, byte_width: u8) -> String {
    if value < 100 {
        return format!("{value}");
    }
    match byte_width {
        1 => format!("${:02X}", value as u8),
        2 => format!("${:04X}", value as u16),
        4 => format!("${value:08X}"),
        _ => format!("${value:X}"),
    }
}

/// Format a signed immediate (MOVEQ data, LINK displacement).
///
/// Negative values print as `-$` and the magnitude, so `#-1` reads `#-$1`.
pub fn format_signed_immediate(value: i32) -> String {
    if value < 0 {
        format!("-${:X}", value.unsigned_abs())
    } else if value < 100 {
        format!("{value}")
    } else {
        format!("${value:X}")
    }
}

/// Format an absolute address as `$` + hex padded to `digits`.
pub fn format_address(value: u32, digits: usize) -> String {
    format!("${value:0digits$X}")
}

/// Format a MOVEM register mask.
///
/// In pre-decrement mode the mask is stored reversed (bit 15 = D0, bit 0 = A7);
/// otherwise bit 0 = D0 through bit 15 = A7. Registers are listed D0-D7 then
/// A0-A7, with runs of the same register type collapsed to `Rs-Re`.
pub fn format_register_list(mask: u16, predecrement: bool) -> String {
    let mask = if predecrement { mask.reverse_bits() } else { mask };

    let mut parts = Vec::new();
    for (prefix, bits) in [('D', mask & 0xFF), ('A', mask >> 8)] {
        let mut n = 0;
        while n < 8 {
            if bits & (1 << n) == 0 {
                n += 1;
                continue;
            }
            let start = n;
            while n + 1 < 8 && bits & (1 << (n + 1)) != 0 {
                n += 1;
            }
            if start == n {
                parts.push(format!("{prefix}{start}"));
            } else {
                parts.push(format!("{prefix}{start}-{prefix}{n}"));
            }
            n += 1;
        }
    }
    parts.join("/")
}

/// Format an effective address in canonical syntax.
pub fn format_ea(ea: &EffectiveAddress) -> String {
    match ea {
        EffectiveAddress::DataDirect(n) => format!("D{n}"),
        EffectiveAddress::AddressDirect(n) => format!("A{n}"),
        EffectiveAddress::AddressIndirect(n) => format!("(A{n})"),
        EffectiveAddress::AddressPostIncrement(n) => format!("(A{n})+"),
        EffectiveAddress::AddressPreDecrement(n) => format!("-(A{n})"),
        EffectiveAddress::AddressDisplacement(n, disp) => format!("({disp},A{n})"),
        EffectiveAddress::AddressIndex {
            reg,
            index_reg,
            index_size,
            displacement,
        } => format!(
            "({displacement},A{reg},{}{})",
            format_index_register(*index_reg),
            index_size.suffix()
        ),
        // The `.W` marker on absolute short operands is never echoed back.
        EffectiveAddress::AbsoluteShort(addr) => format_address(u32::from(*addr), 4),
        EffectiveAddress::AbsoluteLong(addr) => format_address(*addr, 8),
        EffectiveAddress::PcDisplacement(disp) => format!("({disp},PC)"),
        EffectiveAddress::PcIndex {
            index_reg,
            index_size,
            displacement,
        } => format!(
            "({displacement},PC,{}{})",
            format_index_register(*index_reg),
            index_size.suffix()
        ),
        EffectiveAddress::Immediate { value, size } => {
            format!("#{}", format_immediate(*value, size.bytes()))
        }
    }
}

fn format_index_register(reg: IndexRegister) -> String {
    match reg {
        IndexRegister::Data(n) => format!("D{n}"),
        IndexRegister::Address(n) => format!("A{n}"),
    }
}

/// Join operand strings the canonical way.
pub fn join_operands<S: AsRef<str>>(operands: &[S]) -> String {
    operands
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<_>>()
        .join(", ")
}

/// `MNEMONIC` + size suffix.
pub fn sized(mnemonic: &str, size: Size) -> String {
    format!("{mnemonic}{}", size.suffix())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_immediates_are_decimal() {
        assert_eq!(format_immediate(0, 2), "0");
        assert_eq!(format_immediate(99, 4), "99");
    }

    #[test]
    fn large_immediates_are_padded_hex() {
        assert_eq!(format_immediate(100, 1), "$64");
        assert_eq!(format_immediate(0x1234, 2), "$1234");
        assert_eq!(format_immediate(0xFF, 2), "$00FF");
        assert_eq!(format_immediate(0x1000, 4), "$00001000");
    }

    #[test]
    fn signed_immediates() {
        assert_eq!(format_signed_immediate(42), "42");
        assert_eq!(format_signed_immediate(127), "$7F");
        assert_eq!(format_signed_immediate(-1), "-$1");
        assert_eq!(format_signed_immediate(-128), "-$80");
    }

    #[test]
    fn register_list_collapses_runs() {
        // D0, D1, D2, A0
        assert_eq!(format_register_list(0x0107, false), "D0-D2/A0");
    }

    #[test]
    fn register_list_keeps_types_apart() {
        // D7 and A0 are adjacent bits but not a range
        assert_eq!(format_register_list(0x0180, false), "D7/A0");
    }

    #[test]
    fn register_list_singletons_and_gaps() {
        // D0, D2, D3, A1, A5, A6, A7
        assert_eq!(format_register_list(0xE20D, false), "D0/D2-D3/A1/A5-A7");
    }

    #[test]
    fn register_list_predecrement_is_reversed() {
        // MOVEM.L D0-D7/A0-A6,-(A7): bit 15 = D0 ... bit 1 = A6
        assert_eq!(format_register_list(0xFFFE, true), "D0-D7/A0-A6");
        // D0/A0 in reversed order: bit 15 and bit 7
        assert_eq!(format_register_list(0x8080, true), "D0/A0");
    }

    #[test]
    fn register_list_empty() {
        assert_eq!(format_register_list(0, false), "");
    }

    #[test]
    fn ea_text() {
        assert_eq!(format_ea(&EffectiveAddress::AddressDisplacement(6, -552)), "(-552,A6)");
        assert_eq!(format_ea(&EffectiveAddress::AbsoluteShort(0x1234)), "$1234");
        assert_eq!(format_ea(&EffectiveAddress::AbsoluteLong(0x00DFF180)), "$00DFF180");
        assert_eq!(format_ea(&EffectiveAddress::PcDisplacement(-2)), "(-2,PC)");
        assert_eq!(
            format_ea(&EffectiveAddress::AddressIndex {
                reg: 0,
                index_reg: IndexRegister::Address(3),
                index_size: Size::Word,
                displacement: -4,
            }),
            "(-4,A0,A3.W)"
        );
        assert_eq!(
            format_ea(&EffectiveAddress::Immediate {
                value: 0x2700,
                size: Size::Word,
            }),
            "#$2700"
        );
    }

    #[test]
    fn absolute_address_padding() {
        assert_eq!(format_address(4, 4), "$0004");
        assert_eq!(format_address(0x12345, 4), "$12345");
        assert_eq!(format_address(0x10, 8), "$00000010");
    }
}

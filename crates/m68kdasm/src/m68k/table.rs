//! Ordered opcode dispatch table.
//!
//! Each entry pairs a mask/value with the decoder for one instruction
//! family. An opcode belongs to an entry when `opcode & mask == value`, and
//! the first matching entry wins. Entries with narrower encodings sit ahead
//! of the wider ones that would otherwise shadow them.

use super::decode::DecoderFn;
use super::families::{
    arithmetic, bcd, bit, branch, compare, logical, misc, moves, muldiv, shift, single_op,
};

/// One dispatch entry.
#[derive(Clone, Copy)]
pub struct OpcodePattern {
    pub mask: u16,
    pub value: u16,
    /// Family name, for diagnostics and tests.
    pub name: &'static str,
    pub decode: DecoderFn,
}

impl OpcodePattern {
    pub fn matches(&self, opcode: u16) -> bool {
        opcode & self.mask == self.value
    }
}

impl std::fmt::Debug for OpcodePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpcodePattern")
            .field("mask", &format_args!("{:04X}", self.mask))
            .field("value", &format_args!("{:04X}", self.value))
            .field("name", &self.name)
            .finish()
    }
}

const fn entry(mask: u16, value: u16, name: &'static str, decode: DecoderFn) -> OpcodePattern {
    OpcodePattern {
        mask,
        value,
        name,
        decode,
    }
}

const fn exact(value: u16, name: &'static str, decode: DecoderFn) -> OpcodePattern {
    entry(0xFFFF, value, name, decode)
}

pub static OPCODE_TABLE: &[OpcodePattern] = &[
    // Whole-word encodings
    exact(0x4E71, "NOP", misc::decode_implied),
    exact(0x4E75, "RTS", misc::decode_implied),
    exact(0x4E73, "RTE", misc::decode_implied),
    exact(0x4E77, "RTR", misc::decode_implied),
    exact(0x4E70, "RESET", misc::decode_implied),
    exact(0x4E76, "TRAPV", misc::decode_implied),
    exact(0x4AFC, "ILLEGAL", misc::decode_implied),
    exact(0x4E72, "STOP", misc::decode_stop),
    exact(0x003C, "ORI to CCR", logical::decode_to_ccr),
    exact(0x023C, "ANDI to CCR", logical::decode_to_ccr),
    exact(0x0A3C, "EORI to CCR", logical::decode_to_ccr),
    exact(0x007C, "ORI to SR", logical::decode_to_sr),
    exact(0x027C, "ANDI to SR", logical::decode_to_sr),
    exact(0x0A7C, "EORI to SR", logical::decode_to_sr),
    // Line 4
    entry(0xFFF0, 0x4E40, "TRAP", misc::decode_trap),
    entry(0xFFF8, 0x4E50, "LINK", misc::decode_link),
    entry(0xFFF8, 0x4E58, "UNLK", misc::decode_unlk),
    entry(0xFFF0, 0x4E60, "MOVE USP", moves::decode_move_usp),
    entry(0xFFF8, 0x4840, "SWAP", misc::decode_swap),
    entry(0xFFB8, 0x4880, "EXT", misc::decode_ext),
    entry(0xFB80, 0x4880, "MOVEM", moves::decode_movem),
    entry(0xFFC0, 0x40C0, "MOVE from SR", moves::decode_move_from_sr),
    entry(0xFFC0, 0x44C0, "MOVE to CCR", moves::decode_move_to_ccr),
    entry(0xFFC0, 0x46C0, "MOVE to SR", moves::decode_move_to_sr),
    entry(0xFFC0, 0x4AC0, "TAS", single_op::decode_tas),
    entry(0xFF00, 0x4200, "CLR", single_op::decode_single_op),
    entry(0xFF00, 0x4400, "NEG", single_op::decode_single_op),
    entry(0xFF00, 0x4000, "NEGX", single_op::decode_single_op),
    entry(0xFF00, 0x4600, "NOT", single_op::decode_single_op),
    entry(0xFF00, 0x4A00, "TST", single_op::decode_single_op),
    entry(0xFFC0, 0x4800, "NBCD", bcd::decode_nbcd),
    entry(0xFFC0, 0x4840, "PEA", misc::decode_pea),
    entry(0xFFC0, 0x4E80, "JSR", branch::decode_jsr),
    entry(0xFFC0, 0x4EC0, "JMP", branch::decode_jmp),
    entry(0xF1C0, 0x41C0, "LEA", misc::decode_lea),
    entry(0xF1C0, 0x4180, "CHK", misc::decode_chk),
    // Line 6
    entry(0xF000, 0x6000, "Bcc", branch::decode_branch),
    // Line 5
    entry(0xF0F8, 0x50C8, "DBcc", branch::decode_dbcc),
    entry(0xF0C0, 0x50C0, "Scc", branch::decode_scc),
    entry(0xF100, 0x5000, "ADDQ", arithmetic::decode_quick),
    entry(0xF100, 0x5100, "SUBQ", arithmetic::decode_quick),
    // Multiply and divide
    entry(0xF1C0, 0xC0C0, "MULU", muldiv::decode_mul_div),
    entry(0xF1C0, 0xC1C0, "MULS", muldiv::decode_mul_div),
    entry(0xF1C0, 0x80C0, "DIVU", muldiv::decode_mul_div),
    entry(0xF1C0, 0x81C0, "DIVS", muldiv::decode_mul_div),
    // Line 0 bit manipulation
    entry(0xF138, 0x0108, "MOVEP", moves::decode_movep),
    entry(0xF1C0, 0x0100, "BTST", bit::decode_bit_dynamic),
    entry(0xF1C0, 0x0140, "BCHG", bit::decode_bit_dynamic),
    entry(0xF1C0, 0x0180, "BCLR", bit::decode_bit_dynamic),
    entry(0xF1C0, 0x01C0, "BSET", bit::decode_bit_dynamic),
    entry(0xFFC0, 0x0800, "BTST", bit::decode_bit_static),
    entry(0xFFC0, 0x0840, "BCHG", bit::decode_bit_static),
    entry(0xFFC0, 0x0880, "BCLR", bit::decode_bit_static),
    entry(0xFFC0, 0x08C0, "BSET", bit::decode_bit_static),
    // BCD and EXG
    entry(0xF1F0, 0xC100, "ABCD", bcd::decode_abcd),
    entry(0xF1F0, 0x8100, "SBCD", bcd::decode_sbcd),
    entry(0xF1F8, 0xC140, "EXG", misc::decode_exg),
    entry(0xF1F8, 0xC148, "EXG", misc::decode_exg),
    entry(0xF1F8, 0xC188, "EXG", misc::decode_exg),
    // Address-register and extended arithmetic
    entry(0xF0C0, 0xD0C0, "ADDA", arithmetic::decode_adda),
    entry(0xF0C0, 0x90C0, "SUBA", arithmetic::decode_suba),
    entry(0xF0C0, 0xB0C0, "CMPA", compare::decode_cmpa),
    entry(0xF130, 0xD100, "ADDX", arithmetic::decode_addx),
    entry(0xF130, 0x9100, "SUBX", arithmetic::decode_subx),
    entry(0xF138, 0xB108, "CMPM", compare::decode_cmpm),
    entry(0xF100, 0xB100, "EOR", logical::decode_eor),
    // Line 0 immediates
    entry(0xFF00, 0x0600, "ADDI", arithmetic::decode_addi),
    entry(0xFF00, 0x0400, "SUBI", arithmetic::decode_subi),
    entry(0xFF00, 0x0200, "ANDI", logical::decode_andi),
    entry(0xFF00, 0x0000, "ORI", logical::decode_ori),
    entry(0xFF00, 0x0A00, "EORI", logical::decode_eori),
    entry(0xFF00, 0x0C00, "CMPI", compare::decode_cmpi),
    entry(0xF100, 0x7000, "MOVEQ", moves::decode_moveq),
    // MOVE
    entry(0xF000, 0x1000, "MOVE", moves::decode_move),
    entry(0xF000, 0x2000, "MOVE", moves::decode_move),
    entry(0xF000, 0x3000, "MOVE", moves::decode_move),
    // Two-operand register/EA families
    entry(0xF000, 0x8000, "OR", logical::decode_or),
    entry(0xF000, 0x9000, "SUB", arithmetic::decode_sub),
    entry(0xF000, 0xB000, "CMP", compare::decode_cmp),
    entry(0xF000, 0xC000, "AND", logical::decode_and),
    entry(0xF000, 0xD000, "ADD", arithmetic::decode_add),
    // Line E
    entry(0xF000, 0xE000, "SHIFT", shift::decode_shift),
];

/// First table entry matching `opcode`, if any.
pub fn resolve(opcode: u16) -> Option<&'static OpcodePattern> {
    OPCODE_TABLE.iter().find(|p| p.matches(opcode))
}

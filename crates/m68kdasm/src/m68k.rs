//! Motorola 68000 instruction decoding.
//!
//! An opcode word is looked up in the ordered dispatch [`table`], the
//! matching family decoder in [`families`] consumes any extension words,
//! and [`decode`] wraps the result into an [`instruction::Instruction`].

pub mod addressing;
pub mod decode;
pub mod families;
pub mod instruction;
pub mod table;

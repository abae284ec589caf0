pub mod error;
pub mod m68k;
pub mod output;

pub use error::{DecodeError, ErrorKind, RangeError};
pub use m68k::addressing::{decode_ea, decode_operand, EffectiveAddress, IndexRegister};
pub use m68k::decode::{decode_instruction, decode_range, instructions, Instructions};
pub use m68k::instruction::{Condition, Instruction, Size};
pub use m68k::table::{resolve, OpcodePattern, OPCODE_TABLE};

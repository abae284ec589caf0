//! Text rendering for decoded instructions.

pub mod formatter;

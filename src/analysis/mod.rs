// Tue Jan 13 2026 - Alex

pub mod x86;

pub use x86::{BranchForm, BranchInstruction, DecodeError, JccDecoder};

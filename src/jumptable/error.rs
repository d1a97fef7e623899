// Wed Jan 15 2026 - Alex

use crate::analysis::x86::error::format_opcode;
use crate::analysis::x86::DecodeError;
use crate::memory::MemoryError;
use crate::pattern::PatternError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JumpTableError {
    #[error("Did not find jump chain preamble within 0x{limit:x} bytes")]
    PreambleNotFound { limit: usize },
    #[error("Unknown opcode {} for handler {index} at fn+0x{offset:x}", format_opcode(.bytes))]
    UnknownOpcode { index: usize, offset: usize, bytes: Vec<u8> },
    #[error("Invalid anchor: {0}")]
    InvalidAnchor(String),
    #[error("Memory error: {0}")]
    Memory(#[from] MemoryError),
}

impl From<PatternError> for JumpTableError {
    fn from(err: PatternError) -> Self {
        match err {
            PatternError::PreambleNotFound { limit } => JumpTableError::PreambleNotFound { limit },
            PatternError::InvalidPattern(msg) => JumpTableError::InvalidAnchor(msg),
            PatternError::Memory(e) => JumpTableError::Memory(e),
        }
    }
}

impl JumpTableError {
    pub(crate) fn from_decode(err: DecodeError, index: usize, offset: usize) -> Self {
        match err {
            DecodeError::UnknownOpcode { bytes } => JumpTableError::UnknownOpcode { index, offset, bytes },
            DecodeError::Memory(e) => JumpTableError::Memory(e),
        }
    }
}

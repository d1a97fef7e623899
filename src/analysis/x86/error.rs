// Tue Jan 13 2026 - Alex

use crate::memory::MemoryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Unknown opcode {}", format_opcode(.bytes))]
    UnknownOpcode { bytes: Vec<u8> },
    #[error("Memory error: {0}")]
    Memory(#[from] MemoryError),
}

pub fn format_opcode(bytes: &[u8]) -> String {
    bytes.iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

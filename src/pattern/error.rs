// Tue Jan 13 2026 - Alex

use crate::memory::MemoryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),
    #[error("Did not find jump chain preamble within 0x{limit:x} bytes")]
    PreambleNotFound { limit: usize },
    #[error("Memory error: {0}")]
    Memory(#[from] MemoryError),
}

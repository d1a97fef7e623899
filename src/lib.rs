// Tue Jan 15 2026 - Alex

//! Recovers the handler addresses of an x86-64 jump chain: a run of JNE
//! instructions placed right after a known preamble inside a function body.
//! The resulting table is what hand-written dispatch code indexes into.

pub mod analysis;
pub mod config;
pub mod jumptable;
pub mod memory;
pub mod pattern;
pub mod symbol;
pub mod ui;

pub use config::ChainConfig;
pub use jumptable::{JumpTable, JumpTableBuilder, JumpTableCell, JumpTableError};
pub use memory::{Address, BufferMemory, MemoryReader, MemoryWindow, ProcessMemory};
pub use pattern::{Pattern, PreambleScanner};
pub use symbol::{AddressResolver, BinarySymbols, SymbolRegistry};

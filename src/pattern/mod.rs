// Tue Jan 13 2026 - Alex

pub mod error;
pub mod pattern;
pub mod scanner;

pub use error::PatternError;
pub use pattern::{Pattern, DEFAULT_PREAMBLE};
pub use scanner::{PreambleScanner, DEFAULT_SCAN_LIMIT};

use crate::memory::{Address, MemoryReader, MemoryWindow};

/// Locates `pattern` near `entry`, returning its offset from `entry`.
pub fn find_preamble(
    reader: &dyn MemoryReader,
    entry: Address,
    pattern: &Pattern,
    scan_limit: usize,
) -> Result<usize, PatternError> {
    let mut window = MemoryWindow::new(reader, entry);
    PreambleScanner::new()
        .with_scan_limit(scan_limit)
        .scan(&mut window, pattern)
}

// Tue Jan 13 2026 - Alex

use crate::memory::{MemoryError, MemoryWindow};
use crate::pattern::{Pattern, PatternError};

pub const DEFAULT_SCAN_LIMIT: usize = 0x10000;

/// Finds an anchor pattern by sliding a window forward one byte at a time.
pub struct PreambleScanner {
    scan_limit: usize,
}

impl PreambleScanner {
    pub fn new() -> Self {
        Self {
            scan_limit: DEFAULT_SCAN_LIMIT,
        }
    }

    pub fn with_scan_limit(mut self, limit: usize) -> Self {
        self.scan_limit = limit;
        self
    }

    pub fn scan_limit(&self) -> usize {
        self.scan_limit
    }

    /// Searches at most `scan_limit` positions starting at the window's
    /// current offset. On a match the window is left just past the anchor
    /// and the match offset, relative to the window base, is returned.
    ///
    /// A bounded reader running out of bytes ends the search like the limit
    /// does.
    pub fn scan(&self, window: &mut MemoryWindow<'_>, pattern: &Pattern) -> Result<usize, PatternError> {
        for _ in 0..self.scan_limit {
            let candidate = match window.peek(pattern.len()) {
                Ok(bytes) => bytes,
                Err(MemoryError::OutOfBounds(_)) => break,
                Err(e) => return Err(e.into()),
            };

            if pattern.matches(&candidate) {
                let found_at = window.offset();
                log::info!("found jump chain preamble at offset {:#04x}", found_at);
                window.advance(pattern.len());
                return Ok(found_at);
            }

            window.advance(1);
        }

        log::warn!("preamble {} not found within {:#x} bytes of {}", pattern, self.scan_limit, window.base());
        Err(PatternError::PreambleNotFound { limit: self.scan_limit })
    }
}

impl Default for PreambleScanner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{Address, BufferMemory};

    fn stream_with_anchor_at(k: usize, anchor: &[u8]) -> Vec<u8> {
        let mut data = vec![0x90; k];
        data.extend_from_slice(anchor);
        data.extend_from_slice(&[0xcc; 16]);
        data
    }

    #[test]
    fn test_finds_anchor_and_positions_past_it() {
        let pattern = Pattern::preamble();
        for k in [0usize, 1, 7, 300] {
            let mem = BufferMemory::new(stream_with_anchor_at(k, pattern.bytes()), Address::new(0x1000));
            let mut window = MemoryWindow::new(&mem, Address::new(0x1000));

            let found = PreambleScanner::new().scan(&mut window, &pattern).unwrap();
            assert_eq!(found, k);
            assert_eq!(window.offset(), k + pattern.len());
            assert_eq!(window.peek_u8().unwrap(), 0xcc);
        }
    }

    #[test]
    fn test_first_match_wins() {
        let pattern = Pattern::from_bytes(&[0xab, 0xcd]);
        let mem = BufferMemory::new(vec![0x00, 0xab, 0xcd, 0xab, 0xcd], Address::new(0));
        let mut window = MemoryWindow::new(&mem, Address::new(0));

        assert_eq!(PreambleScanner::new().scan(&mut window, &pattern).unwrap(), 1);
        assert_eq!(window.offset(), 3);
    }

    #[test]
    fn test_limit_exhausted() {
        let pattern = Pattern::from_bytes(&[0xab, 0xcd]);
        let mem = BufferMemory::new(stream_with_anchor_at(10, pattern.bytes()), Address::new(0));
        let mut window = MemoryWindow::new(&mem, Address::new(0));

        let result = PreambleScanner::new().with_scan_limit(10).scan(&mut window, &pattern);
        assert!(matches!(result, Err(PatternError::PreambleNotFound { limit: 10 })));
    }

    #[test]
    fn test_match_at_last_permitted_position() {
        let pattern = Pattern::from_bytes(&[0xab, 0xcd]);
        let mem = BufferMemory::new(stream_with_anchor_at(9, pattern.bytes()), Address::new(0));
        let mut window = MemoryWindow::new(&mem, Address::new(0));

        let found = PreambleScanner::new().with_scan_limit(10).scan(&mut window, &pattern);
        assert_eq!(found.unwrap(), 9);
    }

    #[test]
    fn test_end_of_buffer_is_not_found() {
        let pattern = Pattern::preamble();
        let mem = BufferMemory::new(vec![0x90; 32], Address::new(0x4000));
        let mut window = MemoryWindow::new(&mem, Address::new(0x4000));

        let result = PreambleScanner::new().scan(&mut window, &pattern);
        assert!(matches!(result, Err(PatternError::PreambleNotFound { limit: DEFAULT_SCAN_LIMIT })));
    }
}

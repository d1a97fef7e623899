// Wed Jan 15 2026 - Alex

use crate::memory::{Address, MemoryError};

/// Bounded read access to an address space.
///
/// Implementations decide how much checking happens: buffer and file backed
/// readers reject addresses outside their range, the process reader does not
/// check anything.
pub trait MemoryReader: Send + Sync {
    fn read_bytes(&self, addr: Address, len: usize) -> Result<Vec<u8>, MemoryError>;

    fn read_u8(&self, addr: Address) -> Result<u8, MemoryError> {
        Ok(self.read_bytes(addr, 1)?[0])
    }
}

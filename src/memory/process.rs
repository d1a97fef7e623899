// Tue Jan 13 2026 - Alex

use crate::memory::{Address, MemoryError, MemoryReader};

/// Reads the address space of the current process through raw pointers.
///
/// Nothing is checked. Reading an unmapped address faults the process; the
/// only protection is the caller keeping reads inside a known code region,
/// which for jump chain builds means choosing a small enough scan limit.
#[derive(Debug, Clone, Copy)]
pub struct ProcessMemory {
    _private: (),
}

impl ProcessMemory {
    /// # Safety
    ///
    /// Every address later handed to [`MemoryReader::read_bytes`] must be
    /// mapped and readable for the requested length.
    pub unsafe fn new() -> Self {
        Self { _private: () }
    }
}

impl MemoryReader for ProcessMemory {
    fn read_bytes(&self, addr: Address, len: usize) -> Result<Vec<u8>, MemoryError> {
        if addr.is_null() {
            return Err(MemoryError::InvalidAddress(addr.to_string()));
        }
        // SAFETY: the contract of `ProcessMemory::new` puts validity of the
        // range on the caller.
        let bytes = unsafe { std::slice::from_raw_parts(addr.as_ptr(), len) };
        Ok(bytes.to_vec())
    }
}

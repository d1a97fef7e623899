// Tue Jan 13 2026 - Alex

use crate::memory::{Address, MemoryError, MemoryReader};
use memmap2::Mmap;
use std::fs::File;
use std::path::Path;

/// A memory-mapped file placed at a virtual base address.
pub struct MmapMemory {
    mmap: Mmap,
    base_address: Address,
}

impl MmapMemory {
    pub fn from_file<P: AsRef<Path>>(path: P, base_address: Address) -> Result<Self, MemoryError> {
        let file = File::open(path)?;
        // SAFETY: the mapping is read-only; the file is not expected to be
        // truncated while a build runs.
        let mmap = unsafe { Mmap::map(&file) }?;
        Ok(Self {
            mmap,
            base_address,
        })
    }

    pub fn size(&self) -> usize {
        self.mmap.len()
    }

    fn offset(&self, addr: Address, len: usize) -> Result<usize, MemoryError> {
        let offset = addr.as_u64().wrapping_sub(self.base_address.as_u64());
        match offset.checked_add(len as u64) {
            Some(end) if end <= self.mmap.len() as u64 => Ok(offset as usize),
            _ => Err(MemoryError::OutOfBounds(addr.as_u64())),
        }
    }
}

impl MemoryReader for MmapMemory {
    fn read_bytes(&self, addr: Address, len: usize) -> Result<Vec<u8>, MemoryError> {
        let offset = self.offset(addr, len)?;
        Ok(self.mmap[offset..offset + len].to_vec())
    }
}

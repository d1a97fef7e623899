// Wed Jan 15 2026 - Alex

use crate::memory::{Address, MemoryError, MemoryReader};

/// An owned byte buffer placed at a virtual base address.
#[derive(Debug, Clone)]
pub struct BufferMemory {
    data: Vec<u8>,
    base_address: Address,
}

impl BufferMemory {
    pub fn new(data: Vec<u8>, base_address: Address) -> Self {
        Self { data, base_address }
    }

    pub fn from_slice(data: &[u8], base_address: Address) -> Self {
        Self::new(data.to_vec(), base_address)
    }

    fn offset(&self, addr: Address, len: usize) -> Result<usize, MemoryError> {
        let offset = addr.as_u64().wrapping_sub(self.base_address.as_u64());
        let end = offset.checked_add(len as u64).ok_or(MemoryError::OutOfBounds(addr.as_u64()))?;
        if end > self.data.len() as u64 {
            return Err(MemoryError::OutOfBounds(addr.as_u64()));
        }
        Ok(offset as usize)
    }
}

impl MemoryReader for BufferMemory {
    fn read_bytes(&self, addr: Address, len: usize) -> Result<Vec<u8>, MemoryError> {
        let offset = self.offset(addr, len)?;
        Ok(self.data[offset..offset + len].to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_within_range() {
        let mem = BufferMemory::new(vec![1, 2, 3, 4], Address::new(0x1000));
        assert_eq!(mem.read_bytes(Address::new(0x1001), 2).unwrap(), vec![2, 3]);
        assert_eq!(mem.read_u8(Address::new(0x1003)).unwrap(), 4);
    }

    #[test]
    fn test_read_out_of_range() {
        let mem = BufferMemory::new(vec![1, 2, 3, 4], Address::new(0x1000));
        assert!(matches!(
            mem.read_bytes(Address::new(0x1003), 2),
            Err(MemoryError::OutOfBounds(0x1003))
        ));
        assert!(matches!(
            mem.read_bytes(Address::new(0xfff), 1),
            Err(MemoryError::OutOfBounds(0xfff))
        ));
    }
}

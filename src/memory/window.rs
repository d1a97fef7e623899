// Wed Jan 15 2026 - Alex

use crate::memory::{Address, MemoryError, MemoryReader};

/// A forward-only view into an address space, used to walk an instruction
/// stream one instruction at a time.
///
/// The offset only ever grows. Bounds are whatever the underlying reader
/// enforces.
pub struct MemoryWindow<'a> {
    reader: &'a dyn MemoryReader,
    base: Address,
    offset: usize,
}

impl<'a> MemoryWindow<'a> {
    pub fn new(reader: &'a dyn MemoryReader, base: Address) -> Self {
        Self { reader, base, offset: 0 }
    }

    pub fn base(&self) -> Address {
        self.base
    }

    /// Bytes advanced since the window was created.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn position(&self) -> Address {
        self.base + self.offset as u64
    }

    /// Returns the next `len` bytes without moving the window.
    pub fn peek(&self, len: usize) -> Result<Vec<u8>, MemoryError> {
        self.reader.read_bytes(self.position(), len)
    }

    pub fn peek_u8(&self) -> Result<u8, MemoryError> {
        self.reader.read_u8(self.position())
    }

    pub fn advance(&mut self, len: usize) {
        self.offset = self.offset.wrapping_add(len);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::BufferMemory;

    #[test]
    fn test_peek_does_not_move() {
        let mem = BufferMemory::new(vec![0x10, 0x20, 0x30], Address::new(0x2000));
        let window = MemoryWindow::new(&mem, Address::new(0x2000));
        assert_eq!(window.peek(2).unwrap(), vec![0x10, 0x20]);
        assert_eq!(window.peek(2).unwrap(), vec![0x10, 0x20]);
        assert_eq!(window.offset(), 0);
    }

    #[test]
    fn test_advance() {
        let mem = BufferMemory::new(vec![0x10, 0x20, 0x30], Address::new(0x2000));
        let mut window = MemoryWindow::new(&mem, Address::new(0x2000));
        window.advance(2);
        assert_eq!(window.offset(), 2);
        assert_eq!(window.position(), Address::new(0x2002));
        assert_eq!(window.peek_u8().unwrap(), 0x30);

        window.advance(1);
        assert!(matches!(window.peek(1), Err(MemoryError::OutOfBounds(0x2003))));
    }
}

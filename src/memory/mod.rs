// Tue Jan 13 2026 - Alex

pub mod address;
pub mod buffer;
pub mod error;
pub mod mmap;
pub mod process;
pub mod traits;
pub mod window;

pub use address::Address;
pub use buffer::BufferMemory;
pub use error::MemoryError;
pub use mmap::MmapMemory;
pub use process::ProcessMemory;
pub use traits::MemoryReader;
pub use window::MemoryWindow;

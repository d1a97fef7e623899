// Wed Jan 15 2026 - Alex

pub mod builder;
pub mod cell;
pub mod error;
pub mod table;

pub use builder::JumpTableBuilder;
pub use cell::JumpTableCell;
pub use error::JumpTableError;
pub use table::{JumpSlot, JumpTable};

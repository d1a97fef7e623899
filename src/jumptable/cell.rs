// Wed Jan 15 2026 - Alex

use crate::jumptable::{JumpTable, JumpTableError};
use once_cell::sync::OnceCell;

/// Holds a table that is built once and then read from anywhere.
///
/// ```
/// use jumpchain::jumptable::JumpTableCell;
///
/// static TABLE: JumpTableCell = JumpTableCell::new();
/// assert!(TABLE.get().is_none());
/// ```
pub struct JumpTableCell {
    cell: OnceCell<JumpTable>,
}

impl JumpTableCell {
    pub const fn new() -> Self {
        Self { cell: OnceCell::new() }
    }

    /// Runs `build` unless a table is already published. Concurrent callers
    /// block until the first build finishes. A failed build publishes
    /// nothing, so a later call may try again.
    pub fn get_or_build<F>(&self, build: F) -> Result<&JumpTable, JumpTableError>
    where
        F: FnOnce() -> Result<JumpTable, JumpTableError>,
    {
        self.cell.get_or_try_init(build)
    }

    pub fn get(&self) -> Option<&JumpTable> {
        self.cell.get()
    }

    pub fn is_built(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl Default for JumpTableCell {
    fn default() -> Self {
        Self::new()
    }
}

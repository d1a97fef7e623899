// Tue Jan 13 2026 - Alex

pub mod decoder;
pub mod encoding;
pub mod error;

pub use decoder::JccDecoder;
pub use encoding::BranchForm;
pub use error::DecodeError;

use crate::memory::Address;
use serde::Serialize;

/// A decoded conditional branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BranchInstruction {
    pub address: Address,
    pub form: BranchForm,
    pub displacement: i64,
    pub target: Address,
}

impl BranchInstruction {
    /// Targets are relative to the end of the instruction.
    pub fn new(address: Address, form: BranchForm, displacement: i64) -> Self {
        let next = address + form.length() as u64;
        Self {
            address,
            form,
            displacement,
            target: next.offset(displacement),
        }
    }

    pub fn length(&self) -> usize {
        self.form.length()
    }
}

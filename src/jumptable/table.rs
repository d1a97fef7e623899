// Wed Jan 15 2026 - Alex

use crate::analysis::x86::{BranchForm, BranchInstruction};
use crate::memory::Address;
use serde::Serialize;
use std::ops::Index;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JumpSlot {
    pub index: usize,
    pub target: Address,
    /// Offset of the branch from the function entry.
    pub site_offset: usize,
    pub form: BranchForm,
    pub displacement: i64,
}

impl JumpSlot {
    pub fn new(index: usize, entry: Address, branch: &BranchInstruction) -> Self {
        Self {
            index,
            target: branch.target,
            site_offset: branch.address.distance(entry) as usize,
            form: branch.form,
            displacement: branch.displacement,
        }
    }
}

/// Handler addresses recovered from a jump chain, in chain order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JumpTable {
    entry: Address,
    preamble_offset: usize,
    #[serde(rename = "handlers")]
    slots: Vec<JumpSlot>,
}

impl JumpTable {
    pub fn new(entry: Address, preamble_offset: usize, slots: Vec<JumpSlot>) -> Self {
        Self {
            entry,
            preamble_offset,
            slots,
        }
    }

    pub fn entry(&self) -> Address {
        self.entry
    }

    pub fn preamble_offset(&self) -> usize {
        self.preamble_offset
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Address> {
        self.slots.get(index).map(|slot| slot.target)
    }

    pub fn slots(&self) -> &[JumpSlot] {
        &self.slots
    }

    pub fn targets(&self) -> Vec<Address> {
        self.slots.iter().map(|slot| slot.target).collect()
    }

    /// The layout indexed by dispatch code: one pointer-sized word per handler.
    pub fn as_raw(&self) -> Vec<usize> {
        self.slots.iter().map(|slot| slot.target.as_usize()).collect()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Index<usize> for JumpTable {
    type Output = Address;

    fn index(&self, index: usize) -> &Self::Output {
        &self.slots[index].target
    }
}

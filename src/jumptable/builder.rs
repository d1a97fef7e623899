// Wed Jan 15 2026 - Alex

use crate::analysis::x86::{BranchForm, JccDecoder};
use crate::config::ChainConfig;
use crate::jumptable::{JumpSlot, JumpTable, JumpTableError};
use crate::memory::{Address, MemoryReader, MemoryWindow};
use crate::pattern::{Pattern, PreambleScanner, DEFAULT_SCAN_LIMIT};

/// Recovers handler addresses from the jump chain following an anchor.
///
/// A build scans from the entry address for the anchor, then decodes
/// `branch_count` consecutive JNE instructions. Any failure discards the
/// whole table.
#[derive(Debug, Clone)]
pub struct JumpTableBuilder {
    anchor: Pattern,
    scan_limit: usize,
    branch_count: usize,
}

impl JumpTableBuilder {
    pub fn new(branch_count: usize) -> Self {
        Self {
            anchor: Pattern::preamble(),
            scan_limit: DEFAULT_SCAN_LIMIT,
            branch_count,
        }
    }

    pub fn from_config(config: &ChainConfig) -> Result<Self, JumpTableError> {
        Ok(Self {
            anchor: config.anchor_pattern()?,
            scan_limit: config.scan_limit,
            branch_count: config.branch_count,
        })
    }

    pub fn with_anchor(mut self, anchor: Pattern) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn with_scan_limit(mut self, limit: usize) -> Self {
        self.scan_limit = limit;
        self
    }

    pub fn with_branch_count(mut self, count: usize) -> Self {
        self.branch_count = count;
        self
    }

    pub fn anchor(&self) -> &Pattern {
        &self.anchor
    }

    pub fn scan_limit(&self) -> usize {
        self.scan_limit
    }

    pub fn branch_count(&self) -> usize {
        self.branch_count
    }

    pub fn build(&self, reader: &dyn MemoryReader, entry: Address) -> Result<JumpTable, JumpTableError> {
        let mut window = MemoryWindow::new(reader, entry);

        let preamble_offset = PreambleScanner::new()
            .with_scan_limit(self.scan_limit)
            .scan(&mut window, &self.anchor)?;

        let decoder = JccDecoder::new();
        let mut slots = Vec::with_capacity(self.branch_count);

        for index in 0..self.branch_count {
            let branch = decoder
                .decode(&window)
                .map_err(|e| JumpTableError::from_decode(e, index, window.offset()))?;

            let slot = JumpSlot::new(index, entry, &branch);
            log::debug!(
                "handler idx {} {:>2} bit joffset {:>4}  abs {:#08x}  (JNE @ fn+{:#04x})",
                index,
                branch.form.displacement_bits(),
                branch.displacement,
                branch.target,
                slot.site_offset,
            );

            window.advance(branch.length());
            slots.push(slot);
        }

        let near = slots.iter().filter(|s| s.form == BranchForm::Near).count();
        log::info!(
            "decoded {} handlers at {} ({} short, {} near)",
            slots.len(),
            entry,
            slots.len() - near,
            near
        );

        Ok(JumpTable::new(entry, preamble_offset, slots))
    }
}

// Tue Jan 13 2026 - Alex

use crate::analysis::x86::BranchForm;
use crate::jumptable::JumpTable;
use colored::*;

pub struct DisplayRenderer {
    use_color: bool,
}

impl DisplayRenderer {
    pub fn new() -> Self {
        Self { use_color: true }
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    fn paint(&self, text: String, color: Color) -> String {
        if self.use_color {
            text.as_str().color(color).to_string()
        } else {
            text
        }
    }

    pub fn render_table(&self, table: &JumpTable) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "{} {}  preamble at fn+0x{:x}\n",
            self.paint("entry".to_string(), Color::Cyan),
            table.entry(),
            table.preamble_offset()
        ));

        for slot in table.slots() {
            let form = match slot.form {
                BranchForm::Short => "rel8 ",
                BranchForm::Near => "rel32",
            };
            out.push_str(&format!(
                "  [{}] {}  {} {:>+8}  (JNE @ fn+0x{:x})\n",
                slot.index,
                self.paint(slot.target.to_string(), Color::Red),
                form,
                slot.displacement,
                slot.site_offset
            ));
        }

        out
    }
}

impl Default for DisplayRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::x86::BranchInstruction;
    use crate::jumptable::{JumpSlot, JumpTable};
    use crate::memory::Address;

    #[test]
    fn test_render_plain() {
        let entry = Address::new(0x1000);
        let branch = BranchInstruction::new(Address::new(0x1008), BranchForm::Short, 42);
        let table = JumpTable::new(entry, 0, vec![JumpSlot::new(0, entry, &branch)]);

        let text = DisplayRenderer::new().with_color(false).render_table(&table);
        assert!(text.starts_with("entry 0x0000000000001000  preamble at fn+0x0\n"));
        assert!(text.contains("[0] 0x0000000000001034  rel8       +42  (JNE @ fn+0x8)"));
    }
}

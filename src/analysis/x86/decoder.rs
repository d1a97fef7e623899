// Tue Jan 13 2026 - Alex

use crate::analysis::x86::encoding::{
    decode_rel32, decode_rel8, BranchForm, JNE_REL32_EXT, JNE_REL8, TWO_BYTE_ESCAPE,
};
use crate::analysis::x86::{BranchInstruction, DecodeError};
use crate::memory::MemoryWindow;

/// Decodes the two JNE encodings a jump chain is built from.
pub struct JccDecoder;

impl JccDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decodes the branch at the window's position. The window is only
    /// peeked; callers advance it by [`BranchInstruction::length`].
    pub fn decode(&self, window: &MemoryWindow<'_>) -> Result<BranchInstruction, DecodeError> {
        let address = window.position();
        let opc0 = window.peek_u8()?;

        match opc0 {
            JNE_REL8 => {
                let raw = window.peek(BranchForm::Short.length())?;
                let displacement = decode_rel8(raw[1]);
                Ok(BranchInstruction::new(address, BranchForm::Short, displacement))
            }
            TWO_BYTE_ESCAPE => {
                let opcode = window.peek(2)?;
                if opcode[1] != JNE_REL32_EXT {
                    return Err(DecodeError::UnknownOpcode { bytes: opcode });
                }
                let raw = window.peek(BranchForm::Near.length())?;
                let displacement = decode_rel32([raw[2], raw[3], raw[4], raw[5]]);
                Ok(BranchInstruction::new(address, BranchForm::Near, displacement))
            }
            _ => Err(DecodeError::UnknownOpcode { bytes: vec![opc0] }),
        }
    }
}

impl Default for JccDecoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{Address, BufferMemory};

    fn decode_at(bytes: &[u8], base: u64) -> Result<BranchInstruction, DecodeError> {
        let mem = BufferMemory::from_slice(bytes, Address::new(base));
        let window = MemoryWindow::new(&mem, Address::new(base));
        JccDecoder::new().decode(&window)
    }

    #[test]
    fn test_short_form() {
        let insn = decode_at(&[0x75, 0x2a], 0x1000).unwrap();
        assert_eq!(insn.form, BranchForm::Short);
        assert_eq!(insn.displacement, 42);
        assert_eq!(insn.length(), 2);
        assert_eq!(insn.target, Address::new(0x1000 + 2 + 42));
    }

    #[test]
    fn test_short_form_backwards() {
        let insn = decode_at(&[0x75, 0xf0], 0x1000).unwrap();
        assert_eq!(insn.displacement, -16);
        assert_eq!(insn.target, Address::new(0x1000 + 2 - 16));
    }

    #[test]
    fn test_near_form() {
        let insn = decode_at(&[0x0f, 0x85, 0x10, 0x00, 0x00, 0x00], 0x1000).unwrap();
        assert_eq!(insn.form, BranchForm::Near);
        assert_eq!(insn.displacement, 16);
        assert_eq!(insn.length(), 6);
        assert_eq!(insn.target, Address::new(0x1000 + 6 + 16));
    }

    #[test]
    fn test_near_form_large_and_negative() {
        let insn = decode_at(&[0x0f, 0x85, 0x00, 0x00, 0x02, 0x00], 0x1000).unwrap();
        assert_eq!(insn.target, Address::new(0x1000 + 6 + 0x20000));

        let insn = decode_at(&[0x0f, 0x85, 0x00, 0xf0, 0xff, 0xff], 0x10000).unwrap();
        assert_eq!(insn.displacement, -0x1000);
        assert_eq!(insn.target, Address::new(0x10000 + 6 - 0x1000));
    }

    #[test]
    fn test_target_wraps() {
        let insn = decode_at(&[0x75, 0x80], 0x10).unwrap();
        assert_eq!(insn.target, Address::new(0x12).offset(-128));
        assert!(insn.target.as_u64() > 0x10);
    }

    #[test]
    fn test_unknown_leading_byte() {
        match decode_at(&[0x74, 0x2a], 0x1000) {
            Err(DecodeError::UnknownOpcode { bytes }) => assert_eq!(bytes, vec![0x74]),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_two_byte_opcode() {
        match decode_at(&[0x0f, 0x84, 0x10, 0x00, 0x00, 0x00], 0x1000) {
            Err(DecodeError::UnknownOpcode { bytes }) => assert_eq!(bytes, vec![0x0f, 0x84]),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_truncated_instruction() {
        assert!(matches!(
            decode_at(&[0x0f, 0x85, 0x10], 0x1000),
            Err(DecodeError::Memory(_))
        ));
    }

    #[test]
    fn test_error_message() {
        let err = decode_at(&[0x0f, 0x8e], 0).unwrap_err();
        assert_eq!(err.to_string(), "Unknown opcode 0f 8e");
    }
}

// Tue Jan 13 2026 - Alex

// Jcc encodings, AMD64 Architecture Programmer's Manual Vol. 3,
// "Jcc - Jump on Condition".
pub const JNE_REL8: u8 = 0x75;
pub const TWO_BYTE_ESCAPE: u8 = 0x0f;
pub const JNE_REL32_EXT: u8 = 0x85;

pub const SHORT_LEN: usize = 2;
pub const NEAR_LEN: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BranchForm {
    /// `75 cb`
    Short,
    /// `0f 85 cd`
    Near,
}

impl BranchForm {
    pub fn length(self) -> usize {
        match self {
            BranchForm::Short => SHORT_LEN,
            BranchForm::Near => NEAR_LEN,
        }
    }

    pub fn displacement_bits(self) -> u32 {
        match self {
            BranchForm::Short => 8,
            BranchForm::Near => 32,
        }
    }
}

pub fn decode_rel8(byte: u8) -> i64 {
    byte as i8 as i64
}

pub fn decode_rel32(bytes: [u8; 4]) -> i64 {
    i32::from_le_bytes(bytes) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rel8_sign_extension() {
        assert_eq!(decode_rel8(0x2a), 42);
        assert_eq!(decode_rel8(0x7f), 127);
        assert_eq!(decode_rel8(0x80), -128);
        assert_eq!(decode_rel8(0xfe), -2);
    }

    #[test]
    fn test_rel32_uses_all_four_bytes() {
        assert_eq!(decode_rel32([0x10, 0x00, 0x00, 0x00]), 16);
        assert_eq!(decode_rel32([0x00, 0x00, 0x01, 0x00]), 0x10000);
        assert_eq!(decode_rel32([0x00, 0x00, 0x00, 0x01]), 0x1000000);
        assert_eq!(decode_rel32([0xfa, 0xff, 0xff, 0xff]), -6);
        assert_eq!(decode_rel32([0x00, 0x00, 0x00, 0x80]), i32::MIN as i64);
    }
}

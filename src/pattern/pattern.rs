// Tue Jan 13 2026 - Alex

use crate::pattern::PatternError;
use std::fmt;

/// `mov eax, 0x6a786a63; xor rax, rax`, the marker emitted right before a
/// jump chain.
pub const DEFAULT_PREAMBLE: [u8; 8] = [0xb8, 0x63, 0x6a, 0x78, 0x6a, 0x48, 0x31, 0xc0];

/// A fixed byte sequence compared for exact equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    bytes: Vec<u8>,
    name: Option<String>,
}

impl Pattern {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
            name: None,
        }
    }

    pub fn preamble() -> Self {
        Self::from_bytes(&DEFAULT_PREAMBLE).with_name("jump chain preamble")
    }

    /// Parses space separated hex bytes, e.g. `"b8 63 6a 78"`. Each byte is
    /// exactly two hex digits, optionally behind a single `0x`.
    pub fn from_hex(hex: &str) -> Result<Self, PatternError> {
        let mut bytes = Vec::new();

        for part in hex.split_whitespace() {
            let digits = part
                .strip_prefix("0x")
                .or_else(|| part.strip_prefix("0X"))
                .unwrap_or(part);
            if digits.len() != 2 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(PatternError::InvalidPattern(format!("'{}' is not a hex byte", part)));
            }
            let byte = u8::from_str_radix(digits, 16)
                .map_err(|_| PatternError::InvalidPattern(format!("'{}' is not a hex byte", part)))?;
            bytes.push(byte);
        }

        Ok(Self { bytes, name: None })
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn matches(&self, data: &[u8]) -> bool {
        data.len() >= self.bytes.len() && data[..self.bytes.len()] == self.bytes[..]
    }

    pub fn to_hex_string(&self) -> String {
        self.bytes.iter()
            .map(|b| format!("{:02x}", b))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for Pattern {
    fn default() -> Self {
        Self::preamble()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} [{}]", name, self.to_hex_string()),
            None => write!(f, "[{}]", self.to_hex_string()),
        }
    }
}

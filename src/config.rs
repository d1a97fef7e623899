// Tue Jan 13 2026 - Alex

use crate::pattern::{Pattern, PatternError, DEFAULT_SCAN_LIMIT};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    /// Space separated hex bytes marking the start of the chain.
    pub anchor: String,
    pub scan_limit: usize,
    pub branch_count: usize,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            anchor: Pattern::preamble().to_hex_string(),
            scan_limit: DEFAULT_SCAN_LIMIT,
            branch_count: 3,
        }
    }
}

impl ChainConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        let config: ChainConfig = serde_json::from_str(&text)?;
        config.validate().map_err(|e| anyhow::anyhow!(e))?;
        Ok(config)
    }

    pub fn with_anchor(mut self, anchor: &str) -> Self {
        self.anchor = anchor.to_string();
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

    pub fn anchor_pattern(&self) -> Result<Pattern, PatternError> {
        Ok(Pattern::from_hex(&self.anchor)?.with_name("anchor"))
    }

    pub fn validate(&self) -> Result<(), String> {
        let anchor = self.anchor_pattern().map_err(|e| e.to_string())?;
        if anchor.is_empty() {
            return Err("anchor must contain at least one byte".to_string());
        }
        if self.scan_limit == 0 {
            return Err("scan_limit must be greater than 0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::DEFAULT_PREAMBLE;

    #[test]
    fn test_defaults() {
        let config = ChainConfig::default();
        assert_eq!(config.anchor_pattern().unwrap().bytes(), &DEFAULT_PREAMBLE);
        assert_eq!(config.scan_limit, 0x10000);
        assert_eq!(config.branch_count, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate() {
        assert!(ChainConfig::new().with_anchor("").validate().is_err());
        assert!(ChainConfig::new().with_anchor("xx").validate().is_err());
        assert!(ChainConfig::new().with_scan_limit(0).validate().is_err());
        assert!(ChainConfig::new().with_branch_count(0).validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let config: ChainConfig = serde_json::from_str(r#"{ "branch_count": 5 }"#).unwrap();
        assert_eq!(config.branch_count, 5);
        assert_eq!(config.scan_limit, DEFAULT_SCAN_LIMIT);
    }

    #[test]
    fn test_load() {
        let path = std::env::temp_dir().join(format!("jumpchain-config-{}.json", std::process::id()));
        fs::write(&path, r#"{ "anchor": "48 31 c0", "scan_limit": 256, "branch_count": 2 }"#).unwrap();

        let config = ChainConfig::load(&path).unwrap();
        assert_eq!(config.anchor_pattern().unwrap().bytes(), &[0x48, 0x31, 0xc0]);
        assert_eq!(config.scan_limit, 256);
        assert_eq!(config.branch_count, 2);

        fs::write(&path, r#"{ "scan_limit": 0 }"#).unwrap();
        assert!(ChainConfig::load(&path).is_err());

        fs::remove_file(&path).ok();
    }
}

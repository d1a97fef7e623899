// Tue Jan 13 2026 - Alex

use crate::memory::Address;
use crate::symbol::{AddressResolver, SymbolError};
use goblin::elf::program_header::PT_LOAD;
use goblin::mach::Mach;
use goblin::Object;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct BinarySymbol {
    pub name: String,
    pub address: u64,
    pub size: u64,
    pub file_offset: Option<u64>,
}

#[derive(Debug, Clone, Copy)]
struct LoadSegment {
    vmaddr: u64,
    fileoff: u64,
    filesize: u64,
}

impl LoadSegment {
    fn file_offset_of(&self, addr: u64) -> Option<u64> {
        if addr >= self.vmaddr && addr - self.vmaddr < self.filesize {
            self.fileoff.checked_add(addr - self.vmaddr)
        } else {
            None
        }
    }
}

/// Symbols of an ELF or Mach-O file, with the file offsets their code lives
/// at.
pub struct BinarySymbols {
    path: PathBuf,
    symbols: HashMap<String, BinarySymbol>,
}

impl BinarySymbols {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SymbolError> {
        let data = fs::read(path.as_ref())?;
        let mut symbols = Self::parse(&data)?;
        symbols.path = path.as_ref().to_path_buf();
        Ok(symbols)
    }

    pub fn parse(data: &[u8]) -> Result<Self, SymbolError> {
        let object = Object::parse(data).map_err(|e| SymbolError::Parse(e.to_string()))?;

        let (segments, raw) = match object {
            Object::Elf(elf) => {
                let segments: Vec<LoadSegment> = elf.program_headers.iter()
                    .filter(|ph| ph.p_type == PT_LOAD)
                    .map(|ph| LoadSegment {
                        vmaddr: ph.p_vaddr,
                        fileoff: ph.p_offset,
                        filesize: ph.p_filesz,
                    })
                    .collect();

                let mut raw = Vec::new();
                let tables = [(&elf.syms, &elf.strtab), (&elf.dynsyms, &elf.dynstrtab)];
                for (syms, strtab) in tables {
                    for sym in syms.iter() {
                        if sym.st_value == 0 {
                            continue;
                        }
                        match strtab.get_at(sym.st_name) {
                            Some(name) if !name.is_empty() => {
                                raw.push((name.to_string(), sym.st_value, sym.st_size));
                            }
                            _ => {}
                        }
                    }
                }
                (segments, raw)
            }
            Object::Mach(Mach::Binary(macho)) => {
                let mut segments = Vec::new();
                for seg in &macho.segments {
                    segments.push(LoadSegment {
                        vmaddr: seg.vmaddr,
                        fileoff: seg.fileoff,
                        filesize: seg.filesize,
                    });
                }

                let mut raw = Vec::new();
                for entry in macho.symbols() {
                    let (name, nlist) = entry.map_err(|e| SymbolError::Parse(e.to_string()))?;
                    if nlist.n_sect == 0 || nlist.n_value == 0 || name.is_empty() {
                        continue;
                    }
                    raw.push((name.to_string(), nlist.n_value, 0));
                }
                (segments, raw)
            }
            Object::Mach(Mach::Fat(_)) => {
                return Err(SymbolError::Unsupported("fat Mach-O".to_string()));
            }
            Object::PE(_) => return Err(SymbolError::Unsupported("PE".to_string())),
            _ => return Err(SymbolError::Unsupported("unknown object".to_string())),
        };

        let mut symbols = HashMap::new();
        for (name, address, size) in raw {
            let file_offset = segments.iter().find_map(|seg| seg.file_offset_of(address));
            symbols.entry(name.clone()).or_insert(BinarySymbol {
                name,
                address,
                size,
                file_offset,
            });
        }

        log::debug!("parsed {} symbols from {} load segments", symbols.len(), segments.len());

        Ok(Self {
            path: PathBuf::new(),
            symbols,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Looks a name up as given, then with the Mach-O leading underscore.
    pub fn symbol(&self, name: &str) -> Option<&BinarySymbol> {
        self.symbols
            .get(name)
            .or_else(|| self.symbols.get(&format!("_{}", name)))
    }

    pub fn file_offset(&self, name: &str) -> Result<u64, SymbolError> {
        let symbol = self.symbol(name).ok_or_else(|| SymbolError::NotFound(name.to_string()))?;
        symbol.file_offset.ok_or_else(|| SymbolError::NotInFile(name.to_string()))
    }

    /// The virtual base at which the file's bytes must be placed for `name`'s
    /// address to land on its file contents.
    pub fn load_base(&self, name: &str) -> Result<Address, SymbolError> {
        let address = self.resolve(name)?;
        let file_offset = self.file_offset(name)?;
        Ok(address - file_offset)
    }
}

impl AddressResolver for BinarySymbols {
    fn resolve(&self, name: &str) -> Result<Address, SymbolError> {
        self.symbol(name)
            .map(|s| Address::new(s.address))
            .ok_or_else(|| SymbolError::NotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_mapping() {
        let seg = LoadSegment { vmaddr: 0x401000, fileoff: 0x1000, filesize: 0x200 };
        assert_eq!(seg.file_offset_of(0x401010), Some(0x1010));
        assert_eq!(seg.file_offset_of(0x401200), None);
        assert_eq!(seg.file_offset_of(0x400fff), None);
    }

    #[test]
    fn test_segment_mapping_offset_overflow() {
        let seg = LoadSegment { vmaddr: 0x1000, fileoff: u64::MAX - 4, filesize: 0x100 };
        assert_eq!(seg.file_offset_of(0x1004), Some(u64::MAX));
        assert_eq!(seg.file_offset_of(0x1010), None);
    }

    #[test]
    fn test_rejects_non_object() {
        assert!(BinarySymbols::parse(&[0u8; 64]).is_err());
    }

    #[test]
    fn test_truncated_elf_is_parse_error() {
        let mut data = vec![0x7f, b'E', b'L', b'F', 2, 1, 1, 0];
        data.resize(16, 0);
        let err = BinarySymbols::parse(&data).err().unwrap();
        assert!(matches!(err, SymbolError::Parse(_)));
        assert!(err.to_string().starts_with("Parse error: "));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_resolves_own_main() {
        let exe = std::env::current_exe().unwrap();
        let symbols = BinarySymbols::load(&exe).unwrap();
        assert!(!symbols.is_empty());

        let main = symbols.resolve("main").unwrap();
        let offset = symbols.file_offset("main").unwrap();
        assert_eq!(symbols.load_base("main").unwrap() + offset, main);
        assert!(matches!(symbols.resolve("no_such_symbol_here"), Err(SymbolError::NotFound(_))));
    }
}

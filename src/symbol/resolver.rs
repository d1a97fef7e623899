// Tue Jan 13 2026 - Alex

use crate::memory::Address;
use crate::symbol::SymbolError;
use std::collections::HashMap;

/// Supplies the entry address of a named function.
pub trait AddressResolver {
    fn resolve(&self, name: &str) -> Result<Address, SymbolError>;
}

/// Names registered by the embedding program, typically from function
/// pointers.
#[derive(Debug, Default, Clone)]
pub struct SymbolRegistry {
    symbols: HashMap<String, Address>,
}

impl SymbolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: &str, address: Address) -> Option<Address> {
        self.symbols.insert(name.to_string(), address)
    }

    pub fn register_fn(&mut self, name: &str, function: *const ()) -> Option<Address> {
        self.register(name, Address::from_ptr(function))
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl AddressResolver for SymbolRegistry {
    fn resolve(&self, name: &str) -> Result<Address, SymbolError> {
        self.symbols
            .get(name)
            .copied()
            .ok_or_else(|| SymbolError::NotFound(name.to_string()))
    }
}

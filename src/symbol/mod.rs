// Tue Jan 13 2026 - Alex

pub mod binary;
pub mod error;
pub mod resolver;

pub use binary::{BinarySymbol, BinarySymbols};
pub use error::SymbolError;
pub use resolver::{AddressResolver, SymbolRegistry};

pub mod code;
pub mod encoder;
pub mod frequency;
pub mod tree;

pub use code::{CodeLengthCalculator, SymbolCodeLength};
pub use encoder::{CodeTableWriter, Encoder};
pub use frequency::FrequencyTable;
pub use tree::{Branch, HuffmanTree, NodeIndex};

/// Byte values 0..=255 plus the pseudo end-of-file symbol.
pub type Symbol = u16;

pub const PSEUDO_EOF: Symbol = 256;
pub const SYMBOL_COUNT: usize = PSEUDO_EOF as usize + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolFrequency {
    pub symbol: Symbol,
    pub frequency: usize,
}

impl SymbolFrequency {
    pub fn new(symbol: Symbol, frequency: usize) -> Self {
        Self { symbol, frequency }
    }
}

impl From<(Symbol, usize)> for SymbolFrequency {
    fn from(value: (Symbol, usize)) -> Self {
        Self::new(value.0, value.1)
    }
}

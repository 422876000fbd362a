use super::{HuffmanTree, Symbol};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolCodeLength {
    pub symbol: Symbol,
    pub frequency: usize,
    pub length: usize,
}

impl SymbolCodeLength {
    /// Bits occupied by all occurrences of the symbol.
    pub fn bits(&self) -> usize {
        self.frequency * self.length
    }
}

impl From<(Symbol, usize, usize)> for SymbolCodeLength {
    fn from(value: (Symbol, usize, usize)) -> Self {
        Self {
            symbol: value.0,
            frequency: value.1,
            length: value.2,
        }
    }
}

/// Derives the code length of every leaf from its level in the tree.
///
/// The leaf itself counts as the first level, so the lone leaf of a root-only
/// tree has length 1.
pub struct CodeLengthCalculator<'a> {
    tree: &'a HuffmanTree,
}

impl<'a> CodeLengthCalculator<'a> {
    pub fn new(tree: &'a HuffmanTree) -> Self {
        Self { tree }
    }

    /// One entry per leaf in ascending symbol order.
    pub fn code_lengths(&self) -> Vec<SymbolCodeLength> {
        self.tree
            .leaves()
            .map(|(symbol, index)| SymbolCodeLength {
                symbol,
                frequency: self.tree.frequency(index),
                length: self.tree.depth(index),
            })
            .collect()
    }

    pub fn total_bits(&self) -> usize {
        self.code_lengths().iter().map(SymbolCodeLength::bits).sum()
    }

    pub fn kraft_sum(&self) -> f64 {
        self.code_lengths()
            .iter()
            .map(|c| 2f64.powi(-(c.length as i32)))
            .sum()
    }
}

use std::io::{self, BufRead, BufReader, Read};

use super::{Symbol, SymbolFrequency, PSEUDO_EOF, SYMBOL_COUNT};

/// Occurrence counts of every byte value seen in an input, plus the pseudo
/// end-of-file symbol which is always present with a count of zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    slots: [Option<usize>; SYMBOL_COUNT],
}

impl FrequencyTable {
    pub fn new() -> Self {
        let mut slots = [None; SYMBOL_COUNT];
        slots[PSEUDO_EOF as usize] = Some(0);
        Self { slots }
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        bytes.iter().copied().collect()
    }

    pub fn from_reader<R: Read>(reader: R) -> io::Result<Self> {
        let mut table = Self::new();
        let mut reader = BufReader::new(reader);
        loop {
            let buffer = reader.fill_buf()?;
            if buffer.is_empty() {
                break;
            }
            buffer.iter().for_each(|&byte| table.increment_byte(byte));
            let consumed = buffer.len();
            reader.consume(consumed);
        }
        Ok(table)
    }

    pub fn increment_byte(&mut self, byte: u8) {
        *self.slots[byte as usize].get_or_insert(0) += 1;
    }

    pub fn frequency(&self, symbol: Symbol) -> Option<usize> {
        self.slots.get(symbol as usize).copied().flatten()
    }

    /// Number of symbols present, including the pseudo end-of-file symbol.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn total_bytes(&self) -> usize {
        self.slots.iter().flatten().sum()
    }

    /// Every present symbol in ascending symbol order.
    pub fn symbol_frequencies(&self) -> Vec<SymbolFrequency> {
        (0..=PSEUDO_EOF)
            .zip(self.slots.iter().copied())
            .filter_map(|(symbol, slot)| slot.map(|frequency| (symbol, frequency)))
            .map(SymbolFrequency::from)
            .collect()
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<u8> for FrequencyTable {
    fn from_iter<T: IntoIterator<Item = u8>>(bytes: T) -> Self {
        let mut table = Self::new();
        for byte in bytes {
            table.increment_byte(byte);
        }
        table
    }
}

#[cfg(test)]
mod test {
    use super::super::{SymbolFrequency, PSEUDO_EOF};
    use super::FrequencyTable;

    #[test]
    fn test_empty_input_holds_only_pseudo_eof() {
        let table = FrequencyTable::from_bytes(b"");
        assert_eq!(table.len(), 1);
        assert_eq!(table.frequency(PSEUDO_EOF), Some(0));
        assert_eq!(
            table.symbol_frequencies(),
            vec![SymbolFrequency::new(PSEUDO_EOF, 0)]
        );
    }

    #[test]
    fn test_count_symbols() {
        let table = FrequencyTable::from_bytes(b"aaaabbbcc");
        let expected = vec![
            SymbolFrequency::new(b'a' as u16, 4),
            SymbolFrequency::new(b'b' as u16, 3),
            SymbolFrequency::new(b'c' as u16, 2),
            SymbolFrequency::new(PSEUDO_EOF, 0),
        ];
        assert_eq!(table.symbol_frequencies(), expected);
        assert_eq!(table.total_bytes(), 9);
    }

    #[test]
    fn test_unseen_bytes_have_no_slot() {
        let table = FrequencyTable::from_bytes(&[0, 255, 0]);
        assert_eq!(table.frequency(0), Some(2));
        assert_eq!(table.frequency(255), Some(1));
        assert_eq!(table.frequency(1), None);
        assert_eq!(table.frequency(b'a' as u16), None);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_pseudo_eof_is_never_incremented() {
        let bytes: Vec<u8> = (0..=255).collect();
        let table = FrequencyTable::from_bytes(&bytes);
        assert_eq!(table.len(), 257);
        assert_eq!(table.frequency(PSEUDO_EOF), Some(0));
    }

    #[test]
    fn test_out_of_range_symbol_has_no_frequency() {
        let table = FrequencyTable::new();
        assert_eq!(table.frequency(PSEUDO_EOF + 1), None);
    }

    #[test]
    fn test_reader_and_slice_agree() {
        let bytes: Vec<u8> = (0..10_000u32).map(|i| (i * 7 % 251) as u8).collect();
        let from_reader = FrequencyTable::from_reader(bytes.as_slice()).unwrap();
        assert_eq!(from_reader, FrequencyTable::from_bytes(&bytes));
    }
}

use std::fmt;

use crate::huffman::{Symbol, SymbolCodeLength};

fn is_printable(symbol: Symbol) -> bool {
    (0x20..=0x7E).contains(&symbol)
}

/// Human readable listing of every symbol with its count, code length and the
/// bits it occupies. Printable bytes are shown quoted, all other symbols
/// (including the pseudo end-of-file symbol) as octal numbers.
pub struct Report<'a> {
    code_lengths: &'a [SymbolCodeLength],
}

impl<'a> Report<'a> {
    pub fn new(code_lengths: &'a [SymbolCodeLength]) -> Self {
        Self { code_lengths }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in self.code_lengths {
            if is_printable(entry.symbol) {
                write!(f, "'{}' : ", entry.symbol as u8 as char)?;
            } else {
                write!(f, "{:o}: ", entry.symbol)?;
            }
            writeln!(
                f,
                "{} x {} bits = {} bits",
                entry.frequency,
                entry.length,
                entry.bits()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::Report;
    use crate::huffman::{SymbolCodeLength, PSEUDO_EOF};

    #[test]
    fn test_printable_symbol_line() {
        let entries = [SymbolCodeLength::from((b'a' as u16, 4, 2))];
        assert_eq!(Report::new(&entries).to_string(), "'a' : 4 x 2 bits = 8 bits\n");
    }

    #[test]
    fn test_space_and_tilde_are_printable() {
        let entries = [(b' ' as u16, 1, 3), (b'~' as u16, 2, 3)].map(SymbolCodeLength::from);
        assert_eq!(
            Report::new(&entries).to_string(),
            "' ' : 1 x 3 bits = 3 bits\n'~' : 2 x 3 bits = 6 bits\n"
        );
    }

    #[test]
    fn test_non_printable_symbols_are_octal() {
        let entries = [(b'\n' as u16, 3, 4), (0x7F, 1, 5), (200, 2, 6), (PSEUDO_EOF, 0, 4)]
            .map(SymbolCodeLength::from);
        let expected = "12: 3 x 4 bits = 12 bits\n\
                        177: 1 x 5 bits = 5 bits\n\
                        310: 2 x 6 bits = 12 bits\n\
                        400: 0 x 4 bits = 0 bits\n";
        assert_eq!(Report::new(&entries).to_string(), expected);
    }
}

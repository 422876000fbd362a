use std::io::{self, BufRead, BufReader, Read, Write};

use super::{Branch, HuffmanTree, Symbol, PSEUDO_EOF};
use crate::error::Error;
use crate::Result;

/// Consumer of a finished tree and a fresh scan of the bytes it was built from.
///
/// The tree exposes for every leaf its parent chain and the branch it hangs
/// on, which is all an encoder needs to derive bit patterns. The layout of the
/// produced output belongs to the implementation.
pub trait Encoder {
    fn encode<R: Read>(&mut self, tree: &HuffmanTree, input: R) -> Result<()>;
}

/// Writes the derived code of every symbol as text, one `<symbol> <bits>` line
/// per leaf, followed by the size of the payload the input would encode to
/// including the terminating end-of-file code.
pub struct CodeTableWriter<W: Write> {
    writer: W,
}

impl<W: Write> CodeTableWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn code_string(tree: &HuffmanTree, symbol: Symbol) -> String {
        tree.code_for(symbol)
            .unwrap_or_else(|| panic!("symbol {} has no leaf in the tree", symbol))
            .into_iter()
            .map(Branch::bit)
            .collect()
    }

    /// Returns the number of bytes scanned and the bits they encode to.
    fn payload_bits<R: Read>(codes: &[Option<String>], input: R) -> io::Result<(usize, usize)> {
        let code_length = |symbol: Symbol| {
            codes[symbol as usize]
                .as_ref()
                .map(String::len)
                .unwrap_or_else(|| panic!("symbol {} occurs in input but not in tree", symbol))
        };
        let mut reader = BufReader::new(input);
        let mut bytes = 0;
        let mut bits = code_length(PSEUDO_EOF);
        loop {
            let buffer = reader.fill_buf()?;
            if buffer.is_empty() {
                break;
            }
            bits += buffer
                .iter()
                .map(|&byte| code_length(byte as Symbol))
                .sum::<usize>();
            let consumed = buffer.len();
            bytes += consumed;
            reader.consume(consumed);
        }
        Ok((bytes, bits))
    }
}

impl<W: Write> Encoder for CodeTableWriter<W> {
    fn encode<R: Read>(&mut self, tree: &HuffmanTree, input: R) -> Result<()> {
        let mut codes: Vec<Option<String>> = vec![None; PSEUDO_EOF as usize + 1];
        for (symbol, _) in tree.leaves() {
            let code = Self::code_string(tree, symbol);
            writeln!(self.writer, "{} {}", symbol, code).map_err(Error::FailedToWriteCodeTable)?;
            codes[symbol as usize] = Some(code);
        }
        let (payload_bytes, payload_bits) =
            Self::payload_bits(&codes, input).map_err(Error::FailedToReadInput)?;
        log::debug!("payload of {} bytes encodes to {} bits", payload_bytes, payload_bits);
        writeln!(self.writer, "payload {} bits", payload_bits)
            .map_err(Error::FailedToWriteCodeTable)?;
        self.writer.flush().map_err(Error::FailedToWriteCodeTable)
    }
}

use std::{
    fs::{File, OpenOptions},
    io::{BufWriter, Seek, Write},
    path::{Path, PathBuf},
};

pub use cli::CLIParser;
pub use error::Error;
use huffman::{CodeLengthCalculator, CodeTableWriter, Encoder, FrequencyTable, HuffmanTree};
use report::Report;

mod cli;
mod error;
pub mod huffman;
mod logger;
pub mod priority_queue;
pub mod report;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    input_file: PathBuf,
    output_file: PathBuf,
    print_tree: bool,
}

fn display_path(file_path: &Path) -> String {
    file_path.to_string_lossy().into_owned()
}

fn open_input_file(file_path: &Path) -> Result<File> {
    File::open(file_path)
        .map_err(|e| Error::UnableToOpenInputFileForReading(display_path(file_path), e))
}

fn open_output_file(file_path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(file_path)
        .map_err(|e| Error::UnableToOpenOutputFileForWriting(display_path(file_path), e))
}

/// Builds the Huffman tree over the bytes of the input file, writes the
/// per-symbol report to `report_writer` and the code table to the output file.
pub fn analyze_file<W: Write>(arguments: &Arguments, report_writer: &mut W) -> Result<()> {
    let mut input_file = open_input_file(&arguments.input_file)?;
    let read_error =
        |e: std::io::Error| Error::UnableToReadInputFile(display_path(&arguments.input_file), e);
    let table = FrequencyTable::from_reader(&input_file).map_err(read_error)?;
    log::info!(
        "read {} bytes from '{}'",
        table.total_bytes(),
        display_path(&arguments.input_file)
    );
    let tree = HuffmanTree::new(&table);
    log::info!(
        "built tree of {} leaves with {} merges",
        tree.leaf_count(),
        tree.merge_count()
    );
    log::debug!("huffman tree\n{}", tree);

    let calculator = CodeLengthCalculator::new(&tree);
    let code_lengths = calculator.code_lengths();
    log::info!("payload estimate: {} bits", calculator.total_bits());

    write!(report_writer, "{}", Report::new(&code_lengths))
        .map_err(Error::FailedToWriteReport)?;
    if arguments.print_tree {
        write!(report_writer, "{}", tree).map_err(Error::FailedToWriteReport)?;
    }

    let output_file = open_output_file(&arguments.output_file)?;
    let mut encoder = CodeTableWriter::new(BufWriter::new(output_file));
    input_file.rewind().map_err(read_error)?;
    encoder.encode(&tree, &input_file)?;
    log::info!(
        "code table written to '{}'",
        display_path(&arguments.output_file)
    );
    Ok(())
}

use std::env::args_os;
use std::io::{self, Write};
use std::process::ExitCode;

use huffman_lengths::{analyze_file, CLIParser};

fn main() -> ExitCode {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    let mut stdout = io::stdout().lock();
    let result = analyze_file(&arguments, &mut stdout).and_then(|_| {
        stdout
            .flush()
            .map_err(huffman_lengths::Error::FailedToWriteReport)
    });
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Analysis failed because of: {}", e);
            ExitCode::FAILURE
        }
    }
}

use huffman_lengths::huffman::{
    CodeLengthCalculator, CodeTableWriter, Encoder, FrequencyTable, HuffmanTree,
};
use huffman_lengths::report::Report;
use huffman_lengths::Result;

fn main() -> Result<()> {
    let text = "abracadabra, said the wizard";

    let table = FrequencyTable::from_bytes(text.as_bytes());
    let tree = HuffmanTree::new(&table);
    println!("huffman tree\n{}", tree);

    let calculator = CodeLengthCalculator::new(&tree);
    let code_lengths = calculator.code_lengths();
    println!("code lengths\n{}", Report::new(&code_lengths));
    println!("total {} bits", calculator.total_bits());

    let mut encoder = CodeTableWriter::new(Vec::new());
    encoder.encode(&tree, text.as_bytes())?;
    println!(
        "code table\n{}",
        String::from_utf8_lossy(&encoder.into_inner())
    );
    Ok(())
}

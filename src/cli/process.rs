use std::fs::File;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::export::copy_with_processed_flag;

fn default_output(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("report");
    input.with_file_name(format!("{stem}-processed.csv"))
}

pub fn run(input: &str, output: Option<String>) -> Result<()> {
    let input_path = Path::new(input);
    let output_path = output
        .map(PathBuf::from)
        .unwrap_or_else(|| default_output(input_path));

    let reader = File::open(input_path)?;
    let writer = File::create(&output_path)?;
    let copied = copy_with_processed_flag(reader, writer)?;

    println!("Processed {} rows into {}", copied, output_path.display());
    Ok(())
}

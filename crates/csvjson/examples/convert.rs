//! Example: Convert a CSV file with csvjson and print the JSON.
//!
//! Usage:
//!   cargo run --example convert -- <file_path> [array_prefix] [array_separator]

use std::env;
use std::path::Path;

use csvjson::{to_json_string, Converter, ConverterConfig, FieldValue, JsonFormat};

fn main() -> csvjson::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example convert -- <file_path> [array_prefix] [array_separator]");
        std::process::exit(1);
    }

    let path = Path::new(&args[1]);
    let mut config = ConverterConfig::default();
    if let Some(prefix) = args.get(2) {
        config = config.with_array_prefix(prefix.clone());
    }
    if let Some(separator) = args.get(3) {
        config = config.with_array_separator(separator.clone());
    }

    let result = Converter::with_config(config).convert_file(path)?;

    println!("## {} records", result.len());
    for entry in result.iter() {
        let arrays = entry
            .record
            .values()
            .filter(|v| matches!(v, FieldValue::Array(_)))
            .count();
        println!(
            "  {:20} {:8} fields={:<3} arrays={}",
            entry.key.to_json_key(),
            entry.key.type_name(),
            entry.record.len(),
            arrays
        );
    }
    println!();

    println!("{}", to_json_string(&result, JsonFormat::Pretty)?);

    Ok(())
}

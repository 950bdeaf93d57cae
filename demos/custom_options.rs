//! Tolerant vs strict validation and the nesting limit.
//!
//! Run with: cargo run --example custom_options

use argv_tree::{parse_with_options, ParseOptions, ValidationMode};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let inputs = [
        "{ @name app @name api }",
        "{ :s:orphan @k v }",
        "[ :n:1 ] leftover",
        "[ } ]",
        "{ { @a :n:1 }",
    ];

    for mode in [ValidationMode::Tolerant, ValidationMode::Strict] {
        let options = ParseOptions::new().with_mode(mode);
        println!("=== {} ===", mode.as_str());
        for input in inputs {
            match parse_with_options(input, &options) {
                Ok(value) => println!("  {:<28} => {}", input, value),
                Err(err) => println!("  {:<28} => error: {}", input, err),
            }
        }
        println!();
    }

    // Limit nesting for untrusted input
    let options = ParseOptions::new().with_max_depth(2);
    let deep = "[ [ [ :s:too-deep ] ] ]";
    if let Err(err) = parse_with_options(deep, &options) {
        println!("max_depth = 2: {}", err);
    }

    // Options can come from a config file
    let options: ParseOptions = serde_json::from_str(r#"{ "mode": "strict", "max_depth": 16 }"#)?;
    println!("Loaded options: {:?}", options);

    Ok(())
}

//! Reading structured parameters from the command line.
//!
//! Run with: cargo run --example dynamic_values -- { @host localhost @port :n:8080 @features [ auth logging ] }

use argv_tree::{parse, Value};
use std::error::Error;

const FALLBACK: &str =
    "{ @host localhost @port :n:8080 @features [ auth logging metrics ] @debug :b:true }";

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = if args.is_empty() {
        println!("No arguments given, using: {}\n", FALLBACK);
        parse(FALLBACK)?
    } else {
        parse(args)?
    };

    println!("Parsed as tokens: {}", config);
    println!("Parsed as JSON:   {}\n", serde_json::to_string_pretty(&config.to_json())?);

    // Access values dynamically
    if let Some(host) = config.get("host").and_then(Value::as_str) {
        println!("Accessing field 'host': {}", host);
    }

    if let Some(port) = config.get("port").and_then(Value::as_f64) {
        println!("Accessing field 'port': {}", port);
    }

    if let Some(Value::Array(features)) = config.get("features") {
        println!("Accessing field 'features': {} items", features.len());
    }

    // Runtime type checking
    println!("\nType checks:");
    println!("  is_object: {}", config.is_object());
    println!("  is_array:  {}", config.is_array());
    println!("  is_absent: {}", config.is_absent());

    Ok(())
}

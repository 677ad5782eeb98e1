//! `bigjson` CLI — validate and compact JSON from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Validate (stdin → "OK", or a syntax error with byte offset on stderr)
//! echo '{"id":12345678901234567890}' | bigjson check
//!
//! # Compact: strip whitespace, emit oversized integers as digit strings
//! echo '{ "id": 12345678901234567890 }' | bigjson compact
//! # => {"id":"12345678901234567890"}
//!
//! # File to file
//! bigjson compact -i data.json -o compact.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "bigjson",
    version,
    about = "JSON validator and compactor with exact big integers"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse the input and report whether it is valid JSON
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Re-emit the input compactly, oversized integers as digit strings
    Compact {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { input } => {
            let text = read_input(input.as_deref())?;
            bigjson_core::parse(&text).context("invalid JSON")?;
            println!("OK");
        }
        Commands::Compact { input, output } => {
            let text = read_input(input.as_deref())?;
            let value = bigjson_core::parse(&text).context("invalid JSON")?;
            let compact =
                bigjson_core::stringify(&value).context("input has no JSON representation")?;
            write_output(output.as_deref(), &compact)?;
        }
    }

    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Rank running backs by a weighted composite of season statistics",
    long_about = None
)]
pub struct Cli {
    /// Input table with a header row (`-` reads stdin)
    #[arg(short = 'i', long = "input", default_value = "stats.csv")]
    pub input: PathBuf,
    /// YAML ranking configuration (built-in weights when omitted)
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,
    /// CSV delimiter character (supports ',', 'tab', ';', '|')
    #[arg(long, value_parser = parse_delimiter)]
    pub delimiter: Option<u8>,
    /// Character encoding of the input file (defaults to utf-8)
    #[arg(long = "input-encoding")]
    pub input_encoding: Option<String>,
    /// Cell text treated as a missing value (overrides the configuration)
    #[arg(long = "missing-token")]
    pub missing_token: Option<String>,
    /// Print the normalized weight table before the ranking
    #[arg(long = "show-weights")]
    pub show_weights: bool,
    /// Write the effective configuration as YAML to this path and exit
    #[arg(long = "write-config")]
    pub write_config: Option<PathBuf>,
}

pub fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value {
        "tab" | "\t" => Ok(b'\t'),
        "comma" | "," => Ok(b','),
        "|" | "pipe" => Ok(b'|'),
        ";" | "semicolon" => Ok(b';'),
        other => {
            let mut chars = other.chars();
            let first = chars
                .next()
                .ok_or_else(|| "Delimiter cannot be empty".to_string())?;
            if chars.next().is_some() {
                return Err("Delimiter must be a single character".to_string());
            }
            if !first.is_ascii() {
                return Err("Delimiter must be ASCII".to_string());
            }
            Ok(first as u8)
        }
    }
}

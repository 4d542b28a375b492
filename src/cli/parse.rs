//! Value parsers for CLI arguments

use skyroute_core::format::OutputFormat;

/// Parse `--format` through the core `FromStr` so the error text stays in one place
pub fn parse_output_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

use pathfinder_core::error::{PathfinderError, Result};
use pathfinder_core::format::OutputFormat;

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse an edge weight. Range checks happen in the store; this only
/// turns non-numeric text into an invalid-input error.
pub fn parse_weight(s: &str) -> Result<f64> {
    s.trim()
        .parse::<f64>()
        .map_err(|_| PathfinderError::invalid(format!("weight '{}' is not a number", s)))
}

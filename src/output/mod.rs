//! Output formatting module
//!
//! Provides the two output formats:
//! - Console status lines with colors
//! - JSON run report

pub mod json;
pub mod terminal;

pub use json::{print_json, to_json_output, JsonOutput};
pub use terminal::{print_error, ConsoleReporter};

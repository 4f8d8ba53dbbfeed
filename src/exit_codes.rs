//! Exit code constants for the yaml2env CLI.
//!
//! - 0: Success
//! - 1: An input file could not be read, or stdout could not be written
//! - 2: Invalid command-line usage (reported by clap)
//! - 3: An input file is not valid YAML
//! - 4: An input document does not have the shape of a configuration file

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// I/O failure: missing or unreadable input, invalid UTF-8, or a failed write to stdout.
pub const IO_FAILURE: i32 = 1;

/// Usage error: unknown flag or malformed arguments.
pub const USAGE_ERROR: i32 = 2;

/// Parse failure: the YAML parser rejected the document.
pub const PARSE_FAILURE: i32 = 3;

/// Structural failure: root is not a mapping, or a list mixes objects and scalars.
pub const STRUCTURE_FAILURE: i32 = 4;

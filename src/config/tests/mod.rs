//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Layer composition and command-line loading utilities
//! - `precedence`: Layer precedence tests
//! - `cli_flags`: Command-line flag parsing
//! - `operation_mode`: Operation mode determination tests
//! - `field_resolution`: Token source, timestamp, and author list resolution

mod helpers;

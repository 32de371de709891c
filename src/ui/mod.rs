//! UI utilities for terminal output
//!
//! Progress reporting goes to stderr so the rendered tree on stdout stays clean.

mod spinner;

pub use spinner::{create_spinner, finish_spinner};

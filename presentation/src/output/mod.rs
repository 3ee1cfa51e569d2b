//! Console output for non-interactive commands

pub mod console;

//! Clark CLI library.
//!
//! - `cli` - argument parsing and command dispatch
//! - `ansi` - writing rendered lines to a terminal as ANSI

pub mod ansi;
pub mod cli;

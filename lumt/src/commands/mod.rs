//! Command modules for the lumt CLI.
//!
//! Each subcommand lives in its own file and implements [`traits::Command`].

pub mod common;
pub mod traits;

pub mod export;
pub mod lex;

pub use export::{run_export, ExportArgs};
pub use lex::{run_lex, LexArgs};

//! Command Line Interface (CLI) layer.
//!
//! This module defines argument parsing (`args`), argument errors (`errors`),
//! and the orchestration entry (`runner`) that wires user options into
//! `alos_mosaic::api::prepare_year`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;

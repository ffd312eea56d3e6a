//! Command-line interface module
//!
//! This module contains the implementations for the CLI subcommands.

pub mod render;

//! Tablefix - guard table dataSource assignments in React projects
//!
//! Tablefix scans front-end pages for table components bound through
//! `dataSource={Var}` whose setter receives an unchecked API response field,
//! e.g. `setVar(response.data.list)`, and rewrites those calls to
//! `setVar(Array.isArray(response.data.list) ? response.data.list : [])`.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, commands, report)
//! - `config`: Configuration file loading and parsing
//! - `core`: Pattern registry, scanner, analyzer, fixer and driver
//! - `issues`: Issue and change records

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;

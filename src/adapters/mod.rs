//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `command` - External solver executable behind the `Solver` port

pub mod command;

pub use command::CommandSolver;

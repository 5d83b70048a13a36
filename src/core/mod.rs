//! Core domain logic for cubesolve
//!
//! This module contains pure logic with no I/O dependencies.
//! The external solver is abstracted through a port trait.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Face, CubeString, MoveSequence, SolveOutcome)
//! - `services/` - Validation and solve orchestration
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;

//! Core types and definitions for the GRIDFIRE simulation.
//!
//! This crate defines the vocabulary shared between the simulation crate
//! and any host: configuration, input, snapshot views, colors, errors,
//! and constants. It has no dependency on any runtime framework.

pub mod config;
pub mod constants;
pub mod error;
pub mod input;
pub mod snapshot;
pub mod types;

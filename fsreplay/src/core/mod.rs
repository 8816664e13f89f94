//! Deterministic, pure transcript logic.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! lines, commands and trees and return deterministic outputs suitable for
//! tests.

pub mod builder;
pub mod command;
pub mod entry;
pub mod error;
pub mod invariants;
pub mod parser;
pub mod query;
pub mod render;
pub mod tree;

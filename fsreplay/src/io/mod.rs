//! I/O helpers for fsreplay commands.

pub mod config;
pub mod transcript;

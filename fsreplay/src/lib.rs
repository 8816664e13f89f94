//! Rebuilds a directory tree from a `cd`/`ls` terminal transcript and answers
//! aggregate-size queries over it.
//!
//! The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (parsing, replay, size queries).
//!   No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (transcript files, config).
//!
//! Orchestration modules ([`replay`], [`report`], [`check`]) coordinate core
//! logic with I/O to implement CLI commands.

pub mod check;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod replay;
pub mod report;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

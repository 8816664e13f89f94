//! Stable exit codes for fsreplay commands.

use crate::core::error::TranscriptError;

/// Command succeeded.
pub const OK: i32 = 0;
/// I/O, config or usage failure.
pub const INVALID: i32 = 1;
/// Transcript could not be parsed or replayed.
pub const MALFORMED: i32 = 2;
/// Transcript replayed but a query or invariant could not be satisfied.
pub const UNSATISFIED: i32 = 3;

/// Map an error chain to its exit code.
pub fn for_error(err: &anyhow::Error) -> i32 {
    match err
        .chain()
        .find_map(|cause| cause.downcast_ref::<TranscriptError>())
    {
        Some(typed) if typed.is_malformed_transcript() => MALFORMED,
        Some(_) => UNSATISFIED,
        None => INVALID,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn typed_errors_map_through_context() {
        let err = Err::<(), _>(TranscriptError::NoParentDirectory { command: 2 })
            .context("replay transcript")
            .expect_err("error");
        assert_eq!(for_error(&err), MALFORMED);

        let err = anyhow::Error::new(TranscriptError::NoDirectoryLargeEnough { needed: 1 });
        assert_eq!(for_error(&err), UNSATISFIED);

        assert_eq!(for_error(&anyhow::anyhow!("read failed")), INVALID);
    }
}

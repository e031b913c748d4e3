use crate::error::ToolUtilError;

/// Exit code used when no better status can be recovered.
pub const DEFAULT_EXIT_CODE: i32 = 1;

/// Extracts the exit code of a failed child process.
///
/// Returns the child's numeric status when `err` is a
/// [`ToolUtilError::Process`] whose status carries a code. Anything else,
/// including no error at all or a Unix child killed by a signal, yields
/// [`DEFAULT_EXIT_CODE`].
pub fn exit_code(err: Option<&ToolUtilError>) -> i32 {
    match err {
        Some(ToolUtilError::Process { status, .. }) => status.code().unwrap_or(DEFAULT_EXIT_CODE),
        _ => DEFAULT_EXIT_CODE,
    }
}

/// Like [`exit_code`], but searches the whole cause chain of an `anyhow` error.
pub fn exit_code_of(err: &anyhow::Error) -> i32 {
    let process_err = err
        .chain()
        .filter_map(|cause| cause.downcast_ref::<ToolUtilError>())
        .find(|e| matches!(e, ToolUtilError::Process { .. }));
    exit_code(process_err)
}

//! Run-to-completion adapter backing the blocking API variants.

use std::future::Future;

use tokio::runtime;

use crate::error::{Error, Result};

/// Drive a future to completion on a throwaway current-thread runtime.
///
/// Calling this from inside an async context would block the executor
/// thread, so it fails with [`Error::Reentrancy`] instead of
/// deadlocking.
pub(crate) fn run<F>(future: F) -> Result<F::Output>
where
    F: Future,
{
    if runtime::Handle::try_current().is_ok() {
        return Err(Error::Reentrancy);
    }

    let rt = runtime::Builder::new_current_thread().enable_all().build()?;
    Ok(rt.block_on(future))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_future_to_completion() {
        let value = run(async { 21 * 2 }).unwrap();
        assert_eq!(value, 42);
    }

    #[tokio::test]
    async fn test_rejects_call_inside_runtime() {
        let result = run(async { 0 });
        assert!(matches!(result, Err(Error::Reentrancy)));
    }
}

//! Tokio Runtime Bridge
//!
//! GPUI runs its own executor, but async submit endpoints are written
//! against tokio (timers, HTTP clients). This module runs tokio futures
//! from GPUI tasks.
//!
//! ## Pattern
//!
//! ```text
//! GPUI async task
//!       │
//!       ▼
//! run_in_tokio(async { ... })
//!       │
//!       ▼
//! tokio::Runtime::spawn()
//!       │
//!       ▼
//! Result returned to GPUI
//! ```

use std::future::Future;
use std::sync::LazyLock;

use tokio::runtime::{Builder, Runtime};

use crate::error::{Error, Result};

/// Global tokio runtime instance, built on first use
static TOKIO_RUNTIME: LazyLock<std::io::Result<Runtime>> = LazyLock::new(|| {
    Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("mono-ui-tokio")
        .enable_all()
        .build()
});

fn runtime() -> Result<&'static Runtime> {
    TOKIO_RUNTIME.as_ref().map_err(|e| Error::Runtime {
        message: format!("failed to start tokio runtime: {e}"),
    })
}

/// Execute a future in the tokio runtime and wait for the result
///
/// # Example
///
/// ```ignore
/// let joined = run_in_tokio(async move {
///     client.post(url).json(&body).send().await
/// }).await?;
/// ```
pub async fn run_in_tokio<F, T>(future: F) -> Result<T>
where
    F: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    let handle = runtime()?.spawn(future);
    match handle.await {
        Ok(result) => Ok(result),
        Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
        Err(e) => Err(Error::Runtime {
            message: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_in_tokio_from_foreign_executor() {
        let value = futures::executor::block_on(run_in_tokio(async {
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
            42
        }))
        .expect("runtime");
        assert_eq!(value, 42);
    }
}

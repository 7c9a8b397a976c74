//! Demo Waitlist Endpoint
//!
//! Stands in for a real sign-up API on the waitlist page: waits for a
//! simulated network delay on the tokio runtime, then accepts anything that
//! looks like an email address.

use std::time::Duration;

use futures::future::{FutureExt, LocalBoxFuture};

use crate::components::feedback::SubmitFn;
use crate::constants::DEMO_SUBMIT_LATENCY_MS;
use crate::error::{Error, Result};
use crate::services::run_in_tokio;

/// Minimal shape check; the form already trims input
pub fn validate_email(email: &str) -> Result<()> {
    let (local, domain) = email.split_once('@').unwrap_or(("", ""));
    let valid = !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.');

    if !valid {
        return Err(Error::Invalid {
            message: format!("\"{email}\" is not an email address"),
        });
    }
    Ok(())
}

/// Join the demo waitlist after `latency`
pub async fn join_waitlist(email: String, latency: Duration) -> Result<()> {
    run_in_tokio(async move {
        tokio::time::sleep(latency).await;
        validate_email(&email)?;
        tracing::info!(email = %email, "Demo waitlist accepted");
        Ok::<(), Error>(())
    })
    .await?
}

/// Submit function for the gallery's waitlist form
pub fn demo_submit() -> SubmitFn {
    std::rc::Rc::new(|email: String| -> LocalBoxFuture<'static, anyhow::Result<()>> {
        async move {
            join_waitlist(email, Duration::from_millis(DEMO_SUBMIT_LATENCY_MS)).await?;
            Ok(())
        }
        .boxed_local()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("ada@example.com").is_ok());
        assert!(validate_email("ada").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("ada@localhost").is_err());
        assert!(validate_email("ada@example.").is_err());
    }

    #[test]
    fn test_join_waitlist_accepts_valid_email() {
        let joined = block_on(join_waitlist("ada@example.com".to_string(), Duration::ZERO));
        assert!(joined.is_ok());
    }

    #[test]
    fn test_join_waitlist_rejects_invalid_email() {
        let err = block_on(join_waitlist("nope".to_string(), Duration::ZERO))
            .expect_err("invalid email");
        assert!(err.to_string().contains("not an email address"));
    }
}

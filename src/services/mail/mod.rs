pub mod mailgun;

use async_trait::async_trait;

/// Outbound email transport. Implementations own delivery; callers decide
/// what a failure means (the booking workflow treats it as best-effort).
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(
        &self,
        subject: &str,
        body: &str,
        from: &str,
        recipients: &[String],
    ) -> anyhow::Result<()>;
}

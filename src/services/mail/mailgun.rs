use anyhow::Context;
use async_trait::async_trait;

use super::Mailer;

pub struct MailgunMailer {
    domain: String,
    api_key: String,
    client: reqwest::Client,
}

impl MailgunMailer {
    pub fn new(domain: String, api_key: String) -> Self {
        Self {
            domain,
            api_key,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Mailer for MailgunMailer {
    async fn send(
        &self,
        subject: &str,
        body: &str,
        from: &str,
        recipients: &[String],
    ) -> anyhow::Result<()> {
        anyhow::ensure!(!recipients.is_empty(), "no recipients");

        let url = format!("https://api.mailgun.net/v3/{}/messages", self.domain);
        let to = recipients.join(", ");

        self.client
            .post(&url)
            .basic_auth("api", Some(&self.api_key))
            .form(&[
                ("from", from),
                ("to", to.as_str()),
                ("subject", subject),
                ("text", body),
            ])
            .send()
            .await
            .context("failed to reach Mailgun")?
            .error_for_status()
            .context("Mailgun API returned error")?;

        Ok(())
    }
}

//! Mailer that only logs, used when no SMTP relay is configured.

use async_trait::async_trait;

use quill_core::ports::{MailError, Mailer, OutgoingMail};
use quill_core::service::mask_email;

#[derive(Debug, Default)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, mail: OutgoingMail) -> Result<(), MailError> {
        tracing::info!(
            to = %mask_email(&mail.to),
            subject = %mail.subject,
            attachment = mail.attachment.as_ref().map(|a| a.file_name.as_str()),
            "Mail not sent, no SMTP relay configured"
        );
        Ok(())
    }
}

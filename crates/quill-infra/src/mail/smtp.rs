//! SMTP delivery via `lettre`.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use quill_core::ports::{MailError, Mailer, OutgoingMail};
use quill_core::service::mask_email;

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub from_address: String,
    pub user: Option<String>,
    pub password: Option<String>,
}

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
}

impl SmtpMailer {
    pub fn new(config: SmtpConfig) -> Result<Self, MailError> {
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| MailError::Transport(e.to_string()))?
            .port(config.port);

        if let (Some(user), Some(pass)) = (config.user, config.password) {
            builder = builder.credentials(Credentials::new(user, pass));
        }

        Ok(Self {
            transport: builder.build(),
            from_address: config.from_address,
        })
    }
}

fn build_message(from: &str, mail: OutgoingMail) -> Result<Message, MailError> {
    let from = from
        .parse::<Mailbox>()
        .map_err(|e| MailError::Address(e.to_string()))?;
    let to = mail
        .to
        .parse::<Mailbox>()
        .map_err(|e| MailError::Address(e.to_string()))?;

    let mut body = match mail.html {
        Some(html) => MultiPart::mixed().multipart(MultiPart::alternative_plain_html(mail.text, html)),
        None => MultiPart::mixed().singlepart(SinglePart::plain(mail.text)),
    };

    if let Some(attachment) = mail.attachment {
        let content_type = ContentType::parse(&attachment.content_type)
            .map_err(|e| MailError::Build(e.to_string()))?;
        body = body.singlepart(
            Attachment::new(attachment.file_name).body(attachment.bytes, content_type),
        );
    }

    Message::builder()
        .from(from)
        .to(to)
        .subject(mail.subject)
        .multipart(body)
        .map_err(|e| MailError::Build(e.to_string()))
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, mail: OutgoingMail) -> Result<(), MailError> {
        let to = mask_email(&mail.to);
        let subject = mail.subject.clone();
        let message = build_message(&self.from_address, mail)?;

        self.transport
            .send(message)
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;

        tracing::info!(to = %to, subject = %subject, "Mail sent");
        Ok(())
    }
}

use chrono::Utc;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use mindtrx::assessment::{DeliveryError, DeliveryReceipt, OutboundEmail, ReportMailer};
use mindtrx::config::{ConfigError, SmtpConfig};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{info, warn};

/// Sends result emails through an SMTP relay.
pub(crate) struct SmtpMailer {
    transport: SmtpTransport,
    sequence: AtomicU64,
}

impl SmtpMailer {
    pub(crate) fn from_config(config: &SmtpConfig) -> Result<Self, ConfigError> {
        let builder = if config.implicit_tls() {
            SmtpTransport::relay(&config.host)
        } else {
            SmtpTransport::starttls_relay(&config.host)
        }
        .map_err(|err| ConfigError::InvalidSmtpRelay {
            host: config.host.clone(),
            reason: err.to_string(),
        })?;

        let mut builder = builder.port(config.port);
        if let Some(credentials) = &config.credentials {
            builder = builder.credentials(Credentials::new(
                credentials.username.clone(),
                credentials.password.clone(),
            ));
        }

        Ok(Self::with_transport(builder.build()))
    }

    pub(crate) fn with_transport(transport: SmtpTransport) -> Self {
        Self {
            transport,
            sequence: AtomicU64::new(0),
        }
    }

    fn next_message_id(&self, sender: &Mailbox) -> String {
        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        format!(
            "<{}.{sequence}@{}>",
            Utc::now().format("%Y%m%d%H%M%S%3f"),
            sender.email.domain()
        )
    }
}

impl ReportMailer for SmtpMailer {
    fn send(&self, email: OutboundEmail) -> Result<DeliveryReceipt, DeliveryError> {
        let to = email.to.parse::<Mailbox>().map_err(|err| {
            DeliveryError::InvalidRecipient(format!("'{}' is not a valid mailbox: {err}", email.to))
        })?;
        let from = email.from.parse::<Mailbox>().map_err(|err| {
            DeliveryError::Transport(format!("sender '{}' is not a valid mailbox: {err}", email.from))
        })?;
        let content_type = ContentType::parse(&email.content_type).map_err(|err| {
            DeliveryError::Transport(format!("content type '{}': {err}", email.content_type))
        })?;
        let message_id = self.next_message_id(&from);

        let message = Message::builder()
            .message_id(Some(message_id.clone()))
            .from(from)
            .to(to)
            .subject(email.subject)
            .header(content_type)
            .body(email.html)
            .map_err(|err| DeliveryError::Transport(err.to_string()))?;

        let response = self.transport.send(&message).map_err(|err| {
            warn!(error = %err, "smtp relay rejected results email");
            DeliveryError::Transport(err.to_string())
        })?;

        info!(%message_id, code = %response.code(), "smtp relay accepted results email");
        Ok(DeliveryReceipt { message_id })
    }
}

/// Mailer wired into the server: SMTP when a relay is configured, otherwise
/// every send reports that delivery is unavailable.
pub(crate) enum ResultMailer {
    Smtp(SmtpMailer),
    Disabled,
}

impl ResultMailer {
    pub(crate) fn from_config(config: Option<&SmtpConfig>) -> Result<Self, ConfigError> {
        match config {
            Some(smtp) => Ok(Self::Smtp(SmtpMailer::from_config(smtp)?)),
            None => Ok(Self::Disabled),
        }
    }
}

impl ReportMailer for ResultMailer {
    fn send(&self, email: OutboundEmail) -> Result<DeliveryReceipt, DeliveryError> {
        match self {
            Self::Smtp(mailer) => mailer.send(email),
            Self::Disabled => Err(DeliveryError::NotConfigured),
        }
    }
}

use crate::config::EmailConfig;
use crate::types::{JobRecord, Result};
use chrono::Utc;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use tracing::info;

/// Emails the operator a digest of newly observed postings.
pub struct Notifier {
    config: EmailConfig,
}

/// Plain-text digest for a set of new postings: a subject carrying the count
/// and run date, and one block per posting.
pub fn build_digest(new_ones: &[JobRecord]) -> (String, String) {
    let subject = format!(
        "{} new job posting{} ({})",
        new_ones.len(),
        if new_ones.len() == 1 { "" } else { "s" },
        Utc::now().format("%Y-%m-%d")
    );

    let mut body = String::from("New postings since the last run:\n");
    for record in new_ones {
        body.push_str(&format!(
            "\n{role} at {company}\n  Location: {location}\n  Posted: {date}\n  {link}\n",
            role = record.role,
            company = record.company,
            location = record.location,
            date = record.date_posted,
            link = record.link,
        ));
    }

    (subject, body)
}

impl Notifier {
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    /// Sends the digest for `new_ones`. A no-op making zero transport calls
    /// when the list is empty. Transport failure propagates and fails the
    /// run; there is no retry.
    pub async fn notify(&self, new_ones: &[JobRecord]) -> Result<()> {
        if new_ones.is_empty() {
            return Ok(());
        }

        let (subject, body) = build_digest(new_ones);
        let message = Message::builder()
            .from(self.config.sender.parse()?)
            .to(self.config.recipient.parse()?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body)?;

        let credentials =
            Credentials::new(self.config.sender.clone(), self.config.password.clone());
        let host = self.config.smtp_host.clone();
        let port = self.config.smtp_port;

        // lettre's SmtpTransport is blocking; keep it off the runtime threads.
        tokio::task::spawn_blocking(move || {
            let mailer = SmtpTransport::relay(&host)?
                .port(port)
                .credentials(credentials)
                .build();
            mailer.send(&message)
        })
        .await??;

        info!(
            "Sent digest of {} new postings to {}",
            new_ones.len(),
            self.config.recipient
        );
        Ok(())
    }
}

// src/application/commands/submissions/contact.rs
use super::{
    SubmissionCommandService,
    rate_limit::{CONTACT_POLICY, enforce},
};
use crate::{
    application::{
        dto::ContactReceiptDto, error::ApplicationResult, ports::notification::Notification,
    },
    domain::{
        contact::NewContactMessage,
        value_objects::{EmailAddress, bounded_text, optional_text},
    },
};

pub struct SubmitContactCommand {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

impl SubmissionCommandService {
    pub async fn submit_contact(
        &self,
        client_key: &str,
        command: SubmitContactCommand,
    ) -> ApplicationResult<ContactReceiptDto> {
        enforce(self.rate_limiter.as_ref(), &CONTACT_POLICY, client_key)?;

        let new_message = NewContactMessage {
            name: bounded_text("name", command.name, 1, 100)?,
            email: EmailAddress::new(command.email)?,
            subject: optional_text("subject", command.subject, 200)?,
            message: bounded_text("message", command.message, 10, 5000)?,
            received_at: self.clock.now(),
        };

        let stored = self.contact_repo.insert(new_message).await?;
        tracing::info!(message_id = stored.id.0, "contact message received");

        let subject = match &stored.subject {
            Some(subject) => format!("Contact: {subject}"),
            None => format!("Contact message from {}", stored.name),
        };
        self.notify_best_effort(Notification {
            subject,
            body: format!(
                "From: {} <{}>\n\n{}",
                stored.name, stored.email, stored.message
            ),
            reply_to: Some(stored.email.as_str().to_string()),
        })
        .await;

        Ok(ContactReceiptDto::from(&stored))
    }
}

use chrono::{DateTime, Local};
use uuid::Uuid;

pub const EMAIL_PLACEHOLDER: &str = "(Not provided)";
pub const MESSAGE_PLACEHOLDER: &str = "(No message)";

/// A submitted contact record. Blank fields carry the literal placeholder
/// text rather than failing.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub id: Uuid,
    pub email: String,
    pub message: String,
    pub submitted_at: DateTime<Local>,
}

/// Observability channel receiving one record per submission. The form
/// never sends anything over the network; delivery is purely local.
pub trait ContactSink {
    fn deliver(&mut self, submission: &Submission);
}

/// Production sink: emits the formatted record through the `log` facade,
/// picked up by the tracing subscriber.
#[derive(Default)]
pub struct LogSink;

impl ContactSink for LogSink {
    fn deliver(&mut self, submission: &Submission) {
        log::info!(
            "new form submission [{}] at {}: email={} message={}",
            submission.id,
            submission.submitted_at.format("%Y-%m-%d %H:%M:%S"),
            submission.email,
            submission.message
        );
    }
}

/// The two text fields of the contact form, bound to the UI's text edits.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.email.trim().is_empty() && self.message.trim().is_empty()
    }

    /// Build the record (placeholders for blank fields), deliver it to the
    /// sink, clear the form, and return the record for the acknowledgment.
    pub fn submit(&mut self, sink: &mut dyn ContactSink) -> Submission {
        let email = match self.email.trim() {
            "" => EMAIL_PLACEHOLDER.to_string(),
            trimmed => trimmed.to_string(),
        };
        let message = match self.message.trim() {
            "" => MESSAGE_PLACEHOLDER.to_string(),
            trimmed => trimmed.to_string(),
        };

        let submission = Submission {
            id: Uuid::new_v4(),
            email,
            message,
            submitted_at: Local::now(),
        };
        sink.deliver(&submission);

        self.email.clear();
        self.message.clear();

        submission
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        delivered: Vec<Submission>,
    }

    impl ContactSink for RecordingSink {
        fn deliver(&mut self, submission: &Submission) {
            self.delivered.push(submission.clone());
        }
    }

    #[test]
    fn test_empty_fields_yield_placeholders() {
        let mut form = ContactForm::new();
        let mut sink = RecordingSink::default();
        let submission = form.submit(&mut sink);
        assert_eq!(submission.email, EMAIL_PLACEHOLDER);
        assert_eq!(submission.message, MESSAGE_PLACEHOLDER);
    }

    #[test]
    fn test_whitespace_only_fields_yield_placeholders() {
        let mut form = ContactForm {
            email: "   ".to_string(),
            message: "\n\t ".to_string(),
        };
        let mut sink = RecordingSink::default();
        let submission = form.submit(&mut sink);
        assert_eq!(submission.email, EMAIL_PLACEHOLDER);
        assert_eq!(submission.message, MESSAGE_PLACEHOLDER);
    }

    #[test]
    fn test_fields_are_trimmed() {
        let mut form = ContactForm {
            email: "  qi@example.com  ".to_string(),
            message: " Hello there. \n".to_string(),
        };
        let mut sink = RecordingSink::default();
        let submission = form.submit(&mut sink);
        assert_eq!(submission.email, "qi@example.com");
        assert_eq!(submission.message, "Hello there.");
    }

    #[test]
    fn test_submit_clears_the_form() {
        let mut form = ContactForm {
            email: "qi@example.com".to_string(),
            message: "Hello".to_string(),
        };
        let mut sink = RecordingSink::default();
        form.submit(&mut sink);
        assert!(form.email.is_empty());
        assert!(form.message.is_empty());
        assert!(form.is_empty());
    }

    #[test]
    fn test_each_submission_reaches_the_sink() {
        let mut form = ContactForm::new();
        let mut sink = RecordingSink::default();

        form.email = "a@example.com".to_string();
        form.submit(&mut sink);
        form.message = "second".to_string();
        form.submit(&mut sink);

        assert_eq!(sink.delivered.len(), 2);
        assert_eq!(sink.delivered[0].email, "a@example.com");
        assert_eq!(sink.delivered[0].message, MESSAGE_PLACEHOLDER);
        assert_eq!(sink.delivered[1].email, EMAIL_PLACEHOLDER);
        assert_eq!(sink.delivered[1].message, "second");
        assert_ne!(sink.delivered[0].id, sink.delivered[1].id);
    }
}

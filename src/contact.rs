use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContactError {
    #[error("Please tell me your name.")]
    MissingName,
    #[error("'{0}' doesn't look like an email address.")]
    InvalidEmail(String),
    #[error("The message is empty.")]
    MissingMessage,
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingName);
        }
        let email = self.email.trim();
        let valid_email = match email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && !domain.contains('@')
                    && domain.contains('.')
                    && !domain.starts_with('.')
                    && !domain.ends_with('.')
            }
            None => false,
        };
        if !valid_email {
            return Err(ContactError::InvalidEmail(email.to_string()));
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingMessage);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient banner shown under the form after a submission resolves.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "success-message",
            NoticeKind::Error => "error-message",
        }
    }
}

impl From<Result<(), ContactError>> for Notice {
    fn from(res: Result<(), ContactError>) -> Self {
        match res {
            Ok(()) => Notice {
                kind: NoticeKind::Success,
                text: "Message sent successfully!".to_string(),
            },
            Err(e) => Notice {
                kind: NoticeKind::Error,
                text: format!("Error sending message. {e}"),
            },
        }
    }
}

/// Simulated contact form submission.
///
/// Nothing leaves the browser: a submission is "in flight" for a fixed delay
/// and then resolves by validating the message. The submit button is
/// disabled for exactly that window.
#[derive(Debug, Clone)]
pub struct Submission {
    delay: Duration,
    sending: bool,
}

impl Submission {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            sending: false,
        }
    }

    /// How long a submission stays in flight before it resolves.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    /// Start sending. Returns false if a submission is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.sending {
            return false;
        }
        self.sending = true;
        true
    }

    /// Resolve the in-flight submission. Re-enables the form whatever the outcome.
    pub fn complete(&mut self, message: &ContactMessage) -> Option<Notice> {
        if !std::mem::take(&mut self.sending) {
            return None;
        }
        let res = message.validate();
        match &res {
            Ok(()) => log::info!("contact message from {} accepted", message.email),
            Err(e) => log::warn!("contact form submission failed: {e}"),
        }
        Some(res.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: String::new(),
            message: "Hello!".to_string(),
        }
    }

    #[test]
    fn test_validate() {
        assert_eq!(message().validate(), Ok(()));

        let mut m = message();
        m.name = "  ".to_string();
        assert_eq!(m.validate(), Err(ContactError::MissingName));

        for bad in ["", "ada", "@example.com", "ada@example", "ada@@example.com", "ada@.com"] {
            let mut m = message();
            m.email = bad.to_string();
            assert_eq!(m.validate(), Err(ContactError::InvalidEmail(bad.to_string())));
        }

        let mut m = message();
        m.message = "\n".to_string();
        assert_eq!(m.validate(), Err(ContactError::MissingMessage));
    }

    #[test]
    fn test_disabled_for_delay_on_success() {
        let mut sub = Submission::new(Duration::from_millis(1500));
        assert_eq!(sub.delay(), Duration::from_millis(1500));
        assert!(sub.begin());
        assert!(sub.is_sending());
        // double submit while in flight is rejected
        assert!(!sub.begin());

        let notice = sub.complete(&message()).expect("should resolve");
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.class(), "success-message");
        assert!(!sub.is_sending());
    }

    #[test]
    fn test_disabled_for_delay_on_failure() {
        let mut sub = Submission::new(Duration::from_millis(1500));
        assert!(sub.begin());

        let mut m = message();
        m.email = "nope".to_string();
        let notice = sub.complete(&m).expect("should resolve");
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.class(), "error-message");
        assert!(notice.text.contains("nope"));
        assert!(!sub.is_sending());

        // can submit again afterwards
        assert!(sub.begin());
    }

    #[test]
    fn test_delay_follows_config() {
        let config = crate::config::SiteConfig::default();
        let sub = Submission::new(Duration::from_millis(config.submit_delay));
        assert_eq!(sub.delay(), Duration::from_millis(1500));
    }

    #[test]
    fn test_complete_without_begin() {
        let mut sub = Submission::new(Duration::from_millis(1500));
        assert_eq!(sub.complete(&message()), None);
    }
}

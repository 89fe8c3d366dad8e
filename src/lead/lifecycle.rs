/// Where a contact form is in its single submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionLifecycle {
    #[default]
    Idle,
    Sending,
    Succeeded,
    /// Carries the user-facing message, never the transport error.
    Failed(String),
}

impl SubmissionLifecycle {
    pub fn is_sending(&self) -> bool {
        matches!(self, SubmissionLifecycle::Sending)
    }

    pub fn is_succeeded(&self) -> bool {
        matches!(self, SubmissionLifecycle::Succeeded)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmissionLifecycle::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    /// Only an idle or failed form may start sending.
    pub fn can_submit(&self) -> bool {
        matches!(self, SubmissionLifecycle::Idle | SubmissionLifecycle::Failed(_))
    }

    pub fn name(&self) -> &'static str {
        match self {
            SubmissionLifecycle::Idle => "idle",
            SubmissionLifecycle::Sending => "sending",
            SubmissionLifecycle::Succeeded => "succeeded",
            SubmissionLifecycle::Failed(_) => "failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_idle_and_failed_accept_submissions() {
        assert!(SubmissionLifecycle::Idle.can_submit());
        assert!(SubmissionLifecycle::Failed("x".into()).can_submit());
        assert!(!SubmissionLifecycle::Sending.can_submit());
        assert!(!SubmissionLifecycle::Succeeded.can_submit());
    }

    #[test]
    fn error_message_only_when_failed() {
        assert_eq!(SubmissionLifecycle::Failed("oops".into()).error_message(), Some("oops"));
        assert_eq!(SubmissionLifecycle::Sending.error_message(), None);
    }
}

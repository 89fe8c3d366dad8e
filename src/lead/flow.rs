use log::{debug, info, warn};

use super::gateway::{EmailGateway, GatewayError, TemplateParams};
use super::lifecycle::SubmissionLifecycle;
use super::model::{Field, LeadSubmission};
use crate::i18n::Localizer;

pub const ERROR_KEY: &str = "contact.error";

/// Why `begin_submit` did not start a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitBlocked {
    AlreadySending,
    /// Either finished already or awaiting a reset.
    Closed,
    Invalid(Vec<Field>),
}

/// A request `begin_submit` cleared for dispatch. The attempt number comes back
/// with the gateway result so answers to abandoned attempts can be told apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSend {
    pub attempt: u32,
    pub params: TemplateParams,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Blocked(SubmitBlocked),
    Succeeded,
    Failed,
}

/// One contact form's data and the state of its submission.
#[derive(Debug, Clone, PartialEq)]
pub struct LeadFlow {
    submission: LeadSubmission,
    lifecycle: SubmissionLifecycle,
    localizer: Localizer,
    attempt: u32,
}

impl LeadFlow {
    pub fn new(localizer: Localizer) -> Self {
        Self {
            submission: LeadSubmission::default(),
            lifecycle: SubmissionLifecycle::Idle,
            localizer,
            attempt: 0,
        }
    }

    pub fn submission(&self) -> &LeadSubmission {
        &self.submission
    }

    pub fn lifecycle(&self) -> &SubmissionLifecycle {
        &self.lifecycle
    }

    /// Switches language, re-translating a failure message already on screen.
    pub fn set_localizer(&mut self, localizer: Localizer) {
        self.localizer = localizer;
        if let SubmissionLifecycle::Failed(reason) = &mut self.lifecycle {
            *reason = localizer.text(ERROR_KEY);
        }
    }

    /// Inputs are locked while a request is in flight.
    pub fn update_field(&mut self, field: Field, value: String) {
        if self.lifecycle.is_sending() {
            debug!("Ignoring update of {} while sending", field.html_name());
            return;
        }
        self.submission.set(field, value);
    }

    /// Validates the form and moves to `Sending`, handing back the payload to dispatch.
    pub fn begin_submit(&mut self) -> Result<PendingSend, SubmitBlocked> {
        if self.lifecycle.is_sending() {
            debug!("Submit ignored, a request is already in flight");
            return Err(SubmitBlocked::AlreadySending);
        }
        if !self.lifecycle.can_submit() {
            return Err(SubmitBlocked::Closed);
        }

        let project_type = self.submission.check().map_err(|fields| {
            let names: Vec<&str> = fields.iter().map(Field::html_name).collect();
            info!("Lead form invalid: {}", names.join(", "));
            SubmitBlocked::Invalid(fields)
        })?;

        self.attempt = self.attempt.wrapping_add(1);
        self.lifecycle = SubmissionLifecycle::Sending;
        info!("Sending lead #{} ({})", self.attempt, project_type);
        Ok(PendingSend {
            attempt: self.attempt,
            params: TemplateParams::new(&self.submission, project_type),
        })
    }

    /// Applies the gateway's answer to the attempt currently in flight.
    pub fn finish_submit(&mut self, attempt: u32, result: Result<(), GatewayError>) {
        if !self.lifecycle.is_sending() {
            debug!("Dropping gateway result, form is {}", self.lifecycle.name());
            return;
        }
        if attempt != self.attempt {
            debug!("Dropping result of abandoned attempt #{}", attempt);
            return;
        }
        match result {
            Ok(()) => {
                info!("Lead sent");
                self.submission = LeadSubmission::default();
                self.lifecycle = SubmissionLifecycle::Succeeded;
            }
            Err(e) => {
                warn!("Lead could not be sent ({})", e.kind());
                self.lifecycle = SubmissionLifecycle::Failed(self.localizer.text(ERROR_KEY));
            }
        }
    }

    pub async fn submit<G: EmailGateway>(&mut self, gateway: &G) -> SubmitOutcome {
        let pending = match self.begin_submit() {
            Ok(pending) => pending,
            Err(blocked) => return SubmitOutcome::Blocked(blocked),
        };
        let result = gateway.send(&pending.params).await;
        self.finish_submit(pending.attempt, result);
        match self.lifecycle {
            SubmissionLifecycle::Succeeded => SubmitOutcome::Succeeded,
            _ => SubmitOutcome::Failed,
        }
    }

    /// Back to a blank idle form. A request still in flight is abandoned.
    pub fn reset(&mut self) {
        self.submission = LeadSubmission::default();
        self.lifecycle = SubmissionLifecycle::Idle;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::i18n::Locale;
    use crate::lead::model::ProjectType;

    #[derive(Default)]
    struct RecordingGateway {
        fail: bool,
        sent: RefCell<Vec<TemplateParams>>,
    }

    impl RecordingGateway {
        fn failing() -> Self {
            Self { fail: true, ..Default::default() }
        }

        fn count(&self) -> usize {
            self.sent.borrow().len()
        }
    }

    impl EmailGateway for RecordingGateway {
        async fn send(&self, params: &TemplateParams) -> Result<(), GatewayError> {
            self.sent.borrow_mut().push(params.clone());
            if self.fail {
                return Err(GatewayError::Transport("connection refused".into()));
            }
            Ok(())
        }
    }

    fn fill(flow: &mut LeadFlow) {
        flow.update_field(Field::Name, "A".into());
        flow.update_field(Field::Email, "a@b.com".into());
        flow.update_field(Field::Company, "".into());
        flow.update_field(Field::Message, "hi".into());
        flow.update_field(Field::ProjectType, "3D Website".into());
    }

    fn english_flow() -> LeadFlow {
        LeadFlow::new(Localizer::new(Locale::En))
    }

    #[tokio::test]
    async fn valid_submission_sends_once_and_resets() {
        let gateway = RecordingGateway::default();
        let mut flow = english_flow();
        fill(&mut flow);

        assert_eq!(flow.submit(&gateway).await, SubmitOutcome::Succeeded);

        assert_eq!(gateway.count(), 1);
        let sent = gateway.sent.borrow()[0].clone();
        assert_eq!(sent.name, "A");
        assert_eq!(sent.email, "a@b.com");
        assert_eq!(sent.company, "");
        assert_eq!(sent.message, "hi");
        assert_eq!(sent.project_type, ProjectType::ThreeDWebsite);
        assert_eq!(flow.lifecycle(), &SubmissionLifecycle::Succeeded);
        assert_eq!(flow.submission(), &LeadSubmission::default());
        assert_eq!(flow.submission().project_type, "3D Website");
    }

    #[tokio::test]
    async fn failure_keeps_values_and_shows_generic_message() {
        let gateway = RecordingGateway::failing();
        let mut flow = english_flow();
        fill(&mut flow);

        assert_eq!(flow.submit(&gateway).await, SubmitOutcome::Failed);

        assert_eq!(gateway.count(), 1);
        assert_eq!(flow.submission().name, "A");
        assert_eq!(flow.submission().message, "hi");
        let reason = flow.lifecycle().error_message().unwrap();
        assert_eq!(reason, Localizer::new(Locale::En).text(ERROR_KEY));
        assert!(!reason.contains("connection refused"));
    }

    #[tokio::test]
    async fn failed_form_can_be_resubmitted() {
        let mut flow = english_flow();
        fill(&mut flow);
        flow.submit(&RecordingGateway::failing()).await;

        let gateway = RecordingGateway::default();
        assert_eq!(flow.submit(&gateway).await, SubmitOutcome::Succeeded);
        assert_eq!(gateway.count(), 1);
    }

    #[tokio::test]
    async fn submit_while_sending_is_ignored() {
        let gateway = RecordingGateway::default();
        let mut flow = english_flow();
        fill(&mut flow);

        assert!(flow.begin_submit().is_ok());
        assert_eq!(
            flow.submit(&gateway).await,
            SubmitOutcome::Blocked(SubmitBlocked::AlreadySending)
        );
        assert_eq!(gateway.count(), 0);
        assert!(flow.lifecycle().is_sending());
    }

    #[tokio::test]
    async fn missing_required_fields_block_the_request() {
        for field in [Field::Name, Field::Email, Field::Message] {
            let gateway = RecordingGateway::default();
            let mut flow = english_flow();
            fill(&mut flow);
            flow.update_field(field, String::new());

            assert_eq!(
                flow.submit(&gateway).await,
                SubmitOutcome::Blocked(SubmitBlocked::Invalid(vec![field]))
            );
            assert_eq!(gateway.count(), 0);
            assert_eq!(flow.lifecycle(), &SubmissionLifecycle::Idle);
        }
    }

    #[tokio::test]
    async fn malformed_email_blocks_the_request() {
        let gateway = RecordingGateway::default();
        let mut flow = english_flow();
        fill(&mut flow);
        flow.update_field(Field::Email, "not-an-email".into());

        assert_eq!(
            flow.submit(&gateway).await,
            SubmitOutcome::Blocked(SubmitBlocked::Invalid(vec![Field::Email]))
        );
        assert_eq!(gateway.count(), 0);
    }

    #[tokio::test]
    async fn succeeded_form_accepts_nothing_until_reset() {
        let gateway = RecordingGateway::default();
        let mut flow = english_flow();
        fill(&mut flow);
        flow.submit(&gateway).await;

        fill(&mut flow);
        assert_eq!(flow.submit(&gateway).await, SubmitOutcome::Blocked(SubmitBlocked::Closed));
        assert_eq!(gateway.count(), 1);

        flow.reset();
        fill(&mut flow);
        assert_eq!(flow.submit(&gateway).await, SubmitOutcome::Succeeded);
        assert_eq!(gateway.count(), 2);
    }

    #[test]
    fn updates_are_ignored_while_sending() {
        let mut flow = english_flow();
        fill(&mut flow);
        flow.begin_submit().unwrap();

        flow.update_field(Field::Name, "B".into());
        assert_eq!(flow.submission().name, "A");
    }

    #[test]
    fn reset_returns_to_idle_defaults() {
        let mut flow = english_flow();
        fill(&mut flow);
        let pending = flow.begin_submit().unwrap();
        flow.finish_submit(pending.attempt, Err(GatewayError::Rejected { status: 400, body: String::new() }));

        flow.reset();
        assert_eq!(flow.lifecycle(), &SubmissionLifecycle::Idle);
        assert_eq!(flow.submission(), &LeadSubmission::default());
    }

    #[test]
    fn late_result_after_reset_is_dropped() {
        let mut flow = english_flow();
        fill(&mut flow);
        let pending = flow.begin_submit().unwrap();
        flow.reset();

        flow.finish_submit(pending.attempt, Ok(()));
        assert_eq!(flow.lifecycle(), &SubmissionLifecycle::Idle);
    }

    #[test]
    fn abandoned_attempt_does_not_settle_the_next_one() {
        let mut flow = english_flow();
        fill(&mut flow);
        let first = flow.begin_submit().unwrap();
        flow.reset();

        fill(&mut flow);
        flow.update_field(Field::Name, "B".into());
        let second = flow.begin_submit().unwrap();
        assert_ne!(first.attempt, second.attempt);
        assert_eq!(second.params.name, "B");

        // The first request answers late; the second one is still pending
        flow.finish_submit(first.attempt, Ok(()));
        assert!(flow.lifecycle().is_sending());
        assert_eq!(flow.submission().name, "B");

        flow.finish_submit(second.attempt, Err(GatewayError::Transport("timeout".into())));
        assert_eq!(flow.lifecycle().error_message(), Some(Localizer::new(Locale::En).text(ERROR_KEY).as_str()));
        assert_eq!(flow.submission().name, "B");
    }

    #[test]
    fn abandoned_failure_does_not_fail_the_next_attempt() {
        let mut flow = english_flow();
        fill(&mut flow);
        let first = flow.begin_submit().unwrap();
        flow.reset();
        fill(&mut flow);
        let second = flow.begin_submit().unwrap();

        flow.finish_submit(first.attempt, Err(GatewayError::Transport("reset".into())));
        assert!(flow.lifecycle().is_sending());

        flow.finish_submit(second.attempt, Ok(()));
        assert_eq!(flow.lifecycle(), &SubmissionLifecycle::Succeeded);
    }

    #[test]
    fn failure_message_follows_a_language_switch() {
        let mut flow = english_flow();
        fill(&mut flow);
        let pending = flow.begin_submit().unwrap();
        flow.finish_submit(pending.attempt, Err(GatewayError::Transport("timeout".into())));

        flow.set_localizer(Localizer::new(Locale::Ru));
        let reason = flow.lifecycle().error_message().unwrap();
        assert_eq!(reason, Localizer::new(Locale::Ru).text(ERROR_KEY));
    }

    #[test]
    fn error_message_follows_the_active_language() {
        let mut flow = LeadFlow::new(Localizer::new(Locale::Ru));
        fill(&mut flow);
        let pending = flow.begin_submit().unwrap();
        flow.finish_submit(pending.attempt, Err(GatewayError::Transport("timeout".into())));

        let reason = flow.lifecycle().error_message().unwrap();
        assert_eq!(reason, Localizer::new(Locale::Ru).text(ERROR_KEY));
        assert_ne!(reason, Localizer::new(Locale::En).text(ERROR_KEY));
    }
}

use crate::{
    newsletter::validate_email,
    relay::{Relay, RelayError, Template, TemplateParams},
    telemetry::{log_event, LogLevel},
};
use serde_json::json;

/// How long `Success` or `Error` stays on screen before the form goes idle.
pub const STATUS_DISPLAY_MS: u32 = 3_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl SubmissionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    pub fn button_label(self) -> &'static str {
        match self {
            Self::Idle => "Send Message",
            Self::Loading => "Sending...",
            Self::Success => "Message Sent!",
            Self::Error => "Something went wrong",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitRejected {
    InFlight,
    MissingField(ContactField),
    InvalidEmail,
}

impl SubmitRejected {
    pub fn message(self) -> &'static str {
        match self {
            Self::InFlight => "Your message is already on its way",
            Self::MissingField(ContactField::Name) => "Please enter your name",
            Self::MissingField(ContactField::Email) => "Please enter your email",
            Self::MissingField(ContactField::Message) => "Please enter a message",
            Self::InvalidEmail => "Please enter a valid email",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: ContactFields,
    status: SubmissionStatus,
    outbound: Option<TemplateParams>,
    rejection: Option<SubmitRejected>,
}

impl ContactForm {
    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Inputs and the submit button are locked while a send is in flight.
    pub fn controls_disabled(&self) -> bool {
        self.status == SubmissionStatus::Loading
    }

    /// Parameters of the send currently in flight.
    pub fn outbound(&self) -> Option<&TemplateParams> {
        self.outbound.as_ref()
    }

    /// Why the last submit was refused, until a field is edited.
    pub fn rejection(&self) -> Option<SubmitRejected> {
        self.rejection
    }

    pub fn update(&mut self, field: ContactField, value: String) {
        if self.controls_disabled() {
            return;
        }
        self.rejection = None;

        match field {
            ContactField::Name => self.fields.name = value,
            ContactField::Email => self.fields.email = value,
            ContactField::Message => self.fields.message = value,
        }
    }

    /// Moves to `Loading` and captures the outbound parameters.
    ///
    /// A second call while loading is refused, so at most one pair of relay
    /// sends exists per form. Blank fields or a malformed address are refused
    /// and kept in [`rejection`](Self::rejection) for display.
    pub fn submit(&mut self) -> Result<&TemplateParams, SubmitRejected> {
        if self.controls_disabled() {
            return Err(SubmitRejected::InFlight);
        }

        if let Some(rejection) = self.validate() {
            self.rejection = Some(rejection);
            return Err(rejection);
        }

        self.rejection = None;
        self.status = SubmissionStatus::Loading;
        let params = TemplateParams::new(&self.fields.name, &self.fields.email, &self.fields.message);
        Ok(&*self.outbound.insert(params))
    }

    fn validate(&self) -> Option<SubmitRejected> {
        let required = [
            (ContactField::Name, &self.fields.name),
            (ContactField::Email, &self.fields.email),
            (ContactField::Message, &self.fields.message),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Some(SubmitRejected::MissingField(*field));
        }
        validate_email(&self.fields.email)
            .err()
            .map(|_| SubmitRejected::InvalidEmail)
    }

    /// Applies the relay outcome. Ignored unless a send is in flight.
    pub fn complete(&mut self, outcome: Result<(), RelayError>) {
        if self.status != SubmissionStatus::Loading {
            return;
        }
        self.outbound = None;

        match outcome {
            Ok(()) => {
                self.fields = ContactFields::default();
                self.status = SubmissionStatus::Success;
                log_event(LogLevel::Info, "contact_message_sent", json!({}));
            }
            Err(error) => {
                self.status = SubmissionStatus::Error;
                log_event(
                    LogLevel::Error,
                    "contact_message_failed",
                    json!({ "error": error.to_string() }),
                );
            }
        }
    }

    /// Returns from `Success` or `Error` to `Idle` once the display window ends.
    pub fn revert(&mut self) {
        if matches!(self.status, SubmissionStatus::Success | SubmissionStatus::Error) {
            self.status = SubmissionStatus::Idle;
        }
    }
}

/// Sends the visitor acknowledgment, then the operator notification stamped
/// with `submitted_at`. The first failure stops the sequence.
pub async fn deliver<R: Relay + ?Sized>(
    relay: &R,
    params: &TemplateParams,
    submitted_at: String,
) -> Result<(), RelayError> {
    relay.send(Template::VisitorAcknowledgment, params).await?;
    relay
        .send(Template::OperatorNotification, &params.with_time(submitted_at))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::cell::RefCell;

    const SUBMITTED_AT: &str = "Mon, Oct 19, 2026, 3:04 PM";

    /// Records every send and fails the one at `fail_at`, if set.
    #[derive(Default)]
    struct ScriptedRelay {
        sent: RefCell<Vec<(Template, TemplateParams)>>,
        fail_at: Option<usize>,
    }

    impl ScriptedRelay {
        fn failing_at(index: usize) -> Self {
            Self {
                fail_at: Some(index),
                ..Self::default()
            }
        }
    }

    #[async_trait(?Send)]
    impl Relay for ScriptedRelay {
        async fn send(&self, template: Template, params: &TemplateParams) -> Result<(), RelayError> {
            let index = self.sent.borrow().len();
            self.sent.borrow_mut().push((template, params.clone()));

            if self.fail_at == Some(index) {
                return Err(RelayError::Rejected {
                    template,
                    status: 503,
                    detail: "service unavailable".to_string(),
                });
            }
            Ok(())
        }
    }

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::default();
        form.update(ContactField::Name, "Jane".to_string());
        form.update(ContactField::Email, "jane@x.com".to_string());
        form.update(ContactField::Message, "Hi".to_string());
        form
    }

    async fn run_submission(form: &mut ContactForm, relay: &ScriptedRelay) {
        let params = form.submit().expect("form is valid").clone();
        assert_eq!(form.status(), SubmissionStatus::Loading);

        let outcome = deliver(relay, &params, SUBMITTED_AT.to_string()).await;
        form.complete(outcome);
    }

    #[tokio::test]
    async fn successful_delivery_clears_fields_then_reverts() {
        let mut form = filled_form();
        let relay = ScriptedRelay::default();

        run_submission(&mut form, &relay).await;

        assert_eq!(form.status(), SubmissionStatus::Success);
        assert_eq!(form.fields(), &ContactFields::default());
        assert!(form.outbound().is_none());

        form.revert();
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[tokio::test]
    async fn sends_acknowledgment_then_stamped_notification() {
        let mut form = filled_form();
        let relay = ScriptedRelay::default();

        run_submission(&mut form, &relay).await;

        let sent = relay.sent.borrow();
        assert_eq!(sent.len(), 2);

        let (first_template, first_params) = &sent[0];
        assert_eq!(*first_template, Template::VisitorAcknowledgment);
        assert_eq!(first_params, &TemplateParams::new("Jane", "jane@x.com", "Hi"));

        let (second_template, second_params) = &sent[1];
        assert_eq!(*second_template, Template::OperatorNotification);
        assert_eq!(second_params.reply_to, "jane@x.com");
        assert_eq!(second_params.time.as_deref(), Some(SUBMITTED_AT));
    }

    #[tokio::test]
    async fn second_send_failure_keeps_fields_and_reports_error() {
        let mut form = filled_form();
        let relay = ScriptedRelay::failing_at(1);

        run_submission(&mut form, &relay).await;

        assert_eq!(form.status(), SubmissionStatus::Error);
        assert_eq!(form.fields().name, "Jane");
        assert_eq!(form.fields().email, "jane@x.com");
        assert_eq!(form.fields().message, "Hi");

        form.revert();
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.fields().name, "Jane");
    }

    #[tokio::test]
    async fn first_send_failure_skips_notification() {
        let mut form = filled_form();
        let relay = ScriptedRelay::failing_at(0);

        run_submission(&mut form, &relay).await;

        assert_eq!(form.status(), SubmissionStatus::Error);
        assert_eq!(relay.sent.borrow().len(), 1);
    }

    #[tokio::test]
    async fn resubmit_while_loading_issues_no_new_sends() {
        let mut form = filled_form();
        let relay = ScriptedRelay::default();

        let params = form.submit().expect("form is valid").clone();
        assert!(form.controls_disabled());
        assert_eq!(form.submit(), Err(SubmitRejected::InFlight));
        assert_eq!(form.outbound(), Some(&params));

        form.update(ContactField::Name, "Mallory".to_string());
        assert_eq!(form.fields().name, "Jane");

        let outcome = deliver(&relay, &params, SUBMITTED_AT.to_string()).await;
        form.complete(outcome);
        assert_eq!(relay.sent.borrow().len(), 2);
    }

    #[test]
    fn controls_are_enabled_outside_loading() {
        let mut form = filled_form();
        assert!(!form.controls_disabled());

        form.submit().expect("form is valid");
        form.complete(Ok(()));
        assert!(!form.controls_disabled());
    }

    #[test]
    fn invalid_input_never_enters_loading() {
        let mut form = filled_form();
        form.update(ContactField::Message, "   ".to_string());
        assert_eq!(form.submit(), Err(SubmitRejected::MissingField(ContactField::Message)));

        form.update(ContactField::Message, "Hi".to_string());
        form.update(ContactField::Email, "jane-at-x".to_string());
        assert_eq!(form.submit(), Err(SubmitRejected::InvalidEmail));
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert!(form.outbound().is_none());
    }

    #[test]
    fn refused_submit_keeps_a_visible_reason_until_edited() {
        let mut form = filled_form();
        form.update(ContactField::Email, "jane@localhost".to_string());

        assert_eq!(form.submit(), Err(SubmitRejected::InvalidEmail));
        assert_eq!(form.rejection(), Some(SubmitRejected::InvalidEmail));
        assert_eq!(
            form.rejection().map(SubmitRejected::message),
            Some("Please enter a valid email")
        );
        assert_eq!(form.status(), SubmissionStatus::Idle);

        form.update(ContactField::Email, "jane@x.com".to_string());
        assert_eq!(form.rejection(), None);
    }

    #[test]
    fn whitespace_name_is_reported_by_field() {
        let mut form = filled_form();
        form.update(ContactField::Name, "   ".to_string());

        assert_eq!(form.submit(), Err(SubmitRejected::MissingField(ContactField::Name)));
        assert_eq!(
            form.rejection().map(SubmitRejected::message),
            Some("Please enter your name")
        );
        assert!(form.outbound().is_none());
    }

    #[test]
    fn accepted_submit_clears_previous_reason() {
        let mut form = filled_form();
        form.update(ContactField::Message, " ".to_string());
        let _ = form.submit();
        assert!(form.rejection().is_some());

        form.update(ContactField::Message, "Hi".to_string());
        form.submit().expect("form is valid");
        assert_eq!(form.rejection(), None);
        assert_eq!(form.status(), SubmissionStatus::Loading);
    }

    #[test]
    fn completion_and_revert_ignore_out_of_order_calls() {
        let mut form = filled_form();

        form.complete(Ok(()));
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.fields().name, "Jane");

        form.submit().expect("form is valid");
        form.revert();
        assert_eq!(form.status(), SubmissionStatus::Loading);
    }

    #[test]
    fn button_label_follows_status() {
        assert_eq!(SubmissionStatus::Idle.button_label(), "Send Message");
        assert_eq!(SubmissionStatus::Loading.button_label(), "Sending...");
        assert_eq!(SubmissionStatus::Success.button_label(), "Message Sent!");
        assert_eq!(SubmissionStatus::Error.button_label(), "Something went wrong");
    }
}

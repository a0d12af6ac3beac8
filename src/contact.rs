//! Contact form state and message delivery.
//!
//! The form is a small state machine:
//!
//! ```text
//! Idle ──submit──▶ Submitting ──settle(Ok)──▶ Idle (fields cleared)
//!   ▲                   │
//!   └──retry── Failed ◀─┘ settle(Err)
//! ```
//!
//! A submit with an empty required field, or while a message is in flight,
//! is rejected without touching the state.

use std::{fmt, time::Duration};

use serde::{Deserialize, Serialize};

use crate::{
    error::{ContactError, DeliveryError},
    schedule::{Scheduler, TaskHandle},
};

/// How long the simulated relay takes to "transmit" a message.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(2000);

pub const DELIVERED_NOTICE: &str =
    "Message transmitted successfully! I'll respond within 24 hours.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Company,
    Subject,
    Message,
}

impl Field {
    pub const REQUIRED: [Field; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    pub fn is_required(self) -> bool {
        !matches!(self, Self::Company)
    }

    /// The `name` attribute of the matching input.
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Company => "company",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Your Name",
            Self::Email => "Email Address",
            Self::Company => "Company (Optional)",
            Self::Subject => "Subject",
            Self::Message => {
                "Your message... Tell me about your project requirements, timeline, and budget."
            }
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// What the visitor has typed so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub company: String,
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Company => &self.company,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Company => &mut self.company,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }

    /// The first required field left empty, if any.
    pub fn missing_field(&self) -> Option<Field> {
        Field::REQUIRED
            .into_iter()
            .find(|f| self.get(*f).is_empty())
    }

    fn to_message(&self) -> ContactMessage {
        ContactMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            company: (!self.company.is_empty()).then(|| self.company.clone()),
            subject: self.subject.clone(),
            message: self.message.clone(),
        }
    }
}

/// The payload a message relay receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Failed(String),
}

/// Message surfaced to the visitor once a submission settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Delivered,
    Failed(String),
}

impl Notice {
    pub fn text(&self) -> String {
        match self {
            Self::Delivered => DELIVERED_NOTICE.to_string(),
            Self::Failed(reason) => format!("Transmission failed: {reason}. Please try again."),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Delivered)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    draft: ContactDraft,
    state: SubmitState,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn value(&self, field: Field) -> &str {
        self.draft.get(field)
    }

    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state == SubmitState::Submitting
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        self.draft.set(field, value);
    }

    /// Starts a submission and hands back the payload to deliver.
    pub fn submit(&mut self) -> Result<ContactMessage, ContactError> {
        if self.is_busy() {
            return Err(ContactError::InFlight);
        }
        if let Some(field) = self.draft.missing_field() {
            return Err(ContactError::MissingField(field));
        }
        self.state = SubmitState::Submitting;
        log::debug!("contact submission started");
        Ok(self.draft.to_message())
    }

    /// Applies the relay's verdict. Ignored unless a submission is in flight.
    pub fn settle(&mut self, outcome: Result<(), DeliveryError>) -> Option<Notice> {
        if !self.is_busy() {
            log::warn!("delivery settled with no submission in flight");
            return None;
        }
        match outcome {
            Ok(()) => {
                self.draft = ContactDraft::default();
                self.state = SubmitState::Idle;
                log::debug!("contact submission delivered");
                Some(Notice::Delivered)
            }
            Err(err) => {
                log::warn!("contact submission failed: {err}");
                let reason = err.to_string();
                self.state = SubmitState::Failed(reason.clone());
                Some(Notice::Failed(reason))
            }
        }
    }

    /// Leaves the failed state so the visitor can send again.
    pub fn retry(&mut self) {
        if matches!(self.state, SubmitState::Failed(_)) {
            self.state = SubmitState::Idle;
        }
    }
}

/// Where submitted messages go: an email relay or ticketing endpoint.
pub trait MessageRelay {
    type Handle: TaskHandle;

    /// Starts delivering `message`; `settle` runs exactly once with the
    /// outcome unless the returned handle is cancelled first.
    fn deliver(
        &self,
        message: ContactMessage,
        settle: Box<dyn FnOnce(Result<(), DeliveryError>)>,
    ) -> Self::Handle;
}

/// Stand-in relay: accepts every message after a fixed delay without any I/O.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedRelay<S> {
    scheduler: S,
    delay: Duration,
}

impl<S: Scheduler> SimulatedRelay<S> {
    pub fn new(scheduler: S) -> Self {
        Self::with_delay(scheduler, SUBMIT_DELAY)
    }

    pub fn with_delay(scheduler: S, delay: Duration) -> Self {
        Self { scheduler, delay }
    }
}

impl<S: Scheduler> MessageRelay for SimulatedRelay<S> {
    type Handle = S::Handle;

    fn deliver(
        &self,
        message: ContactMessage,
        settle: Box<dyn FnOnce(Result<(), DeliveryError>)>,
    ) -> S::Handle {
        log::info!("simulating delivery of {:?}", message.subject);
        self.scheduler
            .after(self.delay, Box::new(move || settle(Ok(()))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_field(Field::Name, "Ada".into());
        form.set_field(Field::Email, "ada@example.com".into());
        form.set_field(Field::Subject, "Migration".into());
        form.set_field(Field::Message, "Let's move to the cloud.".into());
        form
    }

    #[test]
    fn submit_requires_every_required_field() {
        for field in Field::REQUIRED {
            let mut form = filled();
            form.set_field(field, String::new());
            assert_eq!(form.submit(), Err(ContactError::MissingField(field)));
            assert_eq!(form.state(), &SubmitState::Idle);
        }
    }

    #[test]
    fn company_is_optional() {
        let mut form = filled();
        let message = form.submit().unwrap();
        assert_eq!(message.company, None);
        assert!(form.is_busy());
    }

    #[test]
    fn second_submit_while_busy_is_rejected() {
        let mut form = filled();
        form.submit().unwrap();
        assert_eq!(form.submit(), Err(ContactError::InFlight));
    }

    #[test]
    fn delivered_clears_every_field() {
        let mut form = filled();
        form.set_field(Field::Company, "Initech".into());
        form.submit().unwrap();
        assert_eq!(form.settle(Ok(())), Some(Notice::Delivered));
        assert_eq!(form.draft(), &ContactDraft::default());
        assert_eq!(form.state(), &SubmitState::Idle);
    }

    #[test]
    fn failure_keeps_draft_and_allows_retry() {
        let mut form = filled();
        form.submit().unwrap();
        let notice = form
            .settle(Err(DeliveryError::Unreachable("timeout".into())))
            .unwrap();
        assert!(!notice.is_success());
        assert!(matches!(form.state(), SubmitState::Failed(_)));
        assert_eq!(form.value(Field::Name), "Ada");

        form.retry();
        assert_eq!(form.state(), &SubmitState::Idle);
        assert!(form.submit().is_ok());
    }

    #[test]
    fn failed_form_can_resubmit_directly() {
        let mut form = filled();
        form.submit().unwrap();
        form.settle(Err(DeliveryError::Rejected("spam".into())));
        assert!(form.submit().is_ok());
    }

    #[test]
    fn settle_without_submission_is_ignored() {
        let mut form = filled();
        assert_eq!(form.settle(Ok(())), None);
        assert_eq!(form.value(Field::Email), "ada@example.com");
    }

    #[test]
    fn payload_omits_empty_company() {
        let mut form = filled();
        let json = form.submit().unwrap().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["name"], "Ada");
        assert!(value.get("company").is_none());

        let mut form = filled();
        form.set_field(Field::Company, "Initech".into());
        let message = form.submit().unwrap();
        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["company"], "Initech");
    }

    #[test]
    fn simulated_relay_settles_once_after_its_delay() {
        use std::{cell::RefCell, rc::Rc};

        use crate::schedule::ManualClock;

        let clock = ManualClock::new();
        let outcomes = Rc::new(RefCell::new(Vec::<Result<(), DeliveryError>>::new()));
        let relay = SimulatedRelay::with_delay(clock.clone(), Duration::from_millis(300));
        let _task = relay.deliver(filled().submit().unwrap(), {
            let outcomes = Rc::clone(&outcomes);
            Box::new(move |outcome| outcomes.borrow_mut().push(outcome))
        });

        clock.advance(Duration::from_millis(299));
        assert!(outcomes.borrow().is_empty());
        clock.advance(Duration::from_millis(1));
        assert_eq!(*outcomes.borrow(), [Ok::<(), DeliveryError>(())]);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn missing_field_error_names_the_field() {
        assert_eq!(
            ContactError::MissingField(Field::Subject).to_string(),
            "subject is required"
        );
    }
}

//! Enquiry and registration forms.
//!
//! A form moves `Idle -> Submitting -> Submitted` and returns to `Idle` with
//! empty fields once the reset delay has passed. The studio has no backend
//! for enquiries yet, so [`SimulatedSubmitter`] stands in for one: it waits
//! and then accepts everything. Anything implementing [`Submitter`] can
//! replace it and report a real failure, which lands the flow in `Failed`.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::validation::looks_like_email;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    pub reference: String,
    pub form: &'static str,
    pub received_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Submitting,
    Submitted(Receipt),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("submission rejected: {0}")]
    Rejected(String),
    #[error("submission service unavailable")]
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{0} is not valid")]
    Invalid(&'static str),
    #[error("form is busy")]
    Busy,
    #[error(transparent)]
    Submit(#[from] SubmitError),
}

/// A set of form fields. `Default` is the cleared form.
pub trait FormFields: Clone + Default + Send + Sync + 'static {
    const NAME: &'static str;

    /// Same checks the browser applies through `required` and input types.
    fn check(&self) -> Result<(), FormError>;
}

pub trait Submitter<F: FormFields>: Send + Sync {
    fn submit(&self, fields: &F) -> impl Future<Output = Result<Receipt, SubmitError>> + Send;
}

/// Accepts every submission after a fixed delay without sending it anywhere.
#[derive(Debug)]
pub struct SimulatedSubmitter {
    delay: Duration,
    counter: AtomicU64,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            counter: AtomicU64::new(0),
        }
    }
}

impl<F: FormFields> Submitter<F> for SimulatedSubmitter {
    async fn submit(&self, _fields: &F) -> Result<Receipt, SubmitError> {
        tokio::time::sleep(self.delay).await;
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        Ok(Receipt {
            reference: format!("{}-{n:05}", F::NAME.to_uppercase()),
            form: F::NAME,
            received_at: Utc::now(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormTimings {
    pub reset_delay: Duration,
}

impl Default for FormTimings {
    fn default() -> Self {
        Self {
            reset_delay: Duration::from_secs(3),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState<F> {
    pub phase: FormPhase,
    pub fields: F,
}

/// Drives one form through its phases. Observers follow along via [`FormFlow::subscribe`].
///
/// Dropping the flow cancels a pending reset.
pub struct FormFlow<F: FormFields> {
    state: Arc<watch::Sender<FormState<F>>>,
    timings: FormTimings,
    reset: Option<JoinHandle<()>>,
}

impl<F: FormFields> FormFlow<F> {
    pub fn new(fields: F, timings: FormTimings) -> Self {
        let (state, _) = watch::channel(FormState {
            phase: FormPhase::Idle,
            fields,
        });
        Self {
            state: Arc::new(state),
            timings,
            reset: None,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<FormState<F>> {
        self.state.subscribe()
    }

    pub fn phase(&self) -> FormPhase {
        self.state.borrow().phase.clone()
    }

    pub fn fields(&self) -> F {
        self.state.borrow().fields.clone()
    }

    /// Changes field values. Only allowed while idle.
    pub fn edit(&self, change: impl FnOnce(&mut F)) -> Result<(), FormError> {
        if self.phase() != FormPhase::Idle {
            return Err(FormError::Busy);
        }
        self.state.send_modify(|state| change(&mut state.fields));
        Ok(())
    }

    pub async fn submit<S: Submitter<F>>(&mut self, submitter: &S) -> Result<Receipt, FormError> {
        let fields = {
            let state = self.state.borrow();
            if state.phase != FormPhase::Idle {
                return Err(FormError::Busy);
            }
            state.fields.check()?;
            state.fields.clone()
        };

        self.state.send_modify(|state| state.phase = FormPhase::Submitting);
        debug!(form = F::NAME, "submitting");

        match submitter.submit(&fields).await {
            Ok(receipt) => {
                info!(form = F::NAME, reference = %receipt.reference, "form submitted");
                let phase = FormPhase::Submitted(receipt.clone());
                self.state.send_modify(|state| state.phase = phase);
                self.schedule_reset();
                Ok(receipt)
            }
            Err(err) => {
                tracing::warn!(form = F::NAME, error = %err, "form submission failed");
                let message = err.to_string();
                self.state.send_modify(|state| state.phase = FormPhase::Failed(message));
                Err(err.into())
            }
        }
    }

    /// Back to an empty, idle form right away.
    pub fn reset(&mut self) {
        if let Some(task) = self.reset.take() {
            task.abort();
        }
        clear(&self.state);
    }

    fn schedule_reset(&mut self) {
        if let Some(task) = self.reset.take() {
            task.abort();
        }
        let state = Arc::clone(&self.state);
        let delay = self.timings.reset_delay;
        self.reset = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            clear(&state);
            debug!(form = F::NAME, "form reset");
        }));
    }
}

fn clear<F: FormFields>(state: &watch::Sender<FormState<F>>) {
    state.send_modify(|state| {
        state.phase = FormPhase::Idle;
        state.fields = F::default();
    });
}

impl<F: FormFields> Drop for FormFlow<F> {
    fn drop(&mut self) {
        if let Some(task) = self.reset.take() {
            task.abort();
        }
    }
}

fn required(value: &str, field: &'static str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        Err(FormError::Missing(field))
    } else {
        Ok(())
    }
}

fn email(value: &str, field: &'static str) -> Result<(), FormError> {
    required(value, field)?;
    if looks_like_email(value) {
        Ok(())
    } else {
        Err(FormError::Invalid(field))
    }
}

pub const CONTACT_SUBJECTS: &[(&str, &str)] = &[
    ("general", "General question"),
    ("classes", "Classes & placement"),
    ("registration", "Registration & billing"),
    ("performances", "Shows & tickets"),
    ("rental", "Studio rental"),
    ("other", "Something else"),
];

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
    /// Checkbox: present when ticked.
    pub newsletter: Option<String>,
}

impl FormFields for ContactForm {
    const NAME: &'static str = "contact";

    fn check(&self) -> Result<(), FormError> {
        required(&self.name, "name")?;
        email(&self.email, "email")?;
        required(&self.subject, "subject")?;
        required(&self.message, "message")
    }
}

pub const EXPERIENCE_LEVELS: &[(&str, &str)] = &[
    ("none", "No experience"),
    ("some", "1-2 years"),
    ("experienced", "3+ years"),
];

pub const AGE_GROUPS: &[(&str, &str)] = &[
    ("3-6", "3-6 years"),
    ("7-12", "7-12 years"),
    ("13-17", "13-17 years"),
    ("adult", "18+"),
];

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RegistrationForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub class_slug: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub age_group: String,
    #[serde(default)]
    pub emergency_contact: String,
    #[serde(default)]
    pub notes: String,
    pub agree_terms: Option<String>,
}

impl FormFields for RegistrationForm {
    const NAME: &'static str = "registration";

    fn check(&self) -> Result<(), FormError> {
        required(&self.first_name, "first_name")?;
        required(&self.last_name, "last_name")?;
        email(&self.email, "email")?;
        required(&self.phone, "phone")?;
        required(&self.class_slug, "class_slug")?;
        match self.agree_terms.as_deref() {
            Some(v) if !v.is_empty() => Ok(()),
            _ => Err(FormError::Missing("agree_terms")),
        }
    }
}

#[cfg(test)]
mod tests {
    use tokio::time::Instant;

    use super::*;

    fn contact() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            phone: String::new(),
            subject: "classes".into(),
            message: "Which ballet class suits a beginner?".into(),
            newsletter: None,
        }
    }

    struct Refusing;

    impl Submitter<ContactForm> for Refusing {
        async fn submit(&self, _fields: &ContactForm) -> Result<Receipt, SubmitError> {
            Err(SubmitError::Unavailable)
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_walks_through_phases_and_resets() {
        let submitter = SimulatedSubmitter::new(Duration::from_millis(1500));
        let mut flow = FormFlow::new(contact(), FormTimings::default());
        let mut rx = flow.subscribe();

        let observer = tokio::spawn(async move {
            let mut seen = Vec::new();
            while rx.changed().await.is_ok() {
                seen.push(rx.borrow_and_update().phase.clone());
                if seen.len() == 3 {
                    break;
                }
            }
            seen
        });

        let started = Instant::now();
        let receipt = flow.submit(&submitter).await.unwrap();
        assert_eq!(started.elapsed(), Duration::from_millis(1500));
        assert_eq!(receipt.form, "contact");
        assert_eq!(receipt.reference, "CONTACT-00001");
        assert_eq!(flow.phase(), FormPhase::Submitted(receipt.clone()));
        assert_eq!(flow.fields(), contact());

        tokio::time::sleep(Duration::from_millis(2999)).await;
        assert!(matches!(flow.phase(), FormPhase::Submitted(_)));

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(flow.phase(), FormPhase::Idle);
        assert_eq!(flow.fields(), ContactForm::default());

        let seen = observer.await.unwrap();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0], FormPhase::Submitting);
        assert_eq!(seen[1], FormPhase::Submitted(receipt));
        assert_eq!(seen[2], FormPhase::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_missing_required_field_never_leaves_idle() {
        let submitter = SimulatedSubmitter::new(Duration::from_millis(1500));
        let mut flow = FormFlow::new(
            ContactForm {
                email: String::new(),
                ..contact()
            },
            FormTimings::default(),
        );
        let rx = flow.subscribe();

        let err = flow.submit(&submitter).await.unwrap_err();
        assert_eq!(err, FormError::Missing("email"));
        assert_eq!(flow.phase(), FormPhase::Idle);
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn test_busy_while_submitted() {
        let submitter = SimulatedSubmitter::new(Duration::ZERO);
        let mut flow = FormFlow::new(contact(), FormTimings::default());
        flow.submit(&submitter).await.unwrap();
        assert_eq!(flow.submit(&submitter).await.unwrap_err(), FormError::Busy);
        assert_eq!(flow.edit(|f| f.name.clear()).unwrap_err(), FormError::Busy);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending_reset() {
        let submitter = SimulatedSubmitter::new(Duration::ZERO);
        let mut flow = FormFlow::new(contact(), FormTimings::default());
        let rx = flow.subscribe();
        flow.submit(&submitter).await.unwrap();
        drop(flow);

        tokio::time::sleep(Duration::from_secs(10)).await;
        let state = rx.borrow();
        assert!(matches!(state.phase, FormPhase::Submitted(_)));
        assert_eq!(state.fields, contact());
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_submission_keeps_fields() {
        let mut flow = FormFlow::new(contact(), FormTimings::default());
        let err = flow.submit(&Refusing).await.unwrap_err();
        assert_eq!(err, FormError::Submit(SubmitError::Unavailable));
        assert_eq!(
            flow.phase(),
            FormPhase::Failed("submission service unavailable".into())
        );
        assert_eq!(flow.fields(), contact());

        flow.reset();
        assert_eq!(flow.phase(), FormPhase::Idle);
        assert_eq!(flow.fields(), ContactForm::default());
    }

    #[tokio::test]
    async fn test_edit_while_idle() {
        let flow = FormFlow::new(ContactForm::default(), FormTimings::default());
        flow.edit(|f| f.name = "Grace".into()).unwrap();
        assert_eq!(flow.fields().name, "Grace");
    }

    #[test]
    fn test_contact_checks() {
        assert!(contact().check().is_ok());
        let bad_email = ContactForm {
            email: "ada-at-example".into(),
            ..contact()
        };
        assert_eq!(bad_email.check().unwrap_err(), FormError::Invalid("email"));
        let no_message = ContactForm {
            message: "   ".into(),
            ..contact()
        };
        assert_eq!(no_message.check().unwrap_err(), FormError::Missing("message"));
    }

    #[test]
    fn test_registration_requires_terms() {
        let mut form = RegistrationForm {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            phone: "555-0100".into(),
            class_slug: "adult-ballet".into(),
            ..Default::default()
        };
        assert_eq!(form.check().unwrap_err(), FormError::Missing("agree_terms"));
        form.agree_terms = Some("on".into());
        assert!(form.check().is_ok());
    }
}

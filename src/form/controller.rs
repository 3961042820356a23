use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use log::{debug, info, warn};
use thiserror::Error;

use super::validation::{validate, Field, FieldError, FormErrors, FormValues};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("no browser window available")]
    NoWindow,
    #[error("browser call failed: {0}")]
    Browser(String),
    #[error("could not serialize form values: {0}")]
    Serialize(String),
    #[error("{0}")]
    Failed(String),
}

impl From<wasm_bindgen::JsValue> for SubmissionError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        SubmissionError::Browser(format!("{:?}", value))
    }
}

impl From<serde_json::Error> for SubmissionError {
    fn from(err: serde_json::Error) -> Self {
        SubmissionError::Serialize(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("field `{0}` is not part of this form")]
    UnknownField(Field),
}

/// What happened to one call of `submit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Another attempt was still in flight; nothing was done.
    Busy,
    /// Validation failed; `errors` holds the reasons.
    Rejected,
    Sent,
    Failed,
}

/// Result of starting a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitGate {
    Busy,
    Rejected,
    /// Validation passed; the snapshot is what gets handed to the sender.
    Ready(FormValues),
}

/// Field values, per-field errors and in-flight state of one lead form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormController {
    initial: FormValues,
    values: FormValues,
    errors: FormErrors,
    submitting: bool,
    submit_error: Option<SubmissionError>,
}

impl FormController {
    pub fn new(initial: FormValues) -> Self {
        Self {
            values: initial.clone(),
            initial,
            errors: FormErrors::new(),
            submitting: false,
            submit_error: None,
        }
    }

    /// A form with the given fields, all empty.
    pub fn with_fields(fields: &[Field]) -> Self {
        Self::new(fields.iter().map(|field| (*field, String::new())).collect())
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or_default()
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn submit_error(&self) -> Option<&SubmissionError> {
        self.submit_error.as_ref()
    }

    /// Stores a new value. Editing a field always clears that field's error,
    /// whether or not the new value is valid.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) -> Result<(), FormError> {
        let slot = self
            .values
            .get_mut(&field)
            .ok_or(FormError::UnknownField(field))?;
        *slot = value.into();
        self.errors.remove(&field);
        Ok(())
    }

    pub fn begin_submit(&mut self) -> SubmitGate {
        if self.submitting {
            return SubmitGate::Busy;
        }

        self.submitting = true;
        self.submit_error = None;
        self.errors = validate(&self.values);

        if !self.errors.is_empty() {
            debug!("Form rejected with {} invalid field(s)", self.errors.len());
            self.submitting = false;
            return SubmitGate::Rejected;
        }

        SubmitGate::Ready(self.values.clone())
    }

    /// Settles an attempt started by `begin_submit`. Success resets the form
    /// to its initial values, including edits made while the send was pending.
    pub fn finish_submit(&mut self, result: Result<(), SubmissionError>) -> SubmitOutcome {
        self.submitting = false;
        match result {
            Ok(()) => {
                self.values = self.initial.clone();
                self.errors.clear();
                SubmitOutcome::Sent
            }
            Err(err) => {
                warn!("Form submission error: {}", err);
                self.submit_error = Some(err);
                SubmitOutcome::Failed
            }
        }
    }
}

/// Shared handle to a `FormController` owned by one host section.
///
/// `notify` is called after every state change so the host can re-render.
#[derive(Clone)]
pub struct FormHandle {
    controller: Rc<RefCell<FormController>>,
    notify: Rc<dyn Fn()>,
}

impl PartialEq for FormHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.controller, &other.controller)
    }
}

impl FormHandle {
    pub fn new(controller: Rc<RefCell<FormController>>, notify: Rc<dyn Fn()>) -> Self {
        Self { controller, notify }
    }

    pub fn with<R>(&self, f: impl FnOnce(&FormController) -> R) -> R {
        f(&self.controller.borrow())
    }

    pub fn value(&self, field: Field) -> String {
        self.with(|form| form.value(field).to_string())
    }

    /// The message to show next to `field`, if any.
    pub fn error_message(&self, field: Field) -> Option<String> {
        self.with(|form| form.error(field).map(ToString::to_string))
    }

    pub fn is_submitting(&self) -> bool {
        self.with(FormController::is_submitting)
    }

    pub fn has_submit_error(&self) -> bool {
        self.with(|form| form.submit_error().is_some())
    }

    pub fn update_field(&self, field: Field, value: impl Into<String>) -> Result<(), FormError> {
        self.controller.borrow_mut().update_field(field, value)?;
        (self.notify)();
        Ok(())
    }

    /// Validates and, if the form is clean, awaits `on_submit` with a snapshot
    /// of the values. A call made while another attempt is pending returns
    /// `SubmitOutcome::Busy` without validating or sending.
    pub async fn submit<F, Fut>(&self, on_submit: F) -> SubmitOutcome
    where
        F: FnOnce(FormValues) -> Fut,
        Fut: Future<Output = Result<(), SubmissionError>>,
    {
        let gate = self.controller.borrow_mut().begin_submit();
        let snapshot = match gate {
            SubmitGate::Busy => {
                debug!("Submission already in flight, ignoring");
                return SubmitOutcome::Busy;
            }
            SubmitGate::Rejected => {
                (self.notify)();
                return SubmitOutcome::Rejected;
            }
            SubmitGate::Ready(values) => values,
        };
        (self.notify)();

        let result = on_submit(snapshot).await;

        let outcome = self.controller.borrow_mut().finish_submit(result);
        if outcome == SubmitOutcome::Sent {
            info!("Form submitted");
        }
        (self.notify)();
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    const LEAD_FIELDS: &[Field] = &[Field::Name, Field::Email, Field::Phone, Field::Practice];

    fn handle(fields: &[Field]) -> (FormHandle, Rc<Cell<usize>>) {
        let renders = Rc::new(Cell::new(0));
        let counter = renders.clone();
        let notify: Rc<dyn Fn()> = Rc::new(move || counter.set(counter.get() + 1));
        let controller = Rc::new(RefCell::new(FormController::with_fields(fields)));
        (FormHandle::new(controller, notify), renders)
    }

    fn fill_valid(form: &FormHandle) {
        form.update_field(Field::Name, "Jane").unwrap();
        form.update_field(Field::Email, "jane@example.com").unwrap();
        form.update_field(Field::Phone, "+15551234567").unwrap();
        form.update_field(Field::Practice, "Westside Animal Hospital").unwrap();
    }

    #[test]
    fn new_form_is_idle_and_clean() {
        let initial: FormValues = [(Field::Name, "Pre".to_string()), (Field::Email, String::new())]
            .into_iter()
            .collect();
        let form = FormController::new(initial.clone());

        assert_eq!(form.values(), &initial);
        assert!(form.errors().is_empty());
        assert!(!form.is_submitting());
        assert!(form.submit_error().is_none());
    }

    #[test]
    fn editing_clears_only_that_fields_error() {
        let mut form = FormController::with_fields(LEAD_FIELDS);
        assert_eq!(form.begin_submit(), SubmitGate::Rejected);
        assert!(form.error(Field::Name).is_some());
        assert!(form.error(Field::Email).is_some());

        // still invalid, but the error goes away until the next attempt
        form.update_field(Field::Email, "nope").unwrap();

        assert!(form.error(Field::Email).is_none());
        assert_eq!(form.error(Field::Name), Some(&FieldError::MissingField(Field::Name)));
        assert_eq!(form.value(Field::Email), "nope");
    }

    #[test]
    fn unknown_field_is_rejected_without_touching_state() {
        let mut form = FormController::with_fields(&[Field::Name, Field::Email]);
        let before = form.clone();

        assert_eq!(
            form.update_field(Field::Phone, "555"),
            Err(FormError::UnknownField(Field::Phone))
        );
        assert_eq!(form, before);
    }

    #[test]
    fn successful_submit_resets_to_initial_values() {
        let (form, _) = handle(LEAD_FIELDS);
        fill_valid(&form);

        let sent = Rc::new(RefCell::new(None));
        let sink = sent.clone();
        let outcome = block_on(form.submit(|values| async move {
            *sink.borrow_mut() = Some(values);
            Ok(())
        }));

        assert_eq!(outcome, SubmitOutcome::Sent);
        let sent = sent.borrow().clone().expect("sender was called");
        assert_eq!(sent[&Field::Name], "Jane");
        assert_eq!(sent[&Field::Practice], "Westside Animal Hospital");
        form.with(|state| {
            assert_eq!(state.values(), FormController::with_fields(LEAD_FIELDS).values());
            assert!(state.errors().is_empty());
            assert!(!state.is_submitting());
        });
    }

    #[test]
    fn invalid_input_never_reaches_the_sender() {
        let (form, _) = handle(LEAD_FIELDS);
        form.update_field(Field::Name, "Jane").unwrap();
        form.update_field(Field::Email, "not-an-email").unwrap();
        let calls = Rc::new(Cell::new(0));

        let mut seen = Vec::new();
        for _ in 0..2 {
            let calls = calls.clone();
            let outcome = block_on(form.submit(move |_| async move {
                calls.set(calls.get() + 1);
                Ok(())
            }));
            assert_eq!(outcome, SubmitOutcome::Rejected);
            seen.push(form.with(|state| state.errors().clone()));
        }

        assert_eq!(calls.get(), 0);
        assert_eq!(seen[0], seen[1]);
        assert_eq!(
            seen[0].get(&Field::Email),
            Some(&FieldError::InvalidFormat(Field::Email))
        );
        assert_eq!(form.value(Field::Email), "not-an-email");
        assert!(!form.is_submitting());
    }

    #[test]
    fn submitting_is_visible_while_the_sender_runs() {
        let (form, _) = handle(LEAD_FIELDS);
        fill_valid(&form);

        let observer = form.clone();
        let outcome = block_on(form.submit(move |_| async move {
            assert!(observer.is_submitting());
            Ok(())
        }));

        assert_eq!(outcome, SubmitOutcome::Sent);
        assert!(!form.is_submitting());
    }

    #[test]
    fn failed_send_keeps_values_and_surfaces_the_failure() {
        let (form, _) = handle(LEAD_FIELDS);
        fill_valid(&form);

        let observer = form.clone();
        let outcome = block_on(form.submit(move |_| async move {
            assert!(observer.is_submitting());
            Err(SubmissionError::Failed("network down".into()))
        }));

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert!(!form.is_submitting());
        assert!(form.has_submit_error());
        assert_eq!(form.value(Field::Name), "Jane");
        form.with(|state| {
            assert!(state.errors().is_empty());
            assert_eq!(
                state.submit_error(),
                Some(&SubmissionError::Failed("network down".into()))
            );
        });

        // the next attempt starts with a clean slate
        let outcome = block_on(form.submit(|_| async { Ok(()) }));
        assert_eq!(outcome, SubmitOutcome::Sent);
        assert!(!form.has_submit_error());
    }

    #[test]
    fn second_submit_while_pending_is_ignored() {
        let (form, _) = handle(LEAD_FIELDS);
        fill_valid(&form);
        let inner_calls = Rc::new(Cell::new(0));

        let reentrant = form.clone();
        let calls = inner_calls.clone();
        let outcome = block_on(form.submit(move |_| async move {
            let nested = reentrant
                .submit(move |_| async move {
                    calls.set(calls.get() + 1);
                    Ok(())
                })
                .await;
            assert_eq!(nested, SubmitOutcome::Busy);
            Ok(())
        }));

        assert_eq!(outcome, SubmitOutcome::Sent);
        assert_eq!(inner_calls.get(), 0);
    }

    #[test]
    fn edits_during_a_pending_send_are_discarded_on_success() {
        let (form, _) = handle(LEAD_FIELDS);
        fill_valid(&form);

        let editor = form.clone();
        block_on(form.submit(move |values| async move {
            editor.update_field(Field::Name, "Janet").unwrap();
            assert_eq!(editor.value(Field::Name), "Janet");
            assert_eq!(values[&Field::Name], "Jane");
            Ok(())
        }));

        assert_eq!(form.value(Field::Name), "");
    }

    #[test]
    fn host_is_notified_on_every_change() {
        let (form, renders) = handle(LEAD_FIELDS);
        form.update_field(Field::Name, "J").unwrap();
        assert_eq!(renders.get(), 1);

        let _ = form.update_field(Field::Message, "hi");
        assert_eq!(renders.get(), 1);

        block_on(form.submit(|_| async { Ok(()) }));
        // rejected: one render to show the errors
        assert_eq!(renders.get(), 2);

        fill_valid(&form);
        let before = renders.get();
        block_on(form.submit(|_| async { Ok(()) }));
        // submitting on, then settled
        assert_eq!(renders.get(), before + 2);
    }
}

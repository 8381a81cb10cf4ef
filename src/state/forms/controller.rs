//! Store creation form controller
//!
//! Owns the [`FormState`] and is the only code that mutates it. Network work
//! (domain checks, submission) runs in spawned tasks that report back as
//! [`FormEvent`]s; the UI loop feeds those into [`StoreFormController::handle_event`],
//! so every state transition happens on the loop.
//!
//! Ordering rules:
//! - each domain edit aborts the previous debounce timer and bumps a generation
//!   number; a timer message from an older generation is ignored
//! - a check result is applied only if the candidate it was issued for is
//!   still the current candidate

use super::field::{FieldKind, FormFieldId, FormFocus};
use super::form_state::{
    DomainStatus, FormState, MSG_DOMAIN_AVAILABLE, MSG_DOMAIN_CHECK_FAILED, MSG_DOMAIN_CONFLICT,
    MSG_DOMAIN_TAKEN, MSG_SUBMIT_FAILED,
};
use super::options::ChoiceOption;
use crate::api::{ApiError, CreateStoreRequest, CreateStoreResponse, DomainCheck, StorefrontApi};
use crate::config::{StorefrontConfig, SubmitSuccessPolicy};
use crate::state::{Category, Country, Currency};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Candidates at or below this length are never checked
const MAX_UNCHECKED_LEN: usize = 2;

/// Completion messages from spawned form tasks
#[derive(Debug)]
pub enum FormEvent {
    /// The debounce timer of `generation` ran out
    DebounceElapsed { generation: u64 },
    /// An availability check for `candidate` finished
    DomainChecked {
        candidate: String,
        result: Result<DomainCheck, ApiError>,
    },
    /// The store creation request finished
    SubmitFinished(Result<CreateStoreResponse, ApiError>),
}

/// What the surrounding app has to do after an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    /// The store exists; leave the form for the product listing
    StoreCreated,
    /// Show a non-field alert
    Alert(String),
}

/// Controller for the store creation screen
pub struct StoreFormController {
    state: FormState,
    api: Arc<dyn StorefrontApi>,
    debounce: Duration,
    success_policy: SubmitSuccessPolicy,
    timer: Option<JoinHandle<()>>,
    generation: u64,
    created: bool,
    tx: mpsc::UnboundedSender<FormEvent>,
    rx: mpsc::UnboundedReceiver<FormEvent>,
}

impl StoreFormController {
    pub fn new(api: Arc<dyn StorefrontApi>, config: &StorefrontConfig) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            state: FormState::new(),
            api,
            debounce: config.debounce(),
            success_policy: config.submit_success_policy,
            timer: None,
            generation: 0,
            created: false,
            tx,
            rx,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn set_store_name(&mut self, value: String) {
        self.state.store_name = value;
        self.state.validation_stale = true;
    }

    pub fn set_contact_email(&mut self, value: String) {
        self.state.contact_email = value;
        self.state.validation_stale = true;
    }

    pub fn set_country(&mut self, value: Country) {
        self.state.country = value;
        self.state.validation_stale = true;
    }

    pub fn set_category(&mut self, value: Category) {
        self.state.category = value;
        self.state.validation_stale = true;
    }

    pub fn set_currency(&mut self, value: Currency) {
        self.state.currency = value;
        self.state.validation_stale = true;
    }

    /// Update the subdomain and (re)schedule its availability check
    pub fn set_domain_candidate(&mut self, value: String) {
        self.state.domain_candidate = value;
        self.state.validation_stale = true;
        self.state.domain_message = None;
        self.cancel_timer();
        self.generation += 1;

        if self.state.domain_candidate.chars().count() <= MAX_UNCHECKED_LEN {
            self.state.domain_status = DomainStatus::Unchecked;
            return;
        }

        self.state.domain_status = DomainStatus::Pending;
        let tx = self.tx.clone();
        let generation = self.generation;
        let delay = self.debounce;
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(FormEvent::DebounceElapsed { generation });
        }));
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }

    /// Type a character into the focused text field, or cycle a focused choice on space
    pub fn input_char(&mut self, c: char) {
        let Some(field) = self.state.focus.field() else {
            return;
        };
        match field.kind() {
            FieldKind::Text => {
                let mut value = self.state.text(field).unwrap_or_default().to_string();
                value.push(c);
                self.set_text(field, value);
            }
            FieldKind::Choice if c == ' ' => self.cycle_choice(true),
            FieldKind::Choice => {}
        }
    }

    /// Delete the last character of the focused text field
    pub fn backspace(&mut self) {
        let Some(field) = self.state.focus.field() else {
            return;
        };
        if let Some(text) = self.state.text(field) {
            let mut value = text.to_string();
            if value.pop().is_some() {
                self.set_text(field, value);
            }
        }
    }

    fn set_text(&mut self, field: FormFieldId, value: String) {
        match field {
            FormFieldId::StoreName => self.set_store_name(value),
            FormFieldId::Domain => self.set_domain_candidate(value),
            FormFieldId::Email => self.set_contact_email(value),
            FormFieldId::Country | FormFieldId::Category | FormFieldId::Currency => {}
        }
    }

    /// Move the focused choice field to its next/previous option
    pub fn cycle_choice(&mut self, forward: bool) {
        fn step<T: ChoiceOption>(value: T, forward: bool) -> T {
            if forward {
                value.next()
            } else {
                value.prev()
            }
        }

        match self.state.focus.field() {
            Some(FormFieldId::Country) => self.set_country(step(self.state.country, forward)),
            Some(FormFieldId::Category) => self.set_category(step(self.state.category, forward)),
            Some(FormFieldId::Currency) => self.set_currency(step(self.state.currency, forward)),
            _ => {}
        }
    }

    pub fn focus_next(&mut self) {
        self.state.focus = self.state.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.state.focus = self.state.focus.prev();
    }

    pub fn set_focus(&mut self, focus: FormFocus) {
        self.state.focus = focus;
    }

    fn build_request(&self) -> CreateStoreRequest {
        CreateStoreRequest {
            name: self.state.store_name.clone(),
            currency: self.state.currency,
            country: self.state.country,
            domain: self.state.domain_candidate.clone(),
            category: self.state.category,
            email: self.state.contact_email.clone(),
        }
    }

    /// Validate and, if everything passes, start the store creation request.
    ///
    /// Returns true if a request was started. Does nothing while the submit
    /// control is disabled (domain not available, or a request in flight).
    pub fn submit(&mut self) -> bool {
        if self.created || !self.state.can_submit() {
            return false;
        }
        if !self.state.validate() {
            tracing::debug!(
                "Store form validation failed: {:?}",
                self.state.validation_errors
            );
            return false;
        }

        self.state.is_submitting = true;
        let request = self.build_request();
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();

        tokio::spawn(async move {
            // Run the request in its own task so a panic still reports completion
            let request_task = tokio::spawn(async move { api.create_store(&request).await });
            let result = match request_task.await {
                Ok(result) => result,
                Err(join_err) => Err(ApiError::UnexpectedResponse(format!(
                    "store creation task failed: {join_err}"
                ))),
            };
            let _ = tx.send(FormEvent::SubmitFinished(result));
        });
        true
    }

    /// Drain completed work without waiting. Called once per UI tick.
    pub fn poll_events(&mut self) -> Vec<FormOutcome> {
        let mut outcomes = Vec::new();
        while let Ok(event) = self.rx.try_recv() {
            outcomes.extend(self.handle_event(event));
        }
        outcomes
    }

    /// Wait for the next completion
    #[cfg(test)]
    pub async fn next_event(&mut self) -> Option<FormEvent> {
        self.rx.recv().await
    }

    /// Apply a completion to the form state
    pub fn handle_event(&mut self, event: FormEvent) -> Option<FormOutcome> {
        match event {
            FormEvent::DebounceElapsed { generation } => {
                if generation == self.generation {
                    self.timer = None;
                    self.spawn_domain_check();
                }
                None
            }
            FormEvent::DomainChecked { candidate, result } => {
                self.apply_domain_check(candidate, result);
                None
            }
            FormEvent::SubmitFinished(result) => self.apply_submit_result(result),
        }
    }

    fn spawn_domain_check(&mut self) {
        let candidate = self.state.domain_candidate.clone();
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        tracing::debug!("Domain check issued for {candidate:?}");

        tokio::spawn(async move {
            let result = api.check_domain(&candidate).await;
            let _ = tx.send(FormEvent::DomainChecked { candidate, result });
        });
    }

    fn apply_domain_check(&mut self, candidate: String, result: Result<DomainCheck, ApiError>) {
        if candidate != self.state.domain_candidate {
            tracing::debug!("Discarding stale domain check for {candidate:?}");
            return;
        }

        let (status, message) = match result {
            Ok(DomainCheck { taken: false }) => (DomainStatus::Available, MSG_DOMAIN_AVAILABLE),
            Ok(DomainCheck { taken: true }) => (DomainStatus::Taken, MSG_DOMAIN_TAKEN),
            Err(e) => {
                tracing::warn!("Domain check for {candidate:?} failed: {e}");
                (DomainStatus::Error, MSG_DOMAIN_CHECK_FAILED)
            }
        };
        self.state.domain_status = status;
        self.state.domain_message = Some(message.to_string());
    }

    fn apply_submit_result(
        &mut self,
        result: Result<CreateStoreResponse, ApiError>,
    ) -> Option<FormOutcome> {
        self.state.is_submitting = false;

        match result {
            Ok(response) if self.success_policy.is_success(&response) => {
                if self.created {
                    return None;
                }
                self.created = true;
                tracing::info!("Store {:?} created", self.state.store_name);
                Some(FormOutcome::StoreCreated)
            }
            Ok(response) => {
                tracing::warn!("Store creation was not confirmed: {response:?}");
                Some(FormOutcome::Alert(MSG_SUBMIT_FAILED.to_string()))
            }
            Err(e) if e.is_conflict() => {
                tracing::info!(
                    "Domain {:?} was claimed before submission",
                    self.state.domain_candidate
                );
                self.state
                    .validation_errors
                    .insert(FormFieldId::Domain, MSG_DOMAIN_CONFLICT.to_string());
                None
            }
            Err(e) => {
                tracing::warn!("Store creation failed: {e}");
                Some(FormOutcome::Alert(MSG_SUBMIT_FAILED.to_string()))
            }
        }
    }
}

impl Drop for StoreFormController {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockStorefrontApi;
    use crate::state::Product;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::sync::Mutex;

    const DEBOUNCE: Duration = Duration::from_millis(600);

    fn controller(api: impl StorefrontApi + 'static) -> StoreFormController {
        StoreFormController::new(Arc::new(api), &StorefrontConfig::default())
    }

    fn controller_with_policy(
        api: impl StorefrontApi + 'static,
        policy: SubmitSuccessPolicy,
    ) -> StoreFormController {
        let config = StorefrontConfig {
            submit_success_policy: policy,
            ..Default::default()
        };
        StoreFormController::new(Arc::new(api), &config)
    }

    /// Process events until nothing arrives for a while (virtual time)
    async fn settle(form: &mut StoreFormController) -> Vec<FormOutcome> {
        let mut outcomes = Vec::new();
        while let Ok(Some(event)) =
            tokio::time::timeout(Duration::from_secs(5), form.next_event()).await
        {
            outcomes.extend(form.handle_event(event));
        }
        outcomes
    }

    fn mock_available() -> MockStorefrontApi {
        let mut api = MockStorefrontApi::new();
        api.expect_check_domain()
            .returning(|_| Ok(DomainCheck { taken: false }));
        api
    }

    async fn fill_valid(form: &mut StoreFormController) {
        form.set_store_name("My Shop".into());
        form.set_contact_email("owner@shop.com".into());
        form.set_domain_candidate("shop1".into());
        settle(form).await;
        assert_eq!(form.state().domain_status, DomainStatus::Available);
    }

    fn success_response() -> CreateStoreResponse {
        CreateStoreResponse {
            http_status: 200,
            status: Some(200),
            success: Some(true),
            ..Default::default()
        }
    }

    /// Fake whose domain checks take a per-candidate time
    struct SlowDomainApi {
        delays: HashMap<&'static str, (Duration, bool)>,
        calls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl StorefrontApi for SlowDomainApi {
        async fn check_domain(&self, candidate: &str) -> Result<DomainCheck, ApiError> {
            self.calls.lock().unwrap().push(candidate.to_string());
            let (delay, taken) = self.delays.get(candidate).copied().unwrap_or_default();
            tokio::time::sleep(delay).await;
            Ok(DomainCheck { taken })
        }

        async fn create_store(
            &self,
            _request: &CreateStoreRequest,
        ) -> Result<CreateStoreResponse, ApiError> {
            unimplemented!()
        }

        async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
            unimplemented!()
        }

        async fn find_product(&self, _id: &str) -> Result<Product, ApiError> {
            unimplemented!()
        }
    }

    /// Fake whose store creation panics mid-request
    struct PanickingStoreApi;

    #[async_trait]
    impl StorefrontApi for PanickingStoreApi {
        async fn check_domain(&self, _candidate: &str) -> Result<DomainCheck, ApiError> {
            Ok(DomainCheck { taken: false })
        }

        async fn create_store(
            &self,
            _request: &CreateStoreRequest,
        ) -> Result<CreateStoreResponse, ApiError> {
            panic!("connection pool poisoned")
        }

        async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
            unimplemented!()
        }

        async fn find_product(&self, _id: &str) -> Result<Product, ApiError> {
            unimplemented!()
        }
    }

    mod domain_check {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test(start_paused = true)]
        async fn test_short_candidates_never_checked() {
            let mut api = MockStorefrontApi::new();
            api.expect_check_domain().never();
            let mut form = controller(api);

            for value in ["", "a", "ab", "éé"] {
                form.set_domain_candidate(value.into());
                settle(&mut form).await;
                assert_eq!(form.state().domain_status, DomainStatus::Unchecked);
                assert!(form.state().domain_message.is_none());
            }
        }

        #[tokio::test(start_paused = true)]
        async fn test_rapid_edits_fire_one_check_for_last_value() {
            let mut api = MockStorefrontApi::new();
            api.expect_check_domain()
                .times(1)
                .withf(|candidate| candidate == "shop1")
                .returning(|_| Ok(DomainCheck { taken: false }));
            let mut form = controller(api);

            for value in ["sho", "shop", "shop1"] {
                form.set_domain_candidate(value.into());
                tokio::time::advance(Duration::from_millis(200)).await;
            }
            settle(&mut form).await;

            assert_eq!(form.state().domain_status, DomainStatus::Available);
        }

        #[tokio::test(start_paused = true)]
        async fn test_check_waits_for_debounce() {
            let mut api = MockStorefrontApi::new();
            api.expect_check_domain()
                .times(1)
                .returning(|_| Ok(DomainCheck { taken: false }));
            let mut form = controller(api);

            form.set_domain_candidate("shop1".into());
            assert_eq!(form.state().domain_status, DomainStatus::Pending);

            tokio::time::advance(DEBOUNCE - Duration::from_millis(1)).await;
            assert!(form.poll_events().is_empty());
            assert_eq!(form.state().domain_status, DomainStatus::Pending);

            settle(&mut form).await;
            assert_eq!(form.state().domain_status, DomainStatus::Available);
        }

        #[tokio::test(start_paused = true)]
        async fn test_available_domain() {
            let mut form = controller(mock_available());
            form.set_domain_candidate("shop1".into());
            settle(&mut form).await;

            assert_eq!(form.state().domain_status, DomainStatus::Available);
            assert_eq!(
                form.state().domain_message.as_deref(),
                Some("Domain is available.")
            );
        }

        #[tokio::test(start_paused = true)]
        async fn test_taken_domain() {
            let mut api = MockStorefrontApi::new();
            api.expect_check_domain()
                .returning(|_| Ok(DomainCheck { taken: true }));
            let mut form = controller(api);
            form.set_domain_candidate("shop1".into());
            settle(&mut form).await;

            assert_eq!(form.state().domain_status, DomainStatus::Taken);
            assert_eq!(
                form.state().domain_message.as_deref(),
                Some("Domain already taken. Please try another.")
            );
            assert!(!form.state().can_submit());
        }

        #[tokio::test(start_paused = true)]
        async fn test_check_failure_sets_error() {
            let mut api = MockStorefrontApi::new();
            api.expect_check_domain().returning(|_| {
                Err(ApiError::Status {
                    status: 502,
                    body: String::new(),
                })
            });
            let mut form = controller(api);
            form.set_domain_candidate("shop1".into());
            settle(&mut form).await;

            assert_eq!(form.state().domain_status, DomainStatus::Error);
            assert_eq!(
                form.state().domain_message.as_deref(),
                Some(MSG_DOMAIN_CHECK_FAILED)
            );
        }

        #[tokio::test(start_paused = true)]
        async fn test_shortening_cancels_pending_check() {
            let mut api = MockStorefrontApi::new();
            api.expect_check_domain().never();
            let mut form = controller(api);

            form.set_domain_candidate("shop".into());
            tokio::time::advance(Duration::from_millis(300)).await;
            form.set_domain_candidate("sh".into());
            settle(&mut form).await;

            assert_eq!(form.state().domain_status, DomainStatus::Unchecked);
        }

        #[tokio::test(start_paused = true)]
        async fn test_editing_resets_previous_result() {
            let mut form = controller(mock_available());
            form.set_domain_candidate("shop1".into());
            settle(&mut form).await;
            assert!(form.state().can_submit());

            form.set_domain_candidate("shop12".into());
            assert_eq!(form.state().domain_status, DomainStatus::Pending);
            assert!(form.state().domain_message.is_none());
            assert!(!form.state().can_submit());
        }

        #[tokio::test(start_paused = true)]
        async fn test_stale_result_is_discarded() {
            let mut api = MockStorefrontApi::new();
            api.expect_check_domain().never();
            let mut form = controller(api);
            form.set_domain_candidate("shop12".into());

            let outcome = form.handle_event(FormEvent::DomainChecked {
                candidate: "shop1".into(),
                result: Ok(DomainCheck { taken: true }),
            });

            assert!(outcome.is_none());
            assert_eq!(form.state().domain_status, DomainStatus::Pending);
            assert!(form.state().domain_message.is_none());
        }

        #[tokio::test(start_paused = true)]
        async fn test_slow_stale_response_does_not_overwrite_newer_one() {
            let api = SlowDomainApi {
                delays: HashMap::from([
                    ("shop1", (Duration::from_secs(2), true)),
                    ("shop12", (Duration::from_millis(10), false)),
                ]),
                calls: Mutex::new(Vec::new()),
            };
            let api = Arc::new(api);
            let mut form = StoreFormController::new(api.clone(), &StorefrontConfig::default());

            // First check goes out and stays in flight for 2s
            form.set_domain_candidate("shop1".into());
            let event = form.next_event().await.unwrap();
            assert!(matches!(event, FormEvent::DebounceElapsed { .. }));
            form.handle_event(event);

            form.set_domain_candidate("shop12".into());
            settle(&mut form).await;

            assert_eq!(*api.calls.lock().unwrap(), vec!["shop1", "shop12"]);
            assert_eq!(form.state().domain_status, DomainStatus::Available);
            assert_eq!(
                form.state().domain_message.as_deref(),
                Some(MSG_DOMAIN_AVAILABLE)
            );
        }

        #[tokio::test(start_paused = true)]
        async fn test_old_timer_message_is_ignored() {
            let mut api = MockStorefrontApi::new();
            api.expect_check_domain().never();
            let mut form = controller(api);
            form.set_domain_candidate("shop1".into());
            form.set_domain_candidate("shop12".into());

            // A timer message from the first edit that was already queued
            form.handle_event(FormEvent::DebounceElapsed { generation: 1 });
            assert!(form.poll_events().is_empty());
            assert_eq!(form.state().domain_status, DomainStatus::Pending);
        }
    }

    mod input {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test(start_paused = true)]
        async fn test_typing_into_focused_fields() {
            let mut form = controller(mock_available());
            for c in "Shop".chars() {
                form.input_char(c);
            }
            form.backspace();
            assert_eq!(form.state().store_name, "Sho");

            form.set_focus(FormFocus::Field(FormFieldId::Email));
            for c in "a@b.co".chars() {
                form.input_char(c);
            }
            assert_eq!(form.state().contact_email, "a@b.co");
            assert!(form.state().validation_stale);
        }

        #[tokio::test(start_paused = true)]
        async fn test_typing_domain_schedules_check() {
            let mut form = controller(mock_available());
            form.set_focus(FormFocus::Field(FormFieldId::Domain));
            for c in "shop".chars() {
                form.input_char(c);
            }
            assert_eq!(form.state().domain_status, DomainStatus::Pending);
            form.backspace();
            form.backspace();
            assert_eq!(form.state().domain_status, DomainStatus::Unchecked);
        }

        #[tokio::test]
        async fn test_choice_fields_cycle() {
            let mut form = controller(MockStorefrontApi::new());
            form.set_focus(FormFocus::Field(FormFieldId::Category));
            form.cycle_choice(true);
            assert_eq!(form.state().category, Category::Electronics);
            form.input_char(' ');
            assert_eq!(form.state().category, Category::Food);
            form.cycle_choice(false);
            assert_eq!(form.state().category, Category::Electronics);

            form.set_focus(FormFocus::Field(FormFieldId::Country));
            form.input_char('x');
            assert_eq!(form.state().country, Country::Bangladesh);
            form.cycle_choice(true);
            assert_eq!(form.state().country, Country::Usa);
        }

        #[tokio::test]
        async fn test_input_on_submit_button_is_ignored() {
            let mut form = controller(MockStorefrontApi::new());
            form.set_focus(FormFocus::SubmitButton);
            form.input_char('x');
            form.backspace();
            assert_eq!(form.state().store_name, "");
        }

        #[tokio::test]
        async fn test_focus_navigation() {
            let mut form = controller(MockStorefrontApi::new());
            form.focus_next();
            assert_eq!(form.state().focus, FormFocus::Field(FormFieldId::Domain));
            form.focus_prev();
            form.focus_prev();
            assert_eq!(form.state().focus, FormFocus::SubmitButton);
        }
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test(start_paused = true)]
        async fn test_disabled_unless_domain_available() {
            let mut api = MockStorefrontApi::new();
            api.expect_check_domain().returning(|_| {
                Err(ApiError::UnexpectedResponse("down".into()))
            });
            api.expect_create_store().never();
            let mut form = controller(api);
            form.set_store_name("My Shop".into());
            form.set_contact_email("owner@shop.com".into());

            form.set_domain_candidate("shop1".into());
            assert!(!form.submit(), "pending check must block submission");

            settle(&mut form).await;
            assert_eq!(form.state().domain_status, DomainStatus::Error);
            assert!(!form.submit(), "failed check must block submission");
            assert!(!form.state().is_submitting);
        }

        #[tokio::test(start_paused = true)]
        async fn test_short_store_name_blocks_submission() {
            let mut api = mock_available();
            api.expect_create_store().never();
            let mut form = controller(api);
            fill_valid(&mut form).await;
            form.set_store_name("ab".into());

            assert!(!form.submit());
            assert_eq!(
                form.state().error(FormFieldId::StoreName),
                Some("Store name must be at least 3 characters long")
            );
            assert!(!form.state().is_submitting);
        }

        #[tokio::test(start_paused = true)]
        async fn test_success_navigates_once() {
            let mut api = mock_available();
            api.expect_create_store()
                .times(1)
                .withf(|request| {
                    request.name == "My Shop"
                        && request.domain == "shop1"
                        && request.email == "owner@shop.com"
                        && request.country == Country::Bangladesh
                        && request.category == Category::Fashion
                        && request.currency == Currency::Bdt
                })
                .returning(|_| Ok(success_response()));
            let mut form = controller(api);
            fill_valid(&mut form).await;

            assert!(form.submit());
            assert!(form.state().is_submitting);
            assert!(!form.submit(), "second submit while in flight is ignored");

            let outcomes = settle(&mut form).await;
            assert_eq!(outcomes, vec![FormOutcome::StoreCreated]);
            assert!(!form.state().is_submitting);
            assert!(!form.submit(), "no resubmission after success");
        }

        #[tokio::test(start_paused = true)]
        async fn test_conflict_sets_domain_error() {
            let mut api = mock_available();
            api.expect_create_store()
                .times(1)
                .returning(|_| Err(ApiError::Conflict));
            let mut form = controller(api);
            fill_valid(&mut form).await;

            assert!(form.submit());
            let outcomes = settle(&mut form).await;

            assert!(outcomes.is_empty());
            assert!(!form.state().is_submitting);
            assert_eq!(
                form.state().error(FormFieldId::Domain),
                Some("This domain is already taken. Try a different one.")
            );
        }

        #[tokio::test(start_paused = true)]
        async fn test_generic_failure_alerts() {
            let mut api = mock_available();
            api.expect_create_store().times(1).returning(|_| {
                Err(ApiError::Status {
                    status: 500,
                    body: "oops".into(),
                })
            });
            let mut form = controller(api);
            fill_valid(&mut form).await;

            assert!(form.submit());
            let outcomes = settle(&mut form).await;

            assert_eq!(
                outcomes,
                vec![FormOutcome::Alert(MSG_SUBMIT_FAILED.to_string())]
            );
            assert!(!form.state().is_submitting);
            assert!(form.state().validation_errors.is_empty());
        }

        #[tokio::test(start_paused = true)]
        async fn test_failure_allows_resubmission() {
            let mut api = mock_available();
            let mut attempts = 0;
            api.expect_create_store().times(2).returning(move |_| {
                attempts += 1;
                if attempts == 1 {
                    Err(ApiError::UnexpectedResponse("flaky".into()))
                } else {
                    Ok(success_response())
                }
            });
            let mut form = controller(api);
            fill_valid(&mut form).await;

            assert!(form.submit());
            settle(&mut form).await;
            assert!(form.submit());
            assert_eq!(settle(&mut form).await, vec![FormOutcome::StoreCreated]);
        }

        #[tokio::test(start_paused = true)]
        async fn test_panicking_request_still_resets_submitting() {
            let mut form = controller(PanickingStoreApi);
            fill_valid(&mut form).await;

            assert!(form.submit());
            let outcomes = settle(&mut form).await;

            assert!(!form.state().is_submitting);
            assert!(matches!(outcomes.as_slice(), [FormOutcome::Alert(_)]));
        }

        #[tokio::test(start_paused = true)]
        async fn test_body_flag_policy_rejects_unconfirmed_response() {
            let mut api = mock_available();
            api.expect_create_store().returning(|_| {
                Ok(CreateStoreResponse {
                    http_status: 200,
                    status: Some(200),
                    success: Some(false),
                    ..Default::default()
                })
            });
            let mut form = controller_with_policy(api, SubmitSuccessPolicy::BodyFlag);
            fill_valid(&mut form).await;

            assert!(form.submit());
            let outcomes = settle(&mut form).await;
            assert_eq!(
                outcomes,
                vec![FormOutcome::Alert(MSG_SUBMIT_FAILED.to_string())]
            );
        }

        #[tokio::test(start_paused = true)]
        async fn test_body_flag_policy_accepts_confirmed_response() {
            let mut api = mock_available();
            api.expect_create_store()
                .returning(|_| Ok(success_response()));
            let mut form = controller_with_policy(api, SubmitSuccessPolicy::BodyFlag);
            fill_valid(&mut form).await;

            assert!(form.submit());
            assert_eq!(settle(&mut form).await, vec![FormOutcome::StoreCreated]);
        }
    }
}

//! Conversation Controller
//!
//! Owns everything the chat view renders: the active session, the two input
//! fields, the displayed history, the exchange status, the last error and the
//! conversation index. The view calls into it for every user action and
//! re-renders from its accessors.
//!
//! An exchange runs in two halves so the caller can keep its own loop alive
//! while the request is in flight:
//!
//! ```text
//! begin_submit() / begin_load()  ──> PendingExchange ──> SessionClient::exchange()
//!                                                             │
//! complete(pending, result)  <────────────────────────────────┘
//! ```
//!
//! [`ConversationController::submit_turn`] and
//! [`ConversationController::load_conversation`] chain both halves for callers
//! that can simply await.

use crate::ports::conversation_index_store::ConversationIndexStore;
use crate::ports::session_client::{ExchangeError, SessionClient};
use dirchat_domain::{
    ConversationHistory, ConversationIndex, SessionExchangeRequest, SessionExchangeResponse,
    StoredConversationRecord, UpsertOutcome,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Message shown when a first turn has neither prompt nor directory
pub const VALIDATION_MESSAGE: &str =
    "Please provide a prompt and/or a directory path to start or continue.";

/// Errors returned by controller operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ControllerError {
    /// Rejected locally, no request was sent
    #[error("{0}")]
    Validation(String),

    /// Another exchange is still in flight
    #[error("An exchange is already in progress")]
    Busy,

    #[error(transparent)]
    Exchange(#[from] ExchangeError),
}

/// Which input field an edit targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    DirectoryPath,
    Prompt,
}

/// Exchange state machine.
///
/// New exchanges start only from `Idle`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ExchangeStatus {
    #[default]
    Idle,
    /// A user turn is being sent
    Submitting,
    /// The history of `target` is being fetched
    Loading { target: String },
}

impl ExchangeStatus {
    pub fn is_idle(&self) -> bool {
        matches!(self, ExchangeStatus::Idle)
    }
}

/// What an in-flight exchange was started for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExchangeKind {
    Submit,
    Load { target: String },
}

/// Ticket for an exchange started by `begin_submit` / `begin_load`.
///
/// Hand it back to [`ConversationController::complete`] together with the
/// client's result.
#[derive(Debug, Clone)]
pub struct PendingExchange {
    generation: u64,
    kind: ExchangeKind,
    request: SessionExchangeRequest,
}

impl PendingExchange {
    pub fn request(&self) -> &SessionExchangeRequest {
        &self.request
    }

    pub fn kind(&self) -> &ExchangeKind {
        &self.kind
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Result of [`ConversationController::complete`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// The response replaced the displayed state
    Applied,
    /// The exchange failed; the message is now the controller's error
    Failed(ExchangeError),
    /// The ticket no longer matches the in-flight exchange; nothing changed
    Stale,
}

/// Controller for one chat view
pub struct ConversationController<S: SessionClient + 'static, P: ConversationIndexStore + 'static>
{
    client: Arc<S>,
    store: Arc<P>,
    active_session_id: Option<String>,
    directory_path: String,
    prompt: String,
    history: ConversationHistory,
    status: ExchangeStatus,
    error: Option<String>,
    index: ConversationIndex,
    /// Bumped by every `begin_*`; tickets from older exchanges are stale
    generation: u64,
}

impl<S: SessionClient + 'static, P: ConversationIndexStore + 'static> ConversationController<S, P> {
    /// Create a controller, reading the conversation index from `store`
    pub fn new(client: Arc<S>, store: Arc<P>) -> Self {
        let index = ConversationIndex::from_records(store.load());
        info!("Loaded {} stored conversations", index.len());

        Self {
            client,
            store,
            active_session_id: None,
            directory_path: String::new(),
            prompt: String::new(),
            history: ConversationHistory::default(),
            status: ExchangeStatus::Idle,
            error: None,
            index,
            generation: 0,
        }
    }

    // -- State accessors --

    pub fn client(&self) -> Arc<S> {
        Arc::clone(&self.client)
    }

    pub fn active_session_id(&self) -> Option<&str> {
        self.active_session_id.as_deref()
    }

    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    pub fn records(&self) -> &[StoredConversationRecord] {
        self.index.records()
    }

    pub fn status(&self) -> &ExchangeStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        !self.status.is_idle()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn directory_path(&self) -> &str {
        &self.directory_path
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Mutable access to an input field; `None` while an exchange is in flight
    pub fn input_mut(&mut self, field: InputField) -> Option<&mut String> {
        if self.is_loading() {
            return None;
        }
        Some(match field {
            InputField::DirectoryPath => &mut self.directory_path,
            InputField::Prompt => &mut self.prompt,
        })
    }

    /// Replace an input field. Returns `false` (and changes nothing) while loading.
    pub fn set_input(&mut self, field: InputField, value: impl Into<String>) -> bool {
        match self.input_mut(field) {
            Some(input) => {
                *input = value.into();
                true
            }
            None => false,
        }
    }

    /// Whether the submit control should be enabled
    pub fn can_submit(&self) -> bool {
        !self.is_loading() && !self.is_empty_first_turn()
    }

    fn is_empty_first_turn(&self) -> bool {
        self.prompt.trim().is_empty()
            && self.directory_path.trim().is_empty()
            && self.history.is_empty()
    }

    // -- Exchange lifecycle --

    /// Validate the inputs and start a user turn.
    ///
    /// An empty prompt is allowed to continue an existing conversation; a
    /// first turn needs a prompt or a directory path.
    pub fn begin_submit(&mut self) -> Result<PendingExchange, ControllerError> {
        if self.is_loading() {
            return Err(ControllerError::Busy);
        }

        if self.is_empty_first_turn() {
            self.error = Some(VALIDATION_MESSAGE.to_string());
            return Err(ControllerError::Validation(VALIDATION_MESSAGE.to_string()));
        }

        let request = SessionExchangeRequest::turn(
            self.active_session_id.as_deref(),
            &self.directory_path,
            &self.prompt,
        );

        debug!(
            new_session = request.starts_new_session(),
            with_directory = request.directory_path.is_some(),
            "Starting submit"
        );

        self.status = ExchangeStatus::Submitting;
        Ok(self.start(ExchangeKind::Submit, request))
    }

    /// Start fetching the history of `target`.
    ///
    /// Returns `None` (no request, no state change) while another exchange is
    /// in flight or when `target` is already the active session.
    pub fn begin_load(&mut self, target: &str) -> Option<PendingExchange> {
        if self.is_loading() {
            debug!("Ignoring load of {} while busy", target);
            return None;
        }
        if self.active_session_id.as_deref() == Some(target) {
            debug!("Conversation {} is already active", target);
            return None;
        }

        self.status = ExchangeStatus::Loading {
            target: target.to_string(),
        };
        Some(self.start(
            ExchangeKind::Load {
                target: target.to_string(),
            },
            SessionExchangeRequest::fetch_history(target),
        ))
    }

    fn start(&mut self, kind: ExchangeKind, request: SessionExchangeRequest) -> PendingExchange {
        self.error = None;
        self.generation += 1;
        PendingExchange {
            generation: self.generation,
            kind,
            request,
        }
    }

    /// Apply the client's result for `pending`.
    ///
    /// Results for a ticket that is not the current in-flight exchange are
    /// discarded.
    pub fn complete(
        &mut self,
        pending: PendingExchange,
        result: Result<SessionExchangeResponse, ExchangeError>,
    ) -> Completion {
        if self.status.is_idle() || pending.generation != self.generation {
            debug!(
                ticket = pending.generation,
                current = self.generation,
                "Discarding stale exchange result"
            );
            return Completion::Stale;
        }

        self.status = ExchangeStatus::Idle;

        match (pending.kind, result) {
            (ExchangeKind::Submit, Ok(response)) => {
                self.apply_turn(response);
                Completion::Applied
            }
            (ExchangeKind::Submit, Err(e)) => {
                warn!("Submit failed: {}", e);
                self.error = Some(e.to_string());
                Completion::Failed(e)
            }
            (ExchangeKind::Load { target }, Ok(response)) => {
                info!(
                    "Loaded conversation {} ({} turns)",
                    target,
                    response.full_conversation_history.len()
                );
                self.active_session_id = Some(response.session_id);
                self.history = response.full_conversation_history;
                self.directory_path.clear();
                self.prompt.clear();
                Completion::Applied
            }
            (ExchangeKind::Load { target }, Err(e)) => {
                warn!("Loading conversation {} failed: {}", target, e);
                self.error = Some(format!("Failed to load conversation: {}", e));
                Completion::Failed(e)
            }
        }
    }

    fn apply_turn(&mut self, response: SessionExchangeResponse) {
        let SessionExchangeResponse {
            session_id,
            full_conversation_history,
            ..
        } = response;

        let outcome = self.index.upsert(&session_id, &full_conversation_history);
        match outcome {
            UpsertOutcome::Appended => info!("New conversation {}", session_id),
            UpsertOutcome::Updated { position } => {
                debug!("Updated conversation {} at {}", session_id, position)
            }
        }
        self.store.save(self.index.records());

        self.active_session_id = Some(session_id);
        self.history = full_conversation_history;
        self.prompt.clear();
    }

    /// Reset to the initial state without contacting the endpoint.
    ///
    /// Returns `false` (no-op) while an exchange is in flight.
    pub fn start_new_conversation(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }

        self.active_session_id = None;
        self.history = ConversationHistory::default();
        self.directory_path.clear();
        self.prompt.clear();
        self.error = None;
        info!("Ready to start a new conversation");
        true
    }

    // -- Awaiting conveniences --

    /// Send the current inputs as one turn and apply the response
    pub async fn submit_turn(&mut self) -> Result<(), ControllerError> {
        let pending = self.begin_submit()?;
        let result = self.client.exchange(pending.request()).await;
        match self.complete(pending, result) {
            Completion::Failed(e) => Err(e.into()),
            Completion::Applied | Completion::Stale => Ok(()),
        }
    }

    /// Fetch and display the history of `target`
    pub async fn load_conversation(&mut self, target: &str) -> Result<(), ControllerError> {
        let Some(pending) = self.begin_load(target) else {
            return Ok(());
        };
        let result = self.client.exchange(pending.request()).await;
        match self.complete(pending, result) {
            Completion::Failed(e) => Err(e.into()),
            Completion::Applied | Completion::Stale => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use dirchat_domain::{ConversationTurn, SessionExchangeResponse};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    struct MockClient {
        responses: Mutex<VecDeque<Result<SessionExchangeResponse, ExchangeError>>>,
        requests: Mutex<Vec<SessionExchangeRequest>>,
    }

    impl MockClient {
        fn new(responses: Vec<Result<SessionExchangeResponse, ExchangeError>>) -> Self {
            Self {
                responses: Mutex::new(VecDeque::from(responses)),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<SessionExchangeRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SessionClient for MockClient {
        async fn exchange(
            &self,
            request: &SessionExchangeRequest,
        ) -> Result<SessionExchangeResponse, ExchangeError> {
            self.requests.lock().unwrap().push(request.clone());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(ExchangeError::Network("no more responses".to_string())))
        }
    }

    #[derive(Default)]
    struct RecordingStore {
        initial: Vec<StoredConversationRecord>,
        saved: Mutex<Vec<Vec<StoredConversationRecord>>>,
    }

    impl RecordingStore {
        fn with(initial: Vec<StoredConversationRecord>) -> Self {
            Self {
                initial,
                saved: Mutex::new(Vec::new()),
            }
        }

        fn saves(&self) -> Vec<Vec<StoredConversationRecord>> {
            self.saved.lock().unwrap().clone()
        }
    }

    impl ConversationIndexStore for RecordingStore {
        fn load(&self) -> Vec<StoredConversationRecord> {
            self.initial.clone()
        }

        fn save(&self, records: &[StoredConversationRecord]) {
            self.saved.lock().unwrap().push(records.to_vec());
        }
    }

    fn response(id: &str, turns: Vec<ConversationTurn>) -> SessionExchangeResponse {
        SessionExchangeResponse {
            session_id: id.to_string(),
            model_response: turns
                .last()
                .and_then(|t| t.first_text())
                .unwrap_or_default()
                .to_string(),
            full_conversation_history: ConversationHistory::new(turns),
        }
    }

    fn controller(
        responses: Vec<Result<SessionExchangeResponse, ExchangeError>>,
        records: Vec<StoredConversationRecord>,
    ) -> (
        ConversationController<MockClient, RecordingStore>,
        Arc<MockClient>,
        Arc<RecordingStore>,
    ) {
        let client = Arc::new(MockClient::new(responses));
        let store = Arc::new(RecordingStore::with(records));
        let controller = ConversationController::new(client.clone(), store.clone());
        (controller, client, store)
    }

    // ==================== Submit ====================

    #[tokio::test]
    async fn test_first_prompt_scenario() {
        let (mut controller, client, store) = controller(
            vec![Ok(response(
                "abc",
                vec![ConversationTurn::user("Hello"), ConversationTurn::model("Hi")],
            ))],
            vec![],
        );
        controller.set_input(InputField::Prompt, "Hello");

        controller.submit_turn().await.unwrap();

        assert_eq!(
            client.requests(),
            vec![SessionExchangeRequest {
                session_id: None,
                directory_path: None,
                current_prompt: "Hello".to_string(),
            }]
        );
        assert_eq!(
            controller.records(),
            &[StoredConversationRecord::new("abc", "Hello...")]
        );
        assert_eq!(controller.history().len(), 2);
        assert_eq!(controller.active_session_id(), Some("abc"));
        assert_eq!(store.saves().last().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_submit_clears_prompt_but_keeps_directory() {
        let (mut controller, client, _store) = controller(
            vec![Ok(response("abc", vec![ConversationTurn::user("q")]))],
            vec![],
        );
        controller.set_input(InputField::DirectoryPath, " ./src ");
        controller.set_input(InputField::Prompt, "  summarize  ");

        controller.submit_turn().await.unwrap();

        let requests = client.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].current_prompt, "summarize");
        assert_eq!(requests[0].directory_path.as_deref(), Some("./src"));
        assert_eq!(controller.prompt(), "");
        assert_eq!(controller.directory_path(), " ./src ");
        assert!(!controller.is_loading());
    }

    #[tokio::test]
    async fn test_follow_up_reuses_session_and_updates_title_in_place() {
        let (mut controller, client, _store) = controller(
            vec![
                Ok(response("b", vec![ConversationTurn::user("first")])),
                Ok(response(
                    "b",
                    vec![
                        ConversationTurn::user("first"),
                        ConversationTurn::model("ok"),
                        ConversationTurn::user("second"),
                    ],
                )),
            ],
            vec![
                StoredConversationRecord::new("a", "A..."),
                StoredConversationRecord::new("b", "stale title"),
                StoredConversationRecord::new("c", "C..."),
            ],
        );

        controller.set_input(InputField::Prompt, "first");
        controller.submit_turn().await.unwrap();
        controller.set_input(InputField::Prompt, "second");
        controller.submit_turn().await.unwrap();

        let requests = client.requests();
        assert_eq!(requests[1].session_id.as_deref(), Some("b"));
        let ids: Vec<_> = controller.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(controller.records()[1].title, "first...");
    }

    #[tokio::test]
    async fn test_empty_first_turn_is_rejected_locally() {
        let (mut controller, client, store) = controller(vec![], vec![]);
        controller.set_input(InputField::Prompt, "   ");

        let result = controller.submit_turn().await;

        assert_eq!(
            result,
            Err(ControllerError::Validation(VALIDATION_MESSAGE.to_string()))
        );
        assert!(client.requests().is_empty());
        assert!(store.saves().is_empty());
        assert_eq!(controller.error(), Some(VALIDATION_MESSAGE));
        assert!(!controller.is_loading());
    }

    #[tokio::test]
    async fn test_directory_only_first_turn_is_allowed() {
        let (mut controller, client, _store) = controller(
            vec![Ok(response("abc", vec![ConversationTurn::user("files")]))],
            vec![],
        );
        controller.set_input(InputField::DirectoryPath, "/tmp/project");

        controller.submit_turn().await.unwrap();

        assert_eq!(client.requests()[0].current_prompt, "");
        assert_eq!(
            client.requests()[0].directory_path.as_deref(),
            Some("/tmp/project")
        );
    }

    #[tokio::test]
    async fn test_empty_prompt_continues_existing_conversation() {
        let (mut controller, client, _store) = controller(
            vec![
                Ok(response("abc", vec![ConversationTurn::user("Hello")])),
                Ok(response(
                    "abc",
                    vec![ConversationTurn::user("Hello"), ConversationTurn::model("more")],
                )),
            ],
            vec![],
        );
        controller.set_input(InputField::Prompt, "Hello");
        controller.submit_turn().await.unwrap();

        assert!(controller.can_submit());
        controller.submit_turn().await.unwrap();

        assert_eq!(client.requests().len(), 2);
        assert_eq!(client.requests()[1].current_prompt, "");
        assert_eq!(controller.history().len(), 2);
    }

    #[tokio::test]
    async fn test_http_error_is_recorded_and_state_kept() {
        let (mut controller, _client, store) = controller(
            vec![Err(ExchangeError::Http {
                status: 500,
                body: "Internal failure".to_string(),
            })],
            vec![],
        );
        controller.set_input(InputField::Prompt, "Hello");

        let result = controller.submit_turn().await;

        assert!(matches!(
            result,
            Err(ControllerError::Exchange(ExchangeError::Http { status: 500, .. }))
        ));
        assert_eq!(controller.error(), Some("API Error 500: Internal failure"));
        assert_eq!(controller.prompt(), "Hello");
        assert!(controller.records().is_empty());
        assert!(store.saves().is_empty());
        assert!(!controller.is_loading());
    }

    #[test]
    fn test_begin_submit_while_in_flight_is_busy() {
        let (mut controller, _client, _store) = controller(vec![], vec![]);
        controller.set_input(InputField::Prompt, "Hello");

        let _pending = controller.begin_submit().unwrap();

        assert!(controller.is_loading());
        assert!(!controller.can_submit());
        assert_eq!(controller.begin_submit().unwrap_err(), ControllerError::Busy);
        assert!(controller.begin_load("other").is_none());
        assert!(controller.input_mut(InputField::Prompt).is_none());
    }

    #[test]
    fn test_begin_submit_clears_previous_error() {
        let (mut controller, _client, _store) = controller(vec![], vec![]);
        let _ = controller.begin_submit();
        assert!(controller.error().is_some());

        controller.set_input(InputField::Prompt, "Hello");
        let _pending = controller.begin_submit().unwrap();
        assert_eq!(controller.error(), None);
    }

    // ==================== Completion ====================

    #[test]
    fn test_completing_twice_is_stale() {
        let (mut controller, _client, store) = controller(vec![], vec![]);
        controller.set_input(InputField::Prompt, "Hello");
        let pending = controller.begin_submit().unwrap();

        let ok = || Ok(response("abc", vec![ConversationTurn::user("Hello")]));
        assert_eq!(controller.complete(pending.clone(), ok()), Completion::Applied);
        assert_eq!(controller.complete(pending, ok()), Completion::Stale);
        assert_eq!(controller.records().len(), 1);
        assert_eq!(store.saves().len(), 1);
    }

    #[test]
    fn test_result_from_older_generation_is_discarded() {
        let (mut controller, _client, _store) = controller(vec![], vec![]);
        controller.set_input(InputField::Prompt, "first");
        let first = controller.begin_submit().unwrap();
        assert_eq!(
            controller.complete(
                first.clone(),
                Err(ExchangeError::Network("down".to_string()))
            ),
            Completion::Failed(ExchangeError::Network("down".to_string()))
        );

        let second = controller.begin_submit().unwrap();
        assert!(second.generation() > first.generation());

        let late = controller.complete(
            first,
            Ok(response("late", vec![ConversationTurn::user("late")])),
        );
        assert_eq!(late, Completion::Stale);
        assert!(controller.is_loading());
        assert_eq!(controller.active_session_id(), None);
    }

    // ==================== Load ====================

    #[tokio::test]
    async fn test_load_active_conversation_is_noop() {
        let (mut controller, client, _store) = controller(
            vec![Ok(response("abc", vec![ConversationTurn::user("Hello")]))],
            vec![],
        );
        controller.set_input(InputField::Prompt, "Hello");
        controller.submit_turn().await.unwrap();
        controller.set_input(InputField::DirectoryPath, "kept");

        controller.load_conversation("abc").await.unwrap();

        assert_eq!(client.requests().len(), 1);
        assert_eq!(controller.directory_path(), "kept");
        assert_eq!(controller.active_session_id(), Some("abc"));
    }

    #[tokio::test]
    async fn test_load_conversation_replaces_history_and_clears_inputs() {
        let records = vec![
            StoredConversationRecord::new("a", "A..."),
            StoredConversationRecord::new("b", "B..."),
        ];
        let (mut controller, client, store) = controller(
            vec![Ok(response(
                "b",
                vec![ConversationTurn::user("B"), ConversationTurn::model("reply")],
            ))],
            records.clone(),
        );
        controller.set_input(InputField::DirectoryPath, "/dir");
        controller.set_input(InputField::Prompt, "draft");

        controller.load_conversation("b").await.unwrap();

        assert_eq!(
            client.requests(),
            vec![SessionExchangeRequest::fetch_history("b")]
        );
        assert_eq!(controller.active_session_id(), Some("b"));
        assert_eq!(controller.history().len(), 2);
        assert_eq!(controller.directory_path(), "");
        assert_eq!(controller.prompt(), "");
        assert_eq!(controller.records(), records.as_slice());
        assert!(store.saves().is_empty());
    }

    #[tokio::test]
    async fn test_load_failure_has_load_specific_message() {
        let (mut controller, _client, _store) = controller(
            vec![Err(ExchangeError::Network("connection refused".to_string()))],
            vec![StoredConversationRecord::new("a", "A...")],
        );

        let result = controller.load_conversation("a").await;

        assert!(result.is_err());
        assert_eq!(
            controller.error(),
            Some("Failed to load conversation: Network error: connection refused")
        );
        assert_eq!(controller.active_session_id(), None);
        assert!(!controller.is_loading());
    }

    #[test]
    fn test_begin_load_sets_loading_status() {
        let (mut controller, _client, _store) = controller(vec![], vec![]);
        let pending = controller.begin_load("a").unwrap();
        assert_eq!(
            pending.kind(),
            &ExchangeKind::Load {
                target: "a".to_string()
            }
        );
        assert_eq!(
            controller.status(),
            &ExchangeStatus::Loading {
                target: "a".to_string()
            }
        );
    }

    // ==================== New conversation ====================

    #[tokio::test]
    async fn test_start_new_conversation_resets_everything() {
        let (mut controller, _client, _store) = controller(
            vec![
                Ok(response("abc", vec![ConversationTurn::user("Hello")])),
                Err(ExchangeError::MalformedResponse("bad".to_string())),
            ],
            vec![],
        );
        controller.set_input(InputField::Prompt, "Hello");
        controller.submit_turn().await.unwrap();
        controller.set_input(InputField::DirectoryPath, "/dir");
        controller.set_input(InputField::Prompt, "again");
        let _ = controller.submit_turn().await;
        assert!(controller.error().is_some());

        assert!(controller.start_new_conversation());

        assert_eq!(controller.active_session_id(), None);
        assert!(controller.history().is_empty());
        assert_eq!(controller.directory_path(), "");
        assert_eq!(controller.prompt(), "");
        assert_eq!(controller.error(), None);
        assert_eq!(controller.records().len(), 1);
    }

    #[test]
    fn test_start_new_conversation_ignored_while_loading() {
        let (mut controller, _client, _store) = controller(vec![], vec![]);
        controller.set_input(InputField::Prompt, "Hello");
        let _pending = controller.begin_submit().unwrap();

        assert!(!controller.start_new_conversation());
        assert!(controller.is_loading());
    }

    #[test]
    fn test_can_submit_requires_some_input_for_first_turn() {
        let (mut controller, _client, _store) = controller(vec![], vec![]);
        assert!(!controller.can_submit());

        controller.set_input(InputField::DirectoryPath, "  ");
        assert!(!controller.can_submit());

        controller.set_input(InputField::DirectoryPath, "/dir");
        assert!(controller.can_submit());
    }

    #[test]
    fn test_new_reads_records_from_store() {
        let (controller, _client, _store) = controller(
            vec![],
            vec![
                StoredConversationRecord::new("x", "X..."),
                StoredConversationRecord::new("y", "Y..."),
            ],
        );
        assert_eq!(controller.records().len(), 2);
        assert_eq!(controller.active_session_id(), None);
    }
}

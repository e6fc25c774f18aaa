use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{info, warn};
use uuid::Uuid;

use crate::backend::LiteratureSearch;
use crate::models::{QueryResult, SearchRequest};

/// Where the query lifecycle currently stands. Exactly one variant holds at
/// a time; a result and an error message cannot coexist.
#[derive(Debug, Clone)]
pub enum QueryPhase {
    Idle,
    Submitting { request_id: Uuid },
    Success(QueryResult),
    Error(String),
}

impl QueryPhase {
    pub fn is_submitting(&self) -> bool {
        matches!(self, QueryPhase::Submitting { .. })
    }
}

/// How a [`QueryController::submit`] call concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    /// The gate declined: empty input, or a request already in flight. No
    /// request was issued.
    Rejected,
    /// The request's outcome was applied to the controller state.
    Settled,
    /// The request completed, but the controller had moved on (reset or a
    /// newer submission), so the outcome was discarded.
    Superseded,
}

#[derive(Debug)]
struct ControllerState {
    input: String,
    phase: QueryPhase,
}

/// Owns the query interaction state and drives the single-request lifecycle
/// against a [`LiteratureSearch`] backend.
///
/// At most one request is outstanding at a time; the state lock is released
/// while that request is in flight, so the input stays editable and `reset`
/// stays callable throughout.
pub struct QueryController {
    state: Mutex<ControllerState>,
    backend: Arc<dyn LiteratureSearch>,
    top_k: Option<u32>,
}

impl QueryController {
    pub fn new(backend: Arc<dyn LiteratureSearch>) -> Self {
        Self {
            state: Mutex::new(ControllerState {
                input: String::new(),
                phase: QueryPhase::Idle,
            }),
            backend,
            top_k: None,
        }
    }

    /// Ask the service for at most `top_k` matches per query.
    pub fn with_top_k(mut self, top_k: u32) -> Self {
        self.top_k = Some(top_k);
        self
    }

    /// Replace the symptom input. Permitted in every phase; typing is never
    /// blocked by an in-flight request or a displayed error.
    pub async fn update_input(&self, text: impl Into<String> + Send) {
        self.state.lock().await.input = text.into();
    }

    pub async fn input(&self) -> String {
        self.state.lock().await.input.clone()
    }

    pub async fn phase(&self) -> QueryPhase {
        self.state.lock().await.phase.clone()
    }

    /// True when [`QueryController::submit`] would pass its gate right now.
    pub async fn can_submit(&self) -> bool {
        let state = self.state.lock().await;
        !state.input.trim().is_empty() && !state.phase.is_submitting()
    }

    /// Run one query lifecycle: gate, issue the request, apply the outcome.
    ///
    /// Exactly one request is issued per accepted call, and the phase is
    /// never left at `Submitting` once the outcome settles. Entering
    /// `Submitting` replaces any previous result or error.
    pub async fn submit(&self) -> SubmitStatus {
        let (request, request_id) = {
            let mut state = self.state.lock().await;
            if state.input.trim().is_empty() {
                return SubmitStatus::Rejected;
            }
            if state.phase.is_submitting() {
                warn!("Submission ignored: a query is already in flight");
                return SubmitStatus::Rejected;
            }

            let request_id = Uuid::new_v4();
            state.phase = QueryPhase::Submitting { request_id };
            let mut request = SearchRequest::new(state.input.clone());
            request.top_k = self.top_k;
            (request, request_id)
        };

        info!(%request_id, "Submitting literature query");
        let outcome = self.backend.search(&request).await;

        let mut state = self.state.lock().await;
        match state.phase {
            QueryPhase::Submitting { request_id: current } if current == request_id => {
                state.phase = match outcome {
                    Ok(result) => {
                        info!(%request_id, matches = result.matches.len(), "Query succeeded");
                        QueryPhase::Success(result)
                    }
                    Err(err) => {
                        warn!(%request_id, "Query failed: {}", err);
                        QueryPhase::Error(err.display_message())
                    }
                };
                SubmitStatus::Settled
            }
            _ => {
                info!(%request_id, "Discarding outcome of a superseded query");
                SubmitStatus::Superseded
            }
        }
    }

    /// Return to the initial state from any phase. An in-flight request is
    /// not cancelled; its eventual outcome is discarded.
    pub async fn reset(&self) {
        let mut state = self.state.lock().await;
        state.input.clear();
        state.phase = QueryPhase::Idle;
    }
}

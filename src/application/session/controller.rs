//! SessionController - sequences one training conversation.
//!
//! On every trainee submission the controller:
//! 1. Evaluates the reply against the client's most recent message
//! 2. Picks the client's next line from the response rules
//! 3. Appends the reply and its feedback right away
//! 4. Schedules the client line to appear after the configured delay
//!
//! Starting or resetting a scenario discards all state, including client
//! lines that are still waiting to appear.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex as StdMutex, PoisonError};

use tokio::sync::{broadcast, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument};

use super::events::{SessionEvent, SessionSnapshot};
use crate::config::SessionConfig;
use crate::domain::conversation::{ConversationState, Message, Transcript};
use crate::domain::feedback::{is_early_in_conversation, FeedbackEvaluator};
use crate::domain::foundation::{SessionId, TrainerError};
use crate::domain::response::ResponseGenerator;
use crate::domain::scenario::{ScenarioCatalog, ScenarioId};

/// State of the current scenario run, guarded by the controller's mutex.
#[derive(Debug)]
struct SessionState {
    session_id: SessionId,
    conversation: ConversationState,
    transcript: Transcript,
    /// Client lines computed but not yet shown, in submission order.
    queued_replies: VecDeque<String>,
}

impl SessionState {
    fn fresh(scenario: ScenarioId) -> Self {
        let opening = ScenarioCatalog::global().get(scenario).opening;
        Self {
            session_id: SessionId::new(),
            conversation: ConversationState::new(scenario),
            transcript: Transcript::opened_with(opening),
            queued_replies: VecDeque::new(),
        }
    }

    fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session_id: self.session_id,
            scenario: self.conversation.scenario(),
            stage: self.conversation.stage(),
            client_channel: self.transcript.client_channel().to_vec(),
            advisor_channel: self.transcript.advisor_channel().to_vec(),
        }
    }
}

/// Owns one conversation and sequences feedback and client replies.
///
/// Independent sessions are simply independent controllers. Calls on one
/// controller are serialized by its internal lock, in the order received.
pub struct SessionController {
    state: Arc<Mutex<SessionState>>,
    /// Deferred reply tasks. Kept outside `state` so they can be aborted
    /// without waiting on the session lock.
    pending: StdMutex<Vec<JoinHandle<()>>>,
    events: broadcast::Sender<SessionEvent>,
    config: SessionConfig,
    evaluator: FeedbackEvaluator,
    generator: ResponseGenerator,
}

impl SessionController {
    /// Creates a controller with `scenario` already started.
    pub fn new(config: SessionConfig, scenario: ScenarioId) -> Self {
        let (events, _) = broadcast::channel(config.event_capacity.max(1));
        Self {
            state: Arc::new(Mutex::new(SessionState::fresh(scenario))),
            pending: StdMutex::new(Vec::new()),
            events,
            config,
            evaluator: FeedbackEvaluator::new(),
            generator: ResponseGenerator::new(),
        }
    }

    /// Subscribes to session events.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    /// Returns the current transcripts and state.
    pub async fn snapshot(&self) -> SessionSnapshot {
        self.state.lock().await.snapshot()
    }

    /// Number of client replies still waiting to appear.
    pub async fn pending_replies(&self) -> usize {
        self.state.lock().await.queued_replies.len()
    }

    /// Starts a scenario by its wire id, discarding any current run.
    ///
    /// # Errors
    ///
    /// - `UnknownScenario` if `scenario_id` is not in the catalog; the
    ///   current run is left untouched
    pub async fn start(&self, scenario_id: &str) -> Result<SessionSnapshot, TrainerError> {
        let scenario: ScenarioId = scenario_id.parse()?;
        Ok(self.start_scenario(scenario).await)
    }

    /// Same as [`start`](Self::start); may be called at any time.
    pub async fn reset(&self, scenario_id: &str) -> Result<SessionSnapshot, TrainerError> {
        self.start(scenario_id).await
    }

    /// Starts an already-validated scenario.
    #[instrument(skip_all, fields(scenario = %scenario))]
    pub async fn start_scenario(&self, scenario: ScenarioId) -> SessionSnapshot {
        let mut state = self.state.lock().await;
        let discarded = state.queued_replies.len();
        self.abort_pending();
        *state = SessionState::fresh(scenario);

        info!(session_id = %state.session_id, discarded, "scenario started");

        let opening = Message::client(ScenarioCatalog::global().get(scenario).opening);
        let _ = self.events.send(SessionEvent::Started {
            session_id: state.session_id,
            scenario,
            opening,
        });

        state.snapshot()
    }

    /// Submits a trainee reply.
    ///
    /// Feedback is appended and published before this returns; the client's
    /// answer follows after the configured delay.
    ///
    /// # Errors
    ///
    /// - `EmptyInput` if `text` is blank; nothing changes
    #[instrument(skip_all, fields(chars = text.chars().count()))]
    pub async fn submit(&self, text: &str) -> Result<SessionSnapshot, TrainerError> {
        if text.trim().is_empty() {
            debug!("ignoring blank submission");
            return Err(TrainerError::EmptyInput);
        }

        let mut guard = self.state.lock().await;
        let state = &mut *guard;

        let history = state.transcript.client_channel();
        let last_client_text = state.transcript.last_client_text();
        let feedback = self.evaluator.evaluate(
            text,
            last_client_text,
            is_early_in_conversation(history.len()),
        );
        let reply = self.generator.next(
            text,
            history,
            state.conversation.scenario(),
            last_client_text,
        );

        state.conversation.record_trainee_turn(text);
        state.transcript.push_trainee(text);
        state.transcript.push_feedback(feedback.clone());

        let _ = self.events.send(SessionEvent::FeedbackIssued {
            session_id: state.session_id,
            feedback,
        });

        state.queued_replies.push_back(reply);
        let handle = self.schedule_reply(state.session_id);
        {
            let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
            pending.retain(|task| !task.is_finished());
            pending.push(handle);
        }

        debug!(
            session_id = %state.session_id,
            stage = ?state.conversation.stage(),
            turns = state.conversation.turn_count(),
            "trainee reply accepted"
        );

        Ok(state.snapshot())
    }

    /// Spawns the deferred task that reveals the oldest queued client line.
    ///
    /// Tasks pop from the front of the queue, so lines appear in submission
    /// order even if timers wake out of order.
    fn schedule_reply(&self, session_id: SessionId) -> JoinHandle<()> {
        let state = Arc::clone(&self.state);
        let events = self.events.clone();
        let delay = self.config.reply_delay();

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let mut state = state.lock().await;
            if state.session_id != session_id {
                debug!(%session_id, "discarding client reply for a reset session");
                return;
            }
            let Some(reply) = state.queued_replies.pop_front() else {
                return;
            };

            let message = Message::client(reply);
            state.transcript.push_client(message.text());
            debug!(%session_id, "client reply delivered");

            let _ = events.send(SessionEvent::ClientReplied {
                session_id,
                message,
            });
        })
    }

    /// Aborts every deferred reply task.
    fn abort_pending(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        for handle in pending.drain(..) {
            handle.abort();
        }
    }
}

impl Drop for SessionController {
    fn drop(&mut self) {
        self.abort_pending();
    }
}

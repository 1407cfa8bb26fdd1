//! Console controller: owns every piece of UI state and applies commands.

use crate::command::Command;
use rand::Rng;
use registrar_core::assistant::{AssistantOverlay, ConversationMessage, PendingReply};
use registrar_core::live_feed::{FeedStatus, LiveFeed, MediaCapture, STATIONS};
use registrar_core::{
    CheckInRecord, CheckInWorkflow, Draft, RecordStore, RegistrarError, Result, SubmitOutcome,
    View, ViewRouter,
};
use registrar_interaction::{AssistantBridge, CONNECTIVITY_FALLBACK};
use std::time::Duration;
use tokio::time::timeout;

/// What a command did, for the renderer.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    FieldUpdated { field: &'static str, value: String },
    Generated(String),
    Committed(CheckInRecord),
    Rejected(Vec<String>),
    Draft { draft: Draft, errors: Vec<String> },
    Records(Vec<CheckInRecord>),
    EnteredFeed { station: &'static str, status: FeedStatus },
    LeftFeed,
    Stations { selected: Option<&'static str> },
    StationSelected(&'static str),
    AssistantOpened(Vec<ConversationMessage>),
    AssistantClosed,
    /// The question was recorded; the caller must fetch the reply.
    Ask { pending: PendingReply, records: Vec<CheckInRecord> },
    Help,
    Quit,
    Notice(String),
}

/// A finished assistant call, addressed to the overlay that asked.
#[derive(Debug, PartialEq, Eq)]
pub struct AssistantReply {
    pub pending: PendingReply,
    pub text: String,
}

/// Runs one assistant call for `pending`, giving up after `limit`.
///
/// A call that runs out of time is answered with [`CONNECTIVITY_FALLBACK`],
/// like any other service failure.
pub async fn fetch_reply(
    bridge: &AssistantBridge,
    pending: PendingReply,
    records: Vec<CheckInRecord>,
    limit: Duration,
) -> AssistantReply {
    let text = match timeout(limit, bridge.ask(pending.utterance(), &records)).await {
        Ok(text) => text,
        Err(_) => {
            tracing::error!("AI Chat Error: request timed out after {limit:?}");
            CONNECTIVITY_FALLBACK.to_string()
        }
    };
    AssistantReply { pending, text }
}

/// All state behind the console.
///
/// The record store, check-in form, router, live feed and assistant overlay
/// each have one owner here. Commands are applied one at a time.
pub struct Console {
    store: RecordStore,
    workflow: CheckInWorkflow,
    router: ViewRouter,
    capture: Box<dyn MediaCapture + Send>,
    live_feed: Option<LiveFeed>,
    overlay: Option<AssistantOverlay>,
}

impl Console {
    /// Starts on the dashboard with the fixture records.
    pub fn new(election_date: &str, capture: Box<dyn MediaCapture + Send>) -> Self {
        Self {
            store: RecordStore::seeded(election_date),
            workflow: CheckInWorkflow::new(election_date),
            router: ViewRouter::new(),
            capture,
            live_feed: None,
            overlay: None,
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn workflow(&self) -> &CheckInWorkflow {
        &self.workflow
    }

    pub fn router(&self) -> &ViewRouter {
        &self.router
    }

    pub fn overlay(&self) -> Option<&AssistantOverlay> {
        self.overlay.as_ref()
    }

    pub fn live_feed(&self) -> Option<&LiveFeed> {
        self.live_feed.as_ref()
    }

    /// Applies one command.
    pub fn execute<R: Rng + ?Sized>(&mut self, command: Command, rng: &mut R) -> Result<Outcome> {
        match command {
            Command::Set { field, value } => {
                self.workflow.update_field(field, &value)?;
                Ok(Outcome::FieldUpdated {
                    field: field.name(),
                    value: self.workflow.draft().get(field).to_string(),
                })
            }
            Command::Generate => Ok(Outcome::Generated(self.workflow.generate_check_in_id(rng))),
            Command::Submit => Ok(match self.workflow.submit(&mut self.store) {
                SubmitOutcome::Committed(record) => Outcome::Committed(record),
                SubmitOutcome::Rejected(errors) => Outcome::Rejected(errors),
            }),
            Command::Draft => Ok(Outcome::Draft {
                draft: self.workflow.draft().clone(),
                errors: self.workflow.errors().to_vec(),
            }),
            Command::Records => Ok(Outcome::Records(self.store.snapshot())),
            Command::Feed => Ok(self.toggle_view()),
            Command::Station(choice) => Ok(self.station(choice)),
            Command::Chat => Ok(self.open_assistant()),
            Command::Close => Ok(self.close_assistant()),
            Command::Say(utterance) => self.ask(&utterance),
            Command::Help => Ok(Outcome::Help),
            Command::Quit => {
                self.leave_feed();
                Ok(Outcome::Quit)
            }
        }
    }

    /// Records the assistant's reply for a question asked earlier.
    ///
    /// Replies for an overlay that has since been closed, or replaced by a new
    /// one, are refused with [`RegistrarError::StaleReply`]; a reply the
    /// overlay is not waiting for is refused with
    /// [`RegistrarError::NoPendingReply`].
    pub fn settle_reply(&mut self, pending: PendingReply, reply: String) -> Result<&ConversationMessage> {
        let Some(overlay) = self.overlay.as_mut() else {
            return Err(RegistrarError::StaleReply(pending.session_id().to_string()));
        };
        overlay.settle(pending, reply)?;
        overlay
            .last_reply()
            .ok_or_else(|| RegistrarError::internal("settled reply missing from transcript"))
    }

    fn toggle_view(&mut self) -> Outcome {
        match self.router.toggle() {
            View::LiveFeed => {
                let feed = LiveFeed::enter(self.capture.as_mut());
                let outcome = Outcome::EnteredFeed {
                    station: feed.station(),
                    status: feed.status(),
                };
                self.live_feed = Some(feed);
                outcome
            }
            View::Dashboard => {
                self.leave_feed();
                Outcome::LeftFeed
            }
        }
    }

    fn leave_feed(&mut self) {
        if let Some(feed) = self.live_feed.take() {
            feed.leave();
        }
    }

    fn station(&mut self, choice: Option<usize>) -> Outcome {
        let Some(feed) = self.live_feed.as_mut() else {
            return Outcome::Notice("Open the live feed with /feed to choose a station".into());
        };

        match choice {
            None => Outcome::Stations {
                selected: Some(feed.station()),
            },
            Some(n) => match n.checked_sub(1).and_then(|index| feed.select_station(index)) {
                Some(name) => Outcome::StationSelected(name),
                None => Outcome::Notice(format!("Choose a station between 1 and {}", STATIONS.len())),
            },
        }
    }

    fn open_assistant(&mut self) -> Outcome {
        self.router.open_assistant();
        let overlay = self.overlay.get_or_insert_with(AssistantOverlay::new);
        Outcome::AssistantOpened(overlay.transcript().to_vec())
    }

    fn close_assistant(&mut self) -> Outcome {
        self.router.close_assistant();
        if let Some(overlay) = self.overlay.take() {
            if overlay.is_pending() {
                tracing::debug!(session_id = overlay.session_id(), "closing overlay with a reply pending");
            }
        }
        Outcome::AssistantClosed
    }

    fn ask(&mut self, utterance: &str) -> Result<Outcome> {
        let Some(overlay) = self.overlay.as_mut() else {
            return Ok(Outcome::Notice("Open the assistant with /chat first".into()));
        };
        let pending = overlay.begin_send(utterance)?;
        Ok(Outcome::Ask {
            pending,
            records: self.store.snapshot(),
        })
    }
}

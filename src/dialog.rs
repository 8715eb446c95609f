//! Conversation state machine
//!
//! An explicit enumerated state type and a pure transition function
//! `(state, event) -> (next state, reply)` that is testable without any
//! transport. The controller owns an explicit session-keyed store with
//! creation on `/start` and deletion on the terminal transition.

use std::sync::Arc;

use dashmap::DashMap;

use crate::catalog::{EducationLevel, ProgramCatalog};
use crate::render::{self, Reply};
use crate::search;

/// Search method chosen in the second step of the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMethod {
    ByUniversity,
    BySpecialty,
}

impl SearchMethod {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "by_university" => Some(SearchMethod::ByUniversity),
            "by_specialty" => Some(SearchMethod::BySpecialty),
            _ => None,
        }
    }
}

/// Where one conversation currently is.
///
/// The by-university path stores the materialized menu it rendered, so
/// index resolution at selection time reuses the exact sequence the user
/// saw rather than re-deriving the deduplicated set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogState {
    AwaitingEducationLevel,
    AwaitingSearchMethod {
        level: EducationLevel,
    },
    AwaitingQuery {
        level: EducationLevel,
        method: SearchMethod,
        menu: Vec<String>,
    },
}

/// Inbound conversation event, abstracted from the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Start,
    Level(EducationLevel),
    Method(SearchMethod),
    /// Numbered university menu selection (`/0`, `/1`, ...), digits only.
    Selector(String),
    /// Non-command free text, used as a specialty query.
    Query(String),
}

/// Classifies raw message text into a conversation event.
///
/// `/help` is not an event: it is stateless and handled outside the
/// state machine. Unknown commands return `None` and are ignored.
pub fn parse_event(text: &str) -> Option<Event> {
    let text = text.trim();
    if let Some(token) = text.strip_prefix('/') {
        // Strip an optional @botname suffix as Telegram appends in groups.
        let token = token.split('@').next().unwrap_or(token);
        if token == "start" {
            return Some(Event::Start);
        }
        if let Some(level) = EducationLevel::parse(token) {
            return Some(Event::Level(level));
        }
        if let Some(method) = SearchMethod::parse(token) {
            return Some(Event::Method(method));
        }
        if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
            return Some(Event::Selector(token.to_string()));
        }
        return None;
    }
    if text.is_empty() {
        return None;
    }
    Some(Event::Query(text.to_string()))
}

/// Outcome of one transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// `None` means the conversation reached its terminal state and the
    /// session is discarded.
    pub next: Option<DialogState>,
    pub reply: Reply,
}

/// Pure transition function for the conversation state machine.
///
/// `/start` is valid from every state and always re-enters at the
/// greeting, discarding in-progress state. Any event a state does not
/// expect re-prompts that state instead of failing the session.
pub fn transition(catalog: &ProgramCatalog, state: &DialogState, event: &Event) -> Step {
    if let Event::Start = event {
        return Step {
            next: Some(DialogState::AwaitingEducationLevel),
            reply: render::greeting(),
        };
    }

    match state {
        DialogState::AwaitingEducationLevel => match event {
            Event::Level(level) => Step {
                next: Some(DialogState::AwaitingSearchMethod { level: *level }),
                reply: render::search_method_prompt(),
            },
            _ => reprompt(state),
        },
        DialogState::AwaitingSearchMethod { level } => match event {
            Event::Method(method) => {
                let (menu, reply) = match method {
                    SearchMethod::ByUniversity => {
                        // Materialize the menu once; the same sequence is
                        // stored for index resolution at selection time.
                        let menu = catalog.universities();
                        let reply = render::university_menu(&menu);
                        (menu, reply)
                    }
                    SearchMethod::BySpecialty => (Vec::new(), render::specialty_prompt()),
                };
                Step {
                    next: Some(DialogState::AwaitingQuery {
                        level: *level,
                        method: *method,
                        menu,
                    }),
                    reply,
                }
            }
            _ => reprompt(state),
        },
        DialogState::AwaitingQuery {
            level,
            method,
            menu,
        } => match event {
            Event::Selector(input) | Event::Query(input) => {
                let programs = match method {
                    SearchMethod::ByUniversity => {
                        search::by_university(catalog, menu, input, *level)
                    }
                    SearchMethod::BySpecialty => search::by_specialty(catalog, input),
                };
                Step {
                    next: None,
                    reply: render::results(&programs, *level),
                }
            }
            _ => reprompt(state),
        },
    }
}

/// Re-issues the prompt for the current state without changing it.
fn reprompt(state: &DialogState) -> Step {
    let reply = match state {
        DialogState::AwaitingEducationLevel => render::greeting(),
        DialogState::AwaitingSearchMethod { .. } => render::search_method_prompt(),
        DialogState::AwaitingQuery {
            method: SearchMethod::ByUniversity,
            menu,
            ..
        } => render::university_menu(menu),
        DialogState::AwaitingQuery { .. } => render::specialty_prompt(),
    };
    Step {
        next: Some(state.clone()),
        reply,
    }
}

/// Drives the state machine for all conversations.
///
/// One entry per chat; the catalog is shared read-only. Sessions are
/// created on `/start` and removed when a conversation terminates.
pub struct DialogController {
    catalog: Arc<ProgramCatalog>,
    sessions: DashMap<i64, DialogState>,
}

impl DialogController {
    pub fn new(catalog: Arc<ProgramCatalog>) -> Self {
        Self {
            catalog,
            sessions: DashMap::new(),
        }
    }

    pub fn catalog(&self) -> &ProgramCatalog {
        &self.catalog
    }

    /// Applies one event to the chat's session and returns the reply.
    ///
    /// An event for a chat with no active session (other than `/start`)
    /// gets the greeting back as a gentle re-entry point.
    pub fn handle(&self, chat_id: i64, event: Event) -> Reply {
        let state = match self.sessions.get(&chat_id) {
            Some(entry) => entry.value().clone(),
            None => {
                if !matches!(event, Event::Start) {
                    log::debug!("chat {}: event {:?} with no active session", chat_id, event);
                    return render::greeting();
                }
                DialogState::AwaitingEducationLevel
            }
        };

        let step = transition(&self.catalog, &state, &event);
        match step.next {
            Some(next) => {
                self.sessions.insert(chat_id, next);
            }
            None => {
                self.sessions.remove(&chat_id);
            }
        }
        step.reply
    }

    /// Current session count, for startup/diagnostic logging.
    pub fn active_sessions(&self) -> usize {
        self.sessions.len()
    }

    #[cfg(test)]
    pub(crate) fn state_of(&self, chat_id: i64) -> Option<DialogState> {
        self.sessions.get(&chat_id).map(|entry| entry.value().clone())
    }
}

//! Timed concurrent state machine: many independently-clocked states in
//! one mapping, advanced together by a shared `dt`.

use crate::grid::Combo;
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("unknown state: {0}")]
    UnknownState(StateId),
}

/// Key of a live state. Replaces the legacy convention of prefix-encoded
/// string names ("AI_swap", "fall#3", "combo#7"); `Ord` gives the
/// machine a stable, timing-independent iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StateId {
    AiSwap,
    Fall { column: usize },
    Combo { id: u8 },
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AiSwap => write!(f, "AI_swap"),
            Self::Fall { column } => write!(f, "fall#{column}"),
            Self::Combo { id } => write!(f, "combo#{id}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Starting,
    Ongoing,
    Ending,
}

impl Status {
    /// One-character HUD marker.
    fn marker(self) -> &'static str {
        match self {
            Self::Starting => "/",
            Self::Ongoing => "",
            Self::Ending => "\\",
        }
    }
}

/// Payload carried by a state for the orchestrator's benefit.
#[derive(Debug, Clone, PartialEq)]
pub enum StateData {
    None,
    /// The hole a falling column is currently filling.
    FallAt { x: usize, y: usize },
    /// The combo group exactly as detected at creation time.
    ComboGroup(Vec<Combo>),
}

/// One timed state. `duration = None` never ends on its own;
/// `elapsed = None` is frozen (never advanced).
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub status: Status,
    pub duration: Option<Duration>,
    pub elapsed: Option<Duration>,
    pub data: StateData,
}

impl State {
    fn new(duration: Option<Duration>, data: StateData) -> Self {
        Self {
            status: Status::Starting,
            duration,
            elapsed: Some(Duration::ZERO),
            data,
        }
    }
}

/// Mapping from `StateId` to exactly one `State`. Supports arbitrarily
/// many concurrently active states.
#[derive(Debug, Default)]
pub struct StateMachine {
    states: BTreeMap<StateId, State>,
}

impl StateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the state keyed by `id`, fresh in `Starting`
    /// with zero elapsed time.
    pub fn transition(&mut self, id: StateId, duration: Option<Duration>, data: StateData) {
        self.states.insert(id, State::new(duration, data));
    }

    /// Like `transition`, atomically removing `from` first. Used for the
    /// rare rename (a fall state tracking a new hole keeps its column id
    /// in this design, so renames only occur across ids).
    #[allow(dead_code)]
    pub fn transition_from(
        &mut self,
        from: StateId,
        id: StateId,
        duration: Option<Duration>,
        data: StateData,
    ) -> Result<(), StateError> {
        if self.states.remove(&from).is_none() {
            return Err(StateError::UnknownState(from));
        }
        self.transition(id, duration, data);
        Ok(())
    }

    pub fn delete(&mut self, id: StateId) -> Result<State, StateError> {
        self.states.remove(&id).ok_or(StateError::UnknownState(id))
    }

    pub fn get(&self, id: StateId) -> Option<&State> {
        self.states.get(&id)
    }

    pub fn get_mut(&mut self, id: StateId) -> Option<&mut State> {
        self.states.get_mut(&id)
    }

    pub fn contains(&self, id: StateId) -> bool {
        self.states.contains_key(&id)
    }

    /// Snapshot of live ids in stable order. The orchestrator iterates
    /// this snapshot so states created or deleted while handling one id
    /// are not visited again until the next tick.
    pub fn ids(&self) -> Vec<StateId> {
        self.states.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StateId, &State)> {
        self.states.iter().map(|(id, state)| (*id, state))
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Advance every state by the same `dt` snapshot. The status is
    /// decided before the clock is advanced: `Ending` once the elapsed
    /// time plus this tick reaches the duration, `Starting -> Ongoing`
    /// once any time has passed. `Ending` is one-shot from the
    /// orchestrator's point of view: it must delete or re-transition the
    /// state in the same tick it reacts to it.
    pub fn update(&mut self, dt: Duration) {
        for state in self.states.values_mut() {
            if let (Some(elapsed), Some(duration)) = (state.elapsed, state.duration) {
                if elapsed + dt >= duration {
                    state.status = Status::Ending;
                } else if state.status == Status::Starting && !elapsed.is_zero() {
                    state.status = Status::Ongoing;
                }
            } else if let Some(elapsed) = state.elapsed {
                if state.status == Status::Starting && !elapsed.is_zero() {
                    state.status = Status::Ongoing;
                }
            }
            if let Some(elapsed) = state.elapsed.as_mut() {
                *elapsed += dt;
            }
        }
    }

    /// Compact one-line dump for the HUD: name plus a status marker.
    pub fn compact_repr(&self) -> String {
        self.states
            .iter()
            .map(|(id, state)| format!("{id}{}", state.status.marker()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

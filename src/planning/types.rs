//! Records exchanged with the planning models.

/// Stored result of taking an action in a state.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<S> {
    pub next_state: S,
    pub reward: f64,
}

/// Outcome stamped with the model time of its last real visit.
#[derive(Debug, Clone, PartialEq)]
pub struct TimedOutcome<S> {
    pub next_state: S,
    pub reward: f64,
    /// Model time of the last real visit; untried actions carry 1.
    pub time: u64,
}

/// A full transition replayed from a model.
#[derive(Debug, Clone, PartialEq)]
pub struct Experience<S, A> {
    pub state: S,
    pub action: A,
    pub next_state: S,
    pub reward: f64,
}

/// A transition popped from a prioritized model, with the priority it was
/// queued under.
#[derive(Debug, Clone, PartialEq)]
pub struct PrioritySample<S, A> {
    pub priority: f64,
    pub state: S,
    pub action: A,
    pub next_state: S,
    pub reward: f64,
}

/// A state-action pair whose recorded transition leads into a given state.
#[derive(Debug, Clone, PartialEq)]
pub struct Predecessor<S, A> {
    pub state: S,
    pub action: A,
    pub reward: f64,
}

//! Planning models for Dyna-style agents.
//!
//! [`TrivialModel`] (Dyna-Q) and [`TimeModel`] (Dyna-Q+) replay remembered
//! transitions uniformly at random through the [`Model`] trait.
//! [`PriorityModel`] replays them in priority order and exposes the
//! predecessor index used by prioritized sweeping.

pub mod error;
pub mod model;
pub mod predecessors;
pub mod priority;
pub mod queue;
pub mod store;
pub mod time;
pub mod trivial;
pub mod types;


pub use error::PlanningError;
pub use model::Model;
pub use predecessors::PredecessorGraph;
pub use priority::PriorityModel;
pub use queue::PriorityQueue;
pub use store::ExperienceStore;
pub use time::TimeModel;
pub use trivial::TrivialModel;
pub use types::{Experience, Outcome, Predecessor, PrioritySample, TimedOutcome};

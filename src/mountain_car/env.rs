//! Mountain car dynamics.
//!
//! An underpowered car in a valley has to rock back and forth to build up
//! enough momentum to reach the goal at the right bound. Every step costs -1.

/// Left bound of the track.
pub const POSITION_MIN: f64 = -1.2;
/// Right bound of the track; reaching it ends the episode.
pub const POSITION_MAX: f64 = 0.5;
pub const VELOCITY_MIN: f64 = -0.07;
pub const VELOCITY_MAX: f64 = 0.07;

/// Throttle applied for one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Throttle {
    Reverse,
    Zero,
    Forward,
}

impl Throttle {
    pub const ALL: [Throttle; 3] = [Throttle::Reverse, Throttle::Zero, Throttle::Forward];

    /// Signed force of this throttle, also used as the tile discriminator.
    pub fn force(self) -> i64 {
        match self {
            Throttle::Reverse => -1,
            Throttle::Zero => 0,
            Throttle::Forward => 1,
        }
    }
}

/// Position and velocity of the car.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarState {
    pub position: f64,
    pub velocity: f64,
}

impl CarState {
    pub fn new(position: f64, velocity: f64) -> Self {
        Self { position, velocity }
    }

    /// Whether the car has reached the goal.
    pub fn is_terminal(&self) -> bool {
        self.position >= POSITION_MAX
    }

    /// Applies `throttle` for one step and returns the next state and the
    /// reward.
    ///
    /// Velocity and position are clipped to their bounds; hitting the left
    /// bound stops the car.
    pub fn step(self, throttle: Throttle) -> (CarState, f64) {
        let velocity = (self.velocity + 0.001 * throttle.force() as f64
            - 0.0025 * (3.0 * self.position).cos())
        .clamp(VELOCITY_MIN, VELOCITY_MAX);
        let position = (self.position + velocity).clamp(POSITION_MIN, POSITION_MAX);
        let velocity = if position <= POSITION_MIN { 0.0 } else { velocity };
        (CarState::new(position, velocity), -1.0)
    }
}

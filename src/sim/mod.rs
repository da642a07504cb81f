//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable iteration order (hole registry order)
//! - No rendering or platform dependencies

pub mod ball;
pub mod collision;
pub mod holes;
pub mod lever;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use ball::{BallState, apply_friction};
pub use collision::{check_collision, coverage, distance};
pub use holes::{Hole, HoleKind, HoleRegistry};
pub use lever::{LeverInput, LeverState, SetupProgress};
pub use snapshot::{ModalMessage, Snapshot};
pub use state::{GameEvent, GamePhase, GameState, GoalFlash, ScoreState};
pub use tick::{TickInput, tick};

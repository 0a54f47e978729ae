//! Idle behavior for a six-legged walking robot.
//!
//! Left alone long enough, the robot breathes, stretches, taps a foot or
//! occasionally lies down. Which animation plays is a weighted draw that never
//! repeats the previous one, and after each animation the next idle threshold
//! is drawn again, biased toward short waits.

pub mod actuation;
pub mod animation;
pub mod clock;
pub mod command;
pub mod config;
pub mod console;
pub mod error;
pub mod random;
pub mod rearm;
pub mod scheduler;
pub mod selector;
pub mod testing;
pub mod units;

pub use actuation::{Actuation, Gait, LegId};
pub use animation::choreography::{routine, Choreography, Routine, Step};
pub use animation::{Animation, AnimationId, Catalog, CatalogEntry, Mood};
pub use clock::{Clock, SystemClock, Timestamp};
pub use error::IdleError;
pub use random::{RandomSource, SeededRandom};
pub use scheduler::{AnimatingFlag, IdleScheduler, SchedulerState};

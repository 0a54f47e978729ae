//! Stand-ins for the robot, the clock and the dice, so behavior can be checked
//! without hardware and without waiting.

mod manual_clock;
mod recording_actuation;
mod scripted_random;

pub use manual_clock::ManualClock;
pub use recording_actuation::{Motion, RecordingActuation};
pub use scripted_random::ScriptedRandom;

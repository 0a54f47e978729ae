//! Operator commands, typed one per line.
//!
//! ```text
//!   breathing, wave, dance, ...   play an idle animation now
//!   deffb, wavetlr, ...           walk there and back
//!   reset                         return to neutral
//!   idle on | idle off            switch idle animations
//!   timeout N                     idle threshold in seconds, N > 0
//!   status                        report the scheduler state
//!   help | ?                      list the commands
//! ```

use crate::animation::walk::Maneuver;
use crate::animation::Animation;
use crate::error::IdleError;
use crate::units::Seconds;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play one idle animation immediately
    Play(Animation),
    /// Perform a walking maneuver
    Maneuver(Maneuver),
    /// Return to the neutral pose
    Reset,
    /// Switch idle animations on or off
    Idle(bool),
    /// Override the idle threshold
    Timeout(Seconds),
    Status,
    Help,
}

impl FromStr for Command {
    type Err = IdleError;

    /// Case and surrounding whitespace do not matter.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
        let command = match line.as_str() {
            "reset" => Command::Reset,
            "idle on" => Command::Idle(true),
            "idle off" => Command::Idle(false),
            "status" => Command::Status,
            "help" | "?" => Command::Help,
            _ => {
                if let Some(value) = line.strip_prefix("timeout ") {
                    return match value.parse::<u32>() {
                        Ok(seconds) if seconds > 0 => Ok(Command::Timeout(Seconds(seconds))),
                        _ => Err(IdleError::InvalidTimeout(value.to_string())),
                    };
                }
                if let Ok(animation) = Animation::from_str(&line) {
                    Command::Play(animation)
                } else if let Ok(maneuver) = Maneuver::from_str(&line) {
                    Command::Maneuver(maneuver)
                } else {
                    return Err(IdleError::UnknownCommand(line));
                }
            }
        };
        Ok(command)
    }
}

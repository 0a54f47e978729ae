//! Applying operator commands to a running scheduler.

use crate::actuation::Actuation;
use crate::animation::walk::Maneuver;
use crate::animation::{Animation, AnimationId, Mood};
use crate::clock::Clock;
use crate::command::Command;
use crate::random::RandomSource;
use crate::scheduler::IdleScheduler;
use log::warn;
use std::sync::mpsc::{Receiver, TryRecvError};
use strum::IntoEnumIterator;

pub struct Console<A, C, R> {
    scheduler: IdleScheduler<A, C, R>,
}

impl<A: Actuation, C: Clock, R: RandomSource> Console<A, C, R> {
    pub fn new(scheduler: IdleScheduler<A, C, R>) -> Self {
        Self { scheduler }
    }

    pub fn scheduler(&self) -> &IdleScheduler<A, C, R> {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut IdleScheduler<A, C, R> {
        &mut self.scheduler
    }

    /// Carry out one line of input and return the reply.
    ///
    /// Any non-blank line counts as operator activity, even one that fails to
    /// parse. Blank lines are ignored.
    pub fn dispatch(&mut self, line: &str) -> Option<String> {
        if line.trim().is_empty() {
            return None;
        }
        let reply = match line.parse::<Command>() {
            Ok(command) => self.apply(command),
            Err(error) => {
                warn!("{}", error);
                format!("{}\nType 'help' for commands", error)
            }
        };
        let now = self.scheduler.clock().now();
        self.scheduler.notify_activity(now);
        Some(reply)
    }

    /// Dispatch every line already waiting on the channel, handing each reply
    /// to `reply`.
    ///
    /// Returns false once the sending side has gone away; the channel will
    /// never deliver again and the caller can stop draining it.
    pub fn drain(&mut self, lines: &Receiver<String>, mut reply: impl FnMut(String)) -> bool {
        loop {
            match lines.try_recv() {
                Ok(line) => {
                    if let Some(text) = self.dispatch(&line) {
                        reply(text);
                    }
                }
                Err(TryRecvError::Empty) => return true,
                Err(TryRecvError::Disconnected) => return false,
            }
        }
    }

    /// One pass of the idle cycle. A played animation counts as activity.
    pub fn tick(&mut self) -> Option<AnimationId> {
        let now = self.scheduler.clock().now();
        let played = self.scheduler.tick(now)?;
        let now = self.scheduler.clock().now();
        self.scheduler.notify_activity(now);
        Some(played)
    }

    fn apply(&mut self, command: Command) -> String {
        match command {
            Command::Play(animation) => {
                if self.scheduler.play_animation(animation.id()) {
                    format!("Played {}", animation)
                } else {
                    "No actuation attached".to_string()
                }
            }
            Command::Maneuver(maneuver) => {
                if self.scheduler.play(&maneuver.routine()) {
                    format!("Walked {}", maneuver)
                } else {
                    "No actuation attached".to_string()
                }
            }
            Command::Reset => {
                self.scheduler.reset();
                "Back to neutral".to_string()
            }
            Command::Idle(enabled) => {
                self.scheduler.set_enabled(enabled);
                format!("Idle animations {}", if enabled { "ENABLED" } else { "DISABLED" })
            }
            Command::Timeout(seconds) => {
                self.scheduler.set_timeout_seconds(seconds.0);
                format!("Idle timeout set to {}", seconds)
            }
            Command::Status => self.status(),
            Command::Help => help(),
        }
    }

    fn status(&self) -> String {
        let scheduler = &self.scheduler;
        let idle = scheduler.clock().now().since(scheduler.last_activity());
        let last = match scheduler.last_played() {
            Some(id) => scheduler
                .catalog()
                .entry(id)
                .map(|entry| format!("{} {}", entry.name, id))
                .unwrap_or_else(|| id.to_string()),
            None => "nothing".to_string(),
        };
        format!(
            "idle {}, threshold {}, quiet for {:.1}s, last played {}",
            if scheduler.is_enabled() { "on" } else { "off" },
            scheduler.idle_threshold(),
            idle.as_secs_f32(),
            last,
        )
    }
}

pub fn help() -> String {
    let mut lines = Vec::new();
    for mood in [Mood::Subtle, Mood::Expressive, Mood::Playful, Mood::Dramatic] {
        let names: Vec<String> = Animation::iter()
            .filter(|animation| animation.mood() == mood)
            .map(Animation::command)
            .collect();
        lines.push(format!("{}: {}", mood, names.join(" ")));
    }
    let walks: Vec<&str> = Maneuver::iter().map(Maneuver::command).collect();
    lines.push(format!("Walking: {}", walks.join(" ")));
    lines.push("Control: reset, idle on, idle off, timeout N, status, help".to_string());
    lines.join("\n")
}

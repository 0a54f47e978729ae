//! The idle activity scheduler.
//!
//! The host calls [`IdleScheduler::tick`] from its control loop. Once nothing
//! has happened for the idle threshold, a tick picks an animation, plays it to
//! the end, returns the robot to neutral and draws a fresh, shorter threshold.
//! Playing blocks the caller: no tick, command or activity notification is
//! handled until the routine is done, and nothing can interrupt it.

use crate::actuation::Actuation;
use crate::animation::choreography::Choreography;
use crate::animation::{AnimationId, Catalog};
use crate::clock::{Clock, Timestamp};
use crate::random::RandomSource;
use crate::units::Seconds;
use crate::{rearm, selector};
use log::{debug, info};
use std::cell::Cell;
use std::rc::Rc;

/// Threshold in force until the first animation re-arms the timer.
pub const DEFAULT_IDLE_THRESHOLD: Seconds = Seconds(20);

/// Raised exactly while a choreography is playing.
///
/// Clones share the flag, so a choreography or the host can look at it
/// during play.
#[derive(Debug, Clone, Default)]
pub struct AnimatingFlag(Rc<Cell<bool>>);

impl AnimatingFlag {
    pub fn is_raised(&self) -> bool {
        self.0.get()
    }

    fn set(&self, value: bool) {
        self.0.set(value)
    }
}

#[derive(Debug, Clone)]
pub struct SchedulerState {
    pub enabled: bool,
    pub animating: AnimatingFlag,
    pub last_activity: Timestamp,
    pub idle_threshold: Seconds,
    pub last_played: Option<AnimationId>,
}

impl SchedulerState {
    pub fn new(now: Timestamp, idle_threshold: Seconds) -> Self {
        Self {
            enabled: true,
            animating: AnimatingFlag::default(),
            last_activity: now,
            idle_threshold,
            last_played: None,
        }
    }
}

pub struct IdleScheduler<A, C, R> {
    state: SchedulerState,
    catalog: Catalog,
    actuation: Option<A>,
    clock: C,
    random: R,
}

impl<A: Actuation, C: Clock, R: RandomSource> IdleScheduler<A, C, R> {
    /// Start enabled, with the activity timer running from the clock's now.
    ///
    /// Without an actuation every effectful operation quietly does nothing.
    pub fn new(catalog: Catalog, actuation: Option<A>, clock: C, random: R) -> Self {
        let state = SchedulerState::new(clock.now(), DEFAULT_IDLE_THRESHOLD);
        Self {
            state,
            catalog,
            actuation,
            clock,
            random,
        }
    }

    pub fn with_idle_threshold(mut self, threshold: Seconds) -> Self {
        self.state.idle_threshold = threshold;
        self
    }

    /// Play an idle animation if the robot has been left alone long enough.
    ///
    /// Returns the animation that was played. The host should follow a
    /// `Some` with [`notify_activity`](Self::notify_activity).
    pub fn tick(&mut self, now: Timestamp) -> Option<AnimationId> {
        if !self.state.enabled || self.state.animating.is_raised() {
            return None;
        }
        let actuation = self.actuation.as_mut()?;
        if now.since(self.state.last_activity) < self.state.idle_threshold.as_duration() {
            return None;
        }
        let id = selector::select(&self.catalog, self.state.last_played, &mut self.random);
        let entry = self.catalog.entry(id)?;
        self.state.animating.set(true);
        self.state.last_played = Some(id);
        info!("Idle for {}, playing {} {}", self.state.idle_threshold, entry.name, id);
        entry.choreography.perform(actuation, &self.clock);
        actuation.restore_neutral_pose();
        self.state.animating.set(false);
        self.state.last_activity = self.clock.now();
        self.state.idle_threshold = rearm::next_threshold(&mut self.random);
        info!("Finished {}, next idle threshold {}", id, self.state.idle_threshold);
        Some(id)
    }

    /// Something happened: an operator command, a sensor event, a finished animation.
    pub fn notify_activity(&mut self, now: Timestamp) {
        self.state.last_activity = now;
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        debug!("Idle animations {}", if enabled { "enabled" } else { "disabled" });
        self.state.enabled = enabled;
        if enabled {
            self.notify_activity(self.clock.now());
        }
    }

    /// Replace the idle threshold until the next animation re-arms it.
    pub fn set_timeout_seconds(&mut self, seconds: u32) {
        debug!("Idle threshold set to {}s", seconds);
        self.state.idle_threshold = Seconds(seconds);
    }

    pub fn is_enabled(&self) -> bool {
        self.state.enabled
    }

    pub fn is_animating(&self) -> bool {
        self.state.animating.is_raised()
    }

    /// A handle on the animating flag that stays live while a routine plays.
    pub fn animating_flag(&self) -> AnimatingFlag {
        self.state.animating.clone()
    }

    /// Back to the neutral pose without playing anything or touching the timer.
    pub fn reset(&mut self) {
        if let Some(actuation) = self.actuation.as_mut() {
            actuation.restore_neutral_pose();
        }
    }

    /// Perform a choreography right now, outside the idle cycle.
    ///
    /// Leaves the last played animation and the threshold alone. Returns false
    /// when there is no actuation to perform it with.
    pub fn play(&mut self, choreography: &dyn Choreography) -> bool {
        let Some(actuation) = self.actuation.as_mut() else {
            return false;
        };
        self.state.animating.set(true);
        choreography.perform(actuation, &self.clock);
        self.state.animating.set(false);
        true
    }

    /// Perform a catalog animation by id, outside the idle cycle.
    pub fn play_animation(&mut self, id: AnimationId) -> bool {
        let Some(actuation) = self.actuation.as_mut() else {
            return false;
        };
        let Some(entry) = self.catalog.entry(id) else {
            return false;
        };
        debug!("Playing {} {} on request", entry.name, id);
        self.state.animating.set(true);
        entry.choreography.perform(actuation, &self.clock);
        self.state.animating.set(false);
        true
    }

    pub fn attach(&mut self, actuation: A) {
        self.actuation = Some(actuation);
    }

    pub fn detach(&mut self) -> Option<A> {
        self.actuation.take()
    }

    pub fn actuation(&self) -> Option<&A> {
        self.actuation.as_ref()
    }

    pub fn actuation_mut(&mut self) -> Option<&mut A> {
        self.actuation.as_mut()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &SchedulerState {
        &self.state
    }

    pub fn last_played(&self) -> Option<AnimationId> {
        self.state.last_played
    }

    pub fn idle_threshold(&self) -> Seconds {
        self.state.idle_threshold
    }

    pub fn last_activity(&self) -> Timestamp {
        self.state.last_activity
    }
}

//! Choreography as data, with a fluent builder for authoring routines.

use crate::actuation::{Actuation, Gait, LegId};
use crate::clock::Clock;
use crate::units::Milliseconds;
use glam::Vec3;
use std::time::Duration;

/// Something that can be performed through the motion subsystem.
///
/// Performing blocks the calling thread until the last motion and hold are
/// done; there is no way to interrupt it.
pub trait Choreography {
    fn perform(&self, actuation: &mut dyn Actuation, clock: &dyn Clock);

    /// Total time spent holding poses, zero if unknown.
    fn duration(&self) -> Duration {
        Duration::ZERO
    }
}

impl<F> Choreography for F
where
    F: Fn(&mut dyn Actuation, &dyn Clock),
{
    fn perform(&self, actuation: &mut dyn Actuation, clock: &dyn Clock) {
        self(actuation, clock)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Translate (mm) and rotate (degrees) the body
    Twist { translate: Vec3, rotate: Vec3 },
    /// Move one foot relative to its current position (mm)
    Leg { leg: LegId, delta: Vec3 },
    /// One tripod gait step
    Gait(Gait),
    Hold(Milliseconds),
    Neutral,
}

/// A named, authored sequence of steps.
#[derive(Debug, Clone, PartialEq)]
pub struct Routine {
    pub name: &'static str,
    pub steps: Vec<Step>,
}

impl Choreography for Routine {
    fn perform(&self, actuation: &mut dyn Actuation, clock: &dyn Clock) {
        for step in &self.steps {
            match *step {
                Step::Twist { translate, rotate } => actuation.twist_body(translate, rotate),
                Step::Leg { leg, delta } => actuation.move_leg_relative(leg, delta),
                Step::Gait(gait) => actuation.step(gait),
                Step::Hold(millis) => clock.sleep(millis.as_duration()),
                Step::Neutral => actuation.restore_neutral_pose(),
            }
        }
    }

    fn duration(&self) -> Duration {
        self.steps
            .iter()
            .map(|step| match step {
                Step::Hold(millis) => millis.as_duration(),
                _ => Duration::ZERO,
            })
            .sum()
    }
}

/// Start building a routine
pub fn routine(name: &'static str) -> RoutineBuilder {
    RoutineBuilder {
        name,
        steps: Vec::new(),
    }
}

pub struct RoutineBuilder {
    name: &'static str,
    steps: Vec<Step>,
}

impl RoutineBuilder {
    pub fn twist(mut self, translate: Vec3, rotate: Vec3) -> Self {
        self.steps.push(Step::Twist { translate, rotate });
        self
    }

    pub fn shift(self, translate: Vec3) -> Self {
        self.twist(translate, Vec3::ZERO)
    }

    pub fn tilt(self, rotate: Vec3) -> Self {
        self.twist(Vec3::ZERO, rotate)
    }

    pub fn leg(mut self, leg: LegId, delta: Vec3) -> Self {
        self.steps.push(Step::Leg { leg, delta });
        self
    }

    pub fn gait(mut self, gait: Gait, count: usize) -> Self {
        self.steps
            .extend(std::iter::repeat(Step::Gait(gait)).take(count));
        self
    }

    pub fn hold(mut self, millis: Milliseconds) -> Self {
        self.steps.push(Step::Hold(millis));
        self
    }

    /// Repeat a phrase `count` times.
    pub fn repeat(mut self, count: usize, phrase: impl Fn(RoutineBuilder) -> RoutineBuilder) -> Self {
        for _ in 0..count {
            self = phrase(self);
        }
        self
    }

    /// Repeat a phrase that knows which pass it is on.
    pub fn each<T>(
        mut self,
        items: impl IntoIterator<Item = T>,
        phrase: impl Fn(RoutineBuilder, T) -> RoutineBuilder,
    ) -> Self {
        for item in items {
            self = phrase(self, item);
        }
        self
    }

    /// Finish the routine, always ending in the neutral pose.
    pub fn build(mut self) -> Routine {
        self.steps.push(Step::Neutral);
        Routine {
            name: self.name,
            steps: self.steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ManualClock, Motion, RecordingActuation};
    use crate::units::{up, Millimeters as Mm, Milliseconds as Ms};

    #[test]
    fn test_routine_ends_neutral() {
        let routine = routine("Nod").shift(up(Mm(5.0))).build();
        assert_eq!(routine.steps.last(), Some(&Step::Neutral));
    }

    #[test]
    fn test_duration_is_sum_of_holds() {
        let routine = routine("Pause")
            .hold(Ms(300))
            .repeat(3, |r| r.shift(up(Mm(1.0))).hold(Ms(100)))
            .build();
        assert_eq!(routine.duration(), Duration::from_millis(600));
    }

    #[test]
    fn test_perform_blocks_for_holds() {
        let routine = routine("Bob")
            .shift(up(Mm(10.0)))
            .hold(Ms(250))
            .shift(up(-Mm(10.0)))
            .build();
        let mut actuation = RecordingActuation::new();
        let clock = ManualClock::new();
        routine.perform(&mut actuation, &clock);
        assert_eq!(clock.slept(), Duration::from_millis(250));
        assert_eq!(actuation.motions().len(), 3);
        assert_eq!(actuation.motions().last(), Some(&Motion::Neutral));
    }

    #[test]
    fn test_closures_are_choreography() {
        let wiggle = |actuation: &mut dyn Actuation, clock: &dyn Clock| {
            actuation.crawl_left();
            clock.sleep(Duration::from_millis(40));
        };
        let mut actuation = RecordingActuation::new();
        let clock = ManualClock::new();
        wiggle.perform(&mut actuation, &clock);
        assert_eq!(actuation.motions(), &[Motion::Step(Gait::CrawlLeft)]);
        assert_eq!(clock.slept(), Duration::from_millis(40));
    }
}

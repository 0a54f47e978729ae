use crate::actuation::{Actuation, Gait, LegId};
use glam::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    Twist { translate: Vec3, rotate: Vec3 },
    Leg { leg: LegId, delta: Vec3 },
    Step(Gait),
    Neutral,
}

/// Remembers every motion command in the order it arrived.
#[derive(Debug, Default, Clone)]
pub struct RecordingActuation {
    motions: Vec<Motion>,
}

impl RecordingActuation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn motions(&self) -> &[Motion] {
        &self.motions
    }

    /// Where the foot ended up relative to where it started, ignoring neutral resets.
    pub fn net_leg_offset(&self, leg: LegId) -> Vec3 {
        self.motions
            .iter()
            .filter_map(|motion| match motion {
                Motion::Leg { leg: moved, delta } if *moved == leg => Some(*delta),
                _ => None,
            })
            .sum()
    }

    pub fn net_body_offset(&self) -> Vec3 {
        self.motions
            .iter()
            .filter_map(|motion| match motion {
                Motion::Twist { translate, .. } => Some(*translate),
                _ => None,
            })
            .sum()
    }

    pub fn neutral_count(&self) -> usize {
        self.motions
            .iter()
            .filter(|motion| matches!(motion, Motion::Neutral))
            .count()
    }

    pub fn clear(&mut self) {
        self.motions.clear();
    }
}

impl Actuation for RecordingActuation {
    fn twist_body(&mut self, translate: Vec3, rotate: Vec3) {
        self.motions.push(Motion::Twist { translate, rotate });
    }

    fn move_leg_relative(&mut self, leg: LegId, delta: Vec3) {
        self.motions.push(Motion::Leg { leg, delta });
    }

    fn step(&mut self, gait: Gait) {
        self.motions.push(Motion::Step(gait));
    }

    fn restore_neutral_pose(&mut self) {
        self.motions.push(Motion::Neutral);
    }
}

//! The boundary to the motion subsystem.
//!
//! Inverse kinematics, leg path interpolation and the gait engine live on the
//! other side of this trait. Every call blocks until the robot has finished
//! the motion, and implementations clamp requests to their own safe ranges.

use glam::Vec3;
use log::debug;
use strum::Display;

/// One of the six legs, numbered 1 to 6.
///
/// Legs 1-3 are front, middle and back on the right side,
/// legs 4-6 are front, middle and back on the left side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LegId(u8);

impl LegId {
    pub const FRONT_RIGHT: LegId = LegId(1);
    pub const MIDDLE_RIGHT: LegId = LegId(2);
    pub const BACK_RIGHT: LegId = LegId(3);
    pub const FRONT_LEFT: LegId = LegId(4);
    pub const MIDDLE_LEFT: LegId = LegId(5);
    pub const BACK_LEFT: LegId = LegId(6);

    pub const ALL: [LegId; 6] = [
        LegId::FRONT_RIGHT,
        LegId::MIDDLE_RIGHT,
        LegId::BACK_RIGHT,
        LegId::FRONT_LEFT,
        LegId::MIDDLE_LEFT,
        LegId::BACK_LEFT,
    ];

    pub fn new(number: u8) -> Option<Self> {
        (1..=6).contains(&number).then_some(LegId(number))
    }

    pub fn number(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for LegId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "leg {}", self.0)
    }
}

/// The crawl and turn primitives of the built-in tripod gait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Gait {
    CrawlForward,
    CrawlBackward,
    CrawlLeft,
    CrawlRight,
    TurnLeft,
    TurnRight,
}

pub trait Actuation {
    /// Shift and rotate the body while the feet stay planted.
    /// `translate` is in millimeters, `rotate` in degrees.
    fn twist_body(&mut self, translate: Vec3, rotate: Vec3);

    /// Move one foot relative to where it currently is, in millimeters.
    fn move_leg_relative(&mut self, leg: LegId, delta: Vec3);

    /// Perform one step of the tripod gait.
    fn step(&mut self, gait: Gait);

    /// Return to the neutral standing pose. Idempotent.
    fn restore_neutral_pose(&mut self);

    fn crawl_forward(&mut self) {
        self.step(Gait::CrawlForward)
    }

    fn crawl_backward(&mut self) {
        self.step(Gait::CrawlBackward)
    }

    fn crawl_left(&mut self) {
        self.step(Gait::CrawlLeft)
    }

    fn crawl_right(&mut self) {
        self.step(Gait::CrawlRight)
    }

    fn turn_left(&mut self) {
        self.step(Gait::TurnLeft)
    }

    fn turn_right(&mut self) {
        self.step(Gait::TurnRight)
    }
}

impl<T: Actuation + ?Sized> Actuation for &mut T {
    fn twist_body(&mut self, translate: Vec3, rotate: Vec3) {
        (**self).twist_body(translate, rotate)
    }

    fn move_leg_relative(&mut self, leg: LegId, delta: Vec3) {
        (**self).move_leg_relative(leg, delta)
    }

    fn step(&mut self, gait: Gait) {
        (**self).step(gait)
    }

    fn restore_neutral_pose(&mut self) {
        (**self).restore_neutral_pose()
    }
}

impl<T: Actuation + ?Sized> Actuation for Box<T> {
    fn twist_body(&mut self, translate: Vec3, rotate: Vec3) {
        (**self).twist_body(translate, rotate)
    }

    fn move_leg_relative(&mut self, leg: LegId, delta: Vec3) {
        (**self).move_leg_relative(leg, delta)
    }

    fn step(&mut self, gait: Gait) {
        (**self).step(gait)
    }

    fn restore_neutral_pose(&mut self) {
        (**self).restore_neutral_pose()
    }
}

/// Raise and lower a leg a few times, the power-on greeting.
pub fn startup_shake(actuation: &mut dyn Actuation, leg: LegId, count: usize) {
    let lift = Vec3::new(0.0, 0.0, 30.0);
    for _ in 0..count {
        actuation.move_leg_relative(leg, lift);
        actuation.move_leg_relative(leg, -lift);
    }
}

/// Stand-in for the motion subsystem that reports each command to the log.
#[derive(Debug, Default)]
pub struct ConsoleActuation;

impl Actuation for ConsoleActuation {
    fn twist_body(&mut self, translate: Vec3, rotate: Vec3) {
        debug!("twist body: move {:?} mm, rotate {:?} deg", translate, rotate);
    }

    fn move_leg_relative(&mut self, leg: LegId, delta: Vec3) {
        debug!("move {} by {:?} mm", leg, delta);
    }

    fn step(&mut self, gait: Gait) {
        debug!("gait step: {}", gait);
    }

    fn restore_neutral_pose(&mut self) {
        debug!("neutral pose");
    }
}

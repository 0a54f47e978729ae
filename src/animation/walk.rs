//! Walking maneuvers, there and back again.
//!
//! These are never picked by the idle selector; the operator triggers them.
//! The tripod versions use the gait engine's crawl and turn steps. The wave
//! versions move one leg at a time and then push the body over the planted feet.

use crate::actuation::{Gait, LegId};
use crate::animation::choreography::{routine, Routine, RoutineBuilder};
use crate::units::{forward, sideways, up, yaw, Degrees as Deg, Millimeters as Mm, Milliseconds as Ms};
use glam::Vec3;
use strum::{Display, EnumIter, EnumString};

const PAUSE: Ms = Ms(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Maneuver {
    #[strum(to_string = "DefaultForwardBack", serialize = "deffb")]
    DefaultForwardBack,
    #[strum(to_string = "DefaultBackForward", serialize = "defbf")]
    DefaultBackForward,
    #[strum(to_string = "DefaultLeftRight", serialize = "deflr")]
    DefaultLeftRight,
    #[strum(to_string = "DefaultRightLeft", serialize = "defrl")]
    DefaultRightLeft,
    #[strum(to_string = "DefaultTurnLeftRight", serialize = "deftlr")]
    DefaultTurnLeftRight,
    #[strum(to_string = "DefaultTurnRightLeft", serialize = "deftrl")]
    DefaultTurnRightLeft,
    #[strum(to_string = "WaveForwardBack", serialize = "wavefb")]
    WaveForwardBack,
    #[strum(to_string = "WaveBackForward", serialize = "wavebf")]
    WaveBackForward,
    #[strum(to_string = "WaveLeftRight", serialize = "wavelr")]
    WaveLeftRight,
    #[strum(to_string = "WaveRightLeft", serialize = "waverl")]
    WaveRightLeft,
    #[strum(to_string = "WaveTurnLeftRight", serialize = "wavetlr")]
    WaveTurnLeftRight,
    #[strum(to_string = "WaveTurnRightLeft", serialize = "wavetrl")]
    WaveTurnRightLeft,
}

impl Maneuver {
    /// What to type on the console to perform it.
    pub fn command(self) -> &'static str {
        use Maneuver::*;
        match self {
            DefaultForwardBack => "deffb",
            DefaultBackForward => "defbf",
            DefaultLeftRight => "deflr",
            DefaultRightLeft => "defrl",
            DefaultTurnLeftRight => "deftlr",
            DefaultTurnRightLeft => "deftrl",
            WaveForwardBack => "wavefb",
            WaveBackForward => "wavebf",
            WaveLeftRight => "wavelr",
            WaveRightLeft => "waverl",
            WaveTurnLeftRight => "wavetlr",
            WaveTurnRightLeft => "wavetrl",
        }
    }

    pub fn routine(self) -> Routine {
        use Gait::*;
        use Maneuver::*;
        match self {
            DefaultForwardBack => tripod("DefaultForwardBack", CrawlForward, CrawlBackward),
            DefaultBackForward => tripod("DefaultBackForward", CrawlBackward, CrawlForward),
            DefaultLeftRight => tripod("DefaultLeftRight", CrawlLeft, CrawlRight),
            DefaultRightLeft => tripod("DefaultRightLeft", CrawlRight, CrawlLeft),
            DefaultTurnLeftRight => tripod("DefaultTurnLeftRight", TurnLeft, TurnRight),
            DefaultTurnRightLeft => tripod("DefaultTurnRightLeft", TurnRight, TurnLeft),
            WaveForwardBack => wave_walk("WaveForwardBack", Walk::Forward, Walk::Backward),
            WaveBackForward => wave_walk("WaveBackForward", Walk::Backward, Walk::Forward),
            WaveLeftRight => wave_walk("WaveLeftRight", Walk::Left, Walk::Right),
            WaveRightLeft => wave_walk("WaveRightLeft", Walk::Right, Walk::Left),
            WaveTurnLeftRight => wave_turn("WaveTurnLeftRight", Turn::Left, Turn::Right),
            WaveTurnRightLeft => wave_turn("WaveTurnRightLeft", Turn::Right, Turn::Left),
        }
    }
}

fn tripod(name: &'static str, there: Gait, back: Gait) -> Routine {
    routine(name).gait(there, 2).hold(PAUSE).gait(back, 2).build()
}

#[derive(Clone, Copy)]
enum Walk {
    Forward,
    Backward,
    Left,
    Right,
}

impl Walk {
    /// Leg order of the wave: the trailing legs reach first.
    fn leg_order(self) -> [LegId; 6] {
        use LegId as L;
        match self {
            Walk::Forward => [
                L::BACK_RIGHT,
                L::BACK_LEFT,
                L::MIDDLE_RIGHT,
                L::MIDDLE_LEFT,
                L::FRONT_RIGHT,
                L::FRONT_LEFT,
            ],
            _ => [
                L::FRONT_RIGHT,
                L::FRONT_LEFT,
                L::MIDDLE_RIGHT,
                L::MIDDLE_LEFT,
                L::BACK_RIGHT,
                L::BACK_LEFT,
            ],
        }
    }

    /// How far a foot reaches and how far the body follows per step.
    fn stride(self) -> (Vec3, Vec3) {
        let (reach, push) = match self {
            Walk::Forward | Walk::Backward => (Mm(15.0), Mm(5.0)),
            Walk::Left | Walk::Right => (Mm(12.0), Mm(4.0)),
        };
        match self {
            Walk::Forward => (forward(reach), forward(push)),
            Walk::Backward => (forward(-reach), forward(-push)),
            Walk::Left => (sideways(-reach), sideways(-push)),
            Walk::Right => (sideways(reach), sideways(push)),
        }
    }
}

/// Lift a leg, carry it by `reach`, and put it down again.
fn reposition(builder: RoutineBuilder, leg: LegId, reach: Vec3) -> RoutineBuilder {
    let lift = up(Mm(25.0));
    builder.leg(leg, lift).leg(leg, reach).leg(leg, -lift)
}

fn wave_pass(builder: RoutineBuilder, walk: Walk) -> RoutineBuilder {
    let (reach, push) = walk.stride();
    builder.each(walk.leg_order(), |r, leg| reposition(r, leg, reach).shift(push))
}

fn wave_walk(name: &'static str, there: Walk, back: Walk) -> Routine {
    let builder = wave_pass(routine(name), there).hold(PAUSE);
    wave_pass(builder, back).build()
}

#[derive(Clone, Copy)]
enum Turn {
    Left,
    Right,
}

fn wave_turn_pass(builder: RoutineBuilder, turn: Turn) -> RoutineBuilder {
    // Turning left swings the right legs forward and the left legs back
    let (sign, body_yaw) = match turn {
        Turn::Left => (1.0, Deg(-10.0)),
        Turn::Right => (-1.0, Deg(10.0)),
    };
    let reach = Mm(10.0) * sign;
    let order = [
        LegId::FRONT_RIGHT,
        LegId::FRONT_LEFT,
        LegId::MIDDLE_RIGHT,
        LegId::MIDDLE_LEFT,
        LegId::BACK_RIGHT,
        LegId::BACK_LEFT,
    ];
    builder
        .each(order, |r, leg| {
            let along = if leg.number() <= 3 { reach } else { -reach };
            reposition(r, leg, forward(along))
        })
        .tilt(yaw(body_yaw))
}

fn wave_turn(name: &'static str, first: Turn, second: Turn) -> Routine {
    let builder = wave_turn_pass(routine(name), first).hold(PAUSE);
    wave_turn_pass(builder, second).build()
}

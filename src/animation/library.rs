//! The authored idle animations.
//!
//! Offsets are relative to the pose at the time of the command, so every
//! excursion is undone before the routine returns to neutral.

use crate::actuation::LegId;
use crate::animation::choreography::{routine, Routine};
use crate::animation::Animation;
use crate::units::{
    forward, offset, pitch, rotation, sideways, up, yaw, Degrees as Deg, Millimeters as Mm,
    Milliseconds as Ms,
};
use glam::Vec3;

pub fn for_animation(animation: Animation) -> Routine {
    match animation {
        Animation::Breathing => breathing(),
        Animation::WeightShift => weight_shift(),
        Animation::LookAround => look_around(),
        Animation::Stretch => stretch(),
        Animation::ShakeOff => shake_off(),
        Animation::Yawn => yawn(),
        Animation::TapFoot => tap_foot(LegId::FRONT_RIGHT),
        Animation::Wave => wave(LegId::FRONT_RIGHT),
        Animation::DanceWiggle => dance_wiggle(),
        Animation::CuriousPeek => curious_peek(),
        Animation::HappyBounce => happy_bounce(3),
        Animation::Startle => startle(),
        Animation::PounceReady => pounce_ready(),
        Animation::VictoryPose => victory_pose(),
        Animation::DrumFingers => drum_fingers(),
        Animation::StandTall => stand_tall(),
        Animation::LieDown => lie_down(),
        Animation::AllLegTwitch => all_leg_twitch(),
    }
}

/// Horizontal direction pointing away from the body for a leg.
/// Right legs (1-3) reach toward -x, left legs (4-6) toward +x.
fn outward(leg: LegId, reach: Mm, splay: Mm) -> Vec3 {
    let side = if leg.number() <= 3 { -1.0 } else { 1.0 };
    let along = match leg.number() {
        1 | 4 => 1.0,
        3 | 6 => -1.0,
        _ => 0.0,
    };
    offset(reach * side, splay * along, Mm(0.0))
}

// Subtle

pub fn breathing() -> Routine {
    let breath = Mm(20.0);
    routine("Breathing")
        .shift(up(breath))
        .hold(Ms(800))
        .shift(up(-breath))
        .hold(Ms(600))
        .build()
}

pub fn weight_shift() -> Routine {
    let shift = Mm(15.0);
    routine("WeightShift")
        .shift(sideways(-shift))
        .hold(Ms(400))
        .shift(sideways(shift * 2.0))
        .hold(Ms(400))
        .build()
}

pub fn look_around() -> Routine {
    let tilt = Deg(8.0);
    routine("LookAround")
        .tilt(yaw(tilt))
        .hold(Ms(300))
        .tilt(yaw(-tilt * 2.0))
        .hold(Ms(300))
        .tilt(rotation(-tilt, Deg(0.0), tilt))
        .hold(Ms(400))
        .build()
}

// Expressive

pub fn stretch() -> Routine {
    let extend = forward(Mm(20.0));
    routine("Stretch")
        .tilt(pitch(Deg(10.0)))
        .hold(Ms(200))
        .leg(LegId::FRONT_RIGHT, extend)
        .leg(LegId::FRONT_LEFT, extend)
        .hold(Ms(400))
        .leg(LegId::FRONT_RIGHT, -extend)
        .leg(LegId::FRONT_LEFT, -extend)
        .build()
}

pub fn shake_off() -> Routine {
    let shake = Deg(10.0);
    routine("ShakeOff")
        .repeat(4, |r| {
            r.tilt(yaw(shake))
                .hold(Ms(80))
                .tilt(yaw(-shake * 2.0))
                .hold(Ms(80))
                .tilt(yaw(shake))
        })
        .build()
}

pub fn yawn() -> Routine {
    routine("Yawn").tilt(pitch(Deg(12.0))).hold(Ms(600)).build()
}

pub fn tap_foot(leg: LegId) -> Routine {
    let tap = up(Mm(15.0));
    routine("TapFoot")
        .each(0..4, |r, tap_index| {
            let r = r.leg(leg, tap).leg(leg, -tap);
            if tap_index < 3 {
                r.hold(Ms(100))
            } else {
                r
            }
        })
        .build()
}

// Playful

pub fn wave(leg: LegId) -> Routine {
    let lift = up(Mm(50.0));
    let swing = Mm(25.0);
    routine("Wave")
        .leg(leg, lift)
        .hold(Ms(200))
        .repeat(3, |r| {
            r.leg(leg, sideways(swing))
                .hold(Ms(150))
                .leg(leg, sideways(-swing * 2.0))
                .hold(Ms(150))
                .leg(leg, sideways(swing))
        })
        .leg(leg, -lift)
        .build()
}

pub fn dance_wiggle() -> Routine {
    let sway = Mm(10.0);
    let bounce = Mm(8.0);
    routine("DanceWiggle")
        .repeat(4, |r| {
            r.twist(offset(-sway, Mm(0.0), bounce), yaw(Deg(5.0)))
                .hold(Ms(150))
                .twist(offset(sway * 2.0, Mm(0.0), -bounce * 2.0), yaw(Deg(-10.0)))
                .hold(Ms(150))
                .twist(offset(-sway, Mm(0.0), bounce), yaw(Deg(5.0)))
        })
        .build()
}

pub fn curious_peek() -> Routine {
    let tilt = Deg(10.0);
    routine("CuriousPeek")
        .shift(forward(Mm(15.0)))
        .hold(Ms(200))
        .tilt(yaw(tilt))
        .hold(Ms(300))
        .tilt(yaw(-tilt * 2.0))
        .hold(Ms(300))
        .build()
}

pub fn happy_bounce(count: usize) -> Routine {
    let bounce = up(Mm(15.0));
    routine("HappyBounce")
        .each(0..count, |r, index| {
            let r = r.shift(bounce).shift(-bounce);
            if index + 1 < count {
                r.hold(Ms(50))
            } else {
                r
            }
        })
        .build()
}

// Dramatic

pub fn startle() -> Routine {
    routine("Startle").shift(up(-Mm(20.0))).hold(Ms(500)).build()
}

pub fn pounce_ready() -> Routine {
    routine("PounceReady").tilt(pitch(Deg(15.0))).hold(Ms(800)).build()
}

pub fn victory_pose() -> Routine {
    routine("VictoryPose")
        .twist(up(Mm(25.0)), pitch(-Deg(8.0)))
        .hold(Ms(1000))
        .build()
}

pub fn drum_fingers() -> Routine {
    let stomp = up(Mm(20.0));
    // Around the body: right side front to back, then left side back to front
    let order = [
        LegId::FRONT_RIGHT,
        LegId::MIDDLE_RIGHT,
        LegId::BACK_RIGHT,
        LegId::BACK_LEFT,
        LegId::MIDDLE_LEFT,
        LegId::FRONT_LEFT,
    ];
    routine("DrumFingers")
        .repeat(2, |r| {
            r.each(order, |r, leg| r.leg(leg, stomp).leg(leg, -stomp).hold(Ms(80)))
        })
        .build()
}

pub fn stand_tall() -> Routine {
    routine("StandTall").shift(up(Mm(35.0))).hold(Ms(1200)).build()
}

pub fn lie_down() -> Routine {
    let extend = Mm(15.0);
    routine("LieDown")
        .shift(up(-Mm(25.0)))
        .hold(Ms(200))
        .each(LegId::ALL, |r, leg| r.leg(leg, outward(leg, extend, extend)))
        .hold(Ms(1500))
        .each(LegId::ALL, |r, leg| r.leg(leg, -outward(leg, extend, extend)))
        .build()
}

pub fn all_leg_twitch() -> Routine {
    let twitch = Mm(12.0);
    routine("AllLegTwitch")
        .repeat(2, |r| {
            r.each(LegId::ALL, |r, leg| r.leg(leg, outward(leg, twitch, Mm(0.0))))
                .hold(Ms(150))
                .each(LegId::ALL, |r, leg| r.leg(leg, -outward(leg, twitch, Mm(0.0))))
                .hold(Ms(100))
        })
        .build()
}

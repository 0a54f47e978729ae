/*
 * Copyright (c) 2020. Beautiful Code BV, Rotterdam, Netherlands
 * Licensed under GNU GENERAL PUBLIC LICENSE Version 3.
 */

//! Physical units for robot motion
//!
//! This module provides type-safe wrappers for the quantities that appear in
//! choreography: body and leg offsets in millimeters, body rotation in degrees,
//! and hold durations in milliseconds.

use glam::Vec3;
use std::ops::{Deref, Mul, Neg};
use std::time::Duration;

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Millimeters(pub f32);

/// Angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Degrees(pub f32);

/// Time in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Milliseconds(pub u64);

/// Time in seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Seconds(pub u32);

impl Deref for Millimeters {
    type Target = f32;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Deref for Degrees {
    type Target = f32;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Deref for Milliseconds {
    type Target = u64;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Deref for Seconds {
    type Target = u32;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

// Conversion implementations

impl Milliseconds {
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Seconds {
    pub fn as_duration(self) -> Duration {
        Duration::from_secs(self.0 as u64)
    }
}

impl From<Milliseconds> for Duration {
    fn from(value: Milliseconds) -> Self {
        value.as_duration()
    }
}

impl From<Seconds> for Duration {
    fn from(value: Seconds) -> Self {
        value.as_duration()
    }
}

// Scalar multiplication for units
impl Mul<f32> for Millimeters {
    type Output = Millimeters;

    fn mul(self, scalar: f32) -> Millimeters {
        Millimeters(*self * scalar)
    }
}

impl Mul<f32> for Degrees {
    type Output = Degrees;

    fn mul(self, scalar: f32) -> Degrees {
        Degrees(*self * scalar)
    }
}

impl Neg for Millimeters {
    type Output = Millimeters;

    fn neg(self) -> Millimeters {
        Millimeters(-self.0)
    }
}

impl Neg for Degrees {
    type Output = Degrees;

    fn neg(self) -> Degrees {
        Degrees(-self.0)
    }
}

// Offsets along the robot body axes: x sideways, y forward, z up

/// Translation vector from millimeter components
pub fn offset(x: Millimeters, y: Millimeters, z: Millimeters) -> Vec3 {
    Vec3::new(x.0, y.0, z.0)
}

/// Rotation vector from degree components (pitch about x, roll about y, yaw about z)
pub fn rotation(pitch: Degrees, roll: Degrees, yaw: Degrees) -> Vec3 {
    Vec3::new(pitch.0, roll.0, yaw.0)
}

pub fn up(height: Millimeters) -> Vec3 {
    Vec3::new(0.0, 0.0, height.0)
}

pub fn forward(distance: Millimeters) -> Vec3 {
    Vec3::new(0.0, distance.0, 0.0)
}

pub fn sideways(distance: Millimeters) -> Vec3 {
    Vec3::new(distance.0, 0.0, 0.0)
}

pub fn pitch(angle: Degrees) -> Vec3 {
    Vec3::new(angle.0, 0.0, 0.0)
}

pub fn yaw(angle: Degrees) -> Vec3 {
    Vec3::new(0.0, 0.0, angle.0)
}

// Display implementations

impl std::fmt::Display for Millimeters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}mm", self.0)
    }
}

impl std::fmt::Display for Degrees {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}°", self.0)
    }
}

impl std::fmt::Display for Milliseconds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

impl std::fmt::Display for Seconds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}s", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_conversions() {
        assert_eq!(Seconds(3).as_duration(), Duration::from_secs(3));
        assert_eq!(Duration::from(Milliseconds(250)), Duration::from_millis(250));
    }

    #[test]
    fn test_scaled_offsets() {
        let shift = Millimeters(15.0);
        assert_eq!(sideways(shift * 2.0), Vec3::new(30.0, 0.0, 0.0));
        assert_eq!(up(-shift), Vec3::new(0.0, 0.0, -15.0));
        assert_eq!(yaw(-Degrees(8.0) * 2.0), Vec3::new(0.0, 0.0, -16.0));
    }
}

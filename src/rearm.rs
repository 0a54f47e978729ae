//! Drawing the idle threshold that follows an animation.

use crate::random::RandomSource;
use crate::units::Seconds;

/// Next idle threshold, `1 + floor(r * r * 4)` seconds for a uniform `r`.
///
/// Squaring skews the draw toward short waits, so the robot stays restless
/// once it has started fidgeting. With `r` in `[0, 1)` the result is 1 to 4;
/// a source that answers exactly 1.0 gives 5.
pub fn next_threshold<R: RandomSource + ?Sized>(random: &mut R) -> Seconds {
    let r = random.uniform_real01().clamp(0.0, 1.0);
    Seconds(1 + (r * r * 4.0).floor() as u32)
}

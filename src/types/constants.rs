//! Numeric building blocks shared by every music type.
//!
//! All distances are counted in half steps; pitch classes wrap at the octave.

/// A signed number of half steps between two tones.
pub type HalfSteps = i8;

/// The distance of a whole step (a major second).
pub const WHOLE_STEP: HalfSteps = 2;

/// The distance of a half step (a minor second).
pub const HALF_STEP: HalfSteps = WHOLE_STEP / 2;

/// The distance of an entire octave.
pub const OCTAVE: HalfSteps = HALF_STEP * 12;

/// The almost universally agreed pitch of A4, in Hz.
pub const STANDARD_CONCERT_PITCH: f64 = 440.0;

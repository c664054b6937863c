use crate::error::TheoryError;
use crate::types::constants::{HalfSteps, HALF_STEP, OCTAVE, STANDARD_CONCERT_PITCH};
use crate::types::namer::PitchNamer;
use anyhow::{anyhow, bail, Result};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

/// A tone identity independent of octave, stored as half steps above C (0-11)
/// 0=C, 1=C#/Db, 2=D, 3=D#/Eb, 4=E, 5=F, 6=F#/Gb, 7=G, 8=G#/Ab, 9=A, 10=A#/Bb, 11=B
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PitchClass(u8);

impl PitchClass {
    pub const C: PitchClass = PitchClass(0);
    pub const D: PitchClass = PitchClass(2);
    pub const E: PitchClass = PitchClass(4);
    pub const F: PitchClass = PitchClass(5);
    pub const G: PitchClass = PitchClass(7);
    pub const A: PitchClass = PitchClass(9);
    pub const B: PitchClass = PitchClass(11);

    /// Create a pitch class from any number of half steps above C.
    /// Values outside 0-11 wrap, so 14 and -10 both give D.
    pub fn new(half_steps: i16) -> Self {
        PitchClass(half_steps.rem_euclid(OCTAVE as i16) as u8)
    }

    /// Half steps above C (0-11)
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Transpose in place. Transposing C by 2, 14, 26, ... all produce D.
    pub fn transpose(&mut self, half_steps: HalfSteps) {
        *self = self.transposed(half_steps);
    }

    pub fn transposed(self, half_steps: HalfSteps) -> Self {
        PitchClass::new(self.0 as i16 + half_steps as i16)
    }

    pub fn sharp(self) -> Self {
        self.transposed(HALF_STEP)
    }

    pub fn flat(self) -> Self {
        self.transposed(-HALF_STEP)
    }

    /// Positive half steps up to the next occurrence of `other`.
    /// The same class is a whole octave away.
    pub fn distance_to_higher(&self, other: PitchClass) -> HalfSteps {
        let diff = (other.0 as HalfSteps - self.0 as HalfSteps).rem_euclid(OCTAVE);
        if diff == 0 {
            OCTAVE
        } else {
            diff
        }
    }

    /// Negative half steps down to the previous occurrence of `other`.
    /// The same class is a whole (negative) octave away.
    pub fn distance_to_lower(&self, other: PitchClass) -> HalfSteps {
        let diff = (other.0 as HalfSteps - self.0 as HalfSteps).rem_euclid(OCTAVE);
        if diff == 0 {
            -OCTAVE
        } else {
            diff - OCTAVE
        }
    }
}

/// Parse a letter name followed by any number of accidentals:
/// `#`/`♯` raise, `b`/`♭` lower. Returns the natural class, the net
/// alteration in half steps and the unparsed tail.
fn parse_class_prefix(s: &str) -> Result<(PitchClass, HalfSteps, &str)> {
    let mut chars = s.char_indices();
    let letter = match chars.next() {
        Some((_, c)) => c.to_ascii_uppercase(),
        None => bail!("Empty pitch name"),
    };

    let natural = match letter {
        'C' => PitchClass::C,
        'D' => PitchClass::D,
        'E' => PitchClass::E,
        'F' => PitchClass::F,
        'G' => PitchClass::G,
        'A' => PitchClass::A,
        'B' => PitchClass::B,
        _ => return Err(TheoryError::UnknownPitchName(s.to_string()).into()),
    };

    let mut alteration: HalfSteps = 0;
    let mut rest = &s[letter.len_utf8()..];
    for (idx, c) in chars {
        match c {
            '#' | '♯' => alteration = alteration.saturating_add(HALF_STEP),
            'b' | '♭' => alteration = alteration.saturating_sub(HALF_STEP),
            _ => return Ok((natural, alteration, &s[idx..])),
        }
        rest = &s[idx + c.len_utf8()..];
    }

    Ok((natural, alteration, rest))
}

impl FromStr for PitchClass {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (natural, alteration, rest) = parse_class_prefix(s)?;
        if !rest.is_empty() {
            bail!("Unexpected trailing characters in pitch class: {}", s);
        }
        Ok(natural.transposed(alteration))
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", PitchNamer::sharp().name(*self))
    }
}

impl Add<HalfSteps> for PitchClass {
    type Output = PitchClass;

    fn add(self, half_steps: HalfSteps) -> Self::Output {
        self.transposed(half_steps)
    }
}

impl Sub<HalfSteps> for PitchClass {
    type Output = PitchClass;

    fn sub(self, half_steps: HalfSteps) -> Self::Output {
        self.transposed(-half_steps)
    }
}

/// A specific tone at a specific octave, e.g. C4 (middle C).
///
/// Stored as the ordinal number of half steps from A4 so distances between
/// pitches are plain subtraction. Physical frequency is not stored: the
/// concert pitch A4 is tuned to is a caller decision. Transposition saturates
/// at the ends of the `i16` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pitch {
    value: i16,
}

/// Half steps from C0 to A4, the origin of `Pitch::value`.
const A4_ABOVE_C0: i32 = 4 * OCTAVE as i32 + 9;

impl Pitch {
    /// The A above middle C, the origin of all pitch values.
    pub const A4: Pitch = Pitch { value: 0 };

    /// Middle C, C4 in scientific pitch notation.
    pub const MIDDLE_C: Pitch = Pitch { value: -9 };

    /// Create the pitch of the given class in the given octave
    pub fn new(class: PitchClass, octave: i8) -> Self {
        Self::saturating_from(octave as i32 * OCTAVE as i32 + class.value() as i32 - A4_ABOVE_C0)
    }

    /// Create a pitch from its half-step distance to A4
    pub fn from_value(value: i16) -> Self {
        Pitch { value }
    }

    /// Create a pitch from a wider half-step distance to A4, clamped to the
    /// representable range
    pub fn saturating_from(value: i32) -> Self {
        Pitch {
            value: value.clamp(i16::MIN as i32, i16::MAX as i32) as i16,
        }
    }

    /// Half steps from A4
    pub fn value(&self) -> i16 {
        self.value
    }

    fn above_c0(&self) -> i32 {
        self.value as i32 + A4_ABOVE_C0
    }

    pub fn class(&self) -> PitchClass {
        PitchClass::new(self.above_c0().rem_euclid(OCTAVE as i32) as i16)
    }

    /// Scientific octave number (middle C is in octave 4).
    ///
    /// The octave is that of the sounding tone: C♭4 is reported as B3.
    pub fn octave(&self) -> i16 {
        self.above_c0().div_euclid(OCTAVE as i32) as i16
    }

    /// Signed half steps from this pitch to `other`; negative when `other` is lower
    pub fn distance_to(&self, other: Pitch) -> i32 {
        other.value as i32 - self.value as i32
    }

    pub fn transpose(&mut self, half_steps: HalfSteps) {
        self.value = self.value.saturating_add(half_steps as i16);
    }

    pub fn transposed(self, half_steps: HalfSteps) -> Self {
        Pitch {
            value: self.value.saturating_add(half_steps as i16),
        }
    }

    /// Raise to the next pitch of the given class. Always moves, by up to an octave.
    pub fn raise_to_next(&mut self, class: PitchClass) {
        self.transpose(self.class().distance_to_higher(class));
    }

    /// Lower to the previous pitch of the given class. Always moves, by up to an octave.
    pub fn lower_to_next(&mut self, class: PitchClass) {
        self.transpose(self.class().distance_to_lower(class));
    }

    /// Frequency in Hz in 12-tone equal temperament, with A4 tuned to `concert_pitch`
    pub fn frequency_hz(&self, concert_pitch: f64) -> f64 {
        2f64.powf(self.value as f64 / OCTAVE as f64) * concert_pitch
    }

    /// Frequency in Hz with A4 at the standard 440 Hz
    pub fn frequency(&self) -> f64 {
        self.frequency_hz(STANDARD_CONCERT_PITCH)
    }
}

impl FromStr for Pitch {
    type Err = anyhow::Error;

    /// Parse names like `C4`, `Bb3`, `F♯5` or `G-1`. A missing octave means octave 4.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (natural, alteration, octave_part) = parse_class_prefix(s)?;

        let octave = if octave_part.is_empty() {
            4
        } else {
            octave_part
                .parse::<i8>()
                .map_err(|_| anyhow!("Invalid octave: {}", octave_part))?
        };

        Ok(Pitch::new(natural, octave).transposed(alteration))
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.class(), self.octave())
    }
}

impl Add<HalfSteps> for Pitch {
    type Output = Pitch;

    fn add(self, half_steps: HalfSteps) -> Self::Output {
        self.transposed(half_steps)
    }
}

impl Sub<HalfSteps> for Pitch {
    type Output = Pitch;

    fn sub(self, half_steps: HalfSteps) -> Self::Output {
        self.transposed(-half_steps)
    }
}

// Interval between two pitches
impl Sub<Pitch> for Pitch {
    type Output = i32;

    fn sub(self, other: Pitch) -> Self::Output {
        other.distance_to(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pitch_class_wraps() {
        assert_eq!(PitchClass::new(14), PitchClass::D);
        assert_eq!(PitchClass::new(-10), PitchClass::D);
        assert_eq!(PitchClass::B + 1, PitchClass::C);
        assert_eq!(PitchClass::C - 2, PitchClass::new(10));
    }

    #[test]
    fn test_distance_to_higher_pitch_class() {
        assert_eq!(PitchClass::C.distance_to_higher(PitchClass::E), 4);
        assert_eq!(PitchClass::G.distance_to_higher(PitchClass::C), 5);
        assert_eq!(PitchClass::A.distance_to_higher(PitchClass::A), OCTAVE);
    }

    #[test]
    fn test_distance_to_lower_pitch_class() {
        assert_eq!(PitchClass::E.distance_to_lower(PitchClass::C), -4);
        assert_eq!(PitchClass::C.distance_to_lower(PitchClass::G), -5);
        assert_eq!(PitchClass::A.distance_to_lower(PitchClass::A), -OCTAVE);
    }

    #[test]
    fn test_pitch_class_parsing() {
        assert_eq!("C".parse::<PitchClass>().unwrap(), PitchClass::C);
        assert_eq!("c#".parse::<PitchClass>().unwrap(), PitchClass::new(1));
        assert_eq!("D♭".parse::<PitchClass>().unwrap(), PitchClass::new(1));
        assert_eq!("Bb".parse::<PitchClass>().unwrap(), PitchClass::new(10));
        assert_eq!("Cb".parse::<PitchClass>().unwrap(), PitchClass::B);
        assert!("H".parse::<PitchClass>().is_err());
        assert!("C4".parse::<PitchClass>().is_err());
    }

    #[test]
    fn test_octave() {
        let middle_c = Pitch::MIDDLE_C;
        assert_eq!(middle_c.octave(), 4);
        assert_eq!(middle_c.transposed(-1).octave(), 3);
        assert_eq!(middle_c.transposed(11).octave(), 4);
        assert_eq!(middle_c.transposed(12).octave(), 5);
        assert_eq!(middle_c.transposed(-11).octave(), 3);
        assert_eq!(middle_c.transposed(-12).octave(), 3);
    }

    #[test]
    fn test_pitch_construction() {
        assert_eq!(Pitch::new(PitchClass::A, 4), Pitch::A4);
        assert_eq!(Pitch::new(PitchClass::C, 4), Pitch::MIDDLE_C);
        assert_eq!(Pitch::new(PitchClass::G, 3).class(), PitchClass::G);
        assert_eq!(Pitch::new(PitchClass::B, 3).distance_to(Pitch::MIDDLE_C), 1);
    }

    #[test]
    fn test_pitch_parsing() {
        let bb3: Pitch = "Bb3".parse().unwrap();
        assert_eq!(bb3.class(), PitchClass::new(10));
        assert_eq!(bb3.octave(), 3);

        let g_neg1: Pitch = "G-1".parse().unwrap();
        assert_eq!(g_neg1.class(), PitchClass::G);
        assert_eq!(g_neg1.octave(), -1);

        let c: Pitch = "C".parse().unwrap();
        assert_eq!(c, Pitch::MIDDLE_C);

        let c_flat: Pitch = "Cb4".parse().unwrap();
        assert_eq!(c_flat.to_string(), "B3");
        assert_eq!("B#3".parse::<Pitch>().unwrap(), Pitch::MIDDLE_C);

        assert!("X4".parse::<Pitch>().is_err());
        assert!("C4x".parse::<Pitch>().is_err());
    }

    #[test]
    fn test_raise_and_lower_to_next() {
        let mut p = Pitch::A4;
        p.lower_to_next(PitchClass::C);
        assert_eq!(p, Pitch::MIDDLE_C);

        p.raise_to_next(PitchClass::C);
        assert_eq!(p, Pitch::new(PitchClass::C, 5));

        let mut q = Pitch::MIDDLE_C;
        q.raise_to_next(PitchClass::G);
        assert_eq!(q, Pitch::new(PitchClass::G, 4));
    }

    #[test]
    fn test_extreme_pitches_stay_nameable() {
        let top = Pitch::from_value(i16::MAX);
        assert_eq!(top.class(), PitchClass::E);
        assert_eq!(top.octave(), 2735);
        assert_eq!(top.to_string(), "E2735");

        let mut climbing = Pitch::MIDDLE_C;
        for _ in 0..400 {
            climbing.transpose(127);
        }
        assert_eq!(climbing, top);
        assert_eq!(climbing.octave(), 2735);

        let bottom = Pitch::from_value(i16::MIN);
        assert_eq!(bottom.distance_to(top), u16::MAX as i32);
        assert_eq!(bottom - top, -(u16::MAX as i32));
        assert_eq!(Pitch::saturating_from(i32::MIN), bottom);
    }

    #[test]
    fn test_frequencies() {
        assert!((Pitch::A4.frequency() - 440.0).abs() < 1e-9);
        assert!((Pitch::A4.frequency_hz(STANDARD_CONCERT_PITCH) - 440.0).abs() < 1e-9);
        assert!((Pitch::A4.transposed(12).frequency_hz(440.0) - 880.0).abs() < 1e-9);
        assert!((Pitch::MIDDLE_C.frequency_hz(440.0) - 261.6256).abs() < 1e-3);
        assert!((Pitch::A4.frequency_hz(432.0) - 432.0).abs() < 1e-9);
    }

    #[test]
    fn test_display() {
        assert_eq!(Pitch::MIDDLE_C.to_string(), "C4");
        assert_eq!("F#2".parse::<Pitch>().unwrap().to_string(), "F♯2");
        assert_eq!(PitchClass::new(10).to_string(), "A♯");
    }

    #[test]
    fn test_interval_between_pitches() {
        let c4: Pitch = "C4".parse().unwrap();
        let g4: Pitch = "G4".parse().unwrap();
        assert_eq!(g4 - c4, 7);
        assert_eq!(c4 - g4, -7);
    }
}

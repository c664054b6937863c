//! The well-known scale and mode patterns
//!
//! Modes are rotations of the Ionian pattern; the major and natural minor
//! scales are the Ionian and Aeolian modes.

use crate::types::constants::{HalfSteps, HALF_STEP, WHOLE_STEP};
use crate::types::pattern::Pattern;

const H: HalfSteps = HALF_STEP;
const W: HalfSteps = WHOLE_STEP;
/// Augmented second
const WH: HalfSteps = WHOLE_STEP + HALF_STEP;

/// The number of notes in a mode
pub const NOTES_IN_MODE: usize = 7;

/// Degree of a diatonic scale, counted from 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScaleDegree {
    /// The key note
    Tonic = 1,
    Supertonic = 2,
    Mediant = 3,
    /// A fifth below the tonic
    Subdominant = 4,
    /// A fifth above the tonic
    Dominant = 5,
    Submediant = 6,
    /// A half step below the tonic
    LeadingTone = 7,
}

impl ScaleDegree {
    /// Zero-based position of the degree in a scale pattern
    pub fn index(self) -> usize {
        self as usize - 1
    }
}

pub fn ionian_mode() -> Pattern {
    Pattern::from_steps(&[W, W, H, W, W, W, H])
}

pub fn dorian_mode() -> Pattern {
    ionian_mode().offset(1)
}

pub fn phrygian_mode() -> Pattern {
    ionian_mode().offset(2)
}

pub fn lydian_mode() -> Pattern {
    ionian_mode().offset(3)
}

pub fn mixolydian_mode() -> Pattern {
    ionian_mode().offset(4)
}

pub fn aeolian_mode() -> Pattern {
    ionian_mode().offset(5)
}

pub fn locrian_mode() -> Pattern {
    ionian_mode().offset(6)
}

/// The mode built on the given degree of the major scale
pub fn mode(degree: ScaleDegree) -> Pattern {
    ionian_mode().offset(degree.index() as isize)
}

/// All seven modes, from I (Ionian) to VII (Locrian)
pub fn modes() -> [(&'static str, Pattern); NOTES_IN_MODE] {
    [
        ("Ionian", ionian_mode()),
        ("Dorian", dorian_mode()),
        ("Phrygian", phrygian_mode()),
        ("Lydian", lydian_mode()),
        ("Mixolydian", mixolydian_mode()),
        ("Aeolian", aeolian_mode()),
        ("Locrian", locrian_mode()),
    ]
}

pub fn major_scale() -> Pattern {
    ionian_mode()
}

/// The natural minor scale
pub fn minor_scale() -> Pattern {
    aeolian_mode()
}

pub fn harmonic_minor_scale() -> Pattern {
    Pattern::from_steps(&[W, H, W, W, H, WH, H])
}

pub fn melodic_minor_ascending_scale() -> Pattern {
    Pattern::from_steps(&[W, H, W, W, W, W, H])
}

/// The descending melodic minor, which falls as the natural minor does
pub fn melodic_minor_descending_scale() -> Pattern {
    Pattern::from_steps(&[-W, -W, -H, -W, -W, -H, -W])
}

pub fn chromatic_scale() -> Pattern {
    Pattern::from_steps(&[H; 12])
}

/// The octatonic whole-half diminished scale
pub fn symmetric_scale() -> Pattern {
    Pattern::from_steps(&[W, H, W, H, W, H, W, H])
}

pub fn whole_tone_scale() -> Pattern {
    Pattern::from_steps(&[W; 6])
}

pub fn major_pentatonic_scale() -> Pattern {
    Pattern::from_steps(&[W, W, WH, W, WH])
}

pub fn minor_pentatonic_scale() -> Pattern {
    Pattern::from_steps(&[WH, W, W, WH, W])
}

/// Name for a scale with the given number of notes per octave.
///
/// Not to be confused with *diatonic*, which names a kind of heptatonic scale.
pub fn scale_order_name(notes: usize) -> Option<&'static str> {
    match notes {
        1 => Some("Monotonic"),
        2 => Some("Ditonic"),
        3 => Some("Tritonic"),
        4 => Some("Tetratonic"),
        5 => Some("Pentatonic"),
        6 => Some("Hexatonic"),
        7 => Some("Heptatonic"),
        8 => Some("Octatonic"),
        12 => Some("Chromatic"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modes_are_rotations() {
        assert_eq!(dorian_mode().intervals(), &[2, 1, 2, 2, 2, 1, 2]);
        assert_eq!(aeolian_mode().intervals(), &[2, 1, 2, 2, 1, 2, 2]);
        assert_eq!(locrian_mode().intervals(), &[1, 2, 2, 1, 2, 2, 2]);
        assert_eq!(mode(ScaleDegree::Dominant), mixolydian_mode());
        assert_eq!(mode(ScaleDegree::Tonic), major_scale());
    }

    #[test]
    fn test_octave_scales_repeat() {
        for (name, pattern) in modes() {
            assert!(pattern.repeats_at_octave(), "{}", name);
        }
        for pattern in [
            harmonic_minor_scale(),
            melodic_minor_ascending_scale(),
            chromatic_scale(),
            symmetric_scale(),
            whole_tone_scale(),
            major_pentatonic_scale(),
            minor_pentatonic_scale(),
        ] {
            assert!(pattern.repeats_at_octave(), "{}", pattern);
        }
        assert_eq!(melodic_minor_descending_scale().sum(), -12);
    }

    #[test]
    fn test_descending_melodic_minor_mirrors_natural_minor() {
        assert_eq!(melodic_minor_descending_scale(), minor_scale().reverse());
    }

    #[test]
    fn test_pentatonics_are_related() {
        assert_eq!(major_pentatonic_scale().offset(4), minor_pentatonic_scale());
    }

    #[test]
    fn test_scale_order_names() {
        assert_eq!(scale_order_name(major_pentatonic_scale().len()), Some("Pentatonic"));
        assert_eq!(scale_order_name(chromatic_scale().len()), Some("Chromatic"));
        assert_eq!(scale_order_name(10), None);
    }
}

//! Chord shapes as open interval patterns
//!
//! Each constructor returns the gaps between adjacent tones in root position.
//! `qualities()` lists the shapes the chord dictionary knows, paired with the
//! suffix appended to the root name when a chord is recognised.

use crate::types::pattern::Pattern;

/// Root and fifth only
pub fn power_chord() -> Pattern {
    Pattern::from_steps(&[7])
}

pub fn major_triad() -> Pattern {
    Pattern::from_steps(&[4, 3])
}

pub fn minor_triad() -> Pattern {
    Pattern::from_steps(&[3, 4])
}

pub fn diminished_triad() -> Pattern {
    Pattern::from_steps(&[3, 3])
}

pub fn augmented_triad() -> Pattern {
    Pattern::from_steps(&[4, 4])
}

/// The fourth replaces the third
pub fn suspended_triad() -> Pattern {
    Pattern::from_steps(&[5, 2])
}

pub fn dominant_seventh() -> Pattern {
    Pattern::from_steps(&[4, 3, 3])
}

pub fn major_seventh() -> Pattern {
    Pattern::from_steps(&[4, 3, 4])
}

pub fn minor_seventh() -> Pattern {
    Pattern::from_steps(&[3, 4, 3])
}

/// Diminished triad with a minor seventh (m7♭5)
pub fn half_diminished_seventh() -> Pattern {
    Pattern::from_steps(&[3, 3, 4])
}

pub fn diminished_seventh() -> Pattern {
    Pattern::from_steps(&[3, 3, 3])
}

pub fn minor_major_seventh() -> Pattern {
    Pattern::from_steps(&[3, 4, 4])
}

pub fn augmented_seventh() -> Pattern {
    Pattern::from_steps(&[4, 4, 2])
}

pub fn dominant_ninth() -> Pattern {
    Pattern::from_steps(&[4, 3, 3, 4])
}

pub fn major_ninth() -> Pattern {
    Pattern::from_steps(&[4, 3, 4, 3])
}

pub fn minor_ninth() -> Pattern {
    Pattern::from_steps(&[3, 4, 3, 4])
}

pub fn dominant_eleventh() -> Pattern {
    Pattern::from_steps(&[4, 3, 3, 4, 3])
}

pub fn dominant_thirteenth() -> Pattern {
    Pattern::from_steps(&[4, 3, 3, 4, 3, 4])
}

/// Every known chord shape with its display suffix, in registration order
pub fn qualities() -> Vec<(&'static str, Pattern)> {
    vec![
        ("5", power_chord()),
        (" Major", major_triad()),
        (" Minor", minor_triad()),
        (" Diminished", diminished_triad()),
        (" Augmented", augmented_triad()),
        (" Suspended", suspended_triad()),
        (" Dominant Seventh", dominant_seventh()),
        (" Major Seventh", major_seventh()),
        (" Minor Seventh", minor_seventh()),
        (" Half-Diminished Seventh", half_diminished_seventh()),
        (" Diminished Seventh", diminished_seventh()),
        (" Minor Major Seventh", minor_major_seventh()),
        (" Augmented Seventh", augmented_seventh()),
        (" Dominant Ninth", dominant_ninth()),
        (" Major Ninth", major_ninth()),
        (" Minor Ninth", minor_ninth()),
        (" Dominant Eleventh", dominant_eleventh()),
        (" Dominant Thirteenth", dominant_thirteenth()),
    ]
}

//! Diatonic chord building: stack thirds on a degree of a scale pattern
//!
//! Intervals are counted in scale steps from the chord root, so the third of
//! a chord on the second degree of C major is F, a minor third above D.

use crate::types::chord::Chord;
use crate::types::pattern::Pattern;
use crate::types::pitch::Pitch;

/// A diatonic interval, counted from 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Interval {
    Unison = 1,
    Second = 2,
    Third = 3,
    Fourth = 4,
    Fifth = 5,
    Sixth = 6,
    Seventh = 7,
    Octave = 8,
    Ninth = 9,
    Tenth = 10,
    Eleventh = 11,
    Twelfth = 12,
    Thirteenth = 13,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordFactory {
    pattern: Pattern,
    tonic: Pitch,
    offset: usize, // Scale degree of the chord root, 0 for the tonic
}

impl ChordFactory {
    pub fn new(pattern: Pattern, tonic: Pitch, offset: usize) -> Self {
        ChordFactory {
            pattern,
            tonic,
            offset,
        }
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn tonic(&self) -> Pitch {
        self.tonic
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The pitch `interval` scale steps above the chord root, walking the
    /// pattern cyclically past its end
    pub fn pitch(&self, interval: Interval) -> Pitch {
        let steps = (interval as usize - 1).saturating_add(self.offset);
        let len = self.pattern.len();
        let cycles = i64::try_from(steps / len).unwrap_or(i64::MAX);
        let partial: i64 = self.pattern.intervals()[..steps % len]
            .iter()
            .map(|&i| i as i64)
            .sum();

        let distance = cycles
            .saturating_mul(self.pattern.sum() as i64)
            .saturating_add(partial)
            .saturating_add(self.tonic.value() as i64);
        Pitch::saturating_from(distance.clamp(i32::MIN as i64, i32::MAX as i64) as i32)
    }

    pub fn root(&self) -> Pitch {
        self.pitch(Interval::Unison)
    }

    pub fn has_major_third(&self) -> bool {
        self.root().distance_to(self.pitch(Interval::Third)) == 4
    }

    pub fn has_perfect_fourth(&self) -> bool {
        self.root().distance_to(self.pitch(Interval::Fourth)) == 5
    }

    pub fn has_perfect_fifth(&self) -> bool {
        self.root().distance_to(self.pitch(Interval::Fifth)) == 7
    }

    /// Root, third and fifth
    pub fn triad(&self) -> Chord {
        self.chord(&[Interval::Unison, Interval::Third, Interval::Fifth])
    }

    /// Root, third, fifth and seventh
    pub fn seventh(&self) -> Chord {
        self.chord(&[
            Interval::Unison,
            Interval::Third,
            Interval::Fifth,
            Interval::Seventh,
        ])
    }

    pub fn chord(&self, intervals: &[Interval]) -> Chord {
        Chord::new(intervals.iter().map(|&i| self.pitch(i)).collect())
    }
}

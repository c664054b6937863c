//! Interval patterns: the shape of a scale or chord as half-step gaps
//!
//! A pattern is cyclic, so indexing past its end wraps to the start. Two
//! forms occur for chords:
//!
//! - *open*: the gaps between adjacent chord tones, one fewer than the tones
//!   (`[4, 3]` for a major triad)
//! - *closed*: the open form plus the gap from the top tone back to the root an
//!   octave up, summing to an octave (`[4, 3, 5]`)
//!
//! Scales are written in closed form.

use crate::error::{Result, TheoryError};
use crate::types::constants::{HalfSteps, OCTAVE};
use crate::types::pitch::Pitch;
use crate::types::singer::PatternSinger;
use std::fmt;

/// An ordered, non-empty sequence of half-step intervals
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    intervals: Vec<HalfSteps>,
}

#[allow(clippy::len_without_is_empty)]
impl Pattern {
    /// Create a pattern from the given intervals. Fails if there are none.
    pub fn new(intervals: Vec<HalfSteps>) -> Result<Self> {
        if intervals.is_empty() {
            return Err(TheoryError::EmptyPattern);
        }
        Ok(Pattern { intervals })
    }

    /// Build from a non-empty literal; only used for the well-known patterns
    pub(crate) fn from_steps(intervals: &[HalfSteps]) -> Self {
        debug_assert!(!intervals.is_empty());
        Pattern {
            intervals: intervals.to_vec(),
        }
    }

    pub fn intervals(&self) -> &[HalfSteps] {
        &self.intervals
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Interval at `index`, wrapping in both directions
    pub fn at(&self, index: isize) -> HalfSteps {
        self.intervals[index.rem_euclid(self.len() as isize) as usize]
    }

    /// Total span of the pattern in half steps
    pub fn sum(&self) -> i32 {
        self.intervals
            .iter()
            .fold(0i32, |total, &i| total.saturating_add(i as i32))
    }

    pub fn repeats_at_octave(&self) -> bool {
        self.sum() == OCTAVE as i32
    }

    /// True when the pattern stays within one octave of its start
    pub fn spans_within_octave(&self) -> bool {
        self.sum() <= OCTAVE as i32
    }

    /// Number of chord tones the pattern describes: one per interval in
    /// closed form, one more than the intervals in open form
    pub fn note_count(&self) -> usize {
        if self.repeats_at_octave() {
            self.len()
        } else {
            self.len() + 1
        }
    }

    /// A copy rotated to start `k` intervals in. Negative `k` counts from the end.
    pub fn offset(&self, k: isize) -> Pattern {
        let start = k.rem_euclid(self.len() as isize) as usize;
        let mut intervals = self.intervals.clone();
        intervals.rotate_left(start);
        Pattern { intervals }
    }

    /// The same line walked backwards: `[3, 2, 1]` becomes `[-1, -2, -3]`.
    /// An ascending major scale reverses into the descending one.
    pub fn reverse(&self) -> Pattern {
        Pattern {
            intervals: self.intervals.iter().rev().map(|&i| -i).collect(),
        }
    }

    /// The next inversion: the lowest tone moves up an octave.
    ///
    /// A closed pattern rotates by one. An open pattern drops its first gap
    /// and gains the gap from its old top tone to the old root an octave up,
    /// so `[4, 3]` becomes `[3, 5]`.
    pub fn invert(&self) -> Pattern {
        let rest = &self.intervals[1..];
        let closing = if self.repeats_at_octave() {
            self.intervals[0] as i32
        } else {
            (OCTAVE as i32).saturating_sub(self.sum())
        };

        let mut intervals = Vec::with_capacity(self.len());
        intervals.extend_from_slice(rest);
        intervals.push(closing.clamp(HalfSteps::MIN as i32, HalfSteps::MAX as i32) as HalfSteps);
        Pattern { intervals }
    }

    /// Every inversion in order, starting with root position
    pub fn inversions(&self) -> impl Iterator<Item = Pattern> {
        std::iter::successors(Some(self.clone()), |p| Some(p.invert())).take(self.note_count())
    }

    /// True if some inversion other than root position has the same shape,
    /// as with the augmented triad `[4, 4]` or diminished seventh `[3, 3, 3]`
    pub fn is_inversion_symmetric(&self) -> bool {
        self.inversions().skip(1).any(|p| p == *self)
    }

    /// The closed form of an open pattern, or the pattern itself if it already
    /// closes at the octave. `None` if it spans more than an octave, or if the
    /// closing gap does not fit in a single interval.
    pub fn closed(&self) -> Option<Pattern> {
        let sum = self.sum();
        if sum == OCTAVE as i32 {
            return Some(self.clone());
        }
        if sum > OCTAVE as i32 {
            return None;
        }

        let closing = HalfSteps::try_from((OCTAVE as i32).saturating_sub(sum)).ok()?;
        let mut intervals = self.intervals.clone();
        intervals.push(closing);
        Some(Pattern { intervals })
    }

    /// Sing this pattern upwards from `start`
    pub fn ascending_singer(&self, start: Pitch) -> PatternSinger {
        PatternSinger::new(self.clone(), start)
    }

    /// Sing this pattern downwards from `start`
    pub fn descending_singer(&self, start: Pitch) -> PatternSinger {
        PatternSinger::new(self.reverse(), start)
    }
}

impl TryFrom<Vec<HalfSteps>> for Pattern {
    type Error = TheoryError;

    fn try_from(intervals: Vec<HalfSteps>) -> Result<Self> {
        Pattern::new(intervals)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, interval) in self.intervals.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", interval)?;
        }
        write!(f, "]")
    }
}

/// A pattern anchored at a specific pitch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootedPattern {
    pattern: Pattern,
    root: Pitch,
}

impl RootedPattern {
    pub fn new(pattern: Pattern, root: Pitch) -> Self {
        Self { pattern, root }
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn root(&self) -> Pitch {
        self.root
    }

    pub fn transpose(&mut self, half_steps: HalfSteps) {
        self.root.transpose(half_steps);
    }

    /// Sing the pattern from its root
    pub fn singer(&self) -> PatternSinger {
        self.pattern.ascending_singer(self.root)
    }

    /// Sing the pattern in reverse from its root
    pub fn reverse_singer(&self) -> PatternSinger {
        self.pattern.descending_singer(self.root)
    }
}

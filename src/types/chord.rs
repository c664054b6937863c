use crate::dictionary::PatternDictionary;
use crate::recognizer::{self, ChordMatch};
use crate::types::constants::{HalfSteps, OCTAVE};
use crate::types::namer::PitchNamer;
use crate::types::pitch::{Pitch, PitchClass};
use anyhow::Result;
use std::fmt;
use std::ops::{Add, Sub};

/// A voiced chord: specific pitches, possibly spread over several octaves
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Chord {
    pitches: Vec<Pitch>, // Input order is kept; recognition sorts a copy
}

impl Chord {
    pub fn new(pitches: Vec<Pitch>) -> Self {
        Chord { pitches }
    }

    /// Create a chord from pitch names (e.g. `["G3", "C4", "E4"]`).
    /// Names without an octave are stacked upwards starting at octave 4, so
    /// `["F", "A", "C"]` becomes F4, A4, C5 rather than F4, A4, C4.
    pub fn from_pitch_strings(names: &[&str]) -> Result<Self> {
        let mut pitches: Vec<Pitch> = Vec::with_capacity(names.len());

        for name in names {
            let parsed: Pitch = name.parse()?;
            let has_explicit_octave = name.chars().any(|c| c.is_ascii_digit());

            let pitch = match pitches.last() {
                Some(&previous) if !has_explicit_octave => {
                    // Next occurrence of this class strictly above the previous pitch
                    let mut stacked = previous;
                    stacked.raise_to_next(parsed.class());
                    stacked
                }
                _ => parsed,
            };
            pitches.push(pitch);
        }

        Ok(Self::new(pitches))
    }

    pub fn len(&self) -> usize {
        self.pitches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pitches.is_empty()
    }

    /// The pitches in input order
    pub fn pitches(&self) -> &[Pitch] {
        &self.pitches
    }

    /// The lowest pitch
    pub fn bass(&self) -> Option<Pitch> {
        self.pitches.iter().min().copied()
    }

    /// The distinct pitch classes, ascending from C
    pub fn pitch_classes(&self) -> Vec<PitchClass> {
        let mut classes: Vec<PitchClass> = self.pitches.iter().map(Pitch::class).collect();
        classes.sort();
        classes.dedup();
        classes
    }

    /// Distance from the lowest to the highest pitch
    pub fn span(&self) -> i32 {
        match (self.pitches.iter().min(), self.pitches.iter().max()) {
            (Some(low), Some(high)) => low.distance_to(*high),
            _ => 0,
        }
    }

    /// True when every pitch lies within one octave of the bass
    pub fn is_close_voiced(&self) -> bool {
        self.span() < OCTAVE as i32
    }

    pub fn transpose(self, half_steps: HalfSteps) -> Self {
        Chord {
            pitches: self
                .pitches
                .into_iter()
                .map(|p| p.transposed(half_steps))
                .collect(),
        }
    }

    /// Recognise this voicing; inversions report their bass
    pub fn identify(&self, dictionary: &PatternDictionary) -> Option<ChordMatch> {
        recognizer::identify_pitches(dictionary, &self.pitches)
    }

    /// Name this voicing, e.g. `"C Major/G"` for G3 C4 E4
    pub fn name(&self, dictionary: &PatternDictionary, namer: &PitchNamer) -> Option<String> {
        recognizer::get_pitches_name(dictionary, namer, &self.pitches)
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.pitches.iter().map(|p| p.to_string()).collect();
        write!(f, "[{}]", names.join(", "))
    }
}

// Arithmetic operations for transposition
impl Add<HalfSteps> for Chord {
    type Output = Chord;

    fn add(self, half_steps: HalfSteps) -> Self::Output {
        self.transpose(half_steps)
    }
}

impl Sub<HalfSteps> for Chord {
    type Output = Chord;

    fn sub(self, half_steps: HalfSteps) -> Self::Output {
        self.transpose(-half_steps)
    }
}

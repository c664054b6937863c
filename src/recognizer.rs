//! Chord recognition
//!
//! Two ways to present a chord:
//!
//! - an unordered set of pitch classes. The query is the sorted classes'
//!   adjacent gaps plus the gap wrapping back to the first class, so it always
//!   spans exactly an octave. Octave information is gone: a ninth looks like a
//!   second, and no bass note can be reported.
//! - an ordered set of absolute pitches. The query is the adjacent gaps only,
//!   so wide voicings and extended chords can be named, and an inversion is
//!   reported with its bass as a slash chord (`C Major/G`).
//!
//! In both cases the first chord entry registered for the signature wins.

use crate::dictionary::{Entry, PatternDictionary};
use crate::types::constants::{HalfSteps, OCTAVE};
use crate::types::namer::PitchNamer;
use crate::types::pattern::Pattern;
use crate::types::pitch::{Pitch, PitchClass};
#[cfg(feature = "colored")]
use colored::*;
use log::trace;
use std::fmt;

/// A recognised chord
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordMatch {
    root: PitchClass,
    bass: Option<PitchClass>,
    quality: String,
    root_index: usize,
}

impl ChordMatch {
    pub fn root(&self) -> PitchClass {
        self.root
    }

    /// The lowest tone, when it is not the root
    pub fn bass(&self) -> Option<PitchClass> {
        self.bass
    }

    /// The suffix appended to the root name, e.g. `" Major"`
    pub fn quality(&self) -> &str {
        &self.quality
    }

    /// Position of the root among the sorted input
    pub fn root_index(&self) -> usize {
        self.root_index
    }

    /// Render as `"<Root><Quality>"`, or `"<Root><Quality>/<Bass>"` for an
    /// inverted voicing
    pub fn render(&self, namer: &PitchNamer) -> String {
        match self.bass {
            Some(bass) => format!(
                "{}{}/{}",
                namer.name(self.root),
                self.quality,
                namer.name(bass)
            ),
            None => format!("{}{}", namer.name(self.root), self.quality),
        }
    }
}

#[cfg(feature = "colored")]
impl fmt::Display for ChordMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let namer = PitchNamer::sharp();
        let name = format!("{}{}", namer.name(self.root), self.quality);

        let colored_name = if self.quality.contains("Minor") {
            name.red().bold()
        } else if self.quality.contains("Major") {
            name.blue().bold()
        } else if self.quality.contains("Diminished") {
            name.purple().bold()
        } else if self.quality.contains("Augmented") {
            name.bright_red().bold()
        } else if self.quality.contains("Suspended") {
            name.yellow().bold()
        } else {
            name.green().bold()
        };

        match self.bass {
            Some(bass) => write!(f, "{}/{}", colored_name, namer.name(bass).magenta().bold()),
            None => write!(f, "{}", colored_name),
        }
    }
}

// Plain Display impl for builds without colour
#[cfg(not(feature = "colored"))]
impl fmt::Display for ChordMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(&PitchNamer::sharp()))
    }
}

/// Chord entries registered for `query`, in insertion order, with their root index
fn chord_entries<'a>(
    dictionary: &'a PatternDictionary,
    query: &Pattern,
) -> impl Iterator<Item = (&'a str, usize)> {
    dictionary
        .get_entries(query)
        .iter()
        .filter_map(|entry| match entry {
            Entry::Chord { name, root_index } => Some((name.as_str(), *root_index)),
            Entry::Scale { .. } => None,
        })
}

/// Identify a chord from an unordered set of pitch classes.
///
/// Repeated classes count once. Fewer than two distinct classes never match.
pub fn identify_pitch_classes(
    dictionary: &PatternDictionary,
    classes: &[PitchClass],
) -> Option<ChordMatch> {
    let mut sorted = classes.to_vec();
    sorted.sort();
    sorted.dedup();
    if sorted.len() < 2 {
        trace!("Need at least two pitch classes, got {}", sorted.len());
        return None;
    }

    let mut intervals: Vec<HalfSteps> = sorted
        .windows(2)
        .map(|pair| (pair[1].value() - pair[0].value()) as HalfSteps)
        .collect();
    let first = sorted[0].value() as HalfSteps;
    let last = sorted[sorted.len() - 1].value() as HalfSteps;
    intervals.push((first - last).rem_euclid(OCTAVE));

    let query = Pattern::new(intervals).ok()?;
    trace!("Pitch class query {}", query);

    chord_entries(dictionary, &query).find_map(|(quality, root_index)| {
        sorted.get(root_index).map(|&root| ChordMatch {
            root,
            bass: None,
            quality: quality.to_string(),
            root_index,
        })
    })
}

/// Name a chord from an unordered set of pitch classes, e.g. `"C Major"`
pub fn get_chord_name(
    dictionary: &PatternDictionary,
    namer: &PitchNamer,
    classes: &[PitchClass],
) -> Option<String> {
    identify_pitch_classes(dictionary, classes).map(|m| m.render(namer))
}

/// Identify a chord from absolute pitches in any order.
///
/// The lowest pitch is the bass. Unisons and gaps of an octave or more never
/// match, since no chord shape contains them.
pub fn identify_pitches(dictionary: &PatternDictionary, pitches: &[Pitch]) -> Option<ChordMatch> {
    let mut sorted = pitches.to_vec();
    sorted.sort();
    if sorted.len() < 2 {
        trace!("Need at least two pitches, got {}", sorted.len());
        return None;
    }

    let intervals: Vec<HalfSteps> = sorted
        .windows(2)
        .map(|pair| HalfSteps::try_from(pair[0].distance_to(pair[1])).ok())
        .collect::<Option<_>>()?;

    let query = Pattern::new(intervals).ok()?;
    trace!("Voicing query {}", query);

    let lowest = sorted[0].class();
    chord_entries(dictionary, &query).find_map(|(quality, root_index)| {
        sorted.get(root_index).map(|root| ChordMatch {
            root: root.class(),
            bass: (root_index > 0).then_some(lowest),
            quality: quality.to_string(),
            root_index,
        })
    })
}

/// Name a chord from absolute pitches, with slash notation for inversions
pub fn get_pitches_name(
    dictionary: &PatternDictionary,
    namer: &PitchNamer,
    pitches: &[Pitch],
) -> Option<String> {
    identify_pitches(dictionary, pitches).map(|m| m.render(namer))
}

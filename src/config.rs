//! Dictionary and naming configuration
//!
//! Plain data with presets for the dictionaries this crate builds. A preset
//! fixes the legal interval range of the underlying trie and the way patterns
//! are expanded on insertion.

use crate::trie::KeyRange;
use crate::types::constants::HalfSteps;

/// Which accidental to prefer when naming the black keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Spelling {
    #[default]
    Sharp,
    Flat,
}

/// How a pattern is expanded when it is added to a dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Expansion {
    /// Register the pattern exactly as given
    #[default]
    Plain,
    /// Register every cyclic rotation, recording the rotation offset
    Rotations,
    /// Register root position and every chord inversion, recording the root index
    Inversions,
}

/// Settings for a `PatternDictionary`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictionaryConfig {
    pub range: KeyRange<HalfSteps>,
    pub expansion: Expansion,
}

impl DictionaryConfig {
    pub fn new(range: KeyRange<HalfSteps>, expansion: Expansion) -> Self {
        Self { range, expansion }
    }

    /// Church modes: whole and half steps only
    pub fn modes() -> Self {
        Self::new(KeyRange::STEPS, Expansion::Plain)
    }

    /// Common scales, which may contain augmented seconds
    pub fn scales() -> Self {
        Self::new(KeyRange::SCALE_STEPS, Expansion::Plain)
    }

    /// Scale families matched from any degree
    pub fn rotations() -> Self {
        Self::new(KeyRange::SCALE_STEPS, Expansion::Rotations)
    }

    /// Chords: any interval between two distinct tones inside an octave
    pub fn chords() -> Self {
        Self::new(KeyRange::CHORD_INTERVALS, Expansion::Inversions)
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self::chords()
    }
}

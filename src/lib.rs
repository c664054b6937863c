//! # Tonality
//!
//! Tonality is a Rust library for recognising scales and chords from the
//! intervals between their notes. Scales and chord shapes are described as
//! interval patterns, stored in a fixed-radix trie keyed by half steps, and
//! looked up again from pitch classes or voiced pitches.
//!
//! ## Modules
//!
//! - `types`: pitches, pitch classes, interval patterns and the well-known
//!   scale and chord shapes, plus voiced chords and diatonic chord building.
//! - `trie`: a generic trie over small integer keys in a validated range.
//! - `dictionary`: the pattern dictionary and the prebuilt mode, scale,
//!   rotation and chord dictionaries.
//! - `recognizer`: chord naming from pitch classes or ordered pitches.
//! - `config`: dictionary presets and note spelling.
//!
//! ```
//! use tonality::{create_chord_dictionary, get_chord_name, PitchClass, PitchNamer};
//!
//! let dict = create_chord_dictionary();
//! let classes = [PitchClass::C, PitchClass::E, PitchClass::G];
//! let name = get_chord_name(&dict, &PitchNamer::sharp(), &classes);
//! assert_eq!(name.as_deref(), Some("C Major"));
//! ```

pub mod config;
pub mod dictionary;
pub mod error;
pub mod recognizer;
pub mod trie;
pub mod types;

// Re-export commonly used types and functions for convenience
pub use crate::config::{DictionaryConfig, Expansion, Spelling};
pub use crate::dictionary::{
    build_mode_dictionary, build_rotation_dictionary, build_scale_dictionary,
    create_chord_dictionary, Entry, PatternDictionary,
};
pub use crate::error::{Result, TheoryError};
pub use crate::recognizer::{
    get_chord_name, get_pitches_name, identify_pitch_classes, identify_pitches, ChordMatch,
};
pub use crate::trie::{KeyRange, Trie};
pub use crate::types::{Chord, ChordFactory, Interval, Pattern, Pitch, PitchClass, PitchNamer};

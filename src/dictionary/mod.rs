//! Pattern dictionaries: names looked up by interval signature
//!
//! A `PatternDictionary` wraps a half-step `Trie` and decides how a pattern is
//! registered: as given, as all its rotations (scale families read from any
//! degree), or as all its inversions (chords read from any bass note).
//!
//! Dictionaries are built once and then only read. Several entries may share
//! one signature; lookups return them in insertion order.

mod builders;

pub use builders::{
    build_mode_dictionary, build_rotation_dictionary, build_scale_dictionary,
    create_chord_dictionary,
};

use crate::config::{DictionaryConfig, Expansion};
use crate::trie::{KeyRange, Trie};
use crate::types::constants::HalfSteps;
use crate::types::pattern::Pattern;
use log::{debug, trace};

/// A value stored against an interval signature
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A scale or mode. `offset` is the rotation of the registered pattern
    /// that produced this signature (0 when registered as given).
    Scale { name: String, offset: usize },
    /// A chord suffix such as `" Major"`. `root_index` is the position of the
    /// chord's root among the sorted tones (0 in root position).
    Chord { name: String, root_index: usize },
}

impl Entry {
    pub fn scale(name: &str, offset: usize) -> Self {
        Entry::Scale {
            name: name.to_string(),
            offset,
        }
    }

    pub fn chord(name: &str, root_index: usize) -> Self {
        Entry::Chord {
            name: name.to_string(),
            root_index,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Entry::Scale { name, .. } | Entry::Chord { name, .. } => name,
        }
    }
}

/// A trie of interval patterns to named entries
#[derive(Debug)]
pub struct PatternDictionary {
    trie: Trie<HalfSteps, Entry>,
    expansion: Expansion,
}

impl PatternDictionary {
    /// An empty dictionary accepting intervals in `range`, inserting plainly
    pub fn new(range: KeyRange<HalfSteps>) -> Self {
        Self::from_config(&DictionaryConfig::new(range, Expansion::Plain))
    }

    pub fn from_config(config: &DictionaryConfig) -> Self {
        PatternDictionary {
            trie: Trie::with_range(config.range),
            expansion: config.expansion,
        }
    }

    pub fn range(&self) -> KeyRange<HalfSteps> {
        self.trie.range()
    }

    pub fn expansion(&self) -> Expansion {
        self.expansion
    }

    /// Number of entries across all signatures
    pub fn len(&self) -> usize {
        self.trie.value_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Register `entry` under exactly this pattern.
    ///
    /// Returns `false` if an interval of the pattern is outside the
    /// dictionary's range; nothing is registered in that case.
    pub fn add_pattern(&mut self, pattern: &Pattern, entry: Entry) -> bool {
        let added = self.trie.add_value(pattern.intervals(), entry);
        if !added {
            debug!(
                "Pattern {} has intervals outside {:?}; not registered",
                pattern,
                self.trie.range()
            );
        }
        added
    }

    /// Register a scale under its pattern as given
    pub fn add_scale(&mut self, pattern: &Pattern, name: &str) -> usize {
        self.add_pattern(pattern, Entry::scale(name, 0)) as usize
    }

    /// Register every rotation of the pattern, each recording its offset, so
    /// the family is recognised from any starting degree
    pub fn add_rotations(&mut self, pattern: &Pattern, name: &str) -> usize {
        (0..pattern.len())
            .map(|offset| {
                let rotation = pattern.offset(offset as isize);
                self.add_pattern(&rotation, Entry::scale(name, offset)) as usize
            })
            .sum()
    }

    /// Register a chord in root position and in each inversion.
    ///
    /// The `k`-th inversion of an `n`-note chord records root index `n - k`:
    /// after `k` inversions the root is the `(n - k)`-th lowest tone.
    ///
    /// Shapes that reproduce themselves under inversion (augmented triad,
    /// diminished seventh) are registered once in root position, since any
    /// other registration would claim another root's root position. Shapes
    /// wider than an octave cannot be inverted and are also registered once.
    pub fn add_inversions(&mut self, pattern: &Pattern, name: &str) -> usize {
        if !pattern.spans_within_octave() {
            debug!(
                "{}: {} spans {} half steps, registering root position only",
                name.trim(),
                pattern,
                pattern.sum()
            );
            return self.add_pattern(pattern, Entry::chord(name, 0)) as usize;
        }

        if pattern.is_inversion_symmetric() {
            debug!(
                "{}: {} is symmetric under inversion, registering root position only",
                name.trim(),
                pattern
            );
            return self.add_pattern(pattern, Entry::chord(name, 0)) as usize;
        }

        let notes = pattern.note_count();
        pattern
            .inversions()
            .enumerate()
            .map(|(k, inversion)| {
                let root_index = (notes - k) % notes;
                trace!("{}: {} root index {}", name.trim(), inversion, root_index);
                self.add_pattern(&inversion, Entry::chord(name, root_index)) as usize
            })
            .sum()
    }

    /// Register a chord given in open form (adjacent gaps, root position),
    /// together with its closed form when it fits in an octave.
    ///
    /// The open form serves recognition of voiced pitches; the closed form
    /// serves recognition of pitch-class sets.
    pub fn add_chord(&mut self, open: &Pattern, name: &str) -> usize {
        let mut added = self.add_inversions(open, name);
        if let Some(closed) = open.closed() {
            if closed != *open {
                added += self.add_inversions(&closed, name);
            }
        }
        added
    }

    /// Register a pattern using the dictionary's configured expansion
    pub fn insert(&mut self, pattern: &Pattern, name: &str) -> usize {
        match self.expansion {
            Expansion::Plain => self.add_scale(pattern, name),
            Expansion::Rotations => self.add_rotations(pattern, name),
            Expansion::Inversions => self.add_inversions(pattern, name),
        }
    }

    /// Every entry registered under exactly this pattern, in insertion order
    pub fn get_entries(&self, pattern: &Pattern) -> &[Entry] {
        self.trie.find_values(pattern.intervals())
    }

    /// Name of the first entry registered under this pattern
    pub fn get_name(&self, pattern: &Pattern) -> Option<&str> {
        self.get_entries(pattern).first().map(Entry::name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{chords, scales};

    fn chord_dictionary() -> PatternDictionary {
        PatternDictionary::from_config(&DictionaryConfig::chords())
    }

    #[test]
    fn test_plain_registration() {
        let mut dict = PatternDictionary::new(KeyRange::STEPS);
        assert_eq!(dict.add_scale(&scales::major_scale(), "Major"), 1);
        assert_eq!(dict.get_name(&scales::major_scale()), Some("Major"));
        assert_eq!(dict.get_name(&scales::dorian_mode()), None);
    }

    #[test]
    fn test_out_of_range_pattern_is_skipped() {
        let mut dict = PatternDictionary::new(KeyRange::STEPS);
        assert_eq!(dict.add_scale(&scales::harmonic_minor_scale(), "Harmonic Minor"), 0);
        assert!(dict.is_empty());
        assert!(dict.get_entries(&scales::harmonic_minor_scale()).is_empty());
    }

    #[test]
    fn test_rotations_record_their_offset() {
        let mut dict = PatternDictionary::from_config(&DictionaryConfig::rotations());
        let major = scales::major_scale();
        assert_eq!(dict.insert(&major, "Diatonic"), 7);

        for k in 0..7 {
            let entries = dict.get_entries(&major.offset(k));
            assert_eq!(entries, &[Entry::scale("Diatonic", k as usize)]);
        }
    }

    #[test]
    fn test_inversions_record_their_root() {
        let mut dict = chord_dictionary();
        assert_eq!(dict.add_inversions(&chords::major_triad(), " Major"), 3);

        assert_eq!(dict.get_entries(&chords::major_triad()), &[Entry::chord(" Major", 0)]);
        let first = chords::major_triad().invert();
        assert_eq!(dict.get_entries(&first), &[Entry::chord(" Major", 2)]);
        let second = first.invert();
        assert_eq!(dict.get_entries(&second), &[Entry::chord(" Major", 1)]);
    }

    #[test]
    fn test_seventh_inversions() {
        let mut dict = chord_dictionary();
        let closed = chords::dominant_seventh().closed().unwrap();
        assert_eq!(dict.add_inversions(&closed, " Dominant Seventh"), 4);

        let roots: Vec<usize> = closed
            .inversions()
            .map(|p| match &dict.get_entries(&p)[0] {
                Entry::Chord { root_index, .. } => *root_index,
                other => panic!("unexpected entry {:?}", other),
            })
            .collect();
        assert_eq!(roots, [0, 3, 2, 1]);
    }

    #[test]
    fn test_augmented_triad_registered_once() {
        let mut dict = chord_dictionary();
        assert_eq!(dict.add_chord(&chords::augmented_triad(), " Augmented"), 2);
        assert_eq!(
            dict.get_entries(&chords::augmented_triad()),
            &[Entry::chord(" Augmented", 0)]
        );
        assert_eq!(
            dict.get_entries(&Pattern::new(vec![4, 4, 4]).unwrap()),
            &[Entry::chord(" Augmented", 0)]
        );
    }

    #[test]
    fn test_extended_chords_root_position_only() {
        let mut dict = chord_dictionary();
        assert_eq!(dict.add_chord(&chords::dominant_ninth(), " Dominant Ninth"), 1);
        assert_eq!(dict.get_name(&chords::dominant_ninth()), Some(" Dominant Ninth"));
    }

    #[test]
    fn test_add_chord_registers_both_forms() {
        let mut dict = chord_dictionary();
        assert_eq!(dict.add_chord(&chords::major_triad(), " Major"), 6);
        assert_eq!(dict.get_name(&Pattern::new(vec![3, 5, 4]).unwrap()), Some(" Major"));
        assert_eq!(dict.get_name(&Pattern::new(vec![5, 4]).unwrap()), Some(" Major"));
    }

    #[test]
    fn test_insert_with_inversion_expansion() {
        let mut dict = PatternDictionary::from_config(&DictionaryConfig::chords());
        let closed = chords::minor_triad().closed().unwrap();
        assert_eq!(dict.insert(&closed, " Minor"), 3);

        let roots: Vec<&[Entry]> = closed.inversions().map(|p| dict.get_entries(&p)).collect();
        assert_eq!(
            roots,
            [
                &[Entry::chord(" Minor", 0)][..],
                &[Entry::chord(" Minor", 2)][..],
                &[Entry::chord(" Minor", 1)][..],
            ]
        );
        assert_eq!(dict.get_name(&chords::minor_triad()), None);
    }

    #[test]
    fn test_oversized_pattern_is_rejected_quietly() {
        let mut dict = chord_dictionary();
        let wide = Pattern::new(vec![127; 300]).unwrap();
        assert_eq!(dict.add_inversions(&wide, " X"), 0);
        assert_eq!(dict.add_chord(&wide, " X"), 0);

        let falling = Pattern::new(vec![-128; 300]).unwrap();
        assert_eq!(dict.add_chord(&falling, " Y"), 0);
        assert!(dict.is_empty());
    }

    #[test]
    fn test_shared_signature_keeps_every_entry() {
        let mut dict = PatternDictionary::new(KeyRange::SCALE_STEPS);
        dict.add_scale(&scales::minor_scale(), "Minor");
        dict.add_scale(&scales::aeolian_mode(), "Aeolian");
        assert_eq!(
            dict.get_entries(&scales::minor_scale()),
            &[Entry::scale("Minor", 0), Entry::scale("Aeolian", 0)]
        );
        assert_eq!(dict.get_name(&scales::aeolian_mode()), Some("Minor"));
        assert_eq!(dict.len(), 2);
    }
}

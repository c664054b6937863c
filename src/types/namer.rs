//! Display names for pitch classes.
//!
//! The name of a tone depends on context: in B♭ major the black key between A
//! and B is B♭ because the key already contains an A. The data types never
//! carry a spelling; callers pick a namer when rendering.

use crate::config::Spelling;
use crate::types::pitch::PitchClass;

const SHARP_NAMES: [&str; 12] = [
    "C", "C♯", "D", "D♯", "E", "F", "F♯", "G", "G♯", "A", "A♯", "B",
];

const FLAT_NAMES: [&str; 12] = [
    "C", "D♭", "D", "E♭", "E", "F", "G♭", "G", "A♭", "A", "B♭", "B",
];

/// A total lookup from pitch class to one of the twelve chromatic names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PitchNamer {
    names: &'static [&'static str; 12],
}

impl PitchNamer {
    /// Describe the black keys with sharps (♯)
    pub const fn sharp() -> Self {
        PitchNamer {
            names: &SHARP_NAMES,
        }
    }

    /// Describe the black keys with flats (♭)
    pub const fn flat() -> Self {
        PitchNamer { names: &FLAT_NAMES }
    }

    pub fn for_spelling(spelling: Spelling) -> Self {
        match spelling {
            Spelling::Sharp => Self::sharp(),
            Spelling::Flat => Self::flat(),
        }
    }

    pub fn name(&self, class: PitchClass) -> &'static str {
        self.names[class.value() as usize]
    }
}

impl Default for PitchNamer {
    fn default() -> Self {
        Self::for_spelling(Spelling::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_names_agree() {
        let sharp = PitchNamer::sharp();
        let flat = PitchNamer::flat();
        for class in [
            PitchClass::C,
            PitchClass::D,
            PitchClass::E,
            PitchClass::F,
            PitchClass::G,
            PitchClass::A,
            PitchClass::B,
        ] {
            assert_eq!(sharp.name(class), flat.name(class));
        }
    }

    #[test]
    fn test_black_keys() {
        assert_eq!(PitchNamer::sharp().name(PitchClass::new(1)), "C♯");
        assert_eq!(PitchNamer::flat().name(PitchClass::new(1)), "D♭");
        assert_eq!(PitchNamer::flat().name(PitchClass::new(10)), "B♭");
    }

    #[test]
    fn test_spelling_selection() {
        assert_eq!(PitchNamer::for_spelling(Spelling::Flat), PitchNamer::flat());
        assert_eq!(PitchNamer::default(), PitchNamer::sharp());
    }
}

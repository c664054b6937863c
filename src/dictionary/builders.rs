use super::PatternDictionary;
use crate::config::DictionaryConfig;
use crate::types::{chords, scales};
use log::debug;

/// The seven church modes, each under its own name
pub fn build_mode_dictionary() -> PatternDictionary {
    let mut dict = PatternDictionary::from_config(&DictionaryConfig::modes());
    for (name, pattern) in scales::modes() {
        dict.add_scale(&pattern, name);
    }
    debug!("Built mode dictionary with {} entries", dict.len());
    dict
}

/// The common named scales
pub fn build_scale_dictionary() -> PatternDictionary {
    let mut dict = PatternDictionary::from_config(&DictionaryConfig::scales());
    dict.add_scale(&scales::major_scale(), "Major");
    dict.add_scale(&scales::minor_scale(), "Minor");
    dict.add_scale(&scales::harmonic_minor_scale(), "Harmonic Minor");
    dict.add_scale(
        &scales::melodic_minor_ascending_scale(),
        "Ascending Melodic Minor",
    );
    dict.add_scale(&scales::major_pentatonic_scale(), "Pentatonic Major");
    dict.add_scale(&scales::minor_pentatonic_scale(), "Pentatonic Minor");
    debug!("Built scale dictionary with {} entries", dict.len());
    dict
}

/// Scale families recognised from any starting degree. Each entry records
/// which rotation of the family's pattern it matched.
pub fn build_rotation_dictionary() -> PatternDictionary {
    let mut dict = PatternDictionary::from_config(&DictionaryConfig::rotations());
    dict.insert(&scales::major_scale(), "Diatonic");
    dict.insert(&scales::harmonic_minor_scale(), "Harmonic Minor");
    dict.insert(&scales::melodic_minor_ascending_scale(), "Melodic Minor");
    dict.insert(&scales::major_pentatonic_scale(), "Pentatonic");
    dict.insert(&scales::symmetric_scale(), "Octatonic");
    debug!("Built rotation dictionary with {} entries", dict.len());
    dict
}

/// Every known chord shape with all of its inversions, in both open and
/// closed form
pub fn create_chord_dictionary() -> PatternDictionary {
    let mut dict = PatternDictionary::from_config(&DictionaryConfig::chords());
    for (suffix, pattern) in chords::qualities() {
        dict.add_chord(&pattern, suffix);
    }
    debug!("Built chord dictionary with {} entries", dict.len());
    dict
}

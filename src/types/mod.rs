// src/types/mod.rs

pub mod chord;
pub mod chord_factory;
pub mod chords;
pub mod constants;
pub mod namer;
pub mod pattern;
pub mod pitch;
pub mod scales;
pub mod singer;

pub use chord::Chord;
pub use chord_factory::{ChordFactory, Interval};
pub use constants::*;
pub use namer::PitchNamer;
pub use pattern::{Pattern, RootedPattern};
pub use pitch::{Pitch, PitchClass};
pub use scales::ScaleDegree;
pub use singer::PatternSinger;

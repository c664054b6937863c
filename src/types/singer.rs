use crate::types::pattern::Pattern;
use crate::types::pitch::Pitch;

/// Produces pitches indefinitely by applying a pattern's intervals in turn.
///
/// Unless the pattern sums to zero the sequence does not loop: an ascending
/// scale keeps climbing octave after octave. Use `take` to bound it.
#[derive(Debug, Clone)]
pub struct PatternSinger {
    pattern: Pattern,
    next_pitch: Pitch,
    position: usize,
}

impl PatternSinger {
    pub fn new(pattern: Pattern, start: Pitch) -> Self {
        Self {
            pattern,
            next_pitch: start,
            position: 0,
        }
    }
}

impl Iterator for PatternSinger {
    type Item = Pitch;

    fn next(&mut self) -> Option<Pitch> {
        let pitch = self.next_pitch;
        self.next_pitch
            .transpose(self.pattern.at(self.position as isize));
        self.position = (self.position + 1) % self.pattern.len();
        Some(pitch)
    }
}

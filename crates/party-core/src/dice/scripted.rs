//! A dice source that replays a fixed sequence of faces.

use super::{D20_SIDES, DiceSource};

/// Replays the given faces in order, starting over after the last one.
///
/// Faces are clamped onto the die. An empty script always shows 1.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    faces: Vec<u32>,
    cursor: usize,
}

impl ScriptedDice {
    /// Create a script from a sequence of faces.
    pub fn new(faces: impl IntoIterator<Item = u32>) -> Self {
        Self {
            faces: faces.into_iter().map(|f| f.clamp(1, D20_SIDES)).collect(),
            cursor: 0,
        }
    }

    /// Number of faces thrown so far.
    pub fn thrown(&self) -> usize {
        self.cursor
    }
}

impl DiceSource for ScriptedDice {
    fn d20(&mut self) -> u32 {
        if self.faces.is_empty() {
            return 1;
        }
        let face = self.faces[self.cursor % self.faces.len()];
        self.cursor += 1;
        face
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_in_order_and_wraps() {
        let mut dice = ScriptedDice::new([3, 17, 9]);
        let faces: Vec<u32> = (0..5).map(|_| dice.d20()).collect();
        assert_eq!(faces, vec![3, 17, 9, 3, 17]);
        assert_eq!(dice.thrown(), 5);
    }

    #[test]
    fn faces_clamped_to_die() {
        let mut dice = ScriptedDice::new([0, 42]);
        assert_eq!(dice.d20(), 1);
        assert_eq!(dice.d20(), 20);
    }

    #[test]
    fn empty_script_shows_one() {
        let mut dice = ScriptedDice::default();
        assert_eq!(dice.d20(), 1);
        assert_eq!(dice.d20(), 1);
    }
}

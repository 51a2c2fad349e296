//! Twenty-sided dice and the sources that throw them.
//!
//! Every roll in the game is a single d20 plus a flat modifier. The face
//! comes from a [`DiceSource`]: [`RandomDice`] for real play and
//! [`ScriptedDice`] when a fixed sequence of faces is needed.

pub mod scripted;

pub use scripted::ScriptedDice;

use rand::Rng;
use rand::rngs::ThreadRng;

/// Number of faces on the only die the game uses.
pub const D20_SIDES: u32 = 20;

/// Something that can produce d20 faces.
pub trait DiceSource {
    /// Throw one d20, returning a face in `1..=20`.
    fn d20(&mut self) -> u32;
}

/// Uniform d20 throws backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomDice<R = ThreadRng> {
    rng: R,
}

impl RandomDice {
    /// Dice backed by the thread-local generator.
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for RandomDice {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomDice<R> {
    /// Dice backed by the given generator.
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> DiceSource for RandomDice<R> {
    fn d20(&mut self) -> u32 {
        self.rng.random_range(1..=D20_SIDES)
    }
}

/// Throw a d20 and add `modifier`. The total is not clamped to the die,
/// only saturated at the bounds of `i32`.
pub fn roll_d20<D: DiceSource + ?Sized>(dice: &mut D, modifier: i32) -> i32 {
    (dice.d20() as i32).saturating_add(modifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn thread_dice_stay_on_the_die() {
        let mut dice = RandomDice::new();
        for _ in 0..500 {
            assert!((1..=20).contains(&dice.d20()));
        }
    }

    #[test]
    fn faces_are_roughly_uniform() {
        let mut dice = RandomDice::from_rng(StdRng::seed_from_u64(7));
        let mut counts = [0u32; 20];
        for _ in 0..20_000 {
            counts[(dice.d20() - 1) as usize] += 1;
        }
        // Expected 1000 per face; the band is far wider than the spread.
        for (face, count) in counts.iter().enumerate() {
            assert!(
                (800..=1200).contains(count),
                "face {} came up {count} times",
                face + 1
            );
        }
    }

    #[test]
    fn seeded_dice_are_repeatable() {
        let mut a = RandomDice::from_rng(StdRng::seed_from_u64(99));
        let mut b = RandomDice::from_rng(StdRng::seed_from_u64(99));
        for _ in 0..50 {
            assert_eq!(a.d20(), b.d20());
        }
    }

    #[test]
    fn modifier_is_added_unclamped() {
        let mut dice = ScriptedDice::new([20, 1]);
        assert_eq!(roll_d20(&mut dice, 5), 25);
        assert_eq!(roll_d20(&mut dice, -3), -2);
    }

    #[test]
    fn extreme_modifiers_saturate() {
        let mut dice = ScriptedDice::new([20]);
        assert_eq!(roll_d20(&mut dice, i32::MAX), i32::MAX);
        assert_eq!(roll_d20(&mut dice, i32::MIN), i32::MIN + 20);
    }

    proptest! {
        #[test]
        fn roll_lands_in_shifted_range(seed in any::<u64>(), modifier in -1000i32..1000) {
            let mut dice = RandomDice::from_rng(StdRng::seed_from_u64(seed));
            let total = roll_d20(&mut dice, modifier);
            prop_assert!(total >= 1 + modifier);
            prop_assert!(total <= 20 + modifier);
        }
    }
}

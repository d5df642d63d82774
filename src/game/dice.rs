use crate::core::GameRng;

/// A set of six-sided dice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dice {
    count: u32,
}

impl Dice {
    /// `count` six-sided dice.
    #[must_use]
    pub fn new(count: u32) -> Self {
        Self { count }
    }

    /// Number of dice.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Roll every die and return the sum.
    pub fn roll(&self, rng: &mut GameRng) -> usize {
        (0..self.count).map(|_| rng.gen_range(1..=6usize)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_die_range() {
        let dice = Dice::new(1);
        let mut rng = GameRng::new(11);

        let rolls: Vec<_> = (0..300).map(|_| dice.roll(&mut rng)).collect();
        assert!(rolls.iter().all(|r| (1..=6).contains(r)));
        for face in 1..=6 {
            assert!(rolls.contains(&face));
        }
    }

    #[test]
    fn test_two_dice_range() {
        let dice = Dice::new(2);
        let mut rng = GameRng::new(11);

        for _ in 0..300 {
            let roll = dice.roll(&mut rng);
            assert!((2..=12).contains(&roll));
        }
    }
}

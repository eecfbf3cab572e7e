//! Throwing sticks: the chance model of the game.
//!
//! Four two-faced sticks are thrown. The number of dark faces showing gives
//! the move distance 1-4; four light faces count as 5. With fair sticks:
//!
//! | throw | ways | probability |
//! |-------|------|-------------|
//! | 1     | 4    | 4/16        |
//! | 2     | 6    | 6/16        |
//! | 3     | 4    | 4/16        |
//! | 4     | 1    | 1/16        |
//! | 5     | 1    | 1/16        |
//!
//! The table is exact in binary floating point, so the five probabilities sum
//! to exactly 1.0.

use std::fmt;
use std::sync::OnceLock;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use senet_core::{ChanceDistribution, Result, SenetError};
use serde::{Deserialize, Serialize};

/// Number of sticks thrown per turn
pub const STICKS: usize = 4;

/// A throw outcome: move distance 1-5
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Throw(pub(crate) u8);

impl Throw {
    /// All outcomes in ascending order
    pub const ALL: [Throw; 5] = [Throw(1), Throw(2), Throw(3), Throw(4), Throw(5)];

    /// Validate a raw outcome.
    ///
    /// # Errors
    /// Returns `SenetError::InvalidThrow` outside 1..=5.
    pub fn new(value: u8) -> Result<Self> {
        if (1..=5).contains(&value) {
            Ok(Throw(value))
        } else {
            Err(SenetError::InvalidThrow(value))
        }
    }

    /// Returns the move distance
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Outcome for a set of stick faces (`true` = dark face up)
    pub fn from_faces(faces: [bool; STICKS]) -> Self {
        let dark = faces.iter().filter(|&&dark| dark).count() as u8;
        if dark == 0 {
            Throw(5)
        } else {
            Throw(dark)
        }
    }
}

impl TryFrom<u8> for Throw {
    type Error = SenetError;

    fn try_from(value: u8) -> Result<Self> {
        Throw::new(value)
    }
}

impl From<Throw> for u8 {
    fn from(throw: Throw) -> u8 {
        throw.0
    }
}

impl fmt::Debug for Throw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Throw({})", self.0)
    }
}

impl fmt::Display for Throw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Count the face combinations behind each outcome, indexed by throw value
fn throw_counts() -> [u32; 6] {
    let mut counts = [0u32; 6];
    for mask in 0u8..(1 << STICKS) {
        let mut faces = [false; STICKS];
        for (i, face) in faces.iter_mut().enumerate() {
            *face = mask & (1 << i) != 0;
        }
        counts[Throw::from_faces(faces).value() as usize] += 1;
    }
    counts
}

static PROBABILITIES: OnceLock<ChanceDistribution<Throw>> = OnceLock::new();

/// The fixed outcome distribution, in ascending outcome order.
pub fn probabilities() -> &'static ChanceDistribution<Throw> {
    PROBABILITIES.get_or_init(|| {
        let counts = throw_counts();
        let weights: Vec<(Throw, u32)> = Throw::ALL
            .iter()
            .map(|&throw| (throw, counts[throw.value() as usize]))
            .collect();
        // 16 combinations over five outcomes, every weight is positive
        ChanceDistribution::from_weights(&weights).expect("BUG: stick table is a valid distribution")
    })
}

/// All five outcomes with their exact probabilities, ascending.
///
/// Zero-probability outcomes would still be listed; chance nodes rely on a
/// complete enumeration.
pub fn enumerate() -> impl Iterator<Item = (Throw, f64)> {
    probabilities().iter()
}

/// One physical toss: the faces shown and the resulting throw
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct StickToss {
    /// `true` for a dark face
    pub faces: [bool; STICKS],
    pub throw: Throw,
}

/// Seedable source of stick throws.
///
/// This is the only place in the crate that draws randomness.
pub struct Sticks<R: Rng> {
    rng: R,
}

impl Sticks<ChaCha8Rng> {
    /// Reproducible sticks from a seed
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Sticks<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Throw the four sticks
    pub fn toss(&mut self) -> StickToss {
        let mut faces = [false; STICKS];
        for face in &mut faces {
            *face = self.rng.gen::<bool>();
        }
        StickToss {
            faces,
            throw: Throw::from_faces(faces),
        }
    }

    /// Draw one outcome
    pub fn sample(&mut self) -> Throw {
        self.toss().throw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throw_validation() {
        assert_eq!(Throw::new(0), Err(SenetError::InvalidThrow(0)));
        assert_eq!(Throw::new(6), Err(SenetError::InvalidThrow(6)));
        assert_eq!(Throw::new(5).map(Throw::value), Ok(5));
    }

    #[test]
    fn test_probabilities_exact() {
        let dist = probabilities();
        assert_eq!(dist.len(), 5);
        assert_eq!(dist.probability(Throw(1)), 4.0 / 16.0);
        assert_eq!(dist.probability(Throw(2)), 6.0 / 16.0);
        assert_eq!(dist.probability(Throw(3)), 4.0 / 16.0);
        assert_eq!(dist.probability(Throw(4)), 1.0 / 16.0);
        assert_eq!(dist.probability(Throw(5)), 1.0 / 16.0);
        assert_eq!(dist.total(), 1.0);
    }

    #[test]
    fn test_enumerate_ascending_and_complete() {
        let throws: Vec<u8> = enumerate().map(|(t, _)| t.value()).collect();
        assert_eq!(throws, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_faces() {
        assert_eq!(Throw::from_faces([false; 4]), Throw(5));
        assert_eq!(Throw::from_faces([true; 4]), Throw(4));
        assert_eq!(Throw::from_faces([true, false, true, false]), Throw(2));
    }

    #[test]
    fn test_seeded_sticks_reproducible() {
        let mut a = Sticks::seeded(7);
        let mut b = Sticks::seeded(7);
        let xs: Vec<Throw> = (0..64).map(|_| a.sample()).collect();
        let ys: Vec<Throw> = (0..64).map(|_| b.sample()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_sample_frequencies_follow_table() {
        let mut sticks = Sticks::seeded(2024);
        let n = 32_000;
        let mut counts = [0usize; 6];
        for _ in 0..n {
            counts[sticks.sample().value() as usize] += 1;
        }
        for (throw, p) in enumerate() {
            let freq = counts[throw.value() as usize] as f64 / n as f64;
            assert!((freq - p).abs() < 0.02, "throw {}: {} vs {}", throw, freq, p);
        }
    }
}

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Lowest face on a die.
pub const MIN_FACE: u8 = 1;
/// Highest face on a die.
pub const MAX_FACE: u8 = 6;

/// Source of die faces consumed by the turn executor.
pub trait DieSource {
    /// Roll a single die, returning a face in `1..=6`.
    fn roll_die(&mut self) -> u8;

    /// Roll `n` independent dice.
    fn roll_dice(&mut self, n: usize) -> Vec<u8> {
        (0..n).map(|_| self.roll_die()).collect()
    }
}

/// Uniform six-sided dice backed by a seeded ChaCha20 generator.
///
/// The same seed always produces the same sequence of faces.
#[derive(Debug, Clone)]
pub struct Dice {
    rng: ChaCha20Rng,
    seed: u64,
}

impl Dice {
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl DieSource for Dice {
    fn roll_die(&mut self) -> u8 {
        self.rng.random_range(MIN_FACE..=MAX_FACE)
    }
}

/// Dice that replay a fixed sequence of faces, cycling once exhausted.
///
/// Faces outside `1..=6` are clamped into range.
///
/// ```
/// use twentyone_engine::dice::{DieSource, ScriptedDice};
///
/// let mut dice = ScriptedDice::new(vec![2, 3]);
/// assert_eq!(dice.roll_dice(3), vec![2, 3, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    faces: Vec<u8>,
    position: usize,
}

impl ScriptedDice {
    pub fn new(faces: Vec<u8>) -> Self {
        let faces = if faces.is_empty() {
            vec![MIN_FACE]
        } else {
            faces
                .into_iter()
                .map(|f| f.clamp(MIN_FACE, MAX_FACE))
                .collect()
        };
        Self { faces, position: 0 }
    }

    /// Number of faces drawn so far.
    pub fn drawn(&self) -> usize {
        self.position
    }
}

impl DieSource for ScriptedDice {
    fn roll_die(&mut self) -> u8 {
        let face = self.faces[self.position % self.faces.len()];
        self.position += 1;
        face
    }
}

impl<D: DieSource + ?Sized> DieSource for &mut D {
    fn roll_die(&mut self) -> u8 {
        (**self).roll_die()
    }
}

//! RNG module - piece selection
//!
//! Every spawn picks one of the seven kinds uniformly at random (no bag, no
//! history). [`SimpleRng`] is a small seeded LCG so a game can be replayed from
//! its seed; [`PieceSource::Sequence`] replaces randomness with a fixed cycle
//! for tests and demos.

use arrayvec::ArrayVec;

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce a short cycle
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits (multiply-shift) since the low bits of an LCG have
    /// very short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (((self.next_u32() as u64) * (max as u64)) >> 32) as u32
    }

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Longest fixed sequence a [`PieceSource::Sequence`] can hold
pub const MAX_SEQUENCE_LEN: usize = 32;

/// Where spawned piece kinds come from.
#[derive(Debug, Clone)]
pub enum PieceSource {
    /// Uniform pick from all seven kinds
    Uniform(SimpleRng),
    /// Cycle through a fixed list, starting at `next`
    Sequence {
        kinds: ArrayVec<PieceKind, MAX_SEQUENCE_LEN>,
        next: usize,
    },
}

impl PieceSource {
    /// Uniform source seeded with `seed`
    pub fn uniform(seed: u32) -> Self {
        PieceSource::Uniform(SimpleRng::new(seed))
    }

    /// Cycling source over `kinds` (truncated to [`MAX_SEQUENCE_LEN`]).
    ///
    /// An empty list falls back to cycling all seven kinds in color order.
    pub fn sequence(kinds: &[PieceKind]) -> Self {
        let mut list: ArrayVec<PieceKind, MAX_SEQUENCE_LEN> =
            kinds.iter().copied().take(MAX_SEQUENCE_LEN).collect();
        if list.is_empty() {
            list.extend(PieceKind::ALL);
        }
        PieceSource::Sequence {
            kinds: list,
            next: 0,
        }
    }

    /// Draw the next kind
    pub fn next_kind(&mut self) -> PieceKind {
        match self {
            PieceSource::Uniform(rng) => PieceKind::ALL[rng.next_range(7) as usize],
            PieceSource::Sequence { kinds, next } => {
                let kind = kinds[*next % kinds.len()];
                *next = (*next + 1) % kinds.len();
                kind
            }
        }
    }
}

impl Default for PieceSource {
    fn default() -> Self {
        Self::uniform(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        assert_eq!(SimpleRng::new(0).state(), 1);
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..10_000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn test_uniform_source_hits_every_kind() {
        let mut source = PieceSource::uniform(12345);
        let mut counts = [0u32; 7];
        for _ in 0..7_000 {
            let kind = source.next_kind();
            counts[(kind.color_index() - 1) as usize] += 1;
        }
        // Expect about 1000 each; allow a wide band.
        for (i, &n) in counts.iter().enumerate() {
            assert!((700..1300).contains(&n), "kind {} drawn {} times", i, n);
        }
    }

    #[test]
    fn test_sequence_source_cycles() {
        let mut source = PieceSource::sequence(&[PieceKind::T, PieceKind::I]);
        assert_eq!(source.next_kind(), PieceKind::T);
        assert_eq!(source.next_kind(), PieceKind::I);
        assert_eq!(source.next_kind(), PieceKind::T);
    }

    #[test]
    fn test_empty_sequence_falls_back_to_all_kinds() {
        let mut source = PieceSource::sequence(&[]);
        let drawn: Vec<PieceKind> = (0..7).map(|_| source.next_kind()).collect();
        assert_eq!(drawn, PieceKind::ALL.to_vec());
    }
}

//! Injectable random number generation.
//!
//! ## Key Features
//!
//! - **Single source**: every draw in a match (dice, no-damage check, AI
//!   shuffle) goes through one `RandomSource` owned by the match
//! - **Deterministic**: `GameRng` with the same seed produces the same match
//! - **Context streams**: cosmetic randomness (flavor text) draws from an
//!   independent stream so it never shifts gameplay rolls
//! - **Scripted**: `ScriptedRng` replays fixed values for exact tests
//!
//! ```
//! use furry_fists::core::{GameRng, RandomSource};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! assert_eq!(a.roll_die(), b.roll_die());
//! assert!((1..=6).contains(&a.roll_die()));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;
use std::ops::Range;

use super::action::Attack;

/// Source of every random draw the engine makes.
///
/// Implementors only need `next_in`; the game-level draws are derived
/// from it.
pub trait RandomSource {
    /// Uniform integer in the half-open `range`.
    fn next_in(&mut self, range: Range<u32>) -> u32;

    /// Six-sided die roll in `1..=6`.
    fn roll_die(&mut self) -> u8 {
        self.next_in(1..7) as u8
    }

    /// Percentile draw in `0..100`.
    fn roll_percent(&mut self) -> u32 {
        self.next_in(0..100)
    }

    /// Shuffle attacks in place (Fisher-Yates).
    fn shuffle_attacks(&mut self, attacks: &mut [Attack]) {
        for i in (1..attacks.len()).rev() {
            let j = self.next_in(0..(i as u32 + 1)) as usize;
            attacks.swap(i, j);
        }
    }
}

/// Deterministic RNG seeded from a `u64`.
///
/// Uses ChaCha8 so a recorded seed reproduces a whole match across
/// platforms.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this generator started from.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence. A session
    /// forks once per match so replays of one match don't shift the next.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        Self::new(
            self.seed
                .wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15)),
        )
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    /// The context is mixed in with FNV-1a, so the derived seed doesn't
    /// depend on the toolchain's hasher.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
        const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

        let hash = self
            .seed
            .to_le_bytes()
            .iter()
            .chain(context.as_bytes())
            .fold(FNV_OFFSET, |hash, &byte| {
                (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
            });
        Self::new(hash)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}

impl RandomSource for GameRng {
    fn next_in(&mut self, range: Range<u32>) -> u32 {
        self.inner.gen_range(range)
    }

    fn shuffle_attacks(&mut self, attacks: &mut [Attack]) {
        use rand::seq::SliceRandom;
        attacks.shuffle(&mut self.inner);
    }
}

/// Replays a fixed sequence of draws.
///
/// Each call to `next_in` consumes the next value. Running out of values,
/// or scripting a value outside the requested range, is a test bug and
/// panics.
///
/// ```
/// use furry_fists::core::{RandomSource, ScriptedRng};
///
/// let mut rng = ScriptedRng::new([4, 50]);
/// assert_eq!(rng.roll_die(), 4);
/// assert_eq!(rng.roll_percent(), 50);
/// assert!(rng.is_exhausted());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    values: VecDeque<u32>,
}

impl ScriptedRng {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Append more draws to the script.
    pub fn push(&mut self, values: impl IntoIterator<Item = u32>) {
        self.values.extend(values);
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.values.is_empty()
    }
}

impl RandomSource for ScriptedRng {
    fn next_in(&mut self, range: Range<u32>) -> u32 {
        let Some(value) = self.values.pop_front() else {
            panic!("scripted rng exhausted (wanted a value in {range:?})");
        };
        assert!(
            range.contains(&value),
            "scripted value {value} outside requested range {range:?}"
        );
        value
    }
}

//! # Deterministic pseudo-random stream
//!
//! [`Mulberry32`] is a 32-bit mix-and-scramble generator. Its state advances by a fixed odd
//! increment on every draw, and the output is scrambled by two rounds of xor-shift and
//! multiply. All arithmetic is wrapping `u32` arithmetic, which makes the stream
//! **bit-identical** across runs, platforms and any other implementation of the same
//! algorithm.
//!
//! The generator is only used by the synthetic trajectory source
//! ([`SyntheticGenerator`](crate::trajectories::synthetic::SyntheticGenerator)), but it
//! implements [`RngCore`] and [`SeedableRng`] so it also composes with the `rand` ecosystem.
//!
//! ## Example
//!
//! ```rust
//! use proxorbit::random::Mulberry32;
//!
//! let mut a = Mulberry32::new(7);
//! let mut b = Mulberry32::new(7);
//! assert_eq!(a.next_f64(), b.next_f64());
//! ```
//!
//! ## Seeds
//!
//! * [`Mulberry32::new`] takes the raw 32-bit state.
//! * [`Mulberry32::from_seed_value`] takes a caller-facing integer: zero falls back to
//!   [`DEFAULT_PRNG_SEED`], wider values are reduced modulo 2³² (two's complement for
//!   negative seeds).
use rand::rand_core::impls;
use rand::{RngCore, SeedableRng};

use crate::constants::DEFAULT_PRNG_SEED;

/// Odd increment added to the state on every draw.
const STATE_INCREMENT: u32 = 0x6D2B_79F5;

/// 2³², the normalization factor mapping a `u32` to `[0, 1)`.
const TWO_POW_32: f64 = 4_294_967_296.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Build a generator from its raw 32-bit state.
    pub fn new(seed: u32) -> Self {
        Mulberry32 { state: seed }
    }

    /// Build a generator from a caller-facing integer seed.
    ///
    /// Arguments
    /// -----------------
    /// * `seed`: any integer. `0` is treated as "no seed" and replaced by
    ///   [`DEFAULT_PRNG_SEED`]; other values are truncated to their low 32 bits.
    ///
    /// Return
    /// ----------
    /// * A generator whose stream depends only on `seed`.
    pub fn from_seed_value(seed: i64) -> Self {
        if seed == 0 {
            Self::new(DEFAULT_PRNG_SEED)
        } else {
            Self::new(seed as u32)
        }
    }

    /// Current internal state (the value the next draw will start from).
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Draw the next value, uniformly distributed in `[0, 1)`.
    ///
    /// The 32-bit output is divided by 2³², so the result is exact and the
    /// value `1.0` is never produced.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / TWO_POW_32
    }
}

impl Default for Mulberry32 {
    fn default() -> Self {
        Self::new(DEFAULT_PRNG_SEED)
    }
}

impl RngCore for Mulberry32 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(STATE_INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }
}

impl SeedableRng for Mulberry32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }

    /// Use the low 32 bits directly so `seed_from_u64(n)` and `new(n as u32)` agree.
    fn seed_from_u64(state: u64) -> Self {
        Self::new(state as u32)
    }
}

//! Deterministic random number generation for mock data.
//!
//! All generators in this crate draw from a seeded xorshift64 PRNG, so the
//! same seed always produces the same dataset. The default seed can be
//! overridden with the `MARKETMAP_SEED` environment variable.

use std::sync::OnceLock;

/// Default seed for reproducibility.
pub const DEFAULT_SEED: u64 = 42;

static GLOBAL_SEED: OnceLock<u64> = OnceLock::new();

/// Get the global seed from `MARKETMAP_SEED` or the default.
pub fn global_seed() -> u64 {
    *GLOBAL_SEED.get_or_init(|| {
        std::env::var("MARKETMAP_SEED")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_SEED)
    })
}

/// Simple deterministic PRNG (xorshift64).
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        // xorshift64 has a fixed point at zero.
        Self {
            state: if seed == 0 { 0x9e37_79b9_7f4a_7c15 } else { seed },
        }
    }

    /// Create an RNG whose stream is specific to one ticker symbol, derived
    /// from the global seed. Different symbols get uncorrelated streams.
    #[must_use]
    pub fn for_symbol(symbol: &str) -> Self {
        let mut h = global_seed();
        for b in symbol.bytes() {
            h = h.wrapping_mul(0x0100_0000_01b3) ^ u64::from(b);
        }
        Self::new(h)
    }

    /// Generate the next random u64.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Generate a random f64 in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Generate a random f64 in [min, max).
    pub fn next_f64_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }
}
